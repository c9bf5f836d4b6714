//! Touch tracker
//!
//! One flag per validatable item recording whether the user has blurred or
//! changed it since the last reset.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::field::FieldId;

/// Fixed set of six touch flags, all false at creation and after reset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TouchedFlags", into = "TouchedFlags")]
pub struct TouchedSet {
    flags: [bool; FieldId::COUNT],
}

impl TouchedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the flag for `field`. No-op if already set.
    pub fn mark_touched(&mut self, field: impl Into<FieldId>) {
        let field = field.into();
        let flag = &mut self.flags[field.index()];
        if !*flag {
            *flag = true;
            tracing::debug!(field = %field, "field touched");
        }
    }

    /// Same as [`mark_touched`](Self::mark_touched) for a raw DOM identifier
    pub fn mark_touched_by_id(&mut self, id: &str) -> Result<()> {
        let field: FieldId = id.parse()?;
        self.mark_touched(field);
        Ok(())
    }

    pub fn is_touched(&self, field: impl Into<FieldId>) -> bool {
        self.flags[field.into().index()]
    }

    pub fn reset_all(&mut self) {
        self.flags = [false; FieldId::COUNT];
        tracing::debug!("touched flags reset");
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldId, bool)> + '_ {
        FieldId::ALL.into_iter().map(|field| (field, self.is_touched(field)))
    }

    pub fn none_touched(&self) -> bool {
        self.flags.iter().all(|flag| !flag)
    }
}

impl FromIterator<FieldId> for TouchedSet {
    fn from_iter<I: IntoIterator<Item = FieldId>>(iter: I) -> Self {
        let mut set = TouchedSet::new();
        for field in iter {
            set.mark_touched(field);
        }
        set
    }
}

/// Wire shape: `{ "ownerName": false, ... }`, keyed like the DOM ids.
/// Missing keys default to untouched; unknown keys are rejected.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct TouchedFlags {
    #[serde(default)]
    owner_name: bool,
    #[serde(default)]
    make_model: bool,
    #[serde(default)]
    vehicle_type: bool,
    #[serde(default)]
    reg_number: bool,
    #[serde(default)]
    reg_date: bool,
    #[serde(default)]
    terms: bool,
}

impl From<TouchedFlags> for TouchedSet {
    fn from(f: TouchedFlags) -> Self {
        Self {
            flags: [
                f.owner_name,
                f.make_model,
                f.vehicle_type,
                f.reg_number,
                f.reg_date,
                f.terms,
            ],
        }
    }
}

impl From<TouchedSet> for TouchedFlags {
    fn from(set: TouchedSet) -> Self {
        let [owner_name, make_model, vehicle_type, reg_number, reg_date, terms] = set.flags;
        Self {
            owner_name,
            make_model,
            vehicle_type,
            reg_number,
            reg_date,
            terms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormError;
    use crate::field::TextField;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_set_is_untouched() {
        let set = TouchedSet::new();
        assert!(set.none_touched());
        assert_eq!(set.iter().count(), FieldId::COUNT);
    }

    #[test]
    fn test_mark_touched_is_idempotent() {
        let mut set = TouchedSet::new();
        set.mark_touched(TextField::RegNumber);
        let once = set;
        set.mark_touched(TextField::RegNumber);

        assert_eq!(set, once);
        assert!(set.is_touched(FieldId::RegNumber));
        assert!(!set.is_touched(FieldId::RegDate));
    }

    #[test]
    fn test_mark_touched_by_unknown_id_fails() {
        let mut set = TouchedSet::new();
        let err = set.mark_touched_by_id("licensePlate").unwrap_err();

        assert!(matches!(err, FormError::InvalidFieldId(_)));
        assert!(set.none_touched());
    }

    #[test]
    fn test_reset_all_clears_every_flag() {
        let mut set: TouchedSet = FieldId::ALL.into_iter().collect();
        assert!(FieldId::ALL.into_iter().all(|f| set.is_touched(f)));

        set.reset_all();
        assert_eq!(set, TouchedSet::new());
    }

    #[test]
    fn test_serializes_as_id_map() {
        let mut set = TouchedSet::new();
        set.mark_touched_by_id("terms").unwrap();

        let json = serde_json::to_value(set).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "ownerName": false,
                "makeModel": false,
                "vehicleType": false,
                "regNumber": false,
                "regDate": false,
                "terms": true,
            })
        );
    }

    #[test]
    fn test_deserializes_partial_map() {
        let set: TouchedSet =
            serde_json::from_value(serde_json::json!({ "regNumber": true })).unwrap();
        assert!(set.is_touched(FieldId::RegNumber));
        assert!(!set.is_touched(FieldId::Terms));

        let bad = serde_json::from_value::<TouchedSet>(serde_json::json!({ "vin": true }));
        assert!(bad.is_err());
    }
}
