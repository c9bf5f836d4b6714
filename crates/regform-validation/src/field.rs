//! Field catalogue for the registration form
//!
//! Five required text inputs plus the terms checkbox. Identifiers match the
//! DOM ids the browser binding looks up.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// Message shown when the terms checkbox is left unchecked
pub const TERMS_MESSAGE: &str = "You must accept terms";

/// One of the five required text inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextField {
    OwnerName,
    MakeModel,
    VehicleType,
    RegNumber,
    RegDate,
}

impl TextField {
    /// Every text field, in form order
    pub const ALL: [TextField; 5] = [
        TextField::OwnerName,
        TextField::MakeModel,
        TextField::VehicleType,
        TextField::RegNumber,
        TextField::RegDate,
    ];

    pub fn id(self) -> &'static str {
        FieldId::from(self).id()
    }

    /// Human-readable label used in the required message
    pub fn label(self) -> &'static str {
        match self {
            TextField::OwnerName => "Owner Name",
            TextField::MakeModel => "Make and Model",
            TextField::VehicleType => "Vehicle Type",
            TextField::RegNumber => "Registration Number",
            TextField::RegDate => "Registration Date",
        }
    }

    pub fn required_message(self) -> &'static str {
        match self {
            TextField::OwnerName => "Owner Name is required",
            TextField::MakeModel => "Make and Model is required",
            TextField::VehicleType => "Vehicle Type is required",
            TextField::RegNumber => "Registration Number is required",
            TextField::RegDate => "Registration Date is required",
        }
    }
}

impl fmt::Display for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Any validatable item: a text field or the terms checkbox
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    OwnerName,
    MakeModel,
    VehicleType,
    RegNumber,
    RegDate,
    Terms,
}

impl FieldId {
    pub const COUNT: usize = 6;

    pub const ALL: [FieldId; FieldId::COUNT] = [
        FieldId::OwnerName,
        FieldId::MakeModel,
        FieldId::VehicleType,
        FieldId::RegNumber,
        FieldId::RegDate,
        FieldId::Terms,
    ];

    /// DOM identifier of the control
    pub fn id(self) -> &'static str {
        match self {
            FieldId::OwnerName => "ownerName",
            FieldId::MakeModel => "makeModel",
            FieldId::VehicleType => "vehicleType",
            FieldId::RegNumber => "regNumber",
            FieldId::RegDate => "regDate",
            FieldId::Terms => "terms",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// The text field behind this id, `None` for the terms checkbox
    pub fn as_text(self) -> Option<TextField> {
        match self {
            FieldId::OwnerName => Some(TextField::OwnerName),
            FieldId::MakeModel => Some(TextField::MakeModel),
            FieldId::VehicleType => Some(TextField::VehicleType),
            FieldId::RegNumber => Some(TextField::RegNumber),
            FieldId::RegDate => Some(TextField::RegDate),
            FieldId::Terms => None,
        }
    }

    /// Message displayed when this item fails its constraint
    pub fn required_message(self) -> &'static str {
        match self.as_text() {
            Some(field) => field.required_message(),
            None => TERMS_MESSAGE,
        }
    }
}

impl From<TextField> for FieldId {
    fn from(field: TextField) -> Self {
        match field {
            TextField::OwnerName => FieldId::OwnerName,
            TextField::MakeModel => FieldId::MakeModel,
            TextField::VehicleType => FieldId::VehicleType,
            TextField::RegNumber => FieldId::RegNumber,
            TextField::RegDate => FieldId::RegDate,
        }
    }
}

impl FromStr for FieldId {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldId::ALL
            .into_iter()
            .find(|field| field.id() == s)
            .ok_or_else(|| FormError::InvalidFieldId(s.to_string()))
    }
}

impl FromStr for TextField {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<FieldId>()?
            .as_text()
            .ok_or_else(|| FormError::InvalidFieldId(s.to_string()))
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("ownerName", FieldId::OwnerName)]
    #[case("makeModel", FieldId::MakeModel)]
    #[case("vehicleType", FieldId::VehicleType)]
    #[case("regNumber", FieldId::RegNumber)]
    #[case("regDate", FieldId::RegDate)]
    #[case("terms", FieldId::Terms)]
    fn test_parse_dom_ids(#[case] id: &str, #[case] expected: FieldId) {
        assert_eq!(id.parse::<FieldId>().unwrap(), expected);
        assert_eq!(expected.id(), id);
    }

    #[test]
    fn test_unknown_id_is_rejected() {
        let err = "email".parse::<FieldId>().unwrap_err();
        assert!(matches!(err, FormError::InvalidFieldId(ref id) if id == "email"));
    }

    #[test]
    fn test_terms_is_not_a_text_field() {
        assert!("terms".parse::<TextField>().is_err());
        assert_eq!(FieldId::Terms.as_text(), None);
        assert_eq!(FieldId::Terms.required_message(), "You must accept terms");
    }

    #[test]
    fn test_required_message_uses_label() {
        for field in TextField::ALL {
            assert_eq!(
                field.required_message(),
                format!("{} is required", field.label())
            );
        }
    }

    #[test]
    fn test_index_matches_catalogue_order() {
        for (i, field) in FieldId::ALL.into_iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }
}
