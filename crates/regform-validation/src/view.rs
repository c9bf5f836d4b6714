// File: src/view.rs
// Purpose: UI collaborator traits and an in-memory implementation

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::field::{FieldId, TextField};

pub const SUCCESS_MESSAGE: &str = "Vehicle registration successful!";
pub const FAILURE_MESSAGE: &str = "Please fix the errors above.";

/// Read access to the current control values
///
/// The engine never caches these; every pass reads them again.
pub trait FormValues {
    fn value(&self, field: TextField) -> String;

    fn terms_checked(&self) -> bool;

    /// Non-blank after trimming
    fn is_filled(&self, field: TextField) -> bool {
        !self.value(field).trim().is_empty()
    }
}

/// Write side of the UI collaborator
pub trait FormView: FormValues {
    fn show_error(&mut self, field: FieldId, message: &str);

    fn clear_error(&mut self, field: FieldId);

    fn set_highlight(&mut self, field: FieldId, on: bool);

    fn set_submit_enabled(&mut self, enabled: bool);

    /// Clear every control value (the form's native reset)
    fn reset_controls(&mut self);

    fn set_output(&mut self, message: &str, kind: OutputKind);

    fn clear_output(&mut self);
}

/// Classification of the output message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    Success,
    Error,
}

impl OutputKind {
    pub fn message(self) -> &'static str {
        match self {
            OutputKind::Success => SUCCESS_MESSAGE,
            OutputKind::Error => FAILURE_MESSAGE,
        }
    }
}

impl std::fmt::Display for OutputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputKind::Success => write!(f, "success"),
            OutputKind::Error => write!(f, "error"),
        }
    }
}

/// Plain snapshot of the six control values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormSnapshot {
    pub owner_name: String,
    pub make_model: String,
    pub vehicle_type: String,
    pub reg_number: String,
    pub reg_date: String,
    pub terms: bool,
}

impl FormSnapshot {
    /// A snapshot with every field filled and terms accepted
    pub fn complete() -> Self {
        Self {
            owner_name: "Jane Doe".to_string(),
            make_model: "Toyota Corolla".to_string(),
            vehicle_type: "car".to_string(),
            reg_number: "KA-01-AB-1234".to_string(),
            reg_date: "2024-03-15".to_string(),
            terms: true,
        }
    }

    pub fn set(&mut self, field: TextField, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    fn slot(&self, field: TextField) -> &String {
        match field {
            TextField::OwnerName => &self.owner_name,
            TextField::MakeModel => &self.make_model,
            TextField::VehicleType => &self.vehicle_type,
            TextField::RegNumber => &self.reg_number,
            TextField::RegDate => &self.reg_date,
        }
    }

    fn slot_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::OwnerName => &mut self.owner_name,
            TextField::MakeModel => &mut self.make_model,
            TextField::VehicleType => &mut self.vehicle_type,
            TextField::RegNumber => &mut self.reg_number,
            TextField::RegDate => &mut self.reg_date,
        }
    }
}

impl FormValues for FormSnapshot {
    fn value(&self, field: TextField) -> String {
        self.slot(field).clone()
    }

    fn terms_checked(&self) -> bool {
        self.terms
    }
}

/// Headless [`FormView`] that records what would be painted
#[derive(Debug, Clone, Default)]
pub struct MemoryView {
    pub values: FormSnapshot,
    errors: HashMap<FieldId, String>,
    highlighted: HashMap<FieldId, bool>,
    submit_enabled: bool,
    output: Option<(String, OutputKind)>,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values(values: FormSnapshot) -> Self {
        Self {
            values,
            ..Self::default()
        }
    }

    /// Displayed error text, `None` when empty
    pub fn error(&self, field: impl Into<FieldId>) -> Option<&str> {
        self.errors
            .get(&field.into())
            .map(|s| s.as_str())
            .filter(|s| !s.is_empty())
    }

    pub fn has_errors(&self) -> bool {
        FieldId::ALL.into_iter().any(|field| self.error(field).is_some())
    }

    pub fn is_highlighted(&self, field: impl Into<FieldId>) -> bool {
        self.highlighted.get(&field.into()).copied().unwrap_or(false)
    }

    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    pub fn output(&self) -> Option<(&str, OutputKind)> {
        self.output.as_ref().map(|(msg, kind)| (msg.as_str(), *kind))
    }
}

impl FormValues for MemoryView {
    fn value(&self, field: TextField) -> String {
        self.values.value(field)
    }

    fn terms_checked(&self) -> bool {
        self.values.terms_checked()
    }
}

impl FormView for MemoryView {
    fn show_error(&mut self, field: FieldId, message: &str) {
        self.errors.insert(field, message.to_string());
    }

    fn clear_error(&mut self, field: FieldId) {
        self.errors.remove(&field);
    }

    fn set_highlight(&mut self, field: FieldId, on: bool) {
        self.highlighted.insert(field, on);
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_enabled = enabled;
    }

    fn reset_controls(&mut self) {
        self.values = FormSnapshot::default();
    }

    fn set_output(&mut self, message: &str, kind: OutputKind) {
        self.output = Some((message.to_string(), kind));
    }

    fn clear_output(&mut self) {
        self.output = None;
    }
}
