//! Validation engine
//!
//! Pure decision logic. Every entry point takes the current values, the
//! [`TouchedSet`] and a [`ValidationMode`]; nothing here touches the UI.
//! [`crate::present`] applies the decisions to a [`FormView`](crate::FormView).
//!
//! Display and gating are decoupled: a blank field that has not been touched
//! shows no error under [`ValidationMode::Lazy`] but still makes the form
//! invalid ("silently invalid").

use serde::{Deserialize, Serialize};

use crate::field::{FieldId, TextField, TERMS_MESSAGE};
use crate::touched::TouchedSet;
use crate::view::FormValues;

/// Whether touched-state gates the check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Only fields the user has touched are checked (live editing)
    Lazy,
    /// Every field is checked regardless of touched-state (submit)
    Forced,
}

impl ValidationMode {
    pub fn from_force(force: bool) -> Self {
        if force {
            ValidationMode::Forced
        } else {
            ValidationMode::Lazy
        }
    }

    pub fn is_forced(self) -> bool {
        matches!(self, ValidationMode::Forced)
    }

    fn should_validate(self, touched: &TouchedSet, field: FieldId) -> bool {
        self.is_forced() || touched.is_touched(field)
    }
}

/// Outcome of checking a single item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Empty when valid
    pub message: String,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            message: String::new(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: message.into(),
        }
    }
}

/// What the presentation step should do with a field's error slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "message", rename_all = "camelCase")]
pub enum ErrorDisplay {
    Show(String),
    Clear,
    /// Leave whatever is currently displayed
    Keep,
}

impl From<ValidationResult> for ErrorDisplay {
    fn from(result: ValidationResult) -> Self {
        if result.is_valid {
            ErrorDisplay::Clear
        } else {
            ErrorDisplay::Show(result.message)
        }
    }
}

impl From<Option<ValidationResult>> for ErrorDisplay {
    fn from(result: Option<ValidationResult>) -> Self {
        result.map_or(ErrorDisplay::Keep, ErrorDisplay::from)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldOutcome {
    pub field: FieldId,
    /// Non-blank text, or a checked terms box
    pub filled: bool,
    pub display: ErrorDisplay,
}

/// Result of a whole-form pass: one outcome per item, text fields first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormEvaluation {
    pub all_valid: bool,
    pub outcomes: Vec<FieldOutcome>,
}

impl FormEvaluation {
    pub fn outcome(&self, field: impl Into<FieldId>) -> Option<&FieldOutcome> {
        let field = field.into();
        self.outcomes.iter().find(|o| o.field == field)
    }

    /// Errors this pass wants shown
    pub fn errors(&self) -> impl Iterator<Item = (FieldId, &str)> + '_ {
        self.outcomes.iter().filter_map(|o| match &o.display {
            ErrorDisplay::Show(message) => Some((o.field, message.as_str())),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValidity {
    pub all_valid: bool,
    pub submit_enabled: bool,
}

/// Submit-button decision plus the lazy pass it was derived from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitGate {
    pub validity: FormValidity,
    /// Display actions of the lazy pass; only present once every item is
    /// filled/checked, so an incomplete form is never repainted here
    pub evaluation: Option<FormEvaluation>,
}

/// Check one text field, `None` when the check is suppressed
pub fn check_field(
    field: TextField,
    value: &str,
    touched: &TouchedSet,
    mode: ValidationMode,
) -> Option<ValidationResult> {
    if !mode.should_validate(touched, field.into()) {
        return None;
    }

    let result = if value.trim().is_empty() {
        ValidationResult::invalid(field.required_message())
    } else {
        ValidationResult::valid()
    };
    tracing::trace!(field = %field, valid = result.is_valid, "field checked");
    Some(result)
}

/// Check one text field; a suppressed check reports valid
pub fn validate_field(
    field: TextField,
    value: &str,
    touched: &TouchedSet,
    mode: ValidationMode,
) -> ValidationResult {
    check_field(field, value, touched, mode).unwrap_or_else(ValidationResult::valid)
}

/// Check the terms checkbox, `None` when the check is suppressed
pub fn check_terms(
    checked: bool,
    touched: &TouchedSet,
    mode: ValidationMode,
) -> Option<ValidationResult> {
    if !mode.should_validate(touched, FieldId::Terms) {
        return None;
    }

    Some(if checked {
        ValidationResult::valid()
    } else {
        ValidationResult::invalid(TERMS_MESSAGE)
    })
}

pub fn validate_terms(checked: bool, touched: &TouchedSet, mode: ValidationMode) -> ValidationResult {
    check_terms(checked, touched, mode).unwrap_or_else(ValidationResult::valid)
}

/// Whole-form pass
///
/// Text fields are shown/cleared when checked and left alone otherwise, but
/// any blank text field makes the form invalid. An unchecked terms box only
/// counts against the form (and only asks for its error) when forced; this
/// pass never clears the terms error.
pub fn evaluate_form<V: FormValues + ?Sized>(
    values: &V,
    touched: &TouchedSet,
    mode: ValidationMode,
) -> FormEvaluation {
    let mut all_valid = true;
    let mut outcomes = Vec::with_capacity(FieldId::COUNT);

    for field in TextField::ALL {
        let value = values.value(field);
        let filled = !value.trim().is_empty();
        if !filled {
            all_valid = false;
        }
        outcomes.push(FieldOutcome {
            field: field.into(),
            filled,
            display: check_field(field, &value, touched, mode).into(),
        });
    }

    let checked = values.terms_checked();
    let terms_display = if !checked && mode.is_forced() {
        all_valid = false;
        ErrorDisplay::Show(TERMS_MESSAGE.to_string())
    } else {
        ErrorDisplay::Keep
    };
    outcomes.push(FieldOutcome {
        field: FieldId::Terms,
        filled: checked,
        display: terms_display,
    });

    tracing::trace!(?mode, all_valid, "form evaluated");
    FormEvaluation { all_valid, outcomes }
}

pub fn is_form_valid<V: FormValues + ?Sized>(
    values: &V,
    touched: &TouchedSet,
    mode: ValidationMode,
) -> bool {
    evaluate_form(values, touched, mode).all_valid
}

/// All five text fields non-blank and the terms box checked
pub fn all_fields_filled<V: FormValues + ?Sized>(values: &V) -> bool {
    TextField::ALL.into_iter().all(|field| values.is_filled(field)) && values.terms_checked()
}

/// Submit is enabled only when every item is filled/checked and the lazy
/// whole-form pass succeeds, whether or not any error is on screen.
///
/// The lazy pass short-circuits behind the completeness check: its display
/// actions are handed back only when the form is complete.
pub fn submit_gate<V: FormValues + ?Sized>(values: &V, touched: &TouchedSet) -> SubmitGate {
    let complete = all_fields_filled(values);
    let evaluation = evaluate_form(values, touched, ValidationMode::Lazy);
    let all_valid = evaluation.all_valid;

    SubmitGate {
        validity: FormValidity {
            all_valid,
            submit_enabled: complete && all_valid,
        },
        evaluation: complete.then_some(evaluation),
    }
}
