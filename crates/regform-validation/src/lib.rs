//! Registration Form Validation
//!
//! Touch-gated validation for the vehicle registration form. The engine is
//! pure: it reads values through [`FormValues`], consults a [`TouchedSet`],
//! and returns decisions. [`RegistrationForm`] wires those decisions to a
//! [`FormView`] in response to input/blur/change/submit/reset events.
//!
//! ```
//! use regform_validation::{FormEvent, MemoryView, RegistrationForm, TextField};
//!
//! let mut form = RegistrationForm::new(MemoryView::new());
//! form.mount();
//! form.handle(FormEvent::Blur(TextField::RegNumber));
//!
//! assert_eq!(
//!     form.view().error(TextField::RegNumber),
//!     Some("Registration Number is required")
//! );
//! assert!(!form.view().submit_enabled());
//! ```

pub mod config;
pub mod controller;
pub mod engine;
pub mod error;
pub mod field;
pub mod present;
pub mod touched;
pub mod view;

pub use config::FormConfig;
pub use controller::{FormEvent, RegistrationForm};
pub use engine::{
    all_fields_filled, check_field, check_terms, evaluate_form, is_form_valid, submit_gate,
    validate_field, validate_terms, ErrorDisplay, FieldOutcome, FormEvaluation, FormValidity,
    SubmitGate, ValidationMode, ValidationResult,
};
pub use error::{FormError, Result};
pub use field::{FieldId, TextField, TERMS_MESSAGE};
pub use touched::TouchedSet;
pub use view::{
    FormSnapshot, FormValues, FormView, MemoryView, OutputKind, FAILURE_MESSAGE, SUCCESS_MESSAGE,
};
