// File: src/controller.rs
// Purpose: Event hooks that drive the validation engine against a FormView

use crate::engine::{self, ErrorDisplay, FormValidity, ValidationMode};
use crate::error::Result;
use crate::field::{FieldId, TextField};
use crate::present;
use crate::touched::TouchedSet;
use crate::view::{FormView, OutputKind};

/// UI events the form reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    Input(TextField),
    Blur(TextField),
    TermsChange,
    Submit,
    Reset,
}

/// The registration form: touch state plus the UI collaborator it paints
///
/// All mutation happens synchronously inside the event hooks.
#[derive(Debug)]
pub struct RegistrationForm<V: FormView> {
    view: V,
    touched: TouchedSet,
}

impl<V: FormView> RegistrationForm<V> {
    pub fn new(view: V) -> Self {
        Self {
            view,
            touched: TouchedSet::new(),
        }
    }

    /// Initial state: submit disabled until the form is complete
    pub fn mount(&mut self) {
        self.view.set_submit_enabled(false);
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    pub fn touched(&self) -> &TouchedSet {
        &self.touched
    }

    pub fn handle(&mut self, event: FormEvent) {
        match event {
            FormEvent::Input(field) => self.on_input(field),
            FormEvent::Blur(field) => self.on_blur(field),
            FormEvent::TermsChange => self.on_terms_change(),
            FormEvent::Submit => {
                self.validate_on_submit();
            }
            FormEvent::Reset => self.clear_form(),
        }
    }

    /// Value edited: re-check lazily without marking the field touched
    pub fn on_input(&mut self, field: TextField) {
        self.check_field(field);
        self.update_submit_state();
    }

    pub fn on_blur(&mut self, field: TextField) {
        self.touched.mark_touched(field);
        self.check_field(field);
        self.update_submit_state();
    }

    pub fn on_terms_change(&mut self) {
        self.touched.mark_touched(FieldId::Terms);
        let display: ErrorDisplay = engine::check_terms(
            self.view.terms_checked(),
            &self.touched,
            ValidationMode::Lazy,
        )
        .into();
        present::apply_display(&mut self.view, FieldId::Terms, &display);
        self.update_submit_state();
    }

    pub fn mark_touched(&mut self, field: FieldId) {
        self.touched.mark_touched(field);
    }

    /// Mark a field touched by its DOM identifier
    pub fn mark_touched_by_id(&mut self, id: &str) -> Result<()> {
        self.touched.mark_touched_by_id(id)
    }

    /// Recompute and apply submit-button enablement. Touched fields are
    /// repainted only when the form is complete.
    pub fn update_submit_state(&mut self) -> FormValidity {
        let gate = engine::submit_gate(&self.view, &self.touched);
        if let Some(evaluation) = &gate.evaluation {
            present::apply_evaluation(&mut self.view, evaluation);
        }
        self.view.set_submit_enabled(gate.validity.submit_enabled);
        tracing::debug!(
            all_valid = gate.validity.all_valid,
            submit_enabled = gate.validity.submit_enabled,
            "submit state updated"
        );
        gate.validity
    }

    /// Forced pass over every field, then report success or failure.
    ///
    /// Touched flags are left as they were; errors revealed here stay on
    /// screen until the field is next checked.
    pub fn validate_on_submit(&mut self) -> OutputKind {
        let evaluation = engine::evaluate_form(&self.view, &self.touched, ValidationMode::Forced);
        present::apply_evaluation(&mut self.view, &evaluation);

        let kind = if evaluation.all_valid {
            OutputKind::Success
        } else {
            OutputKind::Error
        };
        self.view.set_output(kind.message(), kind);
        tracing::info!(outcome = %kind, errors = evaluation.errors().count(), "form submitted");
        kind
    }

    pub fn clear_form(&mut self) {
        self.view.reset_controls();
        self.view.clear_output();
        self.view.set_submit_enabled(false);
        self.touched.reset_all();
        present::clear_all_errors(&mut self.view);
        tracing::debug!("form cleared");
    }

    fn check_field(&mut self, field: TextField) {
        let value = self.view.value(field);
        let display: ErrorDisplay =
            engine::check_field(field, &value, &self.touched, ValidationMode::Lazy).into();
        present::apply_display(&mut self.view, field.into(), &display);
    }
}
