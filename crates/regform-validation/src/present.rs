// File: src/present.rs
// Purpose: Apply engine decisions to a FormView

use crate::engine::{ErrorDisplay, FormEvaluation};
use crate::field::FieldId;
use crate::view::FormView;

/// Paint one field's error slot. Text fields are highlighted alongside the
/// message; the terms checkbox only gets text.
pub fn apply_display<V: FormView + ?Sized>(view: &mut V, field: FieldId, display: &ErrorDisplay) {
    let highlightable = field.as_text().is_some();
    match display {
        ErrorDisplay::Show(message) => {
            view.show_error(field, message);
            if highlightable {
                view.set_highlight(field, true);
            }
        }
        ErrorDisplay::Clear => {
            view.clear_error(field);
            if highlightable {
                view.set_highlight(field, false);
            }
        }
        ErrorDisplay::Keep => {}
    }
}

pub fn apply_evaluation<V: FormView + ?Sized>(view: &mut V, evaluation: &FormEvaluation) {
    for outcome in &evaluation.outcomes {
        apply_display(view, outcome.field, &outcome.display);
    }
}

/// Remove every error message and highlight
pub fn clear_all_errors<V: FormView + ?Sized>(view: &mut V) {
    for field in FieldId::ALL {
        view.clear_error(field);
        view.set_highlight(field, false);
    }
}
