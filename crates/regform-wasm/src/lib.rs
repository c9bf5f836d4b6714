//! Registration Form WASM
//!
//! WebAssembly bindings for the registration form validator. On start the
//! module mounts itself on `#registerForm` (once the DOM is ready) and wires
//! live validation; `validateOnSubmit` and `clearForm` are exported for
//! buttons and scripts. The headless functions validate a plain snapshot
//! without any DOM.

use regform_validation as regform;
use regform_validation::{FieldId, FormConfig, FormSnapshot, TouchedSet, ValidationMode};
use wasm_bindgen::prelude::*;

pub mod bind;
pub mod dom;

use dom::to_js;

/// Set panic hook for better error messages in the browser, then mount
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    bind::mount_when_ready(FormConfig::default());
}

/// Mount on markup that uses non-default ids or classes
///
/// # Example (JavaScript)
/// ```javascript
/// mountWithConfig({ form_id: 'vehicleForm', error_suffix: '-error' });
/// ```
#[wasm_bindgen(js_name = mountWithConfig)]
pub fn mount_with_config(config: JsValue) -> Result<(), JsValue> {
    let config: FormConfig = if config.is_undefined() || config.is_null() {
        FormConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {}", e)))?
    };
    bind::mount_now(config)
}

/// Force-validate every field and write the output message.
/// Returns whether the form is valid, or `undefined` before mount.
#[wasm_bindgen(js_name = validateOnSubmit)]
pub fn validate_on_submit() -> Option<bool> {
    bind::with_mounted(|form| form.validate_on_submit() == regform::OutputKind::Success)
}

#[wasm_bindgen(js_name = clearForm)]
pub fn clear_form() {
    bind::with_mounted(|form| form.clear_form());
}

/// Mark a field touched by its DOM id. Unknown ids are rejected even before
/// mount; a known id before mount is a no-op.
#[wasm_bindgen(js_name = markTouched)]
pub fn mark_touched(id: &str) -> Result<(), JsValue> {
    let field = parse_field_id(id).map_err(to_js)?;
    bind::with_mounted(|form| form.mark_touched(field));
    Ok(())
}

fn parse_field_id(id: &str) -> regform::Result<FieldId> {
    id.parse()
}

fn parse_snapshot(snapshot: JsValue) -> Result<FormSnapshot, JsValue> {
    serde_wasm_bindgen::from_value(snapshot)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse form values: {}", e)))
}

fn parse_touched(touched: JsValue) -> Result<TouchedSet, JsValue> {
    if touched.is_undefined() || touched.is_null() {
        return Ok(TouchedSet::new());
    }
    serde_wasm_bindgen::from_value(touched)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse touched flags: {}", e)))
}

/// Evaluate a snapshot without a DOM
///
/// # Example (JavaScript)
/// ```javascript
/// const result = evaluateForm(
///     { ownerName: 'Jane', terms: false },
///     { ownerName: true },
///     false
/// );
/// // result.allValid === false, result.outcomes[0].display.action === 'clear'
/// ```
#[wasm_bindgen(js_name = evaluateForm)]
pub fn evaluate_form(snapshot: JsValue, touched: JsValue, forced: bool) -> Result<JsValue, JsValue> {
    let values = parse_snapshot(snapshot)?;
    let touched = parse_touched(touched)?;
    let evaluation = regform::evaluate_form(&values, &touched, ValidationMode::from_force(forced));
    Ok(serde_wasm_bindgen::to_value(&evaluation)?)
}

/// Submit-button decision for a snapshot
#[wasm_bindgen(js_name = submitGate)]
pub fn submit_gate(snapshot: JsValue, touched: JsValue) -> Result<JsValue, JsValue> {
    let values = parse_snapshot(snapshot)?;
    let touched = parse_touched(touched)?;
    Ok(serde_wasm_bindgen::to_value(&regform::submit_gate(&values, &touched))?)
}

/// Error message for a field id, e.g. `"regDate"`
#[wasm_bindgen(js_name = requiredMessage)]
pub fn required_message(id: &str) -> Result<String, JsValue> {
    required_message_for(id).map_err(to_js)
}

fn required_message_for(id: &str) -> regform::Result<String> {
    Ok(parse_field_id(id)?.required_message().to_string())
}
