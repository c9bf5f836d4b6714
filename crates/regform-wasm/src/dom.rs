// File: src/dom.rs
// Purpose: FormView backed by the live document

use std::collections::HashMap;

use regform_validation::{FieldId, FormConfig, FormError, FormValues, FormView, OutputKind, TextField};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    console, Document, Element, EventTarget, HtmlButtonElement, HtmlFormElement, HtmlInputElement,
    HtmlSelectElement,
};

/// Every id the form markup must provide
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementIds {
    pub form: String,
    pub submit: String,
    pub output: String,
    pub controls: Vec<(FieldId, &'static str)>,
    pub errors: Vec<(FieldId, String)>,
}

impl ElementIds {
    pub fn from_config(config: &FormConfig) -> Self {
        Self {
            form: config.form_id.clone(),
            submit: config.submit_id.clone(),
            output: config.output_id.clone(),
            controls: FieldId::ALL.into_iter().map(|f| (f, f.id())).collect(),
            errors: FieldId::ALL
                .into_iter()
                .map(|f| (f, config.error_element_id(f)))
                .collect(),
        }
    }
}

/// A text-valued control: `<input>` or `<select>`
#[derive(Debug, Clone)]
pub enum TextControl {
    Input(HtmlInputElement),
    Select(HtmlSelectElement),
}

impl TextControl {
    fn from_element(id: &str, element: Element) -> Result<Self, FormError> {
        match element.dyn_into::<HtmlInputElement>() {
            Ok(input) => Ok(TextControl::Input(input)),
            Err(element) => element
                .dyn_into::<HtmlSelectElement>()
                .map(TextControl::Select)
                .map_err(|_| FormError::MissingElement(id.to_string())),
        }
    }

    pub fn value(&self) -> String {
        match self {
            TextControl::Input(input) => input.value(),
            TextControl::Select(select) => select.value(),
        }
    }

    pub fn element(&self) -> &Element {
        match self {
            TextControl::Input(input) => input.as_ref(),
            TextControl::Select(select) => select.as_ref(),
        }
    }

    pub fn target(&self) -> &EventTarget {
        self.element().as_ref()
    }
}

fn find(document: &Document, id: &str) -> Result<Element, FormError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| FormError::MissingElement(id.to_string()))
}

fn find_as<T: JsCast>(document: &Document, id: &str) -> Result<T, FormError> {
    find(document, id)?
        .dyn_into::<T>()
        .map_err(|_| FormError::MissingElement(id.to_string()))
}

fn toggle_class(element: &Element, class: &str, on: bool) {
    let classes = element.class_list();
    let result = if on {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
    if let Err(err) = result {
        console::warn_1(&err);
    }
}

/// The registration form's controls, located once at mount
pub struct DomView {
    form: HtmlFormElement,
    controls: HashMap<TextField, TextControl>,
    terms: HtmlInputElement,
    errors: HashMap<FieldId, Element>,
    output: Element,
    submit: HtmlButtonElement,
    config: FormConfig,
}

impl DomView {
    /// Look up every element; any missing id aborts the mount
    pub fn locate(document: &Document, config: FormConfig) -> Result<Self, FormError> {
        let ids = ElementIds::from_config(&config);

        let mut controls = HashMap::new();
        let mut terms = None;
        for (field, id) in &ids.controls {
            let element = find(document, id)?;
            match field.as_text() {
                Some(text) => {
                    controls.insert(text, TextControl::from_element(id, element)?);
                }
                None => {
                    let input = element
                        .dyn_into::<HtmlInputElement>()
                        .map_err(|_| FormError::MissingElement(id.to_string()))?;
                    terms = Some(input);
                }
            }
        }
        let terms =
            terms.ok_or_else(|| FormError::MissingElement(FieldId::Terms.id().to_string()))?;

        let mut errors = HashMap::new();
        for (field, id) in &ids.errors {
            errors.insert(*field, find(document, id)?);
        }

        Ok(Self {
            form: find_as(document, &ids.form)?,
            controls,
            terms,
            errors,
            output: find(document, &ids.output)?,
            submit: find_as(document, &ids.submit)?,
            config,
        })
    }

    pub fn form_element(&self) -> &HtmlFormElement {
        &self.form
    }

    pub fn terms_element(&self) -> &HtmlInputElement {
        &self.terms
    }

    pub fn control(&self, field: TextField) -> Option<&TextControl> {
        self.controls.get(&field)
    }

    fn field_element(&self, field: FieldId) -> Option<&Element> {
        match field.as_text() {
            Some(text) => self.controls.get(&text).map(TextControl::element),
            None => Some(self.terms.as_ref()),
        }
    }
}

impl FormValues for DomView {
    fn value(&self, field: TextField) -> String {
        self.controls
            .get(&field)
            .map(TextControl::value)
            .unwrap_or_default()
    }

    fn terms_checked(&self) -> bool {
        self.terms.checked()
    }
}

impl FormView for DomView {
    fn show_error(&mut self, field: FieldId, message: &str) {
        if let Some(element) = self.errors.get(&field) {
            element.set_text_content(Some(message));
        }
    }

    fn clear_error(&mut self, field: FieldId) {
        if let Some(element) = self.errors.get(&field) {
            element.set_text_content(Some(""));
        }
    }

    fn set_highlight(&mut self, field: FieldId, on: bool) {
        if let Some(element) = self.field_element(field) {
            toggle_class(element, &self.config.highlight_class, on);
        }
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit.set_disabled(!enabled);
    }

    fn reset_controls(&mut self) {
        self.form.reset();
    }

    fn set_output(&mut self, message: &str, kind: OutputKind) {
        self.output.set_text_content(Some(message));
        self.output.set_class_name(self.config.output_class(kind));
    }

    fn clear_output(&mut self) {
        self.output.set_text_content(Some(""));
    }
}

/// Convert a setup error into a JavaScript exception value
pub(crate) fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_ids_match_markup() {
        let ids = ElementIds::from_config(&FormConfig::default());

        assert_eq!(ids.form, "registerForm");
        assert_eq!(ids.submit, "submitBtn");
        assert_eq!(ids.output, "outputMessage");
        assert_eq!(
            ids.controls,
            vec![
                (FieldId::OwnerName, "ownerName"),
                (FieldId::MakeModel, "makeModel"),
                (FieldId::VehicleType, "vehicleType"),
                (FieldId::RegNumber, "regNumber"),
                (FieldId::RegDate, "regDate"),
                (FieldId::Terms, "terms"),
            ]
        );
        let errors: Vec<&str> = ids.errors.iter().map(|(_, id)| id.as_str()).collect();
        assert_eq!(
            errors,
            vec![
                "ownerNameError",
                "makeModelError",
                "vehicleTypeError",
                "regNumberError",
                "regDateError",
                "termsError",
            ]
        );
    }

    #[test]
    fn test_configured_suffix_applies_to_error_ids() {
        let config = FormConfig {
            error_suffix: "_msg".to_string(),
            ..FormConfig::default()
        };
        let ids = ElementIds::from_config(&config);
        assert_eq!(ids.errors[3], (FieldId::RegNumber, "regNumber_msg".to_string()));
    }
}
