// File: src/bind.rs
// Purpose: Mount the form on the document and wire its event listeners

use std::cell::RefCell;
use std::rc::Rc;

use regform_validation::{FormConfig, RegistrationForm, TextField};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Document, Event, EventTarget};

use crate::dom::{to_js, DomView};

pub type SharedForm = Rc<RefCell<RegistrationForm<DomView>>>;

thread_local! {
    static MOUNTED: RefCell<Option<SharedForm>> = const { RefCell::new(None) };
}

fn document() -> Option<Document> {
    web_sys::window().and_then(|window| window.document())
}

/// Mount now, or once the DOM has loaded. Without a document this is a no-op;
/// a page without the expected markup only gets a console warning.
pub fn mount_when_ready(config: FormConfig) {
    let Some(document) = document() else {
        return;
    };

    if document.ready_state() == "loading" {
        let doc = document.clone();
        let on_ready = Closure::once_into_js(move || {
            if let Err(err) = mount(&doc, config) {
                console::warn_1(&err);
            }
        });
        if let Err(err) =
            document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
        {
            console::error_1(&err);
        }
    } else if let Err(err) = mount(&document, config) {
        console::warn_1(&err);
    }
}

/// Mount on the current document immediately
pub fn mount_now(config: FormConfig) -> Result<(), JsValue> {
    let document = document().ok_or_else(|| JsValue::from_str("no document available"))?;
    mount(&document, config)
}

/// Locate the controls, wire listeners and disable submit. A missing
/// element leaves the page untouched.
fn mount(document: &Document, config: FormConfig) -> Result<(), JsValue> {
    if MOUNTED.with(|mounted| mounted.borrow().is_some()) {
        return Err(JsValue::from_str("registration form is already mounted"));
    }

    let view = DomView::locate(document, config).map_err(to_js)?;
    let form: SharedForm = Rc::new(RefCell::new(RegistrationForm::new(view)));

    wire(&form)?;
    form.borrow_mut().mount();

    MOUNTED.with(|mounted| *mounted.borrow_mut() = Some(form));
    Ok(())
}

fn wire(form: &SharedForm) -> Result<(), JsValue> {
    let (targets, terms, form_element) = {
        let form = form.borrow();
        let view = form.view();
        let targets: Vec<(TextField, EventTarget)> = TextField::ALL
            .into_iter()
            .filter_map(|field| view.control(field).map(|c| (field, c.target().clone())))
            .collect();
        let terms: EventTarget = view.terms_element().clone().into();
        let form_element: EventTarget = view.form_element().clone().into();
        (targets, terms, form_element)
    };

    for (field, target) in &targets {
        let field = *field;
        listen(target, "input", form, move |form, _| form.on_input(field))?;
        listen(target, "blur", form, move |form, _| form.on_blur(field))?;
    }

    listen(&terms, "change", form, |form, _| form.on_terms_change())?;
    listen(&form_element, "submit", form, |form, event| {
        event.prevent_default();
        form.validate_on_submit();
    })?;

    Ok(())
}

fn listen<F>(
    target: &EventTarget,
    event_name: &str,
    form: &SharedForm,
    mut handler: F,
) -> Result<(), JsValue>
where
    F: FnMut(&mut RegistrationForm<DomView>, &Event) + 'static,
{
    let form = Rc::clone(form);
    let name = event_name.to_string();
    let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        match form.try_borrow_mut() {
            Ok(mut form) => handler(&mut form, &event),
            Err(_) => console::warn_1(&JsValue::from_str(&format!(
                "regform: '{}' event ignored during another update",
                name
            ))),
        }
    });
    target.add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

/// Run `f` against the mounted form, `None` before mount
pub fn with_mounted<R>(f: impl FnOnce(&mut RegistrationForm<DomView>) -> R) -> Option<R> {
    let form = MOUNTED.with(|mounted| mounted.borrow().clone())?;
    let mut form = form.try_borrow_mut().ok()?;
    Some(f(&mut form))
}
