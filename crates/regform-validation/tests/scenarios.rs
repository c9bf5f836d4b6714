/// End-to-end scenarios for the registration form
///
/// Drives `RegistrationForm` through the same event sequences a browser
/// would, using `MemoryView` in place of the DOM.

use pretty_assertions::assert_eq;
use regform_validation::{
    FieldId, FormEvent, FormSnapshot, FormValues, MemoryView, OutputKind, RegistrationForm,
    TextField,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn fresh_form() -> RegistrationForm<MemoryView> {
    init_tracing();
    let mut form = RegistrationForm::new(MemoryView::new());
    form.mount();
    form
}

/// Type a value into a field the way a user would: input events, then blur
fn type_and_blur(form: &mut RegistrationForm<MemoryView>, field: TextField, value: &str) {
    form.view_mut().values.set(field, value);
    form.handle(FormEvent::Input(field));
    form.handle(FormEvent::Blur(field));
}

#[test]
fn test_fresh_form_shows_nothing_and_disables_submit() {
    let form = fresh_form();

    assert!(!form.view().has_errors());
    assert!(!form.view().submit_enabled());
    assert_eq!(form.view().output(), None);
    assert!(form.touched().none_touched());
}

#[test]
fn test_filling_owner_name_keeps_other_fields_silent() {
    let mut form = fresh_form();
    type_and_blur(&mut form, TextField::OwnerName, "Jane");

    assert_eq!(form.view().error(TextField::OwnerName), None);
    assert!(!form.view().has_errors());
    assert!(!form.view().submit_enabled());
}

#[test]
fn test_blurring_blank_reg_number_shows_error() {
    let mut form = fresh_form();
    form.handle(FormEvent::Blur(TextField::RegNumber));

    assert_eq!(
        form.view().error(TextField::RegNumber),
        Some("Registration Number is required")
    );
    assert!(form.view().is_highlighted(TextField::RegNumber));
    assert!(!form.view().submit_enabled());
}

#[test]
fn test_correcting_a_field_clears_its_error() {
    let mut form = fresh_form();
    form.handle(FormEvent::Blur(TextField::VehicleType));
    assert!(form.view().error(TextField::VehicleType).is_some());

    form.view_mut().values.set(TextField::VehicleType, "motorcycle");
    form.handle(FormEvent::Input(TextField::VehicleType));

    assert_eq!(form.view().error(TextField::VehicleType), None);
    assert!(!form.view().is_highlighted(TextField::VehicleType));
}

#[test]
fn test_complete_form_submits_successfully() {
    let mut form = fresh_form();
    let complete = FormSnapshot::complete();
    for field in TextField::ALL {
        type_and_blur(&mut form, field, &complete.value(field));
    }
    assert!(!form.view().submit_enabled(), "terms still unchecked");

    form.view_mut().values.terms = true;
    form.handle(FormEvent::TermsChange);
    assert!(form.view().submit_enabled());

    let outcome = form.validate_on_submit();

    assert_eq!(outcome, OutputKind::Success);
    assert_eq!(
        form.view().output(),
        Some(("Vehicle registration successful!", OutputKind::Success))
    );
    assert!(!form.view().has_errors());
}

#[test]
fn test_blank_submit_reveals_every_error() {
    let mut form = fresh_form();
    let outcome = form.validate_on_submit();

    assert_eq!(outcome, OutputKind::Error);
    for field in FieldId::ALL {
        assert_eq!(
            form.view().error(field),
            Some(field.required_message()),
            "{field} should show its error"
        );
    }
    assert_eq!(form.view().error(FieldId::Terms), Some("You must accept terms"));
    assert_eq!(
        form.view().output(),
        Some(("Please fix the errors above.", OutputKind::Error))
    );
}

#[test]
fn test_submit_button_stays_disabled_without_visible_errors() {
    init_tracing();
    let mut values = FormSnapshot::complete();
    values.set(TextField::RegDate, "");
    let mut form = RegistrationForm::new(MemoryView::with_values(values));
    form.mount();

    form.handle(FormEvent::Blur(TextField::OwnerName));
    form.handle(FormEvent::TermsChange);

    assert!(!form.view().has_errors());
    assert!(!form.view().submit_enabled());
}

#[test]
fn test_clear_form_is_idempotent() {
    let mut form = fresh_form();
    type_and_blur(&mut form, TextField::OwnerName, "Jane");
    form.handle(FormEvent::Blur(TextField::MakeModel));
    form.validate_on_submit();

    form.clear_form();
    let once = (
        form.view().values.clone(),
        form.view().has_errors(),
        form.view().submit_enabled(),
        form.view().output().map(|(m, k)| (m.to_string(), k)),
        *form.touched(),
    );

    form.clear_form();
    let twice = (
        form.view().values.clone(),
        form.view().has_errors(),
        form.view().submit_enabled(),
        form.view().output().map(|(m, k)| (m.to_string(), k)),
        *form.touched(),
    );

    assert_eq!(once, twice);
    assert_eq!(once.0, FormSnapshot::default());
    assert!(!once.1);
    assert!(!once.2);
    assert_eq!(once.3, None);
    assert!(once.4.none_touched());
    for field in FieldId::ALL {
        assert!(!form.view().is_highlighted(field));
    }
}

#[test]
fn test_cleared_form_is_lazy_again() {
    let mut form = fresh_form();
    form.handle(FormEvent::Blur(TextField::RegNumber));
    form.clear_form();

    form.handle(FormEvent::Input(TextField::RegNumber));
    assert_eq!(form.view().error(TextField::RegNumber), None);
}
