use super::*;

fn filled() -> ContactForm {
    ContactForm {
        name: "Ama Mensah".to_owned(),
        company: "Bloom Luxury".to_owned(),
        email: "ama@bloom.example".to_owned(),
        message: "A launch campaign".to_owned(),
        ..ContactForm::default()
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn contact_form_default_is_blank_and_unsent() {
    let form = ContactForm::default();
    assert!(form.name.is_empty());
    assert!(form.services.is_empty());
    assert_eq!(form.active_step, 0);
    assert!(!form.submitted);
    assert!(form.error.is_none());
}

// =============================================================
// Services
// =============================================================

#[test]
fn toggle_service_adds_then_removes() {
    let mut form = ContactForm::default();
    form.toggle_service("Workshops");
    assert!(form.is_selected("Workshops"));
    form.toggle_service("Workshops");
    assert!(!form.is_selected("Workshops"));
    assert!(form.services.is_empty());
}

#[test]
fn toggle_service_keeps_selection_order() {
    let mut form = ContactForm::default();
    form.toggle_service("Brand Campaigns");
    form.toggle_service("Workshops");
    form.toggle_service("Influencer Strategy");
    form.toggle_service("Workshops");
    assert_eq!(form.services, ["Brand Campaigns", "Influencer Strategy"]);
}

// =============================================================
// Steps and backgrounds
// =============================================================

#[test]
fn set_active_step_clamps_to_last_step() {
    let mut form = ContactForm::default();
    form.set_active_step(2);
    assert_eq!(form.active_step, 2);
    form.set_active_step(99);
    assert_eq!(form.active_step, STEP_COUNT - 1);
}

#[test]
fn background_follows_active_step() {
    let mut form = ContactForm::default();
    let mut seen = Vec::new();
    for step in 0..STEP_COUNT {
        form.set_active_step(step);
        seen.push(form.background());
    }
    assert_eq!(seen, CONTACT_BACKGROUNDS);
}

#[test]
fn dossier_label_requires_a_name() {
    let mut form = ContactForm::default();
    assert!(form.dossier_label().is_none());
    form.name = "   ".to_owned();
    assert!(form.dossier_label().is_none());
    form.name = " Kofi ".to_owned();
    assert_eq!(form.dossier_label().as_deref(), Some("LIVE DOSSIER: Kofi"));
}

// =============================================================
// Validation and submission
// =============================================================

#[test]
fn validate_accepts_filled_form_without_company() {
    let mut form = filled();
    form.company.clear();
    assert_eq!(form.validate(), Ok(()));
}

#[test]
fn validate_reports_first_missing_field() {
    let form = ContactForm::default();
    assert_eq!(form.validate(), Err(ContactFormError::MissingField("name")));

    let mut form = filled();
    form.email.clear();
    form.message.clear();
    assert_eq!(form.validate(), Err(ContactFormError::MissingField("email")));

    let mut form = filled();
    form.message = "  ".to_owned();
    assert_eq!(form.validate(), Err(ContactFormError::MissingField("message")));
}

#[test]
fn validate_rejects_malformed_email() {
    for email in ["ama", "@bloom.example", "ama@", "ama@@bloom", "ama mensah@bloom.example"] {
        let mut form = filled();
        form.email = email.to_owned();
        assert_eq!(form.validate(), Err(ContactFormError::InvalidEmail), "{email:?}");
    }
}

#[test]
fn submit_blocks_invalid_form_and_records_error() {
    let mut form = ContactForm::default();
    assert!(form.submit().is_err());
    assert!(!form.submitted);
    assert_eq!(form.error, Some(ContactFormError::MissingField("name")));
}

#[test]
fn submit_flips_flag_and_clears_error() {
    let mut form = filled();
    form.error = Some(ContactFormError::InvalidEmail);
    assert!(form.submit().is_ok());
    assert!(form.submitted);
    assert!(form.error.is_none());
}

#[test]
fn return_to_form_keeps_field_values() {
    let mut form = filled();
    form.submit().expect("filled form should submit");
    form.return_to_form();
    assert!(!form.submitted);
    assert_eq!(form.name, "Ama Mensah");
}

#[test]
fn error_messages_name_the_field() {
    assert_eq!(ContactFormError::MissingField("email").to_string(), "email is required");
    assert_eq!(ContactFormError::InvalidEmail.to_string(), "email address looks incomplete");
}
