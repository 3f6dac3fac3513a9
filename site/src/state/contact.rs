//! Local state of the contact inquiry form.
//!
//! Owned by the contact view and dropped with it; nothing here survives a
//! navigation. Submission only flips `submitted`, there is no backend.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::data::content::CONTACT_BACKGROUNDS;

/// Number of scroll steps in the form (identity, email, services, message).
pub const STEP_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContactFormError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("email address looks incomplete")]
    InvalidEmail,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub company: String,
    pub email: String,
    pub message: String,
    /// Selected services in the order they were ticked.
    pub services: Vec<String>,
    pub active_step: usize,
    pub submitted: bool,
    pub error: Option<ContactFormError>,
}

impl ContactForm {
    pub fn toggle_service(&mut self, service: &str) {
        if let Some(pos) = self.services.iter().position(|s| s == service) {
            self.services.remove(pos);
        } else {
            self.services.push(service.to_owned());
        }
    }

    pub fn is_selected(&self, service: &str) -> bool {
        self.services.iter().any(|s| s == service)
    }

    /// Record the step currently in view. Out-of-range steps clamp to the last.
    pub fn set_active_step(&mut self, step: usize) {
        self.active_step = step.min(STEP_COUNT - 1);
    }

    pub fn background(&self) -> &'static str {
        CONTACT_BACKGROUNDS[self.active_step % CONTACT_BACKGROUNDS.len()]
    }

    /// Banner text shown once a name has been typed.
    pub fn dossier_label(&self) -> Option<String> {
        let name = self.name.trim();
        (!name.is_empty()).then(|| format!("LIVE DOSSIER: {name}"))
    }

    /// Required-field check in form order: name, email, message.
    ///
    /// # Errors
    ///
    /// Returns the first failing field.
    pub fn validate(&self) -> Result<(), ContactFormError> {
        if self.name.trim().is_empty() {
            return Err(ContactFormError::MissingField("name"));
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ContactFormError::MissingField("email"));
        }
        if !looks_like_email(email) {
            return Err(ContactFormError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Err(ContactFormError::MissingField("message"));
        }
        Ok(())
    }

    /// Validate and mark the inquiry as sent. Field values are kept.
    ///
    /// # Errors
    ///
    /// Returns the validation error; `submitted` stays unchanged.
    pub fn submit(&mut self) -> Result<(), ContactFormError> {
        match self.validate() {
            Ok(()) => {
                self.error = None;
                self.submitted = true;
                Ok(())
            }
            Err(e) => {
                self.error = Some(e);
                Err(e)
            }
        }
    }

    /// Leave the confirmation screen and show the form again.
    pub fn return_to_form(&mut self) {
        self.submitted = false;
    }
}

/// Same shape the browser's `type="email"` check accepts: one `@` with
/// non-empty local and domain parts and no whitespace.
fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}
