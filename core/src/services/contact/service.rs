//! Contact form submission service.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{is_valid_contact_phone, ContactSubmission};
use crate::view::{Control, Field, FlowView, Section};

use super::config::ContactConfig;
use super::traits::Notifier;

const SUBMIT_FAILED_MESSAGE: &str = "Failed to submit form. Please try again later.";

/// Service driving the contact details form.
///
/// Validation is entirely client-side with per-field inline errors. A
/// successful delivery flips the form into a terminal submitted state:
/// the success indicator stays visible and further submission is
/// disabled. A failed delivery restores a retryable state.
pub struct ContactFormService<N, V>
where
    N: Notifier,
    V: FlowView,
{
    notifier: Arc<N>,
    view: Arc<V>,
    config: ContactConfig,
    submitted: bool,
}

impl<N, V> ContactFormService<N, V>
where
    N: Notifier,
    V: FlowView,
{
    pub fn new(notifier: Arc<N>, view: Arc<V>, config: ContactConfig) -> Self {
        Self {
            notifier,
            view,
            config,
            submitted: false,
        }
    }

    /// Validate the three required fields, toggling each field's inline
    /// error. Returns true when all pass.
    fn validate(&self, submission: &ContactSubmission) -> bool {
        let mut valid = true;

        if submission.name.trim().is_empty() {
            self.view
                .show_error(Field::ContactName, "Please enter your name");
            valid = false;
        } else {
            self.view.clear_error(Field::ContactName);
        }

        if !is_valid_contact_phone(submission.phone.trim()) {
            self.view
                .show_error(Field::ContactPhone, "Please enter a valid phone number");
            valid = false;
        } else {
            self.view.clear_error(Field::ContactPhone);
        }

        if submission.address.trim().is_empty() {
            self.view
                .show_error(Field::ContactAddress, "Please enter your address");
            valid = false;
        } else {
            self.view.clear_error(Field::ContactAddress);
        }

        valid
    }

    /// Validate and deliver a submission.
    ///
    /// No-op once a previous submission succeeded. Validation failures
    /// issue no network call. The loading state clears on every path.
    pub async fn submit(&mut self, submission: &ContactSubmission) {
        if self.submitted {
            return;
        }
        if !self.validate(submission) {
            return;
        }

        self.view.set_enabled(Control::ContactSubmit, false);
        self.view.set_loading(Control::ContactSubmit, true);

        let params = self.build_params(submission);
        let result = self
            .notifier
            .send(&self.config.template_id, &self.config.service_id, &params)
            .await;
        self.view.set_loading(Control::ContactSubmit, false);

        match result {
            Ok(()) => {
                tracing::info!(event = "contact_submitted", "Contact details delivered");
                self.submitted = true;
                self.view.set_section_visible(Section::ContactSuccess, true);
                // Reset the entered fields, keeping the carried-over email.
                self.view.set_field_value(Field::ContactName, "");
                self.view.set_field_value(Field::ContactPhone, "");
                self.view.set_field_value(Field::ContactAddress, "");
            }
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    event = "contact_submit_failed",
                    "Contact details delivery failed"
                );
                self.view.show_alert(SUBMIT_FAILED_MESSAGE);
                self.view.set_enabled(Control::ContactSubmit, true);
            }
        }
    }

    fn build_params(&self, submission: &ContactSubmission) -> HashMap<String, String> {
        HashMap::from([
            ("to_email".to_string(), self.config.to_email.clone()),
            ("from_name".to_string(), self.config.from_name.clone()),
            ("user_name".to_string(), submission.name.trim().to_string()),
            ("user_email".to_string(), submission.email.clone()),
            ("user_phone".to_string(), submission.phone.trim().to_string()),
            (
                "user_address".to_string(),
                submission.address.trim().to_string(),
            ),
            ("reply_to".to_string(), submission.email.clone()),
        ])
    }

    /// Whether a submission has already been delivered.
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }
}
