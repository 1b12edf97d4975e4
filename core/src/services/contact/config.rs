//! Configuration for the contact submission flow.

/// Fixed identifiers and addressing for contact-form delivery.
#[derive(Debug, Clone)]
pub struct ContactConfig {
    /// Notification template identifier.
    pub template_id: String,
    /// Notification service identifier.
    pub service_id: String,
    /// Address the submission is delivered to.
    pub to_email: String,
    /// Sender label shown on the delivered message.
    pub from_name: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            template_id: "template_contact_details".to_string(),
            service_id: "service_contact".to_string(),
            to_email: "contact@verifyforms.example".to_string(),
            from_name: "Form Submission".to_string(),
        }
    }
}
