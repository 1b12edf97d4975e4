//! Unit tests for the contact form service.

use std::sync::Arc;

use crate::domain::ContactSubmission;
use crate::services::contact::{ContactConfig, ContactFormService};
use crate::view::{Control, Field, RecordingView, Section, ViewEffect};

use super::mocks::MockNotifier;

fn submission() -> ContactSubmission {
    ContactSubmission {
        name: "Asha Rao".to_string(),
        phone: "(415) 555-2671".to_string(),
        address: "12 Hill Road, Bandra".to_string(),
        email: "asha@example.com".to_string(),
    }
}

fn setup(should_fail: bool) -> (
    ContactFormService<MockNotifier, RecordingView>,
    Arc<MockNotifier>,
    Arc<RecordingView>,
) {
    let notifier = Arc::new(MockNotifier::new(should_fail));
    let view = Arc::new(RecordingView::new());
    let service = ContactFormService::new(notifier.clone(), view.clone(), ContactConfig::default());
    (service, notifier, view)
}

#[tokio::test]
async fn test_invalid_fields_block_delivery() {
    let (mut service, notifier, view) = setup(false);

    let bad = ContactSubmission {
        name: "   ".to_string(),
        phone: "12".to_string(),
        address: String::new(),
        email: "asha@example.com".to_string(),
    };
    service.submit(&bad).await;

    assert_eq!(notifier.sent_count(), 0);
    assert!(view.visible_error(Field::ContactName).is_some());
    assert!(view.visible_error(Field::ContactPhone).is_some());
    assert!(view.visible_error(Field::ContactAddress).is_some());
}

#[tokio::test]
async fn test_partial_validity_toggles_errors_per_field() {
    let (mut service, notifier, view) = setup(false);

    let mut partial = submission();
    partial.phone = "not-a-phone".to_string();
    service.submit(&partial).await;

    assert_eq!(notifier.sent_count(), 0);
    assert!(view.visible_error(Field::ContactName).is_none());
    assert!(view.visible_error(Field::ContactPhone).is_some());
    assert!(view.visible_error(Field::ContactAddress).is_none());
}

#[tokio::test]
async fn test_successful_submission_payload_and_terminal_state() {
    let (mut service, notifier, view) = setup(false);

    service.submit(&submission()).await;

    assert!(service.is_submitted());
    assert_eq!(notifier.sent_count(), 1);

    let sent = notifier.last_sent().unwrap();
    assert_eq!(sent.template_id, "template_contact_details");
    assert_eq!(sent.service_id, "service_contact");
    assert_eq!(sent.params["user_name"], "Asha Rao");
    assert_eq!(sent.params["user_phone"], "(415) 555-2671");
    assert_eq!(sent.params["user_address"], "12 Hill Road, Bandra");
    assert_eq!(sent.params["user_email"], "asha@example.com");
    assert_eq!(sent.params["reply_to"], "asha@example.com");
    assert_eq!(sent.params["from_name"], "Form Submission");

    assert_eq!(view.section_visible(Section::ContactSuccess), Some(true));
    assert_eq!(view.enabled(Control::ContactSubmit), Some(false));
    assert_eq!(view.loading(Control::ContactSubmit), Some(false));
    // Entered fields reset; the carried-over email is left alone.
    assert!(view
        .effects()
        .contains(&ViewEffect::FieldValue(Field::ContactName, String::new())));
    assert!(!view
        .effects()
        .iter()
        .any(|e| matches!(e, ViewEffect::FieldValue(Field::Email, _))));

    // Further submissions are ignored.
    service.submit(&submission()).await;
    assert_eq!(notifier.sent_count(), 1);
}

#[tokio::test]
async fn test_failed_delivery_alerts_and_stays_retryable() {
    let (mut service, notifier, view) = setup(true);

    service.submit(&submission()).await;

    assert!(!service.is_submitted());
    assert_eq!(notifier.sent_count(), 1);
    assert!(view
        .effects()
        .iter()
        .any(|e| matches!(e, ViewEffect::Alert(_))));
    assert_eq!(view.enabled(Control::ContactSubmit), Some(true));
    assert_eq!(view.loading(Control::ContactSubmit), Some(false));
}
