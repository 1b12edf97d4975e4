//! Notification sender for contact-form delivery.

mod email_notifier;

pub use email_notifier::{HttpNotifier, NotifierConfig};
