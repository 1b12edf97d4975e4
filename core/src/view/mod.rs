//! View seam for the verification and contact flows.
//!
//! The controllers never touch a rendering surface directly; every visible
//! side effect goes through [`FlowView`]. A real frontend binds these calls
//! to its widgets, tests use [`RecordingView`], and headless runs can use
//! [`NullView`].

mod recording;

pub use recording::{RecordingView, ViewEffect};

use crate::domain::VerificationChannel;

/// Interactive controls the flows enable, disable, and mark as loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    /// The send / resend OTP trigger.
    SendOtp,
    /// The explicit verify trigger.
    VerifyOtp,
    /// The downstream sign-in action, gated on verification.
    SignIn,
    /// The contact form submit trigger.
    ContactSubmit,
}

/// Page sections the flows show and hide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Email entry for the email channel.
    EmailEntry,
    /// Phone entry for the phone channel.
    PhoneEntry,
    /// OTP entry, revealed after a successful send.
    OtpEntry,
    /// Persistent contact-form success indicator.
    ContactSuccess,
}

/// Input fields with inline error indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Phone,
    Otp,
    Email,
    ContactName,
    ContactPhone,
    ContactAddress,
}

/// Label states for the resend trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResendLabel {
    /// The default "Send OTP" text.
    Default,
    /// Countdown text with seconds remaining.
    Counting(u32),
}

/// Rendering capability the flow controllers depend on.
///
/// Methods take `&self`; implementations handle their own interior
/// mutability. All methods are infallible from the controller's point of
/// view: a view that cannot render an effect drops it.
pub trait FlowView: Send + Sync {
    /// Show an inline error message next to a field.
    fn show_error(&self, field: Field, message: &str);

    /// Hide the inline error for a field.
    fn clear_error(&self, field: Field);

    /// Toggle the loading visual on a control.
    fn set_loading(&self, control: Control, loading: bool);

    /// Enable or disable a control.
    fn set_enabled(&self, control: Control, enabled: bool);

    /// Show or hide a page section.
    fn set_section_visible(&self, section: Section, visible: bool);

    /// Move the visual "active" marker to the given channel selector.
    fn set_active_channel(&self, channel: VerificationChannel);

    /// Update the resend trigger's label.
    fn set_resend_label(&self, label: ResendLabel);

    /// Write a normalized value back into a field.
    fn set_field_value(&self, field: Field, value: &str);

    /// Clear the OTP input field.
    fn clear_otp_input(&self);

    /// Move input focus to the OTP field.
    fn focus_otp_input(&self);

    /// Show a transient success notification.
    fn notify_success(&self, message: &str);

    /// Show a blocking alert (contact form failure path).
    fn show_alert(&self, message: &str);
}

/// View that drops every effect. Useful for headless runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullView;

impl FlowView for NullView {
    fn show_error(&self, _field: Field, _message: &str) {}
    fn clear_error(&self, _field: Field) {}
    fn set_loading(&self, _control: Control, _loading: bool) {}
    fn set_enabled(&self, _control: Control, _enabled: bool) {}
    fn set_section_visible(&self, _section: Section, _visible: bool) {}
    fn set_active_channel(&self, _channel: VerificationChannel) {}
    fn set_resend_label(&self, _label: ResendLabel) {}
    fn set_field_value(&self, _field: Field, _value: &str) {}
    fn clear_otp_input(&self) {}
    fn focus_otp_input(&self) {}
    fn notify_success(&self, _message: &str) {}
    fn show_alert(&self, _message: &str) {}
}
