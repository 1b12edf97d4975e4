//! Recording view implementation for tests and development.

use std::sync::Mutex;

use crate::domain::VerificationChannel;

use super::{Control, Field, FlowView, ResendLabel, Section};

/// A single rendered effect, in the order it was issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEffect {
    Error(Field, String),
    ErrorCleared(Field),
    Loading(Control, bool),
    Enabled(Control, bool),
    SectionVisible(Section, bool),
    ActiveChannel(VerificationChannel),
    ResendLabel(ResendLabel),
    FieldValue(Field, String),
    OtpCleared,
    OtpFocused,
    SuccessNotice(String),
    Alert(String),
}

/// View that records every effect instead of rendering it.
///
/// Tests assert on the recorded sequence; the latest-state helpers answer
/// the common "is this control enabled right now" questions without
/// walking the log by hand.
#[derive(Debug, Default)]
pub struct RecordingView {
    effects: Mutex<Vec<ViewEffect>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all effects issued so far.
    pub fn effects(&self) -> Vec<ViewEffect> {
        self.effects.lock().unwrap().clone()
    }

    /// Latest enabled state set for a control, if any was set.
    pub fn enabled(&self, control: Control) -> Option<bool> {
        self.effects()
            .iter()
            .rev()
            .find_map(|e| match e {
                ViewEffect::Enabled(c, enabled) if *c == control => Some(*enabled),
                _ => None,
            })
    }

    /// Latest loading state set for a control, if any was set.
    pub fn loading(&self, control: Control) -> Option<bool> {
        self.effects()
            .iter()
            .rev()
            .find_map(|e| match e {
                ViewEffect::Loading(c, loading) if *c == control => Some(*loading),
                _ => None,
            })
    }

    /// Latest visibility set for a section, if any was set.
    pub fn section_visible(&self, section: Section) -> Option<bool> {
        self.effects()
            .iter()
            .rev()
            .find_map(|e| match e {
                ViewEffect::SectionVisible(s, visible) if *s == section => Some(*visible),
                _ => None,
            })
    }

    /// Latest inline error shown for a field and still not cleared.
    pub fn visible_error(&self, field: Field) -> Option<String> {
        self.effects()
            .iter()
            .rev()
            .find_map(|e| match e {
                ViewEffect::Error(f, message) if *f == field => Some(Some(message.clone())),
                ViewEffect::ErrorCleared(f) if *f == field => Some(None),
                _ => None,
            })
            .flatten()
    }

    /// Latest resend label, if any was set.
    pub fn resend_label(&self) -> Option<ResendLabel> {
        self.effects()
            .iter()
            .rev()
            .find_map(|e| match e {
                ViewEffect::ResendLabel(label) => Some(*label),
                _ => None,
            })
    }

    /// Number of effects matching a predicate.
    pub fn count(&self, pred: impl Fn(&ViewEffect) -> bool) -> usize {
        self.effects().iter().filter(|e| pred(e)).count()
    }

    fn push(&self, effect: ViewEffect) {
        self.effects.lock().unwrap().push(effect);
    }
}

impl FlowView for RecordingView {
    fn show_error(&self, field: Field, message: &str) {
        self.push(ViewEffect::Error(field, message.to_string()));
    }

    fn clear_error(&self, field: Field) {
        self.push(ViewEffect::ErrorCleared(field));
    }

    fn set_loading(&self, control: Control, loading: bool) {
        self.push(ViewEffect::Loading(control, loading));
    }

    fn set_enabled(&self, control: Control, enabled: bool) {
        self.push(ViewEffect::Enabled(control, enabled));
    }

    fn set_section_visible(&self, section: Section, visible: bool) {
        self.push(ViewEffect::SectionVisible(section, visible));
    }

    fn set_active_channel(&self, channel: VerificationChannel) {
        self.push(ViewEffect::ActiveChannel(channel));
    }

    fn set_resend_label(&self, label: ResendLabel) {
        self.push(ViewEffect::ResendLabel(label));
    }

    fn set_field_value(&self, field: Field, value: &str) {
        self.push(ViewEffect::FieldValue(field, value.to_string()));
    }

    fn clear_otp_input(&self) {
        self.push(ViewEffect::OtpCleared);
    }

    fn focus_otp_input(&self) {
        self.push(ViewEffect::OtpFocused);
    }

    fn notify_success(&self, message: &str) {
        self.push(ViewEffect::SuccessNotice(message.to_string()));
    }

    fn show_alert(&self, message: &str) {
        self.push(ViewEffect::Alert(message.to_string()));
    }
}
