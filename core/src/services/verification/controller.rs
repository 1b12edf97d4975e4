//! Verification flow controller.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::{
    is_complete_code, is_valid_email, is_valid_phone, mask_phone, normalize_phone_input,
    sanitize_otp_input, VerificationChannel, OTP_LENGTH,
};
use crate::view::{Control, Field, FlowView, ResendLabel, Section};

use super::config::FlowConfig;
use super::cooldown::{CooldownTick, CooldownTimer};
use super::traits::{PhoneStore, VerificationApi, PHONE_NUMBER_KEY};

const SEND_FAILED_FALLBACK: &str = "Failed to send OTP";
const VERIFY_FAILED_FALLBACK: &str = "Verification failed";
const INVALID_PHONE_MESSAGE: &str = "Please enter a valid 10-digit mobile number";
const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";
const INVALID_CODE_MESSAGE: &str = "Please enter a valid 6-digit OTP";

/// Controller for the phone/email verification flow.
///
/// Owns every piece of flow state for one page session: the selected
/// channel, the normalized phone input, the OTP input, the resend
/// cooldown, the in-flight request flags, and the sign-in gate. All
/// visible side effects go through the [`FlowView`] seam; the
/// verification service and phone store are reached through their traits.
///
/// The controller is single-threaded by construction: it is owned by one
/// event-loop task and every operation runs to completion before the next
/// event is taken. Re-entrant sends and verifies are excluded by the
/// pending flags, mirrored into the view as disabled controls.
pub struct FlowController<A, S, V>
where
    A: VerificationApi,
    S: PhoneStore,
    V: FlowView,
{
    /// Verification service collaborator
    api: Arc<A>,
    /// Durable client-side storage
    store: Arc<S>,
    /// Rendering seam
    view: Arc<V>,
    /// Flow configuration
    config: FlowConfig,

    channel: VerificationChannel,
    phone: String,
    email: String,
    otp_input: String,
    cooldown: CooldownTimer,
    send_pending: bool,
    verify_pending: bool,
    sign_in_gate: bool,
}

impl<A, S, V> FlowController<A, S, V>
where
    A: VerificationApi,
    S: PhoneStore,
    V: FlowView,
{
    /// Create a controller and render the initial page state: email
    /// channel active, OTP section hidden, sign-in and send disabled.
    pub fn new(api: Arc<A>, store: Arc<S>, view: Arc<V>, config: FlowConfig) -> Self {
        let controller = Self {
            api,
            store,
            view,
            config,
            channel: VerificationChannel::default(),
            phone: String::new(),
            email: String::new(),
            otp_input: String::new(),
            cooldown: CooldownTimer::new(),
            send_pending: false,
            verify_pending: false,
            sign_in_gate: false,
        };
        controller.view.set_active_channel(controller.channel);
        controller.view.set_section_visible(Section::EmailEntry, true);
        controller.view.set_section_visible(Section::PhoneEntry, false);
        controller.view.set_section_visible(Section::OtpEntry, false);
        controller.view.set_enabled(Control::SignIn, false);
        controller.view.set_enabled(Control::SendOtp, false);
        controller.view.set_resend_label(ResendLabel::Default);
        controller
    }

    /// Switch the active verification channel.
    ///
    /// Always hides the OTP section, even when the same channel is
    /// reselected; any pending verification input is abandoned. A running
    /// resend cooldown is left ticking in the background so that switching
    /// back does not reset the resend wait.
    pub fn select_channel(&mut self, channel: VerificationChannel) {
        tracing::debug!(
            from = self.channel.as_str(),
            to = channel.as_str(),
            event = "channel_switched",
            "Switching verification channel"
        );
        self.channel = channel;
        self.view.set_active_channel(channel);
        self.view
            .set_section_visible(Section::EmailEntry, channel == VerificationChannel::Email);
        self.view
            .set_section_visible(Section::PhoneEntry, channel == VerificationChannel::Phone);
        self.view.set_section_visible(Section::OtpEntry, false);
    }

    /// Handle a phone input event: normalize, write back, re-validate.
    ///
    /// The inline error and the send trigger's enablement track validity
    /// on every keystroke.
    pub fn phone_input(&mut self, raw: &str) {
        let normalized = normalize_phone_input(raw);
        if normalized != raw {
            self.view.set_field_value(Field::Phone, &normalized);
        }
        self.phone = normalized;
        self.validate_phone();
    }

    /// Re-run phone validation, updating the inline error and the send
    /// trigger. Returns the verdict.
    fn validate_phone(&mut self) -> bool {
        if is_valid_phone(&self.phone) {
            self.view.clear_error(Field::Phone);
            self.view
                .set_enabled(Control::SendOtp, self.resend_allowed());
            true
        } else {
            self.view.show_error(Field::Phone, INVALID_PHONE_MESSAGE);
            self.view.set_enabled(Control::SendOtp, false);
            false
        }
    }

    /// Handle an email input event on the email channel: trim and
    /// re-validate, toggling the field's inline error.
    pub fn email_input(&mut self, raw: &str) {
        self.email = raw.trim().to_string();
        if is_valid_email(&self.email) {
            self.view.clear_error(Field::Email);
        } else {
            self.view.show_error(Field::Email, INVALID_EMAIL_MESSAGE);
        }
    }

    /// Request an OTP for the current phone number.
    ///
    /// Guards: the phone must be valid and no send may already be pending
    /// or cooling down; a rejected guard issues no network call. On
    /// success the OTP section is revealed and the resend cooldown starts.
    /// On failure the service message (or a generic fallback) is shown
    /// inline and the trigger stays retryable. The loading flag is cleared
    /// on every exit path.
    pub async fn send(&mut self) {
        if !self.validate_phone() {
            return;
        }
        if self.send_pending || self.cooldown.is_active() {
            return;
        }

        self.send_pending = true;
        self.view.set_enabled(Control::SendOtp, false);
        self.view.set_loading(Control::SendOtp, true);
        tracing::info!(
            phone = %mask_phone(&self.phone),
            event = "otp_send_requested",
            "Requesting OTP send"
        );

        match self.api.request_otp(&self.phone).await {
            Ok(receipt) => {
                tracing::info!(
                    phone = %mask_phone(&self.phone),
                    message_id = receipt.message_id.as_deref().unwrap_or("-"),
                    next_resend_at = %receipt.next_resend_at,
                    event = "otp_sent",
                    "OTP send accepted"
                );
                self.view.set_section_visible(Section::OtpEntry, true);
                self.otp_input.clear();
                self.view.clear_otp_input();
                if self.config.focus_settle_ms > 0 {
                    // Let the section reveal settle before stealing focus.
                    tokio::time::sleep(Duration::from_millis(self.config.focus_settle_ms)).await;
                }
                self.view.focus_otp_input();
                self.view.clear_error(Field::Phone);
                self.view.notify_success("OTP sent successfully!");
                self.start_cooldown();
            }
            Err(err) => {
                tracing::warn!(
                    phone = %mask_phone(&self.phone),
                    error = %err,
                    event = "otp_send_failed",
                    "OTP send failed"
                );
                let message = err.display_message(SEND_FAILED_FALLBACK);
                self.view.show_error(Field::Phone, &message);
            }
        }

        self.send_pending = false;
        self.view.set_loading(Control::SendOtp, false);
        // A just-started cooldown keeps the trigger disabled from here on.
        self.view
            .set_enabled(Control::SendOtp, self.resend_allowed());
    }

    /// Handle an OTP input event: sanitize to digits, cap at six, and
    /// auto-verify exactly once when the sixth digit lands.
    pub async fn otp_input(&mut self, raw: &str) {
        let sanitized = sanitize_otp_input(raw);
        if sanitized != raw {
            self.view.set_field_value(Field::Otp, &sanitized);
        }
        let was_complete = self.otp_input.len() == OTP_LENGTH;
        self.otp_input = sanitized;
        if !was_complete && is_complete_code(&self.otp_input) {
            self.verify().await;
        }
    }

    /// Handle Enter in the OTP field: verify when six digits are present.
    pub async fn otp_enter_pressed(&mut self) {
        if is_complete_code(&self.otp_input) {
            self.verify().await;
        }
    }

    /// Submit the entered code for verification.
    ///
    /// A local format guard rejects anything but six digits without a
    /// network call. On success the sign-in gate opens and the verified
    /// number is persisted under [`PHONE_NUMBER_KEY`]; on failure the
    /// message is shown inline, the input is cleared and refocused for an
    /// immediate retry. The loading flag is cleared on every exit path.
    pub async fn verify(&mut self) {
        if !is_complete_code(&self.otp_input) {
            self.view.show_error(Field::Otp, INVALID_CODE_MESSAGE);
            return;
        }
        if self.verify_pending {
            return;
        }

        self.verify_pending = true;
        self.view.set_enabled(Control::VerifyOtp, false);
        self.view.set_loading(Control::VerifyOtp, true);
        self.view
            .set_enabled(Control::SendOtp, self.resend_allowed());

        match self.api.verify_otp(&self.phone, &self.otp_input).await {
            Ok(()) => {
                tracing::info!(
                    phone = %mask_phone(&self.phone),
                    event = "otp_verified",
                    "OTP verified"
                );
                self.view.clear_error(Field::Otp);
                self.view.notify_success("Phone number verified successfully!");
                self.sign_in_gate = true;
                self.view.set_enabled(Control::SignIn, true);
                if let Err(err) = self.store.put(PHONE_NUMBER_KEY, &self.phone) {
                    // Verification already succeeded; a storage failure
                    // must not wedge the flow.
                    tracing::error!(
                        error = %err,
                        event = "phone_store_failed",
                        "Failed to persist verified phone number"
                    );
                }
            }
            Err(err) => {
                tracing::warn!(
                    phone = %mask_phone(&self.phone),
                    error = %err,
                    event = "otp_verify_failed",
                    "OTP verification failed"
                );
                let message = err.display_message(VERIFY_FAILED_FALLBACK);
                self.view.show_error(Field::Otp, &message);
                self.otp_input.clear();
                self.view.clear_otp_input();
                self.view.focus_otp_input();
            }
        }

        self.verify_pending = false;
        self.view.set_loading(Control::VerifyOtp, false);
        self.view.set_enabled(Control::VerifyOtp, true);
        self.view
            .set_enabled(Control::SendOtp, self.resend_allowed());
    }

    /// Advance the resend cooldown by one second.
    ///
    /// Driven by the event loop's one-second interval. Updates the resend
    /// label while counting; at zero the label resets and the trigger is
    /// re-enabled unless a request is still pending. A stale-valid trigger
    /// is harmless because [`FlowController::send`] re-validates.
    pub fn tick(&mut self) {
        match self.cooldown.tick() {
            CooldownTick::Running(remaining) => {
                self.view.set_resend_label(ResendLabel::Counting(remaining));
            }
            CooldownTick::Finished => {
                tracing::debug!(event = "cooldown_expired", "Resend cooldown expired");
                self.view.set_resend_label(ResendLabel::Default);
                self.view
                    .set_enabled(Control::SendOtp, self.resend_allowed());
            }
            CooldownTick::Idle => {}
        }
    }

    fn start_cooldown(&mut self) {
        let seconds = self.config.resend_cooldown_seconds;
        tracing::debug!(
            seconds = seconds,
            event = "cooldown_started",
            "Starting resend cooldown"
        );
        self.cooldown.start(seconds);
        self.view.set_enabled(Control::SendOtp, false);
        self.view.set_resend_label(ResendLabel::Counting(seconds));
    }

    /// Resend is allowed iff the cooldown is inactive and no request is
    /// in flight.
    fn resend_allowed(&self) -> bool {
        !self.cooldown.is_active() && !self.send_pending && !self.verify_pending
    }

    /// Whether downstream sign-in has been unlocked by a successful
    /// verification. Never reset within this flow.
    pub fn sign_in_enabled(&self) -> bool {
        self.sign_in_gate
    }

    pub fn channel(&self) -> VerificationChannel {
        self.channel
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn cooldown(&self) -> &CooldownTimer {
        &self.cooldown
    }

    /// Whether a send or verify request is currently in flight.
    pub fn request_pending(&self) -> bool {
        self.send_pending || self.verify_pending
    }
}
