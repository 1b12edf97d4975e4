//! Cooperative event loop driving the verification flow.
//!
//! One task owns the controller and processes UI events to completion,
//! non-preemptively. A one-second interval supplies the cooldown ticks.
//! There is no cancellation: an in-flight send or verify runs to
//! completion before the next event is taken, so a later trigger simply
//! waits behind the disabled-control guard.

use tokio::sync::mpsc;
use tokio::time::{interval, Duration, MissedTickBehavior};

use crate::domain::VerificationChannel;
use crate::services::verification::{FlowController, PhoneStore, VerificationApi};
use crate::view::FlowView;

/// UI events fed into the flow's event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowEvent {
    /// A channel selector was clicked.
    ChannelSelected(VerificationChannel),
    /// The phone field changed; carries the raw field value.
    PhoneInput(String),
    /// The email field changed; carries the raw field value.
    EmailInput(String),
    /// The send/resend OTP trigger was clicked.
    SendRequested,
    /// The OTP field changed; carries the raw field value.
    OtpInput(String),
    /// Enter was pressed inside the OTP field.
    OtpEnterPressed,
    /// The explicit verify trigger was clicked.
    VerifyRequested,
    /// Stop the loop.
    Shutdown,
}

/// Run the flow until [`FlowEvent::Shutdown`] or the sender side closes.
///
/// Returns the controller so callers can inspect final state.
pub async fn run_flow<A, S, V>(
    mut controller: FlowController<A, S, V>,
    mut events: mpsc::Receiver<FlowEvent>,
) -> FlowController<A, S, V>
where
    A: VerificationApi,
    S: PhoneStore,
    V: FlowView,
{
    let mut ticker = interval(Duration::from_secs(1));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Burst);

    loop {
        tokio::select! {
            event = events.recv() => {
                match event {
                    Some(FlowEvent::ChannelSelected(channel)) => {
                        controller.select_channel(channel);
                    }
                    Some(FlowEvent::PhoneInput(raw)) => controller.phone_input(&raw),
                    Some(FlowEvent::EmailInput(raw)) => controller.email_input(&raw),
                    Some(FlowEvent::SendRequested) => controller.send().await,
                    Some(FlowEvent::OtpInput(raw)) => controller.otp_input(&raw).await,
                    Some(FlowEvent::OtpEnterPressed) => controller.otp_enter_pressed().await,
                    Some(FlowEvent::VerifyRequested) => controller.verify().await,
                    Some(FlowEvent::Shutdown) | None => break,
                }
            }
            _ = ticker.tick() => {
                // No-op while the cooldown is idle.
                controller.tick();
            }
        }
    }

    controller
}
