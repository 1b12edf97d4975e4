//! Resend cooldown timer.

/// Outcome of a single cooldown tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CooldownTick {
    /// Timer is not running; the tick was a no-op.
    Idle,
    /// Timer decremented and is still counting.
    Running(u32),
    /// Timer reached zero on this tick and stopped.
    Finished,
}

/// Cancellable countdown gating OTP resends.
///
/// The timer holds no clock of its own: the owner drives it by calling
/// [`CooldownTimer::tick`] once per second. While active, the resend
/// trigger stays disabled.
#[derive(Debug, Clone, Default)]
pub struct CooldownTimer {
    remaining_seconds: u32,
    active: bool,
}

impl CooldownTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the countdown at `seconds`.
    pub fn start(&mut self, seconds: u32) {
        self.remaining_seconds = seconds;
        self.active = seconds > 0;
    }

    /// Advance the countdown by one second.
    pub fn tick(&mut self) -> CooldownTick {
        if !self.active {
            return CooldownTick::Idle;
        }
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds == 0 {
            self.active = false;
            CooldownTick::Finished
        } else {
            CooldownTick::Running(self.remaining_seconds)
        }
    }

    /// Stop the countdown without waiting for it to expire.
    pub fn cancel(&mut self) {
        self.remaining_seconds = 0;
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }
}
