//! Sleep timer countdown
//!
//! Owned by `PlaybackEngine`. The host drives it with a one-second repeating
//! task; the timer itself never schedules anything.

use serde::{Deserialize, Serialize};

/// Timer state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SleepTimerState {
    /// Not counting
    Idle,

    /// Counting down; `remaining_seconds` is always at least 1
    Running { remaining_seconds: u32 },
}

/// Result of one elapsed second
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SleepTick {
    /// Timer was idle, nothing happened
    Idle,

    /// Still counting
    Running { remaining_seconds: u32 },

    /// Reached zero on this tick and returned to `Idle`
    Expired,
}

/// Countdown that forces a pause at zero
#[derive(Debug, Clone)]
pub struct SleepTimer {
    state: SleepTimerState,
}

impl SleepTimer {
    pub fn new() -> Self {
        Self {
            state: SleepTimerState::Idle,
        }
    }

    /// Start counting from `seconds`, replacing any running countdown
    ///
    /// Arming with 0 seconds leaves the timer idle.
    pub fn arm(&mut self, seconds: u32) {
        self.state = if seconds == 0 {
            SleepTimerState::Idle
        } else {
            SleepTimerState::Running {
                remaining_seconds: seconds,
            }
        };
    }

    /// Stop counting; returns whether a countdown was running
    pub fn cancel(&mut self) -> bool {
        let was_running = self.is_running();
        self.state = SleepTimerState::Idle;
        was_running
    }

    /// Advance by one second
    pub fn tick(&mut self) -> SleepTick {
        match self.state {
            SleepTimerState::Idle => SleepTick::Idle,
            SleepTimerState::Running { remaining_seconds } => {
                let remaining_seconds = remaining_seconds.saturating_sub(1);
                if remaining_seconds == 0 {
                    self.state = SleepTimerState::Idle;
                    SleepTick::Expired
                } else {
                    self.state = SleepTimerState::Running { remaining_seconds };
                    SleepTick::Running { remaining_seconds }
                }
            }
        }
    }

    pub fn state(&self) -> SleepTimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, SleepTimerState::Running { .. })
    }

    /// Seconds left, `None` when idle
    pub fn remaining_seconds(&self) -> Option<u32> {
        match self.state {
            SleepTimerState::Idle => None,
            SleepTimerState::Running { remaining_seconds } => Some(remaining_seconds),
        }
    }
}

impl Default for SleepTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_down_to_expiry_once() {
        let mut timer = SleepTimer::new();
        timer.arm(3);

        assert_eq!(timer.tick(), SleepTick::Running { remaining_seconds: 2 });
        assert_eq!(timer.tick(), SleepTick::Running { remaining_seconds: 1 });
        assert_eq!(timer.tick(), SleepTick::Expired);
        assert_eq!(timer.state(), SleepTimerState::Idle);

        // Further ticks do nothing
        assert_eq!(timer.tick(), SleepTick::Idle);
    }

    #[test]
    fn rearming_replaces_remaining() {
        let mut timer = SleepTimer::new();
        timer.arm(600);
        timer.tick();
        timer.arm(120);
        assert_eq!(timer.remaining_seconds(), Some(120));
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut timer = SleepTimer::new();
        assert!(!timer.cancel());

        timer.arm(60);
        assert!(timer.cancel());
        assert!(!timer.cancel());
        assert_eq!(timer.remaining_seconds(), None);
    }

    #[test]
    fn arming_zero_stays_idle() {
        let mut timer = SleepTimer::new();
        timer.arm(0);
        assert!(!timer.is_running());
    }
}
