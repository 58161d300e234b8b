//! Bounded polling waits.
//!
//! The lookup engine itself never times out; bounded waits only appear where
//! a caller explicitly asks for one (e.g. waiting for a progress dialog to
//! close before sampling the active shell again).

mod condition;

use std::thread;
use std::time::{Duration, Instant};

use tracing::debug;

pub use condition::ShellWithTextIsActive;

use crate::core::constants::wait::{LONG, NORMAL, POLL_INTERVAL, SHORT};
use crate::core::{Error, Result};

/// How long a wait may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimePeriod {
    /// Test the condition once.
    None,
    Short,
    #[default]
    Normal,
    Long,
    Custom(Duration),
}

impl TimePeriod {
    /// Returns the period as a duration.
    #[must_use]
    pub const fn duration(self) -> Duration {
        match self {
            Self::None => Duration::ZERO,
            Self::Short => SHORT,
            Self::Normal => NORMAL,
            Self::Long => LONG,
            Self::Custom(duration) => duration,
        }
    }
}

/// What happens when a wait runs out of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeoutPolicy {
    /// Fail with [`Error::WaitTimeout`].
    #[default]
    Raise,
    /// Return `false` and let the caller decide.
    Ignore,
}

/// A condition polled by [`wait_while`] and [`wait_until`].
pub trait WaitCondition {
    /// Evaluates the condition once.
    ///
    /// # Errors
    ///
    /// Returns an error if the condition cannot be evaluated; the wait stops
    /// and propagates it.
    fn test(&self) -> Result<bool>;

    /// Describes the condition for logs and timeout errors.
    fn description(&self) -> String;
}

/// Waits while `condition` holds.
///
/// Returns `true` once the condition stops holding, `false` if the period
/// expired under [`TimeoutPolicy::Ignore`].
///
/// # Errors
///
/// Returns [`Error::WaitTimeout`] under [`TimeoutPolicy::Raise`], or the
/// condition's own error.
pub fn wait_while(
    condition: &dyn WaitCondition,
    period: TimePeriod,
    policy: TimeoutPolicy,
) -> Result<bool> {
    poll(condition, false, period, policy)
}

/// Waits until `condition` holds.
///
/// Returns `true` once the condition holds, `false` if the period expired
/// under [`TimeoutPolicy::Ignore`].
///
/// # Errors
///
/// Returns [`Error::WaitTimeout`] under [`TimeoutPolicy::Raise`], or the
/// condition's own error.
pub fn wait_until(
    condition: &dyn WaitCondition,
    period: TimePeriod,
    policy: TimeoutPolicy,
) -> Result<bool> {
    poll(condition, true, period, policy)
}

fn poll(condition: &dyn WaitCondition, target: bool, period: TimePeriod, policy: TimeoutPolicy) -> Result<bool> {
    let timeout = period.duration();
    // None when the period overflows the clock: no deadline.
    let deadline = Instant::now().checked_add(timeout);
    let verb = if target { "until" } else { "while" };
    debug!(condition = %condition.description(), ?timeout, "waiting {verb}");

    loop {
        if condition.test()? == target {
            return Ok(true);
        }
        let pause = match deadline {
            Some(deadline) => {
                let now = Instant::now();
                if now >= deadline {
                    break;
                }
                POLL_INTERVAL.min(deadline - now)
            }
            None => POLL_INTERVAL,
        };
        thread::sleep(pause);
    }

    match policy {
        TimeoutPolicy::Raise => Err(Error::WaitTimeout { condition: condition.description(), period: timeout }),
        TimeoutPolicy::Ignore => {
            debug!(condition = %condition.description(), "wait {verb} expired, ignoring");
            Ok(false)
        }
    }
}
