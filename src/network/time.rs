//! Millisecond time budgets.
//!
//! Every wait in the HTTP endpoints is a poll loop: check the socket, check
//! the [`Deadline`], give the platform a chance to do other work through
//! [`Clock::idle`], repeat. A budget of zero milliseconds never expires.

use super::error::Error;

/// A free running millisecond counter.
pub trait Clock {
    /// Milliseconds since an arbitrary epoch. Allowed to wrap around.
    fn millis(&self) -> u32;

    /// Called between polls while waiting. The default does nothing.
    fn idle(&mut self) {}
}

/// A point in time after which a wait gives up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    start: u32,
    ms: u32,
}

impl Deadline {
    /// Start a budget of `ms` milliseconds, zero meaning forever.
    pub fn start<C: Clock + ?Sized>(clock: &C, ms: u32) -> Self {
        Self {
            start: clock.millis(),
            ms,
        }
    }

    /// Whether the budget has been used up.
    pub fn expired<C: Clock + ?Sized>(&self, clock: &C) -> bool {
        self.ms != 0 && clock.millis().wrapping_sub(self.start) >= self.ms
    }
}

/// Poll `ready` until it produces a value or `ms` milliseconds elapse.
///
/// `ready` is always called at least once. Errors from `ready` end the wait
/// immediately; an elapsed budget returns [`Error::Timeout`].
pub fn poll<C, T, F>(clock: &mut C, ms: u32, mut ready: F) -> Result<T, Error>
where
    C: Clock + ?Sized,
    F: FnMut() -> Result<Option<T>, Error>,
{
    let deadline = Deadline::start(clock, ms);
    loop {
        if let Some(value) = ready()? {
            return Ok(value);
        }
        if deadline.expired(clock) {
            return Err(Error::Timeout);
        }
        clock.idle();
    }
}
