//! # Clock
//!
//! The wall clock is the only environmental input of the codec. The encoder falls back to
//! it when no timestamp is supplied, and the GGA decoder borrows today's date from it since
//! GGA sentences carry a time of day only. Both take a [`Clock`] so tests can pin time.

use time::OffsetDateTime;

/// A source of the current time.
pub trait Clock {
    /// Returns the current instant.
    fn now(&self) -> OffsetDateTime;
}

/// The system wall clock, in UTC.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// A clock frozen at a single instant.
///
/// ```rust
/// use nmea0183_codec::{Clock, FixedClock};
/// use time::OffsetDateTime;
///
/// let clock = FixedClock(OffsetDateTime::UNIX_EPOCH);
/// assert_eq!(clock.now(), OffsetDateTime::UNIX_EPOCH);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedClock(pub OffsetDateTime);

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.0
    }
}

impl<C> Clock for &C
where
    C: Clock + ?Sized,
{
    fn now(&self) -> OffsetDateTime {
        (**self).now()
    }
}
