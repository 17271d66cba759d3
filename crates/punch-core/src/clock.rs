//! Source of "now" for ledger operations.

use chrono::{DateTime, Duration, FixedOffset, Local, NaiveDate, NaiveTime, SubsecRound, TimeZone};

/// A point in time with an explicit UTC offset.
///
/// The ledger stores offsets as given so that log lines render in the
/// timezone the user punched in from.
pub type Timestamp = DateTime<FixedOffset>;

/// Supplies the current time to the ledger.
pub trait Clock {
    /// The current instant, truncated to whole seconds.
    fn now(&self) -> Timestamp;

    /// Start of `day` and start of the following day.
    ///
    /// Each midnight carries its own offset, so a day spanning a DST change
    /// is 23 or 25 hours long.
    fn day_bounds(&self, day: NaiveDate) -> (Timestamp, Timestamp);
}

/// The wall clock in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Local::now().fixed_offset().trunc_subsecs(0)
    }

    fn day_bounds(&self, day: NaiveDate) -> (Timestamp, Timestamp) {
        (local_midnight(day), local_midnight(day + Duration::days(1)))
    }
}

/// First instant of `day` in the local timezone.
///
/// Where midnight falls in a DST gap the day starts an hour later.
fn local_midnight(day: NaiveDate) -> Timestamp {
    let midnight = day.and_time(NaiveTime::MIN);
    Local
        .from_local_datetime(&midnight)
        .earliest()
        .or_else(|| {
            Local
                .from_local_datetime(&(midnight + Duration::hours(1)))
                .earliest()
        })
        .map_or_else(|| midnight.and_utc().fixed_offset(), |dt| dt.fixed_offset())
}

/// A clock frozen at a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub Timestamp);

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }

    /// Both midnights use the frozen instant's offset.
    fn day_bounds(&self, day: NaiveDate) -> (Timestamp, Timestamp) {
        let offset = *self.0.offset();
        let start = day.and_time(NaiveTime::MIN) - offset;
        let start = offset.from_utc_datetime(&start);
        (start, start + Duration::days(1))
    }
}
