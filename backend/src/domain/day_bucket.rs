//! Day buckets and inclusive windows over diaper log timestamps.
//!
//! Two conventions live side by side and are never mixed:
//! - a **day bucket** is half-open, `[local midnight, next local midnight)`,
//!   and is what reconciliation and the calendar grid use;
//! - a **window** (week, month) is inclusive on both ends and stops at
//!   `23:59:59.999` local time on its last day.
//!
//! Everything is generic over [`TimeZone`] so callers decide what "local"
//! means. The services pass [`chrono::Local`].

use chrono::{DateTime, Datelike, Duration, LocalResult, NaiveDate, TimeZone};
use shared::DiaperLog;

/// First valid instant of `date` in `tz`.
///
/// When midnight falls into a DST gap the first hour that exists is used;
/// when it is ambiguous the earlier instant wins.
pub fn local_midnight<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> Option<DateTime<Tz>> {
    (0..24).find_map(|hour| {
        let naive = date.and_hms_opt(hour, 0, 0)?;
        match tz.from_local_datetime(&naive) {
            LocalResult::Single(dt) => Some(dt),
            LocalResult::Ambiguous(earliest, _) => Some(earliest),
            LocalResult::None => None,
        }
    })
}

/// Last millisecond of `date` in `tz` (`23:59:59.999` local time)
pub fn local_end_of_day<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> Option<i64> {
    let naive = date.and_hms_milli_opt(23, 59, 59, 999)?;
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Some(dt.timestamp_millis()),
        LocalResult::Ambiguous(_, latest) => Some(latest.timestamp_millis()),
        LocalResult::None => {
            let next_midnight = local_midnight(tz, date.succ_opt()?)?;
            Some(next_midnight.timestamp_millis() - 1)
        }
    }
}

/// Calendar date of a millisecond timestamp in `tz`
pub fn local_date<Tz: TimeZone>(tz: &Tz, timestamp: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp_millis(timestamp).map(|utc| utc.with_timezone(tz).date_naive())
}

/// Local midnight, in epoch milliseconds, of the day containing `timestamp`
pub fn start_of_day<Tz: TimeZone>(tz: &Tz, timestamp: i64) -> Option<i64> {
    DayBucket::containing(tz, timestamp).map(|bucket| bucket.start)
}

/// Last day of the given month
pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let next_month_start = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    next_month_start?.pred_opt()
}

/// Half-open interval covering one local calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayBucket {
    pub date: NaiveDate,
    /// Local midnight, inclusive
    pub start: i64,
    /// Next local midnight, exclusive
    pub end: i64,
}

impl DayBucket {
    pub fn for_date<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> Option<Self> {
        let start = local_midnight(tz, date)?.timestamp_millis();
        let end = local_midnight(tz, date.succ_opt()?)?.timestamp_millis();
        Some(Self { date, start, end })
    }

    pub fn containing<Tz: TimeZone>(tz: &Tz, timestamp: i64) -> Option<Self> {
        Self::for_date(tz, local_date(tz, timestamp)?)
    }

    pub fn contains(&self, timestamp: i64) -> bool {
        timestamp >= self.start && timestamp < self.end
    }

    pub fn count(&self, logs: &[DiaperLog]) -> usize {
        count_in_bucket(logs, self)
    }
}

/// Time range inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InclusiveWindow {
    pub start: i64,
    pub end: i64,
}

impl InclusiveWindow {
    /// Window from local midnight of `first` through `23:59:59.999` of `last`
    pub fn for_dates<Tz: TimeZone>(tz: &Tz, first: NaiveDate, last: NaiveDate) -> Option<Self> {
        let start = local_midnight(tz, first)?.timestamp_millis();
        let end = local_end_of_day(tz, last)?;
        Some(Self { start, end })
    }

    pub fn contains(&self, timestamp: i64) -> bool {
        timestamp >= self.start && timestamp <= self.end
    }

    pub fn count(&self, logs: &[DiaperLog]) -> usize {
        aggregate_count(logs, self.start, self.end)
    }
}

/// Sunday-start week containing `today`
pub fn week_window<Tz: TimeZone>(tz: &Tz, today: NaiveDate) -> Option<InclusiveWindow> {
    let days_since_sunday = i64::from(today.weekday().num_days_from_sunday());
    let sunday = today.checked_sub_signed(Duration::days(days_since_sunday))?;
    let saturday = sunday.checked_add_signed(Duration::days(6))?;
    InclusiveWindow::for_dates(tz, sunday, saturday)
}

/// Whole calendar month, first day 00:00:00.000 through last day 23:59:59.999
pub fn month_window<Tz: TimeZone>(tz: &Tz, year: i32, month: u32) -> Option<InclusiveWindow> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let last = last_day_of_month(year, month)?;
    InclusiveWindow::for_dates(tz, first, last)
}

/// Number of logs with `window_start <= timestamp <= window_end`
pub fn aggregate_count(logs: &[DiaperLog], window_start: i64, window_end: i64) -> usize {
    logs.iter()
        .filter(|log| log.timestamp >= window_start && log.timestamp <= window_end)
        .count()
}

/// Number of logs inside a half-open day bucket
pub fn count_in_bucket(logs: &[DiaperLog], bucket: &DayBucket) -> usize {
    logs.iter().filter(|log| bucket.contains(log.timestamp)).count()
}
