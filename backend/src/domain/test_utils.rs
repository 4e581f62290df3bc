//! Time zones with daylight saving for day-bucket tests.
//!
//! Each zone has one summer period in 2024, given as UTC instants. Summer time
//! is one hour ahead of standard time.

use chrono::{Duration, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, Offset, TimeZone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DstZone {
    standard: FixedOffset,
    summer: FixedOffset,
    /// First UTC second of summer time
    summer_start: i64,
    /// First UTC second back on standard time
    summer_end: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DstOffset {
    offset: FixedOffset,
    zone: DstZone,
}

impl Offset for DstOffset {
    fn fix(&self) -> FixedOffset {
        self.offset
    }
}

/// Milliseconds since the epoch of a UTC wall-clock time
pub fn utc_millis(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> i64 {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .unwrap()
        .and_utc()
        .timestamp_millis()
}

impl DstZone {
    /// UTC+1, UTC+2 in summer. Clocks jump 02:00 -> 03:00 on March 31 and
    /// fall back 03:00 -> 02:00 on October 27, both at 01:00 UTC.
    pub fn central_europe_2024() -> Self {
        Self {
            standard: FixedOffset::east_opt(3600).unwrap(),
            summer: FixedOffset::east_opt(7200).unwrap(),
            summer_start: utc_millis(2024, 3, 31, 1, 0) / 1000,
            summer_end: utc_millis(2024, 10, 27, 1, 0) / 1000,
        }
    }

    /// UTC+0, UTC+1 in summer, switching at local midnight: March 31 starts
    /// at 01:00, and the last hour of October 26 happens twice.
    pub fn midnight_switch_2024() -> Self {
        Self {
            standard: FixedOffset::east_opt(0).unwrap(),
            summer: FixedOffset::east_opt(3600).unwrap(),
            summer_start: utc_millis(2024, 3, 31, 0, 0) / 1000,
            summer_end: utc_millis(2024, 10, 26, 23, 0) / 1000,
        }
    }

    fn offset_at(&self, utc_seconds: i64) -> FixedOffset {
        if utc_seconds >= self.summer_start && utc_seconds < self.summer_end {
            self.summer
        } else {
            self.standard
        }
    }

    fn with_offset(&self, offset: FixedOffset) -> DstOffset {
        DstOffset { offset, zone: *self }
    }
}

impl TimeZone for DstZone {
    type Offset = DstOffset;

    fn from_offset(offset: &DstOffset) -> Self {
        offset.zone
    }

    fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<DstOffset> {
        match local.and_hms_opt(0, 0, 0) {
            Some(midnight) => self.offset_from_local_datetime(&midnight),
            None => LocalResult::None,
        }
    }

    fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<DstOffset> {
        // Summer first: the same wall clock under the larger offset is the earlier instant
        let valid: Vec<DstOffset> = [self.summer, self.standard]
            .into_iter()
            .filter(|offset| {
                let utc = *local - Duration::seconds(i64::from(offset.local_minus_utc()));
                self.offset_at(utc.and_utc().timestamp()) == *offset
            })
            .map(|offset| self.with_offset(offset))
            .collect();

        match valid.as_slice() {
            [only] => LocalResult::Single(*only),
            [earliest, latest] => LocalResult::Ambiguous(*earliest, *latest),
            _ => LocalResult::None,
        }
    }

    fn offset_from_utc_date(&self, utc: &NaiveDate) -> DstOffset {
        let seconds = utc
            .and_hms_opt(0, 0, 0)
            .map_or(0, |midnight| midnight.and_utc().timestamp());
        self.with_offset(self.offset_at(seconds))
    }

    fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> DstOffset {
        self.with_offset(self.offset_at(utc.and_utc().timestamp()))
    }
}
