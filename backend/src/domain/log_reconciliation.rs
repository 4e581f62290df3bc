//! Reconciles a declared "N changes on day D" against a child's stored logs.
//!
//! Only the logs inside D's half-open day bucket are touched:
//! - more changes than stored: synthetic logs are appended at
//!   `start_of_day + k` milliseconds (`k = 0, 1, ...`) with fresh ids;
//! - fewer: the day's logs are truncated to the first `N`, dropping from the end;
//! - equal: nothing changes.
//!
//! The result is the untouched logs of every other day plus the adjusted day,
//! stably sorted ascending by timestamp.

use chrono::TimeZone;
use log::{debug, warn};
use shared::DiaperLog;

use super::day_bucket::DayBucket;

/// Set the number of logs on the local day containing `date` to `new_count`.
///
/// Negative counts are clamped to zero and counts above the number of
/// milliseconds in the day are capped to it. A `date` that cannot be placed on
/// the calendar leaves the logs unchanged.
pub fn set_count_for_day<Tz: TimeZone>(
    tz: &Tz,
    logs: &[DiaperLog],
    date: i64,
    new_count: i64,
) -> Vec<DiaperLog> {
    set_count_for_day_with(tz, logs, date, new_count, DiaperLog::generate_id)
}

/// Same as [`set_count_for_day`] with a caller-supplied id generator
pub fn set_count_for_day_with<Tz, F>(
    tz: &Tz,
    logs: &[DiaperLog],
    date: i64,
    new_count: i64,
    mut next_id: F,
) -> Vec<DiaperLog>
where
    Tz: TimeZone,
    F: FnMut() -> String,
{
    let Some(bucket) = DayBucket::containing(tz, date) else {
        warn!("Cannot place timestamp {} on the calendar, logs left unchanged", date);
        return logs.to_vec();
    };

    // Synthetic logs must stay inside the bucket: at most one per millisecond
    let day_length = usize::try_from(bucket.end - bucket.start).unwrap_or(0);
    let requested = usize::try_from(new_count.max(0)).unwrap_or(usize::MAX);
    if requested > day_length {
        warn!("Count {} for {} capped at {}", new_count, bucket.date, day_length);
    }
    let target = requested.min(day_length);

    let (mut day_logs, other_logs): (Vec<DiaperLog>, Vec<DiaperLog>) = logs
        .iter()
        .cloned()
        .partition(|log| bucket.contains(log.timestamp));

    let current = day_logs.len();
    if target > current {
        let missing = target - current;
        debug!("Adding {} synthetic logs on {}", missing, bucket.date);
        day_logs.extend((0..missing).map(|offset| DiaperLog {
            id: next_id(),
            timestamp: bucket.start + offset as i64,
        }));
    } else if target < current {
        debug!("Removing {} logs on {}", current - target, bucket.date);
        day_logs.truncate(target);
    }

    let mut reconciled = other_logs;
    reconciled.extend(day_logs);
    reconciled.sort_by_key(|log| log.timestamp);
    reconciled
}
