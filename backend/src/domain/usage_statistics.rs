//! Derived usage numbers: in-month weekly breakdown, the seven-day chart,
//! per-child weekly/monthly totals and the child's age in months.

use chrono::{Datelike, Duration, NaiveDate, TimeZone};
use shared::{Child, ChildUsageTotals, DailyUsage, DiaperLog, WeeklyBreakdown};

use super::day_bucket::{last_day_of_month, month_window, week_window, DayBucket, InclusiveWindow};

/// Split a month into Sunday-aligned sub-weeks clipped to the month and count
/// the logs of each one.
///
/// The first and last sub-weeks may be shorter than seven days. The counts add
/// up to the inclusive month total.
pub fn monthly_weekly_breakdown<Tz: TimeZone>(
    tz: &Tz,
    logs: &[DiaperLog],
    year: i32,
    month: u32,
) -> Vec<WeeklyBreakdown> {
    let (Some(first), Some(last)) = (NaiveDate::from_ymd_opt(year, month, 1), last_day_of_month(year, month)) else {
        return Vec::new();
    };

    let mut breakdowns = Vec::new();
    let mut week_start = first;
    while week_start <= last {
        let days_to_saturday = 6 - i64::from(week_start.weekday().num_days_from_sunday());
        let week_end = week_start
            .checked_add_signed(Duration::days(days_to_saturday))
            .map_or(last, |saturday| saturday.min(last));

        let count = InclusiveWindow::for_dates(tz, week_start, week_end)
            .map_or(0, |window| window.count(logs));

        breakdowns.push(WeeklyBreakdown {
            label: format!("Week {}-{}", week_start.day(), week_end.day()),
            start_day: week_start.day(),
            end_day: week_end.day(),
            count,
        });

        match week_end.succ_opt() {
            Some(next) => week_start = next,
            None => break,
        }
    }

    breakdowns
}

/// Day counts for the seven days ending with `today`, oldest first
pub fn last_seven_days<Tz: TimeZone>(tz: &Tz, logs: &[DiaperLog], today: NaiveDate) -> Vec<DailyUsage> {
    (0..7)
        .rev()
        .filter_map(|days_ago| today.checked_sub_signed(Duration::days(days_ago)))
        .map(|date| DailyUsage {
            date,
            label: date.format("%a").to_string(),
            count: DayBucket::for_date(tz, date).map_or(0, |bucket| bucket.count(logs)),
        })
        .collect()
}

/// Current-week and current-month totals for one child
pub fn child_totals<Tz: TimeZone>(tz: &Tz, child: &Child, today: NaiveDate) -> ChildUsageTotals {
    let weekly_total = week_window(tz, today).map_or(0, |window| window.count(&child.logs));
    let monthly_total =
        month_window(tz, today.year(), today.month()).map_or(0, |window| window.count(&child.logs));

    ChildUsageTotals {
        child_id: child.id.clone(),
        child_name: child.name.clone(),
        weekly_total,
        monthly_total,
    }
}

/// Whole months between birth and `today`; a month only counts once the
/// birthday's day of month is reached. Never negative.
pub fn age_in_months(date_of_birth: NaiveDate, today: NaiveDate) -> u32 {
    let mut months = (today.year() - date_of_birth.year()) * 12 + today.month() as i32
        - date_of_birth.month() as i32;
    if today.day() < date_of_birth.day() {
        months -= 1;
    }
    months.max(0) as u32
}
