//! Calendar domain logic for the diaper tracker.
//!
//! This module builds the month grid the calendar view edits day counts on,
//! plus the date helpers around it. Rendering stays in the UI; every count
//! shown in a cell comes from the same half-open day buckets reconciliation
//! uses.

use chrono::{Datelike, Duration, NaiveDate, TimeZone};
use log::{debug, warn};
use shared::{CalendarDay, CalendarDayType, CalendarMonth, DiaperLog};
use std::collections::HashMap;

use super::day_bucket::local_date;

/// Cells in the grid: always six full weeks
pub const CALENDAR_GRID_CELLS: usize = 42;

/// Calendar service that handles all calendar-related business logic
#[derive(Clone, Default)]
pub struct CalendarService;

impl CalendarService {
    pub fn new() -> Self {
        Self
    }

    /// Generate a Sunday-start, six-week grid for a month with per-day log counts.
    ///
    /// Returns `None` for an invalid month/year.
    pub fn generate_calendar_month<Tz: TimeZone>(
        &self,
        tz: &Tz,
        logs: &[DiaperLog],
        month: u32,
        year: i32,
        today: NaiveDate,
    ) -> Option<CalendarMonth> {
        let Some(month_start) = NaiveDate::from_ymd_opt(year, month, 1) else {
            warn!("Invalid calendar month requested: {}/{}", month, year);
            return None;
        };
        let first_day = self.first_day_of_month(month, year);
        let grid_start = month_start.checked_sub_signed(Duration::days(i64::from(first_day)))?;

        debug!("Generating calendar for {}/{} starting {}", month, year, grid_start);

        let counts_by_day = self.group_logs_by_day(tz, logs);

        let days = grid_start
            .iter_days()
            .take(CALENDAR_GRID_CELLS)
            .map(|date| {
                let day_type = if date < month_start {
                    CalendarDayType::PaddingBefore
                } else if date.month() != month {
                    CalendarDayType::PaddingAfter
                } else {
                    CalendarDayType::MonthDay
                };

                CalendarDay {
                    date,
                    day: date.day(),
                    count: counts_by_day.get(&date).copied().unwrap_or(0),
                    day_type,
                    is_today: date == today,
                }
            })
            .collect();

        let (previous_month, previous_year) = self.previous_month(month, year);
        let (next_month, next_year) = self.next_month(month, year);

        Some(CalendarMonth {
            month,
            year,
            month_name: self.month_name(month).to_string(),
            days,
            first_day_of_week: first_day,
            previous_month,
            previous_year,
            next_month,
            next_year,
        })
    }

    /// Count logs per local calendar day
    fn group_logs_by_day<Tz: TimeZone>(&self, tz: &Tz, logs: &[DiaperLog]) -> HashMap<NaiveDate, usize> {
        let mut counts_by_day: HashMap<NaiveDate, usize> = HashMap::new();

        for log in logs {
            if let Some(date) = local_date(tz, log.timestamp) {
                *counts_by_day.entry(date).or_insert(0) += 1;
            }
        }

        counts_by_day
    }

    /// Get the first day of month (0 = Sunday, 1 = Monday, etc.)
    pub fn first_day_of_month(&self, month: u32, year: i32) -> u32 {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|date| date.weekday().num_days_from_sunday())
            .unwrap_or(0)
    }

    /// Get the human-readable name for a month number
    pub fn month_name(&self, month: u32) -> &'static str {
        match month {
            1 => "January", 2 => "February", 3 => "March", 4 => "April",
            5 => "May", 6 => "June", 7 => "July", 8 => "August",
            9 => "September", 10 => "October", 11 => "November", 12 => "December",
            _ => "Invalid Month",
        }
    }

    /// Navigate to the previous month
    pub fn previous_month(&self, current_month: u32, current_year: i32) -> (u32, i32) {
        if current_month == 1 {
            (12, current_year - 1)
        } else {
            (current_month - 1, current_year)
        }
    }

    /// Navigate to the next month
    pub fn next_month(&self, current_month: u32, current_year: i32) -> (u32, i32) {
        if current_month == 12 {
            (1, current_year + 1)
        } else {
            (current_month + 1, current_year)
        }
    }
}
