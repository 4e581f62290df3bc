use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single recorded diaper change.
///
/// The timestamp is a sort key and day-bucket key. Events synthesized for a
/// day share that day's local midnight plus a small millisecond offset, so it
/// is not a precise wall-clock reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiaperLog {
    pub id: String,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
}

impl DiaperLog {
    /// Create a log with a freshly generated id
    pub fn new(timestamp: i64) -> Self {
        Self {
            id: Self::generate_id(),
            timestamp,
        }
    }

    /// Generate an opaque unique log id
    pub fn generate_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Diaper brand recorded on a child profile.
///
/// Older exports stored the Hebrew display label, so those are accepted on input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiaperBrand {
    #[default]
    #[serde(alias = "האגיס")]
    Huggies,
    #[serde(alias = "פמפרס")]
    Pampers,
    #[serde(alias = "טיטולים")]
    Titulim,
    #[serde(alias = "אחר")]
    Other,
}

impl DiaperBrand {
    pub fn display_name(&self) -> &'static str {
        match self {
            DiaperBrand::Huggies => "Huggies",
            DiaperBrand::Pampers => "Pampers",
            DiaperBrand::Titulim => "Titulim",
            DiaperBrand::Other => "Other",
        }
    }
}

impl fmt::Display for DiaperBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Represents a child whose diaper usage is tracked.
///
/// This is also the persisted shape: camelCase keys like every wire type,
/// ISO calendar date for the birth date and the full ordered log list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Child {
    pub id: String,
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub diaper_brand: DiaperBrand,
    /// Ordered ascending by timestamp
    #[serde(default)]
    pub logs: Vec<DiaperLog>,
}

impl Child {
    /// Create a child with a fresh id and an empty log list
    pub fn new(name: impl Into<String>, date_of_birth: NaiveDate, diaper_brand: DiaperBrand) -> Self {
        Self {
            id: Self::generate_id(),
            name: name.into(),
            date_of_birth,
            diaper_brand,
            logs: Vec::new(),
        }
    }

    /// Generate an opaque unique child id
    pub fn generate_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Advisory consumption estimate returned by the recommendation collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiaperConsumptionEstimate {
    pub daily: u32,
    pub weekly: u32,
    pub monthly: u32,
}

/// Request for creating a new child
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateChildRequest {
    pub name: String,
    pub date_of_birth: NaiveDate, // ISO 8601 date format (YYYY-MM-DD)
    pub diaper_brand: DiaperBrand,
}

/// Response after creating a child
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChildResponse {
    pub child: Child,
    pub success_message: String,
}

/// Response containing a list of children
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChildListResponse {
    pub children: Vec<Child>,
}

/// Request to declare the number of changes on a calendar day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SetDayCountRequest {
    pub date: NaiveDate,
    /// Negative values are treated as zero
    pub count: i64,
}

/// Response after a day count was reconciled
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SetDayCountResponse {
    pub child_id: String,
    pub date: NaiveDate,
    /// Number of changes recorded for the day after reconciliation
    pub count: usize,
    /// Total number of changes recorded for the child
    pub total_logs: usize,
    pub success_message: String,
}

/// Type of calendar day for explicit rendering logic
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CalendarDayType {
    /// Day from the previous month shown before the first of the month
    PaddingBefore,
    /// Actual day within the month
    MonthDay,
    /// Day from the next month filling out the six-week grid
    PaddingAfter,
}

/// Represents a calendar month with per-day change counts
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalendarMonth {
    pub month: u32,
    pub year: i32,
    pub month_name: String,
    pub days: Vec<CalendarDay>,
    pub first_day_of_week: u32, // 0 = Sunday, 1 = Monday, etc.
    pub previous_month: u32,
    pub previous_year: i32,
    pub next_month: u32,
    pub next_year: i32,
}

/// Represents a single cell in the calendar grid
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub day: u32,
    pub count: usize,
    pub day_type: CalendarDayType,
    pub is_today: bool,
}

/// Count for one Sunday-aligned sub-week of a month
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyBreakdown {
    pub label: String,
    /// Day of month the (clipped) week starts on
    pub start_day: u32,
    /// Day of month the (clipped) week ends on
    pub end_day: u32,
    pub count: usize,
}

/// Count for a single day of the seven-day chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyUsage {
    pub date: NaiveDate,
    /// Short weekday name, e.g. "Mon"
    pub label: String,
    pub count: usize,
}

/// Weekly and monthly totals for one child
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChildUsageTotals {
    pub child_id: String,
    pub child_name: String,
    pub weekly_total: usize,
    pub monthly_total: usize,
}

/// Usage summary across all children
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UsageSummaryResponse {
    pub children: Vec<ChildUsageTotals>,
}

/// Everything the per-child usage card shows
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChildUsageReport {
    pub child_id: String,
    pub child_name: String,
    pub age_in_months: u32,
    pub diaper_brand: DiaperBrand,
    pub month_name: String,
    pub monthly_actual: usize,
    pub weekly_breakdowns: Vec<WeeklyBreakdown>,
    pub last_seven_days: Vec<DailyUsage>,
    pub recommendation: Option<DiaperConsumptionEstimate>,
    pub recommendation_error: Option<String>,
}
