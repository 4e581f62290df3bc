//! Domain commands and results.
//!
//! Commands carry already-parsed input from the REST layer into the services;
//! results carry what the service did back out.

pub mod diaper_logs {
    use chrono::NaiveDate;

    /// Declare how many changes happened on a calendar day
    #[derive(Debug, Clone)]
    pub struct SetDayCountCommand {
        pub child_id: String,
        pub date: NaiveDate,
        /// Negative values are treated as zero
        pub count: i64,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct SetDayCountResult {
        pub child_found: bool,
        pub child_id: String,
        pub date: NaiveDate,
        /// Changes on that day after the update
        pub count: usize,
        pub total_logs: usize,
    }
}
