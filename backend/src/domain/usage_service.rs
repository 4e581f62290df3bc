//! Usage summaries and the per-child usage report.

use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};
use log::{info, warn};
use std::sync::Arc;

use crate::domain::calendar::CalendarService;
use crate::domain::child_store::ChildStore;
use crate::domain::day_bucket::month_window;
use crate::domain::recommendation_service::RecommendationProvider;
use crate::domain::usage_statistics::{age_in_months, child_totals, last_seven_days, monthly_weekly_breakdown};
use shared::{Child, ChildUsageReport, UsageSummaryResponse};

#[derive(Clone)]
pub struct UsageService {
    store: ChildStore,
    calendar_service: CalendarService,
    recommendation_provider: Arc<dyn RecommendationProvider>,
}

impl UsageService {
    pub fn new(
        store: ChildStore,
        calendar_service: CalendarService,
        recommendation_provider: Arc<dyn RecommendationProvider>,
    ) -> Self {
        Self {
            store,
            calendar_service,
            recommendation_provider,
        }
    }

    /// This week's and this month's totals for every child
    pub async fn usage_summary(&self) -> Result<UsageSummaryResponse> {
        let today = Local::now().date_naive();
        let children = self
            .store
            .read(|collection| {
                collection
                    .children()
                    .iter()
                    .map(|child| child_totals(&Local, child, today))
                    .collect::<Vec<_>>()
            })
            .await;

        info!("Built usage summary for {} children", children.len());
        Ok(UsageSummaryResponse { children })
    }

    /// Full usage report for one child, `None` if the child doesn't exist.
    ///
    /// A failing recommendation doesn't fail the report; its message is
    /// returned in `recommendation_error` instead.
    pub async fn child_usage_report(&self, child_id: &str) -> Result<Option<ChildUsageReport>> {
        let Some(child) = self
            .store
            .read(|collection| collection.get(child_id).cloned())
            .await
        else {
            warn!("Usage report requested for unknown child: {}", child_id);
            return Ok(None);
        };

        let today = Local::now().date_naive();
        let mut report = self.build_report(&child, today);

        match self.recommendation_provider.recommend(report.age_in_months).await {
            Ok(estimate) => report.recommendation = Some(estimate),
            Err(e) => {
                warn!("No recommendation for child {}: {}", child_id, e);
                report.recommendation_error = Some(e.to_string());
            }
        }

        Ok(Some(report))
    }

    /// Everything in the report that comes from the child's own logs
    fn build_report(&self, child: &Child, today: NaiveDate) -> ChildUsageReport {
        let (year, month) = (today.year(), today.month());
        let monthly_actual = month_window(&Local, year, month).map_or(0, |window| window.count(&child.logs));

        ChildUsageReport {
            child_id: child.id.clone(),
            child_name: child.name.clone(),
            age_in_months: age_in_months(child.date_of_birth, today),
            diaper_brand: child.diaper_brand,
            month_name: self.calendar_service.month_name(month).to_string(),
            monthly_actual,
            weekly_breakdowns: monthly_weekly_breakdown(&Local, &child.logs, year, month),
            last_seven_days: last_seven_days(&Local, &child.logs, today),
            recommendation: None,
            recommendation_error: None,
        }
    }
}
