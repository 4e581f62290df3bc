//! Recording diaper changes.
//!
//! Counts are declared per local calendar day. The service turns a day into
//! its local-midnight timestamp and lets the collection reconcile the logs.

use anyhow::{anyhow, bail, Result};
use chrono::{Local, Utc};
use log::{info, warn};

use crate::domain::child_store::ChildStore;
use crate::domain::commands::diaper_logs::{SetDayCountCommand, SetDayCountResult};
use crate::domain::day_bucket::{local_date, local_midnight};

/// Largest count accepted for a single day
pub const MAX_DAY_COUNT: i64 = 1_000;

#[derive(Clone)]
pub struct DiaperLogService {
    store: ChildStore,
}

impl DiaperLogService {
    pub fn new(store: ChildStore) -> Self {
        Self { store }
    }

    /// Make the child's log contain exactly `count` changes on `date`.
    ///
    /// An unknown child leaves everything untouched and reports
    /// `child_found: false`.
    pub async fn set_count_for_day(&self, command: SetDayCountCommand) -> Result<SetDayCountResult> {
        info!(
            "Setting day count: child={}, date={}, count={}",
            command.child_id, command.date, command.count
        );

        if command.count > MAX_DAY_COUNT {
            bail!("Day count {} exceeds the maximum of {}", command.count, MAX_DAY_COUNT);
        }

        let day_start = local_midnight(&Local, command.date)
            .ok_or_else(|| anyhow!("Date {} has no local midnight", command.date))?
            .timestamp_millis();

        let result = self
            .store
            .mutate(|collection| {
                let child_found = collection.set_count_for_day(&Local, &command.child_id, day_start, command.count);
                let count = collection.day_count(&Local, &command.child_id, day_start).unwrap_or(0);
                let total_logs = collection
                    .get(&command.child_id)
                    .map_or(0, |child| child.logs.len());

                SetDayCountResult {
                    child_found,
                    child_id: command.child_id.clone(),
                    date: command.date,
                    count,
                    total_logs,
                }
            })
            .await;

        if !result.child_found {
            warn!("Set day count for unknown child: {}", command.child_id);
        }

        Ok(result)
    }

    /// Record one more change today. Fails once today already holds
    /// `MAX_DAY_COUNT` changes.
    pub async fn log_change_now(&self, child_id: &str) -> Result<SetDayCountResult> {
        let now = Utc::now().timestamp_millis();
        let today = local_date(&Local, now).ok_or_else(|| anyhow!("Current time is out of range"))?;

        info!("Logging a change now for child {}", child_id);

        let result = self
            .store
            .mutate(|collection| {
                let Some(current) = collection.day_count(&Local, child_id, now) else {
                    return Ok(SetDayCountResult {
                        child_found: false,
                        child_id: child_id.to_string(),
                        date: today,
                        count: 0,
                        total_logs: 0,
                    });
                };

                let target = i64::try_from(current).unwrap_or(i64::MAX).saturating_add(1);
                if target > MAX_DAY_COUNT {
                    bail!("Day count for {} is already at the maximum of {}", today, MAX_DAY_COUNT);
                }

                collection.set_count_for_day(&Local, child_id, now, target);
                let count = collection.day_count(&Local, child_id, now).unwrap_or(0);
                let total_logs = collection.get(child_id).map_or(0, |child| child.logs.len());

                Ok(SetDayCountResult {
                    child_found: true,
                    child_id: child_id.to_string(),
                    date: today,
                    count,
                    total_logs,
                })
            })
            .await?;

        if !result.child_found {
            warn!("Log change for unknown child: {}", child_id);
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::child_service::ChildService;
    use crate::storage::json::test_utils::TestEnvironment;
    use chrono::{Duration, NaiveDate};
    use shared::{CreateChildRequest, DiaperBrand};

    async fn setup() -> (TestEnvironment, DiaperLogService, String) {
        let env = TestEnvironment::new().await.unwrap();
        let store = env.child_store().await;
        let child = ChildService::new(store.clone())
            .create_child(CreateChildRequest {
                name: "Daniel".to_string(),
                date_of_birth: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
                diaper_brand: DiaperBrand::Huggies,
            })
            .await
            .unwrap()
            .child;
        (env, DiaperLogService::new(store), child.id)
    }

    fn command(child_id: &str, date: NaiveDate, count: i64) -> SetDayCountCommand {
        SetDayCountCommand {
            child_id: child_id.to_string(),
            date,
            count,
        }
    }

    #[tokio::test]
    async fn test_set_count_for_day() {
        let (_env, service, child_id) = setup().await;
        let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();

        let result = service.set_count_for_day(command(&child_id, date, 5)).await.unwrap();
        assert!(result.child_found);
        assert_eq!(result.count, 5);
        assert_eq!(result.total_logs, 5);

        let result = service.set_count_for_day(command(&child_id, date, 2)).await.unwrap();
        assert_eq!(result.count, 2);
        assert_eq!(result.total_logs, 2);
    }

    #[tokio::test]
    async fn test_other_days_are_untouched() {
        let (_env, service, child_id) = setup().await;
        let day = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();

        service.set_count_for_day(command(&child_id, day, 3)).await.unwrap();
        let result = service
            .set_count_for_day(command(&child_id, day + Duration::days(1), 4))
            .await
            .unwrap();

        assert_eq!(result.count, 4);
        assert_eq!(result.total_logs, 7);
    }

    #[tokio::test]
    async fn test_negative_count_clears_the_day() {
        let (_env, service, child_id) = setup().await;
        let day = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();

        service.set_count_for_day(command(&child_id, day, 3)).await.unwrap();
        let result = service.set_count_for_day(command(&child_id, day, -4)).await.unwrap();

        assert_eq!(result.count, 0);
        assert_eq!(result.total_logs, 0);
    }

    #[tokio::test]
    async fn test_count_above_maximum_is_rejected() {
        let (env, service, child_id) = setup().await;
        let day = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();

        assert!(service
            .set_count_for_day(command(&child_id, day, MAX_DAY_COUNT + 1))
            .await
            .is_err());
        assert!(env.child_store().await.read(|c| c.children()[0].logs.is_empty()).await);
    }

    #[tokio::test]
    async fn test_unknown_child_is_reported_not_created() {
        let (env, service, _child_id) = setup().await;
        let day = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();

        let result = service.set_count_for_day(command("missing", day, 3)).await.unwrap();
        assert!(!result.child_found);
        assert_eq!(result.count, 0);

        let result = service.log_change_now("missing").await.unwrap();
        assert!(!result.child_found);

        let snapshot = env.child_store().await.read(|collection| collection.clone()).await;
        assert_eq!(snapshot.len(), 1);
        assert!(snapshot.children()[0].logs.is_empty());
    }

    #[tokio::test]
    async fn test_log_change_now_increments_today() {
        let (_env, service, child_id) = setup().await;

        assert_eq!(service.log_change_now(&child_id).await.unwrap().count, 1);
        let result = service.log_change_now(&child_id).await.unwrap();
        assert!(result.child_found);
        assert_eq!(result.count, 2);
        assert_eq!(result.total_logs, 2);
    }

    #[tokio::test]
    async fn test_log_change_now_stops_at_maximum() {
        let (_env, service, child_id) = setup().await;
        let today = Local::now().date_naive();

        let result = service
            .set_count_for_day(command(&child_id, today, MAX_DAY_COUNT))
            .await
            .unwrap();
        assert_eq!(result.count, MAX_DAY_COUNT as usize);

        assert!(service.log_change_now(&child_id).await.is_err());
        let count = service
            .store
            .read(|collection| collection.get(&child_id).map(|child| child.logs.len()))
            .await;
        assert_eq!(count, Some(MAX_DAY_COUNT as usize));
    }
}
