use crate::domain::commands::diaper_logs::{SetDayCountCommand, SetDayCountResult};
use shared::{SetDayCountRequest, SetDayCountResponse};

/// Mapper between the day-count DTOs and the domain command/result
pub struct DiaperLogMapper;

impl DiaperLogMapper {
    pub fn to_command(child_id: String, request: SetDayCountRequest) -> SetDayCountCommand {
        SetDayCountCommand {
            child_id,
            date: request.date,
            count: request.count,
        }
    }

    pub fn to_response(result: SetDayCountResult) -> SetDayCountResponse {
        let success_message = format!("{} changes recorded for {}", result.count, result.date.format("%B %-d, %Y"));
        SetDayCountResponse {
            child_id: result.child_id,
            date: result.date,
            count: result.count,
            total_logs: result.total_logs,
            success_message,
        }
    }
}
