use contracts::common::ListResponse;
use contracts::domain::leave::{
    LeaveRequest, LeaveStats, LeaveType, LeaveTypeDto, ReviewLeaveRequest,
};

use crate::shared::api_utils::{delete, get_json, post_json, put_json};
use crate::shared::resource::build_query;

pub async fn list_requests(status: String) -> Result<Vec<LeaveRequest>, String> {
    let query = build_query(&[("status", status)]);
    let response: ListResponse<LeaveRequest> =
        get_json(&format!("/api/leave/requests{}", query)).await?;
    Ok(response.items)
}

pub async fn stats() -> Result<LeaveStats, String> {
    get_json("/api/leave/requests/stats").await
}

/// Review endpoint: status must be APPROVED or REJECTED, comments are
/// required for rejection (validated before this is called).
pub async fn review(id: String, request: ReviewLeaveRequest) -> Result<LeaveRequest, String> {
    post_json(&format!("/api/leave/requests/{}/review", id), &request).await
}

pub async fn list_types() -> Result<Vec<LeaveType>, String> {
    let response: ListResponse<LeaveType> = get_json("/api/leave/types").await?;
    Ok(response.items)
}

pub async fn save_type(dto: LeaveTypeDto) -> Result<LeaveType, String> {
    match &dto.id {
        Some(id) => put_json(&format!("/api/leave/types/{}", id), &dto).await,
        None => post_json("/api/leave/types", &dto).await,
    }
}

pub async fn deactivate_type(id: String) -> Result<(), String> {
    delete(&format!("/api/leave/types/{}", id)).await
}
