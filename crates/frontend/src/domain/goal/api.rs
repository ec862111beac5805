use contracts::common::ListResponse;
use contracts::domain::goal::{Goal, GoalDto, GoalStatus, KeyResultDto};

use crate::shared::api_utils::{delete, get_json, post_json, put_json};
use crate::shared::resource::build_query;

pub async fn list(goal_type: String, status: String) -> Result<Vec<Goal>, String> {
    let query = build_query(&[("type", goal_type), ("status", status)]);
    let response: ListResponse<Goal> = get_json(&format!("/api/goals{}", query)).await?;
    Ok(response.items)
}

pub async fn get(id: String) -> Result<Goal, String> {
    get_json(&format!("/api/goals/{}", id)).await
}

pub async fn save(dto: GoalDto) -> Result<Goal, String> {
    match &dto.id {
        Some(id) => put_json(&format!("/api/goals/{}", id), &dto).await,
        None => post_json("/api/goals", &dto).await,
    }
}

pub async fn remove(id: String) -> Result<(), String> {
    delete(&format!("/api/goals/{}", id)).await
}

pub async fn update_status(id: String, status: GoalStatus) -> Result<Goal, String> {
    #[derive(serde::Serialize)]
    struct Body {
        status: GoalStatus,
    }
    post_json(&format!("/api/goals/{}/status", id), &Body { status }).await
}

pub async fn save_key_result(goal_id: String, dto: KeyResultDto) -> Result<Goal, String> {
    match &dto.id {
        Some(id) => {
            put_json(
                &format!("/api/goals/{}/key-results/{}", goal_id, id),
                &dto,
            )
            .await
        }
        None => post_json(&format!("/api/goals/{}/key-results", goal_id), &dto).await,
    }
}
