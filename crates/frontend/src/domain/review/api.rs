use contracts::common::ListResponse;
use contracts::domain::review::{PerformanceReview, ReviewCycle, ReviewCycleDto, ReviewCycleStatus};

use crate::shared::api_utils::{get_json, post_empty, post_json, put_json};
use crate::shared::resource::build_query;

pub async fn list_cycles(status: String) -> Result<Vec<ReviewCycle>, String> {
    let query = build_query(&[("status", status)]);
    let response: ListResponse<ReviewCycle> =
        get_json(&format!("/api/review-cycles{}", query)).await?;
    Ok(response.items)
}

pub async fn get_cycle(id: String) -> Result<ReviewCycle, String> {
    get_json(&format!("/api/review-cycles/{}", id)).await
}

pub async fn save_cycle(dto: ReviewCycleDto) -> Result<ReviewCycle, String> {
    match &dto.id {
        Some(id) => put_json(&format!("/api/review-cycles/{}", id), &dto).await,
        None => post_json("/api/review-cycles", &dto).await,
    }
}

/// One-time transition: fans out a PerformanceReview per employee server-side.
pub async fn activate_cycle(id: String) -> Result<ReviewCycle, String> {
    post_empty(&format!("/api/review-cycles/{}/activate", id)).await
}

pub async fn transition_cycle(
    id: String,
    status: ReviewCycleStatus,
) -> Result<ReviewCycle, String> {
    #[derive(serde::Serialize)]
    struct Body {
        status: ReviewCycleStatus,
    }
    post_json(&format!("/api/review-cycles/{}/status", id), &Body { status }).await
}

/// Advance one review to the next stage of its sequential pipeline.
pub async fn advance_review(id: String) -> Result<PerformanceReview, String> {
    post_empty(&format!("/api/performance-reviews/{}/advance", id)).await
}
