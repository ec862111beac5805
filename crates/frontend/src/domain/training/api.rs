use contracts::common::ListResponse;
use contracts::domain::training::{
    EnrollmentStatus, TrainingEnrollment, TrainingProgram, TrainingProgramDto, TrainingStatus,
};

use crate::shared::api_utils::{get_json, post_empty, post_json, put_json};
use crate::shared::resource::build_query;

pub async fn list(status: String) -> Result<Vec<TrainingProgram>, String> {
    let query = build_query(&[("status", status)]);
    let response: ListResponse<TrainingProgram> =
        get_json(&format!("/api/training/programs{}", query)).await?;
    Ok(response.items)
}

pub async fn save(dto: TrainingProgramDto) -> Result<TrainingProgram, String> {
    match &dto.id {
        Some(id) => put_json(&format!("/api/training/programs/{}", id), &dto).await,
        None => post_json("/api/training/programs", &dto).await,
    }
}

pub async fn transition(id: String, status: TrainingStatus) -> Result<TrainingProgram, String> {
    #[derive(serde::Serialize)]
    struct Body {
        status: TrainingStatus,
    }
    post_json(&format!("/api/training/programs/{}/status", id), &Body { status }).await
}

pub async fn enrollments(program_id: String) -> Result<Vec<TrainingEnrollment>, String> {
    let response: ListResponse<TrainingEnrollment> =
        get_json(&format!("/api/training/programs/{}/enrollments", program_id)).await?;
    Ok(response.items)
}

/// Capacity is checked server-side; the UI only disables the button when the
/// program already reads as full.
pub async fn enroll(program_id: String) -> Result<TrainingEnrollment, String> {
    post_empty(&format!("/api/training/programs/{}/enroll", program_id)).await
}

pub async fn update_enrollment_status(
    id: String,
    status: EnrollmentStatus,
) -> Result<TrainingEnrollment, String> {
    #[derive(serde::Serialize)]
    struct Body {
        status: EnrollmentStatus,
    }
    post_json(&format!("/api/training/enrollments/{}/status", id), &Body { status }).await
}
