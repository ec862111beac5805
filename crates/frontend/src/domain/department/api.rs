use contracts::common::ListResponse;
use contracts::domain::department::{Department, DepartmentDto};

use crate::shared::api_utils::{delete, get_json, post_json, put_json};

/// Flat list; the tree is projected client-side.
pub async fn list() -> Result<Vec<Department>, String> {
    let response: ListResponse<Department> = get_json("/api/departments").await?;
    Ok(response.items)
}

pub async fn save(dto: DepartmentDto) -> Result<Department, String> {
    match &dto.id {
        Some(id) => put_json(&format!("/api/departments/{}", id), &dto).await,
        None => post_json("/api/departments", &dto).await,
    }
}

pub async fn remove(id: String) -> Result<(), String> {
    delete(&format!("/api/departments/{}", id)).await
}
