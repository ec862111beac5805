use contracts::common::ListResponse;
use contracts::domain::asset::{
    AllocateRequest, Asset, AssetAllocation, AssetDto, AssetStats, ReturnRequest,
    UpdateStatusRequest,
};

use crate::shared::api_utils::{delete, get_json, post_json, put_json};
use crate::shared::resource::build_query;

pub async fn list(status: String, category: String, search: String) -> Result<Vec<Asset>, String> {
    let query = build_query(&[
        ("status", status),
        ("category", category),
        ("search", search),
    ]);
    let response: ListResponse<Asset> = get_json(&format!("/api/assets{}", query)).await?;
    Ok(response.items)
}

pub async fn get(id: String) -> Result<Asset, String> {
    get_json(&format!("/api/assets/{}", id)).await
}

pub async fn stats() -> Result<AssetStats, String> {
    get_json("/api/assets/stats").await
}

pub async fn allocations(id: String) -> Result<Vec<AssetAllocation>, String> {
    let response: ListResponse<AssetAllocation> =
        get_json(&format!("/api/assets/{}/allocations", id)).await?;
    Ok(response.items)
}

pub async fn save(dto: AssetDto) -> Result<Asset, String> {
    match &dto.id {
        Some(id) => put_json(&format!("/api/assets/{}", id), &dto).await,
        None => post_json("/api/assets", &dto).await,
    }
}

pub async fn remove(id: String) -> Result<(), String> {
    delete(&format!("/api/assets/{}", id)).await
}

pub async fn allocate(id: String, request: AllocateRequest) -> Result<Asset, String> {
    post_json(&format!("/api/assets/{}/allocate", id), &request).await
}

pub async fn return_asset(id: String, request: ReturnRequest) -> Result<Asset, String> {
    post_json(&format!("/api/assets/{}/return", id), &request).await
}

pub async fn update_status(id: String, request: UpdateStatusRequest) -> Result<Asset, String> {
    post_json(&format!("/api/assets/{}/status", id), &request).await
}
