use contracts::common::ListResponse;
use contracts::domain::document::{Document, DocumentDto, DocumentVersion};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, delete, get_json, put_json};
use crate::shared::resource::build_query;
use crate::system::session::storage;

pub async fn list(
    search: String,
    category: String,
    doc_type: String,
) -> Result<Vec<Document>, String> {
    let query = build_query(&[
        ("search", search),
        ("category", category),
        ("type", doc_type),
    ]);
    let response: ListResponse<Document> = get_json(&format!("/api/documents{}", query)).await?;
    Ok(response.items)
}

/// Read-only version history.
pub async fn versions(id: String) -> Result<Vec<DocumentVersion>, String> {
    let response: ListResponse<DocumentVersion> =
        get_json(&format!("/api/documents/{}/versions", id)).await?;
    Ok(response.items)
}

pub async fn update(id: String, dto: DocumentDto) -> Result<Document, String> {
    put_json(&format!("/api/documents/{}", id), &dto).await
}

pub async fn remove(id: String) -> Result<(), String> {
    delete(&format!("/api/documents/{}", id)).await
}

/// Upload a new document (or a new version when `existing_id` is set). The
/// file content is opaque to this layer.
pub async fn upload(
    dto: DocumentDto,
    file: web_sys::File,
    existing_id: Option<String>,
) -> Result<Document, String> {
    let form = web_sys::FormData::new().map_err(|e| format!("{e:?}"))?;
    form.append_with_blob_and_filename("file", &file, &file.name())
        .map_err(|e| format!("{e:?}"))?;
    let meta = serde_json::to_string(&dto).map_err(|e| format!("{e}"))?;
    form.append_with_str("metadata", &meta)
        .map_err(|e| format!("{e:?}"))?;

    let path = match existing_id {
        Some(id) => format!("/api/documents/{}/versions", id),
        None => "/api/documents".to_string(),
    };

    let mut builder = Request::post(&api_url(&path));
    if let Some(token) = storage::get_token() {
        builder = builder.header("Authorization", &format!("Bearer {}", token));
    }
    let response = builder
        .body(form)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Upload failed: HTTP {}", response.status()));
    }
    response
        .json::<Document>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
