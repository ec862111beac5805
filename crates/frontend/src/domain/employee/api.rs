use contracts::common::{ExportFormat, ImportSummary, ListResponse};
use contracts::domain::employee::{Employee, EmployeeDto, EmployeeImportRow, EmployeeStats};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, delete, get_json, post_json, put_json};
use crate::shared::export::{download_export, export_file_name};
use crate::shared::resource::build_query;
use crate::system::session::storage;

pub async fn list(
    search: String,
    department_id: String,
    status: String,
) -> Result<Vec<Employee>, String> {
    let query = build_query(&[
        ("search", search),
        ("departmentId", department_id),
        ("status", status),
    ]);
    let response: ListResponse<Employee> = get_json(&format!("/api/employees{}", query)).await?;
    Ok(response.items)
}

pub async fn get(id: String) -> Result<Employee, String> {
    get_json(&format!("/api/employees/{}", id)).await
}

pub async fn stats() -> Result<EmployeeStats, String> {
    get_json("/api/employees/stats").await
}

/// Slim lookup used by dropdowns on other pages.
pub async fn lookup_active() -> Result<Vec<Employee>, String> {
    list(String::new(), String::new(), "ACTIVE".to_string()).await
}

pub async fn save(dto: EmployeeDto) -> Result<Employee, String> {
    match &dto.id {
        Some(id) => put_json(&format!("/api/employees/{}", id), &dto).await,
        None => post_json("/api/employees", &dto).await,
    }
}

pub async fn deactivate(id: String) -> Result<(), String> {
    delete(&format!("/api/employees/{}", id)).await
}

/// Submit the parsed batch; partial success comes back as a normal
/// `ImportSummary`, never as an error.
pub async fn import(rows: Vec<EmployeeImportRow>) -> Result<ImportSummary, String> {
    post_json("/api/employees/import", &rows).await
}

/// Backend generates the file; the client only picks the format.
pub async fn export(format: ExportFormat) -> Result<(), String> {
    let path = format!("/api/employees/export?format={}", format.as_query_value());
    download_export(&path, &export_file_name("employees", format)).await
}

/// Upload an avatar image. Extension/MIME/size are validated before calling.
pub async fn upload_avatar(id: String, file: web_sys::File) -> Result<Employee, String> {
    let form = web_sys::FormData::new().map_err(|e| format!("{e:?}"))?;
    form.append_with_blob_and_filename("avatar", &file, &file.name())
        .map_err(|e| format!("{e:?}"))?;

    let mut builder = Request::post(&api_url(&format!("/api/employees/{}/avatar", id)));
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
        .json::<Employee>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Image MIME whitelist and 2 MB cap for avatars. Pure check, tested.
pub fn validate_avatar(mime: &str, size: u64) -> Result<(), &'static str> {
    const MAX_AVATAR_BYTES: u64 = 2 * 1024 * 1024;
    const ALLOWED: [&str; 4] = ["image/png", "image/jpeg", "image/gif", "image/webp"];
    if !ALLOWED.contains(&mime) {
        return Err("Avatar must be a PNG, JPEG, GIF or WebP image");
    }
    if size > MAX_AVATAR_BYTES {
        return Err("Avatar must be 2 MB or smaller");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn avatar_mime_whitelist() {
        assert!(validate_avatar("image/png", 1024).is_ok());
        assert!(validate_avatar("image/webp", 1024).is_ok());
        assert!(validate_avatar("application/pdf", 1024).is_err());
        assert!(validate_avatar("image/svg+xml", 1024).is_err());
    }

    #[test]
    fn avatar_size_cap_is_two_megabytes() {
        assert!(validate_avatar("image/png", 2 * 1024 * 1024).is_ok());
        assert!(validate_avatar("image/png", 2 * 1024 * 1024 + 1).is_err());
    }
}
