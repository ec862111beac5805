use contracts::common::{ExportFormat, ImportSummary, ListResponse};
use contracts::domain::holiday::{Holiday, HolidayDto, HolidayImportRow};

use crate::shared::api_utils::{delete, get_json, post_empty, post_json, put_json};
use crate::shared::export::{download_export, export_file_name};
use crate::shared::resource::build_query;

pub async fn list(year: String, holiday_type: String) -> Result<Vec<Holiday>, String> {
    let query = build_query(&[("year", year), ("type", holiday_type)]);
    let response: ListResponse<Holiday> = get_json(&format!("/api/holidays{}", query)).await?;
    Ok(response.items)
}

pub async fn save(dto: HolidayDto) -> Result<Holiday, String> {
    match &dto.id {
        Some(id) => put_json(&format!("/api/holidays/{}", id), &dto).await,
        None => post_json("/api/holidays", &dto).await,
    }
}

pub async fn remove(id: String) -> Result<(), String> {
    delete(&format!("/api/holidays/{}", id)).await
}

/// Pick an optional holiday. The per-year quota is enforced server-side; a
/// rejection surfaces as a toast.
pub async fn select_optional(id: String) -> Result<Holiday, String> {
    post_empty(&format!("/api/holidays/{}/select", id)).await
}

pub async fn unselect_optional(id: String) -> Result<Holiday, String> {
    post_empty(&format!("/api/holidays/{}/unselect", id)).await
}

pub async fn import(rows: Vec<HolidayImportRow>) -> Result<ImportSummary, String> {
    post_json("/api/holidays/import", &rows).await
}

pub async fn export(year: String, format: ExportFormat) -> Result<(), String> {
    let query = build_query(&[
        ("year", year),
        ("format", format.as_query_value().to_string()),
    ]);
    let path = format!("/api/holidays/export{}", query);
    download_export(&path, &export_file_name("holidays", format)).await
}
