/// File export: the backend generates the bytes (CSV/Excel/PDF), the client
/// requests the format and hands the blob to the browser download machinery.
use contracts::common::ExportFormat;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::shared::api_utils;

/// Request a backend-generated export and download it. `path` already
/// carries the format query parameter.
pub async fn download_export(path: &str, file_name: &str) -> Result<(), String> {
    let bytes = api_utils::get_binary(path).await?;
    let blob = create_blob(&bytes, "application/octet-stream")?;
    download_blob(&blob, file_name)
}

pub fn export_file_name(resource: &str, format: ExportFormat) -> String {
    format!("{}.{}", resource, format.file_extension())
}

/// Rows already on the client (projections the backend has no export for)
/// can be exported without a round-trip.
pub trait CsvExportable {
    fn headers() -> Vec<String>;
    fn to_csv_row(&self) -> Vec<String>;
}

pub fn export_to_csv<T: CsvExportable>(data: &[T], file_name: Option<String>) -> Result<(), String> {
    if data.is_empty() {
        return Err("Nothing to export".to_string());
    }

    let mut csv_content = String::new();

    // UTF-8 BOM so Excel detects the encoding
    csv_content.push('\u{FEFF}');

    csv_content.push_str(&T::headers().join(","));
    csv_content.push('\n');

    for item in data {
        let escaped: Vec<String> = item.to_csv_row().iter().map(|c| escape_csv_cell(c)).collect();
        csv_content.push_str(&escaped.join(","));
        csv_content.push('\n');
    }

    let file_name =
        file_name.unwrap_or_else(|| format!("export-{}.csv", uuid::Uuid::new_v4()));
    let blob = create_blob(csv_content.as_bytes(), "text/csv;charset=utf-8;")?;
    download_blob(&blob, &file_name)
}

/// Quote a cell when it contains the separator, quotes or line breaks;
/// embedded quotes are doubled.
fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        let escaped = cell.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        cell.to_string()
    }
}

fn create_blob(bytes: &[u8], mime: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime);

    Blob::new_with_u8_array_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Hand a blob to the browser via a temporary anchor element.
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    document
        .body()
        .ok_or("No body element")?
        .append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;

    anchor.click();

    document
        .body()
        .ok_or("No body element")?
        .remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_file_names_follow_format() {
        assert_eq!(export_file_name("employees", ExportFormat::Csv), "employees.csv");
        assert_eq!(export_file_name("employees", ExportFormat::Excel), "employees.xlsx");
        assert_eq!(export_file_name("holidays", ExportFormat::Pdf), "holidays.pdf");
    }

    #[test]
    fn cells_with_separators_are_quoted() {
        assert_eq!(escape_csv_cell("plain"), "plain");
        assert_eq!(escape_csv_cell("Rao, Asha"), "\"Rao, Asha\"");
        assert_eq!(escape_csv_cell("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv_cell("two\nlines"), "\"two\nlines\"");
    }
}
