use serde::{Deserialize, Serialize};

/// Standard shape of every list endpoint: the page of items plus an optional
/// total count for pagination. Endpoints that return plain arrays deserialize
/// through `from_items`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub total: Option<u64>,
}

impl<T> ListResponse<T> {
    pub fn from_items(items: Vec<T>) -> Self {
        Self { items, total: None }
    }
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: None,
        }
    }
}

/// Result of a bulk import call. Partial success is a normal outcome: the
/// UI renders all four parts side by side and refreshes the list for the
/// successful subset.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub total: u32,
    pub successful: u32,
    pub failed: u32,
    /// Short human-readable summaries of the created entities.
    #[serde(default)]
    pub created: Vec<String>,
    /// Human-readable error strings for the failed rows.
    #[serde(default)]
    pub errors: Vec<String>,
}

/// Export formats generated server-side. The client only picks the format and
/// downloads the returned blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ExportFormat {
    Csv,
    Excel,
    Pdf,
}

impl ExportFormat {
    pub fn as_query_value(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Excel => "excel",
            ExportFormat::Pdf => "pdf",
        }
    }

    pub fn file_extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Excel => "xlsx",
            ExportFormat::Pdf => "pdf",
        }
    }
}
