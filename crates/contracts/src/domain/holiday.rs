use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HolidayType {
    Fixed,
    Optional,
    Restricted,
}

impl HolidayType {
    pub const ALL: [HolidayType; 3] = [
        HolidayType::Fixed,
        HolidayType::Optional,
        HolidayType::Restricted,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            HolidayType::Fixed => "Fixed",
            HolidayType::Optional => "Optional",
            HolidayType::Restricted => "Restricted",
        }
    }

    pub fn as_query_value(&self) -> &'static str {
        match self {
            HolidayType::Fixed => "FIXED",
            HolidayType::Optional => "OPTIONAL",
            HolidayType::Restricted => "RESTRICTED",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holiday {
    pub id: String,
    pub name: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub holiday_type: HolidayType,
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the signed-in employee has picked this optional holiday.
    #[serde(default)]
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayDto {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub holiday_type: HolidayType,
    #[serde(default)]
    pub description: Option<String>,
}

impl HolidayDto {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("Name is required");
        }
        Ok(())
    }
}

/// One CSV import row. Date stays a string until the backend parses it, so
/// the preview shows exactly what will be submitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayImportRow {
    pub name: String,
    pub date: String,
    #[serde(rename = "type", default)]
    pub holiday_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}
