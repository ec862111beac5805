use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AssetStatus {
    Available,
    Assigned,
    Maintenance,
    Repair,
    Retired,
    Lost,
}

impl AssetStatus {
    pub const ALL: [AssetStatus; 6] = [
        AssetStatus::Available,
        AssetStatus::Assigned,
        AssetStatus::Maintenance,
        AssetStatus::Repair,
        AssetStatus::Retired,
        AssetStatus::Lost,
    ];

    /// Statuses reachable through the `updateStatus` endpoint. Allocation and
    /// return drive the AVAILABLE/ASSIGNED pair through their own endpoints
    /// and are not listed here.
    pub fn allowed_transitions(&self) -> &'static [AssetStatus] {
        match self {
            AssetStatus::Available => &[
                AssetStatus::Maintenance,
                AssetStatus::Repair,
                AssetStatus::Retired,
                AssetStatus::Lost,
            ],
            AssetStatus::Assigned => &[AssetStatus::Lost],
            AssetStatus::Maintenance => &[AssetStatus::Available, AssetStatus::Retired],
            AssetStatus::Repair => &[AssetStatus::Available, AssetStatus::Retired],
            AssetStatus::Retired => &[],
            AssetStatus::Lost => &[],
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, AssetStatus::Retired | AssetStatus::Lost)
    }

    pub fn label(&self) -> &'static str {
        match self {
            AssetStatus::Available => "Available",
            AssetStatus::Assigned => "Assigned",
            AssetStatus::Maintenance => "Maintenance",
            AssetStatus::Repair => "Repair",
            AssetStatus::Retired => "Retired",
            AssetStatus::Lost => "Lost",
        }
    }

    pub fn as_query_value(&self) -> &'static str {
        match self {
            AssetStatus::Available => "AVAILABLE",
            AssetStatus::Assigned => "ASSIGNED",
            AssetStatus::Maintenance => "MAINTENANCE",
            AssetStatus::Repair => "REPAIR",
            AssetStatus::Retired => "RETIRED",
            AssetStatus::Lost => "LOST",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AssetCategory {
    Laptop,
    Desktop,
    Monitor,
    Phone,
    Furniture,
    Vehicle,
    Other,
}

impl AssetCategory {
    pub const ALL: [AssetCategory; 7] = [
        AssetCategory::Laptop,
        AssetCategory::Desktop,
        AssetCategory::Monitor,
        AssetCategory::Phone,
        AssetCategory::Furniture,
        AssetCategory::Vehicle,
        AssetCategory::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AssetCategory::Laptop => "Laptop",
            AssetCategory::Desktop => "Desktop",
            AssetCategory::Monitor => "Monitor",
            AssetCategory::Phone => "Phone",
            AssetCategory::Furniture => "Furniture",
            AssetCategory::Vehicle => "Vehicle",
            AssetCategory::Other => "Other",
        }
    }

    pub fn as_query_value(&self) -> &'static str {
        match self {
            AssetCategory::Laptop => "LAPTOP",
            AssetCategory::Desktop => "DESKTOP",
            AssetCategory::Monitor => "MONITOR",
            AssetCategory::Phone => "PHONE",
            AssetCategory::Furniture => "FURNITURE",
            AssetCategory::Vehicle => "VEHICLE",
            AssetCategory::Other => "OTHER",
        }
    }

    pub fn from_query_value(value: &str) -> Option<AssetCategory> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_query_value() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AssetCondition {
    New,
    Good,
    Fair,
    Poor,
    Damaged,
}

impl AssetCondition {
    pub const ALL: [AssetCondition; 5] = [
        AssetCondition::New,
        AssetCondition::Good,
        AssetCondition::Fair,
        AssetCondition::Poor,
        AssetCondition::Damaged,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AssetCondition::New => "New",
            AssetCondition::Good => "Good",
            AssetCondition::Fair => "Fair",
            AssetCondition::Poor => "Poor",
            AssetCondition::Damaged => "Damaged",
        }
    }

    pub fn as_query_value(&self) -> &'static str {
        match self {
            AssetCondition::New => "NEW",
            AssetCondition::Good => "GOOD",
            AssetCondition::Fair => "FAIR",
            AssetCondition::Poor => "POOR",
            AssetCondition::Damaged => "DAMAGED",
        }
    }

    pub fn from_query_value(value: &str) -> Option<AssetCondition> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_query_value() == value)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub name: String,
    pub asset_code: String,
    pub category: AssetCategory,
    pub status: AssetStatus,
    pub condition: AssetCondition,
    #[serde(default)]
    pub purchase_price: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub purchase_date: Option<String>,
    /// Employee the asset is currently allocated to, if any.
    #[serde(default)]
    pub current_user: Option<AssetHolder>,
    #[serde(default)]
    pub allocations: Vec<AssetAllocation>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetHolder {
    pub id: String,
    pub full_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetAllocation {
    pub id: String,
    pub asset_id: String,
    pub user_id: String,
    #[serde(default)]
    pub user_name: Option<String>,
    pub allocated_at: DateTime<Utc>,
    #[serde(default)]
    pub returned_at: Option<DateTime<Utc>>,
    pub condition_out: AssetCondition,
    #[serde(default)]
    pub condition_in: Option<AssetCondition>,
}

impl AssetAllocation {
    pub fn is_active(&self) -> bool {
        self.returned_at.is_none()
    }
}

/// Create/update payload. The backend fills category, condition and currency
/// with these same defaults when the fields are omitted; keeping them in the
/// DTO lets a create with only name + assetCode round-trip unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetDto {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub asset_code: String,
    pub category: AssetCategory,
    pub condition: AssetCondition,
    #[serde(default)]
    pub purchase_price: Option<f64>,
    pub currency: String,
    #[serde(default)]
    pub purchase_date: Option<String>,
}

impl Default for AssetDto {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            asset_code: String::new(),
            category: AssetCategory::Other,
            condition: AssetCondition::New,
            purchase_price: None,
            currency: "INR".to_string(),
            purchase_date: None,
        }
    }
}

impl AssetDto {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("Name is required");
        }
        if self.asset_code.trim().is_empty() {
            return Err("Asset code is required");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocateRequest {
    pub user_id: String,
    pub condition_out: AssetCondition,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnRequest {
    pub condition_in: AssetCondition,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    pub status: AssetStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AssetStats {
    pub total: u32,
    pub available: u32,
    pub assigned: u32,
    pub in_maintenance: u32,
    pub retired: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_dto_defaults_match_backend_defaults() {
        let dto = AssetDto::default();
        assert_eq!(dto.category, AssetCategory::Other);
        assert_eq!(dto.condition, AssetCondition::New);
        assert_eq!(dto.currency, "INR");
    }

    #[test]
    fn minimal_dto_with_name_and_code_is_valid() {
        let dto = AssetDto {
            name: "Laptop A".to_string(),
            asset_code: "LAP-001".to_string(),
            ..AssetDto::default()
        };
        assert!(dto.validate().is_ok());
        assert!(AssetDto::default().validate().is_err());
    }

    #[test]
    fn retired_and_lost_offer_no_transitions() {
        assert!(AssetStatus::Retired.allowed_transitions().is_empty());
        assert!(AssetStatus::Lost.allowed_transitions().is_empty());
        assert!(AssetStatus::Retired.is_terminal());
    }

    #[test]
    fn maintenance_returns_to_available() {
        assert!(AssetStatus::Maintenance
            .allowed_transitions()
            .contains(&AssetStatus::Available));
        assert!(!AssetStatus::Available
            .allowed_transitions()
            .contains(&AssetStatus::Assigned));
    }

    #[test]
    fn allocation_without_return_is_active() {
        let alloc = AssetAllocation {
            id: "1".into(),
            asset_id: "a".into(),
            user_id: "u".into(),
            user_name: None,
            allocated_at: Utc::now(),
            returned_at: None,
            condition_out: AssetCondition::Good,
            condition_in: None,
        };
        assert!(alloc.is_active());
    }

    #[test]
    fn status_serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&AssetStatus::Available).unwrap(),
            "\"AVAILABLE\""
        );
        assert_eq!(
            serde_json::from_str::<AssetStatus>("\"RETIRED\"").unwrap(),
            AssetStatus::Retired
        );
    }
}
