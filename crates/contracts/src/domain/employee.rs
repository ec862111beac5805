use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EmployeeStatus {
    Active,
    Inactive,
}

impl EmployeeStatus {
    pub fn label(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "Active",
            EmployeeStatus::Inactive => "Inactive",
        }
    }

    pub fn as_query_value(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "ACTIVE",
            EmployeeStatus::Inactive => "INACTIVE",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub employee_code: String,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub designation: Option<String>,
    #[serde(default)]
    pub department_id: Option<String>,
    #[serde(default)]
    pub department_name: Option<String>,
    pub status: EmployeeStatus,
    #[serde(default)]
    pub joined_on: Option<NaiveDate>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    #[serde(default)]
    pub id: Option<String>,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub designation: Option<String>,
    #[serde(default)]
    pub department_id: Option<String>,
    #[serde(default)]
    pub joined_on: Option<NaiveDate>,
    /// Only on create; never echoed back.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl EmployeeDto {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.full_name.trim().is_empty() {
            return Err("Full name is required");
        }
        if self.email.trim().is_empty() || !self.email.contains('@') {
            return Err("A valid email is required");
        }
        if self.id.is_none() {
            match &self.password {
                None => return Err("Password is required"),
                Some(p) if p.len() < 8 => return Err("Password must be at least 8 characters"),
                _ => {}
            }
        }
        Ok(())
    }
}

/// One row of a bulk-import batch, positionally mapped from a CSV line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeImportRow {
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub designation: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub joined_on: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeStats {
    pub total: u32,
    pub active: u32,
    pub inactive: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_dto() -> EmployeeDto {
        EmployeeDto {
            full_name: "Asha Rao".into(),
            email: "asha@example.com".into(),
            password: Some("s3cret-pass".into()),
            ..EmployeeDto::default()
        }
    }

    #[test]
    fn create_requires_password_of_at_least_8() {
        let mut dto = base_dto();
        assert!(dto.validate().is_ok());

        dto.password = Some("short".into());
        assert!(dto.validate().is_err());

        dto.password = None;
        assert!(dto.validate().is_err());
    }

    #[test]
    fn update_does_not_require_password() {
        let mut dto = base_dto();
        dto.id = Some("e1".into());
        dto.password = None;
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn email_must_look_like_an_email() {
        let mut dto = base_dto();
        dto.email = "not-an-email".into();
        assert!(dto.validate().is_err());
    }
}
