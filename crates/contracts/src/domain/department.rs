use serde::{Deserialize, Serialize};

/// Department node as returned by the backend. The list endpoint returns a
/// flat list; `children` is populated only by the nested tree endpoint and is
/// ignored by the flat-list projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub head_id: Option<String>,
    #[serde(default)]
    pub head_name: Option<String>,
    #[serde(default)]
    pub employee_count: u32,
    #[serde(default)]
    pub child_count: u32,
    #[serde(default)]
    pub children: Vec<Department>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentDto {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub head_id: Option<String>,
}

impl DepartmentDto {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("Name is required");
        }
        if let (Some(id), Some(parent)) = (&self.id, &self.parent_id) {
            if id == parent {
                return Err("A department cannot be its own parent");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_parent_is_rejected() {
        let dto = DepartmentDto {
            id: Some("d1".into()),
            name: "Engineering".into(),
            parent_id: Some("d1".into()),
            ..DepartmentDto::default()
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn root_department_is_valid() {
        let dto = DepartmentDto {
            name: "Engineering".into(),
            ..DepartmentDto::default()
        };
        assert!(dto.validate().is_ok());
    }
}
