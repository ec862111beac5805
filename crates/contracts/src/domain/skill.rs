use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Ordinal competency level 1-5. Not a continuous value; arithmetic on it is
/// limited to ordering and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillLevel(pub u8);

impl SkillLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(level: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&level).then_some(Self(level))
    }

    pub fn label(&self) -> &'static str {
        match self.0 {
            1 => "Beginner",
            2 => "Basic",
            3 => "Intermediate",
            4 => "Advanced",
            _ => "Expert",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSkill {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub user_name: Option<String>,
    pub skill_id: String,
    #[serde(default)]
    pub skill_name: Option<String>,
    pub level: SkillLevel,
    pub is_certified: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SkillDto {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl SkillDto {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("Name is required");
        }
        if self.category.trim().is_empty() {
            return Err("Category is required");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSkillDto {
    pub user_id: String,
    pub skill_id: String,
    pub level: u8,
    pub is_certified: bool,
}

impl EmployeeSkillDto {
    pub fn validate(&self) -> Result<(), &'static str> {
        if SkillLevel::new(self.level).is_none() {
            return Err("Level must be between 1 and 5");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_bounds() {
        assert!(SkillLevel::new(0).is_none());
        assert!(SkillLevel::new(6).is_none());
        assert_eq!(SkillLevel::new(3), Some(SkillLevel(3)));
    }

    #[test]
    fn levels_are_ordered() {
        assert!(SkillLevel(2) < SkillLevel(4));
    }

    #[test]
    fn employee_skill_dto_rejects_out_of_range_level() {
        let dto = EmployeeSkillDto {
            user_id: "u".into(),
            skill_id: "s".into(),
            level: 9,
            is_certified: false,
        };
        assert!(dto.validate().is_err());
    }
}
