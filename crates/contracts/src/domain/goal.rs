use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GoalType {
    Individual,
    Team,
    Company,
}

impl GoalType {
    pub const ALL: [GoalType; 3] = [GoalType::Individual, GoalType::Team, GoalType::Company];

    pub fn label(&self) -> &'static str {
        match self {
            GoalType::Individual => "Individual",
            GoalType::Team => "Team",
            GoalType::Company => "Company",
        }
    }

    pub fn as_query_value(&self) -> &'static str {
        match self {
            GoalType::Individual => "INDIVIDUAL",
            GoalType::Team => "TEAM",
            GoalType::Company => "COMPANY",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GoalCategory {
    Okr,
    Kpi,
}

impl GoalCategory {
    pub fn label(&self) -> &'static str {
        match self {
            GoalCategory::Okr => "OKR",
            GoalCategory::Kpi => "KPI",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalStatus {
    Draft,
    Active,
    Completed,
    Cancelled,
}

impl GoalStatus {
    pub const ALL: [GoalStatus; 4] = [
        GoalStatus::Draft,
        GoalStatus::Active,
        GoalStatus::Completed,
        GoalStatus::Cancelled,
    ];

    pub fn allowed_transitions(&self) -> &'static [GoalStatus] {
        match self {
            GoalStatus::Draft => &[GoalStatus::Active, GoalStatus::Cancelled],
            GoalStatus::Active => &[GoalStatus::Completed, GoalStatus::Cancelled],
            GoalStatus::Completed => &[],
            GoalStatus::Cancelled => &[],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GoalStatus::Draft => "Draft",
            GoalStatus::Active => "Active",
            GoalStatus::Completed => "Completed",
            GoalStatus::Cancelled => "Cancelled",
        }
    }

    pub fn as_query_value(&self) -> &'static str {
        match self {
            GoalStatus::Draft => "DRAFT",
            GoalStatus::Active => "ACTIVE",
            GoalStatus::Completed => "COMPLETED",
            GoalStatus::Cancelled => "CANCELLED",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyResult {
    pub id: String,
    pub goal_id: String,
    pub title: String,
    pub target_value: f64,
    pub current_value: f64,
    #[serde(default)]
    pub unit: Option<String>,
}

impl KeyResult {
    /// Completion ratio clamped to [0, 1] for display; a zero target counts
    /// as no progress rather than a division blow-up.
    pub fn progress(&self) -> f64 {
        if self.target_value <= 0.0 {
            return 0.0;
        }
        (self.current_value / self.target_value).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub goal_type: GoalType,
    pub category: GoalCategory,
    pub status: GoalStatus,
    /// Backend-reported progress percent, 0-100.
    pub progress: f64,
    #[serde(default)]
    pub target_value: Option<f64>,
    #[serde(default)]
    pub current_value: Option<f64>,
    #[serde(default)]
    pub owner_id: Option<String>,
    #[serde(default)]
    pub owner_name: Option<String>,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub key_results: Vec<KeyResult>,
}

impl Goal {
    /// Average of key-result progress in percent; falls back to the
    /// backend-reported value for goals without key results.
    pub fn rolled_up_progress(&self) -> f64 {
        if self.key_results.is_empty() {
            return self.progress.clamp(0.0, 100.0);
        }
        let sum: f64 = self.key_results.iter().map(|kr| kr.progress()).sum();
        (sum / self.key_results.len() as f64) * 100.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalDto {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub goal_type: GoalType,
    pub category: GoalCategory,
    #[serde(default)]
    pub target_value: Option<f64>,
    #[serde(default)]
    pub parent_id: Option<String>,
}

impl Default for GoalDto {
    fn default() -> Self {
        Self {
            id: None,
            title: String::new(),
            description: None,
            goal_type: GoalType::Individual,
            category: GoalCategory::Okr,
            target_value: None,
            parent_id: None,
        }
    }
}

impl GoalDto {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.title.trim().is_empty() {
            return Err("Title is required");
        }
        if let (Some(id), Some(parent)) = (&self.id, &self.parent_id) {
            if id == parent {
                return Err("A goal cannot be its own parent");
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyResultDto {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    pub target_value: f64,
    pub current_value: f64,
    #[serde(default)]
    pub unit: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kr(current: f64, target: f64) -> KeyResult {
        KeyResult {
            id: "kr".into(),
            goal_id: "g".into(),
            title: "kr".into(),
            target_value: target,
            current_value: current,
            unit: None,
        }
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(kr(150.0, 100.0).progress(), 1.0);
        assert_eq!(kr(-5.0, 100.0).progress(), 0.0);
        assert_eq!(kr(25.0, 100.0).progress(), 0.25);
    }

    #[test]
    fn zero_target_means_no_progress() {
        assert_eq!(kr(10.0, 0.0).progress(), 0.0);
    }

    #[test]
    fn rollup_averages_key_results() {
        let goal = Goal {
            id: "g".into(),
            title: "Ship".into(),
            description: None,
            goal_type: GoalType::Team,
            category: GoalCategory::Okr,
            status: GoalStatus::Active,
            progress: 10.0,
            target_value: None,
            current_value: None,
            owner_id: None,
            owner_name: None,
            parent_id: None,
            key_results: vec![kr(50.0, 100.0), kr(100.0, 100.0)],
        };
        assert_eq!(goal.rolled_up_progress(), 75.0);
    }

    #[test]
    fn rollup_without_key_results_uses_backend_value() {
        let goal = Goal {
            id: "g".into(),
            title: "Ship".into(),
            description: None,
            goal_type: GoalType::Individual,
            category: GoalCategory::Kpi,
            status: GoalStatus::Active,
            progress: 42.0,
            target_value: None,
            current_value: None,
            owner_id: None,
            owner_name: None,
            parent_id: None,
            key_results: vec![],
        };
        assert_eq!(goal.rolled_up_progress(), 42.0);
    }

    #[test]
    fn completed_and_cancelled_goals_are_final() {
        assert!(GoalStatus::Completed.allowed_transitions().is_empty());
        assert!(GoalStatus::Cancelled.allowed_transitions().is_empty());
    }
}
