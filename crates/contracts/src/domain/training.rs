use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrainingStatus {
    Planned,
    InProgress,
    Completed,
    Cancelled,
}

impl TrainingStatus {
    pub const ALL: [TrainingStatus; 4] = [
        TrainingStatus::Planned,
        TrainingStatus::InProgress,
        TrainingStatus::Completed,
        TrainingStatus::Cancelled,
    ];

    pub fn allowed_transitions(&self) -> &'static [TrainingStatus] {
        match self {
            TrainingStatus::Planned => &[TrainingStatus::InProgress, TrainingStatus::Cancelled],
            TrainingStatus::InProgress => &[TrainingStatus::Completed, TrainingStatus::Cancelled],
            TrainingStatus::Completed => &[],
            TrainingStatus::Cancelled => &[],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TrainingStatus::Planned => "Planned",
            TrainingStatus::InProgress => "In progress",
            TrainingStatus::Completed => "Completed",
            TrainingStatus::Cancelled => "Cancelled",
        }
    }

    pub fn as_query_value(&self) -> &'static str {
        match self {
            TrainingStatus::Planned => "PLANNED",
            TrainingStatus::InProgress => "IN_PROGRESS",
            TrainingStatus::Completed => "COMPLETED",
            TrainingStatus::Cancelled => "CANCELLED",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnrollmentStatus {
    Enrolled,
    InProgress,
    Completed,
    Dropped,
    Failed,
}

impl EnrollmentStatus {
    pub fn allowed_transitions(&self) -> &'static [EnrollmentStatus] {
        match self {
            EnrollmentStatus::Enrolled => {
                &[EnrollmentStatus::InProgress, EnrollmentStatus::Dropped]
            }
            EnrollmentStatus::InProgress => &[
                EnrollmentStatus::Completed,
                EnrollmentStatus::Dropped,
                EnrollmentStatus::Failed,
            ],
            EnrollmentStatus::Completed => &[],
            EnrollmentStatus::Dropped => &[],
            EnrollmentStatus::Failed => &[],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EnrollmentStatus::Enrolled => "Enrolled",
            EnrollmentStatus::InProgress => "In progress",
            EnrollmentStatus::Completed => "Completed",
            EnrollmentStatus::Dropped => "Dropped",
            EnrollmentStatus::Failed => "Failed",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingProgram {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub trainer: Option<String>,
    pub status: TrainingStatus,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    pub max_participants: u32,
    #[serde(default)]
    pub enrolled_count: u32,
}

impl TrainingProgram {
    /// Advisory only; the backend rejects over-capacity enrollments
    /// regardless of what the UI shows.
    pub fn is_full(&self) -> bool {
        self.max_participants > 0 && self.enrolled_count >= self.max_participants
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingEnrollment {
    pub id: String,
    pub program_id: String,
    pub user_id: String,
    #[serde(default)]
    pub user_name: Option<String>,
    pub status: EnrollmentStatus,
    #[serde(default)]
    pub score: Option<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TrainingProgramDto {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub trainer: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    pub max_participants: u32,
}

impl TrainingProgramDto {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.title.trim().is_empty() {
            return Err("Title is required");
        }
        if self.max_participants == 0 {
            return Err("Max participants must be at least 1");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn program_pipeline_is_forward_only() {
        assert_eq!(
            TrainingStatus::Planned.allowed_transitions(),
            &[TrainingStatus::InProgress, TrainingStatus::Cancelled]
        );
        assert!(TrainingStatus::Completed.allowed_transitions().is_empty());
        assert!(!TrainingStatus::InProgress
            .allowed_transitions()
            .contains(&TrainingStatus::Planned));
    }

    #[test]
    fn enrollment_terminal_states() {
        for status in [
            EnrollmentStatus::Completed,
            EnrollmentStatus::Dropped,
            EnrollmentStatus::Failed,
        ] {
            assert!(status.allowed_transitions().is_empty());
        }
    }

    #[test]
    fn capacity_check_is_inclusive() {
        let mut program = TrainingProgram {
            id: "t".into(),
            title: "Rust 101".into(),
            description: None,
            trainer: None,
            status: TrainingStatus::Planned,
            start_date: None,
            end_date: None,
            max_participants: 2,
            enrolled_count: 1,
        };
        assert!(!program.is_full());
        program.enrolled_count = 2;
        assert!(program.is_full());
    }
}
