use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReviewCycleStatus {
    Draft,
    Active,
    Completed,
    Cancelled,
}

impl ReviewCycleStatus {
    pub const ALL: [ReviewCycleStatus; 4] = [
        ReviewCycleStatus::Draft,
        ReviewCycleStatus::Active,
        ReviewCycleStatus::Completed,
        ReviewCycleStatus::Cancelled,
    ];

    /// Activation is one-time: it fans out per-employee reviews server-side
    /// and there is no way back to DRAFT.
    pub fn allowed_transitions(&self) -> &'static [ReviewCycleStatus] {
        match self {
            ReviewCycleStatus::Draft => &[ReviewCycleStatus::Active, ReviewCycleStatus::Cancelled],
            ReviewCycleStatus::Active => {
                &[ReviewCycleStatus::Completed, ReviewCycleStatus::Cancelled]
            }
            ReviewCycleStatus::Completed => &[],
            ReviewCycleStatus::Cancelled => &[],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReviewCycleStatus::Draft => "Draft",
            ReviewCycleStatus::Active => "Active",
            ReviewCycleStatus::Completed => "Completed",
            ReviewCycleStatus::Cancelled => "Cancelled",
        }
    }

    pub fn as_query_value(&self) -> &'static str {
        match self {
            ReviewCycleStatus::Draft => "DRAFT",
            ReviewCycleStatus::Active => "ACTIVE",
            ReviewCycleStatus::Completed => "COMPLETED",
            ReviewCycleStatus::Cancelled => "CANCELLED",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PerformanceReviewStatus {
    Pending,
    SelfReview,
    ManagerReview,
    Calibration,
    Completed,
}

impl PerformanceReviewStatus {
    pub const ALL: [PerformanceReviewStatus; 5] = [
        PerformanceReviewStatus::Pending,
        PerformanceReviewStatus::SelfReview,
        PerformanceReviewStatus::ManagerReview,
        PerformanceReviewStatus::Calibration,
        PerformanceReviewStatus::Completed,
    ];

    /// Strictly sequential pipeline; each stage advances only to the next.
    pub fn next(&self) -> Option<PerformanceReviewStatus> {
        match self {
            PerformanceReviewStatus::Pending => Some(PerformanceReviewStatus::SelfReview),
            PerformanceReviewStatus::SelfReview => Some(PerformanceReviewStatus::ManagerReview),
            PerformanceReviewStatus::ManagerReview => Some(PerformanceReviewStatus::Calibration),
            PerformanceReviewStatus::Calibration => Some(PerformanceReviewStatus::Completed),
            PerformanceReviewStatus::Completed => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PerformanceReviewStatus::Pending => "Pending",
            PerformanceReviewStatus::SelfReview => "Self review",
            PerformanceReviewStatus::ManagerReview => "Manager review",
            PerformanceReviewStatus::Calibration => "Calibration",
            PerformanceReviewStatus::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewQuestion {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub order: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewCycle {
    pub id: String,
    pub name: String,
    pub status: ReviewCycleStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub questions: Vec<ReviewQuestion>,
    #[serde(default)]
    pub reviews: Vec<PerformanceReview>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceReview {
    pub id: String,
    pub cycle_id: String,
    pub user_id: String,
    #[serde(default)]
    pub user_name: Option<String>,
    pub status: PerformanceReviewStatus,
    #[serde(default)]
    pub self_rating: Option<f32>,
    #[serde(default)]
    pub manager_rating: Option<f32>,
    #[serde(default)]
    pub final_rating: Option<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReviewCycleDto {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub questions: Vec<String>,
}

impl ReviewCycleDto {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("Name is required");
        }
        if self.start_date.is_empty() || self.end_date.is_empty() {
            return Err("Start and end dates are required");
        }
        if self.end_date < self.start_date {
            return Err("End date must not precede start date");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_pipeline_is_strictly_sequential() {
        let mut status = PerformanceReviewStatus::Pending;
        let mut seen = vec![status];
        while let Some(next) = status.next() {
            seen.push(next);
            status = next;
        }
        assert_eq!(seen, PerformanceReviewStatus::ALL);
    }

    #[test]
    fn completed_review_has_no_next_stage() {
        assert_eq!(PerformanceReviewStatus::Completed.next(), None);
    }

    #[test]
    fn cycle_activation_is_one_way() {
        assert!(ReviewCycleStatus::Draft
            .allowed_transitions()
            .contains(&ReviewCycleStatus::Active));
        assert!(!ReviewCycleStatus::Active
            .allowed_transitions()
            .contains(&ReviewCycleStatus::Draft));
    }

    #[test]
    fn cycle_dto_rejects_inverted_date_range() {
        let dto = ReviewCycleDto {
            name: "H1".into(),
            start_date: "2026-06-01".into(),
            end_date: "2026-01-01".into(),
            ..ReviewCycleDto::default()
        };
        assert!(dto.validate().is_err());
    }
}
