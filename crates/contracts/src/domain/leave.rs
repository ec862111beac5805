use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
    Cancelled,
}

impl LeaveStatus {
    pub const ALL: [LeaveStatus; 4] = [
        LeaveStatus::Pending,
        LeaveStatus::Approved,
        LeaveStatus::Rejected,
        LeaveStatus::Cancelled,
    ];

    /// Transitions a reviewer may apply. PENDING is the only reviewable
    /// state; the other three are terminal.
    pub fn allowed_transitions(&self) -> &'static [LeaveStatus] {
        match self {
            LeaveStatus::Pending => &[LeaveStatus::Approved, LeaveStatus::Rejected],
            _ => &[],
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, LeaveStatus::Pending)
    }

    pub fn label(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "Pending",
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Rejected => "Rejected",
            LeaveStatus::Cancelled => "Cancelled",
        }
    }

    pub fn as_query_value(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "PENDING",
            LeaveStatus::Approved => "APPROVED",
            LeaveStatus::Rejected => "REJECTED",
            LeaveStatus::Cancelled => "CANCELLED",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub user_name: Option<String>,
    pub leave_type_id: String,
    #[serde(default)]
    pub leave_type_name: Option<String>,
    pub status: LeaveStatus,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub total_days: f32,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub reviewer_id: Option<String>,
    #[serde(default)]
    pub review_comments: Option<String>,
}

/// Payload of the review endpoint. REJECTED requires non-empty comments;
/// `validate` is the client-side gate in front of the network call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewLeaveRequest {
    pub status: LeaveStatus,
    #[serde(default)]
    pub comments: Option<String>,
}

impl ReviewLeaveRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        match self.status {
            LeaveStatus::Approved => Ok(()),
            LeaveStatus::Rejected => {
                if self
                    .comments
                    .as_deref()
                    .map(|c| c.trim().is_empty())
                    .unwrap_or(true)
                {
                    Err("Comments are required when rejecting a request")
                } else {
                    Ok(())
                }
            }
            _ => Err("Review may only approve or reject"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveType {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub max_days_per_year: f32,
    pub is_paid: bool,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LeaveTypeDto {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub max_days_per_year: f32,
    pub is_paid: bool,
}

impl LeaveTypeDto {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("Name is required");
        }
        if self.max_days_per_year <= 0.0 {
            return Err("Max days per year must be positive");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LeaveStats {
    pub pending: u32,
    pub approved: u32,
    pub rejected: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_offers_exactly_approve_and_reject() {
        assert_eq!(
            LeaveStatus::Pending.allowed_transitions(),
            &[LeaveStatus::Approved, LeaveStatus::Rejected]
        );
    }

    #[test]
    fn approved_rejected_cancelled_are_terminal() {
        assert!(LeaveStatus::Approved.allowed_transitions().is_empty());
        assert!(LeaveStatus::Rejected.allowed_transitions().is_empty());
        assert!(LeaveStatus::Cancelled.allowed_transitions().is_empty());
    }

    #[test]
    fn reject_requires_comments() {
        let empty = ReviewLeaveRequest {
            status: LeaveStatus::Rejected,
            comments: None,
        };
        assert!(empty.validate().is_err());

        let blank = ReviewLeaveRequest {
            status: LeaveStatus::Rejected,
            comments: Some("   ".to_string()),
        };
        assert!(blank.validate().is_err());

        let ok = ReviewLeaveRequest {
            status: LeaveStatus::Rejected,
            comments: Some("Overlaps with release week".to_string()),
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn approve_needs_no_comments() {
        let req = ReviewLeaveRequest {
            status: LeaveStatus::Approved,
            comments: None,
        };
        assert!(req.validate().is_ok());
    }
}
