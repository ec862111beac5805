use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PayslipStatus {
    Draft,
    Processed,
    Paid,
    Cancelled,
}

impl PayslipStatus {
    pub const ALL: [PayslipStatus; 4] = [
        PayslipStatus::Draft,
        PayslipStatus::Processed,
        PayslipStatus::Paid,
        PayslipStatus::Cancelled,
    ];

    /// Forward-only progression DRAFT → PROCESSED → PAID, with cancellation
    /// possible until the slip is paid.
    pub fn allowed_transitions(&self) -> &'static [PayslipStatus] {
        match self {
            PayslipStatus::Draft => &[PayslipStatus::Processed, PayslipStatus::Cancelled],
            PayslipStatus::Processed => &[PayslipStatus::Paid, PayslipStatus::Cancelled],
            PayslipStatus::Paid => &[],
            PayslipStatus::Cancelled => &[],
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.allowed_transitions().is_empty()
    }

    pub fn label(&self) -> &'static str {
        match self {
            PayslipStatus::Draft => "Draft",
            PayslipStatus::Processed => "Processed",
            PayslipStatus::Paid => "Paid",
            PayslipStatus::Cancelled => "Cancelled",
        }
    }

    pub fn as_query_value(&self) -> &'static str {
        match self {
            PayslipStatus::Draft => "DRAFT",
            PayslipStatus::Processed => "PROCESSED",
            PayslipStatus::Paid => "PAID",
            PayslipStatus::Cancelled => "CANCELLED",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ComponentKind {
    Earning,
    Deduction,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryComponent {
    pub name: String,
    pub kind: ComponentKind,
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payslip {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub user_name: Option<String>,
    /// 1-12.
    pub month: u32,
    pub year: i32,
    pub status: PayslipStatus,
    pub gross_earnings: f64,
    pub total_deductions: f64,
    pub net_salary: f64,
    #[serde(default)]
    pub components: Vec<SalaryComponent>,
}

impl Payslip {
    pub fn period_label(&self) -> String {
        const MONTHS: [&str; 12] = [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ];
        let name = MONTHS
            .get(self.month.saturating_sub(1) as usize)
            .copied()
            .unwrap_or("?");
        format!("{} {}", name, self.year)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePayslipStatusRequest {
    pub status: PayslipStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paid_offers_no_status_change() {
        assert!(PayslipStatus::Paid.allowed_transitions().is_empty());
        assert!(PayslipStatus::Paid.is_terminal());
    }

    #[test]
    fn draft_cannot_jump_straight_to_paid() {
        assert!(!PayslipStatus::Draft
            .allowed_transitions()
            .contains(&PayslipStatus::Paid));
        assert!(PayslipStatus::Draft
            .allowed_transitions()
            .contains(&PayslipStatus::Processed));
    }

    #[test]
    fn no_backward_transitions() {
        assert!(!PayslipStatus::Processed
            .allowed_transitions()
            .contains(&PayslipStatus::Draft));
        assert!(!PayslipStatus::Paid
            .allowed_transitions()
            .contains(&PayslipStatus::Processed));
    }

    #[test]
    fn period_label_formats_month_and_year() {
        let slip = Payslip {
            id: "1".into(),
            user_id: "u".into(),
            user_name: None,
            month: 3,
            year: 2025,
            status: PayslipStatus::Draft,
            gross_earnings: 0.0,
            total_deductions: 0.0,
            net_salary: 0.0,
            components: vec![],
        };
        assert_eq!(slip.period_label(), "Mar 2025");
    }
}
