pub mod approvals;
pub mod types;
