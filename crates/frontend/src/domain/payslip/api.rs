use contracts::common::ListResponse;
use contracts::domain::payslip::{Payslip, UpdatePayslipStatusRequest};

use crate::shared::api_utils::{get_json, post_json};
use crate::shared::resource::build_query;

pub async fn list(month: String, year: String, status: String) -> Result<Vec<Payslip>, String> {
    let query = build_query(&[("month", month), ("year", year), ("status", status)]);
    let response: ListResponse<Payslip> = get_json(&format!("/api/payslips{}", query)).await?;
    Ok(response.items)
}

pub async fn get(id: String) -> Result<Payslip, String> {
    get_json(&format!("/api/payslips/{}", id)).await
}

pub async fn update_status(
    id: String,
    request: UpdatePayslipStatusRequest,
) -> Result<Payslip, String> {
    post_json(&format!("/api/payslips/{}/status", id), &request).await
}
