use contracts::domain::payslip::{ComponentKind, Payslip};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::payslip::api;
use crate::shared::components::ui::Badge;

/// Read-only breakdown of one payslip.
#[component]
#[allow(non_snake_case)]
pub fn PayslipDetails(id: String, on_close: Callback<()>) -> impl IntoView {
    let slip = RwSignal::new(None::<Payslip>);
    let error = RwSignal::new(None::<String>);

    spawn_local(async move {
        match api::get(id).await {
            Ok(p) => slip.set(Some(p)),
            Err(e) => error.set(Some(format!("Failed to load payslip: {}", e))),
        }
    });

    view! {
        <div class="details">
            <div class="details__header">
                <h3>{move || {
                    slip.get()
                        .map(|s| format!("Payslip for {}", s.period_label()))
                        .unwrap_or_else(|| "Payslip".to_string())
                }}</h3>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            {move || slip.get().map(|s| {
                let earnings: Vec<_> = s
                    .components
                    .iter()
                    .filter(|c| c.kind == ComponentKind::Earning)
                    .cloned()
                    .collect();
                let deductions: Vec<_> = s
                    .components
                    .iter()
                    .filter(|c| c.kind == ComponentKind::Deduction)
                    .cloned()
                    .collect();
                view! {
                    <div class="details__body">
                        <div class="payslip-summary">
                            <span>{format!("Employee: {}", s.user_name.clone().unwrap_or_else(|| s.user_id.clone()))}</span>
                            <Badge variant="neutral".to_string()>{s.status.label()}</Badge>
                        </div>

                        <h4>{"Earnings"}</h4>
                        <table class="table__data">
                            <tbody>
                                {earnings.into_iter().map(|c| view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{c.name.clone()}</td>
                                        <td class="table__cell table__cell--number">{format!("{:.2}", c.amount)}</td>
                                    </tr>
                                }).collect_view()}
                                <tr class="table__row table__row--total">
                                    <td class="table__cell">{"Gross earnings"}</td>
                                    <td class="table__cell table__cell--number">{format!("{:.2}", s.gross_earnings)}</td>
                                </tr>
                            </tbody>
                        </table>

                        <h4>{"Deductions"}</h4>
                        <table class="table__data">
                            <tbody>
                                {deductions.into_iter().map(|c| view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{c.name.clone()}</td>
                                        <td class="table__cell table__cell--number">{format!("{:.2}", c.amount)}</td>
                                    </tr>
                                }).collect_view()}
                                <tr class="table__row table__row--total">
                                    <td class="table__cell">{"Total deductions"}</td>
                                    <td class="table__cell table__cell--number">{format!("{:.2}", s.total_deductions)}</td>
                                </tr>
                            </tbody>
                        </table>

                        <div class="payslip-net">
                            {format!("Net salary: {:.2}", s.net_salary)}
                        </div>
                    </div>
                }
            })}

            <div class="details__footer">
                <button class="button button--secondary" on:click=move |_| on_close.run(())>
                    {"Close"}
                </button>
            </div>
        </div>
    }
}
