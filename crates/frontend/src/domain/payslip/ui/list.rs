use contracts::domain::payslip::{Payslip, PayslipStatus, UpdatePayslipStatusRequest};
use leptos::prelude::*;

use crate::domain::payslip::api;
use crate::domain::payslip::ui::details::PayslipDetails;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::resource::{run_mutation, ListController, ALL};
use crate::shared::toast::ToastService;

fn status_variant(status: PayslipStatus) -> String {
    match status {
        PayslipStatus::Draft => "neutral",
        PayslipStatus::Processed => "warning",
        PayslipStatus::Paid => "success",
        PayslipStatus::Cancelled => "error",
    }
    .to_string()
}

fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

#[component]
#[allow(non_snake_case)]
pub fn PayslipList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let ctrl = ListController::<Payslip>::new();
    let (month_filter, set_month_filter) = signal(ALL.to_string());
    let (year_filter, set_year_filter) = signal(ALL.to_string());
    let (status_filter, set_status_filter) = signal(ALL.to_string());
    // Client-side pagination over the fetched list
    let (page, set_page) = signal(0usize);
    let (page_size, set_page_size) = signal(25usize);

    let do_load = move |month: String, year: String, status: String| {
        ctrl.load(api::list(month, year, status));
    };

    Effect::new(move |_| {
        do_load(month_filter.get(), year_filter.get(), status_filter.get());
        set_page.set(0);
    });

    let total_pages = move || {
        let size = page_size.get().max(1);
        ctrl.items.get().len().div_ceil(size)
    };

    let current_page = move || page.get().min(total_pages().saturating_sub(1));

    let paged_items = move || {
        let size = page_size.get().max(1);
        ctrl.items
            .get()
            .into_iter()
            .skip(current_page() * size)
            .take(size)
            .collect::<Vec<Payslip>>()
    };

    let refetch = move || {
        do_load(
            month_filter.get_untracked(),
            year_filter.get_untracked(),
            status_filter.get_untracked(),
        )
    };

    let open_details_modal = move |id: String| {
        modal_stack.push_with_frame(
            Some("max-width: min(560px, 95vw); width: min(560px, 95vw);".to_string()),
            move |handle| {
                view! {
                    <PayslipDetails
                        id=id.clone()
                        on_close=Callback::new({
                            let handle = handle.clone();
                            move |_| handle.close()
                        })
                    />
                }
                .into_any()
            },
        );
    };

    // Only the forward transitions of the current status are offered; a PAID
    // slip gets no status actions at all
    let handle_transition = move |id: String, status: PayslipStatus| {
        run_mutation(
            toasts,
            "Payslip status updated",
            api::update_status(id, UpdatePayslipStatusRequest { status }),
            move |_| refetch(),
        );
    };

    const MONTHS: [(&str, &str); 12] = [
        ("1", "January"),
        ("2", "February"),
        ("3", "March"),
        ("4", "April"),
        ("5", "May"),
        ("6", "June"),
        ("7", "July"),
        ("8", "August"),
        ("9", "September"),
        ("10", "October"),
        ("11", "November"),
        ("12", "December"),
    ];

    view! {
        <div class="content">
            <div class="header">
                <h2>{"Payslips"}</h2>
                <div class="header__actions">
                    <select
                        class="filter-select"
                        on:change=move |ev| set_month_filter.set(event_target_value(&ev))
                    >
                        <option value=ALL selected=move || month_filter.get() == ALL>{"All months"}</option>
                        {MONTHS.iter().map(|(value, label)| {
                            let value_string = value.to_string();
                            let value_clone = value_string.clone();
                            view! {
                                <option value=value_string selected=move || month_filter.get() == value_clone>
                                    {*label}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                    <select
                        class="filter-select"
                        on:change=move |ev| set_year_filter.set(event_target_value(&ev))
                    >
                        <option value=ALL selected=move || year_filter.get() == ALL>{"All years"}</option>
                        {["2024", "2025", "2026"].iter().map(|year| {
                            let value = year.to_string();
                            let value_clone = value.clone();
                            view! {
                                <option value=value selected=move || year_filter.get() == value_clone>
                                    {*year}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                    <select
                        class="filter-select"
                        on:change=move |ev| set_status_filter.set(event_target_value(&ev))
                    >
                        <option value=ALL selected=move || status_filter.get() == ALL>{"All statuses"}</option>
                        {PayslipStatus::ALL.iter().map(|s| {
                            let value = s.as_query_value().to_string();
                            let value_clone = value.clone();
                            view! {
                                <option value=value selected=move || status_filter.get() == value_clone>
                                    {s.label()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                    <button class="button button--secondary" on:click=move |_| refetch()>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                </div>
            </div>

            {move || ctrl.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Period"}</th>
                            <th class="table__header-cell">{"Employee"}</th>
                            <th class="table__header-cell">{"Gross"}</th>
                            <th class="table__header-cell">{"Deductions"}</th>
                            <th class="table__header-cell">{"Net"}</th>
                            <th class="table__header-cell">{"Status"}</th>
                            <th class="table__header-cell">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let payslips = paged_items();
                            if payslips.is_empty() {
                                return view! {
                                    <tr><td colspan="7" class="table__empty">{"No payslips for the selected filters"}</td></tr>
                                }.into_any();
                            }
                            payslips.into_iter().map(|slip| {
                                let id_for_open = slip.id.clone();
                                let id_for_action = slip.id.clone();
                                let status = slip.status;
                                view! {
                                    <tr class="table__row" on:click=move |_| open_details_modal(id_for_open.clone())>
                                        <td class="table__cell">{slip.period_label()}</td>
                                        <td class="table__cell">{slip.user_name.clone().unwrap_or_else(|| slip.user_id.clone())}</td>
                                        <td class="table__cell">{format_amount(slip.gross_earnings)}</td>
                                        <td class="table__cell">{format_amount(slip.total_deductions)}</td>
                                        <td class="table__cell">{format_amount(slip.net_salary)}</td>
                                        <td class="table__cell">
                                            <Badge variant=status_variant(status)>{status.label()}</Badge>
                                        </td>
                                        <td class="table__cell table__cell--actions" on:click=|e| e.stop_propagation()>
                                            {status.allowed_transitions().iter().map(|&next| {
                                                let id = id_for_action.clone();
                                                view! {
                                                    <button class="button button--small" on:click=move |_| {
                                                        handle_transition(id.clone(), next);
                                                    }>
                                                        {next.label()}
                                                    </button>
                                                }
                                            }).collect_view()}
                                        </td>
                                    </tr>
                                }
                            }).collect_view().into_any()
                        }}
                    </tbody>
                </table>
            </div>

            <PaginationControls
                current_page=Signal::derive(current_page)
                total_pages=Signal::derive(total_pages)
                total_count=Signal::derive(move || ctrl.items.get().len())
                page_size=Signal::derive(move || page_size.get())
                on_page_change=Callback::new(move |p: usize| set_page.set(p))
                on_page_size_change=Callback::new(move |size: usize| {
                    set_page_size.set(size);
                    set_page.set(0);
                })
            />
        </div>
    }
}
