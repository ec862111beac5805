use contracts::domain::leave::{LeaveRequest, LeaveStats, LeaveStatus, ReviewLeaveRequest};
use leptos::prelude::*;

use crate::domain::leave::api;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::{Badge, Textarea};
use crate::shared::date_utils::format_naive_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, SearchInput, Searchable};
use crate::shared::modal_stack::ModalStackService;
use crate::shared::resource::{run_mutation, spawn_background, ListController, ALL};
use crate::shared::toast::ToastService;

impl Searchable for LeaveRequest {
    fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.to_lowercase();
        self.user_name
            .as_deref()
            .map(|n| n.to_lowercase().contains(&needle))
            .unwrap_or(false)
            || self
                .leave_type_name
                .as_deref()
                .map(|n| n.to_lowercase().contains(&needle))
                .unwrap_or(false)
            || self
                .reason
                .as_deref()
                .map(|r| r.to_lowercase().contains(&needle))
                .unwrap_or(false)
    }
}

fn status_variant(status: LeaveStatus) -> String {
    match status {
        LeaveStatus::Pending => "warning",
        LeaveStatus::Approved => "success",
        LeaveStatus::Rejected => "error",
        LeaveStatus::Cancelled => "neutral",
    }
    .to_string()
}

/// Reject dialog: comments are mandatory, enforced before the network call by
/// disabling submit while the trimmed text is empty.
fn open_reject_modal(
    modal_stack: ModalStackService,
    toasts: ToastService,
    request_id: String,
    on_done: Callback<()>,
) {
    modal_stack.push_with_frame(
        Some("max-width: 480px; width: 480px;".to_string()),
        move |handle| {
            let request_id = request_id.clone();
            let comments = RwSignal::new(String::new());
            let can_submit = move || !comments.get().trim().is_empty();

            let handle_submit = {
                let handle = handle.clone();
                move |_| {
                    let request = ReviewLeaveRequest {
                        status: LeaveStatus::Rejected,
                        comments: Some(comments.get()),
                    };
                    if let Err(msg) = request.validate() {
                        toasts.error(msg);
                        return;
                    }
                    let handle = handle.clone();
                    run_mutation(
                        toasts,
                        "Leave request rejected",
                        api::review(request_id.clone(), request),
                        move |_| {
                            handle.close();
                            on_done.run(());
                        },
                    );
                }
            };

            let handle_cancel = handle.clone();
            view! {
                <div class="details">
                    <div class="details__header"><h3>{"Reject leave request"}</h3></div>
                    <div class="details__body">
                        <Textarea
                            label="Comments (required)".to_string()
                            value=Signal::derive(move || comments.get())
                            on_input=Callback::new(move |v: String| comments.set(v))
                            placeholder="Why is this request rejected?".to_string()
                            rows=4
                        />
                    </div>
                    <div class="details__footer">
                        <button class="button button--secondary" on:click=move |_| handle_cancel.close()>
                            {"Cancel"}
                        </button>
                        <button
                            class="button button--danger"
                            disabled=move || !can_submit()
                            on:click=handle_submit
                        >
                            {"Reject"}
                        </button>
                    </div>
                </div>
            }
            .into_any()
        },
    );
}

#[component]
#[allow(non_snake_case)]
pub fn LeaveApprovalsList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let ctrl = ListController::<LeaveRequest>::new();
    let stats = RwSignal::new(None::<LeaveStats>);
    let (status_filter, set_status_filter) = signal(LeaveStatus::Pending.as_query_value().to_string());
    // The backend does not filter requests by text; search is client-side
    let (search, set_search) = signal(String::new());

    let do_load = move |status: String| {
        ctrl.load(api::list_requests(status));
        spawn_background("leave stats", stats, async move {
            api::stats().await.map(Some)
        });
    };

    Effect::new(move |_| {
        do_load(status_filter.get());
    });

    let refetch = move || do_load(status_filter.get_untracked());

    // Pure projection of (fetched list, search text); the fetched list is
    // never mutated in place
    let visible_requests = move || filter_list(ctrl.items.get(), &search.get());

    let handle_approve = move |id: String| {
        let request = ReviewLeaveRequest {
            status: LeaveStatus::Approved,
            comments: None,
        };
        run_mutation(
            toasts,
            "Leave request approved",
            api::review(id, request),
            move |_| refetch(),
        );
    };

    let status_options = move || {
        let mut options = vec![(ALL.to_string(), "All statuses".to_string())];
        options.extend(
            LeaveStatus::ALL
                .iter()
                .map(|s| (s.as_query_value().to_string(), s.label().to_string())),
        );
        options
    };

    view! {
        <div class="content">
            <div class="stat-row">
                <StatCard label="Pending".to_string() icon_name="leave".to_string() accent="warning".to_string()
                    value=Signal::derive(move || stats.get().map(|s| s.pending)) />
                <StatCard label="Approved".to_string() icon_name="check".to_string() accent="success".to_string()
                    value=Signal::derive(move || stats.get().map(|s| s.approved)) />
                <StatCard label="Rejected".to_string() icon_name="x".to_string() accent="error".to_string()
                    value=Signal::derive(move || stats.get().map(|s| s.rejected)) />
            </div>

            <div class="header">
                <h2>{"Leave Approvals"}</h2>
                <div class="header__actions">
                    <SearchInput
                        value=Signal::derive(move || search.get())
                        on_change=Callback::new(move |text: String| set_search.set(text))
                        placeholder="Search by employee, type or reason...".to_string()
                    />
                    <select
                        class="filter-select"
                        on:change=move |ev| set_status_filter.set(event_target_value(&ev))
                    >
                        {status_options().into_iter().map(|(value, label)| {
                            let value_clone = value.clone();
                            view! {
                                <option value=value selected=move || status_filter.get() == value_clone>
                                    {label}
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
                            <th class="table__header-cell">{"Employee"}</th>
                            <th class="table__header-cell">{"Type"}</th>
                            <th class="table__header-cell">{"From"}</th>
                            <th class="table__header-cell">{"To"}</th>
                            <th class="table__header-cell">{"Days"}</th>
                            <th class="table__header-cell">{"Status"}</th>
                            <th class="table__header-cell">{"Comments"}</th>
                            <th class="table__header-cell">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let requests = visible_requests();
                            if requests.is_empty() {
                                return view! {
                                    <tr><td colspan="8" class="table__empty">{"No leave requests found"}</td></tr>
                                }.into_any();
                            }
                            requests.into_iter().map(|request| {
                                let id_approve = request.id.clone();
                                let id_reject = request.id.clone();
                                let status = request.status;
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{request.user_name.clone().unwrap_or_else(|| request.user_id.clone())}</td>
                                        <td class="table__cell">{request.leave_type_name.clone().unwrap_or_default()}</td>
                                        <td class="table__cell">{format_naive_date(request.from_date)}</td>
                                        <td class="table__cell">{format_naive_date(request.to_date)}</td>
                                        <td class="table__cell">{format!("{}", request.total_days)}</td>
                                        <td class="table__cell">
                                            <Badge variant=status_variant(status)>{status.label()}</Badge>
                                        </td>
                                        <td class="table__cell">{request.review_comments.clone().unwrap_or_else(|| "-".to_string())}</td>
                                        <td class="table__cell table__cell--actions">
                                            // Approve/Reject render only while the request is PENDING
                                            {(status == LeaveStatus::Pending).then(|| {
                                                let id_a = id_approve.clone();
                                                let id_r = id_reject.clone();
                                                view! {
                                                    <button class="button button--small button--primary" on:click=move |_| handle_approve(id_a.clone())>
                                                        {"Approve"}
                                                    </button>
                                                    <button class="button button--small button--danger" on:click=move |_| {
                                                        open_reject_modal(modal_stack, toasts, id_r.clone(), Callback::new(move |_| refetch()));
                                                    }>
                                                        {"Reject"}
                                                    </button>
                                                }
                                            })}
                                        </td>
                                    </tr>
                                }
                            }).collect_view().into_any()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
