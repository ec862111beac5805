//! Status-transition modals: allocate, return, update status. Each renders
//! only for the statuses it is valid from; the backend remains authoritative
//! and its rejection surfaces as a toast.

use contracts::domain::asset::{
    AllocateRequest, AssetCondition, AssetStatus, ReturnRequest, UpdateStatusRequest,
};
use leptos::prelude::*;

use crate::domain::asset::api;
use crate::domain::employee;
use crate::shared::components::ui::Select;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::resource::{run_mutation, spawn_background};
use crate::shared::toast::ToastService;

fn condition_options() -> Vec<(String, String)> {
    AssetCondition::ALL
        .iter()
        .map(|c| (c.as_query_value().to_string(), c.label().to_string()))
        .collect()
}

pub fn open_allocate_modal(
    modal_stack: ModalStackService,
    toasts: ToastService,
    asset_id: String,
    on_done: Callback<()>,
) {
    modal_stack.push_with_frame(
        Some("max-width: 440px; width: 440px;".to_string()),
        move |handle| {
            let asset_id = asset_id.clone();
            let selected_user = RwSignal::new(String::new());
            let condition = RwSignal::new(AssetCondition::Good);
            let employees = RwSignal::new(Vec::<(String, String)>::new());

            // Lookup table for the employee dropdown; non-critical read
            spawn_background("employee lookup", employees, async move {
                let list = employee::api::lookup_active().await?;
                Ok(list
                    .into_iter()
                    .map(|e| (e.id, e.full_name))
                    .collect::<Vec<_>>())
            });

            let handle_submit = {
                let handle = handle.clone();
                move |_| {
                    let user_id = selected_user.get();
                    if user_id.is_empty() {
                        toasts.error("Choose an employee first");
                        return;
                    }
                    let request = AllocateRequest {
                        user_id,
                        condition_out: condition.get(),
                    };
                    let handle = handle.clone();
                    run_mutation(
                        toasts,
                        "Asset allocated",
                        api::allocate(asset_id.clone(), request),
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
                    <div class="details__header"><h3>{"Allocate asset"}</h3></div>
                    <div class="details__body">
                        <Select
                            label="Employee".to_string()
                            value=Signal::derive(move || selected_user.get())
                            options=Signal::derive(move || {
                                let mut options = vec![(String::new(), "Choose...".to_string())];
                                options.extend(employees.get());
                                options
                            })
                            on_change=Callback::new(move |v: String| selected_user.set(v))
                        />
                        <Select
                            label="Condition at hand-out".to_string()
                            value=Signal::derive(move || condition.get().as_query_value().to_string())
                            options=condition_options()
                            on_change=Callback::new(move |v: String| {
                                condition.set(
                                    AssetCondition::from_query_value(&v).unwrap_or(AssetCondition::Good),
                                );
                            })
                        />
                    </div>
                    <div class="details__footer">
                        <button class="button button--secondary" on:click=move |_| handle_cancel.close()>
                            {"Cancel"}
                        </button>
                        <button class="button button--primary" on:click=handle_submit>
                            {"Allocate"}
                        </button>
                    </div>
                </div>
            }
            .into_any()
        },
    );
}

pub fn open_return_modal(
    modal_stack: ModalStackService,
    toasts: ToastService,
    asset_id: String,
    on_done: Callback<()>,
) {
    modal_stack.push_with_frame(
        Some("max-width: 440px; width: 440px;".to_string()),
        move |handle| {
            let asset_id = asset_id.clone();
            let condition = RwSignal::new(AssetCondition::Good);

            let handle_submit = {
                let handle = handle.clone();
                move |_| {
                    let request = ReturnRequest {
                        condition_in: condition.get(),
                    };
                    let handle = handle.clone();
                    run_mutation(
                        toasts,
                        "Asset returned",
                        api::return_asset(asset_id.clone(), request),
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
                    <div class="details__header"><h3>{"Return asset"}</h3></div>
                    <div class="details__body">
                        <Select
                            label="Condition at return".to_string()
                            value=Signal::derive(move || condition.get().as_query_value().to_string())
                            options=condition_options()
                            on_change=Callback::new(move |v: String| {
                                condition.set(
                                    AssetCondition::from_query_value(&v).unwrap_or(AssetCondition::Good),
                                );
                            })
                        />
                    </div>
                    <div class="details__footer">
                        <button class="button button--secondary" on:click=move |_| handle_cancel.close()>
                            {"Cancel"}
                        </button>
                        <button class="button button--primary" on:click=handle_submit>
                            {"Return"}
                        </button>
                    </div>
                </div>
            }
            .into_any()
        },
    );
}

pub fn open_status_modal(
    modal_stack: ModalStackService,
    toasts: ToastService,
    asset_id: String,
    current: AssetStatus,
    on_done: Callback<()>,
) {
    modal_stack.push_with_frame(
        Some("max-width: 440px; width: 440px;".to_string()),
        move |handle| {
            let asset_id = asset_id.clone();
            // Only statuses reachable from the current one are offered
            let transitions = current.allowed_transitions();
            let selected = RwSignal::new(
                transitions
                    .first()
                    .map(|s| s.as_query_value().to_string())
                    .unwrap_or_default(),
            );

            let options: Vec<(String, String)> = transitions
                .iter()
                .map(|s| (s.as_query_value().to_string(), s.label().to_string()))
                .collect();

            let handle_submit = {
                let handle = handle.clone();
                move |_| {
                    let Some(status) = AssetStatus::ALL
                        .into_iter()
                        .find(|s| s.as_query_value() == selected.get())
                    else {
                        return;
                    };
                    let handle = handle.clone();
                    run_mutation(
                        toasts,
                        "Status updated",
                        api::update_status(asset_id.clone(), UpdateStatusRequest { status }),
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
                    <div class="details__header">
                        <h3>{format!("Change status ({})", current.label())}</h3>
                    </div>
                    <div class="details__body">
                        <Select
                            label="New status".to_string()
                            value=Signal::derive(move || selected.get())
                            options=options
                            on_change=Callback::new(move |v: String| selected.set(v))
                        />
                    </div>
                    <div class="details__footer">
                        <button class="button button--secondary" on:click=move |_| handle_cancel.close()>
                            {"Cancel"}
                        </button>
                        <button class="button button--primary" on:click=handle_submit>
                            {"Apply"}
                        </button>
                    </div>
                </div>
            }
            .into_any()
        },
    );
}
