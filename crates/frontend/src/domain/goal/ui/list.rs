use std::collections::HashSet;

use contracts::domain::goal::{Goal, GoalStatus, GoalType};
use leptos::prelude::*;

use crate::domain::goal::api;
use crate::domain::goal::ui::details::GoalDetails;
use crate::shared::components::ui::Badge;
use crate::shared::confirm::open_confirm;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::resource::{run_mutation, ListController, ALL};
use crate::shared::toast::ToastService;
use crate::shared::tree::{self, TreeItem};

impl TreeItem for Goal {
    fn id(&self) -> &str {
        &self.id
    }
    fn parent_id(&self) -> Option<&str> {
        self.parent_id.as_deref()
    }
}

fn status_variant(status: GoalStatus) -> String {
    match status {
        GoalStatus::Draft => "neutral",
        GoalStatus::Active => "primary",
        GoalStatus::Completed => "success",
        GoalStatus::Cancelled => "error",
    }
    .to_string()
}

#[component]
#[allow(non_snake_case)]
pub fn GoalList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let ctrl = ListController::<Goal>::new();
    let expanded = RwSignal::new(HashSet::<String>::new());
    let (type_filter, set_type_filter) = signal(ALL.to_string());
    let (status_filter, set_status_filter) = signal(ALL.to_string());

    let do_load = move |goal_type: String, status: String| {
        ctrl.load(api::list(goal_type, status));
    };

    Effect::new(move |_| {
        do_load(type_filter.get(), status_filter.get());
    });

    let refetch = move || do_load(type_filter.get_untracked(), status_filter.get_untracked());

    let toggle_expand = move |id: String| {
        expanded.update(|set| {
            if !set.remove(&id) {
                set.insert(id);
            }
        });
    };

    let open_details_modal = move |id: Option<String>| {
        let id_val = id.clone();
        let snapshot = ctrl.items.get();
        modal_stack.push_with_frame(
            Some("max-width: min(680px, 95vw); width: min(680px, 95vw);".to_string()),
            move |handle| {
                view! {
                    <GoalDetails
                        id=id_val.clone()
                        all_goals=snapshot.clone()
                        on_saved=Callback::new({
                            let handle = handle.clone();
                            move |_| {
                                handle.close();
                                refetch();
                            }
                        })
                        on_cancel=Callback::new({
                            let handle = handle.clone();
                            move |_| handle.close()
                        })
                    />
                }
                .into_any()
            },
        );
    };

    let handle_delete = move |id: String, title: String| {
        open_confirm(
            modal_stack,
            "Delete goal",
            &format!("Delete goal \"{}\"? Its key results go with it.", title),
            move || {
                let id = id.clone();
                run_mutation(toasts, "Goal deleted", api::remove(id), move |_| refetch());
            },
        );
    };

    let handle_transition = move |id: String, status: GoalStatus| {
        run_mutation(
            toasts,
            "Goal status updated",
            api::update_status(id, status),
            move |_| refetch(),
        );
    };

    let rows = move || tree::visible_rows(&ctrl.items.get(), &expanded.get());

    view! {
        <div class="content">
            <div class="header">
                <h2>{"Goals"}</h2>
                <div class="header__actions">
                    <select
                        class="filter-select"
                        on:change=move |ev| set_type_filter.set(event_target_value(&ev))
                    >
                        <option value=ALL selected=move || type_filter.get() == ALL>{"All types"}</option>
                        {GoalType::ALL.iter().map(|t| {
                            let value = t.as_query_value().to_string();
                            let value_clone = value.clone();
                            view! {
                                <option value=value selected=move || type_filter.get() == value_clone>
                                    {t.label()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                    <select
                        class="filter-select"
                        on:change=move |ev| set_status_filter.set(event_target_value(&ev))
                    >
                        <option value=ALL selected=move || status_filter.get() == ALL>{"All statuses"}</option>
                        {GoalStatus::ALL.iter().map(|s| {
                            let value = s.as_query_value().to_string();
                            let value_clone = value.clone();
                            view! {
                                <option value=value selected=move || status_filter.get() == value_clone>
                                    {s.label()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                    <button class="button button--primary" on:click=move |_| open_details_modal(None)>
                        {icon("plus")}
                        {"New goal"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| refetch()>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                </div>
            </div>

            {move || ctrl.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="table-container">
                <table class="table__data tree-table">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Goal"}</th>
                            <th class="table__header-cell">{"Type"}</th>
                            <th class="table__header-cell">{"Category"}</th>
                            <th class="table__header-cell">{"Owner"}</th>
                            <th class="table__header-cell">{"Progress"}</th>
                            <th class="table__header-cell">{"Status"}</th>
                            <th class="table__header-cell">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let visible = rows();
                            if visible.is_empty() {
                                return view! {
                                    <tr><td colspan="7" class="table__empty">{"No goals match the current filters"}</td></tr>
                                }.into_any();
                            }
                            let items = ctrl.items.get();
                            visible.into_iter().map(|(goal, depth)| {
                                let id = goal.id.clone();
                                let id_for_toggle = id.clone();
                                let id_for_edit = id.clone();
                                let id_for_delete = id.clone();
                                let id_for_action = id.clone();
                                let title_for_delete = goal.title.clone();
                                let expandable = tree::has_children(&items, &id);
                                let is_expanded = expanded.get().contains(&id);
                                // Average of key-result completion, falling back
                                // to the backend-reported percent
                                let progress = goal.rolled_up_progress();
                                let status = goal.status;

                                let toggle: AnyView = if expandable {
                                    let chevron = if is_expanded { "chevron-down" } else { "chevron-right" };
                                    view! {
                                        <button
                                            class="tree-toggle"
                                            style="background: none; border: none; cursor: pointer; padding: 0; display: inline-flex; align-items: center; color: #666;"
                                            on:click=move |e| {
                                                e.stop_propagation();
                                                toggle_expand(id_for_toggle.clone());
                                            }
                                        >
                                            {icon(chevron)}
                                        </button>
                                    }.into_any()
                                } else {
                                    view! { <span style="display:inline-block; width: 16px;">{""}</span> }.into_any()
                                };

                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">
                                            <div style={format!(
                                                "display: flex; align-items: center; gap: 6px; padding-left: {}px;",
                                                depth * 16
                                            )}>
                                                {toggle}
                                                <span class="tree-label" on:click=move |_| open_details_modal(Some(id_for_edit.clone()))>
                                                    {goal.title.clone()}
                                                </span>
                                            </div>
                                        </td>
                                        <td class="table__cell">{goal.goal_type.label()}</td>
                                        <td class="table__cell">{goal.category.label()}</td>
                                        <td class="table__cell">{goal.owner_name.clone().unwrap_or_else(|| "-".to_string())}</td>
                                        <td class="table__cell">
                                            <div class="progress-bar" title={format!("{:.0}%", progress)}>
                                                <div class="progress-bar__fill" style={format!("width: {:.0}%;", progress)}></div>
                                            </div>
                                            {format!("{:.0}%", progress)}
                                        </td>
                                        <td class="table__cell">
                                            <Badge variant=status_variant(status)>{status.label()}</Badge>
                                        </td>
                                        <td class="table__cell table__cell--actions">
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
                                            <button class="button button--small button--danger" on:click=move |_| {
                                                handle_delete(id_for_delete.clone(), title_for_delete.clone());
                                            }>
                                                {icon("delete")}
                                            </button>
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
