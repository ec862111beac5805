use std::collections::HashSet;

use contracts::domain::department::Department;
use leptos::prelude::*;

use crate::domain::department::api;
use crate::domain::department::ui::details::DepartmentDetails;
use crate::shared::confirm::open_confirm;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::resource::{run_mutation, ListController};
use crate::shared::toast::ToastService;
use crate::shared::tree::{self, TreeItem};

impl TreeItem for Department {
    fn id(&self) -> &str {
        &self.id
    }
    fn parent_id(&self) -> Option<&str> {
        self.parent_id.as_deref()
    }
}

#[component]
#[allow(non_snake_case)]
pub fn DepartmentTree() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let ctrl = ListController::<Department>::new();
    // Expand state is a set of node ids, independent of the fetched data
    let expanded = RwSignal::new(HashSet::<String>::new());

    let refetch = move || ctrl.load(api::list());

    Effect::new(move |_| {
        refetch();
    });

    let toggle_expand = move |id: String| {
        expanded.update(|set| {
            if !set.remove(&id) {
                set.insert(id);
            }
        });
    };

    let expand_all = move |_| {
        expanded.set(tree::all_ids(&ctrl.items.get()));
    };

    let collapse_all = move |_| {
        expanded.set(HashSet::new());
    };

    let open_details_modal = move |id: Option<String>| {
        let id_val = id.clone();
        // Snapshot of the full tree for the parent selector
        let snapshot = ctrl.items.get();
        modal_stack.push_with_frame(
            Some("max-width: min(560px, 95vw); width: min(560px, 95vw);".to_string()),
            move |handle| {
                view! {
                    <DepartmentDetails
                        id=id_val.clone()
                        all_departments=snapshot.clone()
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

    let handle_delete = move |id: String, name: String| {
        open_confirm(
            modal_stack,
            "Delete department",
            &format!("Delete department \"{}\"? This cannot be undone.", name),
            move || {
                let id = id.clone();
                run_mutation(
                    toasts,
                    "Department deleted",
                    api::remove(id),
                    move |_| refetch(),
                );
            },
        );
    };

    let rows = move || tree::visible_rows(&ctrl.items.get(), &expanded.get());

    view! {
        <div class="content">
            <div class="header">
                <h2>{"Departments"}</h2>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=expand_all>
                        {"Expand all"}
                    </button>
                    <button class="button button--secondary" on:click=collapse_all>
                        {"Collapse all"}
                    </button>
                    <button class="button button--primary" on:click=move |_| open_details_modal(None)>
                        {icon("plus")}
                        {"New department"}
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
                            <th class="table__header-cell">{"Name"}</th>
                            <th class="table__header-cell">{"Head"}</th>
                            <th class="table__header-cell">{"Employees"}</th>
                            <th class="table__header-cell">{"Sub-departments"}</th>
                            <th class="table__header-cell">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let visible = rows();
                            if visible.is_empty() {
                                return view! {
                                    <tr><td colspan="5" class="table__empty">{"No departments yet"}</td></tr>
                                }.into_any();
                            }
                            let items = ctrl.items.get();
                            visible.into_iter().map(|(dept, depth)| {
                                let id = dept.id.clone();
                                let id_for_toggle = id.clone();
                                let id_for_edit = id.clone();
                                let id_for_delete = id.clone();
                                let name_for_delete = dept.name.clone();
                                let expandable = tree::has_children(&items, &id);
                                let is_expanded = expanded.get().contains(&id);

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
                                                    {dept.name.clone()}
                                                </span>
                                            </div>
                                        </td>
                                        <td class="table__cell">{dept.head_name.clone().unwrap_or_else(|| "-".to_string())}</td>
                                        <td class="table__cell">{dept.employee_count}</td>
                                        <td class="table__cell">{dept.child_count}</td>
                                        <td class="table__cell table__cell--actions">
                                            <button class="button button--small button--danger" on:click=move |_| {
                                                handle_delete(id_for_delete.clone(), name_for_delete.clone());
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
