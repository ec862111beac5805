use contracts::common::ExportFormat;
use contracts::domain::employee::{Employee, EmployeeStats, EmployeeStatus};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::department;
use crate::domain::employee::api;
use crate::domain::employee::ui::details::EmployeeDetails;
use crate::domain::employee::ui::import::open_import_modal;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::Badge;
use crate::shared::confirm::open_confirm;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::resource::{run_mutation, ListController, ALL};
use crate::shared::toast::ToastService;

#[derive(Clone, Debug)]
struct EmployeeFilters {
    search: String,
    department_filter: String,
    status_filter: String,
}

impl Default for EmployeeFilters {
    fn default() -> Self {
        Self {
            search: String::new(),
            department_filter: ALL.to_string(),
            status_filter: ALL.to_string(),
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn EmployeeList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let filters = RwSignal::new(EmployeeFilters::default());
    let ctrl = ListController::<Employee>::new();
    let stats = RwSignal::new(None::<EmployeeStats>);
    let departments = RwSignal::new(Vec::<(String, String)>::new());

    // Page load fans out: the critical list through the controller, stats and
    // the department lookup joined in one background task. Either background
    // read may fail without affecting the page.
    let do_load = move |f: EmployeeFilters| {
        ctrl.load(api::list(f.search, f.department_filter, f.status_filter));
        spawn_local(async move {
            let (stats_result, departments_result) =
                futures::join!(api::stats(), department::api::list());
            match stats_result {
                Ok(s) => stats.set(Some(s)),
                Err(e) => log::warn!("background fetch 'employee stats' failed: {}", e),
            }
            match departments_result {
                Ok(list) => {
                    departments.set(list.into_iter().map(|d| (d.id, d.name)).collect());
                }
                Err(e) => log::warn!("background fetch 'department lookup' failed: {}", e),
            }
        });
    };

    Effect::new(move |_| {
        do_load(filters.get());
    });

    let refetch = move || do_load(filters.get_untracked());

    let open_details_modal = move |id: Option<String>| {
        let id_val = id.clone();
        modal_stack.push_with_frame(
            Some("max-width: min(640px, 95vw); width: min(640px, 95vw);".to_string()),
            move |handle| {
                view! {
                    <EmployeeDetails
                        id=id_val.clone()
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

    let handle_deactivate = move |id: String, name: String| {
        open_confirm(
            modal_stack,
            "Deactivate employee",
            &format!("Deactivate \"{}\"? They will lose access to the system.", name),
            move || {
                let id = id.clone();
                run_mutation(
                    toasts,
                    "Employee deactivated",
                    api::deactivate(id),
                    move |_| refetch(),
                );
            },
        );
    };

    let handle_export = move |format: ExportFormat| {
        spawn_local(async move {
            if let Err(e) = api::export(format).await {
                toasts.error(e);
            }
        });
    };

    view! {
        <div class="content">
            <div class="stat-row">
                <StatCard label="Total".to_string() icon_name="employees".to_string()
                    value=Signal::derive(move || stats.get().map(|s| s.total)) />
                <StatCard label="Active".to_string() icon_name="check".to_string() accent="success".to_string()
                    value=Signal::derive(move || stats.get().map(|s| s.active)) />
                <StatCard label="Inactive".to_string() icon_name="x".to_string() accent="warning".to_string()
                    value=Signal::derive(move || stats.get().map(|s| s.inactive)) />
            </div>

            <div class="header">
                <h2>{"Employees"}</h2>
                <div class="header__actions">
                    <SearchInput
                        value=Signal::derive(move || filters.get().search)
                        on_change=Callback::new(move |text: String| {
                            filters.update(|f| f.search = text);
                        })
                        placeholder="Search by name, email or code...".to_string()
                    />
                    <select
                        class="filter-select"
                        on:change=move |ev| {
                            filters.update(|f| f.department_filter = event_target_value(&ev));
                        }
                    >
                        <option value=ALL selected=move || filters.get().department_filter == ALL>
                            {"All departments"}
                        </option>
                        {move || departments.get().into_iter().map(|(id, name)| {
                            let id_clone = id.clone();
                            view! {
                                <option value=id selected=move || filters.get().department_filter == id_clone>
                                    {name}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                    <select
                        class="filter-select"
                        on:change=move |ev| {
                            filters.update(|f| f.status_filter = event_target_value(&ev));
                        }
                    >
                        <option value=ALL selected=move || filters.get().status_filter == ALL>{"All statuses"}</option>
                        <option value="ACTIVE" selected=move || filters.get().status_filter == "ACTIVE">{"Active"}</option>
                        <option value="INACTIVE" selected=move || filters.get().status_filter == "INACTIVE">{"Inactive"}</option>
                    </select>
                    <button class="button button--primary" on:click=move |_| open_details_modal(None)>
                        {icon("plus")}
                        {"New employee"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| {
                        open_import_modal(modal_stack, toasts, Callback::new(move |_| refetch()));
                    }>
                        {icon("upload")}
                        {"Import CSV"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| handle_export(ExportFormat::Csv)>
                        {icon("download")}
                        {"Export CSV"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| handle_export(ExportFormat::Excel)>
                        {icon("download")}
                        {"Export Excel"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| refetch()>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                </div>
            </div>

            {move || ctrl.error.get().map(|e| view! { <div class="error">{e}</div> })}

            {move || if ctrl.loading.get() {
                view! { <div class="loading">{"Loading..."}</div> }.into_any()
            } else {
                view! {
                    <div class="table-container">
                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">{"Code"}</th>
                                    <th class="table__header-cell">{"Name"}</th>
                                    <th class="table__header-cell">{"Email"}</th>
                                    <th class="table__header-cell">{"Designation"}</th>
                                    <th class="table__header-cell">{"Department"}</th>
                                    <th class="table__header-cell">{"Status"}</th>
                                    <th class="table__header-cell">{"Actions"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    let employees = ctrl.items.get();
                                    if employees.is_empty() {
                                        return view! {
                                            <tr><td colspan="7" class="table__empty">{"No employees match the current filters"}</td></tr>
                                        }.into_any();
                                    }
                                    employees.into_iter().map(|employee| {
                                        let id_for_edit = employee.id.clone();
                                        let id_for_deactivate = employee.id.clone();
                                        let name_for_deactivate = employee.full_name.clone();
                                        let is_active = employee.status == EmployeeStatus::Active;
                                        view! {
                                            <tr class="table__row" on:click=move |_| open_details_modal(Some(id_for_edit.clone()))>
                                                <td class="table__cell">{employee.employee_code.clone()}</td>
                                                <td class="table__cell">{employee.full_name.clone()}</td>
                                                <td class="table__cell">{employee.email.clone()}</td>
                                                <td class="table__cell">{employee.designation.clone().unwrap_or_else(|| "-".to_string())}</td>
                                                <td class="table__cell">{employee.department_name.clone().unwrap_or_else(|| "-".to_string())}</td>
                                                <td class="table__cell">
                                                    {if is_active {
                                                        view! { <Badge variant="success".to_string()>{"Active"}</Badge> }.into_any()
                                                    } else {
                                                        view! { <Badge variant="neutral".to_string()>{"Inactive"}</Badge> }.into_any()
                                                    }}
                                                </td>
                                                <td class="table__cell table__cell--actions" on:click=|e| e.stop_propagation()>
                                                    {is_active.then(|| {
                                                        let id = id_for_deactivate.clone();
                                                        let name = name_for_deactivate.clone();
                                                        view! {
                                                            <button class="button button--small button--danger" on:click=move |_| {
                                                                handle_deactivate(id.clone(), name.clone());
                                                            }>
                                                                {"Deactivate"}
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
                }.into_any()
            }}
        </div>
    }
}
