pub mod state;

use std::cmp::Ordering;

use contracts::domain::asset::{Asset, AssetCategory, AssetStats, AssetStatus};
use leptos::prelude::*;

use self::state::{create_state, persist_state};
use crate::domain::asset::api;
use crate::domain::asset::ui::actions::{open_allocate_modal, open_return_modal, open_status_modal};
use crate::domain::asset::ui::details::AssetDetails;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::Badge;
use crate::shared::confirm::open_confirm;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_indicator, sort_list, SearchInput, Sortable};
use crate::shared::modal_stack::ModalStackService;
use crate::shared::resource::{run_mutation, spawn_background, ListController, ALL};
use crate::shared::toast::ToastService;

#[derive(Clone, Debug)]
pub struct AssetRow {
    pub id: String,
    pub asset_code: String,
    pub name: String,
    pub category: &'static str,
    pub status: AssetStatus,
    pub condition: &'static str,
    pub current_user: String,
    pub created_at: String,
}

impl From<Asset> for AssetRow {
    fn from(a: Asset) -> Self {
        Self {
            id: a.id,
            asset_code: a.asset_code,
            name: a.name,
            category: a.category.label(),
            status: a.status,
            condition: a.condition.label(),
            current_user: a
                .current_user
                .map(|u| u.full_name)
                .unwrap_or_else(|| "-".to_string()),
            created_at: format_datetime(&a.created_at.to_rfc3339()),
        }
    }
}

impl Sortable for AssetRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "asset_code" => self
                .asset_code
                .to_lowercase()
                .cmp(&other.asset_code.to_lowercase()),
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "category" => self.category.cmp(other.category),
            "status" => self.status.label().cmp(other.status.label()),
            "current_user" => self
                .current_user
                .to_lowercase()
                .cmp(&other.current_user.to_lowercase()),
            "created_at" => self.created_at.cmp(&other.created_at),
            _ => Ordering::Equal,
        }
    }
}

fn status_variant(status: AssetStatus) -> String {
    match status {
        AssetStatus::Available => "success",
        AssetStatus::Assigned => "primary",
        AssetStatus::Maintenance | AssetStatus::Repair => "warning",
        AssetStatus::Retired | AssetStatus::Lost => "error",
    }
    .to_string()
}

#[component]
#[allow(non_snake_case)]
pub fn AssetList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let state = create_state();
    let ctrl = ListController::<Asset>::new();
    let stats = RwSignal::new(None::<AssetStats>);
    let (sort_field, set_sort_field) = signal("asset_code".to_string());
    let (sort_ascending, set_sort_ascending) = signal(true);

    // List is the critical read; stats ride along in the background and a
    // stats failure never blocks the page.
    let do_load = move |s: state::AssetListState| {
        ctrl.load(api::list(s.status_filter, s.category_filter, s.search));
        spawn_background("asset stats", stats, async move {
            api::stats().await.map(Some)
        });
    };

    Effect::new(move |_| {
        do_load(state.get());
    });

    let refetch = move || do_load(state.get_untracked());

    let open_details_modal = move |id: Option<String>| {
        let id_val = id.clone();
        modal_stack.push_with_frame(
            Some("max-width: min(640px, 95vw); width: min(640px, 95vw);".to_string()),
            move |handle| {
                view! {
                    <AssetDetails
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

    let handle_delete = move |id: String, name: String| {
        open_confirm(
            modal_stack,
            "Delete asset",
            &format!("Delete asset \"{}\"? This cannot be undone.", name),
            move || {
                let id = id.clone();
                run_mutation(toasts, "Asset deleted", api::remove(id), move |_| refetch());
            },
        );
    };

    let toggle_sort = move |field: &'static str| {
        move |_| {
            if sort_field.get() == field {
                set_sort_ascending.update(|v| *v = !*v);
            } else {
                set_sort_field.set(field.to_string());
                set_sort_ascending.set(true);
            }
        }
    };

    let sorted_rows = move || {
        let mut rows: Vec<AssetRow> = ctrl.items.get().into_iter().map(Into::into).collect();
        sort_list(&mut rows, &sort_field.get(), sort_ascending.get());
        rows
    };

    let status_options = || {
        let mut options = vec![(ALL.to_string(), "All statuses".to_string())];
        options.extend(
            AssetStatus::ALL
                .iter()
                .map(|s| (s.as_query_value().to_string(), s.label().to_string())),
        );
        options
    };

    let category_options = || {
        let mut options = vec![(ALL.to_string(), "All categories".to_string())];
        options.extend(
            AssetCategory::ALL
                .iter()
                .map(|c| (c.as_query_value().to_string(), c.label().to_string())),
        );
        options
    };

    let header_cell = move |field: &'static str, label: &'static str| {
        view! {
            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort(field)>
                {label}
                <span>
                    {move || get_sort_indicator(&sort_field.get(), field, sort_ascending.get())}
                </span>
            </th>
        }
    };

    view! {
        <div class="content">
            <div class="stat-row">
                <StatCard label="Total".to_string() icon_name="assets".to_string()
                    value=Signal::derive(move || stats.get().map(|s| s.total)) />
                <StatCard label="Available".to_string() icon_name="check".to_string() accent="success".to_string()
                    value=Signal::derive(move || stats.get().map(|s| s.available)) />
                <StatCard label="Assigned".to_string() icon_name="employees".to_string()
                    value=Signal::derive(move || stats.get().map(|s| s.assigned)) />
                <StatCard label="In maintenance".to_string() icon_name="refresh".to_string() accent="warning".to_string()
                    value=Signal::derive(move || stats.get().map(|s| s.in_maintenance)) />
            </div>

            <div class="header">
                <h2>{"Assets"}</h2>
                <div class="header__actions">
                    <SearchInput
                        value=Signal::derive(move || state.get().search)
                        on_change=Callback::new(move |text: String| {
                            state.update(|s| s.search = text);
                        })
                        placeholder="Search by name or code...".to_string()
                    />
                    <select
                        class="filter-select"
                        on:change=move |ev| {
                            state.update(|s| s.status_filter = event_target_value(&ev));
                            persist_state(state);
                        }
                    >
                        {status_options().into_iter().map(|(value, label)| {
                            let value_clone = value.clone();
                            view! {
                                <option value=value selected=move || state.get().status_filter == value_clone>
                                    {label}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                    <select
                        class="filter-select"
                        on:change=move |ev| {
                            state.update(|s| s.category_filter = event_target_value(&ev));
                            persist_state(state);
                        }
                    >
                        {category_options().into_iter().map(|(value, label)| {
                            let value_clone = value.clone();
                            view! {
                                <option value=value selected=move || state.get().category_filter == value_clone>
                                    {label}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                    <button class="button button--primary" on:click=move |_| open_details_modal(None)>
                        {icon("plus")}
                        {"New asset"}
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
                                    {header_cell("asset_code", "Code")}
                                    {header_cell("name", "Name")}
                                    {header_cell("category", "Category")}
                                    {header_cell("status", "Status")}
                                    <th class="table__header-cell">{"Condition"}</th>
                                    {header_cell("current_user", "Assigned to")}
                                    <th class="table__header-cell">{"Actions"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    let rows = sorted_rows();
                                    if rows.is_empty() {
                                        return view! {
                                            <tr><td colspan="7" class="table__empty">{"No assets match the current filters"}</td></tr>
                                        }.into_any();
                                    }
                                    rows.into_iter().map(|row| {
                                        let id_for_edit = row.id.clone();
                                        let id_for_delete = row.id.clone();
                                        let id_for_action = row.id.clone();
                                        let name_for_delete = row.name.clone();
                                        let status = row.status;
                                        view! {
                                            <tr class="table__row" on:click=move |_| open_details_modal(Some(id_for_edit.clone()))>
                                                <td class="table__cell">{row.asset_code}</td>
                                                <td class="table__cell">{row.name}</td>
                                                <td class="table__cell">{row.category}</td>
                                                <td class="table__cell">
                                                    <Badge variant=status_variant(status)>{status.label()}</Badge>
                                                </td>
                                                <td class="table__cell">{row.condition}</td>
                                                <td class="table__cell">{row.current_user}</td>
                                                <td class="table__cell table__cell--actions" on:click=|e| e.stop_propagation()>
                                                    // Transition actions valid from the current status only
                                                    {(status == AssetStatus::Available).then(|| {
                                                        let id = id_for_action.clone();
                                                        view! {
                                                            <button class="button button--small" on:click=move |_| {
                                                                open_allocate_modal(modal_stack, toasts, id.clone(), Callback::new(move |_| refetch()));
                                                            }>{"Allocate"}</button>
                                                        }
                                                    })}
                                                    {(status == AssetStatus::Assigned).then(|| {
                                                        let id = id_for_action.clone();
                                                        view! {
                                                            <button class="button button--small" on:click=move |_| {
                                                                open_return_modal(modal_stack, toasts, id.clone(), Callback::new(move |_| refetch()));
                                                            }>{"Return"}</button>
                                                        }
                                                    })}
                                                    {(!status.allowed_transitions().is_empty()).then(|| {
                                                        let id = id_for_action.clone();
                                                        view! {
                                                            <button class="button button--small" on:click=move |_| {
                                                                open_status_modal(modal_stack, toasts, id.clone(), status, Callback::new(move |_| refetch()));
                                                            }>{"Status"}</button>
                                                        }
                                                    })}
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
                }.into_any()
            }}
        </div>
    }
}
