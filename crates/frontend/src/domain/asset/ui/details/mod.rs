use contracts::domain::asset::{AssetAllocation, AssetCategory, AssetCondition, AssetDto};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::asset::api;
use crate::shared::components::ui::{Input, Select};
use crate::shared::date_utils::format_datetime;

/// ViewModel for the asset details form
#[derive(Clone, Copy)]
struct AssetDetailsViewModel {
    form: RwSignal<AssetDto>,
    allocations: RwSignal<Vec<AssetAllocation>>,
    error: RwSignal<Option<String>>,
    saving: RwSignal<bool>,
}

impl AssetDetailsViewModel {
    fn new() -> Self {
        Self {
            form: RwSignal::new(AssetDto::default()),
            allocations: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    /// Load form data and allocation history together when editing.
    fn load_if_needed(&self, id: Option<String>) {
        let Some(existing_id) = id else {
            return;
        };
        let form = self.form;
        let allocations = self.allocations;
        let error = self.error;
        spawn_local(async move {
            let (asset_result, allocations_result) = futures::join!(
                api::get(existing_id.clone()),
                api::allocations(existing_id)
            );

            match asset_result {
                Ok(asset) => {
                    form.set(AssetDto {
                        id: Some(asset.id),
                        name: asset.name,
                        asset_code: asset.asset_code,
                        category: asset.category,
                        condition: asset.condition,
                        purchase_price: asset.purchase_price,
                        currency: asset.currency.unwrap_or_else(|| "INR".to_string()),
                        purchase_date: asset.purchase_date,
                    });
                }
                Err(e) => {
                    error.set(Some(format!("Failed to load asset: {}", e)));
                    return;
                }
            }

            // History is auxiliary; a failure only logs
            match allocations_result {
                Ok(history) => allocations.set(history),
                Err(e) => log::warn!("background fetch 'asset allocations' failed: {}", e),
            }
        });
    }

    fn save_command(&self, on_saved: Callback<()>) {
        let current = self.form.get();

        if let Err(msg) = current.validate() {
            self.error.set(Some(msg.to_string()));
            return;
        }

        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        spawn_local(async move {
            match api::save(current).await {
                Ok(_) => {
                    saving.set(false);
                    on_saved.run(());
                }
                Err(e) => {
                    saving.set(false);
                    error.set(Some(e));
                }
            }
        });
    }
}

#[component]
#[allow(non_snake_case)]
pub fn AssetDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = AssetDetailsViewModel::new();
    let is_edit = id.is_some();
    vm.load_if_needed(id);

    let form = vm.form;

    let category_options: Vec<(String, String)> = AssetCategory::ALL
        .iter()
        .map(|c| (c.as_query_value().to_string(), c.label().to_string()))
        .collect();

    let condition_options: Vec<(String, String)> = AssetCondition::ALL
        .iter()
        .map(|c| (c.as_query_value().to_string(), c.label().to_string()))
        .collect();

    view! {
        <div class="details">
            <div class="details__header">
                <h3>{if is_edit { "Edit asset" } else { "New asset" }}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details__body">
                <Input
                    label="Name".to_string()
                    value=Signal::derive(move || form.get().name)
                    on_input=Callback::new(move |v: String| form.update(|f| f.name = v))
                />
                <Input
                    label="Asset code".to_string()
                    value=Signal::derive(move || form.get().asset_code)
                    on_input=Callback::new(move |v: String| form.update(|f| f.asset_code = v))
                    placeholder="LAP-001".to_string()
                />
                <Select
                    label="Category".to_string()
                    value=Signal::derive(move || form.get().category.as_query_value().to_string())
                    options=category_options
                    on_change=Callback::new(move |v: String| {
                        form.update(|f| {
                            f.category = AssetCategory::from_query_value(&v)
                                .unwrap_or(AssetCategory::Other);
                        });
                    })
                />
                <Select
                    label="Condition".to_string()
                    value=Signal::derive(move || form.get().condition.as_query_value().to_string())
                    options=condition_options
                    on_change=Callback::new(move |v: String| {
                        form.update(|f| {
                            f.condition = AssetCondition::from_query_value(&v)
                                .unwrap_or(AssetCondition::New);
                        });
                    })
                />
                <Input
                    label="Purchase price".to_string()
                    value=Signal::derive(move || {
                        form.get()
                            .purchase_price
                            .map(|p| p.to_string())
                            .unwrap_or_default()
                    })
                    on_input=Callback::new(move |v: String| {
                        // Malformed numbers are a validation error, not a silent zero
                        if v.trim().is_empty() {
                            form.update(|f| f.purchase_price = None);
                            vm.error.set(None);
                        } else {
                            match v.parse::<f64>() {
                                Ok(amount) => {
                                    form.update(|f| f.purchase_price = Some(amount));
                                    vm.error.set(None);
                                }
                                Err(_) => vm.error.set(Some("Purchase price must be a number".to_string())),
                            }
                        }
                    })
                />
                <Input
                    label="Currency".to_string()
                    value=Signal::derive(move || form.get().currency)
                    on_input=Callback::new(move |v: String| form.update(|f| f.currency = v))
                />
                <Input
                    label="Purchase date".to_string()
                    input_type="date".to_string()
                    value=Signal::derive(move || form.get().purchase_date.unwrap_or_default())
                    on_input=Callback::new(move |v: String| {
                        form.update(|f| {
                            f.purchase_date = if v.is_empty() { None } else { Some(v) };
                        })
                    })
                />
            </div>

            {move || {
                let history = vm.allocations.get();
                if history.is_empty() {
                    return view! { <></> }.into_any();
                }
                view! {
                    <div class="details__section">
                        <h4>{"Allocation history"}</h4>
                        <table class="table__data">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">{"Employee"}</th>
                                    <th class="table__header-cell">{"Allocated"}</th>
                                    <th class="table__header-cell">{"Returned"}</th>
                                    <th class="table__header-cell">{"Out / in"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {history.into_iter().map(|alloc| {
                                    let returned = alloc
                                        .returned_at
                                        .map(|d| format_datetime(&d.to_rfc3339()))
                                        .unwrap_or_else(|| "-".to_string());
                                    let condition = format!(
                                        "{} / {}",
                                        alloc.condition_out.label(),
                                        alloc.condition_in.map(|c| c.label()).unwrap_or("-")
                                    );
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{alloc.user_name.unwrap_or_else(|| alloc.user_id.clone())}</td>
                                            <td class="table__cell">{format_datetime(&alloc.allocated_at.to_rfc3339())}</td>
                                            <td class="table__cell">{returned}</td>
                                            <td class="table__cell">{condition}</td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                }.into_any()
            }}

            <div class="details__footer">
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    {"Cancel"}
                </button>
                <button
                    class="button button--primary"
                    disabled=move || vm.saving.get()
                    on:click=move |_| vm.save_command(on_saved)
                >
                    {move || if vm.saving.get() { "Saving..." } else { "Save" }}
                </button>
            </div>
        </div>
    }
}
