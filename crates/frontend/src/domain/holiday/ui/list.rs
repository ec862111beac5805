use contracts::common::ExportFormat;
use contracts::domain::holiday::{Holiday, HolidayDto, HolidayType};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::holiday::api;
use crate::domain::holiday::ui::import::open_import_modal;
use crate::shared::components::ui::{Badge, Input, Select};
use crate::shared::confirm::open_confirm;
use crate::shared::date_utils::{format_naive_date, today_iso};
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::resource::{run_mutation, ListController, ALL};
use crate::shared::toast::ToastService;

fn type_variant(holiday_type: HolidayType) -> String {
    match holiday_type {
        HolidayType::Fixed => "primary",
        HolidayType::Optional => "success",
        HolidayType::Restricted => "warning",
    }
    .to_string()
}

fn open_holiday_modal(
    modal_stack: ModalStackService,
    toasts: ToastService,
    existing: Option<Holiday>,
    on_done: Callback<()>,
) {
    modal_stack.push_with_frame(
        Some("max-width: 480px; width: 480px;".to_string()),
        move |handle| {
            let form = RwSignal::new(match &existing {
                Some(h) => HolidayDto {
                    id: Some(h.id.clone()),
                    name: h.name.clone(),
                    date: h.date,
                    holiday_type: h.holiday_type,
                    description: h.description.clone(),
                },
                None => HolidayDto {
                    id: None,
                    name: String::new(),
                    date: chrono::NaiveDate::parse_from_str(&today_iso(), "%Y-%m-%d")
                        .unwrap_or_default(),
                    holiday_type: HolidayType::Fixed,
                    description: None,
                },
            });
            let error = RwSignal::new(None::<String>);
            let is_edit = existing.is_some();

            let type_options: Vec<(String, String)> = HolidayType::ALL
                .iter()
                .map(|t| (t.as_query_value().to_string(), t.label().to_string()))
                .collect();

            let handle_save = {
                let handle = handle.clone();
                move |_| {
                    let dto = form.get();
                    if let Err(msg) = dto.validate() {
                        error.set(Some(msg.to_string()));
                        return;
                    }
                    let handle = handle.clone();
                    run_mutation(toasts, "Holiday saved", api::save(dto), move |_| {
                        handle.close();
                        on_done.run(());
                    });
                }
            };

            let handle_cancel = handle.clone();
            view! {
                <div class="details">
                    <div class="details__header">
                        <h3>{if is_edit { "Edit holiday" } else { "New holiday" }}</h3>
                    </div>

                    {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

                    <div class="details__body">
                        <Input
                            label="Name".to_string()
                            value=Signal::derive(move || form.get().name)
                            on_input=Callback::new(move |v: String| form.update(|f| f.name = v))
                        />
                        <Input
                            label="Date".to_string()
                            input_type="date".to_string()
                            value=Signal::derive(move || form.get().date.format("%Y-%m-%d").to_string())
                            on_input=Callback::new(move |v: String| {
                                if let Ok(date) = chrono::NaiveDate::parse_from_str(&v, "%Y-%m-%d") {
                                    form.update(|f| f.date = date);
                                }
                            })
                        />
                        <Select
                            label="Type".to_string()
                            value=Signal::derive(move || form.get().holiday_type.as_query_value().to_string())
                            options=type_options
                            on_change=Callback::new(move |v: String| {
                                let parsed = HolidayType::ALL
                                    .into_iter()
                                    .find(|t| t.as_query_value() == v)
                                    .unwrap_or(HolidayType::Fixed);
                                form.update(|f| f.holiday_type = parsed);
                            })
                        />
                        <Input
                            label="Description".to_string()
                            value=Signal::derive(move || form.get().description.unwrap_or_default())
                            on_input=Callback::new(move |v: String| {
                                form.update(|f| {
                                    f.description = if v.is_empty() { None } else { Some(v) };
                                })
                            })
                        />
                    </div>
                    <div class="details__footer">
                        <button class="button button--secondary" on:click=move |_| handle_cancel.close()>
                            {"Cancel"}
                        </button>
                        <button class="button button--primary" on:click=handle_save>
                            {"Save"}
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
pub fn HolidayList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let ctrl = ListController::<Holiday>::new();
    let current_year = today_iso()[..4].to_string();
    let (year_filter, set_year_filter) = signal(current_year.clone());
    let (type_filter, set_type_filter) = signal(ALL.to_string());

    let do_load = move |year: String, holiday_type: String| {
        ctrl.load(api::list(year, holiday_type));
    };

    Effect::new(move |_| {
        do_load(year_filter.get(), type_filter.get());
    });

    let refetch = move || do_load(year_filter.get_untracked(), type_filter.get_untracked());

    let handle_delete = move |id: String, name: String| {
        open_confirm(
            modal_stack,
            "Delete holiday",
            &format!("Delete holiday \"{}\"?", name),
            move || {
                let id = id.clone();
                run_mutation(toasts, "Holiday deleted", api::remove(id), move |_| {
                    refetch()
                });
            },
        );
    };

    // Selecting a past optional holiday is disabled client-side as a
    // convenience; the quota itself is enforced by the backend
    let today = today_iso();
    let handle_toggle_select = move |holiday: Holiday| {
        let id = holiday.id.clone();
        if holiday.selected {
            run_mutation(
                toasts,
                "Optional holiday unselected",
                api::unselect_optional(id),
                move |_| refetch(),
            );
        } else {
            run_mutation(
                toasts,
                "Optional holiday selected",
                api::select_optional(id),
                move |_| refetch(),
            );
        }
    };

    let handle_export = move |_| {
        let year = year_filter.get_untracked();
        spawn_local(async move {
            if let Err(e) = api::export(year, ExportFormat::Csv).await {
                toasts.error(e);
            }
        });
    };

    let year_options = move || {
        let this_year: i32 = current_year.parse().unwrap_or(2026);
        (this_year - 2..=this_year + 1)
            .map(|y| (y.to_string(), y.to_string()))
            .collect::<Vec<_>>()
    };

    view! {
        <div class="content">
            <div class="header">
                <h2>{"Holidays"}</h2>
                <div class="header__actions">
                    <select
                        class="filter-select"
                        on:change=move |ev| set_year_filter.set(event_target_value(&ev))
                    >
                        {year_options().into_iter().map(|(value, label)| {
                            let value_clone = value.clone();
                            view! {
                                <option value=value selected=move || year_filter.get() == value_clone>
                                    {label}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                    <select
                        class="filter-select"
                        on:change=move |ev| set_type_filter.set(event_target_value(&ev))
                    >
                        <option value=ALL selected=move || type_filter.get() == ALL>{"All types"}</option>
                        {HolidayType::ALL.iter().map(|t| {
                            let value = t.as_query_value().to_string();
                            let value_clone = value.clone();
                            view! {
                                <option value=value selected=move || type_filter.get() == value_clone>
                                    {t.label()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                    <button class="button button--primary" on:click=move |_| {
                        open_holiday_modal(modal_stack, toasts, None, Callback::new(move |_| refetch()));
                    }>
                        {icon("plus")}
                        {"New holiday"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| {
                        open_import_modal(modal_stack, toasts, Callback::new(move |_| refetch()));
                    }>
                        {icon("upload")}
                        {"Import CSV"}
                    </button>
                    <button class="button button--secondary" on:click=handle_export>
                        {icon("download")}
                        {"Export"}
                    </button>
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
                            <th class="table__header-cell">{"Date"}</th>
                            <th class="table__header-cell">{"Name"}</th>
                            <th class="table__header-cell">{"Type"}</th>
                            <th class="table__header-cell">{"Description"}</th>
                            <th class="table__header-cell">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let holidays = ctrl.items.get();
                            if holidays.is_empty() {
                                return view! {
                                    <tr><td colspan="5" class="table__empty">{"No holidays for the selected filters"}</td></tr>
                                }.into_any();
                            }
                            let today = today.clone();
                            holidays.into_iter().map(|holiday| {
                                let holiday_for_edit = holiday.clone();
                                let holiday_for_select = holiday.clone();
                                let id_for_delete = holiday.id.clone();
                                let name_for_delete = holiday.name.clone();
                                let is_past = holiday.date.format("%Y-%m-%d").to_string() < today;
                                let is_optional = holiday.holiday_type == HolidayType::Optional;
                                let selected = holiday.selected;
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{format_naive_date(holiday.date)}</td>
                                        <td class="table__cell">{holiday.name.clone()}</td>
                                        <td class="table__cell">
                                            <Badge variant=type_variant(holiday.holiday_type)>{holiday.holiday_type.label()}</Badge>
                                        </td>
                                        <td class="table__cell">{holiday.description.clone().unwrap_or_else(|| "-".to_string())}</td>
                                        <td class="table__cell table__cell--actions">
                                            {is_optional.then(|| {
                                                let h = holiday_for_select.clone();
                                                view! {
                                                    <button
                                                        class="button button--small"
                                                        disabled=is_past && !selected
                                                        on:click=move |_| handle_toggle_select(h.clone())
                                                    >
                                                        {if selected { "Unselect" } else { "Select" }}
                                                    </button>
                                                }
                                            })}
                                            <button class="button button--small" on:click=move |_| {
                                                open_holiday_modal(modal_stack, toasts, Some(holiday_for_edit.clone()), Callback::new(move |_| refetch()));
                                            }>
                                                {"Edit"}
                                            </button>
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
