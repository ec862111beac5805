use contracts::domain::leave::{LeaveType, LeaveTypeDto};
use leptos::prelude::*;

use crate::domain::leave::api;
use crate::shared::components::ui::{Badge, Checkbox, Input, Textarea};
use crate::shared::confirm::open_confirm;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::resource::{run_mutation, ListController};
use crate::shared::toast::ToastService;

fn open_type_modal(
    modal_stack: ModalStackService,
    toasts: ToastService,
    existing: Option<LeaveType>,
    on_done: Callback<()>,
) {
    modal_stack.push_with_frame(
        Some("max-width: 480px; width: 480px;".to_string()),
        move |handle| {
            let form = RwSignal::new(match &existing {
                Some(t) => LeaveTypeDto {
                    id: Some(t.id.clone()),
                    name: t.name.clone(),
                    description: t.description.clone(),
                    max_days_per_year: t.max_days_per_year,
                    is_paid: t.is_paid,
                },
                None => LeaveTypeDto {
                    max_days_per_year: 12.0,
                    is_paid: true,
                    ..LeaveTypeDto::default()
                },
            });
            let error = RwSignal::new(None::<String>);
            let is_edit = existing.is_some();

            let handle_save = {
                let handle = handle.clone();
                move |_| {
                    let dto = form.get();
                    if let Err(msg) = dto.validate() {
                        error.set(Some(msg.to_string()));
                        return;
                    }
                    let handle = handle.clone();
                    run_mutation(
                        toasts,
                        "Leave type saved",
                        api::save_type(dto),
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
                        <h3>{if is_edit { "Edit leave type" } else { "New leave type" }}</h3>
                    </div>

                    {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

                    <div class="details__body">
                        <Input
                            label="Name".to_string()
                            value=Signal::derive(move || form.get().name)
                            on_input=Callback::new(move |v: String| form.update(|f| f.name = v))
                        />
                        <Textarea
                            label="Description".to_string()
                            value=Signal::derive(move || form.get().description.unwrap_or_default())
                            on_input=Callback::new(move |v: String| {
                                form.update(|f| {
                                    f.description = if v.is_empty() { None } else { Some(v) };
                                })
                            })
                        />
                        <Input
                            label="Max days per year".to_string()
                            input_type="number".to_string()
                            value=Signal::derive(move || form.get().max_days_per_year.to_string())
                            on_input=Callback::new(move |v: String| {
                                match v.parse::<f32>() {
                                    Ok(days) => {
                                        form.update(|f| f.max_days_per_year = days);
                                        error.set(None);
                                    }
                                    Err(_) => error.set(Some("Max days must be a number".to_string())),
                                }
                            })
                        />
                        <Checkbox
                            label="Paid leave".to_string()
                            checked=Signal::derive(move || form.get().is_paid)
                            on_change=Callback::new(move |checked: bool| {
                                form.update(|f| f.is_paid = checked)
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
pub fn LeaveTypeList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let ctrl = ListController::<LeaveType>::new();

    let refetch = move || ctrl.load(api::list_types());

    Effect::new(move |_| {
        refetch();
    });

    let handle_deactivate = move |id: String, name: String| {
        open_confirm(
            modal_stack,
            "Deactivate leave type",
            &format!("Deactivate \"{}\"? Employees can no longer request it.", name),
            move || {
                let id = id.clone();
                run_mutation(
                    toasts,
                    "Leave type deactivated",
                    api::deactivate_type(id),
                    move |_| refetch(),
                );
            },
        );
    };

    view! {
        <div class="content">
            <div class="header">
                <h2>{"Leave Types"}</h2>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| {
                        open_type_modal(modal_stack, toasts, None, Callback::new(move |_| refetch()));
                    }>
                        {icon("plus")}
                        {"New leave type"}
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
                            <th class="table__header-cell">{"Name"}</th>
                            <th class="table__header-cell">{"Description"}</th>
                            <th class="table__header-cell">{"Max days / year"}</th>
                            <th class="table__header-cell">{"Paid"}</th>
                            <th class="table__header-cell">{"Active"}</th>
                            <th class="table__header-cell">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || ctrl.items.get().into_iter().map(|leave_type| {
                            let type_for_edit = leave_type.clone();
                            let id_for_deactivate = leave_type.id.clone();
                            let name_for_deactivate = leave_type.name.clone();
                            let is_active = leave_type.is_active;
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{leave_type.name.clone()}</td>
                                    <td class="table__cell">{leave_type.description.clone().unwrap_or_else(|| "-".to_string())}</td>
                                    <td class="table__cell">{format!("{}", leave_type.max_days_per_year)}</td>
                                    <td class="table__cell">{if leave_type.is_paid { "Yes" } else { "No" }}</td>
                                    <td class="table__cell">
                                        {if is_active {
                                            view! { <Badge variant="success".to_string()>{"Active"}</Badge> }.into_any()
                                        } else {
                                            view! { <Badge variant="neutral".to_string()>{"Inactive"}</Badge> }.into_any()
                                        }}
                                    </td>
                                    <td class="table__cell table__cell--actions">
                                        <button class="button button--small" on:click=move |_| {
                                            open_type_modal(modal_stack, toasts, Some(type_for_edit.clone()), Callback::new(move |_| refetch()));
                                        }>
                                            {"Edit"}
                                        </button>
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
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
