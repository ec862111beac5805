use contracts::domain::review::{ReviewCycle, ReviewCycleDto, ReviewCycleStatus};
use leptos::prelude::*;

use crate::domain::review::api;
use crate::domain::review::ui::details::ReviewCycleDetails;
use crate::shared::components::ui::{Badge, Input};
use crate::shared::date_utils::format_naive_date;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::resource::{run_mutation, ListController, ALL};
use crate::shared::toast::ToastService;

fn status_variant(status: ReviewCycleStatus) -> String {
    match status {
        ReviewCycleStatus::Draft => "neutral",
        ReviewCycleStatus::Active => "primary",
        ReviewCycleStatus::Completed => "success",
        ReviewCycleStatus::Cancelled => "error",
    }
    .to_string()
}

fn open_cycle_modal(
    modal_stack: ModalStackService,
    toasts: ToastService,
    existing: Option<ReviewCycle>,
    on_done: Callback<()>,
) {
    modal_stack.push_with_frame(
        Some("max-width: 520px; width: 520px;".to_string()),
        move |handle| {
            let form = RwSignal::new(match &existing {
                Some(c) => ReviewCycleDto {
                    id: Some(c.id.clone()),
                    name: c.name.clone(),
                    start_date: c.start_date.format("%Y-%m-%d").to_string(),
                    end_date: c.end_date.format("%Y-%m-%d").to_string(),
                    questions: c.questions.iter().map(|q| q.text.clone()).collect(),
                },
                None => ReviewCycleDto::default(),
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
                    run_mutation(toasts, "Review cycle saved", api::save_cycle(dto), move |_| {
                        handle.close();
                        on_done.run(());
                    });
                }
            };

            let handle_cancel = handle.clone();
            view! {
                <div class="details">
                    <div class="details__header">
                        <h3>{if is_edit { "Edit review cycle" } else { "New review cycle" }}</h3>
                    </div>

                    {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

                    <div class="details__body">
                        <Input
                            label="Name".to_string()
                            value=Signal::derive(move || form.get().name)
                            on_input=Callback::new(move |v: String| form.update(|f| f.name = v))
                            placeholder="H1 2026".to_string()
                        />
                        <Input
                            label="Start date".to_string()
                            input_type="date".to_string()
                            value=Signal::derive(move || form.get().start_date)
                            on_input=Callback::new(move |v: String| form.update(|f| f.start_date = v))
                        />
                        <Input
                            label="End date".to_string()
                            input_type="date".to_string()
                            value=Signal::derive(move || form.get().end_date)
                            on_input=Callback::new(move |v: String| form.update(|f| f.end_date = v))
                        />
                        <div class="form__group">
                            <label class="form__label">{"Questions (one per line)"}</label>
                            <textarea
                                class="form__textarea"
                                rows=4
                                prop:value=move || form.get().questions.join("\n")
                                on:input=move |ev| {
                                    let text = event_target_value(&ev);
                                    form.update(|f| {
                                        f.questions = text
                                            .lines()
                                            .map(|l| l.trim().to_string())
                                            .filter(|l| !l.is_empty())
                                            .collect();
                                    });
                                }
                            ></textarea>
                        </div>
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
pub fn ReviewCycleList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let ctrl = ListController::<ReviewCycle>::new();
    let (status_filter, set_status_filter) = signal(ALL.to_string());

    let do_load = move |status: String| {
        ctrl.load(api::list_cycles(status));
    };

    Effect::new(move |_| {
        do_load(status_filter.get());
    });

    let refetch = move || do_load(status_filter.get_untracked());

    let open_details = move |id: String| {
        modal_stack.push_with_frame(
            Some("max-width: min(720px, 95vw); width: min(720px, 95vw);".to_string()),
            move |handle| {
                view! {
                    <ReviewCycleDetails
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

    let handle_transition = move |id: String, status: ReviewCycleStatus| {
        // Activation is its own endpoint because it fans out reviews
        if status == ReviewCycleStatus::Active {
            run_mutation(
                toasts,
                "Review cycle activated",
                api::activate_cycle(id),
                move |_| refetch(),
            );
        } else {
            run_mutation(
                toasts,
                "Review cycle updated",
                api::transition_cycle(id, status),
                move |_| refetch(),
            );
        }
    };

    view! {
        <div class="content">
            <div class="header">
                <h2>{"Review Cycles"}</h2>
                <div class="header__actions">
                    <select
                        class="filter-select"
                        on:change=move |ev| set_status_filter.set(event_target_value(&ev))
                    >
                        <option value=ALL selected=move || status_filter.get() == ALL>{"All statuses"}</option>
                        {ReviewCycleStatus::ALL.iter().map(|s| {
                            let value = s.as_query_value().to_string();
                            let value_clone = value.clone();
                            view! {
                                <option value=value selected=move || status_filter.get() == value_clone>
                                    {s.label()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                    <button class="button button--primary" on:click=move |_| {
                        open_cycle_modal(modal_stack, toasts, None, Callback::new(move |_| refetch()));
                    }>
                        {icon("plus")}
                        {"New cycle"}
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
                            <th class="table__header-cell">{"Start"}</th>
                            <th class="table__header-cell">{"End"}</th>
                            <th class="table__header-cell">{"Questions"}</th>
                            <th class="table__header-cell">{"Reviews"}</th>
                            <th class="table__header-cell">{"Status"}</th>
                            <th class="table__header-cell">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let cycles = ctrl.items.get();
                            if cycles.is_empty() {
                                return view! {
                                    <tr><td colspan="7" class="table__empty">{"No review cycles yet"}</td></tr>
                                }.into_any();
                            }
                            cycles.into_iter().map(|cycle| {
                                let id_for_open = cycle.id.clone();
                                let id_for_action = cycle.id.clone();
                                let cycle_for_edit = cycle.clone();
                                let status = cycle.status;
                                view! {
                                    <tr class="table__row" on:click=move |_| open_details(id_for_open.clone())>
                                        <td class="table__cell">{cycle.name.clone()}</td>
                                        <td class="table__cell">{format_naive_date(cycle.start_date)}</td>
                                        <td class="table__cell">{format_naive_date(cycle.end_date)}</td>
                                        <td class="table__cell">{cycle.questions.len()}</td>
                                        <td class="table__cell">{cycle.reviews.len()}</td>
                                        <td class="table__cell">
                                            <Badge variant=status_variant(status)>{status.label()}</Badge>
                                        </td>
                                        <td class="table__cell table__cell--actions" on:click=|e| e.stop_propagation()>
                                            {(status == ReviewCycleStatus::Draft).then(|| {
                                                let cycle = cycle_for_edit.clone();
                                                view! {
                                                    <button class="button button--small" on:click=move |_| {
                                                        open_cycle_modal(modal_stack, toasts, Some(cycle.clone()), Callback::new(move |_| refetch()));
                                                    }>
                                                        {"Edit"}
                                                    </button>
                                                }
                                            })}
                                            {status.allowed_transitions().iter().map(|&next| {
                                                let id = id_for_action.clone();
                                                let label = match next {
                                                    ReviewCycleStatus::Active => "Activate",
                                                    ReviewCycleStatus::Completed => "Complete",
                                                    ReviewCycleStatus::Cancelled => "Cancel",
                                                    ReviewCycleStatus::Draft => "Draft",
                                                };
                                                view! {
                                                    <button class="button button--small" on:click=move |_| {
                                                        handle_transition(id.clone(), next);
                                                    }>
                                                        {label}
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
        </div>
    }
}
