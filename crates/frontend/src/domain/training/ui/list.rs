use contracts::domain::training::{TrainingProgram, TrainingProgramDto, TrainingStatus};
use leptos::prelude::*;

use crate::domain::training::api;
use crate::domain::training::ui::enrollments::open_enrollments_modal;
use crate::shared::components::ui::{Badge, Input, Textarea};
use crate::shared::date_utils::format_naive_date;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::resource::{run_mutation, ListController, ALL};
use crate::shared::toast::ToastService;

fn status_variant(status: TrainingStatus) -> String {
    match status {
        TrainingStatus::Planned => "neutral",
        TrainingStatus::InProgress => "primary",
        TrainingStatus::Completed => "success",
        TrainingStatus::Cancelled => "error",
    }
    .to_string()
}

fn transition_label(status: TrainingStatus) -> &'static str {
    match status {
        TrainingStatus::InProgress => "Start",
        TrainingStatus::Completed => "Complete",
        TrainingStatus::Cancelled => "Cancel",
        TrainingStatus::Planned => "Plan",
    }
}

fn open_program_modal(
    modal_stack: ModalStackService,
    toasts: ToastService,
    existing: Option<TrainingProgram>,
    on_done: Callback<()>,
) {
    modal_stack.push_with_frame(
        Some("max-width: 520px; width: 520px;".to_string()),
        move |handle| {
            let form = RwSignal::new(match &existing {
                Some(p) => TrainingProgramDto {
                    id: Some(p.id.clone()),
                    title: p.title.clone(),
                    description: p.description.clone(),
                    trainer: p.trainer.clone(),
                    start_date: p.start_date,
                    end_date: p.end_date,
                    max_participants: p.max_participants,
                },
                None => TrainingProgramDto {
                    max_participants: 20,
                    ..TrainingProgramDto::default()
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
                    run_mutation(toasts, "Training program saved", api::save(dto), move |_| {
                        handle.close();
                        on_done.run(());
                    });
                }
            };

            let handle_cancel = handle.clone();
            view! {
                <div class="details">
                    <div class="details__header">
                        <h3>{if is_edit { "Edit training program" } else { "New training program" }}</h3>
                    </div>

                    {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

                    <div class="details__body">
                        <Input
                            label="Title".to_string()
                            value=Signal::derive(move || form.get().title)
                            on_input=Callback::new(move |v: String| form.update(|f| f.title = v))
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
                            label="Trainer".to_string()
                            value=Signal::derive(move || form.get().trainer.unwrap_or_default())
                            on_input=Callback::new(move |v: String| {
                                form.update(|f| f.trainer = if v.is_empty() { None } else { Some(v) })
                            })
                        />
                        <Input
                            label="Start date".to_string()
                            input_type="date".to_string()
                            value=Signal::derive(move || {
                                form.get()
                                    .start_date
                                    .map(|d| d.format("%Y-%m-%d").to_string())
                                    .unwrap_or_default()
                            })
                            on_input=Callback::new(move |v: String| {
                                form.update(|f| {
                                    f.start_date = chrono::NaiveDate::parse_from_str(&v, "%Y-%m-%d").ok();
                                })
                            })
                        />
                        <Input
                            label="End date".to_string()
                            input_type="date".to_string()
                            value=Signal::derive(move || {
                                form.get()
                                    .end_date
                                    .map(|d| d.format("%Y-%m-%d").to_string())
                                    .unwrap_or_default()
                            })
                            on_input=Callback::new(move |v: String| {
                                form.update(|f| {
                                    f.end_date = chrono::NaiveDate::parse_from_str(&v, "%Y-%m-%d").ok();
                                })
                            })
                        />
                        <Input
                            label="Max participants".to_string()
                            input_type="number".to_string()
                            value=Signal::derive(move || form.get().max_participants.to_string())
                            on_input=Callback::new(move |v: String| {
                                if let Ok(max) = v.parse::<u32>() {
                                    form.update(|f| f.max_participants = max);
                                }
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
pub fn TrainingProgramList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let ctrl = ListController::<TrainingProgram>::new();
    let (status_filter, set_status_filter) = signal(ALL.to_string());

    let do_load = move |status: String| {
        ctrl.load(api::list(status));
    };

    Effect::new(move |_| {
        do_load(status_filter.get());
    });

    let refetch = move || do_load(status_filter.get_untracked());

    let handle_transition = move |id: String, status: TrainingStatus| {
        run_mutation(
            toasts,
            "Training program updated",
            api::transition(id, status),
            move |_| refetch(),
        );
    };

    let handle_enroll = move |id: String| {
        run_mutation(toasts, "Enrolled", api::enroll(id), move |_| refetch());
    };

    view! {
        <div class="content">
            <div class="header">
                <h2>{"Training"}</h2>
                <div class="header__actions">
                    <select
                        class="filter-select"
                        on:change=move |ev| set_status_filter.set(event_target_value(&ev))
                    >
                        <option value=ALL selected=move || status_filter.get() == ALL>{"All statuses"}</option>
                        {TrainingStatus::ALL.iter().map(|s| {
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
                        open_program_modal(modal_stack, toasts, None, Callback::new(move |_| refetch()));
                    }>
                        {icon("plus")}
                        {"New program"}
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
                            <th class="table__header-cell">{"Title"}</th>
                            <th class="table__header-cell">{"Trainer"}</th>
                            <th class="table__header-cell">{"Dates"}</th>
                            <th class="table__header-cell">{"Seats"}</th>
                            <th class="table__header-cell">{"Status"}</th>
                            <th class="table__header-cell">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let programs = ctrl.items.get();
                            if programs.is_empty() {
                                return view! {
                                    <tr><td colspan="6" class="table__empty">{"No training programs"}</td></tr>
                                }.into_any();
                            }
                            programs.into_iter().map(|program| {
                                let id_for_action = program.id.clone();
                                let id_for_enroll = program.id.clone();
                                let id_for_enrollments = program.id.clone();
                                let program_for_edit = program.clone();
                                let status = program.status;
                                let is_full = program.is_full();
                                let dates = match (program.start_date, program.end_date) {
                                    (Some(s), Some(e)) => format!("{} to {}", format_naive_date(s), format_naive_date(e)),
                                    (Some(s), None) => format!("from {}", format_naive_date(s)),
                                    _ => "-".to_string(),
                                };
                                view! {
                                    <tr class="table__row" on:click=move |_| {
                                        open_enrollments_modal(modal_stack, toasts, id_for_enrollments.clone());
                                    }>
                                        <td class="table__cell">{program.title.clone()}</td>
                                        <td class="table__cell">{program.trainer.clone().unwrap_or_else(|| "-".to_string())}</td>
                                        <td class="table__cell">{dates}</td>
                                        <td class="table__cell">{format!("{} / {}", program.enrolled_count, program.max_participants)}</td>
                                        <td class="table__cell">
                                            <Badge variant=status_variant(status)>{status.label()}</Badge>
                                        </td>
                                        <td class="table__cell table__cell--actions" on:click=|e| e.stop_propagation()>
                                            {(status == TrainingStatus::Planned).then(|| {
                                                let program = program_for_edit.clone();
                                                view! {
                                                    <button class="button button--small" on:click=move |_| {
                                                        open_program_modal(modal_stack, toasts, Some(program.clone()), Callback::new(move |_| refetch()));
                                                    }>
                                                        {"Edit"}
                                                    </button>
                                                }
                                            })}
                                            {(status == TrainingStatus::Planned).then(|| {
                                                let id = id_for_enroll.clone();
                                                view! {
                                                    <button
                                                        class="button button--small"
                                                        disabled=is_full
                                                        title={if is_full { "Program is full" } else { "" }}
                                                        on:click=move |_| handle_enroll(id.clone())
                                                    >
                                                        {"Enroll"}
                                                    </button>
                                                }
                                            })}
                                            {status.allowed_transitions().iter().map(|&next| {
                                                let id = id_for_action.clone();
                                                view! {
                                                    <button class="button button--small" on:click=move |_| {
                                                        handle_transition(id.clone(), next);
                                                    }>
                                                        {transition_label(next)}
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
