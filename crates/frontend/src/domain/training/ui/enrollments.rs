use contracts::domain::training::{EnrollmentStatus, TrainingEnrollment};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::training::api;
use crate::shared::components::ui::Badge;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::resource::run_mutation;
use crate::shared::toast::ToastService;

fn status_variant(status: EnrollmentStatus) -> String {
    match status {
        EnrollmentStatus::Enrolled => "neutral",
        EnrollmentStatus::InProgress => "primary",
        EnrollmentStatus::Completed => "success",
        EnrollmentStatus::Dropped => "warning",
        EnrollmentStatus::Failed => "error",
    }
    .to_string()
}

pub fn open_enrollments_modal(
    modal_stack: ModalStackService,
    toasts: ToastService,
    program_id: String,
) {
    modal_stack.push_with_frame(
        Some("max-width: min(640px, 95vw); width: min(640px, 95vw);".to_string()),
        move |handle| {
            let enrollments = RwSignal::new(Vec::<TrainingEnrollment>::new());
            let error = RwSignal::new(None::<String>);
            let program_id = StoredValue::new(program_id.clone());

            let load = move || {
                let id = program_id.get_value();
                spawn_local(async move {
                    match api::enrollments(id).await {
                        Ok(list) => enrollments.set(list),
                        Err(e) => error.set(Some(format!("Failed to load enrollments: {}", e))),
                    }
                });
            };
            load();

            let handle_transition = move |id: String, status: EnrollmentStatus| {
                run_mutation(
                    toasts,
                    "Enrollment updated",
                    api::update_enrollment_status(id, status),
                    move |_| load(),
                );
            };

            let handle_close = handle.clone();
            view! {
                <div class="details">
                    <div class="details__header"><h3>{"Enrollments"}</h3></div>

                    {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

                    <div class="details__body">
                        {move || {
                            let list = enrollments.get();
                            if list.is_empty() {
                                return view! { <p class="table__empty">{"Nobody is enrolled yet"}</p> }.into_any();
                            }
                            view! {
                                <table class="table__data table--striped">
                                    <thead class="table__head">
                                        <tr>
                                            <th class="table__header-cell">{"Employee"}</th>
                                            <th class="table__header-cell">{"Status"}</th>
                                            <th class="table__header-cell">{"Score"}</th>
                                            <th class="table__header-cell">{"Actions"}</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list.into_iter().map(|enrollment| {
                                            let id_for_action = enrollment.id.clone();
                                            let status = enrollment.status;
                                            view! {
                                                <tr class="table__row">
                                                    <td class="table__cell">{enrollment.user_name.clone().unwrap_or_else(|| enrollment.user_id.clone())}</td>
                                                    <td class="table__cell">
                                                        <Badge variant=status_variant(status)>{status.label()}</Badge>
                                                    </td>
                                                    <td class="table__cell">
                                                        {enrollment.score.map(|s| format!("{:.0}", s)).unwrap_or_else(|| "-".to_string())}
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
                                                    </td>
                                                </tr>
                                            }
                                        }).collect_view()}
                                    </tbody>
                                </table>
                            }.into_any()
                        }}
                    </div>

                    <div class="details__footer">
                        <button class="button button--secondary" on:click=move |_| handle_close.close()>
                            {"Close"}
                        </button>
                    </div>
                </div>
            }
            .into_any()
        },
    );
}
