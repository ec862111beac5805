use contracts::domain::review::{PerformanceReviewStatus, ReviewCycle};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::review::api;
use crate::shared::components::ui::Badge;
use crate::shared::resource::run_mutation;
use crate::shared::toast::ToastService;

fn rating(value: Option<f32>) -> String {
    value.map(|v| format!("{:.1}", v)).unwrap_or_else(|| "-".to_string())
}

/// Cycle drill-down: questions plus the per-employee review pipeline.
#[component]
#[allow(non_snake_case)]
pub fn ReviewCycleDetails(id: String, on_close: Callback<()>) -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let cycle = RwSignal::new(None::<ReviewCycle>);
    let error = RwSignal::new(None::<String>);
    let cycle_id = StoredValue::new(id);

    let load = move || {
        let id = cycle_id.get_value();
        spawn_local(async move {
            match api::get_cycle(id).await {
                Ok(c) => cycle.set(Some(c)),
                Err(e) => error.set(Some(format!("Failed to load review cycle: {}", e))),
            }
        });
    };
    load();

    let handle_advance = move |review_id: String| {
        run_mutation(
            toasts,
            "Review advanced",
            api::advance_review(review_id),
            move |_| load(),
        );
    };

    view! {
        <div class="details">
            <div class="details__header">
                <h3>{move || cycle.get().map(|c| c.name).unwrap_or_else(|| "Review cycle".to_string())}</h3>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            {move || cycle.get().map(|c| {
                view! {
                    <div class="details__body">
                        {(!c.questions.is_empty()).then(|| view! {
                            <div class="details__section">
                                <h4>{"Questions"}</h4>
                                <ol>
                                    {c.questions.iter().map(|q| view! { <li>{q.text.clone()}</li> }).collect_view()}
                                </ol>
                            </div>
                        })}

                        <div class="details__section">
                            <h4>{"Reviews"}</h4>
                            {if c.reviews.is_empty() {
                                view! { <p class="table__empty">{"No reviews yet. Activating the cycle creates one per employee."}</p> }.into_any()
                            } else {
                                view! {
                                    <table class="table__data table--striped">
                                        <thead class="table__head">
                                            <tr>
                                                <th class="table__header-cell">{"Employee"}</th>
                                                <th class="table__header-cell">{"Stage"}</th>
                                                <th class="table__header-cell">{"Self"}</th>
                                                <th class="table__header-cell">{"Manager"}</th>
                                                <th class="table__header-cell">{"Final"}</th>
                                                <th class="table__header-cell">{"Actions"}</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {c.reviews.iter().cloned().map(|review| {
                                                let id_for_advance = review.id.clone();
                                                let next = review.status.next();
                                                view! {
                                                    <tr class="table__row">
                                                        <td class="table__cell">{review.user_name.clone().unwrap_or_else(|| review.user_id.clone())}</td>
                                                        <td class="table__cell">
                                                            <Badge variant={if review.status == PerformanceReviewStatus::Completed { "success" } else { "primary" }.to_string()}>
                                                                {review.status.label()}
                                                            </Badge>
                                                        </td>
                                                        <td class="table__cell">{rating(review.self_rating)}</td>
                                                        <td class="table__cell">{rating(review.manager_rating)}</td>
                                                        <td class="table__cell">{rating(review.final_rating)}</td>
                                                        <td class="table__cell table__cell--actions">
                                                            // Strictly sequential: only the next stage is offered
                                                            {next.map(|n| {
                                                                let id = id_for_advance.clone();
                                                                view! {
                                                                    <button class="button button--small" on:click=move |_| handle_advance(id.clone())>
                                                                        {format!("→ {}", n.label())}
                                                                    </button>
                                                                }
                                                            })}
                                                        </td>
                                                    </tr>
                                                }
                                            }).collect_view()}
                                        </tbody>
                                    </table>
                                }.into_any()
                            }}
                        </div>
                    </div>
                }
            })}

            <div class="details__footer">
                <button class="button button--secondary" on:click=move |_| on_close.run(())>
                    {"Close"}
                </button>
            </div>
        </div>
    }
}
