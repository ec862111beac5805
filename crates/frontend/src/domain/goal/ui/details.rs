use contracts::domain::goal::{Goal, GoalCategory, GoalDto, GoalType, KeyResult, KeyResultDto};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::goal::api;
use crate::shared::components::ui::{Input, Select, Textarea};
use crate::shared::toast::ToastService;
use crate::shared::tree;

#[component]
#[allow(non_snake_case)]
pub fn GoalDetails(
    id: Option<String>,
    /// Snapshot of the goal tree for the parent selector.
    all_goals: Vec<Goal>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let is_edit = id.is_some();
    let form = RwSignal::new(GoalDto::default());
    let key_results = RwSignal::new(Vec::<KeyResult>::new());
    let error = RwSignal::new(None::<String>);
    let goal_id = RwSignal::new(id.clone());

    // Same ancestor-exclusion rule as departments: a goal can never be moved
    // under itself or one of its descendants
    let parent_options: Vec<(String, String)> = {
        let mut options = vec![(String::new(), "No parent goal".to_string())];
        options.extend(
            tree::parent_candidates(&all_goals, id.as_deref())
                .into_iter()
                .map(|g| (g.id, g.title)),
        );
        options
    };

    if let Some(existing_id) = id {
        spawn_local(async move {
            match api::get(existing_id).await {
                Ok(goal) => {
                    key_results.set(goal.key_results.clone());
                    form.set(GoalDto {
                        id: Some(goal.id),
                        title: goal.title,
                        description: goal.description,
                        goal_type: goal.goal_type,
                        category: goal.category,
                        target_value: goal.target_value,
                        parent_id: goal.parent_id,
                    });
                }
                Err(e) => error.set(Some(format!("Failed to load goal: {}", e))),
            }
        });
    }

    let handle_save = move |_| {
        let dto = form.get();
        if let Err(msg) = dto.validate() {
            error.set(Some(msg.to_string()));
            return;
        }
        spawn_local(async move {
            match api::save(dto).await {
                Ok(_) => on_saved.run(()),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let type_options: Vec<(String, String)> = GoalType::ALL
        .iter()
        .map(|t| (t.as_query_value().to_string(), t.label().to_string()))
        .collect();

    let category_options: Vec<(String, String)> = vec![
        ("OKR".to_string(), "OKR".to_string()),
        ("KPI".to_string(), "KPI".to_string()),
    ];

    // Inline current-value update for one key result
    let handle_kr_update = move |kr: KeyResult, new_current: String| {
        let Ok(current_value) = new_current.parse::<f64>() else {
            toasts.error("Current value must be a number");
            return;
        };
        let Some(gid) = goal_id.get_untracked() else {
            return;
        };
        let dto = KeyResultDto {
            id: Some(kr.id.clone()),
            title: kr.title.clone(),
            target_value: kr.target_value,
            current_value,
            unit: kr.unit.clone(),
        };
        spawn_local(async move {
            match api::save_key_result(gid, dto).await {
                Ok(goal) => {
                    key_results.set(goal.key_results);
                    toasts.success("Key result updated");
                }
                Err(e) => toasts.error(e),
            }
        });
    };

    view! {
        <div class="details">
            <div class="details__header">
                <h3>{if is_edit { "Edit goal" } else { "New goal" }}</h3>
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
                <Select
                    label="Type".to_string()
                    value=Signal::derive(move || form.get().goal_type.as_query_value().to_string())
                    options=type_options
                    on_change=Callback::new(move |v: String| {
                        let parsed = GoalType::ALL
                            .into_iter()
                            .find(|t| t.as_query_value() == v)
                            .unwrap_or(GoalType::Individual);
                        form.update(|f| f.goal_type = parsed);
                    })
                />
                <Select
                    label="Category".to_string()
                    value=Signal::derive(move || form.get().category.label().to_string())
                    options=category_options
                    on_change=Callback::new(move |v: String| {
                        form.update(|f| {
                            f.category = if v == "KPI" { GoalCategory::Kpi } else { GoalCategory::Okr };
                        });
                    })
                />
                <Input
                    label="Target value".to_string()
                    input_type="number".to_string()
                    value=Signal::derive(move || {
                        form.get().target_value.map(|t| t.to_string()).unwrap_or_default()
                    })
                    on_input=Callback::new(move |v: String| {
                        if v.trim().is_empty() {
                            form.update(|f| f.target_value = None);
                        } else if let Ok(target) = v.parse::<f64>() {
                            form.update(|f| f.target_value = Some(target));
                        }
                    })
                />
                <Select
                    label="Parent goal".to_string()
                    value=Signal::derive(move || form.get().parent_id.unwrap_or_default())
                    options=parent_options
                    on_change=Callback::new(move |v: String| {
                        form.update(|f| {
                            f.parent_id = if v.is_empty() { None } else { Some(v) };
                        })
                    })
                />
            </div>

            {move || {
                let krs = key_results.get();
                if krs.is_empty() {
                    return view! { <></> }.into_any();
                }
                view! {
                    <div class="details__section">
                        <h4>{"Key results"}</h4>
                        <table class="table__data">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">{"Title"}</th>
                                    <th class="table__header-cell">{"Current"}</th>
                                    <th class="table__header-cell">{"Target"}</th>
                                    <th class="table__header-cell">{"Progress"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {krs.into_iter().map(|kr| {
                                    let kr_for_update = kr.clone();
                                    // Display is clamped to [0, 100]
                                    let percent = kr.progress() * 100.0;
                                    let unit = kr.unit.clone().unwrap_or_default();
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{kr.title.clone()}</td>
                                            <td class="table__cell">
                                                <input
                                                    type="number"
                                                    class="form__input form__input--inline"
                                                    prop:value=kr.current_value.to_string()
                                                    on:change=move |ev| {
                                                        handle_kr_update(kr_for_update.clone(), event_target_value(&ev));
                                                    }
                                                />
                                            </td>
                                            <td class="table__cell">{format!("{} {}", kr.target_value, unit)}</td>
                                            <td class="table__cell">{format!("{:.0}%", percent)}</td>
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
                <button class="button button--primary" on:click=handle_save>
                    {"Save"}
                </button>
            </div>
        </div>
    }
}
