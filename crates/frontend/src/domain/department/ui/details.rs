use contracts::domain::department::{Department, DepartmentDto};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::department::api;
use crate::domain::employee;
use crate::shared::components::ui::{Input, Select, Textarea};
use crate::shared::resource::spawn_background;
use crate::shared::tree;

#[component]
#[allow(non_snake_case)]
pub fn DepartmentDetails(
    id: Option<String>,
    /// Snapshot of the full tree, used to compute valid parent candidates.
    all_departments: Vec<Department>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_edit = id.is_some();
    let form = RwSignal::new(DepartmentDto::default());
    let error = RwSignal::new(None::<String>);
    let heads = RwSignal::new(Vec::<(String, String)>::new());

    if let Some(existing) = all_departments.iter().find(|d| Some(&d.id) == id.as_ref()) {
        form.set(DepartmentDto {
            id: Some(existing.id.clone()),
            name: existing.name.clone(),
            description: existing.description.clone(),
            parent_id: existing.parent_id.clone(),
            head_id: existing.head_id.clone(),
        });
    }

    // The selector is built exclusively from valid candidates, so picking the
    // node itself or one of its descendants is impossible through the control.
    let parent_options: Vec<(String, String)> = {
        let mut options = vec![(String::new(), "No parent (top level)".to_string())];
        options.extend(
            tree::parent_candidates(&all_departments, id.as_deref())
                .into_iter()
                .map(|d| (d.id, d.name)),
        );
        options
    };

    // Head-of-department dropdown; non-critical lookup
    spawn_background("employee lookup", heads, async move {
        let list = employee::api::lookup_active().await?;
        Ok(list
            .into_iter()
            .map(|e| (e.id, e.full_name))
            .collect::<Vec<_>>())
    });

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

    view! {
        <div class="details">
            <div class="details__header">
                <h3>{if is_edit { "Edit department" } else { "New department" }}</h3>
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
                <Select
                    label="Parent department".to_string()
                    value=Signal::derive(move || form.get().parent_id.unwrap_or_default())
                    options=parent_options
                    on_change=Callback::new(move |v: String| {
                        form.update(|f| {
                            f.parent_id = if v.is_empty() { None } else { Some(v) };
                        })
                    })
                />
                <Select
                    label="Head of department".to_string()
                    value=Signal::derive(move || form.get().head_id.unwrap_or_default())
                    options=Signal::derive(move || {
                        let mut options = vec![(String::new(), "None".to_string())];
                        options.extend(heads.get());
                        options
                    })
                    on_change=Callback::new(move |v: String| {
                        form.update(|f| {
                            f.head_id = if v.is_empty() { None } else { Some(v) };
                        })
                    })
                />
            </div>

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
