use contracts::domain::employee::EmployeeDto;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::domain::department;
use crate::domain::employee::api;
use crate::shared::components::ui::{Input, Select};
use crate::shared::resource::spawn_background;
use crate::shared::toast::ToastService;

#[component]
#[allow(non_snake_case)]
pub fn EmployeeDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let is_edit = id.is_some();
    let form = RwSignal::new(EmployeeDto::default());
    let error = RwSignal::new(None::<String>);
    let departments = RwSignal::new(Vec::<(String, String)>::new());
    let employee_id = RwSignal::new(id.clone());

    spawn_background("department lookup", departments, async move {
        let list = department::api::list().await?;
        Ok(list.into_iter().map(|d| (d.id, d.name)).collect::<Vec<_>>())
    });

    if let Some(existing_id) = id {
        spawn_local(async move {
            match api::get(existing_id).await {
                Ok(employee) => form.set(EmployeeDto {
                    id: Some(employee.id),
                    full_name: employee.full_name,
                    email: employee.email,
                    phone: employee.phone,
                    designation: employee.designation,
                    department_id: employee.department_id,
                    joined_on: employee.joined_on,
                    password: None,
                }),
                Err(e) => error.set(Some(format!("Failed to load employee: {}", e))),
            }
        });
    }

    let handle_avatar = move |ev: leptos::ev::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
        let Some(file) = input.and_then(|i| i.files()).and_then(|f| f.get(0)) else {
            return;
        };
        // MIME whitelist and size cap, checked before any network call
        if let Err(msg) = api::validate_avatar(&file.type_(), file.size() as u64) {
            toasts.error(msg);
            return;
        }
        let Some(existing_id) = employee_id.get_untracked() else {
            toasts.error("Save the employee before uploading an avatar");
            return;
        };
        spawn_local(async move {
            match api::upload_avatar(existing_id, file).await {
                Ok(_) => toasts.success("Avatar updated"),
                Err(e) => toasts.error(e),
            }
        });
    };

    let handle_save = move |_| {
        let dto = form.get();
        // Required fields and the 8-character password minimum reject before
        // the network call
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
                <h3>{if is_edit { "Edit employee" } else { "New employee" }}</h3>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details__body">
                <Input
                    label="Full name".to_string()
                    value=Signal::derive(move || form.get().full_name)
                    on_input=Callback::new(move |v: String| form.update(|f| f.full_name = v))
                />
                <Input
                    label="Email".to_string()
                    input_type="email".to_string()
                    value=Signal::derive(move || form.get().email)
                    on_input=Callback::new(move |v: String| form.update(|f| f.email = v))
                />
                <Input
                    label="Phone".to_string()
                    value=Signal::derive(move || form.get().phone.unwrap_or_default())
                    on_input=Callback::new(move |v: String| {
                        form.update(|f| f.phone = if v.is_empty() { None } else { Some(v) })
                    })
                />
                <Input
                    label="Designation".to_string()
                    value=Signal::derive(move || form.get().designation.unwrap_or_default())
                    on_input=Callback::new(move |v: String| {
                        form.update(|f| f.designation = if v.is_empty() { None } else { Some(v) })
                    })
                />
                <Select
                    label="Department".to_string()
                    value=Signal::derive(move || form.get().department_id.unwrap_or_default())
                    options=Signal::derive(move || {
                        let mut options = vec![(String::new(), "None".to_string())];
                        options.extend(departments.get());
                        options
                    })
                    on_change=Callback::new(move |v: String| {
                        form.update(|f| {
                            f.department_id = if v.is_empty() { None } else { Some(v) };
                        })
                    })
                />
                <Input
                    label="Joined on".to_string()
                    input_type="date".to_string()
                    value=Signal::derive(move || {
                        form.get()
                            .joined_on
                            .map(|d| d.format("%Y-%m-%d").to_string())
                            .unwrap_or_default()
                    })
                    on_input=Callback::new(move |v: String| {
                        form.update(|f| {
                            f.joined_on = chrono::NaiveDate::parse_from_str(&v, "%Y-%m-%d").ok();
                        })
                    })
                />
                {(!is_edit).then(|| view! {
                    <Input
                        label="Password (min 8 characters)".to_string()
                        input_type="password".to_string()
                        value=Signal::derive(move || form.get().password.unwrap_or_default())
                        on_input=Callback::new(move |v: String| {
                            form.update(|f| f.password = if v.is_empty() { None } else { Some(v) })
                        })
                    />
                })}
                {is_edit.then(|| view! {
                    <div class="form__group">
                        <label class="form__label">{"Avatar (PNG/JPEG/GIF/WebP, max 2 MB)"}</label>
                        <input type="file" accept="image/*" on:change=handle_avatar />
                    </div>
                })}
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
