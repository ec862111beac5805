use contracts::domain::skill::{EmployeeSkill, Skill, SkillDto};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::skill::api;
use crate::domain::skill::matrix::{build_matrix, export_rows};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Input, Textarea};
use crate::shared::confirm::open_confirm;
use crate::shared::export::export_to_csv;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::resource::{run_mutation, ListController, ALL};
use crate::shared::toast::ToastService;

fn open_skill_modal(
    modal_stack: ModalStackService,
    toasts: ToastService,
    existing: Option<Skill>,
    on_done: Callback<()>,
) {
    modal_stack.push_with_frame(
        Some("max-width: 440px; width: 440px;".to_string()),
        move |handle| {
            let form = RwSignal::new(match &existing {
                Some(s) => SkillDto {
                    id: Some(s.id.clone()),
                    name: s.name.clone(),
                    category: s.category.clone(),
                    description: s.description.clone(),
                },
                None => SkillDto::default(),
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
                    run_mutation(toasts, "Skill saved", api::save(dto), move |_| {
                        handle.close();
                        on_done.run(());
                    });
                }
            };

            let handle_cancel = handle.clone();
            view! {
                <div class="details">
                    <div class="details__header">
                        <h3>{if is_edit { "Edit skill" } else { "New skill" }}</h3>
                    </div>

                    {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

                    <div class="details__body">
                        <Input
                            label="Name".to_string()
                            value=Signal::derive(move || form.get().name)
                            on_input=Callback::new(move |v: String| form.update(|f| f.name = v))
                        />
                        <Input
                            label="Category".to_string()
                            value=Signal::derive(move || form.get().category)
                            on_input=Callback::new(move |v: String| form.update(|f| f.category = v))
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
pub fn SkillMatrix() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let ctrl = ListController::<Skill>::new();
    let employee_skills = RwSignal::new(Vec::<EmployeeSkill>::new());
    let (category_filter, set_category_filter) = signal(ALL.to_string());

    // Catalog is the critical read; the matrix entries load alongside and a
    // failure there leaves an empty matrix with the catalog still shown
    let do_load = move |category: String| {
        ctrl.load(api::list(category));
        spawn_local(async move {
            match api::list_employee_skills().await {
                Ok(list) => employee_skills.set(list),
                Err(e) => log::warn!("background fetch 'employee skills' failed: {}", e),
            }
        });
    };

    Effect::new(move |_| {
        do_load(category_filter.get());
    });

    let refetch = move || do_load(category_filter.get_untracked());

    let handle_delete = move |id: String, name: String| {
        open_confirm(
            modal_stack,
            "Delete skill",
            &format!("Delete skill \"{}\"? Employee entries for it disappear too.", name),
            move || {
                let id = id.clone();
                run_mutation(toasts, "Skill deleted", api::remove(id), move |_| refetch());
            },
        );
    };

    let categories = move || {
        let mut list: Vec<String> = ctrl
            .items
            .get()
            .iter()
            .map(|s| s.category.clone())
            .collect();
        list.sort();
        list.dedup();
        list
    };

    // The backend has no export for this projection; generate the CSV from
    // the already-fetched snapshot
    let handle_export = move |_| {
        let rows = export_rows(&ctrl.items.get_untracked(), &employee_skills.get_untracked());
        if let Err(e) = export_to_csv(&rows, Some("skill-matrix.csv".to_string())) {
            toasts.error(e);
        }
    };

    view! {
        <div class="content">
            <PageHeader title="Skills".to_string() subtitle="Catalog and competency matrix".to_string()>
                <div class="header__actions">
                    <select
                        class="filter-select"
                        on:change=move |ev| set_category_filter.set(event_target_value(&ev))
                    >
                        <option value=ALL selected=move || category_filter.get() == ALL>{"All categories"}</option>
                        {move || categories().into_iter().map(|category| {
                            let value = category.clone();
                            let value_clone = value.clone();
                            view! {
                                <option value=value selected=move || category_filter.get() == value_clone>
                                    {category}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                    <button class="button button--primary" on:click=move |_| {
                        open_skill_modal(modal_stack, toasts, None, Callback::new(move |_| refetch()));
                    }>
                        {icon("plus")}
                        {"New skill"}
                    </button>
                    <button class="button button--secondary" on:click=handle_export>
                        {icon("download")}
                        {"Export matrix"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| refetch()>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                </div>
            </PageHeader>

            {move || ctrl.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Skill"}</th>
                            <th class="table__header-cell">{"Category"}</th>
                            <th class="table__header-cell">{"Description"}</th>
                            <th class="table__header-cell">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || ctrl.items.get().into_iter().map(|skill| {
                            let skill_for_edit = skill.clone();
                            let id_for_delete = skill.id.clone();
                            let name_for_delete = skill.name.clone();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{skill.name.clone()}</td>
                                    <td class="table__cell">{skill.category.clone()}</td>
                                    <td class="table__cell">{skill.description.clone().unwrap_or_else(|| "-".to_string())}</td>
                                    <td class="table__cell table__cell--actions">
                                        <button class="button button--small" on:click=move |_| {
                                            open_skill_modal(modal_stack, toasts, Some(skill_for_edit.clone()), Callback::new(move |_| refetch()));
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
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <div class="details__section">
                <h4>{"Competency matrix"}</h4>
                <div class="table-container">
                    {move || {
                        let skills = ctrl.items.get();
                        let rows = build_matrix(&skills, &employee_skills.get());
                        if rows.is_empty() {
                            return view! { <p class="table__empty">{"No employee skills recorded yet"}</p> }.into_any();
                        }
                        view! {
                            <table class="table__data">
                                <thead class="table__head">
                                    <tr>
                                        <th class="table__header-cell">{"Employee"}</th>
                                        {skills.iter().map(|s| view! {
                                            <th class="table__header-cell">{s.name.clone()}</th>
                                        }).collect_view()}
                                    </tr>
                                </thead>
                                <tbody>
                                    {rows.into_iter().map(|row| {
                                        view! {
                                            <tr class="table__row">
                                                <td class="table__cell">{row.user_name.clone()}</td>
                                                {skills.iter().map(|s| {
                                                    let cell = row.cells.get(&s.id);
                                                    let text = cell
                                                        .map(|c| {
                                                            let mark = if c.is_certified { " ✓" } else { "" };
                                                            format!("{}{}", c.level.0, mark)
                                                        })
                                                        .unwrap_or_else(|| "-".to_string());
                                                    let title = cell
                                                        .map(|c| c.level.label().to_string())
                                                        .unwrap_or_default();
                                                    view! {
                                                        <td class="table__cell table__cell--center" title=title>{text}</td>
                                                    }
                                                }).collect_view()}
                                            </tr>
                                        }
                                    }).collect_view()}
                                </tbody>
                            </table>
                        }.into_any()
                    }}
                </div>
            </div>
        </div>
    }
}
