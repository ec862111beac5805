use std::collections::HashSet;

use contracts::domain::document::{format_file_size, Document, DocumentDto};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::document::api;
use crate::domain::document::ui::upload::open_upload_modal;
use crate::domain::document::ui::versions::open_versions_modal;
use crate::shared::components::table_checkbox::TableCheckbox;
use crate::shared::components::ui::Badge;
use crate::shared::confirm::open_confirm;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::resource::{run_mutation, ListController, ALL};
use crate::shared::toast::ToastService;

#[derive(Clone, Debug)]
struct DocumentFilters {
    search: String,
    category_filter: String,
    type_filter: String,
}

impl Default for DocumentFilters {
    fn default() -> Self {
        Self {
            search: String::new(),
            category_filter: ALL.to_string(),
            type_filter: ALL.to_string(),
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn DocumentList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let filters = RwSignal::new(DocumentFilters::default());
    let ctrl = ListController::<Document>::new();
    let selected = RwSignal::new(HashSet::<String>::new());

    let do_load = move |f: DocumentFilters| {
        ctrl.load(api::list(f.search, f.category_filter, f.type_filter));
    };

    Effect::new(move |_| {
        do_load(filters.get());
    });

    let refetch = move || do_load(filters.get_untracked());

    let toggle_select = move |id: String, checked: bool| {
        selected.update(|s| {
            if checked {
                s.insert(id.clone());
            } else {
                s.remove(&id);
            }
        });
    };

    let delete_selected = move || {
        let ids: Vec<String> = selected.get().into_iter().collect();
        if ids.is_empty() {
            return;
        }
        open_confirm(
            modal_stack,
            "Delete documents",
            &format!("Delete {} selected document(s)? This cannot be undone.", ids.len()),
            move || {
                let ids = ids.clone();
                spawn_local(async move {
                    let mut all_ok = true;
                    for id in ids {
                        if api::remove(id).await.is_err() {
                            all_ok = false;
                        }
                    }
                    if all_ok {
                        toasts.success("Documents deleted");
                    } else {
                        toasts.error("Some documents could not be deleted");
                    }
                    selected.set(HashSet::new());
                    refetch();
                });
            },
        );
    };

    let handle_delete = move |id: String, name: String| {
        open_confirm(
            modal_stack,
            "Delete document",
            &format!("Delete document \"{}\" and all of its versions?", name),
            move || {
                let id = id.clone();
                run_mutation(
                    toasts,
                    "Document deleted",
                    api::remove(id),
                    move |_| refetch(),
                );
            },
        );
    };

    let handle_toggle_public = move |doc: Document| {
        let dto = DocumentDto {
            id: Some(doc.id.clone()),
            name: doc.name.clone(),
            doc_type: doc.doc_type.clone(),
            category: doc.category.clone(),
            is_public: !doc.is_public,
        };
        run_mutation(
            toasts,
            "Document updated",
            api::update(doc.id.clone(), dto),
            move |_| refetch(),
        );
    };

    // Distinct categories of the current snapshot feed the dropdown
    let categories = move || {
        let mut list: Vec<String> = ctrl
            .items
            .get()
            .iter()
            .map(|d| d.category.clone())
            .collect();
        list.sort();
        list.dedup();
        list
    };

    view! {
        <div class="content">
            <div class="header">
                <h2>{"Documents"}</h2>
                <div class="header__actions">
                    <SearchInput
                        value=Signal::derive(move || filters.get().search)
                        on_change=Callback::new(move |text: String| {
                            filters.update(|f| f.search = text);
                        })
                        placeholder="Search documents...".to_string()
                    />
                    <select
                        class="filter-select"
                        on:change=move |ev| {
                            filters.update(|f| f.category_filter = event_target_value(&ev));
                        }
                    >
                        <option value=ALL selected=move || filters.get().category_filter == ALL>{"All categories"}</option>
                        {move || categories().into_iter().map(|category| {
                            let value = category.clone();
                            let value_clone = value.clone();
                            view! {
                                <option value=value selected=move || filters.get().category_filter == value_clone>
                                    {category}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                    <button class="button button--primary" on:click=move |_| {
                        open_upload_modal(modal_stack, toasts, Callback::new(move |_| refetch()));
                    }>
                        {icon("upload")}
                        {"Upload"}
                    </button>
                    <button
                        class="button button--secondary"
                        disabled=move || selected.get().is_empty()
                        on:click=move |_| delete_selected()
                    >
                        {icon("delete")}
                        {move || format!("Delete ({})", selected.get().len())}
                    </button>
                    <button class="button button--secondary" on:click=move |_| refetch()>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                </div>
            </div>

            {move || ctrl.error.get().map(|e| view! { <div class="error">{e}</div> })}

            {move || if ctrl.loading.get() {
                view! { <div class="loading">{"Loading..."}</div> }.into_any()
            } else {
                view! {
                    <div class="table-container">
                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell table__header-cell--checkbox"></th>
                                    <th class="table__header-cell">{"Name"}</th>
                                    <th class="table__header-cell">{"Type"}</th>
                                    <th class="table__header-cell">{"Category"}</th>
                                    <th class="table__header-cell">{"Size"}</th>
                                    <th class="table__header-cell">{"Version"}</th>
                                    <th class="table__header-cell">{"Uploaded"}</th>
                                    <th class="table__header-cell">{"Flags"}</th>
                                    <th class="table__header-cell">{"Actions"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    let documents = ctrl.items.get();
                                    if documents.is_empty() {
                                        return view! {
                                            <tr><td colspan="9" class="table__empty">{"No documents match the current filters"}</td></tr>
                                        }.into_any();
                                    }
                                    documents.into_iter().map(|doc| {
                                        let id_for_versions = doc.id.clone();
                                        let id_for_delete = doc.id.clone();
                                        let id_for_checkbox = doc.id.clone();
                                        let id_for_select = doc.id.clone();
                                        let name_for_delete = doc.name.clone();
                                        let doc_for_toggle = doc.clone();
                                        view! {
                                            <tr class="table__row" class:table__row--selected=move || selected.get().contains(&id_for_select)>
                                                <TableCheckbox
                                                    checked=Signal::derive({
                                                        let id = doc.id.clone();
                                                        move || selected.get().contains(&id)
                                                    })
                                                    on_change=Callback::new(move |checked| toggle_select(id_for_checkbox.clone(), checked))
                                                />
                                                <td class="table__cell">
                                                    <a href={doc.file_url.clone()} target="_blank">{doc.name.clone()}</a>
                                                </td>
                                                <td class="table__cell">{doc.doc_type.clone()}</td>
                                                <td class="table__cell">{doc.category.clone()}</td>
                                                <td class="table__cell">{format_file_size(doc.file_size)}</td>
                                                <td class="table__cell">{format!("v{}", doc.version)}</td>
                                                <td class="table__cell">{format_datetime(&doc.uploaded_at.to_rfc3339())}</td>
                                                <td class="table__cell">
                                                    {doc.is_public.then(|| view! {
                                                        <Badge variant="primary".to_string()>{"Public"}</Badge>
                                                    })}
                                                    {doc.is_verified.then(|| view! {
                                                        <Badge variant="success".to_string()>{"Verified"}</Badge>
                                                    })}
                                                </td>
                                                <td class="table__cell table__cell--actions">
                                                    <button class="button button--small" on:click=move |_| {
                                                        open_versions_modal(modal_stack, id_for_versions.clone());
                                                    }>
                                                        {"Versions"}
                                                    </button>
                                                    <button class="button button--small" on:click=move |_| {
                                                        handle_toggle_public(doc_for_toggle.clone());
                                                    }>
                                                        {if doc.is_public { "Make private" } else { "Make public" }}
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
                }.into_any()
            }}
        </div>
    }
}
