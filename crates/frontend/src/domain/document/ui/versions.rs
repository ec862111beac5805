use contracts::domain::document::{format_file_size, DocumentVersion};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::document::api;
use crate::shared::date_utils::format_datetime;
use crate::shared::modal_stack::ModalStackService;

/// Read-only version history of one document.
pub fn open_versions_modal(modal_stack: ModalStackService, document_id: String) {
    modal_stack.push_with_frame(
        Some("max-width: min(560px, 95vw); width: min(560px, 95vw);".to_string()),
        move |handle| {
            let versions = RwSignal::new(Vec::<DocumentVersion>::new());
            let error = RwSignal::new(None::<String>);
            let id = document_id.clone();

            spawn_local(async move {
                match api::versions(id).await {
                    Ok(list) => versions.set(list),
                    Err(e) => error.set(Some(format!("Failed to load versions: {}", e))),
                }
            });

            let handle_close = handle.clone();
            view! {
                <div class="details">
                    <div class="details__header"><h3>{"Version history"}</h3></div>

                    {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

                    <div class="details__body">
                        {move || {
                            let list = versions.get();
                            if list.is_empty() {
                                return view! { <p class="table__empty">{"No versions recorded"}</p> }.into_any();
                            }
                            view! {
                                <table class="table__data table--striped">
                                    <thead class="table__head">
                                        <tr>
                                            <th class="table__header-cell">{"Version"}</th>
                                            <th class="table__header-cell">{"Size"}</th>
                                            <th class="table__header-cell">{"Uploaded"}</th>
                                            <th class="table__header-cell">{"By"}</th>
                                            <th class="table__header-cell">{"Link"}</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list.into_iter().map(|version| view! {
                                            <tr class="table__row">
                                                <td class="table__cell">{format!("v{}", version.version)}</td>
                                                <td class="table__cell">{format_file_size(version.file_size)}</td>
                                                <td class="table__cell">{format_datetime(&version.uploaded_at.to_rfc3339())}</td>
                                                <td class="table__cell">{version.uploaded_by.clone().unwrap_or_else(|| "-".to_string())}</td>
                                                <td class="table__cell">
                                                    <a href={version.file_url.clone()} target="_blank">{"Open"}</a>
                                                </td>
                                            </tr>
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
