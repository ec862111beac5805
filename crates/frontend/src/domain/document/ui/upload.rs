use contracts::domain::document::DocumentDto;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::domain::document::api;
use crate::shared::components::ui::{Checkbox, Input};
use crate::shared::modal_stack::ModalStackService;
use crate::shared::toast::ToastService;

/// Documents up to 10 MB; the content itself is never inspected client-side.
const MAX_DOCUMENT_BYTES: f64 = 10.0 * 1024.0 * 1024.0;

pub fn open_upload_modal(
    modal_stack: ModalStackService,
    toasts: ToastService,
    on_done: Callback<()>,
) {
    modal_stack.push_with_frame(
        Some("max-width: 480px; width: 480px;".to_string()),
        move |handle| {
            let form = RwSignal::new(DocumentDto::default());
            // File handles are not thread-safe; keep them in local storage
            let file = RwSignal::new_local(None::<web_sys::File>);
            let error = RwSignal::new(None::<String>);
            let uploading = RwSignal::new(false);

            let handle_file = move |ev: leptos::ev::Event| {
                let input = ev
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
                let Some(chosen) = input.and_then(|i| i.files()).and_then(|f| f.get(0)) else {
                    return;
                };
                if chosen.size() > MAX_DOCUMENT_BYTES {
                    error.set(Some("Document must be 10 MB or smaller".to_string()));
                    return;
                }
                // Default the display name to the file name
                form.update(|f| {
                    if f.name.trim().is_empty() {
                        f.name = chosen.name();
                    }
                });
                error.set(None);
                file.set(Some(chosen));
            };

            let handle_submit = {
                let handle = handle.clone();
                move |_| {
                    let dto = form.get();
                    if let Err(msg) = dto.validate() {
                        error.set(Some(msg.to_string()));
                        return;
                    }
                    let Some(chosen) = file.get() else {
                        error.set(Some("Choose a file first".to_string()));
                        return;
                    };
                    uploading.set(true);
                    let handle = handle.clone();
                    spawn_local(async move {
                        match api::upload(dto, chosen, None).await {
                            Ok(_) => {
                                uploading.set(false);
                                toasts.success("Document uploaded");
                                handle.close();
                                on_done.run(());
                            }
                            Err(e) => {
                                uploading.set(false);
                                // Modal stays open so the upload can be retried
                                toasts.error(e);
                            }
                        }
                    });
                }
            };

            let handle_cancel = handle.clone();
            view! {
                <div class="details">
                    <div class="details__header"><h3>{"Upload document"}</h3></div>

                    {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

                    <div class="details__body">
                        <div class="form__group">
                            <label class="form__label">{"File (max 10 MB)"}</label>
                            <input type="file" on:change=handle_file />
                        </div>
                        <Input
                            label="Name".to_string()
                            value=Signal::derive(move || form.get().name)
                            on_input=Callback::new(move |v: String| form.update(|f| f.name = v))
                        />
                        <Input
                            label="Type".to_string()
                            value=Signal::derive(move || form.get().doc_type)
                            on_input=Callback::new(move |v: String| form.update(|f| f.doc_type = v))
                            placeholder="POLICY, CONTRACT, ID_PROOF...".to_string()
                        />
                        <Input
                            label="Category".to_string()
                            value=Signal::derive(move || form.get().category)
                            on_input=Callback::new(move |v: String| form.update(|f| f.category = v))
                        />
                        <Checkbox
                            label="Visible to all employees".to_string()
                            checked=Signal::derive(move || form.get().is_public)
                            on_change=Callback::new(move |checked: bool| {
                                form.update(|f| f.is_public = checked)
                            })
                        />
                    </div>
                    <div class="details__footer">
                        <button class="button button--secondary" on:click=move |_| handle_cancel.close()>
                            {"Cancel"}
                        </button>
                        <button
                            class="button button--primary"
                            disabled=move || uploading.get()
                            on:click=handle_submit
                        >
                            {move || if uploading.get() { "Uploading..." } else { "Upload" }}
                        </button>
                    </div>
                </div>
            }
            .into_any()
        },
    );
}
