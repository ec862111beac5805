use leptos::prelude::*;
use std::sync::Arc;

use crate::shared::modal_stack::ModalStackService;

/// Explicit confirmation gate for irreversible actions (delete, deactivate).
/// `on_confirm` runs only after the user acknowledges; Cancel closes the
/// dialog and nothing else happens.
pub fn open_confirm(
    modal_stack: ModalStackService,
    title: &str,
    message: &str,
    on_confirm: impl Fn() + Send + Sync + 'static,
) {
    let title = title.to_string();
    let message = message.to_string();
    let on_confirm = Arc::new(on_confirm);

    modal_stack.push_with_frame(
        Some("max-width: 420px; width: 420px;".to_string()),
        move |handle| {
            let title = title.clone();
            let message = message.clone();
            let on_confirm = on_confirm.clone();
            let handle_cancel = handle.clone();
            let handle_ok = handle.clone();
            view! {
                <div class="confirm-dialog">
                    <h3 class="confirm-dialog__title">{title}</h3>
                    <p class="confirm-dialog__message">{message}</p>
                    <div class="confirm-dialog__actions">
                        <button
                            class="button button--secondary"
                            on:click=move |_| handle_cancel.close()
                        >
                            {"Cancel"}
                        </button>
                        <button
                            class="button button--danger"
                            on:click=move |_| {
                                handle_ok.close();
                                on_confirm();
                            }
                        >
                            {"Confirm"}
                        </button>
                    </div>
                </div>
            }
            .into_any()
        },
    );
}
