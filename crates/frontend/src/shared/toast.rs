use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const AUTO_DISMISS_MS: u32 = 4000;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone)]
struct ToastEntry {
    id: u64,
    kind: ToastKind,
    message: String,
}

/// Non-blocking notification service. Lives in context next to the modal
/// stack; toasts auto-dismiss and never interrupt input.
#[derive(Clone, Copy)]
pub struct ToastService {
    entries: RwSignal<Vec<ToastEntry>>,
    next_id: RwSignal<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            entries: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.entries.update(|list| {
            list.push(ToastEntry { id, kind, message });
        });

        let entries = self.entries;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            entries.update(|list| list.retain(|t| t.id != id));
        });
    }

    fn dismiss(&self, id: u64) {
        self.entries.update(|list| list.retain(|t| t.id != id));
    }
}

/// Renders the toast stack. Must be mounted exactly once, at the app root.
#[component]
pub fn ToastHost() -> impl IntoView {
    let svc = use_context::<ToastService>()
        .expect("ToastService not provided in context (provide it in app root)");

    view! {
        <div class="toast-stack">
            <For
                each=move || svc.entries.get()
                key=|entry| entry.id
                children=move |entry| {
                    let class = match entry.kind {
                        ToastKind::Success => "toast toast--success",
                        ToastKind::Error => "toast toast--error",
                    };
                    let id = entry.id;
                    view! {
                        <div class=class role="status">
                            <span class="toast__message">{entry.message.clone()}</span>
                            <button
                                class="toast__close"
                                on:click=move |_| svc.dismiss(id)
                            >
                                {"×"}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
