pub mod global_context;
pub mod header;
pub mod sidebar;

use leptos::prelude::*;

/// Application shell: sidebar on the left, header on top, the active page in
/// the center.
#[component]
pub fn Shell(center: fn() -> AnyView) -> impl IntoView {
    view! {
        <div class="shell">
            <sidebar::Sidebar />
            <div class="shell__main">
                <header::Header />
                <main class="shell__content">
                    {center()}
                </main>
            </div>
        </div>
    }
}
