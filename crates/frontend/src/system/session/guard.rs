use contracts::system::auth::Module;
use leptos::prelude::*;

use super::context::use_session;

/// Requires a signed-in session; renders the fallback otherwise.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let (session, _) = use_session();

    view! {
        <Show
            when=move || session.get().token.is_some()
            fallback=|| view! { <div>"Not signed in."</div> }
        >
            {children()}
        </Show>
    }
}

/// Requires that the signed-in role may open `module`.
#[component]
pub fn RequireModule(module: Module, children: ChildrenFn) -> impl IntoView {
    let (session, _) = use_session();

    view! {
        <Show
            when=move || {
                session
                    .get()
                    .profile
                    .map(|p| p.role.can_access(module))
                    .unwrap_or(false)
            }
            fallback=|| view! { <div>"Access denied."</div> }
        >
            {children()}
        </Show>
    }
}
