use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::session::context::{do_logout, use_session};

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let (session, _) = use_session();

    let user_label = move || {
        session
            .get()
            .profile
            .map(|p| p.full_name)
            .unwrap_or_default()
    };

    let tenant_label = move || {
        session
            .get()
            .profile
            .map(|p| p.tenant.name)
            .unwrap_or_default()
    };

    let handle_logout = move |_| {
        spawn_local(async move {
            let _ = do_logout().await;
        });
    };

    view! {
        <header class="header-bar">
            <button class="header-bar__burger" on:click=move |_| ctx.toggle_left()>
                {"☰"}
            </button>
            <div class="header-bar__title">
                {move || ctx.active.get().title()}
            </div>
            <div class="header-bar__spacer"></div>
            <span class="header-bar__tenant">{tenant_label}</span>
            <span class="header-bar__user">{user_label}</span>
            <button class="header-bar__logout" title="Sign out" on:click=handle_logout>
                {icon("logout")}
            </button>
        </header>
    }
}
