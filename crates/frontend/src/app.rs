use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use crate::shared::toast::{ToastHost, ToastService};
use crate::system::session::context::SessionProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppGlobalContext::new());
    provide_context(ModalStackService::new());
    provide_context(ToastService::new());

    view! {
        <SessionProvider>
            <AppRoutes />
            <ModalHost />
            <ToastHost />
        </SessionProvider>
    }
}
