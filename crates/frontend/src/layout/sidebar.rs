use contracts::system::auth::Module;
use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::session::context::use_session;

fn module_icon(module: Module) -> &'static str {
    match module {
        Module::Employees => "employees",
        Module::Departments => "departments",
        Module::LeaveApprovals | Module::LeaveTypes => "leave",
        Module::Holidays => "holidays",
        Module::Payslips => "payslips",
        Module::Goals => "goals",
        Module::Reviews => "reviews",
        Module::Training => "training",
        Module::Skills => "skills",
        Module::Assets => "assets",
        Module::Documents => "documents",
    }
}

/// Navigation sidebar. Entries come from the typed module list filtered
/// through the signed-in role's capability check.
#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let (session, _) = use_session();

    let visible_modules = move || {
        let role = session.get().profile.map(|p| p.role);
        Module::ALL
            .into_iter()
            .filter(|m| role.map(|r| r.can_access(*m)).unwrap_or(false))
            .collect::<Vec<_>>()
    };

    view! {
        <Show when=move || ctx.left_open.get()>
            <nav class="sidebar">
                <div class="sidebar__brand">{"HRMS"}</div>
                <ul class="sidebar__menu">
                    {move || visible_modules().into_iter().map(|module| {
                        let is_active = move || ctx.active.get() == module;
                        view! {
                            <li
                                class="sidebar__item"
                                class:sidebar__item--active=is_active
                                on:click=move |_| ctx.navigate(module)
                            >
                                {icon(module_icon(module))}
                                <span class="sidebar__label">{module.title()}</span>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </nav>
        </Show>
    }
}
