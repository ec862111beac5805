use contracts::system::auth::Module;
use leptos::prelude::*;

use crate::domain;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::system::pages::login::LoginPage;
use crate::system::session::context::use_session;
use crate::system::session::guard::RequireModule;

fn page_for(module: Module) -> AnyView {
    match module {
        Module::Employees => view! { <domain::employee::ui::list::EmployeeList /> }.into_any(),
        Module::Departments => {
            view! { <domain::department::ui::tree::DepartmentTree /> }.into_any()
        }
        Module::LeaveApprovals => {
            view! { <domain::leave::ui::approvals::LeaveApprovalsList /> }.into_any()
        }
        Module::LeaveTypes => view! { <domain::leave::ui::types::LeaveTypeList /> }.into_any(),
        Module::Holidays => view! { <domain::holiday::ui::list::HolidayList /> }.into_any(),
        Module::Payslips => view! { <domain::payslip::ui::list::PayslipList /> }.into_any(),
        Module::Goals => view! { <domain::goal::ui::list::GoalList /> }.into_any(),
        Module::Reviews => view! { <domain::review::ui::list::ReviewCycleList /> }.into_any(),
        Module::Training => view! { <domain::training::ui::list::TrainingProgramList /> }.into_any(),
        Module::Skills => view! { <domain::skill::ui::list::SkillMatrix /> }.into_any(),
        Module::Assets => view! { <domain::asset::ui::list::AssetList /> }.into_any(),
        Module::Documents => view! { <domain::document::ui::list::DocumentList /> }.into_any(),
    }
}

#[component]
fn ActivePage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    // Runs once when the shell is created
    ctx.init_router_integration();

    view! {
        {move || {
            let module = ctx.active.get();
            view! {
                <RequireModule module=module>
                    {move || page_for(module)}
                </RequireModule>
            }
            .into_any()
        }}
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (session, _) = use_session();

    view! {
        <Show
            when=move || session.get().token.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <Shell center=|| view! { <ActivePage /> }.into_any() />
        </Show>
    }
}
