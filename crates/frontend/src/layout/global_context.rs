use std::collections::HashMap;

use contracts::system::auth::Module;
use leptos::prelude::*;
use web_sys::window;

fn module_slug(module: Module) -> &'static str {
    match module {
        Module::Employees => "employees",
        Module::Departments => "departments",
        Module::LeaveApprovals => "leave-approvals",
        Module::LeaveTypes => "leave-types",
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

/// App-wide UI state: the active module and sidebar visibility.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Module>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Module::Employees),
            left_open: RwSignal::new(true),
        }
    }

    /// Restore the active module from the `?module=` query parameter and keep
    /// the URL in sync afterwards, so a reload lands on the same page.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(slug) = params.get("module") {
            if let Some(module) = Module::ALL.into_iter().find(|m| module_slug(*m) == slug) {
                self.active.set(module);
            }
        }

        let this = *self;
        Effect::new(move |_| {
            let slug = module_slug(this.active.get());
            let query_string = serde_qs::to_string(&HashMap::from([(
                "module".to_string(),
                slug.to_string(),
            )]))
            .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            // Untracked read so URL writes do not create reactive loops
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn navigate(&self, module: Module) {
        log::debug!("navigate: {:?}", module);
        self.active.set(module);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}
