use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::shared::resource::ALL;

const STORAGE_KEY: &str = "asset_list_state_v1";

#[derive(Clone, Debug, Serialize, Deserialize)]
struct PersistedState {
    pub status_filter: String,
    pub category_filter: String,
}

/// Server-side filters only. Changing any of these re-issues the list
/// request; sorting is client-side and lives in the component.
#[derive(Clone, Debug)]
pub struct AssetListState {
    pub search: String,
    pub status_filter: String,
    pub category_filter: String,
}

impl Default for AssetListState {
    fn default() -> Self {
        Self {
            search: String::new(),
            status_filter: ALL.to_string(),
            category_filter: ALL.to_string(),
        }
    }
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn load_persisted() -> Option<PersistedState> {
    let raw = storage()?.get_item(STORAGE_KEY).ok().flatten()?;
    serde_json::from_str::<PersistedState>(&raw).ok()
}

fn save_persisted(st: &PersistedState) {
    let Some(storage) = storage() else { return };
    let Ok(raw) = serde_json::to_string(st) else {
        return;
    };
    let _ = storage.set_item(STORAGE_KEY, &raw);
}

/// Persist the structured filters (not the transient search text).
pub fn persist_state(signal: RwSignal<AssetListState>) {
    let st = signal.get_untracked();
    save_persisted(&PersistedState {
        status_filter: st.status_filter,
        category_filter: st.category_filter,
    });
}

pub fn create_state() -> RwSignal<AssetListState> {
    let mut st = AssetListState::default();
    if let Some(p) = load_persisted() {
        st.status_filter = p.status_filter;
        st.category_filter = p.category_filter;
    }
    RwSignal::new(st)
}
