//! Generic list-resource controller.
//!
//! Every page owns a filter state, keeps a results list synchronized with the
//! backend, and refetches after mutations. This module is that life cycle,
//! factored once: query building with sentinel omission, a list controller
//! with a request generation counter, background (non-critical) fetches, and
//! the mutate-then-refetch wrapper.

use std::future::Future;

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::toast::ToastService;

/// Sentinel filter value meaning "no constraint".
pub const ALL: &str = "all";

/// A filter set to `""` or `"all"` (any case) is not a constraint and must be
/// omitted from the query entirely.
pub fn is_sentinel(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL)
}

/// Build a query string from filter pairs, skipping sentinel values.
/// Returns `""` when nothing survives, `"?a=b&c=d"` otherwise.
pub fn build_query(pairs: &[(&str, String)]) -> String {
    let parts: Vec<String> = pairs
        .iter()
        .filter(|(_, value)| !is_sentinel(value))
        .map(|(name, value)| format!("{}={}", name, urlencoding::encode(value)))
        .collect();
    if parts.is_empty() {
        String::new()
    } else {
        format!("?{}", parts.join("&"))
    }
}

/// Owns one resource list: items, loading flag, error slot, and a monotonic
/// request generation. Out-of-order completions are resolved by discarding
/// any response whose generation is no longer current, so the displayed list
/// always reflects the most recently requested filter combination.
pub struct ListController<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub items: RwSignal<Vec<T>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    generation: RwSignal<u64>,
}

// Handles are Copy regardless of T; a derive would demand T: Copy.
impl<T: Clone + Send + Sync + 'static> Clone for ListController<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Clone + Send + Sync + 'static> Copy for ListController<T> {}

impl<T> ListController<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            generation: RwSignal::new(0),
        }
    }

    /// Issue the critical list read. A failure here is the page's visible
    /// error state; stale completions are dropped.
    pub fn load<F>(&self, fut: F)
    where
        F: Future<Output = Result<Vec<T>, String>> + 'static,
    {
        let generation = self.generation;
        let current = generation.get_untracked() + 1;
        generation.set(current);

        let items = self.items;
        let loading = self.loading;
        let error = self.error;
        loading.set(true);

        spawn_local(async move {
            let result = fut.await;
            if generation.get_untracked() != current {
                log::debug!("discarding stale list response (generation {})", current);
                return;
            }
            loading.set(false);
            match result {
                Ok(list) => {
                    items.set(list);
                    error.set(None);
                }
                Err(e) => error.set(Some(e)),
            }
        });
    }
}

/// Non-critical companion read (stats, lookup tables). A failure is logged
/// and never blocks or fails the page.
pub fn spawn_background<T, F>(label: &'static str, target: RwSignal<T>, fut: F)
where
    T: Send + Sync + 'static,
    F: Future<Output = Result<T, String>> + 'static,
{
    spawn_local(async move {
        match fut.await {
            Ok(value) => target.set(value),
            Err(e) => log::warn!("background fetch '{}' failed: {}", label, e),
        }
    });
}

/// Run a mutation. On success: toast, then `on_success` (close the modal,
/// refetch affected lists). On failure: the server message goes to a toast
/// and nothing else happens, so the modal stays open for a retry.
pub fn run_mutation<T, F, S>(toasts: ToastService, success_message: &'static str, fut: F, on_success: S)
where
    T: 'static,
    F: Future<Output = Result<T, String>> + 'static,
    S: FnOnce(T) + 'static,
{
    spawn_local(async move {
        match fut.await {
            Ok(value) => {
                toasts.success(success_message);
                on_success(value);
            }
            Err(e) => toasts.error(e),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_values_are_recognized() {
        assert!(is_sentinel(""));
        assert!(is_sentinel("   "));
        assert!(is_sentinel("all"));
        assert!(is_sentinel("ALL"));
        assert!(!is_sentinel("AVAILABLE"));
    }

    #[test]
    fn all_sentinel_filters_produce_no_query() {
        let query = build_query(&[
            ("status", "all".to_string()),
            ("category", "ALL".to_string()),
            ("search", "".to_string()),
        ]);
        assert_eq!(query, "");
    }

    #[test]
    fn non_sentinel_filters_are_kept_and_encoded() {
        let query = build_query(&[
            ("status", "AVAILABLE".to_string()),
            ("category", "all".to_string()),
            ("search", "laptop a".to_string()),
        ]);
        assert_eq!(query, "?status=AVAILABLE&search=laptop%20a");
    }
}
