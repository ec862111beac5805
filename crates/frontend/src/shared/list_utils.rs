/// List helpers shared by every page: client-side search, column sorting,
/// and the debounced search input.
use leptos::prelude::*;
use std::cmp::Ordering;
use wasm_bindgen::JsCast;

/// Debounce window for free-text filters. Structured filters (dropdowns)
/// apply immediately and do not go through this.
pub const SEARCH_DEBOUNCE_MS: i32 = 300;

/// Types that can be matched against a free-text filter.
pub trait Searchable {
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Types that can be sorted by a named column.
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Sort a list by the given field.
pub fn sort_list<T: Sortable>(items: &mut Vec<T>, field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Client-side post-filtering. A pure function of the fetched list and the
/// filter text; the fetched list itself is never mutated.
pub fn filter_list<T: Searchable + Clone>(items: Vec<T>, filter: &str) -> Vec<T> {
    if filter.trim().is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

/// Sort indicator for a column header.
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// Search input with debounce and a clear button. `on_change` fires once the
/// input has been stable for the debounce window; intermediate keystrokes
/// cancel the pending timer.
#[component]
pub fn SearchInput(
    /// Current committed filter value
    #[prop(into)]
    value: Signal<String>,
    /// Callback invoked with the settled value
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    // Local state for the input itself (pre-debounce)
    let (input_value, set_input_value) = signal(String::new());

    let debounce_timeout = StoredValue::new(None::<i32>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        if let Some(timeout_id) = debounce_timeout.get_value() {
            if let Some(w) = web_sys::window() {
                w.clear_timeout_with_handle(timeout_id);
            }
        }

        let window = web_sys::window().expect("no window");
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            on_change.run(new_value.clone());
        }) as Box<dyn Fn()>);

        let timeout_id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref::<js_sys::Function>(),
                SEARCH_DEBOUNCE_MS,
            )
            .expect("setTimeout failed");

        closure.forget();
        debounce_timeout.set_value(Some(timeout_id));
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    let clear_filter = move |_| {
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div style="position: relative; display: inline-flex; align-items: center;">
            <input
                type="text"
                placeholder={placeholder}
                style=move || format!(
                    "width: 250px; padding: 6px 32px 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px; background: {};",
                    if is_filter_active() { "#fffbea" } else { "white" }
                )
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let val = event_target_value(&ev);
                    handle_input_change(val);
                }
            />
            {move || if !input_value.get().is_empty() {
                view! {
                    <button
                        style="position: absolute; right: 6px; background: none; border: none; cursor: pointer; padding: 4px; display: inline-flex; align-items: center; color: #666; line-height: 1;"
                        on:click=clear_filter
                        title="Clear"
                    >
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Row(String);

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            self.0.to_lowercase().contains(&filter.to_lowercase())
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, _field: &str) -> Ordering {
            self.0.cmp(&other.0)
        }
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let rows = vec![Row("a".into()), Row("b".into())];
        assert_eq!(filter_list(rows, "  ").len(), 2);
    }

    #[test]
    fn filter_is_case_insensitive() {
        let rows = vec![Row("Asha Rao".into()), Row("Vikram Iyer".into())];
        let filtered = filter_list(rows, "asha");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].0, "Asha Rao");
    }

    #[test]
    fn sort_descending_reverses() {
        let mut rows = vec![Row("b".into()), Row("a".into()), Row("c".into())];
        sort_list(&mut rows, "name", false);
        let names: Vec<&str> = rows.iter().map(|r| r.0.as_str()).collect();
        assert_eq!(names, ["c", "b", "a"]);
    }
}
