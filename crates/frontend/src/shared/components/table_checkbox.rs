use leptos::prelude::*;

/// Row-selection checkbox cell. Renders a `<td>`; clicking the checkbox does
/// not trigger the row's own click handler.
#[component]
pub fn TableCheckbox(
    /// Checked state
    checked: Signal<bool>,
    /// Callback invoked on change
    on_change: Callback<bool>,
    /// Disable the checkbox
    #[prop(optional)]
    disabled: bool,
) -> impl IntoView {
    view! {
        <td
            class="table__cell table__cell--checkbox"
            on:click=|e| e.stop_propagation()
        >
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=checked
                prop:disabled=disabled
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    on_change.run(checked);
                }
            />
        </td>
    }
}
