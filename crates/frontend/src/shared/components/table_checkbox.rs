use leptos::prelude::*;

/// Row-selection checkbox cell. Renders a `<td>`; clicking it does not
/// trigger the row's own click handler (stop_propagation).
#[component]
pub fn TableCheckbox(
    /// Checked state
    checked: Signal<bool>,
    /// Fired with the new state
    on_change: Callback<bool>,
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
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    on_change.run(checked);
                }
            />
        </td>
    }
}
