use crate::shared::icons::icon;
use leptos::prelude::*;
use std::collections::HashSet;

/// Column visibility picker. Works off `(key, label)` pairs plus the
/// controller's visible-column set; toggles go back through a callback so
/// the controller can persist them.
#[component]
pub fn ColumnSettings(
    columns: Vec<(&'static str, &'static str)>,
    #[prop(into)] visible: Signal<HashSet<String>>,
    on_toggle: Callback<&'static str>,
) -> impl IntoView {
    let (open, set_open) = signal(false);

    view! {
        <div class="column-settings">
            <button
                class="button button--icon"
                title="Columns"
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                {icon("columns")}
            </button>
            <Show when=move || open.get()>
                <div class="column-settings__menu">
                    {columns
                        .clone()
                        .into_iter()
                        .map(|(key, label)| {
                            view! {
                                <label class="column-settings__item">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || visible.get().contains(key)
                                        on:change=move |_| on_toggle.run(key)
                                    />
                                    {label}
                                </label>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
