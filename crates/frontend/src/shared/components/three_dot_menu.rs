use crate::shared::icons::icon;
use crate::shared::list_controller::MenuAction;
use leptos::prelude::*;

/// Header overflow menu (export CSV/XLSX, bulk status toggle, ...).
#[component]
pub fn ThreeDotMenu(actions: Vec<MenuAction>) -> impl IntoView {
    let (open, set_open) = signal(false);

    view! {
        <div class="three-dot">
            <button
                class="button button--icon"
                title="More actions"
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                {icon("more-vertical")}
            </button>
            <Show when=move || open.get()>
                <div class="three-dot__menu">
                    {actions
                        .clone()
                        .into_iter()
                        .map(|action| {
                            let on_select = action.on_select.clone();
                            view! {
                                <button
                                    class="three-dot__item"
                                    on:click=move |_| {
                                        set_open.set(false);
                                        on_select();
                                    }
                                >
                                    {action.label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
