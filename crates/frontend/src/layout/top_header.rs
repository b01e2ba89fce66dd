use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not in context");

    view! {
        <header class="top-header">
            <button
                class="top-header__burger"
                title="Toggle sidebar"
                on:click=move |_| ctx.toggle_left()
            >
                {icon("menu")}
            </button>
            <span class="top-header__title">"SFA Admin Console"</span>
        </header>
    }
}
