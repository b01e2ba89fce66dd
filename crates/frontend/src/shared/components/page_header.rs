use crate::shared::icons::icon;
use crate::shared::list_controller::{HeaderAction, MenuAction};
use crate::shared::components::three_dot_menu::ThreeDotMenu;
use leptos::prelude::*;

/// Page header: title, primary/secondary action buttons and the optional
/// overflow menu.
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional)] actions: Vec<HeaderAction>,
    #[prop(optional)] three_dot: Vec<MenuAction>,
    /// Extra header widgets (search box, column settings)
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="header">
            <div class="header__content">
                <h1 class="header__title">{title}</h1>
            </div>
            <div class="header__actions">
                {children.map(|c| c())}
                {actions
                    .into_iter()
                    .map(|action| {
                        let on_click = action.on_click.clone();
                        let class = if action.primary {
                            "button button--primary"
                        } else {
                            "button button--secondary"
                        };
                        view! {
                            <button class=class on:click=move |_| on_click()>
                                {icon(action.icon)}
                                {action.label}
                            </button>
                        }
                    })
                    .collect_view()}
                {if three_dot.is_empty() {
                    view! { <></> }.into_any()
                } else {
                    view! { <ThreeDotMenu actions=three_dot /> }.into_any()
                }}
            </div>
        </div>
    }
}
