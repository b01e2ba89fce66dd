//! Sidebar with collapsible menu groups. Clicking an item opens (or
//! activates) the matching tab.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;
use std::collections::HashSet;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str)>, // (tab key, icon)
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "directory",
            label: "Directory",
            icon: "grid",
            items: vec![
                ("a001_warehouse", "building"),
                ("a002_vehicle", "truck"),
                ("a003_route", "map"),
                ("a004_salesman", "user"),
                ("a005_customer", "users"),
                ("a010_tier", "tag"),
            ],
        },
        MenuGroup {
            id: "documents",
            label: "Documents",
            icon: "file-text",
            items: vec![
                ("a006_order", "file-text"),
                ("a007_delivery", "truck"),
                ("a008_invoice", "file-text"),
            ],
        },
        MenuGroup {
            id: "field_ops",
            label: "Field operations",
            icon: "clipboard",
            items: vec![
                ("a009_survey", "clipboard"),
                ("a012_planogram", "layers"),
                ("a013_service_visit", "wrench"),
                ("a011_workflow", "git-branch"),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not in context");
    let (collapsed, set_collapsed) = signal::<HashSet<&'static str>>(HashSet::new());

    view! {
        <nav class="sidebar">
            {menu_groups()
                .into_iter()
                .map(|group| {
                    let group_id = group.id;
                    let is_collapsed = move || collapsed.get().contains(group_id);
                    view! {
                        <div class="sidebar__group">
                            <div
                                class="sidebar__group-header"
                                on:click=move |_| {
                                    set_collapsed.update(|c| {
                                        if !c.remove(group_id) {
                                            c.insert(group_id);
                                        }
                                    });
                                }
                            >
                                {icon(group.icon)}
                                <span class="sidebar__group-label">{group.label}</span>
                                <span class="sidebar__group-chevron">
                                    {move || if is_collapsed() {
                                        icon("chevron-right")
                                    } else {
                                        icon("chevron-down")
                                    }}
                                </span>
                            </div>
                            <Show when=move || !is_collapsed()>
                                {group
                                    .items
                                    .clone()
                                    .into_iter()
                                    .map(|(key, item_icon)| {
                                        let label = tab_label_for_key(key);
                                        let is_active = move || {
                                            ctx.active.get().as_deref() == Some(key)
                                        };
                                        view! {
                                            <div
                                                class="sidebar__item"
                                                class:sidebar__item--active=is_active
                                                on:click=move |_| {
                                                    ctx.open_tab(key, &tab_label_for_key(key));
                                                }
                                            >
                                                {icon(item_icon)}
                                                <span>{label}</span>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
        </nav>
    }
}
