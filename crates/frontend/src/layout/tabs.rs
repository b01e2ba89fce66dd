//! Tab bar plus the key -> component registry for the center area.

use crate::domain::a001_warehouse::ui::details::WarehouseDetails;
use crate::domain::a001_warehouse::ui::list::WarehouseList;
use crate::domain::a002_vehicle::ui::list::VehicleList;
use crate::domain::a003_route::ui::list::RouteList;
use crate::domain::a004_salesman::ui::list::SalesmanList;
use crate::domain::a005_customer::ui::list::CustomerList;
use crate::domain::a006_order::ui::details::OrderDetails;
use crate::domain::a006_order::ui::list::OrderList;
use crate::domain::a007_delivery::ui::details::DeliveryDetails;
use crate::domain::a007_delivery::ui::list::DeliveryList;
use crate::domain::a008_invoice::ui::details::InvoiceDetails;
use crate::domain::a008_invoice::ui::list::InvoiceList;
use crate::domain::a009_survey::ui::list::SurveyList;
use crate::domain::a010_tier::ui::list::TierList;
use crate::domain::a011_workflow::ui::list::WorkflowList;
use crate::domain::a012_planogram::ui::list::PlanogramList;
use crate::domain::a013_service_visit::ui::list::ServiceVisitList;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Human-readable title for a tab key, including detail-tab keys.
pub fn tab_label_for_key(key: &str) -> String {
    match key {
        "a001_warehouse" => "Warehouses".to_string(),
        "a002_vehicle" => "Vehicles".to_string(),
        "a003_route" => "Routes".to_string(),
        "a004_salesman" => "Salesmen".to_string(),
        "a005_customer" => "Customers".to_string(),
        "a006_order" => "Orders".to_string(),
        "a007_delivery" => "Deliveries".to_string(),
        "a008_invoice" => "Invoices".to_string(),
        "a009_survey" => "Surveys".to_string(),
        "a010_tier" => "Tiers".to_string(),
        "a011_workflow" => "Workflows".to_string(),
        "a012_planogram" => "Planograms".to_string(),
        "a013_service_visit" => "Service visits".to_string(),
        "a001_warehouse_new" => "New warehouse".to_string(),
        "a006_order_new" => "New order".to_string(),
        k if k.starts_with("a001_warehouse_detail_") => "Warehouse".to_string(),
        k if k.starts_with("a006_order_detail_") => "Order".to_string(),
        k if k.starts_with("a007_delivery_detail_") => "Delivery".to_string(),
        k if k.starts_with("a008_invoice_detail_") => "Invoice".to_string(),
        other => other.to_string(),
    }
}

/// One tab's content, created when the tab is opened and kept alive while
/// it stays open (switching tabs only toggles visibility, preserving page
/// state such as filters).
#[component]
fn TabPage(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let tab_key = tab.key.clone();
    let key_for_active = tab_key.clone();
    let is_active = move || tabs_store.active.get().as_deref() == Some(key_for_active.as_str());

    let key_for_close = tab_key.clone();
    let on_close = Callback::new(move |_: ()| {
        tabs_store.close_tab(&key_for_close);
    });

    let content = match tab_key.as_str() {
        "a001_warehouse" => view! { <WarehouseList /> }.into_any(),
        "a002_vehicle" => view! { <VehicleList /> }.into_any(),
        "a003_route" => view! { <RouteList /> }.into_any(),
        "a004_salesman" => view! { <SalesmanList /> }.into_any(),
        "a005_customer" => view! { <CustomerList /> }.into_any(),
        "a006_order" => view! { <OrderList /> }.into_any(),
        "a007_delivery" => view! { <DeliveryList /> }.into_any(),
        "a008_invoice" => view! { <InvoiceList /> }.into_any(),
        "a009_survey" => view! { <SurveyList /> }.into_any(),
        "a010_tier" => view! { <TierList /> }.into_any(),
        "a011_workflow" => view! { <WorkflowList /> }.into_any(),
        "a012_planogram" => view! { <PlanogramList /> }.into_any(),
        "a013_service_visit" => view! { <ServiceVisitList /> }.into_any(),
        "a001_warehouse_new" => {
            view! { <WarehouseDetails uuid=None on_close=on_close /> }.into_any()
        }
        k if k.starts_with("a001_warehouse_detail_") => {
            let uuid = k.trim_start_matches("a001_warehouse_detail_").to_string();
            view! { <WarehouseDetails uuid=Some(uuid) on_close=on_close /> }.into_any()
        }
        "a006_order_new" => view! { <OrderDetails uuid=None on_close=on_close /> }.into_any(),
        k if k.starts_with("a006_order_detail_") => {
            let uuid = k.trim_start_matches("a006_order_detail_").to_string();
            view! { <OrderDetails uuid=Some(uuid) on_close=on_close /> }.into_any()
        }
        k if k.starts_with("a007_delivery_detail_") => {
            let uuid = k.trim_start_matches("a007_delivery_detail_").to_string();
            view! { <DeliveryDetails uuid=uuid on_close=on_close /> }.into_any()
        }
        k if k.starts_with("a008_invoice_detail_") => {
            let uuid = k.trim_start_matches("a008_invoice_detail_").to_string();
            view! { <InvoiceDetails uuid=uuid on_close=on_close /> }.into_any()
        }
        _ => view! { <div class="page">"Unknown tab"</div> }.into_any(),
    };

    view! {
        <div class="tab-page" class:tab-page--hidden=move || !is_active()>
            {content}
        </div>
    }
}

#[component]
pub fn Tabs() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not in context");

    view! {
        <div class="tabs">
            <div class="tabs__bar">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| {
                        let key = tab.key.clone();
                        let key_for_click = key.clone();
                        let key_for_close = key.clone();
                        let key_for_active = key.clone();
                        let is_active = move || {
                            tabs_store.active.get().as_deref() == Some(key_for_active.as_str())
                        };
                        view! {
                            <div
                                class="tabs__tab"
                                class:tabs__tab--active=is_active
                                on:click=move |_| tabs_store.activate_tab(&key_for_click)
                            >
                                <span class="tabs__tab-title">{tab.title.clone()}</span>
                                <button
                                    class="tabs__tab-close"
                                    on:click=move |e| {
                                        e.stop_propagation();
                                        tabs_store.close_tab(&key_for_close);
                                    }
                                >
                                    {icon("x")}
                                </button>
                            </div>
                        }
                    }
                />
            </div>
            <div class="tabs__content">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| {
                        view! { <TabPage tab=tab tabs_store=tabs_store /> }
                    }
                />
            </div>
        </div>
    }
}
