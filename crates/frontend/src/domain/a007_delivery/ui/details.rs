//! Read-only delivery document view. The backend's amount is final here;
//! the lines are shown as shipped.

use super::super::model;
use crate::shared::format::{format_date_opt, format_money};
use crate::shared::loading::LoadingService;
use crate::shared::notifications::NotificationService;
use contracts::domain::a007_delivery::Delivery;
use contracts::shared::{compute_totals, FinalTotalRule, TaxRule};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn DeliveryDetails(uuid: String, on_close: Callback<()>) -> impl IntoView {
    let notifications =
        use_context::<NotificationService>().expect("NotificationService not in context");
    let loading = use_context::<LoadingService>().expect("LoadingService not in context");

    let delivery: RwSignal<Option<Delivery>> = RwSignal::new(None);

    loading.begin();
    spawn_local(async move {
        let result = model::fetch(&uuid).await;
        loading.end();
        match result {
            Ok(d) => delivery.set(Some(d)),
            Err(e) => {
                log::error!("delivery load failed: {e}");
                notifications.error(format!("Failed to load delivery: {e}"));
            }
        }
    });

    view! {
        <div class="page details-page">
            <Show
                when=move || delivery.get().is_some()
                fallback=|| view! { <div class="page__placeholder">"Loading..."</div> }
            >
                {move || {
                    let d = delivery.get().unwrap();
                    let totals = compute_totals(
                        &d.doc_lines(),
                        TaxRule::STANDARD,
                        FinalTotalRule::Passthrough(d.total.unwrap_or(0.0)),
                    );
                    view! {
                        <div class="header">
                            <div class="header__content">
                                <h1 class="header__title">{format!("Delivery {}", d.delivery_no)}</h1>
                                <span class="badge">{d.status.label()}</span>
                            </div>
                            <div class="header__actions">
                                <button
                                    class="button button--secondary"
                                    on:click=move |_| on_close.run(())
                                >
                                    "Close"
                                </button>
                            </div>
                        </div>

                        <div class="detail-grid">
                            <div class="detail-grid__item">
                                <span class="detail-grid__label">"Date"</span>
                                <span>{format_date_opt(d.delivery_date.as_deref())}</span>
                            </div>
                            <div class="detail-grid__item">
                                <span class="detail-grid__label">"Order"</span>
                                <span>{d.order_no.clone().unwrap_or_else(|| "-".to_string())}</span>
                            </div>
                            <div class="detail-grid__item">
                                <span class="detail-grid__label">"Customer"</span>
                                <span>{d.customer_name.clone().unwrap_or_else(|| "-".to_string())}</span>
                            </div>
                            <div class="detail-grid__item">
                                <span class="detail-grid__label">"Vehicle"</span>
                                <span>{d.vehicle_plate.clone().unwrap_or_else(|| "-".to_string())}</span>
                            </div>
                            <div class="detail-grid__item">
                                <span class="detail-grid__label">"Driver"</span>
                                <span>{d.driver_name.clone().unwrap_or_else(|| "-".to_string())}</span>
                            </div>
                        </div>

                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">"Product"</th>
                                    <th class="table__header-cell" style="width: 100px;">"Quantity"</th>
                                    <th class="table__header-cell" style="width: 120px;">"Unit price"</th>
                                    <th class="table__header-cell" style="width: 120px;">"Line total"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {d.lines.iter().map(|line| {
                                    let doc_line = line.as_doc_line();
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">
                                                {line.product_name.clone().unwrap_or_else(|| "-".to_string())}
                                            </td>
                                            <td class="table__cell table__cell--number">
                                                {format!("{}", line.quantity)}
                                            </td>
                                            <td class="table__cell table__cell--number">
                                                {format_money(line.unit_price)}
                                            </td>
                                            <td class="table__cell table__cell--number">
                                                {format_money(doc_line.line_total())}
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>

                        <div class="totals-row">
                            <div class="totals-row__item">
                                <span class="totals-row__label">"Gross"</span>
                                <span class="totals-row__value">{format_money(totals.gross)}</span>
                            </div>
                            <div class="totals-row__item">
                                <span class="totals-row__label">"VAT"</span>
                                <span class="totals-row__value">{format_money(totals.vat)}</span>
                            </div>
                            <div class="totals-row__item">
                                <span class="totals-row__label">"Net"</span>
                                <span class="totals-row__value">{format_money(totals.net)}</span>
                            </div>
                            <div class="totals-row__item totals-row__item--final">
                                <span class="totals-row__label">"Total"</span>
                                <span class="totals-row__value">{format_money(totals.final_total)}</span>
                            </div>
                        </div>
                    }
                }}
            </Show>
        </div>
    }
}
