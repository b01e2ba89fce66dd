//! Read-only invoice view. The backend already computed the money fields;
//! the page re-sums the lines for the totals row and keeps the backend's
//! final amount through `Passthrough`.

use super::super::model;
use crate::shared::export::open_download;
use crate::shared::format::{format_date_opt, format_money};
use crate::shared::loading::LoadingService;
use crate::shared::notifications::NotificationService;
use contracts::domain::a008_invoice::Invoice;
use contracts::shared::{compute_totals, FinalTotalRule, TaxRule};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn InvoiceDetails(uuid: String, on_close: Callback<()>) -> impl IntoView {
    let notifications =
        use_context::<NotificationService>().expect("NotificationService not in context");
    let loading = use_context::<LoadingService>().expect("LoadingService not in context");

    let invoice: RwSignal<Option<Invoice>> = RwSignal::new(None);

    let uuid_for_load = uuid.clone();
    loading.begin();
    spawn_local(async move {
        let result = model::fetch(&uuid_for_load).await;
        loading.end();
        match result {
            Ok(i) => invoice.set(Some(i)),
            Err(e) => {
                log::error!("invoice load failed: {e}");
                notifications.error(format!("Failed to load invoice: {e}"));
            }
        }
    });

    let uuid_for_pdf = StoredValue::new(uuid);
    let download_pdf = move |_| {
        let uuid = uuid_for_pdf.get_value();
        spawn_local(async move {
            match model::export_pdf(&uuid).await {
                Ok(ticket) => {
                    if let Err(e) = open_download(&ticket.download_url) {
                        log::error!("invoice pdf download failed: {e}");
                        notifications.error("Failed to start download".to_string());
                    }
                }
                Err(e) => {
                    log::error!("invoice pdf export failed: {e}");
                    notifications.error(format!("Failed to export invoice: {e}"));
                }
            }
        });
    };

    view! {
        <div class="page details-page">
            <Show
                when=move || invoice.get().is_some()
                fallback=|| view! { <div class="page__placeholder">"Loading..."</div> }
            >
                {move || {
                    let i = invoice.get().unwrap();
                    let totals = compute_totals(
                        &i.doc_lines(),
                        TaxRule::STANDARD,
                        FinalTotalRule::Passthrough(i.total.unwrap_or(0.0)),
                    );
                    view! {
                        <div class="header">
                            <div class="header__content">
                                <h1 class="header__title">{format!("Invoice {}", i.invoice_no)}</h1>
                            </div>
                            <div class="header__actions">
                                <button class="button button--secondary" on:click=download_pdf>
                                    "Download PDF"
                                </button>
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
                                <span>{format_date_opt(i.invoice_date.as_deref())}</span>
                            </div>
                            <div class="detail-grid__item">
                                <span class="detail-grid__label">"Order"</span>
                                <span>{i.order_no.clone().unwrap_or_else(|| "-".to_string())}</span>
                            </div>
                            <div class="detail-grid__item">
                                <span class="detail-grid__label">"Customer"</span>
                                <span>{i.customer.display_name()}</span>
                            </div>
                        </div>

                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">"Product"</th>
                                    <th class="table__header-cell" style="width: 100px;">"Quantity"</th>
                                    <th class="table__header-cell" style="width: 120px;">"Unit price"</th>
                                    <th class="table__header-cell" style="width: 100px;">"VAT"</th>
                                    <th class="table__header-cell" style="width: 120px;">"Line total"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {i.lines.iter().map(|line| {
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
                                                {format_money(doc_line.line_vat(TaxRule::STANDARD))}
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
