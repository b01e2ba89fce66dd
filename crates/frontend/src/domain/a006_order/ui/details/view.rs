use super::view_model::OrderFormVm;
use crate::shared::format::format_money;
use crate::shared::icons::icon;
use crate::shared::lookups::{LookupCache, LookupKind};
use leptos::prelude::*;

#[component]
pub fn OrderDetails(uuid: Option<String>, on_close: Callback<()>) -> impl IntoView {
    let vm = OrderFormVm::new(uuid);
    let lookups = use_context::<LookupCache>().expect("LookupCache not in context");
    let customer_options = lookups.options(LookupKind::Customers);
    let warehouse_options = lookups.options(LookupKind::Warehouses);
    let salesman_options = lookups.options(LookupKind::Salesmen);
    let product_options = lookups.options(LookupKind::Products);

    let totals = vm.totals();

    let title = move || {
        if vm.is_new() {
            "New order".to_string()
        } else {
            let order_no = vm.order_no.get();
            if order_no.is_empty() {
                "Order".to_string()
            } else {
                format!("Order {order_no}")
            }
        }
    };

    view! {
        <div class="page details-page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{title}</h1>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        disabled=move || vm.saving.get()
                        on:click=move |_| vm.save(on_close)
                    >
                        {move || if vm.saving.get() { "Saving..." } else { "Save" }}
                    </button>
                    <button
                        class="button button--secondary"
                        on:click=move |_| on_close.run(())
                    >
                        "Cancel"
                    </button>
                </div>
            </div>

            <Show when=move || !vm.errors.get().is_empty()>
                <div class="form-errors">
                    {move || vm.errors.get().into_iter().map(|e| view! {
                        <div class="form-errors__item">{e}</div>
                    }).collect_view()}
                </div>
            </Show>

            <div class="form">
                <div class="form-row">
                    <div class="form-group">
                        <label>"Customer *"</label>
                        <select
                            prop:value=move || vm.customer_uuid.get()
                            on:change=move |ev| vm.customer_uuid.set(event_target_value(&ev))
                        >
                            <option value="">"(select)"</option>
                            {move || customer_options.get().into_iter().map(|o| view! {
                                <option value=o.uuid.clone()>{o.name.clone()}</option>
                            }).collect_view()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label>"Date"</label>
                        <input
                            type="date"
                            prop:value=move || vm.order_date.get()
                            on:input=move |ev| vm.order_date.set(event_target_value(&ev))
                        />
                    </div>
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label>"Warehouse"</label>
                        <select
                            prop:value=move || vm.warehouse_uuid.get()
                            on:change=move |ev| vm.warehouse_uuid.set(event_target_value(&ev))
                        >
                            <option value="">"(select)"</option>
                            {move || warehouse_options.get().into_iter().map(|o| view! {
                                <option value=o.uuid.clone()>{o.name.clone()}</option>
                            }).collect_view()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label>"Salesman"</label>
                        <select
                            prop:value=move || vm.salesman_uuid.get()
                            on:change=move |ev| vm.salesman_uuid.set(event_target_value(&ev))
                        >
                            <option value="">"(select)"</option>
                            {move || salesman_options.get().into_iter().map(|o| view! {
                                <option value=o.uuid.clone()>{o.name.clone()}</option>
                            }).collect_view()}
                        </select>
                    </div>
                </div>
            </div>

            <div class="line-editor">
                <div class="line-editor__header">
                    <h2 class="line-editor__title">"Lines"</h2>
                    <button class="button button--secondary" on:click=move |_| vm.add_line()>
                        {icon("plus")}
                        "Add line"
                    </button>
                </div>
                <table class="table__data">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Product"</th>
                            <th class="table__header-cell" style="width: 110px;">"Quantity"</th>
                            <th class="table__header-cell" style="width: 130px;">"Unit price"</th>
                            <th class="table__header-cell" style="width: 110px;">"Line total"</th>
                            <th class="table__header-cell" style="width: 44px;"></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || vm.lines.get()
                            key=|line| line.row_id
                            children=move |line| {
                                let line_total = move || {
                                    let quantity: f64 =
                                        line.quantity.get().trim().parse().unwrap_or(0.0);
                                    let unit_price: f64 =
                                        line.unit_price.get().trim().parse().unwrap_or(0.0);
                                    format_money(quantity * unit_price)
                                };
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">
                                            <select
                                                prop:value=move || line.product_uuid.get()
                                                on:change=move |ev| {
                                                    line.product_uuid.set(event_target_value(&ev))
                                                }
                                            >
                                                <option value="">"(select)"</option>
                                                {move || product_options.get().into_iter().map(|o| view! {
                                                    <option value=o.uuid.clone()>{o.name.clone()}</option>
                                                }).collect_view()}
                                            </select>
                                        </td>
                                        <td class="table__cell">
                                            <input
                                                type="number"
                                                min="0"
                                                step="any"
                                                prop:value=move || line.quantity.get()
                                                on:input=move |ev| {
                                                    line.quantity.set(event_target_value(&ev))
                                                }
                                            />
                                        </td>
                                        <td class="table__cell">
                                            <input
                                                type="number"
                                                min="0"
                                                step="0.01"
                                                prop:value=move || line.unit_price.get()
                                                on:input=move |ev| {
                                                    line.unit_price.set(event_target_value(&ev))
                                                }
                                            />
                                        </td>
                                        <td class="table__cell table__cell--number">{line_total}</td>
                                        <td class="table__cell table__cell--action">
                                            <button
                                                class="button button--icon"
                                                title="Remove line"
                                                on:click=move |_| vm.remove_line(line.row_id)
                                            >
                                                {icon("delete")}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
                <div class="totals-row">
                    <div class="totals-row__item">
                        <span class="totals-row__label">"Gross"</span>
                        <span class="totals-row__value">{move || format_money(totals.get().gross)}</span>
                    </div>
                    <div class="totals-row__item">
                        <span class="totals-row__label">"VAT"</span>
                        <span class="totals-row__value">{move || format_money(totals.get().vat)}</span>
                    </div>
                    <div class="totals-row__item">
                        <span class="totals-row__label">"Net"</span>
                        <span class="totals-row__value">{move || format_money(totals.get().net)}</span>
                    </div>
                    <div class="totals-row__item totals-row__item--final">
                        <span class="totals-row__label">"Total"</span>
                        <span class="totals-row__value">{move || format_money(totals.get().final_total)}</span>
                    </div>
                </div>
            </div>
        </div>
    }
}
