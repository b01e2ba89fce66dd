//! Form state for the order entry tab: header fields, the editable line
//! grid and the live totals row.

use crate::domain::a006_order::model;
use crate::shared::loading::LoadingService;
use crate::shared::lookups::{LookupCache, LookupKind};
use crate::shared::notifications::NotificationService;
use crate::shared::refresh::RefreshBus;
use contracts::domain::a006_order::{OrderDto, OrderLine};
use contracts::shared::{compute_totals, DocLine, DocumentTotals, FinalTotalRule, TaxRule};
use leptos::prelude::*;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;

/// One editable grid row. `row_id` is a client-side key only; it never
/// goes to the backend.
#[derive(Clone, Copy)]
pub struct LineEdit {
    pub row_id: Uuid,
    pub product_uuid: RwSignal<String>,
    pub quantity: RwSignal<String>,
    pub unit_price: RwSignal<String>,
}

impl LineEdit {
    fn empty() -> Self {
        Self {
            row_id: Uuid::new_v4(),
            product_uuid: RwSignal::new(String::new()),
            quantity: RwSignal::new("1".to_string()),
            unit_price: RwSignal::new(String::new()),
        }
    }

    fn from_line(line: &OrderLine) -> Self {
        Self {
            row_id: Uuid::new_v4(),
            product_uuid: RwSignal::new(line.product_uuid.clone()),
            quantity: RwSignal::new(trim_number(line.quantity)),
            unit_price: RwSignal::new(format!("{:.2}", line.unit_price)),
        }
    }
}

fn trim_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

/// Parse one grid row into a wire line. Errors name the row by its
/// 1-based position.
pub fn parse_line(
    position: usize,
    product_uuid: &str,
    quantity: &str,
    unit_price: &str,
) -> Result<OrderLine, String> {
    if product_uuid.is_empty() {
        return Err(format!("Line {position}: product is required"));
    }
    let quantity: f64 = quantity
        .trim()
        .parse()
        .map_err(|_| format!("Line {position}: quantity is not a number"))?;
    if quantity <= 0.0 {
        return Err(format!("Line {position}: quantity must be positive"));
    }
    let unit_price: f64 = unit_price
        .trim()
        .parse()
        .map_err(|_| format!("Line {position}: unit price is not a number"))?;
    if unit_price < 0.0 {
        return Err(format!("Line {position}: unit price cannot be negative"));
    }
    Ok(OrderLine {
        product_uuid: product_uuid.to_string(),
        product_name: None,
        quantity,
        unit_price,
        vat: None,
    })
}

/// Header-level validation, applied after the lines parsed.
pub fn validate_header(customer_uuid: &str, order_date: &str, line_count: usize) -> Vec<String> {
    let mut errors = Vec::new();
    if customer_uuid.is_empty() {
        errors.push("Customer is required".to_string());
    }
    if contracts::shared::dates::parse_iso_date(order_date).is_err() {
        errors.push("Order date is invalid".to_string());
    }
    if line_count == 0 {
        errors.push("At least one line is required".to_string());
    }
    errors
}

#[derive(Clone, Copy)]
pub struct OrderFormVm {
    uuid: StoredValue<Option<String>>,
    pub order_no: RwSignal<String>,
    pub order_date: RwSignal<String>,
    pub customer_uuid: RwSignal<String>,
    pub warehouse_uuid: RwSignal<String>,
    pub salesman_uuid: RwSignal<String>,
    pub lines: RwSignal<Vec<LineEdit>>,
    pub errors: RwSignal<Vec<String>>,
    pub saving: RwSignal<bool>,
    notifications: NotificationService,
    loading: LoadingService,
    lookups: LookupCache,
    refresh_bus: RefreshBus,
}

impl OrderFormVm {
    pub fn new(uuid: Option<String>) -> Self {
        let lookups = use_context::<LookupCache>().expect("LookupCache not in context");
        lookups.ensure_loaded(LookupKind::Customers);
        lookups.ensure_loaded(LookupKind::Warehouses);
        lookups.ensure_loaded(LookupKind::Salesmen);
        lookups.ensure_loaded(LookupKind::Products);

        let today = chrono::Local::now().format("%Y-%m-%d").to_string();
        let vm = Self {
            uuid: StoredValue::new(uuid.clone()),
            order_no: RwSignal::new(String::new()),
            order_date: RwSignal::new(today),
            customer_uuid: RwSignal::new(String::new()),
            warehouse_uuid: RwSignal::new(String::new()),
            salesman_uuid: RwSignal::new(String::new()),
            lines: RwSignal::new(vec![LineEdit::empty()]),
            errors: RwSignal::new(Vec::new()),
            saving: RwSignal::new(false),
            notifications: use_context::<NotificationService>()
                .expect("NotificationService not in context"),
            loading: use_context::<LoadingService>().expect("LoadingService not in context"),
            lookups,
            refresh_bus: use_context::<RefreshBus>().expect("RefreshBus not in context"),
        };
        if let Some(uuid) = uuid {
            vm.load(uuid);
        }
        vm
    }

    pub fn is_new(&self) -> bool {
        self.uuid.with_value(|u| u.is_none())
    }

    fn load(self, uuid: String) {
        self.loading.begin();
        spawn_local(async move {
            let result = model::fetch(&uuid).await;
            self.loading.end();
            match result {
                Ok(order) => {
                    self.order_no.set(order.order_no);
                    if let Some(date) = order.order_date {
                        // Date inputs want the bare date part.
                        let date = date.split('T').next().unwrap_or(&date).to_string();
                        self.order_date.set(date);
                    }
                    self.customer_uuid.set(order.customer.uuid);
                    // The row carries warehouse/salesman names only; resolve
                    // the ids from the loaded options or the PUT would blank
                    // both assignments.
                    if let Some(name) = order.warehouse_name {
                        if let Some(uuid) = self.lookups.uuid_for_name(LookupKind::Warehouses, &name)
                        {
                            self.warehouse_uuid.set(uuid);
                        }
                    }
                    if let Some(name) = order.salesman_name {
                        if let Some(uuid) = self.lookups.uuid_for_name(LookupKind::Salesmen, &name) {
                            self.salesman_uuid.set(uuid);
                        }
                    }
                    let line_edits: Vec<LineEdit> =
                        order.lines.iter().map(LineEdit::from_line).collect();
                    self.lines.set(if line_edits.is_empty() {
                        vec![LineEdit::empty()]
                    } else {
                        line_edits
                    });
                }
                Err(e) => {
                    log::error!("order load failed: {e}");
                    self.notifications.error(format!("Failed to load order: {e}"));
                }
            }
        });
    }

    pub fn add_line(&self) {
        self.lines.update(|lines| lines.push(LineEdit::empty()));
    }

    pub fn remove_line(&self, row_id: Uuid) {
        self.lines.update(|lines| lines.retain(|l| l.row_id != row_id));
    }

    /// Live totals over whatever currently parses; rows that do not parse
    /// yet simply contribute nothing.
    pub fn totals(&self) -> Signal<DocumentTotals> {
        let lines = self.lines;
        Signal::derive(move || {
            let doc_lines: Vec<DocLine> = lines
                .get()
                .iter()
                .filter_map(|l| {
                    let quantity: f64 = l.quantity.get().trim().parse().ok()?;
                    let unit_price: f64 = l.unit_price.get().trim().parse().ok()?;
                    Some(DocLine::new(quantity, unit_price))
                })
                .collect();
            compute_totals(&doc_lines, TaxRule::STANDARD, FinalTotalRule::GrossPlusVat)
        })
    }

    fn to_dto(&self) -> Result<OrderDto, Vec<String>> {
        let mut parsed = Vec::new();
        let mut errors = Vec::new();
        for (index, line) in self.lines.get_untracked().iter().enumerate() {
            match parse_line(
                index + 1,
                &line.product_uuid.get_untracked(),
                &line.quantity.get_untracked(),
                &line.unit_price.get_untracked(),
            ) {
                Ok(line) => parsed.push(line),
                Err(e) => errors.push(e),
            }
        }
        let customer_uuid = self.customer_uuid.get_untracked();
        let order_date = self.order_date.get_untracked();
        errors.extend(validate_header(&customer_uuid, &order_date, parsed.len()));
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(OrderDto {
            uuid: self.uuid.with_value(|u| u.clone()),
            customer_uuid,
            warehouse_uuid: self.warehouse_uuid.get_untracked(),
            salesman_uuid: self.salesman_uuid.get_untracked(),
            order_date,
            lines: parsed,
        })
    }

    pub fn save(&self, on_saved: Callback<()>) {
        let dto = match self.to_dto() {
            Ok(dto) => dto,
            Err(errors) => {
                self.errors.set(errors);
                return;
            }
        };
        self.errors.set(Vec::new());

        let vm = *self;
        vm.saving.set(true);
        spawn_local(async move {
            let result = model::save(&dto).await;
            vm.saving.set(false);
            match result {
                Ok(saved) => {
                    vm.notifications
                        .success(format!("Order {} saved", saved.order_no));
                    vm.refresh_bus.notify("a006_order");
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("order save failed: {e}");
                    vm.notifications.error(format!("Failed to save order: {e}"));
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_line_happy_path() {
        let line = parse_line(1, "p1", "2", "10.50").unwrap();
        assert_eq!(line.product_uuid, "p1");
        assert!((line.quantity - 2.0).abs() < f64::EPSILON);
        assert!((line.unit_price - 10.5).abs() < f64::EPSILON);
        assert_eq!(line.vat, None);
    }

    #[test]
    fn parse_line_rejects_bad_input() {
        assert!(parse_line(1, "", "2", "10").is_err());
        assert!(parse_line(2, "p1", "0", "10").unwrap_err().contains("Line 2"));
        assert!(parse_line(3, "p1", "-1", "10").is_err());
        assert!(parse_line(4, "p1", "abc", "10").is_err());
        assert!(parse_line(5, "p1", "1", "-5").is_err());
    }

    #[test]
    fn header_requires_customer_date_and_lines() {
        let errors = validate_header("", "not-a-date", 0);
        assert_eq!(errors.len(), 3);
        assert!(validate_header("c1", "2026-08-26", 3).is_empty());
    }
}
