//! Generic paginated list controller.
//!
//! Every list page in the console is the same machine: fetch a page,
//! render it, re-fetch on page change / filter submit / search, act on
//! rows. The controller owns that machine; pages only supply columns,
//! async sources and actions. The table component itself knows nothing
//! about any specific resource.
//!
//! Stale responses: requests are not cancelled, so each one carries a
//! sequence number issued per controller instance. A response is applied
//! only when its number is still the latest issued; a slow early request
//! can never overwrite a faster later one.

use crate::shared::api::ApiError;
use crate::shared::column_prefs;
use crate::shared::loading::LoadingService;
use crate::shared::notifications::NotificationService;
use contracts::shared::{FilterPayload, ListPage};
use leptos::prelude::*;
use std::collections::HashSet;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use wasm_bindgen_futures::spawn_local;

pub type FetchResult<R> = Result<ListPage<R>, ApiError>;
pub type FetchFuture<R> = Pin<Box<dyn Future<Output = FetchResult<R>>>>;

/// Page-specific async functions. `list` is mandatory; pages without
/// structured filters or free-text search simply leave those `None`.
pub struct ListSource<R> {
    /// `(page >= 1, page_size)` -> one page of rows.
    pub list: Arc<dyn Fn(usize, usize) -> FetchFuture<R> + Send + Sync>,
    /// Structured filter submission; receives only compacted (non-blank)
    /// values.
    pub filter_by: Option<Arc<dyn Fn(FilterPayload, usize) -> FetchFuture<R> + Send + Sync>>,
    /// Free-text search.
    pub search: Option<Arc<dyn Fn(String, usize) -> FetchFuture<R> + Send + Sync>>,
}

/// One table column. `render` is a pure row -> display-string function.
#[derive(Clone)]
pub struct ColumnDef<R> {
    pub key: &'static str,
    pub label: &'static str,
    pub width: Option<&'static str>,
    pub show_by_default: bool,
    pub render: Arc<dyn Fn(&R) -> String + Send + Sync>,
}

impl<R> ColumnDef<R> {
    pub fn new(
        key: &'static str,
        label: &'static str,
        render: impl Fn(&R) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            key,
            label,
            width: None,
            show_by_default: true,
            render: Arc::new(render),
        }
    }

    pub fn width(mut self, width: &'static str) -> Self {
        self.width = Some(width);
        self
    }

    pub fn hidden_by_default(mut self) -> Self {
        self.show_by_default = false;
        self
    }
}

/// `(key, show_by_default)` pairs for the preference merge.
pub fn column_defaults<R>(columns: &[ColumnDef<R>]) -> Vec<(&'static str, bool)> {
    columns.iter().map(|c| (c.key, c.show_by_default)).collect()
}

/// Per-row icon action (view/edit/delete/download). Receives the row data,
/// never an index.
#[derive(Clone)]
pub struct RowAction<R> {
    pub icon: &'static str,
    pub title: &'static str,
    pub on_click: Arc<dyn Fn(R) + Send + Sync>,
}

/// Page-level header button.
#[derive(Clone)]
pub struct HeaderAction {
    pub label: &'static str,
    pub icon: &'static str,
    pub primary: bool,
    pub on_click: Arc<dyn Fn() + Send + Sync>,
}

/// Entry of the header overflow ("three-dot") menu: exports, bulk status
/// toggles. Callbacks read rows or selected keys off the controller.
#[derive(Clone)]
pub struct MenuAction {
    pub label: &'static str,
    pub on_select: Arc<dyn Fn() + Send + Sync>,
}

/// Last-issued-wins guard for overlapping requests. Every fetch takes a
/// token from `issue`; a response is applied only while its token
/// `is_current`, so a slow early request cannot overwrite a later one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct RequestSeq(u64);

impl RequestSeq {
    fn issue(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    fn is_current(&self, token: u64) -> bool {
        self.0 == token
    }
}

/// Which request mode the controller is currently in. Page transitions
/// re-issue the same mode.
#[derive(Clone, Debug, PartialEq)]
pub enum ListQuery {
    Plain,
    Filtered(FilterPayload),
    Search(String),
}

pub struct ListConfig<R> {
    pub source: ListSource<R>,
    /// Default page size; also the size the empty-fallback state reports.
    pub page_size: usize,
    /// Identifying key of a row (`uuid`), used for selection and bulk
    /// actions.
    pub row_key: Arc<dyn Fn(&R) -> String + Send + Sync>,
    /// `localStorage` key for column visibility; `None` disables
    /// persistence.
    pub storage_key: Option<&'static str>,
}

pub struct ListController<R: Send + Sync + 'static> {
    pub rows: RwSignal<Vec<R>>,
    /// 1-based, as reported by the backend.
    pub current_page: RwSignal<usize>,
    pub total_pages: RwSignal<usize>,
    pub total_records: RwSignal<usize>,
    pub page_size: RwSignal<usize>,
    pub query: RwSignal<ListQuery>,
    pub selected: RwSignal<HashSet<String>>,
    pub visible_columns: RwSignal<HashSet<String>>,
    pub busy: RwSignal<bool>,
    seq: RwSignal<RequestSeq>,
    config: StoredValue<ListConfig<R>>,
    column_defaults: StoredValue<Vec<(&'static str, bool)>>,
    default_page_size: usize,
    notifications: NotificationService,
    loading: LoadingService,
}

impl<R: Send + Sync + 'static> Clone for ListController<R> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<R: Send + Sync + 'static> Copy for ListController<R> {}

impl<R: Clone + Send + Sync + 'static> ListController<R> {
    /// Build the controller and fetch the first page.
    pub fn new(config: ListConfig<R>, columns: &[ColumnDef<R>]) -> Self {
        let notifications =
            use_context::<NotificationService>().expect("NotificationService not in context");
        let loading = use_context::<LoadingService>().expect("LoadingService not in context");

        let defaults = column_defaults(columns);
        let stored = config.storage_key.and_then(column_prefs::load);
        let visible = column_prefs::resolve_visible(&defaults, stored);

        let default_page_size = config.page_size.max(1);
        let controller = Self {
            rows: RwSignal::new(Vec::new()),
            current_page: RwSignal::new(1),
            total_pages: RwSignal::new(1),
            total_records: RwSignal::new(0),
            page_size: RwSignal::new(default_page_size),
            query: RwSignal::new(ListQuery::Plain),
            selected: RwSignal::new(HashSet::new()),
            visible_columns: RwSignal::new(visible),
            busy: RwSignal::new(false),
            seq: RwSignal::new(RequestSeq::default()),
            config: StoredValue::new(config),
            column_defaults: StoredValue::new(defaults),
            default_page_size,
            notifications,
            loading,
        };
        controller.load_page(1);
        controller
    }

    /// External refresh counter: incrementing it re-fetches the current
    /// page (used after a mutation completes).
    pub fn bind_refresh(&self, refresh_key: Signal<u64>) {
        let controller = *self;
        Effect::new(move |prev: Option<u64>| {
            let key = refresh_key.get();
            if let Some(prev) = prev {
                if prev != key {
                    controller.refresh();
                }
            }
            key
        });
    }

    // ---- fetching -------------------------------------------------------

    pub fn load_page(&self, page: usize) {
        let page = page.max(1);
        let size = self.page_size.get_untracked();
        let query = self.query.get_untracked();
        let future = self.config.with_value(|cfg| match query {
            ListQuery::Filtered(filters) => match &cfg.source.filter_by {
                Some(filter_by) => filter_by(filters.compact(), size),
                None => (cfg.source.list)(page, size),
            },
            ListQuery::Search(text) => match &cfg.source.search {
                Some(search) => search(text, size),
                None => (cfg.source.list)(page, size),
            },
            ListQuery::Plain => (cfg.source.list)(page, size),
        });

        let mut seq = self.seq.get_untracked();
        let token = seq.issue();
        self.seq.set(seq);

        let controller = *self;
        controller.busy.set(true);
        controller.loading.begin();
        spawn_local(async move {
            let outcome = future.await;
            controller.loading.end();
            if !controller.seq.get_untracked().is_current(token) {
                // A newer request was issued while this one was in flight.
                return;
            }
            controller.busy.set(false);
            match outcome {
                Ok(page) => controller.apply_page(page),
                Err(e) => {
                    log::error!("list fetch failed: {e}");
                    controller
                        .notifications
                        .error(format!("Failed to load data: {e}"));
                    controller.page_size.set(controller.default_page_size);
                    controller.apply_page(ListPage::empty(controller.default_page_size));
                }
            }
        });
    }

    fn apply_page(&self, page: ListPage<R>) {
        self.rows.set(page.data);
        // The backend's page number is authoritative for what we display.
        self.current_page.set(page.current_page);
        self.total_pages.set(page.total_pages);
        self.total_records.set(page.total_records);
        self.selected.set(HashSet::new());
    }

    pub fn refresh(&self) {
        self.load_page(self.current_page.get_untracked());
    }

    pub fn set_page_size(&self, size: usize) {
        if size > 0 {
            self.page_size.set(size);
            self.load_page(1);
        }
    }

    pub fn apply_filters(&self, filters: FilterPayload) {
        if filters.is_empty() {
            self.clear_query();
            return;
        }
        self.query.set(ListQuery::Filtered(filters));
        self.load_page(1);
    }

    pub fn apply_search(&self, text: String) {
        let trimmed = text.trim().to_string();
        if trimmed.is_empty() {
            self.clear_query();
            return;
        }
        self.query.set(ListQuery::Search(trimmed));
        self.load_page(1);
    }

    pub fn clear_query(&self) {
        self.query.set(ListQuery::Plain);
        self.load_page(1);
    }

    // ---- selection ------------------------------------------------------

    pub fn row_key(&self, row: &R) -> String {
        self.config.with_value(|c| (c.row_key)(row))
    }

    pub fn toggle_selected(&self, key: String, on: bool) {
        self.selected.update(|s| {
            if on {
                s.insert(key);
            } else {
                s.remove(&key);
            }
        });
    }

    pub fn select_all_on_page(&self, on: bool) {
        if on {
            let keys: Vec<String> = self
                .rows
                .with_untracked(|rows| rows.iter().map(|r| self.row_key(r)).collect());
            self.selected.update(|s| s.extend(keys));
        } else {
            self.selected.set(HashSet::new());
        }
    }

    /// Selected rows' keys in current-page order. Bulk actions always see
    /// keys from the page on display, never from a previous page (the
    /// selection is cleared whenever a page is applied).
    pub fn selected_keys(&self) -> Vec<String> {
        let selected = self.selected.get_untracked();
        self.rows.with_untracked(|rows| {
            keys_in_page_order(rows, &selected, |r| self.row_key(r))
        })
    }

    // ---- columns --------------------------------------------------------

    pub fn is_column_visible(&self, key: &str) -> bool {
        self.visible_columns.with(|v| v.contains(key))
    }

    pub fn toggle_column(&self, key: &str) {
        self.visible_columns.update(|v| {
            if !v.remove(key) {
                v.insert(key.to_string());
            }
        });
        let storage_key = self.config.with_value(|c| c.storage_key);
        if let Some(storage_key) = storage_key {
            let stored = self.column_defaults.with_value(|defaults| {
                self.visible_columns
                    .with_untracked(|v| column_prefs::to_stored(defaults, v))
            });
            column_prefs::store(storage_key, &stored);
        }
    }
}

/// Keys of the selected rows, in the order they appear on the page.
fn keys_in_page_order<R>(
    rows: &[R],
    selected: &HashSet<String>,
    key_of: impl Fn(&R) -> String,
) -> Vec<String> {
    rows.iter()
        .map(key_of)
        .filter(|k| selected.contains(k))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_response_loses_to_the_latest_issued_request() {
        let mut seq = RequestSeq::default();
        let first = seq.issue();
        assert!(seq.is_current(first));

        // A second request goes out before the first one resolves.
        let second = seq.issue();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));

        // Each new issue invalidates everything before it.
        let third = seq.issue();
        assert!(!seq.is_current(second));
        assert!(seq.is_current(third));
    }

    #[test]
    fn bulk_selection_is_scoped_to_the_displayed_page() {
        let rows = vec!["u0", "u1", "u2", "u3"];
        let mut selected = HashSet::new();
        selected.insert("u0".to_string());
        selected.insert("u2".to_string());
        // A leftover key from another page must not leak through.
        selected.insert("other-page-uuid".to_string());

        let keys = keys_in_page_order(&rows, &selected, |r| r.to_string());
        assert_eq!(keys, vec!["u0".to_string(), "u2".to_string()]);
    }

    #[test]
    fn selection_keeps_page_order_not_insertion_order() {
        let rows = vec!["a", "b", "c"];
        let mut selected = HashSet::new();
        selected.insert("c".to_string());
        selected.insert("a".to_string());

        let keys = keys_in_page_order(&rows, &selected, |r| r.to_string());
        assert_eq!(keys, vec!["a".to_string(), "c".to_string()]);
    }
}
