//! Snackbar/toast queue shared by every page.
//!
//! Errors, successes and warnings are all reported here; there are no
//! modal error dialogs. Messages dismiss themselves after a few seconds
//! or on click.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const AUTO_DISMISS_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Warning,
}

impl Severity {
    fn css_class(&self) -> &'static str {
        match self {
            Severity::Success => "snackbar__item snackbar__item--success",
            Severity::Error => "snackbar__item snackbar__item--error",
            Severity::Warning => "snackbar__item snackbar__item--warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}

#[derive(Clone, Copy)]
pub struct NotificationService {
    queue: RwSignal<Vec<Notification>>,
    next_id: RwSignal<u64>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(message.into(), Severity::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(message.into(), Severity::Error);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.push(message.into(), Severity::Warning);
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.retain(|n| n.id != id));
    }

    pub fn items(&self) -> Signal<Vec<Notification>> {
        self.queue.into()
    }

    fn push(&self, message: String, severity: Severity) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.queue.update(|q| {
            q.push(Notification {
                id,
                message,
                severity,
            })
        });

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            svc.dismiss(id);
        });
    }
}

/// Renders the queue in a fixed corner. Mounted once at the app root.
#[component]
pub fn SnackbarHost() -> impl IntoView {
    let svc = use_context::<NotificationService>().expect("NotificationService not in context");
    let items = svc.items();

    view! {
        <div class="snackbar">
            {move || {
                items
                    .get()
                    .into_iter()
                    .map(|n| {
                        let id = n.id;
                        view! {
                            <div class=n.severity.css_class() on:click=move |_| svc.dismiss(id)>
                                {n.message}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
