use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::loading::{LoadingOverlay, LoadingService};
use crate::shared::lookups::LookupCache;
use crate::shared::notifications::{NotificationService, SnackbarHost};
use crate::shared::refresh::RefreshBus;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Session-wide services live in context; pages never construct their own.
    provide_context(AppGlobalContext::new());
    provide_context(NotificationService::new());
    provide_context(LoadingService::new());
    provide_context(LookupCache::new());
    provide_context(RefreshBus::new());

    view! {
        <Shell />
        <SnackbarHost />
        <LoadingOverlay />
    }
}
