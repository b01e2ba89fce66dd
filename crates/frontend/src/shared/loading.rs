//! Global loading flag. Counter-based so overlapping requests keep the
//! spinner up until the last one settles.

use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct LoadingService {
    active: RwSignal<usize>,
}

impl LoadingService {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(0),
        }
    }

    pub fn begin(&self) {
        self.active.update(|n| *n += 1);
    }

    pub fn end(&self) {
        self.active.update(|n| *n = n.saturating_sub(1));
    }

    pub fn is_busy(&self) -> Signal<bool> {
        let active = self.active;
        Signal::derive(move || active.get() > 0)
    }
}

#[component]
pub fn LoadingOverlay() -> impl IntoView {
    let svc = use_context::<LoadingService>().expect("LoadingService not in context");
    let busy = svc.is_busy();

    view! {
        <Show when=move || busy.get()>
            <div class="loading-overlay">
                <div class="loading-overlay__spinner"></div>
            </div>
        </Show>
    }
}
