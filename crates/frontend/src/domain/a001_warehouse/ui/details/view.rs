use super::view_model::WarehouseFormVm;
use crate::shared::lookups::{LookupCache, LookupKind};
use leptos::prelude::*;

#[component]
pub fn WarehouseDetails(uuid: Option<String>, on_close: Callback<()>) -> impl IntoView {
    let vm = WarehouseFormVm::new(uuid);
    let lookups = use_context::<LookupCache>().expect("LookupCache not in context");
    let region_options = lookups.options(LookupKind::Regions);

    let title = if vm.is_new() {
        "New warehouse"
    } else {
        "Edit warehouse"
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
                        <label>"Name *"</label>
                        <input
                            type="text"
                            prop:value=move || vm.name.get()
                            on:input=move |ev| vm.name.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label>"Code *"</label>
                        <input
                            type="text"
                            prop:value=move || vm.code.get()
                            on:input=move |ev| vm.code.set(event_target_value(&ev))
                        />
                    </div>
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label>"Region"</label>
                        <select
                            prop:value=move || vm.region_id.get()
                            on:change=move |ev| vm.region_id.set(event_target_value(&ev))
                        >
                            <option value="">"(none)"</option>
                            {move || region_options.get().into_iter().map(|o| view! {
                                <option value=o.uuid.clone()>{o.name.clone()}</option>
                            }).collect_view()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label>"Phone"</label>
                        <input
                            type="text"
                            prop:value=move || vm.phone.get()
                            on:input=move |ev| vm.phone.set(event_target_value(&ev))
                        />
                    </div>
                </div>
                <div class="form-row">
                    <div class="form-group form-group--wide">
                        <label>"Address"</label>
                        <input
                            type="text"
                            prop:value=move || vm.address.get()
                            on:input=move |ev| vm.address.set(event_target_value(&ev))
                        />
                    </div>
                </div>
            </div>
        </div>
    }
}
