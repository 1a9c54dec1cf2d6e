//! Resource List Component
//!
//! Master container of the profile page's topics and question sets.

use leptos::prelude::*;

use crate::components::ResourceContainer;
use crate::context::use_app_context;
use crate::dependents::hide_empty_master;
use crate::store::{use_page_store, PageStateStoreFields};

#[component]
pub fn ResourceList() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_page_store();

    // Last container gone: drop the master container too
    ctx.on_deletion(move |_| hide_empty_master(&store));

    view! {
        {move || store.master_visible().get().then(|| view! {
            <div id="resource-master-container" class="list-group">
                <For
                    each=move || store.resources().get()
                    key=|resource| (resource.kind, resource.id)
                    children=|resource| view! { <ResourceContainer resource=resource /> }
                />
            </div>
        })}
    }
}
