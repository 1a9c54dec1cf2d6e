//! Delete Form Component
//!
//! Delete form of a resource container, submitted in the background
//! instead of navigating.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::delete::DeleteHandler;
use crate::form::{FormFields, CSRF_FIELD};
use crate::http::FetchTransport;
use crate::models::Resource;
use crate::page::BrowserPage;
use crate::store::use_page_store;

#[component]
pub fn DeleteForm(resource: Resource) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_page_store();

    let action = resource.delete_url.clone();
    let csrf_token = ctx.csrf_token.clone();
    let resource = StoredValue::new(resource);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let ctx = ctx.clone();
        let resource = resource.get_value();

        spawn_local(async move {
            let handler = DeleteHandler::new(FetchTransport, ctx.bus.clone(), ctx.config.clone());
            let fields = FormFields::with_csrf(&ctx.csrf_token);
            handler.submit(&resource, fields, &BrowserPage::new(store)).await;
        });
    };

    view! {
        <form class="delete-form" method="post" action=action on:submit=on_submit>
            <input type="hidden" name=CSRF_FIELD value=csrf_token />
            <button type="submit" class="delete-btn" title="Delete">"×"</button>
        </form>
    }
}
