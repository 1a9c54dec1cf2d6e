//! Question Authoring Page Behaviors
//!
//! Background deletion, drag-to-reorder and conditional form fields for the
//! quiz authoring pages.

mod app;
mod bootstrap;
mod components;
mod config;
mod context;
mod delete;
mod dependents;
mod error;
mod events;
mod feedback;
mod form;
mod http;
mod math_fields;
mod models;
mod page;
mod reorder;
mod store;
#[cfg(test)]
mod testing;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let data = bootstrap::load_page_data().unwrap_or_else(|err| {
        tracing::warn!(%err, "no usable page data, nothing to manage");
        models::PageData::default()
    });

    match bootstrap::mount_point() {
        Some(root) => leptos::mount::mount_to(root, move || view! { <App data=data /> }).forget(),
        None => mount_to_body(move || view! { <App data=data /> }),
    }
}
