//! Resource Container Component
//!
//! One topic, question set or question with its delete form.
//! Topics collapse to hide their question sets.

use leptos::prelude::*;

use crate::components::DeleteForm;
use crate::models::{Resource, ResourceKind};
use crate::store::{find_resource, use_page_store, PageStateStoreFields};

#[component]
pub fn ResourceContainer(resource: Resource) -> impl IntoView {
    let store = use_page_store();

    let kind = resource.kind;
    let id = resource.id;
    let name = resource.name.clone();
    let collapsible = kind == ResourceKind::Topic;
    let (expanded, set_expanded) = signal(false);

    // Read from the store so nested deletions show up
    let children = move || {
        store.resources().with(|list| {
            find_resource(list, kind, id)
                .map(|r| r.children.clone())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="resource-container" data-name=name.clone() data-type=kind.as_str()>
            <div
                class="list-group-item"
                on:click=move |_| if collapsible { set_expanded.update(|v| *v = !*v) }
            >
                {collapsible.then(|| view! {
                    <span class=move || if expanded.get() {
                        "glyphicon glyphicon-chevron-down"
                    } else {
                        "glyphicon glyphicon-chevron-right"
                    }></span>
                })}
                <span class="resource-name">{name.clone()}</span>
                <DeleteForm resource=resource />
            </div>

            {move || (collapsible && expanded.get()).then(|| view! {
                <div class="resource-children">
                    <For
                        each=children
                        key=|child| (child.kind, child.id)
                        children=|child| view! { <ResourceContainer resource=child /> }.into_any()
                    />
                </div>
            })}
        </div>
    }
}
