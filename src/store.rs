//! Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! Holds everything the server rendered that the behaviors can change.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{PageData, Resource, ResourceId, ResourceKind};

/// Live page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct PageState {
    /// Topic containers (question sets nested inside)
    pub resources: Vec<Resource>,
    /// Question list of a question set page, in display order
    pub questions: Vec<Resource>,
    /// Options of the topic select in the new question set form
    pub topic_choices: Vec<String>,
    /// New question set section (gone once no topic is left to pick)
    pub new_question_sets_visible: bool,
    /// Master container around all resource containers
    pub master_visible: bool,
    /// Reorder form of the question list
    pub reorder_visible: bool,
}

impl PageState {
    pub fn from_page_data(data: &PageData) -> Self {
        Self {
            resources: data.resources.clone(),
            questions: data.questions.clone(),
            topic_choices: data.topic_choices.clone(),
            new_question_sets_visible: !data.topic_choices.is_empty(),
            master_visible: !data.resources.is_empty(),
            reorder_visible: data.reorder.is_some() && !data.questions.is_empty(),
        }
    }
}

/// Type alias for the store
pub type PageStore = Store<PageState>;

/// Get the page store from context
pub fn use_page_store() -> PageStore {
    expect_context::<PageStore>()
}

// ========================
// Helper Functions
// ========================

/// Remove the container `kind`/`id` wherever it is nested
pub fn remove_resource(list: &mut Vec<Resource>, kind: ResourceKind, id: ResourceId) -> Option<Resource> {
    if let Some(index) = list.iter().position(|r| r.kind == kind && r.id == id) {
        return Some(list.remove(index));
    }
    list.iter_mut().find_map(|r| remove_resource(&mut r.children, kind, id))
}

pub fn find_resource(list: &[Resource], kind: ResourceKind, id: ResourceId) -> Option<&Resource> {
    list.iter().find_map(|r| {
        if r.kind == kind && r.id == id {
            Some(r)
        } else {
            find_resource(&r.children, kind, id)
        }
    })
}

/// Number of containers, nested ones included
pub fn count_resources(list: &[Resource]) -> usize {
    list.iter().map(|r| 1 + count_resources(&r.children)).sum()
}

/// Remove a container from the store; `false` if it was not rendered
pub fn store_remove_resource(store: &PageStore, kind: ResourceKind, id: ResourceId) -> bool {
    let removed = if kind == ResourceKind::Question {
        store.questions().try_update(|questions| {
            let before = questions.len();
            questions.retain(|q| q.id != id);
            questions.len() != before
        })
    } else {
        store.resources().try_update(|list| remove_resource(list, kind, id).is_some())
    };
    removed.unwrap_or(false)
}
