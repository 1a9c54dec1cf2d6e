//! Deletion Listeners
//!
//! How widgets that depend on other resources react to a [`DeletionNotice`].

use leptos::prelude::*;

use crate::events::DeletionNotice;
use crate::models::{Resource, ResourceKind};
use crate::store::{count_resources, PageStateStoreFields, PageStore};

/// Drop the deleted topic from the topic select.
///
/// Returns how many choices are left, or `None` if the notice did not
/// concern a listed topic.
pub fn remove_topic_choice(choices: &mut Vec<String>, notice: &DeletionNotice) -> Option<usize> {
    if notice.resource_type != ResourceKind::Topic {
        return None;
    }
    let index = choices.iter().position(|c| *c == notice.resource_name)?;
    choices.remove(index);
    Some(choices.len())
}

/// The master container stays while any resource container is left
pub fn master_container_needed(resources: &[Resource]) -> bool {
    count_resources(resources) > 0
}

/// The reorder form stays while the question list has rows
pub fn reorder_form_needed(questions: &[Resource]) -> bool {
    !questions.is_empty()
}

// ========================
// Store Reactions
// ========================

/// Topic select listener: drop the topic, and the section with its last choice
pub fn forget_topic_choice(store: &PageStore, notice: &DeletionNotice) {
    let remaining = store
        .topic_choices()
        .try_update(|choices| remove_topic_choice(choices, notice))
        .flatten();
    if remaining == Some(0) {
        store.new_question_sets_visible().set(false);
    }
}

/// Master container listener
pub fn hide_empty_master(store: &PageStore) {
    if !store.resources().with_untracked(|r| master_container_needed(r)) {
        store.master_visible().set(false);
    }
}

/// Question list listener
pub fn hide_empty_reorder(store: &PageStore) {
    if !store.questions().with_untracked(|q| reorder_form_needed(q)) {
        store.reorder_visible().set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventBus;
    use crate::models::{PageData, ReorderSetup, ResourceId};
    use crate::store::{store_remove_resource, PageState};
    use reactive_stores::Store;

    fn notice(name: &str, kind: ResourceKind) -> DeletionNotice {
        DeletionNotice { resource_name: name.to_string(), resource_type: kind }
    }

    #[test]
    fn test_topic_choice_removed_once() {
        let mut choices = vec!["Algebra".to_string(), "Geometry".to_string(), "Algebra".to_string()];
        assert_eq!(remove_topic_choice(&mut choices, &notice("Algebra", ResourceKind::Topic)), Some(2));
        assert_eq!(choices, vec!["Geometry", "Algebra"]);
    }

    #[test]
    fn test_other_kinds_and_unknown_names_ignored() {
        let mut choices = vec!["Algebra".to_string()];
        assert_eq!(remove_topic_choice(&mut choices, &notice("Algebra", ResourceKind::QuestionSet)), None);
        assert_eq!(remove_topic_choice(&mut choices, &notice("Trig", ResourceKind::Topic)), None);
        assert_eq!(remove_topic_choice(&mut choices, &notice("Algebra", ResourceKind::Topic)), Some(0));
        assert!(choices.is_empty());
    }

    #[test]
    fn test_containers_needed() {
        let set = Resource {
            id: ResourceId(1),
            name: "Set".into(),
            kind: ResourceKind::QuestionSet,
            delete_url: "/set/1/delete".into(),
            children: Vec::new(),
        };
        assert!(!master_container_needed(&[]));
        assert!(master_container_needed(std::slice::from_ref(&set)));
        assert!(!reorder_form_needed(&[]));
        assert!(reorder_form_needed(&[set]));
    }

    fn resource(id: u32, kind: ResourceKind, name: &str, children: Vec<Resource>) -> Resource {
        Resource {
            id: ResourceId(id),
            name: name.to_string(),
            kind,
            delete_url: format!("/{}/{}/delete", kind, id),
            children,
        }
    }

    /// Store plus a bus wired the way the page widgets wire it
    fn page() -> (PageStore, EventBus<DeletionNotice>) {
        let data = PageData {
            resources: vec![resource(1, ResourceKind::Topic, "Algebra", vec![
                resource(5, ResourceKind::QuestionSet, "Week 1", vec![]),
            ])],
            questions: vec![
                resource(10, ResourceKind::Question, "Q1", vec![]),
                resource(11, ResourceKind::Question, "Q2", vec![]),
            ],
            reorder: Some(ReorderSetup {
                action: "/set/5/reorder".into(),
                input_names: vec!["order-0".into(), "order-1".into()],
            }),
            topic_choices: vec!["Algebra".into()],
            ..Default::default()
        };
        let store = Store::new(PageState::from_page_data(&data));
        let bus = EventBus::new();
        bus.subscribe(move |n: &DeletionNotice| forget_topic_choice(&store, n));
        bus.subscribe(move |_: &DeletionNotice| hide_empty_master(&store));
        bus.subscribe(move |_: &DeletionNotice| hide_empty_reorder(&store));
        (store, bus)
    }

    /// What the delete handler does on success: drop the container, then notify
    fn delete(store: &PageStore, bus: &EventBus<DeletionNotice>, kind: ResourceKind, id: u32, name: &str) {
        assert!(store_remove_resource(store, kind, ResourceId(id)));
        bus.publish(&notice(name, kind));
    }

    #[test]
    fn test_reorder_form_hidden_with_last_question() {
        let (store, bus) = page();
        assert!(store.reorder_visible().get_untracked());

        delete(&store, &bus, ResourceKind::Question, 10, "Q1");
        assert_eq!(store.questions().with_untracked(|q| q.len()), 1);
        assert!(store.reorder_visible().get_untracked());

        delete(&store, &bus, ResourceKind::Question, 11, "Q2");
        assert!(store.questions().with_untracked(|q| q.is_empty()));
        assert!(!store.reorder_visible().get_untracked());
        // Unrelated widgets untouched
        assert!(store.master_visible().get_untracked());
        assert!(store.new_question_sets_visible().get_untracked());
    }

    #[test]
    fn test_master_and_topic_section_removed_with_last_topic() {
        let (store, bus) = page();

        // Nested question set first; the topic keeps the master container alive
        delete(&store, &bus, ResourceKind::QuestionSet, 5, "Week 1");
        assert!(store.master_visible().get_untracked());
        assert_eq!(store.topic_choices().get_untracked(), vec!["Algebra"]);

        delete(&store, &bus, ResourceKind::Topic, 1, "Algebra");
        assert!(store.resources().with_untracked(|r| r.is_empty()));
        assert!(!store.master_visible().get_untracked());
        assert!(store.topic_choices().with_untracked(|c| c.is_empty()));
        assert!(!store.new_question_sets_visible().get_untracked());
        assert!(store.reorder_visible().get_untracked());
    }

    #[test]
    fn test_missing_container_not_removed() {
        let (store, _bus) = page();
        assert!(!store_remove_resource(&store, ResourceKind::Question, ResourceId(99)));
        // Same id, other kind
        assert!(!store_remove_resource(&store, ResourceKind::Topic, ResourceId(5)));
        assert_eq!(store.questions().with_untracked(|q| q.len()), 2);
    }
}
