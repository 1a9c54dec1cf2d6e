//! UI Components
//!
//! Leptos widgets of the authoring pages.

mod delete_form;
mod math_answer;
mod reorder_list;
mod resource_container;
mod resource_list;
mod topic_choices;

pub use delete_form::DeleteForm;
pub use math_answer::MathAnswerEditor;
pub use reorder_list::ReorderList;
pub use resource_container::ResourceContainer;
pub use resource_list::ResourceList;
pub use topic_choices::TopicChoices;
