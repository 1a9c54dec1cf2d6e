//! Frontend Models
//!
//! Data structures rendered by the server into the page bootstrap JSON.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::UiConfig;

/// Identifier of a deletable/reorderable resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(pub u32);

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Resource type tag carried by containers and deletion notices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Topic,
    QuestionSet,
    Question,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Topic => "topic",
            ResourceKind::QuestionSet => "question_set",
            ResourceKind::Question => "question",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rendered resource container (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: ResourceId,
    pub name: String,
    pub kind: ResourceKind,
    /// Action URL of the container's delete form
    pub delete_url: String,
    /// Nested resources (question sets under a topic)
    #[serde(default)]
    pub children: Vec<Resource>,
}

/// Reorder form of a question set page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReorderSetup {
    pub action: String,
    /// Names of the hidden order inputs, in form order
    pub input_names: Vec<String>,
}

/// One math answer entry of the question editor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MathAnswerSetup {
    #[serde(default)]
    pub units: String,
    #[serde(default)]
    pub units_given: Option<bool>,
    #[serde(default)]
    pub accuracy: String,
    #[serde(default)]
    pub accuracy_degree: String,
}

/// Everything the server hands to the page behaviors
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageData {
    pub csrf_token: String,
    /// Topic/question set containers of the profile page
    pub resources: Vec<Resource>,
    /// Question list of a question set page, in display order
    pub questions: Vec<Resource>,
    pub reorder: Option<ReorderSetup>,
    /// Options of the topic select in the new question set form
    pub topic_choices: Vec<String>,
    pub math_answers: Vec<MathAnswerSetup>,
    pub config: UiConfig,
}
