//! Authoring Page App
//!
//! Root component: provides the page store and services, then mounts the
//! widgets the server rendered data for.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{MathAnswerEditor, ReorderList, ResourceList, TopicChoices};
use crate::context::AppContext;
use crate::events::EventBus;
use crate::models::PageData;
use crate::store::PageState;

#[component]
pub fn App(data: PageData) -> impl IntoView {
    let PageData { csrf_token, reorder, math_answers, config, .. } = data.clone();

    provide_context(Store::new(PageState::from_page_data(&data)));
    provide_context(AppContext::new(EventBus::new(), config, csrf_token));

    tracing::info!(
        resources = data.resources.len(),
        questions = data.questions.len(),
        reorder = reorder.is_some(),
        "page behaviors mounted"
    );

    view! {
        <ResourceList />
        <TopicChoices />
        {reorder.map(|setup| view! { <ReorderList setup=setup /> })}
        <MathAnswerEditor answers=math_answers />
    }
}
