//! Topic Choices Component
//!
//! Topic select of the new question set section. Deleted topics disappear
//! from it; with no topic left the whole section goes.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::dependents::forget_topic_choice;
use crate::store::{use_page_store, PageStateStoreFields};

#[component]
pub fn TopicChoices() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_page_store();

    ctx.on_deletion(move |notice| forget_topic_choice(&store, notice));

    view! {
        {move || store.new_question_sets_visible().get().then(|| view! {
            <div id="new-question-sets">
                <label for="topic-choices">"Topic"</label>
                <select id="topic-choices" class="topic-choices" name="topic">
                    <For
                        each=move || store.topic_choices().get().into_iter().enumerate()
                        key=|(index, name)| (*index, name.clone())
                        children=|(_, name)| view! { <option value=name.clone()>{name.clone()}</option> }
                    />
                </select>
            </div>
        })}
    }
}
