//! Reorder List Component
//!
//! Sortable question list of a question set with its reorder form.
//! Dragging only changes the displayed order; the form submit sends it.

use leptos::prelude::*;
use leptos::task::spawn_local;

use leptos_sortable::*;

use crate::components::ResourceContainer;
use crate::context::use_app_context;
use crate::dependents::hide_empty_reorder;
use crate::feedback::{Feedback, FeedbackState, TimeoutScheduler};
use crate::form::CSRF_FIELD;
use crate::http::FetchTransport;
use crate::models::{ReorderSetup, ResourceId};
use crate::page::BrowserPage;
use crate::reorder::{ReorderForm, ReorderHandler};
use crate::store::{use_page_store, PageStateStoreFields};

#[component]
pub fn ReorderList(setup: ReorderSetup) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_page_store();

    let form = RwSignal::new(ReorderForm::from_setup(&setup, &ctx.csrf_token));
    let (feedback_state, set_feedback_state) = signal(FeedbackState::default());
    let feedback = StoredValue::new_local(Feedback::new(
        TimeoutScheduler,
        ctx.config.feedback_timeout(),
        move |state| set_feedback_state.set(state),
    ));

    // The question list emptied by deletions: nothing left to reorder
    ctx.on_deletion(move |_| hide_empty_reorder(&store));

    let sort = create_sort_signals();
    bind_global_mouseup(sort, move |dragged, target| {
        store.questions().update(|questions| {
            if move_to(questions, |q| q.id.0, dragged, target) {
                tracing::debug!(dragged, ?target, "question moved");
            }
        });
    });

    let config = ctx.config.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let order: Vec<ResourceId> = store.questions().with_untracked(|q| q.iter().map(|q| q.id).collect());
        let handler = ReorderHandler::new(FetchTransport, config.clone());

        match form.try_update(|f| f.prepare(&order)) {
            Some(Ok(fields)) => {
                let action = form.with_untracked(|f| f.action.clone());
                let feedback = feedback.get_value();
                spawn_local(async move {
                    handler.send(&action, &fields, &feedback).await;
                });
            }
            Some(Err(_)) => handler.abort(&BrowserPage::new(store)),
            None => {}
        }
    };

    let row_class = move |key: u32, index: usize| {
        let mut c = String::from("sortable-row");
        if sort.dragging_key_read.get() == Some(key) { c.push_str(" dragging"); }
        if sort.drop_target_read.get() == Some(DropTarget::Over(index)) { c.push_str(" drop-target"); }
        c
    };

    view! {
        <ol class="sortable" id="question-list">
            <For
                each=move || store.questions().get().into_iter().enumerate()
                // Position is part of the key so row handlers see their new index
                key=|(index, question)| (*index, question.id)
                children=move |(index, question)| {
                    let key = question.id.0;
                    view! {
                        <li
                            class=move || row_class(key, index)
                            on:mousedown=make_on_mousedown(sort, key)
                            on:mouseenter=make_on_row_mouseenter(sort, key, index)
                            on:mouseleave=make_on_mouseleave(sort)
                        >
                            <ResourceContainer resource=question />
                        </li>
                    }
                }
            />
            <li
                class=move || if sort.dragging_key_read.get().is_some() { "drop-slot" } else { "drop-slot hidden" }
                on:mouseenter=move |ev| {
                    let len = store.questions().with_untracked(|q| q.len());
                    make_on_slot_mouseenter(sort, len)(ev)
                }
                on:mouseleave=make_on_mouseleave(sort)
            />
        </ol>

        {move || store.reorder_visible().get().then(|| view! {
            <form id="reorder" method="post" action=form.with_untracked(|f| f.action.clone()) on:submit=on_submit.clone()>
                <input type="hidden" name=CSRF_FIELD value=form.with_untracked(|f| f.csrf_token.clone()) />
                <For
                    each=move || form.get().inputs().to_vec().into_iter().enumerate()
                    key=|(index, input)| (*index, input.value)
                    children=|(index, input)| view! {
                        <input
                            type="hidden"
                            id=format!("{}-{}", input.name, index)
                            name=input.name
                            value=input.value.map(|id| id.to_string()).unwrap_or_default()
                        />
                    }
                />
                <button type="submit" class="btn btn-default">"Save order"</button>
            </form>
        })}

        <div class=move || if feedback_state.get().success { "alert alert-success" } else { "alert alert-success hidden" }>
            "Order saved."
        </div>
        <div class=move || if feedback_state.get().failure { "alert alert-danger" } else { "alert alert-danger hidden" }>
            "The order could not be saved."
        </div>
    }
}
