//! Leptos Sortable Lists
//!
//! Drag-to-reorder for flat lists in Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag.
//! The list itself is never touched here: a drop reports the dragged key
//! and its target, and the owner applies it with [`move_to`].

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Where a dragged row should land
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropTarget {
    /// Take the place of the row currently displayed at this index
    Over(usize),
    /// Gap before the row at this index (`len` = after the last row)
    Slot(usize),
}

/// Sort state signals
#[derive(Clone, Copy)]
pub struct SortSignals {
    pub dragging_key_read: ReadSignal<Option<u32>>,
    pub dragging_key_write: WriteSignal<Option<u32>>,
    pub drop_target_read: ReadSignal<Option<DropTarget>>,
    pub drop_target_write: WriteSignal<Option<DropTarget>>,
    /// Pending row key (mousedown but not yet dragging)
    pub pending_key_read: ReadSignal<Option<u32>>,
    pub pending_key_write: WriteSignal<Option<u32>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_sort_signals() -> SortSignals {
    let (dragging_key_read, dragging_key_write) = signal(None::<u32>);
    let (drop_target_read, drop_target_write) = signal(None::<DropTarget>);
    let (pending_key_read, pending_key_write) = signal(None::<u32>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    SortSignals {
        dragging_key_read,
        dragging_key_write,
        drop_target_read,
        drop_target_write,
        pending_key_read,
        pending_key_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// Whether the pointer moved far enough from the mousedown point to count as a drag
pub fn exceeds_threshold(start: (i32, i32), now: (i32, i32)) -> bool {
    let dx = (now.0 - start.0).abs();
    let dy = (now.1 - start.1).abs();
    dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX
}

/// Move the row identified by `dragged` to `target`.
///
/// Returns `true` if the order changed. Unknown keys and drops onto the
/// row's own position leave the list untouched.
pub fn move_to<T>(list: &mut Vec<T>, key_of: impl Fn(&T) -> u32, dragged: u32, target: DropTarget) -> bool {
    let Some(from) = list.iter().position(|row| key_of(row) == dragged) else {
        return false;
    };
    let to = match target {
        DropTarget::Over(index) => index.min(list.len() - 1),
        DropTarget::Slot(slot) => {
            let slot = slot.min(list.len());
            if slot > from { slot - 1 } else { slot }
        }
    };
    if to == from {
        return false;
    }
    let row = list.remove(from);
    list.insert(to, row);
    true
}

/// End drag operation
pub fn end_drag(sort: &SortSignals) {
    sort.dragging_key_write.set(None);
    sort.drop_target_write.set(None);
    sort.pending_key_write.set(None);
}

/// Create mousedown handler for sortable rows
/// Records pending drag with start position
pub fn make_on_mousedown(sort: SortSignals, key: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            ev.prevent_default();
            sort.pending_key_write.set(Some(key));
            sort.start_x_write.set(ev.client_x());
            sort.start_y_write.set(ev.client_y());
        }
    }
}

/// Bind mousemove on the document - starts drag if moved enough
fn bind_global_mousemove(sort: SortSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = sort.pending_key_read.get_untracked();

        if pending.is_some() && sort.dragging_key_read.get_untracked().is_none() {
            let start = (sort.start_x_read.get_untracked(), sort.start_y_read.get_untracked());
            if exceeds_threshold(start, (ev.client_x(), ev.client_y())) {
                sort.dragging_key_write.set(pending);
            }
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for a row displayed at `index`
pub fn make_on_row_mouseenter(sort: SortSignals, key: u32, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if let Some(dragging) = sort.dragging_key_read.get_untracked() {
            // Don't target the dragged row itself
            if dragging != key {
                sort.drop_target_write.set(Some(DropTarget::Over(index)));
            }
        }
    }
}

/// Create mouseenter handler for the gap before `slot`
pub fn make_on_slot_mouseenter(sort: SortSignals, slot: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if sort.dragging_key_read.get_untracked().is_some() {
            sort.drop_target_write.set(Some(DropTarget::Slot(slot)));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(sort: SortSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if sort.dragging_key_read.get_untracked().is_some() {
            sort.drop_target_write.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection
pub fn bind_global_mouseup<F>(sort: SortSignals, on_drop: F)
where
    F: Fn(u32, DropTarget) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging_key = sort.dragging_key_read.get_untracked();
        let drop_target = sort.drop_target_read.get_untracked();

        sort.pending_key_write.set(None);
        end_drag(&sort);

        // Only a real drag over a target reorders; a plain click falls through
        if let (Some(dragged), Some(target)) = (dragging_key, drop_target) {
            on_drop(dragged, target);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    bind_global_mousemove(sort);
}
