//! Todo Model
//!
//! Canonical item list and filter in a `reactive_stores` store, the memoized
//! views over them, and the handler set. Each handler performs at most one
//! write to the item list and then requests a render.

use std::sync::Arc;

use leptos::prelude::*;
use reactive_stores::{ArcStore, Store};

use crate::filter::Filter;
use crate::id::{Clock, IdSequence};
use crate::item::{normalize_content, TodoId, TodoItem};
use crate::ops;
use crate::summary::Summary;

/// Session state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// All items in list order
    pub items: Vec<TodoItem>,
    /// Current visibility scope
    pub filter: Filter,
}

/// Shared handle to the model; clones see the same state
#[derive(Clone)]
pub struct Todos {
    state: ArcStore<TodoState>,
    ids: Arc<IdSequence>,
    active: ArcMemo<Arc<Vec<TodoItem>>>,
    filtered: ArcMemo<Arc<Vec<TodoItem>>>,
    /// Bumped after every write
    render_requests: ArcRwSignal<u64>,
}

impl Todos {
    /// Empty list, `All` filter, wall-clock ids
    pub fn new() -> Self {
        Self::with_ids(IdSequence::default())
    }

    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self::with_ids(IdSequence::new(clock))
    }

    fn with_ids(ids: IdSequence) -> Self {
        let state = ArcStore::new(TodoState::default());

        let active = ArcMemo::new({
            let items = state.clone().items();
            move |_| {
                log::trace!("[TODOS] recompute active_todos");
                Arc::new(items.with(|list| {
                    list.iter()
                        .filter(|item| !item.complete)
                        .cloned()
                        .collect::<Vec<_>>()
                }))
            }
        });

        let filtered = ArcMemo::new({
            let items = state.clone().items();
            let filter = state.clone().filter();
            let active = active.clone();
            move |_| {
                let filter = filter.get();
                log::trace!("[TODOS] recompute filtered_todos ({})", filter);
                match filter {
                    Filter::All => Arc::new(items.get()),
                    Filter::Active => active.get(),
                    Filter::Completed => Arc::new(items.with(|list| {
                        list.iter()
                            .filter(|item| item.complete)
                            .cloned()
                            .collect::<Vec<_>>()
                    })),
                }
            }
        });

        Self {
            state,
            ids: Arc::new(ids),
            active,
            filtered,
            render_requests: ArcRwSignal::new(0),
        }
    }

    // ========================
    // Reads
    // ========================

    pub fn items(&self) -> Vec<TodoItem> {
        self.state.clone().items().get()
    }

    pub fn filter(&self) -> Filter {
        self.state.clone().filter().get()
    }

    /// Items not yet complete, in list order
    pub fn active_todos(&self) -> Arc<Vec<TodoItem>> {
        self.active.get()
    }

    /// Items visible under the current filter, in list order
    pub fn filtered_todos(&self) -> Arc<Vec<TodoItem>> {
        self.filtered.get()
    }

    pub fn summary(&self) -> Summary {
        let total = self.state.clone().items().with(|list| list.len());
        Summary::new(self.active_todos().len(), total)
    }

    // ========================
    // Render requests
    // ========================

    /// Number of renders requested so far
    pub fn render_requests(&self) -> u64 {
        self.render_requests.get_untracked()
    }

    /// Subscribe the current reactive observer to render requests
    pub fn track_render(&self) {
        self.render_requests.track();
    }

    fn request_render(&self) {
        self.render_requests.update(|n| *n += 1);
    }

    /// The single write path for the item list
    fn write_items(&self, f: impl FnOnce(&[TodoItem]) -> Vec<TodoItem>) {
        self.state.clone().items().update(|list| {
            let next = f(list);
            *list = next;
        });
        self.request_render();
    }

    // ========================
    // Handlers
    // ========================

    /// Append a new item. Returns `None` when `raw` is empty after trimming.
    pub fn add_todo(&self, raw: &str) -> Option<TodoId> {
        let content = normalize_content(raw)?;
        let id = self
            .state
            .clone()
            .items()
            .with_untracked(|list| self.ids.next(list));
        log::debug!("[TODOS] add {} {:?}", id, content);
        self.write_items(|list| ops::append(list, TodoItem::new(id, content)));
        Some(id)
    }

    /// Rename an item and leave edit mode. Empty text is ignored.
    pub fn update_todo(&self, id: TodoId, raw: &str) {
        let Some(content) = normalize_content(raw) else {
            log::debug!("[TODOS] ignore empty update for {}", id);
            return;
        };
        log::debug!("[TODOS] update {} {:?}", id, content);
        self.write_items(|list| ops::rename(list, id, content));
    }

    pub fn delete_todo(&self, id: TodoId) {
        log::debug!("[TODOS] delete {}", id);
        self.write_items(|list| ops::remove(list, id));
    }

    pub fn toggle(&self, id: TodoId) {
        log::debug!("[TODOS] toggle {}", id);
        self.write_items(|list| ops::toggle(list, id));
    }

    pub fn toggle_edit_mode(&self, id: TodoId) {
        log::debug!("[TODOS] edit {}", id);
        self.write_items(|list| ops::begin_edit(list, id));
    }

    /// Complete everything if anything is incomplete, otherwise reopen everything
    pub fn toggle_all(&self) {
        let has_incomplete = self
            .state
            .clone()
            .items()
            .with_untracked(|list| list.iter().any(|item| !item.complete));
        log::debug!("[TODOS] toggle all -> complete={}", has_incomplete);
        self.write_items(|list| ops::set_all_complete(list, has_incomplete));
    }

    pub fn clear_complete(&self) {
        log::debug!("[TODOS] clear completed");
        self.write_items(ops::remove_completed);
    }

    pub fn set_filter(&self, filter: Filter) {
        log::debug!("[TODOS] filter {}", filter);
        self.state.clone().filter().set(filter);
        self.request_render();
    }
}

impl Default for Todos {
    fn default() -> Self {
        Self::new()
    }
}
