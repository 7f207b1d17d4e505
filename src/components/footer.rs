//! Footer Component
//!
//! Remaining count, filter links and the clear-completed button.

use leptos::prelude::*;
use todomvc_core::Filter;
use web_sys::MouseEvent;

use crate::context::use_todos;
use crate::location;

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_todos();

    let summary = move || ctx.read(|todos| todos.summary());
    let base_path = location::current_path().unwrap_or_else(|e| {
        log::warn!("[FOOTER] {}, links fall back to /", e);
        "/".to_string()
    });

    view! {
        <footer class="footer">
            <span class="todo-count">
                <strong>{move || summary().active}</strong>
                " " {move || summary().items_left_label()} " left"
            </span>
            <ul class="filters">
                {Filter::ALL.into_iter().map(|filter| {
                    view! { <FilterLink filter=filter href=filter.href(&base_path) /> }
                }).collect_view()}
            </ul>
            <button
                class="clear-completed"
                hidden=move || !summary().has_completed()
                on:click=move |_| ctx.dispatch(|todos| todos.clear_complete())
            >
                "Clear completed"
            </button>
        </footer>
    }
}

/// Link selecting one filter; pushes the URL and updates the model
#[component]
fn FilterLink(filter: Filter, href: String) -> impl IntoView {
    let ctx = use_todos();

    let on_click = move |ev: MouseEvent| {
        ev.prevent_default();
        if let Err(e) = location::navigate(filter) {
            log::error!("[FOOTER] {}", e);
        }
        ctx.dispatch(|todos| todos.set_filter(filter));
    };

    view! {
        <li>
            <a
                class:selected=move || ctx.read(|todos| todos.filter()) == filter
                href=href
                on:click=on_click
            >
                {filter.label()}
            </a>
        </li>
    }
}
