//! Todo Row Component
//!
//! Individual item in the list.

use leptos::prelude::*;
use todomvc_core::TodoItem;
use web_sys::{HtmlInputElement, KeyboardEvent};

use crate::context::use_todos;

/// A single item row: checkbox, label, delete button and inline editor
#[component]
pub fn TodoRow(item: TodoItem) -> impl IntoView {
    let ctx = use_todos();

    let id = item.id;
    let complete = item.complete;
    let editing = item.editing;
    let label = item.content.clone();
    let content = item.content;

    let on_edit_keyup = move |ev: KeyboardEvent| {
        if ev.key() == "Enter" {
            let input = event_target::<HtmlInputElement>(&ev);
            ctx.dispatch(|todos| todos.update_todo(id, &input.value()));
        }
    };

    view! {
        <li class:completed=complete class:editing=editing>
            <div class="view">
                <input
                    class="toggle"
                    type="checkbox"
                    checked=complete
                    on:change=move |_| ctx.dispatch(|todos| todos.toggle(id))
                />
                <label on:dblclick=move |_| ctx.dispatch(|todos| todos.toggle_edit_mode(id))>
                    {label}
                </label>
                <button
                    class="destroy"
                    on:click=move |_| ctx.dispatch(|todos| todos.delete_todo(id))
                ></button>
            </div>
            <input class="edit" prop:value=content on:keyup=on_edit_keyup />
        </li>
    }
}
