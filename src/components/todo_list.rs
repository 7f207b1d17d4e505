//! Todo List Component

use leptos::prelude::*;

use super::TodoRow;
use crate::context::use_todos;

/// Toggle-all checkbox and the filtered item list
#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_todos();

    view! {
        <section class="main">
            <input
                id="toggle-all"
                class="toggle-all"
                type="checkbox"
                prop:checked=move || ctx.read(|todos| todos.summary().all_complete())
                on:change=move |_| ctx.dispatch(|todos| todos.toggle_all())
            />
            <label for="toggle-all">"Mark all as complete"</label>
            <ul class="todo-list">
                // Keyed on the whole item so any field change re-renders its row
                <For
                    each=move || ctx.read(|todos| todos.filtered_todos().to_vec())
                    key=|item| item.clone()
                    children=move |item| view! { <TodoRow item=item /> }
                />
            </ul>
        </section>
    }
}
