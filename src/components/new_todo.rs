//! New Todo Input

use leptos::prelude::*;
use web_sys::{HtmlInputElement, KeyboardEvent};

use crate::context::use_todos;

const PLACEHOLDER: &str = "What needs to be done?";

/// Header with the entry field; Enter adds an item
#[component]
pub fn NewTodo() -> impl IntoView {
    let ctx = use_todos();

    let on_keyup = move |ev: KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        let input = event_target::<HtmlInputElement>(&ev);
        if ctx.dispatch(|todos| todos.add_todo(&input.value())).is_some() {
            input.set_value("");
        }
    };

    view! {
        <header class="header">
            <h1>"todos"</h1>
            <input
                class="new-todo"
                placeholder=PLACEHOLDER
                autofocus=true
                on:keyup=on_keyup
            />
        </header>
    }
}
