//! TodoMVC App
//!
//! Root component: owns the model, binds the filter to the URL and lays out
//! header, list and footer.

use leptos::ev;
use leptos::prelude::*;
use todomvc_core::Todos;

use crate::components::{Footer, Info, NewTodo, TodoList};
use crate::context::TodoContext;
use crate::location;

#[component]
pub fn App() -> impl IntoView {
    let todos = Todos::new();
    match location::current_filter() {
        Ok(filter) => todos.set_filter(filter),
        Err(e) => log::error!("[APP] {}", e),
    }

    let ctx = TodoContext::new(todos);
    provide_context(ctx);

    // Back/forward restores the filter from the URL
    let popstate = window_event_listener(ev::popstate, move |_| match location::current_filter() {
        Ok(filter) => ctx.dispatch(|todos| todos.set_filter(filter)),
        Err(e) => log::error!("[APP] {}", e),
    });
    on_cleanup(move || popstate.remove());

    view! {
        <section class="todoapp">
            <NewTodo />
            <TodoList />
            <Footer />
        </section>
        <Info />
    }
}
