//! Application Context
//!
//! Shared model handle provided via Leptos Context API.

use leptos::prelude::*;
use todomvc_core::Todos;

/// App-wide model handle
#[derive(Clone, Copy)]
pub struct TodoContext {
    model: StoredValue<Todos>,
}

impl TodoContext {
    pub fn new(model: Todos) -> Self {
        Self {
            model: StoredValue::new(model),
        }
    }

    /// Read the model, re-running the caller on the next render request
    pub fn read<R>(&self, f: impl FnOnce(&Todos) -> R) -> R {
        self.model.with_value(|todos| {
            todos.track_render();
            f(todos)
        })
    }

    /// Run a handler against the model
    pub fn dispatch<R>(&self, f: impl FnOnce(&Todos) -> R) -> R {
        self.model.with_value(f)
    }
}

pub fn use_todos() -> TodoContext {
    expect_context::<TodoContext>()
}
