//! TodoMVC Core
//!
//! State model for the TodoMVC front end, built on Leptos reactive primitives
//! and free of any DOM code:
//! - item / id: the todo entity and fresh-id generation
//! - filter / route: visibility scope and its `?f=` URL binding
//! - ops / todos: pure list transforms, the reactive store and the handler set
//! - summary: footer counts

mod filter;
mod id;
mod item;
mod ops;
pub mod route;
mod summary;
mod todos;

pub use filter::{Filter, ParseFilterError};
pub use id::{Clock, IdSequence, SystemClock};
pub use item::{TodoId, TodoItem};
pub use summary::Summary;
pub use todos::Todos;
