//! UI Components
//!
//! One component per TodoMVC region.

mod footer;
mod info;
mod new_todo;
mod todo_list;
mod todo_row;

pub use footer::Footer;
pub use info::Info;
pub use new_todo::NewTodo;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
