pub mod browser_history;
pub mod command;
pub mod error;
pub mod linked_list;
pub mod node_pool;
pub mod render;
pub mod stack;

pub use browser_history::BrowserHistoryStack;
pub use error::{Error, Result};
pub use linked_list::SingleLinkedList;
pub use stack::LinkedListStack;
