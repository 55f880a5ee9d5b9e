//! UI Components
//!
//! Reusable Leptos components.

mod error_notification;
mod todo_item;

pub use error_notification::ErrorNotification;
pub use todo_item::TodoItem;
