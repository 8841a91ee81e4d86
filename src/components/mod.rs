//! UI Components
//!
//! Reusable Leptos components.

mod mood_selector;
mod new_todo_form;
mod tab_bar;
mod theme_toggle;
mod todo_item;
mod todo_list;

pub use mood_selector::MoodSelector;
pub use new_todo_form::NewTodoForm;
pub use tab_bar::{ListTab, TabBar};
pub use theme_toggle::ThemeToggle;
pub use todo_item::TodoItem;
pub use todo_list::TodoList;
