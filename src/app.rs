//! App Shell
//!
//! Page scaffold: header with title and theme toggle, then the list. Holds
//! no state of its own.

use leptos::prelude::*;

use crate::components::{ThemeToggle, TodoList};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="container">
            <header class="page-header">
                <h1>"Todo App with Mood"</h1>
                <ThemeToggle />
            </header>
            <TodoList />
        </div>
    }
}
