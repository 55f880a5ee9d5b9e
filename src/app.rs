//! Todo App Component
//!
//! Root component owning the todo collection and the error channel.
//! All children receive the collection as a read signal plus a
//! whole-value write signal; rows never mutate it in place.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{ErrorNotification, TodoItem};
use crate::models::Todo;

#[component]
pub fn App() -> impl IntoView {
    // State
    let (todos, set_todos) = signal(Vec::<Todo>::new());
    let (error_message, set_error_message) = signal(String::new());

    // Load todos on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match api::list_todos().await {
                Ok(loaded) => {
                    web_sys::console::log_1(&format!("[APP] Loaded {} todos", loaded.len()).into());
                    set_todos.set(loaded);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[APP] Load failed: {err}").into());
                    set_error_message.set("Unable to load todos".to_string());
                }
            }
        });
    });

    view! {
        <div class="todo-app">
            <h1>"todos"</h1>

            <section class="todo-list">
                <For
                    each=move || todos.get()
                    key=|todo| todo.id
                    children=move |todo: Todo| {
                        view! {
                            <TodoItem
                                todo=todo
                                todos=todos
                                set_todos=set_todos
                                set_error_message=set_error_message
                            />
                        }
                    }
                />
            </section>

            <ErrorNotification
                error_message=error_message
                set_error_message=set_error_message
            />
        </div>
    }
}
