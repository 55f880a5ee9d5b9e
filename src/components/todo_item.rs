//! Todo Item Row Component
//!
//! A single todo row with a completion checkbox, inline title editing
//! and delete. Deletion is optimistic: the row is spliced out of the
//! collection right away and a failed backend call only surfaces a
//! message on the shared error channel.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::edits;
use crate::models::Todo;

/// A single todo row
///
/// Double-click on the title opens the inline editor. Enter or blur
/// commits the draft, an empty draft deletes the todo, Escape reverts.
#[component]
pub fn TodoItem(
    todo: Todo,
    todos: ReadSignal<Vec<Todo>>,
    set_todos: WriteSignal<Vec<Todo>>,
    set_error_message: WriteSignal<String>,
) -> impl IntoView {
    let id = todo.id;

    let (is_editing, set_is_editing) = signal(false);
    let (draft_title, set_draft_title) = signal(todo.title.clone());
    let (should_handle_blur, set_should_handle_blur) = signal(true);

    let input_ref: NodeRef<html::Input> = NodeRef::new();

    // Rows are keyed by id, so an instance outlives collection
    // replacements; read the current fields back out of the collection.
    let title = Memo::new(move |_| {
        todos.with(|list| {
            list.iter()
                .find(|todo| todo.id == id)
                .map(|todo| todo.title.clone())
                .unwrap_or_default()
        })
    });
    let completed = Memo::new(move |_| {
        todos.with(|list| {
            list.iter()
                .find(|todo| todo.id == id)
                .map(|todo| todo.completed)
                .unwrap_or(false)
        })
    });

    let handle_checkbox = move |_| {
        set_todos.set(edits::toggle_completed(&todos.get(), id));
    };

    let remove_todo = move |id: u32| {
        spawn_local(async move {
            if api::delete_todo(id).await.is_err() {
                set_error_message.set("Unable to delete a todo".to_string());
            }
        });

        // Optimistic: the row goes away whatever the request comes back with.
        if let Some(next) = edits::remove(&todos.get(), id) {
            set_todos.set(next);
        }
    };

    let update_todo = move || {
        set_todos.set(edits::rename(&todos.get(), id, &draft_title.get()));
        set_is_editing.set(false);
    };

    // Focus the editor whenever edit mode turns on, including
    // programmatic entry.
    Effect::new(move |_| {
        if is_editing.get() {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let handle_double_click = move |_| {
        set_should_handle_blur.set(true);
        set_is_editing.set(true);
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    };

    view! {
        <div class=move || if completed.get() { "todo completed" } else { "todo" }>
            <label class="todo-status-label">
                <input
                    type="checkbox"
                    class="todo-status"
                    prop:checked=move || completed.get()
                    on:change=handle_checkbox
                />
            </label>

            {move || (!is_editing.get()).then(|| view! {
                <span class="todo-title" on:dblclick=handle_double_click>
                    {title.get()}
                </span>
            })}

            {move || (!is_editing.get()).then(|| view! {
                <button
                    type="button"
                    class="todo-remove"
                    aria-label="Delete"
                    on:click=move |_| remove_todo(id)
                >
                    "×"
                </button>
            })}

            {move || is_editing.get().then(|| view! {
                <form>
                    <input
                        type="text"
                        class="todo-title-field"
                        placeholder="Empty todo will be deleted"
                        prop:value=move || draft_title.get()
                        node_ref=input_ref
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_draft_title.set(edits::normalize_draft(&input.value()));
                        }
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                if draft_title.get().is_empty() {
                                    remove_todo(id);
                                } else {
                                    ev.prevent_default();
                                    update_todo();
                                }
                            }
                        }
                        on:keyup=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Escape" {
                                set_draft_title.set(title.get());
                                set_is_editing.set(false);
                                set_should_handle_blur.set(false);
                            }
                        }
                        on:blur=move |_| {
                            if should_handle_blur.get() {
                                if draft_title.get().is_empty() {
                                    remove_todo(id);
                                } else {
                                    update_todo();
                                }
                            }
                        }
                    />
                </form>
            })}

            // Overlay covers the row while a backend update is in flight.
            <div class="modal overlay">
                <div class="modal-background"></div>
                <div class="loader"></div>
            </div>
        </div>
    }
}
