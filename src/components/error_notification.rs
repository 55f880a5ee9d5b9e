//! Error Notification Component
//!
//! Banner surfacing the shared error message, with a manual close
//! button and a short auto-dismiss window. Last writer wins: a newer
//! message replaces the banner and restarts the window.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long an error stays visible before it clears itself.
const DISMISS_DELAY_MS: u32 = 3_000;

/// Error banner bound to the app-wide error channel
#[component]
pub fn ErrorNotification(
    error_message: ReadSignal<String>,
    set_error_message: WriteSignal<String>,
) -> impl IntoView {
    // Schedule a dismiss for every new message; the timer only clears
    // the channel if its message is still the one being shown.
    Effect::new(move |_| {
        let message = error_message.get();
        if message.is_empty() {
            return;
        }
        spawn_local(async move {
            TimeoutFuture::new(DISMISS_DELAY_MS).await;
            if error_message.get_untracked() == message {
                set_error_message.set(String::new());
            }
        });
    });

    view! {
        {move || {
            let message = error_message.get();
            (!message.is_empty()).then(move || view! {
                <div class="error-notification">
                    <button
                        type="button"
                        class="close-btn"
                        on:click=move |_| set_error_message.set(String::new())
                    >
                        "×"
                    </button>
                    {message}
                </div>
            })
        }}
    }
}
