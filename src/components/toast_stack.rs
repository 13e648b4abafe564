//! Top-right toast stack rendering the notification queue.

use leptos::prelude::*;

use crate::state::notifications::{Notification, NotificationKind, NotificationsState};

/// How long a toast stays up before auto-dismissing.
#[cfg(feature = "hydrate")]
const DISMISS_MS: u64 = 4000;

/// Toast stack — one element per queued notification, newest at the
/// bottom. Rendered outside the router so toasts survive navigation.
#[component]
pub fn Toasts() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationsState>>();

    view! {
        <div class="toast-stack">
            <For
                each=move || notifications.get().items().to_vec()
                key=|n| n.id.clone()
                children=|n| view! { <ToastItem notification=n/> }
            />
        </div>
    }
}

/// A single toast with a close button and an auto-dismiss timer.
#[component]
fn ToastItem(notification: Notification) -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationsState>>();
    let id = notification.id.clone();

    #[cfg(feature = "hydrate")]
    {
        let id = id.clone();
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(DISMISS_MS)).await;
            notifications.update(|n| n.dismiss(&id));
        });
    }

    let kind_class = match notification.kind {
        NotificationKind::Info => "toast toast--info",
        NotificationKind::Error => "toast toast--error",
    };

    view! {
        <div class=kind_class>
            <span class="toast__message">{notification.message.clone()}</span>
            <button
                class="toast__close"
                on:click=move |_| notifications.update(|n| n.dismiss(&id))
            >
                "×"
            </button>
        </div>
    }
}
