//! Login page with an email/password form.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiClient;
#[cfg(feature = "hydrate")]
use crate::net::types::LoginCredentials;
use crate::state::auth::AuthState;

/// Login page — posts credentials, stores the returned profile in the
/// auth container, and navigates home. Failures surface as toasts from
/// the HTTP layer; the form just stops being busy.
#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let auth = expect_context::<RwSignal<AuthState>>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let submit = Callback::new(move |_| {
        if busy.get() || email.get().trim().is_empty() || password.get().is_empty() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let credentials = LoginCredentials {
                email: email.get().trim().to_owned(),
                password: password.get(),
            };
            let navigate = navigate.clone();
            busy.set(true);
            leptos::task::spawn_local(async move {
                match api.login(&credentials).await {
                    Ok(profile) => {
                        auth.update(|a| a.set_logged_in_user(profile));
                        navigate("/", NavigateOptions::default());
                    }
                    Err(e) => {
                        leptos::logging::warn!("login failed: {e}");
                    }
                }
                busy.set(false);
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (api, auth);
        }
    });

    view! {
        <div class="login-page">
            <h1>"Faultline"</h1>
            <p>"Sign in to your workspace"</p>
            <form
                class="login-page__form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    submit.run(());
                }
            >
                <label class="login-page__label">
                    "Email"
                    <input
                        class="login-page__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="login-page__label">
                    "Password"
                    <input
                        class="login-page__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}
