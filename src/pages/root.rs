//! Root dashboard page.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::setting::SettingState;

/// Landing page behind the login gate: a short greeting and the way into
/// the issue list.
#[component]
pub fn RootPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let setting = expect_context::<RwSignal<SettingState>>();

    let greeting = move || {
        auth.get().current().map_or_else(
            || "Welcome".to_owned(),
            |user| {
                if user.full_name.is_empty() {
                    format!("Welcome, {}", user.email)
                } else {
                    format!("Welcome, {}", user.full_name)
                }
            },
        )
    };

    let site_name = move || {
        setting
            .get()
            .site_name()
            .unwrap_or("Faultline")
            .to_owned()
    };

    view! {
        <div class="root-page">
            <h1>{greeting}</h1>
            <p>{move || format!("{} is watching your applications.", site_name())}</p>
            <a href="/issues" class="btn btn--primary">
                "View recent issues"
            </a>
        </div>
    }
}
