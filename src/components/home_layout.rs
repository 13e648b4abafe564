//! Authenticated shell layout: top navigation plus the routed outlet.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::setting::SettingState;

/// Layout wrapping the logged-in pages. The nav shows the configured
/// site name, section links, and the current user with a sign-out
/// action (clears the auth container client-side).
#[component]
pub fn HomeLayout() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let setting = expect_context::<RwSignal<SettingState>>();
    let navigate = use_navigate();

    let site_name = move || setting.get().site_name().unwrap_or("Faultline").to_owned();
    let user_label = move || {
        auth.get().current().map_or_else(String::new, |user| {
            if user.full_name.is_empty() {
                user.email.clone()
            } else {
                user.full_name.clone()
            }
        })
    };

    let sign_out = move |_| {
        auth.update(AuthState::clear);
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <div class="home-layout">
            <nav class="home-layout__nav">
                <a href="/" class="home-layout__brand">
                    {site_name}
                </a>
                <a href="/issues" class="home-layout__link">
                    "Issues"
                </a>
                <a href="/about" class="home-layout__link">
                    "About"
                </a>
                <span class="home-layout__spacer"></span>
                <span class="home-layout__user">{user_label}</span>
                <button class="home-layout__signout" on:click=sign_out>
                    "Sign out"
                </button>
            </nav>
            <main class="home-layout__content">
                <Outlet/>
            </main>
        </div>
    }
}
