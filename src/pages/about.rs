//! About page.

use leptos::prelude::*;

use crate::state::setting::SettingState;

/// About page — static product blurb plus the configured support
/// contact, when the instance provides one.
#[component]
pub fn AboutPage() -> impl IntoView {
    let setting = expect_context::<RwSignal<SettingState>>();

    let support_email = move || {
        setting
            .get()
            .current()
            .and_then(|s| s.org.support_email.clone())
    };

    view! {
        <div class="about-page">
            <h1>"About Faultline"</h1>
            <p>"Faultline collects application errors, groups them into issues, and tracks how often they recur."</p>
            <Show when=move || support_email().is_some()>
                <p class="about-page__support">
                    "Support: " {move || support_email().unwrap_or_default()}
                </p>
            </Show>
        </div>
    }
}
