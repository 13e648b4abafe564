//! Install page shown while the instance has no settings snapshot.

use leptos::prelude::*;

/// Install page — the guard parks every navigation here until the
/// backend reports a configured instance.
#[component]
pub fn InstallPage() -> impl IntoView {
    view! {
        <div class="install-page">
            <h1>"Faultline"</h1>
            <p>"This instance is not installed yet."</p>
            <p class="install-page__hint">
                "Run the install command on the server, then reload this page:"
            </p>
            <pre class="install-page__command">"faultline install"</pre>
        </div>
    }
}
