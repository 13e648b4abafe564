//! Root application component: context provision, bootstrap, routing,
//! and the navigation guard.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::NavigateOptions;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::{ParamSegment, StaticSegment};

use crate::components::home_layout::HomeLayout;
use crate::components::toast_stack::Toasts;
use crate::guard::{self, GuardOutcome};
use crate::net::api::ApiClient;
use crate::pages::{
    about::AboutPage, install::InstallPage, issue_details::IssueDetailsPage,
    issue_list::IssueListPage, login::LoginPage, root::RootPage,
};
use crate::routes::RouteName;
use crate::state::auth::AuthState;
use crate::state::notifications::NotificationsState;
use crate::state::setting::SettingState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the three state containers and the API client, provides them
/// as contexts, runs the bootstrap sequence, and only then renders the
/// routed tree — the guard never sees uninitialized state.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let notifications = RwSignal::new(NotificationsState::default());
    let auth = RwSignal::new(AuthState::default());
    let setting = RwSignal::new(SettingState::default());
    let api = ApiClient::new(notifications);

    provide_context(notifications);
    provide_context(auth);
    provide_context(setting);
    provide_context(api);

    let booted = LocalResource::new(move || bootstrap(api, setting, auth));

    view! {
        <Stylesheet id="leptos" href="/pkg/faultline-ui.css"/>
        <Title text="Faultline"/>

        <Toasts/>

        <Suspense fallback=move || view! { <p class="boot-screen">"Loading..."</p> }>
            {move || {
                booted
                    .get()
                    .map(|_| {
                        view! {
                            <Router>
                                <NavigationGuard/>
                                <Routes fallback=|| "Page not found.".into_view()>
                                    <Route path=StaticSegment("install") view=InstallPage/>
                                    <Route path=StaticSegment("login") view=LoginPage/>
                                    <Route path=StaticSegment("about") view=AboutPage/>
                                    <ParentRoute path=StaticSegment("") view=HomeLayout>
                                        <Route path=StaticSegment("") view=RootPage/>
                                        <Route path=StaticSegment("issues") view=IssueListPage/>
                                        <Route
                                            path=(StaticSegment("issues"), ParamSegment("issueId"))
                                            view=IssueDetailsPage
                                        />
                                    </ParentRoute>
                                </Routes>
                            </Router>
                        }
                    })
            }}
        </Suspense>
    }
}

/// Sequential bootstrap: settings first, then session state.
///
/// A failed settings fetch leaves the container empty, which the guard
/// reads as not-installed; a failed auth fetch leaves the user logged
/// out. Either way the app still mounts.
async fn bootstrap(
    api: ApiClient,
    setting: RwSignal<SettingState>,
    auth: RwSignal<AuthState>,
) {
    match api.setting_meta().await {
        Ok(meta) => setting.update(|s| s.set_setting(meta)),
        Err(e) => leptos::logging::warn!("setting meta unavailable: {e}"),
    }

    match api.auth_status().await {
        Ok(status) => {
            if status.is_logged_in {
                if let Some(profile) = status.user_profile {
                    auth.update(|a| a.set_logged_in_user(profile));
                }
            }
        }
        Err(e) => leptos::logging::warn!("auth status unavailable: {e}"),
    }
}

/// Applies the guard on every location change.
///
/// Install redirects replace the history entry so Back does not bounce
/// through the gated page; login redirects push.
#[component]
fn NavigationGuard() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let setting = expect_context::<RwSignal<SettingState>>();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || {
        let path = location.pathname.get();
        let installed = setting.get().is_installed();
        let logged_in = auth.get().is_logged_in();

        match guard::check_path(&path, installed, logged_in) {
            GuardOutcome::RedirectToInstall => {
                navigate(
                    RouteName::Install.path(),
                    NavigateOptions { replace: true, ..NavigateOptions::default() },
                );
            }
            GuardOutcome::RedirectToLogin => {
                navigate(RouteName::Login.path(), NavigateOptions::default());
            }
            GuardOutcome::Allow => {}
        }
    });
}
