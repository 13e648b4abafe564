//! Issue list page with a status filter.

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::types::{Issue, IssueFilters};

const STATUS_FILTERS: &[(&str, &str)] = &[
    ("", "All"),
    ("open", "Open"),
    ("resolved", "Resolved"),
    ("ignored", "Ignored"),
];

/// Issue list page — fetches recent issues for the selected status
/// filter and renders one row per grouped issue.
#[component]
pub fn IssueListPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let status = RwSignal::new(String::new());

    // Refetches whenever the filter changes.
    let issues = LocalResource::new(move || {
        let filters = IssueFilters {
            status: Some(status.get()).filter(|s| !s.is_empty()),
            ..IssueFilters::default()
        };
        async move {
            match api.recent_issues(&filters).await {
                Ok(list) => list,
                Err(e) => {
                    leptos::logging::warn!("recent issues fetch failed: {e}");
                    Vec::new()
                }
            }
        }
    });

    view! {
        <div class="issue-list-page">
            <header class="issue-list-page__header">
                <h1>"Issues"</h1>
                <select
                    class="issue-list-page__filter"
                    on:change=move |ev| status.set(event_target_value(&ev))
                >
                    {STATUS_FILTERS
                        .iter()
                        .map(|(value, label)| {
                            view! {
                                <option value=*value selected=move || status.get() == *value>
                                    {*label}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </header>

            <Suspense fallback=move || view! { <p>"Loading issues..."</p> }>
                {move || {
                    issues
                        .get()
                        .map(|list| {
                            if list.is_empty() {
                                view! { <p class="issue-list-page__empty">"No issues match this filter."</p> }
                                    .into_any()
                            } else {
                                view! {
                                    <ul class="issue-list-page__rows">
                                        {list
                                            .iter()
                                            .map(|issue| view! { <IssueRow issue=issue.clone()/> })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

/// One row in the issue list.
#[component]
fn IssueRow(issue: Issue) -> impl IntoView {
    let href = format!("/issues/{}", issue.id);
    let project = issue
        .project
        .as_ref()
        .map(|p| p.name.clone())
        .unwrap_or_default();
    let last_seen = issue.last_seen_at.clone().unwrap_or_default();
    let status_class = format!("issue-row__status issue-row__status--{}", issue.status);

    view! {
        <li class="issue-row">
            <a href=href class="issue-row__summary">
                {issue.summary.clone()}
            </a>
            <span class="issue-row__project">{project}</span>
            <span class=status_class>{issue.status.clone()}</span>
            <span class="issue-row__count">{format!("{} events", issue.event_count)}</span>
            <span class="issue-row__seen">{last_seen}</span>
        </li>
    }
}
