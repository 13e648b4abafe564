//! Issue details page: summary, status, assignee, and event history.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::api::ApiClient;
use crate::net::types::{Issue, IssueEvent};

/// Issue details page — reads the issue id from the route and loads the
/// issue plus its previous events.
#[component]
pub fn IssueDetailsPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let params = use_params_map();

    let issue_id = move || params.read().get("issueId").unwrap_or_default();

    let issue = LocalResource::new(move || {
        let id = issue_id();
        async move {
            match api.issue_details(&id).await {
                Ok(issue) => Some(issue),
                Err(e) => {
                    leptos::logging::warn!("issue fetch failed: {e}");
                    None
                }
            }
        }
    });

    let events = LocalResource::new(move || {
        let id = issue_id();
        async move {
            match api.issue_previous_events(&id).await {
                Ok(list) => list,
                Err(e) => {
                    leptos::logging::warn!("event history fetch failed: {e}");
                    Vec::new()
                }
            }
        }
    });

    view! {
        <div class="issue-details-page">
            <Suspense fallback=move || view! { <p>"Loading issue..."</p> }>
                {move || {
                    issue
                        .get()
                        .map(|found| match found {
                            Some(issue) => view! { <IssueSummary issue=issue.clone()/> }.into_any(),
                            None => {
                                view! { <p class="issue-details-page__missing">"Issue not found."</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>

            <section class="issue-details-page__history">
                <h2>"Previous events"</h2>
                <Suspense fallback=move || view! { <p>"Loading events..."</p> }>
                    {move || {
                        events
                            .get()
                            .map(|list| {
                                if list.is_empty() {
                                    view! { <p>"No earlier events recorded."</p> }.into_any()
                                } else {
                                    view! {
                                        <ul class="event-list">
                                            {list
                                                .iter()
                                                .map(|event| view! { <EventRow event=event.clone()/> })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </section>
        </div>
    }
}

/// Header block for one issue.
#[component]
fn IssueSummary(issue: Issue) -> impl IntoView {
    let project = issue
        .project
        .as_ref()
        .map(|p| p.name.clone())
        .unwrap_or_default();
    let assignee = issue.assignee.as_ref().map_or_else(
        || "Unassigned".to_owned(),
        |a| {
            if a.first_name.is_empty() {
                a.email.clone()
            } else {
                a.first_name.clone()
            }
        },
    );
    let status_class = format!("issue-details__status issue-details__status--{}", issue.status);

    view! {
        <header class="issue-details__header">
            <h1>{issue.summary.clone()}</h1>
            <div class="issue-details__meta">
                <span class=status_class>{issue.status.clone()}</span>
                <span class="issue-details__project">{project}</span>
                <span class="issue-details__assignee">{assignee}</span>
                <span class="issue-details__count">{format!("{} events", issue.event_count)}</span>
            </div>
        </header>
    }
}

/// One event in the history list.
#[component]
fn EventRow(event: IssueEvent) -> impl IntoView {
    let level = event.level.clone().unwrap_or_else(|| "error".to_owned());
    let level_class = format!("event-row__level event-row__level--{level}");
    let timestamp = event.timestamp.clone().unwrap_or_default();

    view! {
        <li class="event-row">
            <span class=level_class>{level}</span>
            <span class="event-row__message">{event.message.clone()}</span>
            <span class="event-row__time">{timestamp}</span>
        </li>
    }
}
