//! Wire types for the Faultline JSON API.
//!
//! The backend serializes every field in camelCase; the structs here keep
//! Rust naming and map via serde. Timestamps stay as RFC 3339 strings —
//! the UI only ever displays them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// An authenticated user's profile as returned by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Response body of `GET /auth/status`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthStatus {
    pub is_logged_in: bool,
    #[serde(default)]
    pub user_profile: Option<UserProfile>,
}

/// Credentials posted to `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// Instance settings from `GET /setting/meta`, grouped by namespace.
///
/// The container only cares whether a snapshot exists at all (installed
/// vs. not); individual fields are optional because the backend omits
/// anything never configured.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingMeta {
    #[serde(default)]
    pub org: OrgMeta,
    #[serde(default)]
    pub system: SystemMeta,
    #[serde(default)]
    pub ui: UiMeta,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgMeta {
    #[serde(default)]
    pub site_name: Option<String>,
    #[serde(default)]
    pub root_url: Option<String>,
    #[serde(default)]
    pub support_email: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemMeta {
    #[serde(default)]
    pub maintenance_mode: Option<bool>,
    #[serde(default)]
    pub maintenance_message: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiMeta {
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}

/// A grouped issue as listed by `GET /issues/recent`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: String,
    #[serde(default)]
    pub project: Option<Project>,
    pub summary: String,
    #[serde(default)]
    pub assignee: Option<Assignee>,
    pub status: String,
    #[serde(default)]
    pub last_seen_at: Option<String>,
    #[serde(default)]
    pub event_count: i64,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignee {
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
}

/// A single captured event in an issue's history
/// (`GET /issues/{issueId}/previous_events`).
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueEvent {
    pub id: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Query filters for the recent-issues list. Unset fields are omitted
/// from the query string entirely.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IssueFilters {
    pub status: Option<String>,
    pub project_id: Option<String>,
    pub search: Option<String>,
}

impl IssueFilters {
    /// Encode the set fields as query-string pairs.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(status) = &self.status {
            pairs.push(("status", status.clone()));
        }
        if let Some(project_id) = &self.project_id {
            pairs.push(("projectId", project_id.clone()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        pairs
    }
}
