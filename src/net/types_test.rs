use super::*;

// =============================================================
// Auth payloads
// =============================================================

#[test]
fn auth_status_logged_out_shape() {
    let status: AuthStatus = serde_json::from_value(serde_json::json!({
        "isLoggedIn": false,
        "userProfile": null
    }))
    .expect("auth status");
    assert!(!status.is_logged_in);
    assert!(status.user_profile.is_none());
}

#[test]
fn auth_status_logged_in_carries_profile() {
    let status: AuthStatus = serde_json::from_value(serde_json::json!({
        "isLoggedIn": true,
        "userProfile": {
            "id": "usr_01",
            "email": "ada@example.com",
            "fullName": "Ada Lovelace",
            "isActive": true,
            "createdAt": "2025-11-02T09:30:00Z"
        }
    }))
    .expect("auth status");
    let profile = status.user_profile.expect("profile");
    assert_eq!(profile.email, "ada@example.com");
    assert_eq!(profile.full_name, "Ada Lovelace");
    assert!(profile.is_active);
}

#[test]
fn login_credentials_serialize_plain_keys() {
    let creds = LoginCredentials {
        email: "ada@example.com".to_owned(),
        password: "hunter2".to_owned(),
    };
    let value = serde_json::to_value(&creds).expect("credentials");
    assert_eq!(value["email"], "ada@example.com");
    assert_eq!(value["password"], "hunter2");
}

// =============================================================
// Setting metadata
// =============================================================

#[test]
fn setting_meta_accepts_partial_namespaces() {
    let meta: SettingMeta = serde_json::from_value(serde_json::json!({
        "org": { "siteName": "Faultline" }
    }))
    .expect("setting meta");
    assert_eq!(meta.org.site_name.as_deref(), Some("Faultline"));
    assert!(meta.org.support_email.is_none());
    assert!(meta.system.maintenance_mode.is_none());
    assert!(meta.ui.theme.is_none());
}

#[test]
fn setting_meta_accepts_empty_object() {
    let meta: SettingMeta = serde_json::from_value(serde_json::json!({})).expect("setting meta");
    assert_eq!(meta, SettingMeta::default());
}

// =============================================================
// Issues and events
// =============================================================

#[test]
fn issue_deserializes_with_null_assignee() {
    let issue: Issue = serde_json::from_value(serde_json::json!({
        "id": "iss_42",
        "project": { "id": "prj_1", "name": "api-gateway" },
        "summary": "TypeError: cannot read properties of undefined",
        "assignee": null,
        "status": "open",
        "lastSeenAt": "2026-01-10T12:00:00Z",
        "eventCount": 17,
        "createdAt": "2026-01-01T08:00:00Z"
    }))
    .expect("issue");
    assert!(issue.assignee.is_none());
    assert_eq!(issue.event_count, 17);
    assert_eq!(issue.project.expect("project").name, "api-gateway");
}

#[test]
fn issue_event_maps_type_keyword() {
    let event: IssueEvent = serde_json::from_value(serde_json::json!({
        "id": "evt_9",
        "message": "connection reset by peer",
        "type": "error",
        "level": "fatal",
        "timestamp": "2026-01-10T12:00:00Z"
    }))
    .expect("event");
    assert_eq!(event.kind.as_deref(), Some("error"));
    assert_eq!(event.level.as_deref(), Some("fatal"));
}

// =============================================================
// Issue filters
// =============================================================

#[test]
fn issue_filters_empty_produces_no_pairs() {
    assert!(IssueFilters::default().to_query().is_empty());
}

#[test]
fn issue_filters_encode_only_set_fields() {
    let filters = IssueFilters {
        status: Some("open".to_owned()),
        project_id: None,
        search: Some("timeout".to_owned()),
    };
    let pairs = filters.to_query();
    assert_eq!(
        pairs,
        vec![("status", "open".to_owned()), ("search", "timeout".to_owned())]
    );
}
