use super::*;
use serde_json::json;

// =============================================================
// Push / cap / dismiss
// =============================================================

#[test]
fn starts_empty() {
    assert!(NotificationsState::default().items().is_empty());
}

#[test]
fn push_appends_with_kind_and_fresh_id() {
    let mut state = NotificationsState::default();
    state.push_info("saved");
    state.push_error("broke");

    let items = state.items();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].kind, NotificationKind::Info);
    assert_eq!(items[0].message, "saved");
    assert_eq!(items[1].kind, NotificationKind::Error);
    assert_ne!(items[0].id, items[1].id);
}

#[test]
fn queue_caps_at_max_dropping_oldest() {
    let mut state = NotificationsState::default();
    for i in 0..(MAX_TOASTS + 2) {
        state.push_info(format!("toast {i}"));
    }
    let items = state.items();
    assert_eq!(items.len(), MAX_TOASTS);
    assert_eq!(items[0].message, "toast 2");
    assert_eq!(items[MAX_TOASTS - 1].message, format!("toast {}", MAX_TOASTS + 1));
}

#[test]
fn dismiss_removes_only_the_target() {
    let mut state = NotificationsState::default();
    state.push_info("keep");
    state.push_error("drop");
    let id = state.items()[1].id.clone();

    state.dismiss(&id);
    assert_eq!(state.items().len(), 1);
    assert_eq!(state.items()[0].message, "keep");

    // Dismissing again is a no-op.
    state.dismiss(&id);
    assert_eq!(state.items().len(), 1);
}

// =============================================================
// absorb: one toast per determined message
// =============================================================

#[test]
fn absorb_success_with_message_emits_one_info_toast() {
    let mut state = NotificationsState::default();
    state.absorb(&crate::net::envelope::normalize(json!({
        "success": true,
        "message": "Login successful",
        "data": {}
    })));
    assert_eq!(state.items().len(), 1);
    assert_eq!(state.items()[0].kind, NotificationKind::Info);
    assert_eq!(state.items()[0].message, "Login successful");
}

#[test]
fn absorb_failure_emits_one_error_toast() {
    let mut state = NotificationsState::default();
    state.absorb(&crate::net::envelope::normalize(json!({
        "success": false,
        "message": "Invalid email or password"
    })));
    assert_eq!(state.items().len(), 1);
    assert_eq!(state.items()[0].kind, NotificationKind::Error);
}

#[test]
fn absorb_silent_outcomes_emit_nothing() {
    let mut state = NotificationsState::default();
    state.absorb(&crate::net::envelope::normalize(json!({
        "success": true,
        "data": [1, 2]
    })));
    state.absorb(&crate::net::envelope::normalize(json!({
        "isLoggedIn": false
    })));
    assert!(state.items().is_empty());
}
