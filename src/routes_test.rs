use super::*;

// =============================================================
// Static matching
// =============================================================

#[test]
fn root_path_matches_root_route() {
    let route = match_path("/").expect("root");
    assert_eq!(route.name, RouteName::Root);
    assert!(route.requires_login);
}

#[test]
fn static_paths_match_by_name() {
    assert_eq!(match_path("/install").expect("install").name, RouteName::Install);
    assert_eq!(match_path("/login").expect("login").name, RouteName::Login);
    assert_eq!(match_path("/about").expect("about").name, RouteName::About);
    assert_eq!(match_path("/issues").expect("issues").name, RouteName::IssueList);
}

#[test]
fn trailing_slash_is_ignored() {
    assert_eq!(match_path("/issues/").expect("issues").name, RouteName::IssueList);
    assert_eq!(match_path("/login/").expect("login").name, RouteName::Login);
}

// =============================================================
// Param matching
// =============================================================

#[test]
fn issue_details_matches_any_id_segment() {
    let route = match_path("/issues/iss_42").expect("details");
    assert_eq!(route.name, RouteName::IssueDetails);
    assert!(route.requires_login);
}

#[test]
fn extra_segments_do_not_match() {
    assert!(match_path("/issues/iss_42/events/evt_1").is_none());
    assert!(match_path("/nope").is_none());
}

// =============================================================
// Meta flags and reverse lookup
// =============================================================

#[test]
fn public_routes_do_not_require_login() {
    for name in [RouteName::Install, RouteName::Login, RouteName::About] {
        let route = match_path(name.path()).expect("route");
        assert!(!route.requires_login, "{name:?} should be public");
    }
}

#[test]
fn route_name_path_round_trips() {
    assert_eq!(RouteName::Install.path(), "/install");
    assert_eq!(RouteName::Login.path(), "/login");
    assert_eq!(RouteName::Root.path(), "/");
}
