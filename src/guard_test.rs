use super::*;

// =============================================================
// Install gate
// =============================================================

#[test]
fn uninstalled_redirects_issue_list_to_install() {
    assert_eq!(
        check_path("/issues", false, false),
        GuardOutcome::RedirectToInstall
    );
}

#[test]
fn uninstalled_allows_install_route_itself() {
    // No redirect loop while the instance is being set up.
    assert_eq!(check_path("/install", false, false), GuardOutcome::Allow);
}

#[test]
fn install_gate_wins_over_login_gate() {
    // Uninstalled and logged out on a login-required route: install first.
    assert_eq!(check_path("/", false, false), GuardOutcome::RedirectToInstall);
}

#[test]
fn uninstalled_redirects_even_public_routes() {
    assert_eq!(check_path("/about", false, true), GuardOutcome::RedirectToInstall);
    assert_eq!(check_path("/login", false, false), GuardOutcome::RedirectToInstall);
}

// =============================================================
// Login gate
// =============================================================

#[test]
fn installed_logged_out_root_redirects_to_login() {
    assert_eq!(check_path("/", true, false), GuardOutcome::RedirectToLogin);
}

#[test]
fn installed_logged_out_issue_routes_redirect_to_login() {
    assert_eq!(check_path("/issues", true, false), GuardOutcome::RedirectToLogin);
    assert_eq!(check_path("/issues/iss_42", true, false), GuardOutcome::RedirectToLogin);
}

#[test]
fn installed_logged_out_public_routes_allowed() {
    assert_eq!(check_path("/login", true, false), GuardOutcome::Allow);
    assert_eq!(check_path("/about", true, false), GuardOutcome::Allow);
}

// =============================================================
// Pass
// =============================================================

#[test]
fn installed_logged_in_allows_everything() {
    for path in ["/", "/issues", "/issues/iss_42", "/about", "/login", "/install"] {
        assert_eq!(check_path(path, true, true), GuardOutcome::Allow, "path {path}");
    }
}

#[test]
fn unknown_path_passes_once_installed() {
    // The router's own fallback handles 404s; the guard only gates known
    // meta flags and the install state.
    assert_eq!(check_path("/nope", true, false), GuardOutcome::Allow);
    assert_eq!(check_path("/nope", false, false), GuardOutcome::RedirectToInstall);
}

#[test]
fn guard_is_stateless_across_calls() {
    assert_eq!(check_path("/", true, false), GuardOutcome::RedirectToLogin);
    // Same inputs, same outcome; no hidden state from the prior call.
    assert_eq!(check_path("/", true, false), GuardOutcome::RedirectToLogin);
    assert_eq!(check_path("/", true, true), GuardOutcome::Allow);
}
