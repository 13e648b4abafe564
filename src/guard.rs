//! Navigation guard: install gate, then login gate.
//!
//! Pure decision logic; the effect that applies the outcome lives in
//! [`crate::app`]. Stateless per call — the only inputs are the target
//! route and synchronous snapshots of the two derived flags.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::routes::{self, RouteDef, RouteName};

/// Terminal outcome of one guard evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Instance not installed: replace the navigation with `/install`.
    RedirectToInstall,
    /// Route needs a session and there is none: go to `/login`.
    RedirectToLogin,
    /// Proceed unchanged.
    Allow,
}

/// Evaluate the gates for a navigation target.
///
/// Gate order is fixed: the install gate wins over the login gate, and a
/// redirect stops evaluation. Navigating to the install route itself is
/// always allowed while uninstalled, otherwise redirecting would loop.
pub fn check(target: Option<&RouteDef>, installed: bool, logged_in: bool) -> GuardOutcome {
    let name = target.map(|r| r.name);

    if !installed && name != Some(RouteName::Install) {
        return GuardOutcome::RedirectToInstall;
    }

    if let Some(route) = target {
        if route.requires_login && !logged_in {
            return GuardOutcome::RedirectToLogin;
        }
    }

    GuardOutcome::Allow
}

/// Convenience wrapper: match a pathname, then run the gates.
pub fn check_path(path: &str, installed: bool, logged_in: bool) -> GuardOutcome {
    check(routes::match_path(path), installed, logged_in)
}
