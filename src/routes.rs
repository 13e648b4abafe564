//! Declarative route table.
//!
//! The table is the single source of truth for paths and per-route meta
//! flags; both the guard and the `Router` wiring in [`crate::app`] read
//! from it. Matching here is deliberately tiny: static segments plus one
//! `:param` form, enough to classify a pathname without consulting the
//! router internals.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Stable route identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteName {
    Install,
    Login,
    About,
    Root,
    IssueList,
    IssueDetails,
}

impl RouteName {
    /// The navigable path for this route.
    ///
    /// For parameterized routes this is the pattern; redirect targets
    /// (install, login) are always static.
    pub fn path(self) -> &'static str {
        ROUTES
            .iter()
            .find(|r| r.name == self)
            .map_or("/", |r| r.path)
    }
}

/// One route definition: name, path pattern, and meta flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDef {
    pub name: RouteName,
    pub path: &'static str,
    pub requires_login: bool,
}

/// The application route table.
pub const ROUTES: &[RouteDef] = &[
    RouteDef { name: RouteName::Install, path: "/install", requires_login: false },
    RouteDef { name: RouteName::Login, path: "/login", requires_login: false },
    RouteDef { name: RouteName::About, path: "/about", requires_login: false },
    RouteDef { name: RouteName::Root, path: "/", requires_login: true },
    RouteDef { name: RouteName::IssueList, path: "/issues", requires_login: true },
    RouteDef { name: RouteName::IssueDetails, path: "/issues/:issueId", requires_login: true },
];

/// Match a pathname against the route table.
///
/// Trailing slashes are ignored; `:param` segments match any non-empty
/// segment. Returns `None` for unknown paths.
pub fn match_path(path: &str) -> Option<&'static RouteDef> {
    let given: Vec<&str> = segments(path);
    ROUTES.iter().find(|route| {
        let pattern: Vec<&str> = segments(route.path);
        pattern.len() == given.len()
            && pattern
                .iter()
                .zip(&given)
                .all(|(p, g)| p.starts_with(':') || p == g)
    })
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}
