#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::UserProfile;

/// Authentication state holding the current logged-in user.
///
/// Provided to the view tree as an `RwSignal` context; the profile is
/// only ever written through [`AuthState::set_logged_in_user`] and
/// [`AuthState::clear`]. `is_logged_in` is derived from presence on
/// every read, never stored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    logged_in_user: Option<UserProfile>,
}

impl AuthState {
    /// The current user, if any.
    pub fn current(&self) -> Option<&UserProfile> {
        self.logged_in_user.as_ref()
    }

    /// Replace the stored user unconditionally.
    pub fn set_logged_in_user(&mut self, user: UserProfile) {
        self.logged_in_user = Some(user);
    }

    /// Reset to logged-out.
    pub fn clear(&mut self) {
        self.logged_in_user = None;
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in_user.is_some()
    }
}
