#[cfg(test)]
#[path = "setting_test.rs"]
mod setting_test;

use crate::net::types::SettingMeta;

/// Installation/settings state for the instance.
///
/// `is_installed` is derived: an instance counts as installed exactly
/// when a settings snapshot has been stored. Same lifecycle shape as
/// [`super::auth::AuthState`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingState {
    setting: Option<SettingMeta>,
}

impl SettingState {
    /// The current settings snapshot, if any.
    pub fn current(&self) -> Option<&SettingMeta> {
        self.setting.as_ref()
    }

    /// Replace the stored snapshot unconditionally.
    pub fn set_setting(&mut self, setting: SettingMeta) {
        self.setting = Some(setting);
    }

    /// Drop the snapshot, returning to the not-installed state.
    pub fn clear(&mut self) {
        self.setting = None;
    }

    pub fn is_installed(&self) -> bool {
        self.setting.is_some()
    }

    /// Display name for the instance, when configured.
    pub fn site_name(&self) -> Option<&str> {
        self.setting
            .as_ref()
            .and_then(|s| s.org.site_name.as_deref())
    }
}
