//! Shared layout and chrome components.

pub mod home_layout;
pub mod toast_stack;
