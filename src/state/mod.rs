//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `setting`, `notifications`) so
//! individual views can depend on small focused models. Each container is
//! an `RwSignal` context provided once at the application root; readers
//! are everywhere, writers are the bootstrap sequence, the login flow,
//! and the toast dispatcher.

pub mod auth;
pub mod notifications;
pub mod setting;
