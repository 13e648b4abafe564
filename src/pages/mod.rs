//! Routed page views.

pub mod about;
pub mod install;
pub mod issue_details;
pub mod issue_list;
pub mod login;
pub mod root;
