//! Shared reactive state provided at the app root.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` wraps the core auth state machine; `notices` holds the toast
//! stack. Both are `Copy` handles handed out through Leptos context.

pub mod auth;
pub mod notices;
