//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared state from the Leptos context providers installed
//! by `App`. `guard` is the only place route access is decided.

pub mod guard;
pub mod navbar;
pub mod toast_stack;
