//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each protected page wraps its body in `RequirePage`, so the body (and
//! any request it starts) only exists once the guard says `Render`.

pub mod admin;
pub mod admin_catalog;
pub mod admin_tickets;
pub mod home;
pub mod login;
pub mod profile;
pub mod signup;
pub mod tickets;
