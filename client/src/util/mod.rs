//! Browser glue and pure helpers shared by pages.

pub mod api;
pub mod config;
pub mod form;
pub mod format;
pub mod storage;
