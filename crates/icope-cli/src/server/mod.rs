//! Web server for the collector form and screening API.

pub mod app;
pub mod error;
pub mod handlers;
pub mod state;
