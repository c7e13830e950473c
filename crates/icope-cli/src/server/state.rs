//! Application state for the web server.

use std::sync::Arc;
use tokio::sync::RwLock;

use icope::Submission;

/// Shared application state.
///
/// Holds at most one submission: the operator works one record at a time,
/// and a new submission replaces the previous one outright. Nothing is
/// persisted across restarts.
#[derive(Clone, Default)]
pub struct AppState {
    /// The current submission, if any.
    pub submission: Arc<RwLock<Option<Submission>>>,
}

impl AppState {
    /// Create empty application state.
    pub fn new() -> Self {
        Self::default()
    }
}
