//! Error types for history navigation.

use super::waypoint::Waypoint;
use std::time::Duration;
use thiserror::Error;

/// Errors returned by backward/forward navigation.
///
/// All of them are recoverable. Hosts usually surface them as a status
/// message and carry on.
#[derive(Debug, Error)]
pub enum NavigationError {
    /// The back stack is empty.
    #[error("no waypoints backward")]
    EmptyBackHistory,
    /// The forward stack is empty.
    #[error("no waypoints forward")]
    EmptyForwardHistory,
    /// The host did not finish opening the target in time.
    #[error("navigation timed out after {0:?}")]
    NavigationTimeout(Duration),
    /// The host could not open the target.
    #[error("failed to open {target}: {reason:#}")]
    OpenFailed {
        target: Waypoint,
        reason: anyhow::Error,
    },
}

impl NavigationError {
    /// Returns true for the empty-history errors.
    pub fn is_empty_history(&self) -> bool {
        matches!(
            self,
            NavigationError::EmptyBackHistory | NavigationError::EmptyForwardHistory
        )
    }
}
