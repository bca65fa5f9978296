//! Host-facing interface of the history engine.
//!
//! An editor integration implements [`Host`] so the engine can open
//! navigation targets, and feeds [`HostEvent`]s and [`Command`]s into a
//! [`Session`]. The session owns the engine for the lifetime of one
//! activation.
//!
//! # Modules
//!
//! - `event`: Tagged host events and user commands
//! - `filter`: Line-distance filter applied to cursor movement
//! - `session`: Activation lifecycle and event dispatch

pub mod event;
pub mod filter;
pub mod session;

pub use crate::history::waypoint::Location;
pub use event::{Command, HostEvent, Position};
pub use session::Session;

use async_trait::async_trait;

/// Operations the engine requests from the editor.
///
/// Hosts run on a single-threaded event loop, so the trait does not require
/// `Send` futures.
#[async_trait(?Send)]
pub trait Host {
    /// Opens `location` and places the cursor on `line`.
    ///
    /// Completes once the editor has switched to the location.
    async fn open_location(&mut self, location: &Location, line: usize) -> anyhow::Result<()>;

    /// Activates the tab at `index`.
    fn activate_tab(&mut self, index: usize);
}
