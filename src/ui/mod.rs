//! Text rendering of history state for host status bars.
//!
//! # Modules
//!
//! - `status_line`: One-line summary of the engine plus an optional message

pub mod status_line;
