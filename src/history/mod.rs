//! Navigation history: waypoints, coalescing and the back/forward engine.
//!
//! # Modules
//!
//! - `waypoint`: A remembered cursor location (file or tab, plus line)
//! - `merge`: Pairwise merge policy for adjacent waypoints
//! - `coalesce`: Sweep that collapses near-duplicate runs of waypoints
//! - `reindex`: Tab-slot bookkeeping when tabs open and close
//! - `engine`: The two-stack history engine
//! - `error`: Navigation errors
//!
//! # Example
//!
//! ```
//! use wayback::history::engine::HistoryEngine;
//! use wayback::history::waypoint::Waypoint;
//!
//! let mut engine = HistoryEngine::new();
//! for line in 0..=8 {
//!     engine.record_waypoint(Waypoint::at_path("raven.txt", line));
//! }
//!
//! // Line-by-line movement collapses into the first and last positions.
//! assert_eq!(engine.num_waypoints(), 2);
//! assert_eq!(engine.peek_waypoint().map(|w| w.line()), Some(0));
//! ```

pub mod coalesce;
pub mod engine;
pub mod error;
pub mod merge;
pub mod reindex;
pub mod waypoint;
