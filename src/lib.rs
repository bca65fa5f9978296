//! Wayback - back/forward navigation history for editor cursor locations.
//!
//! Wayback remembers where the cursor has been, across files and unsaved
//! tabs, and lets the user step back and forth through those locations the
//! way a browser steps through pages.
//!
//! # Modules
//!
//! - `history`: Waypoints, coalescing, tab reindexing and the history engine
//! - `host`: Host trait, events, commands and the activation session
//! - `config`: TOML configuration
//! - `ui`: Status line rendering
//! - `replay`: Event scripts and an in-memory host for driving the engine

pub mod config;
pub mod history;
pub mod host;
pub mod replay;
pub mod ui;
