//! Status line for displaying navigation history state.
//!
//! The status line shows:
//! - Whether recording is on (ON / OFF)
//! - Number of waypoints reachable backward and forward
//! - The current waypoint (or "[no position]")
//! - An optional message, e.g. the result of the last navigation
//!
//! Example status line: `ON | 2 back | 0 fwd | raven.txt:44`

use crate::history::engine::HistoryEngine;
use crate::history::error::NavigationError;
use std::fmt;

/// Message severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

impl fmt::Display for MessageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageLevel::Info => write!(f, "info"),
            MessageLevel::Warning => write!(f, "warning"),
            MessageLevel::Error => write!(f, "error"),
        }
    }
}

/// A message shown after the history summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub level: MessageLevel,
}

impl Message {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: MessageLevel::Info,
        }
    }

    /// Turns a navigation failure into a message.
    ///
    /// Running out of history is routine and only warrants a warning.
    pub fn from_error(err: &NavigationError) -> Self {
        let level = if err.is_empty_history() {
            MessageLevel::Warning
        } else {
            MessageLevel::Error
        };
        Self {
            text: err.to_string(),
            level,
        }
    }
}

/// Renders the status line for `engine`.
///
/// # Example
///
/// ```
/// use wayback::history::engine::HistoryEngine;
/// use wayback::history::waypoint::Waypoint;
/// use wayback::ui::status_line::render_status_line;
///
/// let mut engine = HistoryEngine::new();
/// engine.record_waypoint(Waypoint::at_path("raven.txt", 20));
/// engine.record_waypoint(Waypoint::at_path("raven.txt", 44));
///
/// assert_eq!(render_status_line(&engine, None), "ON | 1 back | 0 fwd | raven.txt:44");
/// ```
pub fn render_status_line(engine: &HistoryEngine, message: Option<&Message>) -> String {
    let state = if engine.is_enabled() { "ON" } else { "OFF" };
    let position = engine
        .current()
        .map(ToString::to_string)
        .unwrap_or_else(|| "[no position]".to_string());

    let mut line = format!(
        "{} | {} back | {} fwd | {}",
        state,
        engine.back_stack().len(),
        engine.forward_stack().len(),
        position
    );

    if let Some(message) = message {
        match message.level {
            MessageLevel::Info => line.push_str(&format!(" | {}", message.text)),
            level => line.push_str(&format!(" | {}: {}", level, message.text)),
        }
    }

    line
}
