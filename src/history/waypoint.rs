//! Waypoints: remembered cursor locations.
//!
//! A waypoint has line granularity. Two positions on the same line but in
//! different columns are the same waypoint.

use serde::Serialize;
use std::fmt;

/// The identity a host is asked to open when navigating to a waypoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Location {
    /// A file that exists on disk.
    Path(String),
    /// An unsaved tab, identified by its position in the tab bar.
    Tab(usize),
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Path(path) => write!(f, "{}", path),
            Location::Tab(slot) => write!(f, "Unsaved Tab #{}", slot),
        }
    }
}

/// A remembered cursor location.
///
/// Every waypoint carries a file path, a tab slot, or both. A tab slot may be
/// present alongside a path while the path is not yet resolvable by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Waypoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tab_slot: Option<usize>,
    line: usize,
}

impl Waypoint {
    /// Creates a waypoint in a file on disk.
    pub fn at_path(path: impl Into<String>, line: usize) -> Self {
        Self {
            path: Some(path.into()),
            tab_slot: None,
            line,
        }
    }

    /// Creates a waypoint in an unsaved tab.
    pub fn at_tab(tab_slot: usize, line: usize) -> Self {
        Self {
            path: None,
            tab_slot: Some(tab_slot),
            line,
        }
    }

    /// Creates a waypoint at the given location.
    pub fn at(location: Location, line: usize) -> Self {
        match location {
            Location::Path(path) => Self::at_path(path, line),
            Location::Tab(slot) => Self::at_tab(slot, line),
        }
    }

    /// Builds a waypoint from optional identity parts.
    ///
    /// Returns `None` when neither a path nor a tab slot is given.
    pub fn from_parts(path: Option<String>, tab_slot: Option<usize>, line: usize) -> Option<Self> {
        if path.is_none() && tab_slot.is_none() {
            return None;
        }
        Some(Self {
            path,
            tab_slot,
            line,
        })
    }

    /// Attaches a tab slot to this waypoint.
    #[must_use]
    pub fn with_tab_slot(mut self, tab_slot: usize) -> Self {
        self.tab_slot = Some(tab_slot);
        self
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn tab_slot(&self) -> Option<usize> {
        self.tab_slot
    }

    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the location a host should open, preferring the path.
    pub fn location(&self) -> Location {
        match (&self.path, self.tab_slot) {
            (Some(path), _) => Location::Path(path.clone()),
            (None, Some(slot)) => Location::Tab(slot),
            // Constructors guarantee at least one identity part.
            (None, None) => unreachable!("waypoint without a path or tab slot"),
        }
    }

    /// Returns true if both waypoints refer to the same file or tab.
    ///
    /// Paths are compared when both sides have one; otherwise both tab slots
    /// must be present and equal.
    pub fn same_location(&self, other: &Waypoint) -> bool {
        match (&self.path, &other.path) {
            (Some(a), Some(b)) => a == b,
            _ => self.tab_slot.is_some() && self.tab_slot == other.tab_slot,
        }
    }

    /// Absolute line distance between two waypoints.
    pub fn line_distance(&self, other: &Waypoint) -> usize {
        self.line.abs_diff(other.line)
    }

    pub(crate) fn tab_slot_mut(&mut self) -> &mut Option<usize> {
        &mut self.tab_slot
    }
}

impl fmt::Display for Waypoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.path, self.tab_slot) {
            (Some(path), _) => write!(f, "{}:{}", path, self.line),
            (None, Some(slot)) => write!(f, "Unsaved Tab #{}:{}", slot, self.line),
            (None, None) => write!(f, "?:{}", self.line),
        }
    }
}
