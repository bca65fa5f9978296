//! Host events and user commands.

use std::fmt;
use std::str::FromStr;

/// A possibly partial cursor position reported by the host.
///
/// Hosts fill in what they know. Missing parts are resolved against the
/// current waypoint by the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Position {
    pub path: Option<String>,
    pub tab_slot: Option<usize>,
    pub line: Option<usize>,
}

impl Position {
    /// A position in a file on disk.
    pub fn in_file(path: impl Into<String>, line: usize) -> Self {
        Self {
            path: Some(path.into()),
            tab_slot: None,
            line: Some(line),
        }
    }

    /// A position in an unsaved tab.
    pub fn in_tab(tab_slot: usize, line: usize) -> Self {
        Self {
            path: None,
            tab_slot: Some(tab_slot),
            line: Some(line),
        }
    }
}

/// Events delivered by the host, one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// The cursor moved within a known file or tab.
    CursorMoved {
        position: Position,
        previous_line: Option<usize>,
    },
    /// A tab was opened or became active.
    TabOpened { position: Position },
    /// A tab was inserted at `index`.
    TabAdded { index: usize },
    /// The tab at `index` was closed.
    TabRemoved { index: usize },
}

/// User-invokable commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Toggle,
    NavigateBackward,
    NavigateForward,
    Clear,
}

impl Command {
    /// Command name as registered with the host.
    pub fn name(self) -> &'static str {
        match self {
            Command::Toggle => "toggle",
            Command::NavigateBackward => "navigate-backward",
            Command::NavigateForward => "navigate-forward",
            Command::Clear => "clear",
        }
    }

    /// All commands, in registration order.
    pub fn all() -> [Command; 4] {
        [
            Command::Toggle,
            Command::NavigateForward,
            Command::NavigateBackward,
            Command::Clear,
        ]
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "toggle" => Ok(Command::Toggle),
            "navigate-backward" | "back" => Ok(Command::NavigateBackward),
            "navigate-forward" | "forward" => Ok(Command::NavigateForward),
            "clear" => Ok(Command::Clear),
            other => Err(format!("Unknown command '{}'", other)),
        }
    }
}
