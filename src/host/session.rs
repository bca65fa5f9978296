//! Activation lifecycle and event dispatch.
//!
//! A [`Session`] is created when the host activates the history feature and
//! torn down when it deactivates. It binds one [`HistoryEngine`] to one
//! [`Host`], filters raw cursor movement, and turns commands into engine
//! operations.

use super::event::{Command, HostEvent, Position};
use super::filter::MovementFilter;
use super::Host;
use crate::config::Config;
use crate::history::engine::HistoryEngine;
use crate::history::error::NavigationError;
use crate::history::waypoint::Waypoint;
use tracing::{debug, info};

/// One activation of navigation history inside a host editor.
pub struct Session<H: Host> {
    engine: HistoryEngine,
    host: H,
    filter: MovementFilter,
    ignored_prefixes: Vec<String>,
}

impl<H: Host> Session<H> {
    /// Activates history for `host` using `config`.
    pub fn activate(config: &Config, host: H) -> Self {
        let mut engine =
            HistoryEngine::new().with_navigation_timeout(config.navigation_timeout());
        engine.set_enabled(config.enabled);

        info!(
            enabled = config.enabled,
            line_threshold = config.line_threshold,
            "navigation history activated"
        );

        Self {
            engine,
            host,
            filter: MovementFilter::new(config.line_threshold),
            ignored_prefixes: config.ignored_prefixes.clone(),
        }
    }

    /// Tears the session down, discarding all history.
    ///
    /// Returns the host so the caller can keep using it.
    pub fn deactivate(mut self) -> H {
        self.engine.clear_waypoints();
        info!("navigation history deactivated");
        self.host
    }

    pub fn engine(&self) -> &HistoryEngine {
        &self.engine
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn filter(&self) -> MovementFilter {
        self.filter
    }

    /// Enables or disables recording. Disabling discards history.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.engine.set_enabled(enabled);
    }

    /// Dispatches one host event.
    ///
    /// Returns an error only when closing the current tab triggers a backward
    /// navigation that the host fails to complete.
    pub async fn handle_event(&mut self, event: HostEvent) -> Result<(), NavigationError> {
        match event {
            HostEvent::CursorMoved {
                position,
                previous_line,
            } => {
                if !self.filter.passes(previous_line, position.line) {
                    return Ok(());
                }
                self.observe(&position);
            }
            HostEvent::TabOpened { position } => {
                self.observe(&position);
            }
            HostEvent::TabAdded { index } => {
                self.engine.on_tab_added(index);
            }
            HostEvent::TabRemoved { index } => {
                let removal = self.engine.on_tab_removed(index);
                if removal.current_closed {
                    debug!(index, "current tab closed, stepping back");
                    match self.engine.navigate_backward(&mut self.host).await {
                        Ok(_) => {}
                        Err(err) if err.is_empty_history() => {}
                        Err(err) => return Err(err),
                    }
                }
            }
        }
        Ok(())
    }

    /// Runs a user command.
    ///
    /// Navigation commands return the waypoint that became current.
    pub async fn run_command(&mut self, command: Command) -> Result<Option<Waypoint>, NavigationError> {
        debug!(%command, "running command");
        match command {
            Command::Toggle => {
                self.engine.toggle();
                Ok(None)
            }
            Command::Clear => {
                self.engine.clear_waypoints();
                Ok(None)
            }
            Command::NavigateBackward => self.engine.navigate_backward(&mut self.host).await.map(Some),
            Command::NavigateForward => self.engine.navigate_forward(&mut self.host).await.map(Some),
        }
    }

    fn observe(&mut self, position: &Position) -> bool {
        if self.is_ignored(position) {
            return false;
        }
        self.engine.observe(position)
    }

    /// Internal pseudo-documents (settings views and the like) are not history.
    fn is_ignored(&self, position: &Position) -> bool {
        position.path.as_deref().is_some_and(|path| {
            self.ignored_prefixes
                .iter()
                .any(|prefix| path.starts_with(prefix.as_str()))
        })
    }
}
