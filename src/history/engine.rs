//! The navigation-history engine.
//!
//! `HistoryEngine` owns two stacks of waypoints and the current waypoint, in
//! the manner of browser back/forward history:
//!
//! - **back**: older locations, most recent at the tail
//! - **current**: where the user is now, on neither stack
//! - **forward**: locations left by navigating backward, most recent at the tail
//!
//! Recording a new waypoint always clears the forward stack. Navigating moves
//! one waypoint between the stacks and asks the [`Host`] to open it.
//!
//! # Example
//!
//! ```
//! use wayback::history::engine::HistoryEngine;
//! use wayback::history::waypoint::Waypoint;
//!
//! let mut engine = HistoryEngine::new();
//! engine.record_waypoint(Waypoint::at_path("raven.txt", 20));
//! engine.record_waypoint(Waypoint::at_path("raven.txt", 44));
//!
//! assert_eq!(engine.num_waypoints(), 2);
//! assert_eq!(engine.peek_waypoint().map(|w| w.line()), Some(20));
//! ```

use super::coalesce::coalesce;
use super::error::NavigationError;
use super::reindex;
use super::waypoint::{Location, Waypoint};
use crate::host::event::Position;
use crate::host::Host;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, trace, warn};

/// Direction of a history navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Backward,
    Forward,
}

impl Direction {
    fn empty_error(self) -> NavigationError {
        match self {
            Direction::Backward => NavigationError::EmptyBackHistory,
            Direction::Forward => NavigationError::EmptyForwardHistory,
        }
    }
}

/// Outcome of applying a tab removal to the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabRemoval {
    /// Stored waypoints dropped because they lived in the closed tab.
    pub dropped: usize,
    /// True if the current waypoint was in the closed tab and was cleared.
    pub current_closed: bool,
}

/// Serializable view of the engine state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistorySnapshot {
    pub enabled: bool,
    pub num_waypoints: usize,
    pub current: Option<Waypoint>,
    pub back: Vec<Waypoint>,
    pub forward: Vec<Waypoint>,
}

/// Back/forward navigation history for cursor locations.
#[derive(Debug, Clone)]
pub struct HistoryEngine {
    back: Vec<Waypoint>,
    forward: Vec<Waypoint>,
    current: Option<Waypoint>,
    enabled: bool,
    /// Set before a programmatic navigation so its cursor echo is not recorded.
    suppress_next_record: bool,
    navigation_timeout: Option<Duration>,
}

impl HistoryEngine {
    /// Creates an empty, enabled engine without a navigation timeout.
    pub fn new() -> Self {
        Self {
            back: Vec::new(),
            forward: Vec::new(),
            current: None,
            enabled: true,
            suppress_next_record: false,
            navigation_timeout: None,
        }
    }

    /// Bounds how long a host may take to open a navigation target.
    #[must_use]
    pub fn with_navigation_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.navigation_timeout = timeout;
        self
    }

    /// Builds an engine with pre-seeded stacks.
    #[doc(hidden)]
    pub fn from_parts(back: Vec<Waypoint>, current: Option<Waypoint>, forward: Vec<Waypoint>) -> Self {
        Self {
            back,
            forward,
            current,
            ..Self::new()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables recording.
    ///
    /// Disabling an enabled engine discards all history.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled && !enabled {
            self.clear_waypoints();
        }
        self.enabled = enabled;
        debug!(enabled, "history recording toggled");
    }

    /// Flips the enabled state and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.set_enabled(!self.enabled);
        self.enabled
    }

    /// Total number of waypoints, counting the current one.
    pub fn num_waypoints(&self) -> usize {
        usize::from(self.current.is_some()) + self.back.len() + self.forward.len()
    }

    /// Discards all history.
    pub fn clear_waypoints(&mut self) {
        self.back.clear();
        self.forward.clear();
        self.current = None;
        self.suppress_next_record = false;
    }

    /// Returns the most recent waypoint on the back stack.
    pub fn peek_waypoint(&self) -> Option<&Waypoint> {
        self.back.last()
    }

    pub fn current(&self) -> Option<&Waypoint> {
        self.current.as_ref()
    }

    pub fn back_stack(&self) -> &[Waypoint] {
        &self.back
    }

    pub fn forward_stack(&self) -> &[Waypoint] {
        &self.forward
    }

    pub fn snapshot(&self) -> HistorySnapshot {
        HistorySnapshot {
            enabled: self.enabled,
            num_waypoints: self.num_waypoints(),
            current: self.current.clone(),
            back: self.back.clone(),
            forward: self.forward.clone(),
        }
    }

    /// Turns a possibly partial position into a candidate waypoint.
    ///
    /// A missing identity is borrowed from the current waypoint. A missing
    /// line is borrowed from the current waypoint only when the candidate is
    /// in the same place. Returns `None` if nothing usable remains.
    pub fn resolve_candidate(&self, position: &Position) -> Option<Waypoint> {
        let current = self.current.as_ref();

        let (path, tab_slot) = if position.path.is_none() && position.tab_slot.is_none() {
            let current = current?;
            (current.path().map(str::to_string), current.tab_slot())
        } else {
            (position.path.clone(), position.tab_slot)
        };

        match position.line {
            Some(line) => Waypoint::from_parts(path, tab_slot, line),
            None => {
                let current = current?;
                let candidate = Waypoint::from_parts(path, tab_slot, current.line())?;
                candidate.same_location(current).then_some(candidate)
            }
        }
    }

    /// Decides whether `candidate` deserves a waypoint.
    ///
    /// Consumes the suppression flag left by a programmatic navigation.
    pub fn should_record(&mut self, candidate: &Waypoint) -> bool {
        if !self.enabled {
            return false;
        }

        if self.suppress_next_record {
            self.suppress_next_record = false;
            trace!(%candidate, "ignoring navigation echo");
            return false;
        }

        match &self.current {
            None => true,
            Some(current) => !current.same_location(candidate) || current.line() != candidate.line(),
        }
    }

    /// Makes `candidate` the current waypoint.
    ///
    /// The previous current waypoint moves to the back stack and the forward
    /// stack is cleared. The back stack is then coalesced if it holds more
    /// than one waypoint.
    pub fn record_waypoint(&mut self, candidate: Waypoint) {
        debug!(waypoint = %candidate, "recording waypoint");

        if let Some(previous) = self.current.replace(candidate) {
            self.back.push(previous);
        }
        self.forward.clear();

        if self.back.len() > 1 {
            self.coalesce();
        }
    }

    /// Records a waypoint for `position` if it is significant.
    ///
    /// Returns true if a waypoint was recorded.
    pub fn observe(&mut self, position: &Position) -> bool {
        let Some(candidate) = self.resolve_candidate(position) else {
            trace!(?position, "position without usable identity");
            return false;
        };

        if !self.should_record(&candidate) {
            return false;
        }

        self.record_waypoint(candidate);
        true
    }

    fn coalesce(&mut self) {
        let mut run = std::mem::take(&mut self.back);
        run.extend(self.current.take());

        let before = run.len();
        let mut kept = coalesce(run);
        trace!(before, after = kept.len(), "coalesced history");

        self.current = kept.pop();
        self.back = kept;
    }

    /// Applies a tab insertion at `index` to every stored waypoint.
    pub fn on_tab_added(&mut self, index: usize) {
        reindex::insert_tab(&mut self.back, index);
        reindex::insert_tab(&mut self.forward, index);
        if let Some(current) = self.current.as_mut() {
            reindex::shift_for_insert(current, index);
        }
        trace!(index, "tab added");
    }

    /// Applies a tab removal at `index` to every stored waypoint.
    ///
    /// Waypoints in the closed tab are dropped. If the current waypoint was in
    /// it, current is cleared and the caller should navigate backward.
    pub fn on_tab_removed(&mut self, index: usize) -> TabRemoval {
        let dropped = reindex::remove_tab(&mut self.back, index)
            + reindex::remove_tab(&mut self.forward, index);

        let current_closed = self
            .current
            .as_ref()
            .is_some_and(|current| reindex::is_in_tab(current, index));

        if current_closed {
            self.current = None;
        } else if let Some(current) = self.current.as_mut() {
            reindex::shift_for_removal(current, index);
        }

        debug!(index, dropped, current_closed, "tab removed");
        TabRemoval {
            dropped,
            current_closed,
        }
    }

    /// Moves one waypoint back in history and opens it in the host.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::EmptyBackHistory`] if there is nowhere to
    /// go, or a timeout/open failure from the host. On host failure the
    /// history is left as it was before the call.
    pub async fn navigate_backward<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
    ) -> Result<Waypoint, NavigationError> {
        self.navigate(Direction::Backward, host).await
    }

    /// Moves one waypoint forward in history and opens it in the host.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::EmptyForwardHistory`] if there is nowhere to
    /// go, or a timeout/open failure from the host.
    pub async fn navigate_forward<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
    ) -> Result<Waypoint, NavigationError> {
        self.navigate(Direction::Forward, host).await
    }

    async fn navigate<H: Host + ?Sized>(
        &mut self,
        direction: Direction,
        host: &mut H,
    ) -> Result<Waypoint, NavigationError> {
        let previous = self.current.clone();
        let suppressed_before = self.suppress_next_record;

        let (from, to) = match direction {
            Direction::Backward => (&mut self.back, &mut self.forward),
            Direction::Forward => (&mut self.forward, &mut self.back),
        };
        let target = from.pop().ok_or_else(|| direction.empty_error())?;
        if let Some(current) = self.current.take() {
            to.push(current);
        }

        self.suppress_next_record = true;
        self.current = Some(target.clone());
        debug!(?direction, %target, "navigating");

        if let Err(err) = open_target(host, &target, self.navigation_timeout).await {
            warn!(?direction, %target, error = %err, "navigation failed, restoring history");
            self.restore(direction, target, previous, suppressed_before);
            return Err(err);
        }

        Ok(target)
    }

    /// Undoes the stack moves of a failed navigation.
    fn restore(
        &mut self,
        direction: Direction,
        target: Waypoint,
        previous: Option<Waypoint>,
        suppressed_before: bool,
    ) {
        let (from, to) = match direction {
            Direction::Backward => (&mut self.back, &mut self.forward),
            Direction::Forward => (&mut self.forward, &mut self.back),
        };
        if previous.is_some() {
            to.pop();
        }
        from.push(target);
        self.current = previous;
        self.suppress_next_record = suppressed_before;
    }
}

impl Default for HistoryEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Asks the host to show `target`.
///
/// Files are opened at the waypoint's line; tab-only waypoints activate their
/// tab, which completes synchronously.
async fn open_target<H: Host + ?Sized>(
    host: &mut H,
    target: &Waypoint,
    timeout: Option<Duration>,
) -> Result<(), NavigationError> {
    let location = target.location();
    if let Location::Tab(slot) = location {
        host.activate_tab(slot);
        return Ok(());
    }

    let open = host.open_location(&location, target.line());
    let opened = match timeout {
        Some(limit) => tokio::time::timeout(limit, open)
            .await
            .map_err(|_| NavigationError::NavigationTimeout(limit))?,
        None => open.await,
    };

    opened.map_err(|reason| NavigationError::OpenFailed {
        target: target.clone(),
        reason,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(line: usize) -> Waypoint {
        Waypoint::at_path("raven.txt", line)
    }

    #[test]
    fn test_new_engine_is_empty_and_enabled() {
        let engine = HistoryEngine::new();
        assert!(engine.is_enabled());
        assert_eq!(engine.num_waypoints(), 0);
        assert!(engine.peek_waypoint().is_none());
        assert!(engine.current().is_none());
    }

    #[test]
    fn test_record_pushes_current_and_clears_forward() {
        let mut engine = HistoryEngine::from_parts(vec![at(10)], Some(at(30)), vec![at(50)]);
        engine.record_waypoint(at(70));

        assert_eq!(engine.back_stack(), &[at(10), at(30)]);
        assert_eq!(engine.current(), Some(&at(70)));
        assert!(engine.forward_stack().is_empty());
        assert_eq!(engine.num_waypoints(), 3);
    }

    #[test]
    fn test_single_back_entry_is_not_coalesced() {
        let mut engine = HistoryEngine::new();
        engine.record_waypoint(at(4));
        engine.record_waypoint(at(5));
        assert_eq!(engine.back_stack(), &[at(4)]);
        assert_eq!(engine.current(), Some(&at(5)));
    }

    #[test]
    fn test_should_record_rules() {
        let mut engine = HistoryEngine::from_parts(Vec::new(), Some(at(10)), Vec::new());
        assert!(!engine.should_record(&at(10)));
        assert!(engine.should_record(&at(11)));
        assert!(engine.should_record(&Waypoint::at_path("other.txt", 10)));

        engine.set_enabled(false);
        assert!(!engine.should_record(&at(99)));
    }

    #[test]
    fn test_suppression_consumed_once() {
        let mut engine = HistoryEngine::new();
        engine.suppress_next_record = true;
        assert!(!engine.should_record(&at(1)));
        assert!(engine.should_record(&at(1)));
    }

    #[test]
    fn test_disable_discards_history() {
        let mut engine = HistoryEngine::from_parts(vec![at(1)], Some(at(9)), vec![at(20)]);
        engine.set_enabled(false);
        assert_eq!(engine.num_waypoints(), 0);
        assert!(engine.toggle());
        assert!(engine.is_enabled());
        assert_eq!(engine.num_waypoints(), 0);
    }

    #[test]
    fn test_resolve_candidate_borrows_from_current() {
        let engine = HistoryEngine::from_parts(Vec::new(), Some(at(10)), Vec::new());

        let no_identity = Position {
            path: None,
            tab_slot: None,
            line: Some(40),
        };
        assert_eq!(engine.resolve_candidate(&no_identity), Some(at(40)));

        let no_line = Position {
            path: Some("raven.txt".to_string()),
            tab_slot: None,
            line: None,
        };
        assert_eq!(engine.resolve_candidate(&no_line), Some(at(10)));

        let elsewhere_no_line = Position {
            path: Some("other.txt".to_string()),
            tab_slot: None,
            line: None,
        };
        assert_eq!(engine.resolve_candidate(&elsewhere_no_line), None);
    }

    #[test]
    fn test_resolve_candidate_without_current() {
        let engine = HistoryEngine::new();
        assert_eq!(engine.resolve_candidate(&Position::default()), None);
    }

    #[test]
    fn test_tab_removed_clears_current_in_closed_tab() {
        let mut engine = HistoryEngine::from_parts(
            vec![Waypoint::at_tab(0, 1), Waypoint::at_tab(2, 1)],
            Some(Waypoint::at_tab(1, 5)),
            Vec::new(),
        );
        let removal = engine.on_tab_removed(1);
        assert_eq!(
            removal,
            TabRemoval {
                dropped: 0,
                current_closed: true
            }
        );
        assert!(engine.current().is_none());
        assert_eq!(
            engine.back_stack(),
            &[Waypoint::at_tab(0, 1), Waypoint::at_tab(1, 1)]
        );
    }
}
