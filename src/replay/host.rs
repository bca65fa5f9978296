//! An in-memory host that records navigation requests.

use crate::host::event::{HostEvent, Position};
use crate::host::{Host, Location};
use async_trait::async_trait;
use std::collections::HashSet;

/// A request the engine made of the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostRequest {
    Open { location: Location, line: usize },
    ActivateTab(usize),
}

/// Host double that remembers what it was asked to do.
///
/// Like a real editor it reports the switch back as a [`HostEvent`], which
/// callers collect with [`take_events`](RecordingHost::take_events) and feed
/// to the session. Paths marked missing fail to open.
#[derive(Debug, Clone)]
pub struct RecordingHost {
    requests: Vec<HostRequest>,
    pending: Vec<HostEvent>,
    missing: HashSet<String>,
    echo: bool,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self {
            requests: Vec::new(),
            pending: Vec::new(),
            missing: HashSet::new(),
            echo: true,
        }
    }

    /// A host that does not report its own navigation back.
    pub fn without_echo() -> Self {
        Self {
            echo: false,
            ..Self::new()
        }
    }

    /// Makes opening `path` fail.
    pub fn mark_missing(&mut self, path: impl Into<String>) {
        self.missing.insert(path.into());
    }

    pub fn requests(&self) -> &[HostRequest] {
        &self.requests
    }

    pub fn last_request(&self) -> Option<&HostRequest> {
        self.requests.last()
    }

    /// Drains the events the host produced since the last call.
    pub fn take_events(&mut self) -> Vec<HostEvent> {
        std::mem::take(&mut self.pending)
    }

    fn report(&mut self, position: Position) {
        if self.echo {
            self.pending.push(HostEvent::TabOpened { position });
        }
    }
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl Host for RecordingHost {
    async fn open_location(&mut self, location: &Location, line: usize) -> anyhow::Result<()> {
        if let Location::Path(path) = location {
            if self.missing.contains(path) {
                anyhow::bail!("{} no longer exists", path);
            }
        }

        self.requests.push(HostRequest::Open {
            location: location.clone(),
            line,
        });

        let position = match location {
            Location::Path(path) => Position::in_file(path.clone(), line),
            Location::Tab(slot) => Position::in_tab(*slot, line),
        };
        self.report(position);
        Ok(())
    }

    fn activate_tab(&mut self, index: usize) {
        self.requests.push(HostRequest::ActivateTab(index));
        // The cursor line of an activated tab is whatever the tab remembered.
        self.report(Position {
            path: None,
            tab_slot: Some(index),
            line: None,
        });
    }
}
