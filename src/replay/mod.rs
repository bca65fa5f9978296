//! Replaying event scripts against a session.
//!
//! Scripts stand in for a live editor: each line is a host event or a user
//! command. Replaying feeds them through a [`Session`] backed by a
//! [`RecordingHost`] and reports the status line after every step.
//!
//! # Modules
//!
//! - `parser`: Line-oriented script format
//! - `host`: In-memory host that records requests and echoes navigation
//! - `error`: Script parse errors
//!
//! # Example
//!
//! ```
//! use wayback::config::Config;
//! use wayback::host::Session;
//! use wayback::replay::{host::RecordingHost, parser::parse_script, replay};
//!
//! # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
//! let script = parse_script("move raven.txt 0 20\nmove raven.txt 20 44\nback\n").unwrap();
//! let mut session = Session::activate(&Config::default(), RecordingHost::new());
//!
//! let reports = replay(&mut session, &script).await;
//! assert_eq!(reports.last().unwrap().status, "ON | 0 back | 1 fwd | raven.txt:20 | at raven.txt:20");
//! # });
//! ```

pub mod error;
pub mod host;
pub mod parser;

pub use error::ScriptError;

use crate::host::Session;
use crate::ui::status_line::{render_status_line, Message};
use host::RecordingHost;
use parser::{ReplayStep, ScriptLine};
use tracing::trace;

/// What the session looked like after one script step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    /// Script line of the step (1-based).
    pub line: usize,
    /// Rendered status line after the step.
    pub status: String,
    pub message: Option<Message>,
}

/// Runs `script` against `session`, one step at a time.
///
/// Navigation failures do not stop the replay; they show up as messages in
/// the report for the failing step.
pub async fn replay(session: &mut Session<RecordingHost>, script: &[ScriptLine]) -> Vec<StepReport> {
    let mut reports = Vec::with_capacity(script.len());

    for entry in script {
        trace!(line = entry.line, step = ?entry.step, "replaying");
        let message = run_step(session, &entry.step).await;
        settle(session).await;

        reports.push(StepReport {
            line: entry.line,
            status: render_status_line(session.engine(), message.as_ref()),
            message,
        });
    }

    reports
}

async fn run_step(session: &mut Session<RecordingHost>, step: &ReplayStep) -> Option<Message> {
    match step {
        ReplayStep::Event(event) => session
            .handle_event(event.clone())
            .await
            .err()
            .map(|err| Message::from_error(&err)),
        ReplayStep::Command(command) => match session.run_command(*command).await {
            Ok(Some(target)) => Some(Message::info(format!("at {}", target))),
            Ok(None) => None,
            Err(err) => Some(Message::from_error(&err)),
        },
        ReplayStep::SetEnabled(enabled) => {
            session.set_enabled(*enabled);
            None
        }
    }
}

/// Delivers the events the host produced while handling the last step.
async fn settle(session: &mut Session<RecordingHost>) {
    loop {
        let events = session.host_mut().take_events();
        if events.is_empty() {
            break;
        }
        for event in events {
            // Echoes only ever re-open a location; they cannot fail.
            let _ = session.handle_event(event).await;
        }
    }
}
