//! Parser for event scripts.
//!
//! A script has one directive per line. Blank lines and lines starting with
//! `#` are ignored. Arguments are separated by whitespace, so paths cannot
//! contain spaces. A path of `-` means "unknown" and is resolved against the
//! current waypoint.
//!
//! ```text
//! open <path> [line]            the host opened or activated a file
//! open-tab <slot> [line]        the host opened or activated an unsaved tab
//! move <path> <from> <to>       the cursor moved inside a file
//! move-tab <slot> <from> <to>   the cursor moved inside an unsaved tab
//! tab-added <index>             a tab was inserted
//! tab-removed <index>           a tab was closed
//! enable | disable              set recording on or off
//! toggle | back | forward | clear
//! ```

use super::error::ScriptError;
use crate::host::event::{Command, HostEvent, Position};

/// One executable step of a script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayStep {
    Event(HostEvent),
    Command(Command),
    SetEnabled(bool),
}

/// A step together with the script line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    pub line: usize,
    pub step: ReplayStep,
}

/// Parses a whole script.
///
/// # Errors
///
/// Returns the first malformed line.
///
/// # Example
///
/// ```
/// use wayback::replay::parser::{parse_script, ReplayStep};
/// use wayback::host::event::Command;
///
/// let steps = parse_script("# warm up\nopen raven.txt 0\nback\n").unwrap();
/// assert_eq!(steps.len(), 2);
/// assert_eq!(steps[1].line, 3);
/// assert_eq!(steps[1].step, ReplayStep::Command(Command::NavigateBackward));
/// ```
pub fn parse_script(input: &str) -> Result<Vec<ScriptLine>, ScriptError> {
    let mut steps = Vec::new();

    for (index, raw) in input.lines().enumerate() {
        let line = index + 1;
        let text = raw.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }
        steps.push(ScriptLine {
            line,
            step: parse_line(line, text)?,
        });
    }

    Ok(steps)
}

/// Parses a single non-empty directive.
pub fn parse_line(line: usize, text: &str) -> Result<ReplayStep, ScriptError> {
    let mut args = Args::new(line, text);
    let directive = args.directive;

    let step = match directive {
        "open" => {
            let path = args.path("path")?;
            let cursor = args.optional_number()?;
            ReplayStep::Event(HostEvent::TabOpened {
                position: Position {
                    path,
                    tab_slot: None,
                    line: cursor,
                },
            })
        }
        "open-tab" => {
            let slot = args.number("slot")?;
            let cursor = args.optional_number()?;
            ReplayStep::Event(HostEvent::TabOpened {
                position: Position {
                    path: None,
                    tab_slot: Some(slot),
                    line: cursor,
                },
            })
        }
        "move" => {
            let path = args.path("path")?;
            let from = args.number("from")?;
            let to = args.number("to")?;
            ReplayStep::Event(HostEvent::CursorMoved {
                position: Position {
                    path,
                    tab_slot: None,
                    line: Some(to),
                },
                previous_line: Some(from),
            })
        }
        "move-tab" => {
            let slot = args.number("slot")?;
            let from = args.number("from")?;
            let to = args.number("to")?;
            ReplayStep::Event(HostEvent::CursorMoved {
                position: Position::in_tab(slot, to),
                previous_line: Some(from),
            })
        }
        "tab-added" => ReplayStep::Event(HostEvent::TabAdded {
            index: args.number("index")?,
        }),
        "tab-removed" => ReplayStep::Event(HostEvent::TabRemoved {
            index: args.number("index")?,
        }),
        "enable" => ReplayStep::SetEnabled(true),
        "disable" => ReplayStep::SetEnabled(false),
        other => match other.parse::<Command>() {
            Ok(command) => ReplayStep::Command(command),
            Err(_) => {
                return Err(ScriptError::UnknownDirective {
                    line,
                    directive: other.to_string(),
                })
            }
        },
    };

    args.finish()?;
    Ok(step)
}

/// Cursor over the whitespace-separated arguments of one line.
struct Args<'a> {
    line: usize,
    directive: &'a str,
    rest: std::str::SplitWhitespace<'a>,
}

impl<'a> Args<'a> {
    fn new(line: usize, text: &'a str) -> Self {
        let mut rest = text.split_whitespace();
        let directive = rest.next().unwrap_or_default();
        Self {
            line,
            directive,
            rest,
        }
    }

    fn required(&mut self, argument: &'static str) -> Result<&'a str, ScriptError> {
        self.rest.next().ok_or_else(|| ScriptError::MissingArgument {
            line: self.line,
            directive: self.directive.to_string(),
            argument,
        })
    }

    fn path(&mut self, argument: &'static str) -> Result<Option<String>, ScriptError> {
        let value = self.required(argument)?;
        Ok((value != "-").then(|| value.to_string()))
    }

    fn number(&mut self, argument: &'static str) -> Result<usize, ScriptError> {
        let value = self.required(argument)?;
        self.parse_number(value)
    }

    fn optional_number(&mut self) -> Result<Option<usize>, ScriptError> {
        match self.rest.next() {
            Some(value) => self.parse_number(value).map(Some),
            None => Ok(None),
        }
    }

    fn parse_number(&self, value: &str) -> Result<usize, ScriptError> {
        value.parse().map_err(|_| ScriptError::InvalidNumber {
            line: self.line,
            value: value.to_string(),
        })
    }

    fn finish(mut self) -> Result<(), ScriptError> {
        match self.rest.next() {
            Some(extra) => Err(ScriptError::UnexpectedArgument {
                line: self.line,
                found: extra.to_string(),
            }),
            None => Ok(()),
        }
    }
}
