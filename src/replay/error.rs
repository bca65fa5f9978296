//! Error types for event-script parsing.

use thiserror::Error;

/// Errors that can occur while parsing an event script.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    /// The first word of a line is not a known directive.
    #[error("line {line}: unknown directive '{directive}'")]
    UnknownDirective { line: usize, directive: String },
    /// A directive is missing a required argument.
    #[error("line {line}: '{directive}' expects a {argument}")]
    MissingArgument {
        line: usize,
        directive: String,
        argument: &'static str,
    },
    /// An argument that should be a line or tab number is not one.
    #[error("line {line}: '{value}' is not a valid number")]
    InvalidNumber { line: usize, value: String },
    /// A directive has more arguments than it accepts.
    #[error("line {line}: unexpected argument '{found}'")]
    UnexpectedArgument { line: usize, found: String },
}

impl ScriptError {
    /// Script line the error refers to (1-based).
    pub fn line(&self) -> usize {
        match self {
            ScriptError::UnknownDirective { line, .. }
            | ScriptError::MissingArgument { line, .. }
            | ScriptError::InvalidNumber { line, .. }
            | ScriptError::UnexpectedArgument { line, .. } => *line,
        }
    }
}
