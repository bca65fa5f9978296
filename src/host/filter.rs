//! Movement filter applied to cursor events before they reach the engine.

/// Default number of lines a cursor must move before it counts as a jump.
pub const DEFAULT_LINE_THRESHOLD: usize = 5;

/// Drops cursor movements that are too small to be worth remembering.
///
/// A movement passes when it travels strictly more than `line_threshold`
/// lines. A threshold of 0 forwards every line change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementFilter {
    line_threshold: usize,
}

impl MovementFilter {
    pub fn new(line_threshold: usize) -> Self {
        Self { line_threshold }
    }

    pub fn line_threshold(&self) -> usize {
        self.line_threshold
    }

    /// Returns true if moving from `previous_line` to `line` is a jump.
    ///
    /// Movements with an unknown start or end are passed through and left to
    /// the engine to resolve.
    pub fn passes(&self, previous_line: Option<usize>, line: Option<usize>) -> bool {
        match (previous_line, line) {
            (Some(from), Some(to)) => from.abs_diff(to) > self.line_threshold,
            _ => true,
        }
    }
}

impl Default for MovementFilter {
    fn default() -> Self {
        Self::new(DEFAULT_LINE_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_threshold_needs_six_lines() {
        let filter = MovementFilter::default();
        assert!(!filter.passes(Some(0), Some(5)));
        assert!(filter.passes(Some(0), Some(6)));
        assert!(filter.passes(Some(16), Some(10)));
    }

    #[test]
    fn test_zero_threshold_passes_any_change() {
        let filter = MovementFilter::new(0);
        assert!(filter.passes(Some(3), Some(4)));
        assert!(!filter.passes(Some(3), Some(3)));
    }

    #[test]
    fn test_unknown_lines_pass() {
        let filter = MovementFilter::default();
        assert!(filter.passes(None, Some(1)));
        assert!(filter.passes(Some(1), None));
    }
}
