//! Merge policy for adjacent waypoints.

use super::waypoint::Waypoint;

/// Maximum line distance at which two waypoints in the same place collapse.
pub const MERGE_LINE_DISTANCE: usize = 1;

/// Merges two adjacent waypoints.
///
/// If only one side is present it is returned alone. If both refer to the
/// same file or tab and are at most one line apart, only `most_recent` is
/// kept. Otherwise both are returned, oldest first.
///
/// The policy is pairwise and order-sensitive; it is not transitive across
/// longer runs. See [`coalesce`](super::coalesce::coalesce) for the sweep.
///
/// # Example
///
/// ```
/// use wayback::history::merge::merge;
/// use wayback::history::waypoint::Waypoint;
///
/// let older = Waypoint::at_path("a.txt", 14);
/// let newer = Waypoint::at_path("a.txt", 15);
/// assert_eq!(merge(Some(&older), Some(&newer)), vec![newer]);
/// ```
pub fn merge(least_recent: Option<&Waypoint>, most_recent: Option<&Waypoint>) -> Vec<Waypoint> {
    match (least_recent, most_recent) {
        (None, None) => Vec::new(),
        (Some(only), None) | (None, Some(only)) => vec![only.clone()],
        (Some(older), Some(newer)) => {
            if older.same_location(newer) && older.line_distance(newer) <= MERGE_LINE_DISTANCE {
                vec![newer.clone()]
            } else {
                vec![older.clone(), newer.clone()]
            }
        }
    }
}
