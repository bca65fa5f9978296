//! Coalescing pass over a run of waypoints.

use super::merge::merge;
use super::waypoint::Waypoint;

/// Collapses consecutive near-duplicate waypoints.
///
/// Folds left over `waypoints`, merging the last kept waypoint with each
/// incoming one. While more than one waypoint has been kept, the last one is
/// replaced by the merge outcome; with exactly one kept, the outcome is only
/// appended. Outcome entries equal to the last kept waypoint are skipped.
///
/// The first waypoint of a run is therefore never absorbed: moving line by
/// line from 0 to 8 yields `[0, 8]`.
///
/// # Example
///
/// ```
/// use wayback::history::coalesce::coalesce;
/// use wayback::history::waypoint::Waypoint;
///
/// let run: Vec<_> = (0..=8).map(|line| Waypoint::at_path("raven.txt", line)).collect();
/// let kept = coalesce(run);
/// assert_eq!(kept.len(), 2);
/// assert_eq!(kept[0].line(), 0);
/// assert_eq!(kept[1].line(), 8);
/// ```
pub fn coalesce(waypoints: Vec<Waypoint>) -> Vec<Waypoint> {
    if waypoints.len() <= 1 {
        return waypoints;
    }

    let mut incoming = waypoints.into_iter();
    let mut kept: Vec<Waypoint> = incoming.next().into_iter().collect();

    for next in incoming {
        let merged = merge(kept.last(), Some(&next));

        if kept.len() > 1 {
            kept.pop();
        }

        for waypoint in merged {
            if kept.last() != Some(&waypoint) {
                kept.push(waypoint);
            }
        }
    }

    kept
}
