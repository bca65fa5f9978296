//! Tab-slot reindexing for stored waypoints.
//!
//! Tab events arrive before any waypoint for the affected tab is recorded, so
//! two stored waypoints never end up sharing a slot after a shift.

use super::waypoint::Waypoint;

/// Shifts a waypoint's tab slot for a tab inserted at `index`.
pub fn shift_for_insert(waypoint: &mut Waypoint, index: usize) {
    if let Some(slot) = waypoint.tab_slot_mut() {
        if *slot >= index {
            *slot += 1;
        }
    }
}

/// Shifts a waypoint's tab slot for a tab removed at `index`.
///
/// Waypoints in the removed tab itself are left alone; callers drop them
/// first with [`is_in_tab`].
pub fn shift_for_removal(waypoint: &mut Waypoint, index: usize) {
    if let Some(slot) = waypoint.tab_slot_mut() {
        if *slot > index {
            *slot -= 1;
        }
    }
}

/// Returns true if the waypoint lives in the tab at `index`.
pub fn is_in_tab(waypoint: &Waypoint, index: usize) -> bool {
    waypoint.tab_slot() == Some(index)
}

/// Applies a tab insertion to a stack of waypoints.
pub fn insert_tab(stack: &mut [Waypoint], index: usize) {
    for waypoint in stack.iter_mut() {
        shift_for_insert(waypoint, index);
    }
}

/// Applies a tab removal to a stack of waypoints.
///
/// Waypoints in the closed tab are no longer reachable and are dropped.
/// Returns the number of dropped waypoints.
pub fn remove_tab(stack: &mut Vec<Waypoint>, index: usize) -> usize {
    let before = stack.len();
    stack.retain(|waypoint| !is_in_tab(waypoint, index));
    for waypoint in stack.iter_mut() {
        shift_for_removal(waypoint, index);
    }
    before - stack.len()
}
