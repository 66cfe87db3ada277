//! Plant list logic
//!
//! Pure helpers for local list mutation and selection adjustment.

use crate::storage::Plant;

/// Produce a new list excluding the plant with the given id, preserving the
/// order of everything else. The list is never mutated in place.
pub fn remove_by_id(plants: &[Plant], id: u64) -> Vec<Plant> {
    plants.iter().filter(|p| p.id != id).cloned().collect()
}

/// Clamp a selection index after the list changed size.
///
/// Returns None for an empty list, otherwise keeps the index in bounds so
/// the highlight does not fall off the end after a removal.
pub fn clamp_selection(selected: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(selected.unwrap_or(0).min(len - 1))
}
