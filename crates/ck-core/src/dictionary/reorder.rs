//! Priority reordering.

use super::entry::DictionaryEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// Move the entry at `index` one step in `direction`.
///
/// Swaps the priority values of the entry and its neighbor, then swaps their
/// positions, so list order and descending-priority order stay consistent.
/// A local transposition: every other entry keeps its priority untouched.
/// No-op for lists of one or fewer entries and at the edges.
pub fn move_entry(entries: &mut [DictionaryEntry], index: usize, direction: MoveDirection) {
    if entries.len() <= 1 || index >= entries.len() {
        return;
    }
    let neighbor = match direction {
        MoveDirection::Up => {
            if index == 0 {
                return;
            }
            index - 1
        }
        MoveDirection::Down => {
            if index + 1 >= entries.len() {
                return;
            }
            index + 1
        }
    };
    let priority = entries[index].priority;
    entries[index].priority = entries[neighbor].priority;
    entries[neighbor].priority = priority;
    entries.swap(index, neighbor);
}
