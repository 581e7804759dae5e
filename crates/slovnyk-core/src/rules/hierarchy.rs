use std::collections::HashSet;

use crate::snapshot::Snapshot;

/// Subject id used for the cycle walk when creating a new dictionary.
///
/// Storage assigns ids starting at 1, so the walk can never encounter this
/// value and creation is never rejected by the cycle check.
pub const CREATE_SENTINEL: i64 = 0;

/// Check whether pointing `subject_id` at `candidate_parent_id` would make
/// the subject its own ancestor.
///
/// Walks the parent chain upward from the candidate: hitting `subject_id`
/// means a cycle would form; an id missing from the snapshot ends the chain
/// (treated as non-cyclic); reaching a root ends the chain.
pub fn would_create_cycle(
    snapshot: &Snapshot,
    subject_id: i64,
    candidate_parent_id: i64,
) -> bool {
    let mut visited = HashSet::new();
    let mut current = Some(candidate_parent_id);

    while let Some(id) = current {
        if id == subject_id {
            return true;
        }

        if !visited.insert(id) {
            // Revisited a node without reaching the subject: the stored
            // chain is already cyclic. Reject rather than loop.
            return true;
        }

        current = match snapshot.get(id) {
            Some(dict) => dict.parent_id,
            // Chain left the snapshot - nothing further to reach
            None => None,
        };
    }

    false
}
