use crate::checker::{verify, CheckerError};
use crate::instance::InstanceRecord;
use crate::solution::Coloring;

/** outcome of merging a candidate coloring into an instance record */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// the candidate was accepted as the new best known coloring;
    /// the record must be persisted by the caller
    Improved {
        /// verified color count of the previous best, if there was a valid one
        previous: Option<usize>,
        /// verified color count of the accepted candidate
        num_colors: usize,
    },
    /// the candidate is valid but not strictly better than the current best
    NotBetter {
        /// verified color count of the current best
        current: usize,
        /// verified color count of the candidate
        num_colors: usize,
    },
    /// the candidate failed verification; the record is left untouched
    Invalid(CheckerError),
}

/**
merges a candidate coloring into the record's best known coloring.

The stored coloring is re-verified first: a stored coloring that fails
verification never blocks a valid candidate (its count is treated as absent
rather than compared), and its failure is returned alongside the outcome so
the caller can report the corrupted state. The candidate is then verified,
and accepted only if its *verified* color count is strictly smaller than the
current verified count. On acceptance the stored `num_colors` is the
checker's count, never the candidate's claim.

The canonical instance type tag is restamped whatever the outcome.
*/
pub fn merge_coloring(
    inst:&mut InstanceRecord,
    candidate:&Coloring,
) -> (MergeOutcome, Option<CheckerError>) {
    inst.stamp_type();
    // re-verify the stored best; a corrupted stored coloring counts as absent
    let (current, stored_failure) = match inst.coloring() {
        None => (None, None),
        Some(stored) => match verify(inst, stored.colors()) {
            Ok(k) => (Some(k), None),
            Err(e) => (None, Some(e)),
        }
    };
    // verify the candidate; only the checker's count is trusted
    let num_colors = match verify(inst, candidate.colors()) {
        Ok(k) => k,
        Err(e) => return (MergeOutcome::Invalid(e), stored_failure),
    };
    match current {
        Some(k) if num_colors >= k => {
            (MergeOutcome::NotBetter { current:k, num_colors }, stored_failure)
        }
        _ => {
            inst.set_coloring(candidate.with_verified_count(num_colors));
            (MergeOutcome::Improved { previous:current, num_colors }, stored_failure)
        }
    }
}
