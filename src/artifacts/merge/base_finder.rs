//! Merge-base search
//!
//! The base is found by a reachability intersection over ancestry closures:
//! compute the other tip's closure, then walk the current tip's closure in
//! breadth-first discovery order and return the first commit that appears
//! anywhere in the other closure.
//!
//! Because the walk follows discovery order, the result is the common
//! ancestor nearest to the current tip by breadth-first depth, which makes
//! the search deterministic. Histories with several equally-near common
//! ancestors (criss-cross merges) resolve to whichever the walk reaches
//! first.

use crate::artifacts::graph::CommitGraph;
use crate::artifacts::image::commit_id::CommitId;

/// Find a common ancestor of `current` and `other`, or `None` when the two
/// tips share no history
pub fn find_merge_base<F>(
    graph: &CommitGraph<F>,
    current: &CommitId,
    other: &CommitId,
) -> anyhow::Result<Option<CommitId>>
where
    F: Fn(&CommitId) -> anyhow::Result<Vec<CommitId>>,
{
    let other_closure = graph.ancestry_closure(other)?;
    let current_closure = graph.ancestry_closure(current)?;

    Ok(current_closure
        .iter()
        .find(|&id| other_closure.contains(id))
        .cloned())
}
