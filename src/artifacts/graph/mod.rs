//! Commit graph traversal
//!
//! Parent/ancestor relationships are derived from per-image metadata. The
//! graph is finite and acyclic because an image can only ever name parents
//! that existed before it was created, so breadth-first expansion always
//! terminates.
//!
//! `CommitGraph` is generic over a parent-loading function so the traversal
//! logic stays independent of the snapshot store feeding it.

use crate::artifacts::image::commit_id::CommitId;
use std::collections::{HashMap, VecDeque};

/// Ancestry of a commit as discovered by breadth-first expansion
///
/// Preserves discovery order, which the merge-base search relies on: the
/// first entry is the start commit, and entries closer to the start appear
/// before entries further away.
#[derive(Debug, Clone)]
pub struct AncestryClosure {
    order: Vec<CommitId>,
    parents: HashMap<CommitId, Vec<CommitId>>,
}

impl AncestryClosure {
    /// Check whether a commit appears anywhere in the closure, as an
    /// expanded node or as a recorded parent
    pub fn contains(&self, id: &CommitId) -> bool {
        self.parents.contains_key(id) || self.parents.values().any(|parents| parents.contains(id))
    }

    /// Iterate commit IDs in breadth-first discovery order
    pub fn iter(&self) -> impl Iterator<Item = &CommitId> {
        self.order.iter()
    }

    pub fn parents_of(&self, id: &CommitId) -> Option<&[CommitId]> {
        self.parents.get(id).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Consume the closure into an ordered adjacency list
    /// (commit id -> parent ids), suitable for external rendering
    pub fn into_adjacency(mut self) -> Vec<(CommitId, Vec<CommitId>)> {
        self.order
            .drain(..)
            .map(|id| {
                let parents = self.parents.remove(&id).unwrap_or_default();
                (id, parents)
            })
            .collect()
    }
}

/// Ancestry queries over the commit graph
///
/// Built around a function that loads the parent list of a commit from its
/// metadata.
pub struct CommitGraph<F>
where
    F: Fn(&CommitId) -> anyhow::Result<Vec<CommitId>>,
{
    load_parents: F,
}

impl<F> CommitGraph<F>
where
    F: Fn(&CommitId) -> anyhow::Result<Vec<CommitId>>,
{
    pub fn new(load_parents: F) -> Self {
        Self { load_parents }
    }

    /// Parent IDs of a commit (empty for a root commit)
    pub fn parents_of(&self, id: &CommitId) -> anyhow::Result<Vec<CommitId>> {
        (self.load_parents)(id)
    }

    /// Breadth-first expansion from `start`, following parent links until
    /// no new commits are discovered
    pub fn ancestry_closure(&self, start: &CommitId) -> anyhow::Result<AncestryClosure> {
        let mut order = Vec::new();
        let mut parents = HashMap::new();
        let mut queue = VecDeque::from([start.clone()]);

        while let Some(id) = queue.pop_front() {
            if parents.contains_key(&id) {
                continue;
            }

            let commit_parents = self.parents_of(&id)?;
            for parent in &commit_parents {
                if !parents.contains_key(parent) {
                    queue.push_back(parent.clone());
                }
            }

            order.push(id.clone());
            parents.insert(id, commit_parents);
        }

        Ok(AncestryClosure { order, parents })
    }

    /// Check whether `candidate` is an ancestor of (or equal to) `tip`
    pub fn is_ancestor(&self, candidate: &CommitId, tip: &CommitId) -> anyhow::Result<bool> {
        Ok(self.ancestry_closure(tip)?.contains(candidate))
    }
}
