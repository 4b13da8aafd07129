use crate::areas::repository::Repository;
use crate::artifacts::graph::CommitGraph;
use crate::artifacts::image::commit_id::CommitId;
use std::io::Write;

impl Repository {
    /// Print the commit adjacency (id -> parents) and branch labels
    ///
    /// Pure presentation over [`Repository::ancestry`]; external renderers
    /// consume the same data through the library call.
    pub fn graph(&mut self, all_commits: bool) -> anyhow::Result<()> {
        let (adjacency, labels) = self.ancestry(all_commits)?;

        for (id, parents) in &adjacency {
            let parents = if parents.is_empty() {
                "None".to_string()
            } else {
                parents
                    .iter()
                    .map(|parent| parent.to_short())
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            writeln!(self.writer(), "{} -> {}", id.to_short(), parents)?;
        }

        for (name, id) in &labels {
            writeln!(self.writer(), "{}={}", name, id.to_short())?;
        }

        Ok(())
    }

    /// Ancestry adjacency reachable from HEAD (or over every stored image
    /// with `all_commits`), in breadth-first discovery order, plus the
    /// branch-name labels of the reference table
    pub fn ancestry(
        &self,
        all_commits: bool,
    ) -> anyhow::Result<(Vec<(CommitId, Vec<CommitId>)>, Vec<(String, CommitId)>)> {
        let graph = CommitGraph::new(|id: &CommitId| self.images().parents_of(id));

        let mut adjacency = Vec::new();
        let mut seen = std::collections::HashSet::new();

        let mut roots = self.refs().read_head()?.into_iter().collect::<Vec<_>>();
        if all_commits {
            roots.extend(self.images().list()?);
        }

        for root in roots {
            if seen.contains(&root) {
                continue;
            }
            for (id, parents) in graph.ancestry_closure(&root)?.into_adjacency() {
                if seen.insert(id.clone()) {
                    adjacency.push((id, parents));
                }
            }
        }

        Ok((adjacency, self.refs().read_table()?))
    }
}
