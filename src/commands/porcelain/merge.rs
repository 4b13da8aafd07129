use crate::areas::repository::Repository;
use crate::artifacts::graph::CommitGraph;
use crate::artifacts::image::commit_id::CommitId;
use crate::artifacts::merge::{find_merge_base, reconcile_staging};
use crate::errors::Error;
use std::io::Write;

impl Repository {
    /// Merge another branch into the current one
    ///
    /// Finds the common ancestor of the two tips, overlays onto the staging
    /// area every file the other branch changed or removed since then, and
    /// takes a regular commit with both tips as parents.
    pub async fn merge(&mut self, branch: &str) -> anyhow::Result<()> {
        let _guard = self.guard()?;

        let head_id = self
            .refs()
            .read_head()?
            .ok_or_else(|| Error::MissingReference("HEAD".to_string()))?;
        let other_id = self.refs().resolve(branch, self.images())?;

        eprintln!("Merging {} into {}", other_id.to_short(), head_id.to_short());

        let base_id = {
            let graph = CommitGraph::new(|id: &CommitId| self.images().parents_of(id));
            find_merge_base(&graph, &head_id, &other_id)?
        }
        .ok_or_else(|| {
            anyhow::anyhow!("no common ancestor found between HEAD and '{}'", branch)
        })?;

        {
            let staging = self.staging();
            let staging = staging.lock().await;

            reconcile_staging(
                &self.images().image_path(&base_id),
                &self.images().image_path(&other_id),
                staging.path(),
            )?;
        }

        let message = format!("Merged branch: {}", branch);
        self.commit_with_parent(Some(&message), Some(other_id)).await?;

        let active = self.refs().active_branch()?;
        writeln!(self.writer(), "Branches '{}' & '{}' merged.", active, branch)?;

        Ok(())
    }
}
