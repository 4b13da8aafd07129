use crate::areas::repository::Repository;
use crate::artifacts::image::commit_id::CommitId;
use crate::artifacts::image::metadata::ImageMetadata;
use crate::artifacts::status::StatusReport;
use std::io::Write;

impl Repository {
    /// Snapshot the staging area into a new immutable image and move the
    /// reference table forward
    pub async fn commit(&mut self, message: Option<&str>) -> anyhow::Result<()> {
        let _guard = self.guard()?;
        self.commit_with_parent(message, None).await?;

        Ok(())
    }

    /// Commit, optionally recording a second (merged) parent
    ///
    /// Refuses with a notice when there is nothing staged and nothing
    /// removed. Returns the new commit's ID when one was taken. The caller
    /// holds the repository guard.
    pub(crate) async fn commit_with_parent(
        &mut self,
        message: Option<&str>,
        merged_parent: Option<CommitId>,
    ) -> anyhow::Result<Option<CommitId>> {
        let report = StatusReport::inspect(self)?;
        if !report.has_changes_to_commit() {
            writeln!(self.writer(), "No changes since last commit")?;
            return Ok(None);
        }

        let staging = self.staging();
        let staging = staging.lock().await;

        let id = self.images().create_snapshot(staging.path())?;

        let mut parents = self.refs().read_head()?.into_iter().collect::<Vec<_>>();
        parents.extend(merged_parent);
        let metadata = ImageMetadata::now(parents, message.map(|m| m.trim().to_string()));

        self.images().write_metadata(&id, &metadata)?;
        self.refs().record_commit(&id)?;

        writeln!(self.writer(), "Image {} created.", id)?;

        Ok(Some(id))
    }
}
