use crate::areas::repository::Repository;
use crate::artifacts::status::StatusReport;
use crate::errors::Error;
use std::io::Write;

const DETACHMENT_NOTICE: &str = "\
Note: checking out a bare commit id leaves no active branch. Commits taken
from here advance HEAD only; create a branch to retain them.";

impl Repository {
    /// Restore a stored image into the working tree and the staging area
    ///
    /// `target` is a branch name or a raw commit id. Refuses when staged or
    /// unstaged changes exist, before touching anything.
    pub async fn checkout(&mut self, target: &str) -> anyhow::Result<()> {
        let _guard = self.guard()?;

        let target_id = self.refs().resolve(target, self.images())?;
        if !self.images().contains(&target_id) {
            return Err(Error::MissingReference(target.to_string()).into());
        }

        let report = StatusReport::inspect(self)?;
        if report.has_uncommitted_changes() {
            return Err(Error::UncommittedChanges.into());
        }

        // a raw id checks out detached unless some branch points at it
        let branch_name = if self.refs().lookup(target)?.is_some() {
            target.to_string()
        } else {
            self.refs().branch_for(&target_id)?.unwrap_or_default()
        };

        self.refs().set_active_branch(&branch_name)?;
        if branch_name.is_empty() {
            eprintln!("{}", DETACHMENT_NOTICE);
        }

        let staging = self.staging();
        let staging = staging.lock().await;

        for entry in self.images().read_snapshot(&target_id)? {
            self.workspace().restore(&entry.absolute, &entry.relative)?;
            staging.stage(&entry.absolute, &entry.relative)?;
        }

        self.refs().set_head(&target_id)?;

        writeln!(self.writer(), "Reverted to {}", target_id)?;

        Ok(())
    }
}
