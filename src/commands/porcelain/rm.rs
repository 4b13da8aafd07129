use crate::areas::repository::Repository;
use anyhow::Context;
use std::io::Write;
use std::path::Path;

impl Repository {
    /// Remove a path from the working tree and from the staging area
    ///
    /// Fails with an invalid-path error (deleting nothing) when the path
    /// points inside repository storage rather than the working tree.
    pub async fn rm(&mut self, path: &str) -> anyhow::Result<()> {
        let _guard = self.guard()?;

        let absolute = Path::new(path)
            .canonicalize()
            .with_context(|| format!("`{}` doesn't exist", path))?;
        let relative = self.path_map().relativize(&absolute)?;

        let staging = self.staging();
        let staging = staging.lock().await;

        self.workspace().remove(&relative)?;
        staging.remove(&relative)?;

        writeln!(self.writer(), "'{}' removed.", path)?;

        Ok(())
    }
}
