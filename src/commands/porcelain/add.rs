use crate::areas::repository::Repository;
use anyhow::Context;
use std::io::Write;
use std::path::Path;

impl Repository {
    /// Mirror a working-tree file or directory into the staging area
    pub async fn add(&mut self, path: &str) -> anyhow::Result<()> {
        let _guard = self.guard()?;

        let absolute = Path::new(path)
            .canonicalize()
            .with_context(|| format!("`{}` doesn't exist", path))?;
        let relative = self.path_map().relativize(&absolute)?;

        let staging = self.staging();
        let staging = staging.lock().await;
        staging.stage(&absolute, &relative)?;

        writeln!(self.writer(), "'{}' added to staging area.", path)?;

        Ok(())
    }
}
