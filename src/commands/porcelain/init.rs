use crate::areas::refs::DEFAULT_BRANCH;
use crate::areas::repository::Repository;
use anyhow::Context;
use std::fs;
use std::io::Write;

impl Repository {
    pub async fn init(&mut self) -> anyhow::Result<()> {
        let path_map = self.path_map().clone();

        if path_map.vcs_root().exists() {
            anyhow::bail!(
                "a repository already exists at {}",
                path_map.vcs_root().display()
            );
        }

        fs::create_dir_all(path_map.images_root())
            .context("failed to create .vcs/images directory")?;

        let staging = self.staging();
        let staging = staging.lock().await;
        fs::create_dir_all(staging.path()).context("failed to create .vcs/staging directory")?;

        self.refs()
            .set_active_branch(DEFAULT_BRANCH)
            .context("failed to activate the default branch")?;

        writeln!(
            self.writer(),
            "Initialized empty repository in {}",
            self.path().display()
        )?;

        Ok(())
    }
}
