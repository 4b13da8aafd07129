use crate::areas::repository::Repository;
use std::io::Write;

impl Repository {
    /// Label the current HEAD commit with a new branch name
    ///
    /// The active branch is left untouched; switching is an explicit
    /// checkout.
    pub fn branch(&mut self, name: &str) -> anyhow::Result<()> {
        let _guard = self.guard()?;

        self.refs().create_branch(name)?;

        writeln!(self.writer(), "Branch '{}' created.", name)?;

        Ok(())
    }
}
