use crate::areas::repository::Repository;
use crate::artifacts::status::StatusReport;
use colored::Colorize;
use std::io::Write;
use std::path::PathBuf;

impl Repository {
    pub async fn status(&mut self) -> anyhow::Result<()> {
        // hold the staging mutex so the report sees a stable staging area
        let staging = self.staging();
        let _staging = staging.lock().await;

        let report = StatusReport::inspect(self)?;

        match &report.head {
            Some(id) => {
                writeln!(self.writer(), "Current commit id: {}", id)?;
                if !report.active_branch.is_empty() {
                    writeln!(self.writer(), "Active branch: {}", report.active_branch)?;
                }
            }
            None => writeln!(self.writer(), "No images currently exist.")?,
        }

        self.print_section("Changes to be committed:", &report.staged, |p| p.green())?;
        self.print_section("Unstaged changes:", &report.unstaged, |p| p.red())?;
        self.print_section("Untracked files:", &report.untracked, |p| p.red())?;
        self.print_section("Removed files:", &report.removed, |p| p.red())?;

        Ok(())
    }

    fn print_section(
        &self,
        header: &str,
        paths: &[PathBuf],
        paint: impl Fn(&str) -> colored::ColoredString,
    ) -> anyhow::Result<()> {
        writeln!(self.writer(), "\n{}", header)?;
        for path in paths {
            let rendered = path.display().to_string();
            writeln!(self.writer(), "        {}", paint(&rendered))?;
        }

        Ok(())
    }
}
