use crate::common::redirect_temp_dir;
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::{Path, PathBuf};

#[fixture]
pub fn repository_dir() -> TempDir {
    redirect_temp_dir();
    TempDir::new().expect("Failed to create temp dir")
}

pub fn run_vcs_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("vcs").expect("Failed to find vcs binary");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn vcs_commit(dir: &Path, message: &str) -> Command {
    run_vcs_command(dir, &["commit", "-m", message])
}

pub fn vcs_merge(dir: &Path, branch: &str) -> Command {
    run_vcs_command(dir, &["merge", branch])
}

/// Parse `.vcs/references` into (name, commit id) pairs, in file order
pub fn read_references(dir: &Path) -> Vec<(String, String)> {
    let content = std::fs::read_to_string(dir.join(".vcs").join("references"))
        .expect("Failed to read references file");

    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let (name, id) = line.split_once('=').expect("Malformed reference line");
            (name.to_string(), id.trim().to_string())
        })
        .collect()
}

pub fn reference(dir: &Path, name: &str) -> String {
    read_references(dir)
        .into_iter()
        .find(|(entry, _)| entry == name)
        .map(|(_, id)| id)
        .unwrap_or_else(|| panic!("Reference {} not found", name))
}

pub fn head_id(dir: &Path) -> String {
    reference(dir, "HEAD")
}

pub fn active_branch(dir: &Path) -> String {
    std::fs::read_to_string(dir.join(".vcs").join("activated"))
        .expect("Failed to read activated file")
        .trim()
        .to_string()
}

pub fn staging_path(dir: &Path, relative: &str) -> PathBuf {
    dir.join(".vcs").join("staging").join(relative)
}

pub fn image_path(dir: &Path, id: &str) -> PathBuf {
    dir.join(".vcs").join("images").join(id)
}

pub fn image_metadata(dir: &Path, id: &str) -> String {
    std::fs::read_to_string(dir.join(".vcs").join("images").join(format!("{}.meta", id)))
        .expect("Failed to read image metadata")
}

pub fn image_count(dir: &Path) -> usize {
    std::fs::read_dir(dir.join(".vcs").join("images"))
        .expect("Failed to list image store")
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_dir())
        .count()
}
