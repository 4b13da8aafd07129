use crate::common::command::{repository_dir, run_vcs_command, staging_path};
use crate::common::file::{FileSpec, random_file_name, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::fs;

#[rstest]
fn add_replaces_previously_staged_version(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir;
    run_vcs_command(dir.path(), &["init"]).assert().success();

    let file_name = random_file_name();
    write_file(FileSpec::new(dir.path().join(&file_name), "first".to_string()));
    run_vcs_command(dir.path(), &["add", &file_name])
        .assert()
        .success();

    write_file(FileSpec::new(dir.path().join(&file_name), "second".to_string()));
    run_vcs_command(dir.path(), &["add", &file_name])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(staging_path(dir.path(), &file_name))?,
        "second"
    );

    Ok(())
}
