use crate::common::command::{repository_dir, run_vcs_command, staging_path};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;
use std::fs;

#[rstest]
fn add_directory_recursively(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir;
    run_vcs_command(dir.path(), &["init"]).assert().success();

    write_file(FileSpec::new(
        dir.path().join("a").join("1.txt"),
        "one".to_string(),
    ));
    write_file(FileSpec::new(
        dir.path().join("a").join("b").join("2.txt"),
        "two".to_string(),
    ));

    run_vcs_command(dir.path(), &["add", "a"]).assert().success();

    assert_eq!(fs::read_to_string(staging_path(dir.path(), "a/1.txt"))?, "one");
    assert_eq!(fs::read_to_string(staging_path(dir.path(), "a/b/2.txt"))?, "two");

    Ok(())
}
