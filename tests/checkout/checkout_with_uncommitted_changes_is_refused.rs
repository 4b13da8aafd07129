use crate::common::command::{active_branch, head_id, repository_dir, run_vcs_command, vcs_commit};
use crate::common::file::{FileSpec, random_file_name, write_file};
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::fs;

#[rstest]
fn checkout_with_uncommitted_changes_is_refused(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir;
    run_vcs_command(dir.path(), &["init"]).assert().success();

    let file_name = random_file_name();
    write_file(FileSpec::new(dir.path().join(&file_name), "v1".to_string()));
    run_vcs_command(dir.path(), &["add", &file_name])
        .assert()
        .success();
    vcs_commit(dir.path(), "first").assert().success();

    run_vcs_command(dir.path(), &["branch", "feature"])
        .assert()
        .success();

    write_file(FileSpec::new(dir.path().join(&file_name), "dirty".to_string()));

    let head_before = head_id(dir.path());
    run_vcs_command(dir.path(), &["checkout", "feature"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("changes not yet committed"));

    // nothing moved and the dirty file survived
    assert_eq!(head_id(dir.path()), head_before);
    assert_eq!(active_branch(dir.path()), "master");
    assert_eq!(fs::read_to_string(dir.path().join(&file_name))?, "dirty");

    Ok(())
}
