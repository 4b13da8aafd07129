use crate::common::command::{
    active_branch, head_id, reference, repository_dir, run_vcs_command, vcs_commit,
};
use crate::common::file::{FileSpec, random_file_name, write_file};
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn create_branch_points_at_head(
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
        .success()
        .stdout(predicate::str::contains("Branch 'feature' created."));

    assert_eq!(reference(dir.path(), "feature"), head_id(dir.path()));
    // creating a branch must not switch to it
    assert_eq!(active_branch(dir.path()), "master");

    Ok(())
}
