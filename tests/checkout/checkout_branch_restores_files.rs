use crate::common::command::{
    active_branch, head_id, reference, repository_dir, run_vcs_command, staging_path, vcs_commit,
};
use crate::common::file::{FileSpec, random_file_name, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::fs;

#[rstest]
fn checkout_branch_restores_files(
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
    let first = head_id(dir.path());

    run_vcs_command(dir.path(), &["branch", "feature"])
        .assert()
        .success();

    write_file(FileSpec::new(dir.path().join(&file_name), "v2".to_string()));
    run_vcs_command(dir.path(), &["add", &file_name])
        .assert()
        .success();
    vcs_commit(dir.path(), "second").assert().success();

    run_vcs_command(dir.path(), &["checkout", "feature"])
        .assert()
        .success();

    assert_eq!(active_branch(dir.path()), "feature");
    assert_eq!(head_id(dir.path()), first);
    // master keeps pointing at the second image
    assert_ne!(reference(dir.path(), "master"), first);

    assert_eq!(fs::read_to_string(dir.path().join(&file_name))?, "v1");
    assert_eq!(
        fs::read_to_string(staging_path(dir.path(), &file_name))?,
        "v1"
    );

    Ok(())
}
