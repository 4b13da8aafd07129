use crate::common::command::{active_branch, repository_dir, run_vcs_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn init_repository_successfully(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir;

    run_vcs_command(dir.path(), &["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized empty repository in"));

    assert!(dir.path().join(".vcs").is_dir());
    assert!(dir.path().join(".vcs").join("images").is_dir());
    assert!(dir.path().join(".vcs").join("staging").is_dir());
    assert_eq!(active_branch(dir.path()), "master");

    Ok(())
}
