use crate::common::command::{head_id, repository_dir, run_vcs_command, vcs_commit};
use crate::common::file::{FileSpec, random_file_name, write_file};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn report_unstaged_modification(
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

    write_file(FileSpec::new(dir.path().join(&file_name), "v2".to_string()));

    run_vcs_command(dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Current commit id: {}",
            head_id(dir.path())
        )))
        .stdout(predicate::str::contains("Active branch: master"))
        .stdout(predicate::str::contains("Unstaged changes:"))
        .stdout(predicate::str::contains(&file_name));

    Ok(())
}
