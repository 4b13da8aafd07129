use crate::common::command::{head_id, repository_dir, run_vcs_command, vcs_commit};
use crate::common::file::{FileSpec, random_file_name, write_file};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn graph_prints_ancestry(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir;
    run_vcs_command(dir.path(), &["init"]).assert().success();

    let file_name = random_file_name();
    write_file(FileSpec::new(dir.path().join(&file_name), "v1".to_string()));
    run_vcs_command(dir.path(), &["add", &file_name])
        .assert()
        .success();
    vcs_commit(dir.path(), "first").assert().success();
    let first = head_id(dir.path());

    write_file(FileSpec::new(dir.path().join(&file_name), "v2".to_string()));
    run_vcs_command(dir.path(), &["add", &file_name])
        .assert()
        .success();
    vcs_commit(dir.path(), "second").assert().success();
    let second = head_id(dir.path());

    run_vcs_command(dir.path(), &["graph"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "{} -> {}",
            &second[..7],
            &first[..7]
        )))
        .stdout(predicate::str::contains(format!("{} -> None", &first[..7])))
        .stdout(predicate::str::contains(format!("master={}", &second[..7])))
        .stdout(predicate::str::contains(format!("HEAD={}", &second[..7])));

    Ok(())
}
