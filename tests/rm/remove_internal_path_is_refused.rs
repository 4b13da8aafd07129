use crate::common::command::{repository_dir, run_vcs_command};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn remove_internal_path_is_refused(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir;
    run_vcs_command(dir.path(), &["init"]).assert().success();

    run_vcs_command(dir.path(), &["rm", ".vcs/staging"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid path"));

    // the storage directory must be left intact
    assert!(dir.path().join(".vcs").join("staging").is_dir());

    Ok(())
}
