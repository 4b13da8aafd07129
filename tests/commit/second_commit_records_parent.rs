use crate::common::command::{head_id, image_metadata, repository_dir, run_vcs_command, vcs_commit};
use crate::common::file::{FileSpec, random_file_name, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn second_commit_records_parent(
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

    write_file(FileSpec::new(dir.path().join(&file_name), "v2".to_string()));
    run_vcs_command(dir.path(), &["add", &file_name])
        .assert()
        .success();
    vcs_commit(dir.path(), "second").assert().success();

    let second = head_id(dir.path());
    assert_ne!(first, second);

    let metadata = image_metadata(dir.path(), &second);
    assert!(metadata.contains(&format!("parent={}", first)));

    Ok(())
}
