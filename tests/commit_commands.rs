use assert_fs::fixture::{FileWriteStr, PathChild};
use fake::Fake;
use predicates::prelude::*;
use pretty_assertions::assert_eq;

mod common;

#[test]
fn commit_prints_the_oid_and_moves_head() -> Result<(), Box<dyn std::error::Error>> {
    common::redirect_temp_dir();
    let dir = assert_fs::TempDir::new()?;
    common::run_etch_command(dir.path(), &["init"])
        .assert()
        .success();

    // a handful of generated files to snapshot
    let file_count = (1..=5).fake::<usize>();
    common::write_generated_files(dir.path(), file_count);

    common::run_etch_command(dir.path(), &["commit", "-m", "Initial commit"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^[0-9a-f]{40}\n$")?);

    let head = common::read_head(dir.path());
    assert_eq!(head.len(), 40);

    Ok(())
}

#[test]
fn the_first_commit_has_no_parent_line() -> Result<(), Box<dyn std::error::Error>> {
    common::redirect_temp_dir();
    let dir = assert_fs::TempDir::new()?;
    common::run_etch_command(dir.path(), &["init"])
        .assert()
        .success();

    dir.child("a.txt").write_str("alpha")?;
    let oid = common::stdout_line(dir.path(), &["commit", "-m", "first"]);

    common::run_etch_command(dir.path(), &["cat-file", &oid])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("tree ").and(predicate::str::contains("parent").not()));

    Ok(())
}

#[test]
fn a_second_commit_references_the_first_as_parent() -> Result<(), Box<dyn std::error::Error>> {
    common::redirect_temp_dir();
    let dir = assert_fs::TempDir::new()?;
    common::run_etch_command(dir.path(), &["init"])
        .assert()
        .success();

    dir.child("a.txt").write_str("version one")?;
    let first = common::stdout_line(dir.path(), &["commit", "-m", "first"]);

    std::fs::write(dir.path().join("a.txt"), "version two")?;
    let second = common::stdout_line(dir.path(), &["commit", "-m", "second"]);

    assert_ne!(first, second);
    common::run_etch_command(dir.path(), &["cat-file", &second])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("parent {}", first)));
    assert_eq!(common::read_head(dir.path()), second);

    Ok(())
}

#[test]
fn commit_messages_with_blank_lines_are_stored_verbatim() -> Result<(), Box<dyn std::error::Error>>
{
    common::redirect_temp_dir();
    let dir = assert_fs::TempDir::new()?;
    common::run_etch_command(dir.path(), &["init"])
        .assert()
        .success();

    dir.child("a.txt").write_str("alpha")?;
    let message = "subject line\n\nbody paragraph one\n\nbody paragraph two";
    let oid = common::stdout_line(dir.path(), &["commit", "-m", message]);

    common::run_etch_command(dir.path(), &["cat-file", &oid])
        .assert()
        .success()
        .stdout(predicate::str::ends_with(format!("\n\n{}\n", message)));

    Ok(())
}

#[test]
fn committing_an_empty_repository_records_the_empty_tree()
-> Result<(), Box<dyn std::error::Error>> {
    common::redirect_temp_dir();
    let dir = assert_fs::TempDir::new()?;
    common::run_etch_command(dir.path(), &["init"])
        .assert()
        .success();

    let oid = common::stdout_line(dir.path(), &["commit", "-m", "nothing yet"]);

    assert_eq!(common::read_head(dir.path()), oid);

    Ok(())
}

#[test]
fn log_lists_commits_newest_first() -> Result<(), Box<dyn std::error::Error>> {
    common::redirect_temp_dir();
    let dir = assert_fs::TempDir::new()?;
    common::run_etch_command(dir.path(), &["init"])
        .assert()
        .success();

    dir.child("a.txt").write_str("one")?;
    let first = common::stdout_line(dir.path(), &["commit", "-m", "first change"]);
    std::fs::write(dir.path().join("a.txt"), "two")?;
    let second = common::stdout_line(dir.path(), &["commit", "-m", "second change"]);
    std::fs::write(dir.path().join("a.txt"), "three")?;
    let third = common::stdout_line(dir.path(), &["commit", "-m", "third change"]);

    let output = common::run_etch_command(dir.path(), &["log"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let output = String::from_utf8(output)?;

    let position = |oid: &str| {
        output
            .find(&format!("commit {}", oid))
            .unwrap_or_else(|| panic!("{} missing from log output", oid))
    };
    assert!(position(&third) < position(&second));
    assert!(position(&second) < position(&first));
    assert!(output.contains("    third change"));

    Ok(())
}

#[test]
fn log_can_start_from_an_older_commit() -> Result<(), Box<dyn std::error::Error>> {
    common::redirect_temp_dir();
    let dir = assert_fs::TempDir::new()?;
    common::run_etch_command(dir.path(), &["init"])
        .assert()
        .success();

    dir.child("a.txt").write_str("one")?;
    let first = common::stdout_line(dir.path(), &["commit", "-m", "first change"]);
    std::fs::write(dir.path().join("a.txt"), "two")?;
    let second = common::stdout_line(dir.path(), &["commit", "-m", "second change"]);
    std::fs::write(dir.path().join("a.txt"), "three")?;
    let third = common::stdout_line(dir.path(), &["commit", "-m", "third change"]);

    common::run_etch_command(dir.path(), &["log", &second])
        .assert()
        .success()
        .stdout(
            predicate::str::contains(&first)
                .and(predicate::str::contains(&second))
                .and(predicate::str::contains(&third).not()),
        );

    Ok(())
}

#[test]
fn log_in_a_fresh_repository_reports_no_commits() -> Result<(), Box<dyn std::error::Error>> {
    common::redirect_temp_dir();
    let dir = assert_fs::TempDir::new()?;
    common::run_etch_command(dir.path(), &["init"])
        .assert()
        .success();

    common::run_etch_command(dir.path(), &["log"])
        .assert()
        .success()
        .stdout(predicate::eq("No commits found\n"));

    Ok(())
}

#[test]
fn log_aborts_on_a_broken_parent_chain() -> Result<(), Box<dyn std::error::Error>> {
    common::redirect_temp_dir();
    let dir = assert_fs::TempDir::new()?;
    common::run_etch_command(dir.path(), &["init"])
        .assert()
        .success();

    dir.child("a.txt").write_str("one")?;
    let first = common::stdout_line(dir.path(), &["commit", "-m", "first change"]);
    std::fs::write(dir.path().join("a.txt"), "two")?;
    common::run_etch_command(dir.path(), &["commit", "-m", "second change"])
        .assert()
        .success();

    // knock the first commit out of the store
    std::fs::remove_file(dir.path().join(".etch").join(&first))?;

    common::run_etch_command(dir.path(), &["log"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found in store"));

    Ok(())
}
