#![allow(dead_code)]

use assert_cmd::Command;
use assert_fs::TempDir;
use fake::Fake;
use fake::faker::lorem::en::{Word, Words};
use rstest::fixture;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const TMPDIR: &str = "../playground";

pub fn redirect_temp_dir() {
    unsafe {
        std::env::set_var("TMPDIR", TMPDIR);
    }

    // Ensure the TMPDIR exists
    if !std::path::Path::new(TMPDIR).exists() {
        std::fs::create_dir_all(TMPDIR).expect("Failed to create TMPDIR");
    }
}

#[fixture]
pub fn repository_dir() -> TempDir {
    redirect_temp_dir();

    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_etch_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    repository_dir
}

pub fn run_etch_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("etch").expect("Failed to find etch binary");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }

    cmd
}

/// Run a command expected to succeed and return its stdout, trimmed
pub fn stdout_line(dir: &Path, args: &[&str]) -> String {
    let output = run_etch_command(dir, args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    String::from_utf8(output)
        .expect("stdout is not utf8")
        .trim()
        .to_string()
}

/// Snapshot every visible file under a directory: relative path -> content
///
/// Skips the storage directory and `.git`, mirroring what snapshots track.
pub fn collect_files(dir: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    WalkDir::new(dir)
        .into_iter()
        .filter_entry(|entry| {
            let name = entry.file_name().to_string_lossy();
            name != ".etch" && name != ".git"
        })
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .map(|entry| {
            let relative = entry
                .path()
                .strip_prefix(dir)
                .expect("walked path is under the root")
                .to_path_buf();
            let content = std::fs::read(entry.path()).expect("Failed to read walked file");

            (relative, content)
        })
        .collect()
}

/// Read the object id stored in the HEAD file
pub fn read_head(dir: &Path) -> String {
    std::fs::read_to_string(dir.join(".etch").join("HEAD"))
        .expect("Failed to read HEAD")
        .trim()
        .to_string()
}

/// Write a crafted, pre-framed object straight into the store and return
/// its 40-hex id
pub fn write_raw_object(dir: &Path, framed: &[u8]) -> String {
    use sha1::{Digest, Sha1};

    let oid = hex::encode(Sha1::digest(framed));
    std::fs::write(dir.join(".etch").join(&oid), framed).expect("Failed to write raw object");

    oid
}

/// Generate files with fake lorem content directly under the given directory
pub fn write_generated_files(dir: &Path, files_count: usize) -> Vec<(PathBuf, String)> {
    (0..files_count)
        .map(|index| {
            let file_name = format!("{}_{}.txt", Word().fake::<String>(), index);
            let file_path = dir.join(&file_name);
            let file_content = Words(5..10).fake::<Vec<String>>().join(" ");
            std::fs::write(&file_path, &file_content).expect("Failed to write generated file");

            (file_path, file_content)
        })
        .collect()
}
