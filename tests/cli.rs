use std::path::Path;
use std::process::{Command, Output};

fn run(bin: &str, args: &[&Path], config_dir: &Path) -> Output {
    Command::new(bin)
        .args(args)
        .env("AUDIOBOOKS_CONFIG_PATH", config_dir.join("absent.toml"))
        .env("RUST_LOG", "off")
        .output()
        .unwrap()
}

#[test]
fn merge_on_empty_directory_exits_1_with_prefixed_message() {
    let dir = tempfile::tempdir().unwrap();

    let out = run(env!("CARGO_BIN_EXE_audiobooks"), &[dir.path()], dir.path());

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.starts_with("audiobooks: no audio files found in "),
        "stderr was: {stderr}"
    );
}

#[test]
fn unreadable_chapter_file_reports_cause_once() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("01.m4a"), b"not an mp4 container").unwrap();

    let out = run(env!("CARGO_BIN_EXE_audiobooks-index"), &[dir.path()], dir.path());

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.starts_with("audiobooks-index: failed to read metadata from "));
    assert!(!stderr.contains("Caused by"));
    assert_eq!(stderr.lines().count(), 1);
}

#[test]
fn index_on_empty_directory_writes_empty_csv() {
    let dir = tempfile::tempdir().unwrap();

    let out = run(env!("CARGO_BIN_EXE_audiobooks-index"), &[dir.path()], dir.path());

    assert!(out.status.success());
    assert_eq!(std::fs::read(dir.path().join("tracklist.csv")).unwrap(), Vec::<u8>::new());
}

#[test]
fn missing_directory_argument_exits_1() {
    let dir = tempfile::tempdir().unwrap();

    let out = run(env!("CARGO_BIN_EXE_audiobooks"), &[], dir.path());

    assert_eq!(out.status.code(), Some(1));
}
