// tests/cli.rs
// =============================================================================
// Binary-level tests for the CLI surface.
//
// These run the compiled repo-harvester binary itself (Cargo exposes its
// path through the CARGO_BIN_EXE_<name> env var at test-build time) and
// assert on exit codes and printed output. No stub server is running here:
// every scenario below must finish before the first network request would
// be made.
// =============================================================================

use std::process::Command;

fn harvester() -> Command {
    Command::new(env!("CARGO_BIN_EXE_repo-harvester"))
}

#[test]
fn refuses_a_pre_existing_destination_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let dest = tmp.path().join("archives");
    std::fs::create_dir(&dest).unwrap();
    std::fs::write(dest.join("sentinel.txt"), b"keep me").unwrap();

    let output = harvester()
        .args(["-u", "alice", "-d", dest.to_str().unwrap()])
        .output()
        .unwrap();

    // Exit code 1, with the refusal on stdout after the creation attempt
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("creating the"),
        "missing creation line: {}",
        stdout
    );
    assert!(
        stdout.contains("already exists"),
        "missing refusal line: {}",
        stdout
    );

    // The directory is left exactly as it was: no zip files, sentinel intact
    assert_eq!(std::fs::read_dir(&dest).unwrap().count(), 1);
    assert_eq!(
        std::fs::read(dest.join("sentinel.txt")).unwrap(),
        b"keep me"
    );
}

#[test]
fn missing_required_arguments_is_a_usage_error() {
    let output = harvester().output().unwrap();

    // clap reports missing required options with a usage error on stderr
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--user-name"), "unexpected stderr: {}", stderr);
    assert!(stderr.contains("--dir"), "unexpected stderr: {}", stderr);
}
