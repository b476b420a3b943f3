//! Integration tests for the staged subprocess pipeline
//!
//! These rely on ubiquitous Unix tools (cat, tr, false, echo) instead of
//! the real recording stack, which is not assumed to be installed.

#![cfg(unix)]

use docshots::error::Error;
use docshots::exec::{capture_output, Pipeline, Stage};

#[test]
fn test_single_stage_threads_bytes_through() {
    let output = Pipeline::new()
        .stage(Stage::new("cat"))
        .run(b"hello pipeline")
        .unwrap();
    assert_eq!(output, b"hello pipeline");
}

#[test]
fn test_stages_run_in_sequence() {
    let output = Pipeline::new()
        .stage(Stage::new("cat"))
        .stage(Stage::new("tr").arg("a-z").arg("A-Z"))
        .run(b"shout this")
        .unwrap();
    assert_eq!(output, b"SHOUT THIS");
}

#[test]
fn test_failing_stage_names_the_program() {
    let result = Pipeline::new()
        .stage(Stage::new("cat"))
        .stage(Stage::new("false"))
        .run(b"doomed");
    match result {
        Err(Error::StageFailed { program, code }) => {
            assert_eq!(program, "false");
            assert_eq!(code, Some(1));
        }
        other => panic!("expected StageFailed, got {:?}", other),
    }
}

#[test]
fn test_unknown_program_fails_to_spawn() {
    let result = Pipeline::new()
        .stage(Stage::new("docshots-no-such-filter"))
        .run(b"");
    assert!(matches!(result, Err(Error::CommandSpawnFailed { .. })));
}

#[test]
fn test_large_payload_does_not_deadlock() {
    // Bigger than any OS pipe buffer; cat must be drained while we feed it.
    let payload = vec![b'x'; 4 * 1024 * 1024];
    let output = Pipeline::new()
        .stage(Stage::new("cat"))
        .run(&payload)
        .unwrap();
    assert_eq!(output.len(), payload.len());
}

#[test]
fn test_capture_output_collects_stdout() {
    let output = capture_output(std::path::Path::new("/bin/echo")).unwrap();
    assert_eq!(output, "\n");
}

#[test]
fn test_capture_output_ignores_exit_status() {
    // The geometry probe tolerates programs that exit non-zero.
    let output = capture_output(std::path::Path::new("/bin/false")).unwrap();
    assert_eq!(output, "");
}
