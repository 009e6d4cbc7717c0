//! Integration tests for the Rolldown engine.
//!
//! These tests run real bundles in temporary directories.

use pairbundle_engine::{BuildRequest, DiagnosticKind, Engine, LogLevel, RolldownEngine};
use std::fs;
use tempfile::TempDir;

fn project() -> TempDir {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("src");
    fs::create_dir_all(&src).unwrap();
    fs::write(
        src.join("util.js"),
        "export function greet(name) {\n  return 'Hello, ' + name;\n}\n\nexport function unused() {\n  return 'never imported';\n}\n",
    )
    .unwrap();
    fs::write(
        src.join("app.js"),
        "import { greet } from './util.js';\n\n// say hello\nconsole.log(greet('world'));\n",
    )
    .unwrap();
    temp
}

#[tokio::test]
async fn test_bundles_entry_into_output_file() {
    let temp = project();
    let engine = RolldownEngine::new(temp.path());

    let request = BuildRequest::new("src/app.js", "dist/app.out.js").log_level(LogLevel::Silent);
    let report = engine.build(&request).await;

    assert!(report.is_success(), "unexpected errors: {:?}", report.errors);

    let out = temp.path().join("dist/app.out.js");
    assert!(out.exists(), "output file should be written");
    assert!(report.written.contains(&out));

    let code = fs::read_to_string(&out).unwrap();
    assert!(code.contains("Hello, "), "imported module should be inlined");
    assert!(!code.contains("never imported"), "unused export should be tree-shaken");
}

#[tokio::test]
async fn test_minified_output_is_smaller() {
    let temp = project();
    let engine = RolldownEngine::new(temp.path());

    let plain = engine
        .build(&BuildRequest::new("src/app.js", "dist/plain.js").log_level(LogLevel::Silent))
        .await;
    let minified = engine
        .build(
            &BuildRequest::new("src/app.js", "dist/min.js")
                .minify(true)
                .log_level(LogLevel::Silent),
        )
        .await;

    assert!(plain.is_success());
    assert!(minified.is_success());

    let plain_len = fs::metadata(temp.path().join("dist/plain.js")).unwrap().len();
    let min_len = fs::metadata(temp.path().join("dist/min.js")).unwrap().len();
    assert!(min_len < plain_len, "minified {min_len} >= plain {plain_len}");
}

#[tokio::test]
async fn test_missing_entry_reports_errors() {
    let temp = project();
    let engine = RolldownEngine::new(temp.path());

    let request = BuildRequest::new("src/missing.js", "dist/missing.js").log_level(LogLevel::Silent);
    let report = engine.build(&request).await;

    assert!(report.is_failure());
    assert!(report.written.is_empty());
    assert!(!temp.path().join("dist/missing.js").exists());

    let entry = report
        .errors
        .iter()
        .find(|e| e.kind == DiagnosticKind::UnresolvedEntry)
        .expect("an unresolved entry diagnostic");
    assert!(entry.message.contains("missing.js"), "{}", entry.message);
    for error in &report.errors {
        assert!(!error.message.contains("BuildDiagnostic"), "{}", error.message);
    }
}

#[tokio::test]
async fn test_unresolved_import_reports_errors() {
    let temp = project();
    fs::write(
        temp.path().join("src/broken.js"),
        "import { nope } from './does-not-exist.js';\nconsole.log(nope);\n",
    )
    .unwrap();
    let engine = RolldownEngine::new(temp.path());

    let report = engine
        .build(&BuildRequest::new("src/broken.js", "dist/broken.js").log_level(LogLevel::Silent))
        .await;

    assert!(report.is_failure());
}

#[tokio::test]
async fn test_dry_run_writes_nothing() {
    let temp = project();
    let engine = RolldownEngine::new(temp.path());

    let report = engine
        .build(
            &BuildRequest::new("src/app.js", "dist/app.js")
                .dry_run()
                .log_level(LogLevel::Silent),
        )
        .await;

    assert!(report.is_success());
    assert!(report.written.is_empty());
    assert!(!temp.path().join("dist/app.js").exists());
}

#[tokio::test]
async fn test_unbundled_request_is_invalid_option() {
    let temp = project();
    let engine = RolldownEngine::new(temp.path());
    let mut request = BuildRequest::new("src/app.js", "dist/app.js").log_level(LogLevel::Silent);
    request.bundle = false;

    let report = engine.build(&request).await;
    assert!(report.is_failure());
    assert_eq!(report.errors[0].kind, DiagnosticKind::InvalidOption);
}
