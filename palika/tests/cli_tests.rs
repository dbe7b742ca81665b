// palika/tests/cli_tests.rs
//
// End-to-end CLI flows against a throwaway project directory. The DuckDB
// file and all artifacts land inside the tempdir, so tests are isolated.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn palika() -> Command {
    #[allow(clippy::unwrap_used)]
    Command::cargo_bin("palika").unwrap()
}

#[test]
fn test_seed_then_inspect_section() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let project = dir.path().to_string_lossy().to_string();

    palika()
        .args(["seed", "--project-dir", &project])
        .assert()
        .success()
        .stdout(predicate::str::contains("economics/wall-material"));

    palika()
        .args([
            "inspect",
            "--project-dir",
            &project,
            "--section",
            "economics/wall-material",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cement-bonded"));
    Ok(())
}

#[test]
fn test_seed_twice_is_idempotent() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let project = dir.path().to_string_lossy().to_string();

    for _ in 0..2 {
        palika()
            .args(["seed", "--project-dir", &project, "--domain", "economics"])
            .assert()
            .success();
    }
    Ok(())
}

#[test]
fn test_seed_unknown_domain_fails() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let project = dir.path().to_string_lossy().to_string();

    palika()
        .args(["seed", "--project-dir", &project, "--domain", "astrology"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("astrology"));
    Ok(())
}

#[test]
fn test_inspect_before_seed_reports_no_data() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let project = dir.path().to_string_lossy().to_string();

    palika()
        .args([
            "inspect",
            "--project-dir",
            &project,
            "--section",
            "social/literacy",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No data recorded"));
    Ok(())
}

#[test]
fn test_inspect_unknown_section_lists_available() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let project = dir.path().to_string_lossy().to_string();

    palika()
        .args([
            "inspect",
            "--project-dir",
            &project,
            "--section",
            "economics/roof-material",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("demographics/summary"));
    Ok(())
}

#[test]
fn test_create_admin_prints_token_once() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let project = dir.path().to_string_lossy().to_string();

    palika()
        .args([
            "create-admin",
            "--project-dir",
            &project,
            "--username",
            "ito-samuha",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Access token"));
    Ok(())
}

#[test]
fn test_prune_charts_on_fresh_project() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let project = dir.path().to_string_lossy().to_string();

    palika()
        .args(["prune-charts", "--project-dir", &project])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 0"));
    Ok(())
}

#[test]
fn test_report_export_writes_html_and_charts() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let project = dir.path().to_string_lossy().to_string();
    let out = dir.path().join("out");

    palika()
        .args(["seed", "--project-dir", &project])
        .assert()
        .success();

    palika()
        .args([
            "report",
            "--project-dir",
            &project,
            "--out",
            &out.to_string_lossy(),
        ])
        .assert()
        .success();

    let html = std::fs::read_to_string(out.join("report.html"))?;
    assert!(html.contains("सुन्दर नगरपालिका"));
    // Charts referenced by the report exist next to it
    assert!(out.join("charts").is_dir());
    Ok(())
}

#[test]
fn test_report_without_data_fails_cleanly() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let project = dir.path().to_string_lossy().to_string();
    let out = dir.path().join("out");

    palika()
        .args([
            "report",
            "--project-dir",
            &project,
            "--out",
            &out.to_string_lossy(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("palika seed"));
    Ok(())
}
