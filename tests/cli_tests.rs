use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{sample_rows, timelog_page, tlr_in, workspace_with};

#[test]
fn test_rewrites_timelog_in_working_dir() {
    let (dir, _input) = workspace_with("timelog.html", &timelog_page(&sample_rows()));

    tlr_in(dir.path())
        .arg("timelog.html")
        .assert()
        .success()
        .stdout(contains("01/20/24 80 90"))
        .stdout(contains("01/15/24 xx 45"))
        .stdout(contains("01/10/24 60").not());

    let out = fs::read_to_string(dir.path().join("new_timelog.html")).expect("read output");
    assert!(out.starts_with("<table>\n<tbody>\n"));

    let pos = |needle: &str| out.find(needle).expect(needle);
    assert!(pos("<td>Date</td>") < pos("<td>01/20/24</td>"));
    assert!(pos("<td>01/20/24</td>") < pos("<td>01/15/24</td>"));
    assert!(pos("<td>01/15/24</td>") < pos("<td>01/10/24</td>"));
    assert!(!out.contains("<td>xx</td>"));
}

#[test]
fn test_second_run_prints_no_corrections() {
    let (dir, _input) = workspace_with("timelog.html", &timelog_page(&sample_rows()));

    tlr_in(dir.path()).arg("timelog.html").assert().success();

    let first = fs::read_to_string(dir.path().join("new_timelog.html")).expect("read first");
    fs::write(dir.path().join("again.htm"), &first).expect("copy output");

    tlr_in(dir.path())
        .arg("again.htm")
        .assert()
        .success()
        .stdout(contains(" 90\n").not())
        .stdout(contains("0 duration(s) corrected"));

    let second = fs::read_to_string(dir.path().join("new_timelog.html")).expect("read second");
    assert_eq!(first, second);
}

#[test]
fn test_no_argument() {
    let dir = tempfile::tempdir().expect("temp dir");

    tlr_in(dir.path())
        .assert()
        .failure()
        .stderr(contains("No input file name provided."));

    assert!(!dir.path().join("new_timelog.html").exists());
}

#[test]
fn test_rejects_non_html_suffix() {
    let (dir, _input) = workspace_with("timelog.txt", &timelog_page(&sample_rows()));

    tlr_in(dir.path())
        .arg("timelog.txt")
        .assert()
        .failure()
        .stderr(contains("The file 'timelog.txt' is not an HTML file."));

    assert!(!dir.path().join("new_timelog.html").exists());
}

#[test]
fn test_missing_table_writes_nothing() {
    let (dir, _input) = workspace_with("empty.html", "<html><body><p>no rows</p></body></html>");

    tlr_in(dir.path())
        .arg("empty.html")
        .assert()
        .failure()
        .stderr(contains("Table tag not found."));

    assert!(!dir.path().join("new_timelog.html").exists());
}

#[test]
fn test_bad_time_writes_nothing() {
    let mut rows = sample_rows();
    rows.push(["01/11/24", "noon", "13:00", "lunch", "office", "60"]);
    let (dir, _input) = workspace_with("timelog.html", &timelog_page(&rows));

    tlr_in(dir.path())
        .arg("timelog.html")
        .assert()
        .failure()
        .stderr(contains("Error parsing time data '01/11/24 noon'"));

    assert!(!dir.path().join("new_timelog.html").exists());
}

#[test]
fn test_existing_output_is_overwritten() {
    let (dir, _input) = workspace_with("timelog.html", &timelog_page(&sample_rows()));
    fs::write(dir.path().join("new_timelog.html"), "stale").expect("write stale");

    tlr_in(dir.path()).arg("timelog.html").assert().success();

    let out = fs::read_to_string(dir.path().join("new_timelog.html")).expect("read output");
    assert!(out.contains("<td>01/20/24</td>"));
}

#[test]
fn test_check_mode_writes_nothing() {
    let (dir, _input) = workspace_with("timelog.html", &timelog_page(&sample_rows()));

    tlr_in(dir.path())
        .args(["--check", "timelog.html"])
        .assert()
        .success()
        .stdout(contains("01/20/24 80 90"))
        .stdout(contains("no file written"));

    assert!(!dir.path().join("new_timelog.html").exists());
}

#[test]
fn test_output_option() {
    let (dir, _input) = workspace_with("timelog.html", &timelog_page(&sample_rows()));

    tlr_in(dir.path())
        .args(["timelog.html", "-o", "sorted.html"])
        .assert()
        .success();

    assert!(dir.path().join("sorted.html").exists());
    assert!(!dir.path().join("new_timelog.html").exists());
}

#[test]
fn test_csv_export() {
    let (dir, _input) = workspace_with("timelog.html", &timelog_page(&sample_rows()));

    tlr_in(dir.path())
        .args(["timelog.html", "--format", "csv"])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let csv = fs::read_to_string(dir.path().join("new_timelog.csv")).expect("read csv");
    let lines: Vec<_> = csv.lines().collect();
    assert_eq!(lines[0], "Date,Start,End,Task,Where,Minutes");
    assert_eq!(lines[1], "01/20/24,09:00,10:30,deploy,remote,90");
    assert_eq!(lines.len(), 4);
}

#[test]
fn test_json_export() {
    let (dir, _input) = workspace_with("timelog.html", &timelog_page(&sample_rows()));

    tlr_in(dir.path())
        .args(["timelog.html", "-f", "json", "-o", "log.json"])
        .assert()
        .success();

    let raw = fs::read_to_string(dir.path().join("log.json")).expect("read json");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
    assert_eq!(value["headers"][0], "Date");
    assert_eq!(value["rows"][1][5], "45");
    assert_eq!(value["rows"].as_array().map(Vec::len), Some(3));
}

#[test]
fn test_config_file_changes_output_name() {
    let (dir, _input) = workspace_with("timelog.html", &timelog_page(&sample_rows()));
    fs::write(dir.path().join("cfg.yaml"), "output_file: fixed.html\n").expect("write config");

    tlr_in(dir.path())
        .args(["--config", "cfg.yaml", "timelog.html"])
        .assert()
        .success();

    assert!(dir.path().join("fixed.html").exists());
}

#[test]
fn test_missing_config_file_fails() {
    let (dir, _input) = workspace_with("timelog.html", &timelog_page(&sample_rows()));

    tlr_in(dir.path())
        .args(["--config", "nope.yaml", "timelog.html"])
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
}

#[test]
fn test_debug_logs_to_stderr() {
    let (dir, _input) = workspace_with("timelog.html", &timelog_page(&sample_rows()));

    tlr_in(dir.path())
        .args(["--debug", "timelog.html"])
        .assert()
        .success()
        .stderr(contains("table rows parsed"));
}
