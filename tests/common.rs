#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const HEADER: [&str; 6] = ["Date", "Start", "End", "Task", "Where", "Minutes"];

pub fn tlr() -> Command {
    cargo_bin_cmd!("timelog-reorder")
}

/// Binary command running inside `dir`, with HOME/XDG pointing there so no
/// user configuration leaks into the test.
pub fn tlr_in(dir: &Path) -> Command {
    let mut cmd = tlr();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("RUST_LOG");
    cmd
}

/// Build a timelog page: some prose around one `<table>` with a `<th>` header.
pub fn timelog_page(rows: &[[&str; 6]]) -> String {
    let mut out = String::from(
        "<!DOCTYPE html>\n<html><head><title>Timelog</title></head>\n<body>\n<h1>Shifts</h1>\n",
    );
    out.push_str("<table border=\"1\">\n<thead>\n<tr>");
    for h in HEADER {
        out.push_str(&format!("<th>{h}</th>"));
    }
    out.push_str("</tr>\n</thead>\n<tbody>\n");
    for row in rows {
        out.push_str("<tr>\n");
        for cell in row {
            out.push_str(&format!("  <td> {cell} </td>\n"));
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>\n</table>\n<p>end of log</p>\n</body></html>\n");
    out
}

pub fn sample_rows() -> Vec<[&'static str; 6]> {
    vec![
        ["01/10/24", "09:00", "10:00", "review", "office", "60"],
        ["01/20/24", "09:00", "10:30", "deploy", "remote", "80"],
        ["01/15/24", "23:30", "00:15", "on-call", "home", "xx"],
    ]
}

/// Fresh temp dir holding `name` with the given content.
pub fn workspace_with(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write input file");
    (dir, path)
}

pub fn owned(rows: &[[&str; 6]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|r| r.iter().map(|c| c.to_string()).collect())
        .collect()
}
