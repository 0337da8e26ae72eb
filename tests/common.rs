#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Utc};
use ctxtree::models::RawContext;
use ctxtree::utils::time::parse_timestamp;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ctx() -> Command {
    cargo_bin_cmd!("ctxtree")
}

/// Fixed evaluation instant used across tests.
pub const NOW: &str = "2024-02-29T03:00:00Z";

pub fn now() -> DateTime<Utc> {
    ts(NOW)
}

pub fn ts(s: &str) -> DateTime<Utc> {
    parse_timestamp(s).expect("valid test timestamp")
}

/// Create a unique temp file path and remove any existing file
pub fn temp_path(name: &str, ext: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_ctxtree.{}", name, ext));
    fs::remove_file(&path).ok();
    path
}

/// Write `json` to a fresh temp input file and return its path
pub fn write_input(name: &str, json: &str) -> String {
    let path = temp_path(name, "json");
    fs::write(&path, json).expect("write input");
    path.to_string_lossy().to_string()
}

/// Path to a config file that does not exist (defaults apply)
pub fn missing_config(name: &str) -> String {
    temp_path(name, "conf").to_string_lossy().to_string()
}

/// The three-record scenario: "Write" paused and resumed, "Review" nested under it.
pub fn write_review_records() -> Vec<RawContext> {
    vec![
        RawContext::new("1", "Write", "", "2024-02-29T01:00:00Z", "")
            .with_notes_json(r#"["outline"]"#)
            .expect("notes"),
        RawContext::new(
            "2",
            "Write",
            "",
            "2024-02-29T01:30:00Z",
            "2024-02-29T01:45:30Z",
        )
        .with_notes_json(r#"["draft", "outline"]"#)
        .expect("notes"),
        RawContext::new(
            "3",
            "Review",
            "1",
            "2024-02-29T02:00:00Z",
            "2024-02-29T02:20:00Z",
        ),
    ]
}

pub const WRITE_REVIEW_JSON: &str = r#"[
  {"contextId": "3", "userId": "u1", "name": "Review", "parentId": "1",
   "created": "2024-02-29T02:00:00Z", "completed": "2024-02-29T02:20:00Z"},
  {"contextId": "1", "userId": "u1", "name": "Write", "notes": ["outline"],
   "created": "2024-02-29T01:00:00Z"},
  {"contextId": "2", "userId": "u1", "name": "Write", "notes": ["draft", "outline"],
   "created": "2024-02-29T01:30:00Z", "completed": "2024-02-29T01:45:30Z"}
]"#;
