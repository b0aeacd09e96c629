#[path = "common/mod.rs"]
mod common;

use common::only_snapshot;
use serde_json::Value;
use std::fs;
use subsnap::{write_snapshot, CommentRecord, PostRecord, ReplyRecord};

fn sample_records() -> Vec<PostRecord> {
    vec![
        PostRecord {
            id: 1,
            url: "https://reddit.com/comments/p1/".into(),
            author: "alice".into(),
            title: "héllo 世界".into(),
            text: "body with ünïcode".into(),
            upvotes: -7,
            comments: vec![CommentRecord {
                comment_author: "bob".into(),
                comment_text: "nice".into(),
                replies: vec![ReplyRecord {
                    reply_author: "None".into(),
                    reply_text: "gone".into(),
                }],
            }],
        },
        PostRecord {
            id: 2,
            url: "https://example.com/link".into(),
            author: "None".into(),
            title: "link post".into(),
            text: String::new(),
            upvotes: 42,
            comments: vec![],
        },
    ]
}

/// Parsing the written file reproduces the in-memory records exactly.
#[test]
fn snapshot_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let records = sample_records();

    let path = write_snapshot(&records, dir.path()).unwrap();
    assert_eq!(path, only_snapshot(dir.path()));

    let parsed: Vec<PostRecord> =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(parsed, records);
}

/// The file lands as `output_<unix_seconds>.json` inside the directory.
#[test]
fn file_name_is_timestamped() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_snapshot(&[], dir.path()).unwrap();

    let name = path.file_name().unwrap().to_str().unwrap();
    let stamp = name
        .strip_prefix("output_")
        .and_then(|s| s.strip_suffix(".json"))
        .expect("name should be output_<ts>.json");
    assert!(stamp.parse::<i64>().is_ok(), "timestamp part: {stamp}");
}

/// Missing output directories (parents included) are created; an existing
/// directory is reused without error.
#[test]
fn creates_missing_directories_idempotently() {
    let tmp = tempfile::tempdir().unwrap();
    let nested = tmp.path().join("a").join("b").join("reddit_outputs");

    write_snapshot(&[], &nested).unwrap();
    assert!(nested.is_dir());

    // Second write into the same directory must also succeed.
    write_snapshot(&sample_records(), &nested).unwrap();
}

/// Non-ASCII text is written literally, not \u-escaped.
#[test]
fn non_ascii_is_preserved_literally() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_snapshot(&sample_records(), dir.path()).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("héllo 世界"));
    assert!(text.contains("ünïcode"));
    assert!(!text.contains("\\u"), "no unicode escapes expected");
}

/// The serialized object keys match the published schema exactly.
#[test]
fn output_keys_match_schema() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_snapshot(&sample_records(), dir.path()).unwrap();

    let parsed: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let first = &parsed[0];

    // serde_json's map iterates keys in sorted order.
    let keys: Vec<&str> = first.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, ["author", "comments", "id", "text", "title", "upvotes", "url"]);

    let comment = &first["comments"][0];
    let ckeys: Vec<&str> = comment.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(ckeys, ["comment_author", "comment_text", "replies"]);

    let reply = &comment["replies"][0];
    let rkeys: Vec<&str> = reply.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(rkeys, ["reply_author", "reply_text"]);
}
