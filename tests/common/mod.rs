use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use subsnap::{Node, PostData};

/// A `t1` comment node shaped the way the comments endpoint nests it:
/// `replies` is a listing when replies exist and `""` when none do.
pub fn comment_node(author: Value, body: &str, replies: Vec<Value>) -> Value {
    let replies_value = if replies.is_empty() {
        json!("")
    } else {
        json!({ "kind": "Listing", "data": { "children": replies } })
    };
    json!({
        "kind": "t1",
        "data": { "author": author, "body": body, "replies": replies_value }
    })
}

/// A collapsed "load more comments" placeholder.
pub fn more_node(children: Vec<&str>) -> Value {
    json!({
        "kind": "more",
        "data": { "count": children.len(), "children": children }
    })
}

/// Parse raw node JSON through the same serde path the client uses.
pub fn parse_nodes(vals: Vec<Value>) -> Vec<Node> {
    vals.into_iter()
        .map(|v| serde_json::from_value(v).unwrap())
        .collect()
}

/// A minimal post as the listing endpoint would deliver it.
pub fn post(id: &str, author: Value, title: &str, selftext: &str, score: i64) -> PostData {
    serde_json::from_value(json!({
        "id": id,
        "url": format!("https://reddit.com/comments/{id}/"),
        "author": author,
        "title": title,
        "selftext": selftext,
        "score": score,
    }))
    .unwrap()
}

/// The single snapshot file written under `dir`.
pub fn only_snapshot(dir: &Path) -> PathBuf {
    let mut files: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .filter(|p| p.extension().is_some_and(|e| e == "json"))
        .collect();
    assert_eq!(
        files.len(),
        1,
        "expected exactly one snapshot in {}",
        dir.display()
    );
    files.pop().unwrap()
}
