//! Wire-format types for the Reddit JSON API.
//!
//! Everything here mirrors what the listing endpoints actually return: a
//! `Listing` envelope whose children are kind-tagged things (`t3` posts,
//! `t1` comments, `more` placeholders). Only the fields this pipeline reads
//! are modeled.

use serde::{Deserialize, Deserializer};

/// Literal rendered in output records when an author account is deleted or
/// otherwise unavailable.
pub const DELETED_AUTHOR: &str = "None";

/// Resolve an optional wire author to its display name, applying the
/// deleted-account sentinel.
pub fn display_author(author: Option<&str>) -> String {
    match author {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => DELETED_AUTHOR.to_string(),
    }
}

/// Listing envelope: `{ "kind": "Listing", "data": { "children": [...] } }`.
#[derive(Debug, Clone, Deserialize)]
pub struct Listing<T> {
    pub data: ListingData<T>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListingData<T> {
    #[serde(default = "Vec::new")]
    pub children: Vec<T>,
}

/// A `t3` child of a subreddit listing.
#[derive(Debug, Clone, Deserialize)]
pub struct PostNode {
    pub data: PostData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostData {
    pub id: String,
    #[serde(default)]
    pub url: String,
    #[serde(default, deserialize_with = "author_opt")]
    pub author: Option<String>,
    pub title: String,
    /// Empty for link posts.
    #[serde(default)]
    pub selftext: String,
    /// May be negative.
    #[serde(default)]
    pub score: i64,
}

/// One entry of a comment listing. The tree is capability-polymorphic on the
/// wire: real comments (`t1`) sit next to collapsed-reply placeholders
/// (`more`). Placeholders are never expanded by this tool, only skipped, so
/// unknown kinds are tolerated rather than rejected.
#[derive(Debug, Clone)]
pub enum Node {
    Comment(CommentData),
    More(MoreData),
    Other,
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(de: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Wire {
            kind: String,
            #[serde(default)]
            data: serde_json::Value,
        }

        let wire = Wire::deserialize(de)?;
        match wire.kind.as_str() {
            "t1" => Ok(Node::Comment(
                CommentData::deserialize(wire.data).map_err(serde::de::Error::custom)?,
            )),
            "more" => Ok(Node::More(
                MoreData::deserialize(wire.data).map_err(serde::de::Error::custom)?,
            )),
            _ => Ok(Node::Other),
        }
    }
}

impl Node {
    /// The comment payload, if this node is a real comment.
    pub fn as_comment(&self) -> Option<&CommentData> {
        match self {
            Node::Comment(c) => Some(c),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommentData {
    #[serde(default, deserialize_with = "author_opt")]
    pub author: Option<String>,
    #[serde(default)]
    pub body: String,
    /// Nested listing on the wire, or the empty string when there are none.
    #[serde(default, deserialize_with = "replies_listing")]
    pub replies: Vec<Node>,
}

/// Stub for a collapsed "load more comments" entry.
#[derive(Debug, Clone, Deserialize)]
pub struct MoreData {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub children: Vec<String>,
}

/// The API reports deleted accounts as the string `"[deleted]"`; older dumps
/// sometimes carry `null`. Both collapse to `None` here.
fn author_opt<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(de)?;
    Ok(raw.filter(|s| s != "[deleted]"))
}

/// `replies` is `""` for leaf comments and a `Listing` otherwise.
fn replies_listing<'de, D>(de: D) -> Result<Vec<Node>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Listing(Listing<Node>),
        Empty(String),
    }

    Ok(match Option::<Raw>::deserialize(de)? {
        Some(Raw::Listing(l)) => l.data.children,
        Some(Raw::Empty(_)) | None => Vec::new(),
    })
}
