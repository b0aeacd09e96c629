//! Flat output records, shaped exactly as they are serialized.

use serde::{Deserialize, Serialize};

/// One post with its extracted comments. The `id` is 1-based, assigned in
/// listing order, and meaningful only within a single run's output file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostRecord {
    pub id: u64,
    pub url: String,
    pub author: String,
    pub title: String,
    pub text: String,
    pub upvotes: i64,
    pub comments: Vec<CommentRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentRecord {
    pub comment_author: String,
    pub comment_text: String,
    pub replies: Vec<ReplyRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplyRecord {
    pub reply_author: String,
    pub reply_text: String,
}
