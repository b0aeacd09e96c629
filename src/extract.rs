//! Comment extraction: flatten an already-fetched comment listing into
//! output records.

use crate::models::{display_author, CommentData, Node};
use crate::records::{CommentRecord, ReplyRecord};

/// Flatten top-level comment nodes into records.
///
/// Placeholder nodes are dropped, never expanded, so true comment counts may
/// exceed what is captured. At most `max_comments` comments are kept, in
/// listing order, and each carries at most `max_replies` of its leading
/// replies (the default run keeps one).
pub fn top_comments(nodes: &[Node], max_comments: usize, max_replies: usize) -> Vec<CommentRecord> {
    nodes
        .iter()
        .filter_map(Node::as_comment)
        .take(max_comments)
        .map(|c| comment_record(c, max_replies))
        .collect()
}

fn comment_record(comment: &CommentData, max_replies: usize) -> CommentRecord {
    let replies = comment
        .replies
        .iter()
        .filter_map(Node::as_comment)
        .take(max_replies)
        .map(|r| ReplyRecord {
            reply_author: display_author(r.author.as_deref()),
            reply_text: r.body.clone(),
        })
        .collect();

    CommentRecord {
        comment_author: display_author(comment.author.as_deref()),
        comment_text: comment.body.clone(),
        replies,
    }
}
