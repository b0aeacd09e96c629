mod client;
mod config;
mod extract;
mod models;
mod pipeline;
mod progress;
mod records;
mod sort;
mod util;
mod writer;

pub use crate::client::{PostSource, RedditClient};
pub use crate::config::{normalize_subreddit, Credentials, SnapshotOptions};
pub use crate::pipeline::SubredditSnapshot;
pub use crate::records::{CommentRecord, PostRecord, ReplyRecord};
pub use crate::sort::SortOrder;

// Expose the wire model and the extractor so tests and downstream code can
// build comment trees without a live client.
pub use crate::extract::top_comments;
pub use crate::models::{
    display_author, CommentData, Listing, ListingData, MoreData, Node, PostData, PostNode,
    DELETED_AUTHOR,
};

// Expose writer and progress helpers so binaries can import from crate root.
pub use crate::progress::make_count_progress;
pub use crate::util::init_tracing_once;
pub use crate::writer::write_snapshot;
