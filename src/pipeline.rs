use crate::client::PostSource;
use crate::config::SnapshotOptions;
use crate::extract::top_comments;
use crate::models::display_author;
use crate::progress::make_count_progress;
use crate::records::PostRecord;
use crate::sort::SortOrder;
use crate::util::init_tracing_once;
use crate::writer::write_snapshot;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// One subreddit snapshot run, configured by builder chaining.
///
/// ```no_run
/// # use subsnap::{Credentials, RedditClient, SortOrder, SubredditSnapshot};
/// # fn demo() -> anyhow::Result<()> {
/// let client = RedditClient::authenticate(&Credentials::from_env()?)?;
/// let snap = SubredditSnapshot::new().limit(10).out_dir("reddit_outputs");
/// let records = snap.fetch(&client, "rust", SortOrder::Hot)?;
/// snap.save(&records)?;
/// # Ok(()) }
/// ```
#[derive(Clone, Default)]
pub struct SubredditSnapshot {
    pub(crate) opts: SnapshotOptions,
}

impl SubredditSnapshot {
    pub fn new() -> Self {
        Self {
            opts: SnapshotOptions::default(),
        }
    }

    // -------- Builder methods --------
    pub fn limit(mut self, n: u32) -> Self { self.opts = self.opts.with_limit(n); self }
    pub fn max_comments(mut self, n: usize) -> Self { self.opts = self.opts.with_max_comments(n); self }
    pub fn max_replies(mut self, n: usize) -> Self { self.opts = self.opts.with_max_replies(n); self }
    pub fn out_dir(mut self, dir: impl AsRef<Path>) -> Self { self.opts = self.opts.with_out_dir(dir); self }
    pub fn progress(mut self, yes: bool) -> Self { self.opts = self.opts.with_progress(yes); self }
    pub fn progress_label(mut self, label: impl Into<String>) -> Self { self.opts = self.opts.with_progress_label(label); self }

    // -------- Operations --------

    /// Fetch one page of posts, then resolve each post's comments in turn.
    ///
    /// Strictly sequential: a post's comment tree is fully resolved before
    /// the next post is touched. Record ids are assigned 1..N in listing
    /// order. Any request error aborts the remaining pipeline.
    pub fn fetch(
        &self,
        source: &impl PostSource,
        subreddit: &str,
        sort: SortOrder,
    ) -> Result<Vec<PostRecord>> {
        init_tracing_once();

        let posts = source.posts(subreddit, sort, self.opts.limit)?;
        if posts.is_empty() {
            tracing::warn!("r/{subreddit} returned no {sort} posts");
        } else {
            tracing::info!("Fetched {} {sort} posts from r/{subreddit}", posts.len());
        }

        let pb = if self.opts.progress {
            Some(make_count_progress(
                posts.len() as u64,
                self.opts.progress_label.as_deref(),
            ))
        } else {
            None
        };

        let mut records = Vec::with_capacity(posts.len());
        for (idx, post) in posts.into_iter().enumerate() {
            let nodes = source.comment_tree(&post)?;
            let comments = top_comments(&nodes, self.opts.max_comments, self.opts.max_replies);
            records.push(PostRecord {
                id: idx as u64 + 1,
                url: post.url,
                author: display_author(post.author.as_deref()),
                title: post.title,
                text: post.selftext,
                upvotes: post.score,
                comments,
            });
            if let Some(pb) = &pb {
                pb.inc(1);
            }
        }
        if let Some(pb) = pb {
            pb.finish_and_clear();
        }

        Ok(records)
    }

    /// Write the records under the configured output directory and return
    /// the written path.
    pub fn save(&self, records: &[PostRecord]) -> Result<PathBuf> {
        let path = write_snapshot(records, &self.opts.out_dir)?;
        tracing::info!("Wrote {} records to {}", records.len(), path.display());
        Ok(path)
    }
}
