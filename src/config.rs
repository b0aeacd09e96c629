use anyhow::{ensure, Context, Result};
use std::path::{Path, PathBuf};

/// Reddit application credentials, read once at startup.
///
/// Presence is checked here; validity only surfaces at the first token
/// request.
#[derive(Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub user_agent: String,
}

impl Credentials {
    /// Read `REDDIT_CLIENT_ID`, `REDDIT_CLIENT_SECRET` and
    /// `REDDIT_USER_AGENT` from the environment, honoring a `.env` file
    /// when one is present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Ok(Self {
            client_id: require_var("REDDIT_CLIENT_ID")?,
            client_secret: require_var("REDDIT_CLIENT_SECRET")?,
            user_agent: require_var("REDDIT_USER_AGENT")?,
        })
    }
}

fn require_var(name: &str) -> Result<String> {
    let value = std::env::var(name).with_context(|| format!("{name} is not set"))?;
    ensure!(!value.trim().is_empty(), "{name} is empty");
    Ok(value)
}

/// Normalize a user-entered subreddit name: trim whitespace and strip a
/// leading "r/" or "/r/". Existence is not checked; an unknown name fails at
/// fetch time.
pub fn normalize_subreddit(raw: &str) -> String {
    let s = raw.trim();
    let s = s.strip_prefix("/r/").unwrap_or(s);
    let s = s.strip_prefix("r/").unwrap_or(s);
    s.to_string()
}

/// User-facing options with sensible defaults and builder chaining.
#[derive(Clone, Debug)]
pub struct SnapshotOptions {
    pub limit: u32,          // posts per run
    pub max_comments: usize, // top-level comments kept per post
    pub max_replies: usize,  // replies kept per comment
    pub out_dir: PathBuf,    // created on demand by the writer
    pub progress: bool,      // show progress bar
    pub progress_label: Option<String>, // optional label for progress bar
}

impl Default for SnapshotOptions {
    fn default() -> Self {
        Self {
            limit: 10,
            max_comments: 3,
            max_replies: 1,
            out_dir: PathBuf::from("reddit_outputs"),
            progress: true,
            progress_label: None,
        }
    }
}

impl SnapshotOptions {
    pub fn with_limit(mut self, n: u32) -> Self {
        self.limit = n.max(1);
        self
    }
    pub fn with_max_comments(mut self, n: usize) -> Self {
        self.max_comments = n;
        self
    }
    pub fn with_max_replies(mut self, n: usize) -> Self {
        self.max_replies = n;
        self
    }
    pub fn with_out_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.out_dir = dir.as_ref().to_path_buf();
        self
    }
    pub fn with_progress(mut self, yes: bool) -> Self {
        self.progress = yes;
        self
    }
    pub fn with_progress_label(mut self, label: impl Into<String>) -> Self {
        self.progress_label = Some(label.into());
        self
    }
}
