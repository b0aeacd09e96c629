//! Authenticated Reddit API client and the source seam the pipeline runs
//! against.

use crate::config::Credentials;
use crate::models::{Listing, Node, PostData, PostNode};
use crate::sort::SortOrder;
use anyhow::{Context, Result};
use serde::Deserialize;

const TOKEN_URL: &str = "https://www.reddit.com/api/v1/access_token";
const API_BASE: &str = "https://oauth.reddit.com";

/// Where posts and comment trees come from.
///
/// The pipeline takes its source as an explicit parameter rather than
/// ambient state, so tests can substitute a canned implementation for the
/// live client.
pub trait PostSource {
    /// One bounded, ordered page of posts for a subreddit and listing order.
    fn posts(&self, subreddit: &str, sort: SortOrder, limit: u32) -> Result<Vec<PostData>>;

    /// Top-level comment nodes for one post, placeholders included.
    fn comment_tree(&self, post: &PostData) -> Result<Vec<Node>>;
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Application-only (client-credentials) Reddit API client.
///
/// Holds a blocking HTTP client and a bearer token; the run is strictly
/// sequential, one request at a time, with no retries at this layer.
pub struct RedditClient {
    http: reqwest::blocking::Client,
    token: String,
}

impl RedditClient {
    /// Exchange application credentials for a bearer token. Malformed or
    /// missing credentials surface here, at the first network call.
    pub fn authenticate(creds: &Credentials) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(creds.user_agent.clone())
            .build()
            .context("building HTTP client")?;

        let token: TokenResponse = http
            .post(TOKEN_URL)
            .basic_auth(&creds.client_id, Some(&creds.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .and_then(|r| r.error_for_status())
            .context("requesting access token")?
            .json()
            .context("decoding access token response")?;

        Ok(Self {
            http,
            token: token.access_token,
        })
    }

    fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        self.http
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .and_then(|r| r.error_for_status())
            .with_context(|| format!("GET {url}"))?
            .json()
            .with_context(|| format!("decoding response from {url}"))
    }
}

impl PostSource for RedditClient {
    fn posts(&self, subreddit: &str, sort: SortOrder, limit: u32) -> Result<Vec<PostData>> {
        // raw_json=1 keeps body text literal instead of HTML-entity escaped.
        let url = format!(
            "{API_BASE}/r/{subreddit}/{}?limit={limit}&raw_json=1",
            sort.as_str()
        );
        let listing: Listing<PostNode> = self.get_json(&url)?;
        Ok(listing.data.children.into_iter().map(|n| n.data).collect())
    }

    fn comment_tree(&self, post: &PostData) -> Result<Vec<Node>> {
        // The comments endpoint answers with a two-element array: the post
        // listing, then the comment listing.
        let url = format!("{API_BASE}/comments/{}?raw_json=1", post.id);
        let (_, comments): (serde_json::Value, Listing<Node>) = self.get_json(&url)?;
        Ok(comments.data.children)
    }
}
