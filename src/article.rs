//! Metadata of the article being administered.

/* Base path of the blog resource on the API */
const API_BLOGS: &str = "/api/blogs";

/// Snapshot of the article taken once at page load from the container's
/// data attributes and the access-token cookie. Read-only afterwards;
/// cloned into each button's handler.
#[derive(Clone, Debug, PartialEq)]
pub struct ArticleContext {
    pub id: String,
    pub status: String,
    pub author: String,
    /// `None` when the access-token cookie is not set; requests then go
    /// out unauthenticated.
    pub auth_token: Option<String>,
}

impl ArticleContext {
    /// Builds the context from raw data attributes. A missing attribute
    /// becomes an empty string, matching what the page would render.
    pub fn new(
        id: Option<String>,
        status: Option<String>,
        author: Option<String>,
        auth_token: Option<String>,
    ) -> Self {
        Self {
            id: id.unwrap_or_default(),
            status: status.unwrap_or_default(),
            author: author.unwrap_or_default(),
            auth_token,
        }
    }
}

/// `/api/blogs/{id}` — the article's resource path.
pub fn article_path(id: &str) -> String {
    format!("{API_BLOGS}/{id}")
}

/// Resource path carrying the target status as a query parameter.
pub fn status_path(id: &str, new_status: &str) -> String {
    format!(
        "{API_BLOGS}/{id}?new_status={}",
        urlencoding::encode(new_status)
    )
}
