//! Generic JSON calls against the blog API.

use gloo_net::http::{Method, Request, RequestBuilder};
use log::error;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Failure of a single API call. Every variant has already been logged by
/// the time the caller sees it; callers only decide user-visible behavior.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-ok status. `message` is the server's
    /// `detail` field when the error body carries one.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// No response at all (connectivity, CORS).
    #[error("network error: {0}")]
    Network(gloo_net::Error),
    /// A body could not be encoded or decoded as JSON.
    #[error("invalid JSON body: {0}")]
    Json(gloo_net::Error),
}

/// Single JSON request; resolves to the parsed response body.
///
/// Always sends `Accept` / `Content-Type: application/json`; a bearer
/// `Authorization` header when `token` is present; the serialized `body`
/// when there is one. No retries, no timeout beyond the browser's own.
pub async fn send_json<T, U>(
    method: Method,
    url: &str,
    body: Option<&T>,
    token: Option<&str>,
) -> Result<U, ApiError>
where
    T: Serialize + ?Sized,
    U: DeserializeOwned,
{
    let mut builder = request_for(method, url)
        .header("Accept", "application/json")
        .header("Content-Type", "application/json");

    if let Some(token) = token {
        builder = builder.header("Authorization", &format!("Bearer {token}"));
    }

    let sent = match body {
        Some(b) => match builder.json(b) {
            Ok(req) => req.send().await,
            Err(e) => {
                error!("Request error: could not serialize body for {url}: {e}");
                return Err(ApiError::Json(e));
            }
        },
        None => builder.send().await,
    };

    let resp = match sent {
        Ok(resp) => resp,
        Err(e) => {
            error!("Network error or error with CORS: {e}");
            error!("Request error: {e}");
            return Err(ApiError::Network(e));
        }
    };

    if !resp.ok() {
        let status = resp.status();
        let body_text = resp.text().await.unwrap_or_default();
        let message = error_message(status, &body_text);
        error!("Request error: {message}");
        return Err(ApiError::Status { status, message });
    }

    resp.json::<U>().await.map_err(|e| {
        error!("Request error: invalid JSON in response from {url}: {e}");
        ApiError::Json(e)
    })
}

fn request_for(method: Method, url: &str) -> RequestBuilder {
    match method {
        Method::GET => Request::get(url),
        Method::POST => Request::post(url),
        Method::PUT => Request::put(url),
        Method::PATCH => Request::patch(url),
        Method::DELETE => Request::delete(url),
        _ => Request::get(url),
    }
}

/// Message for a non-ok response: the body's `detail` string when the body
/// is JSON and has one, else `HTTP Error: <status>`.
fn error_message(status: u16, body: &str) -> String {
    let detail = match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => value
            .get("detail")
            .and_then(|d| d.as_str())
            .map(str::to_string),
        Err(e) => {
            error!("Parse error JSON: {e}");
            None
        }
    };
    detail.unwrap_or_else(|| format!("HTTP Error: {status}"))
}

#[cfg(test)]
mod tests {
    use super::error_message;

    #[test]
    fn detail_string_wins_over_status() {
        assert_eq!(error_message(403, r#"{"detail":"Forbidden"}"#), "Forbidden");
        assert_eq!(
            error_message(500, r#"{"detail":"Forbidden"}"#),
            "Forbidden"
        );
    }

    #[test]
    fn json_without_detail_falls_back_to_status() {
        assert_eq!(
            error_message(404, r#"{"message":"nope"}"#),
            "HTTP Error: 404"
        );
    }

    #[test]
    fn non_string_detail_falls_back_to_status() {
        assert_eq!(
            error_message(422, r#"{"detail":[{"loc":["query"],"msg":"bad"}]}"#),
            "HTTP Error: 422"
        );
    }

    #[test]
    fn unparseable_body_falls_back_to_status() {
        assert_eq!(error_message(502, "<html>Bad Gateway</html>"), "HTTP Error: 502");
        assert_eq!(error_message(500, ""), "HTTP Error: 500");
    }
}
