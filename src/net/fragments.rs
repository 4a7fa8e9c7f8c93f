//! Server-rendered HTML fragment loading.
//!
//! ERROR HANDLING
//! ==============
//! Network failures and non-success statuses collapse into one error string;
//! callers log it and leave the current view alone. No retry, no caching,
//! repeated fetches of the same URL are independent.

#[cfg(test)]
#[path = "fragments_test.rs"]
mod fragments_test;

/// Build the leaderboard fragment URL for a results payload.
///
/// The results blob is serialized back to JSON and URL-encoded into the
/// `results` query parameter, matching what the leaderboard view expects.
pub fn leaderboard_url(results: &serde_json::Value) -> String {
    format!(
        "/multiplayer_leaderboard/?results={}",
        urlencoding::encode(&results.to_string())
    )
}

/// Fetch a fragment URL and return the response body as text.
///
/// # Errors
///
/// Returns an error string on network failure or a non-success status.
#[cfg(feature = "hydrate")]
pub async fn fetch_fragment(url: &str) -> Result<String, String> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("fragment request failed: {}", resp.status()));
    }
    resp.text().await.map_err(|e| e.to_string())
}
