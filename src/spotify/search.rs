use reqwest::Client;

use crate::{
    config,
    error::{Error, Result},
    types::{SearchResponse, Track},
};

/// Maximum number of results the Spotify search endpoint returns per request.
pub const MAX_SEARCH_LIMIT: u32 = 50;

/// Clamps a requested result count to the range the search endpoint accepts.
///
/// The API hard-caps results at [`MAX_SEARCH_LIMIT`] regardless of the
/// requested value; values below 1 are raised to 1.
pub fn clamp_limit(limit: u32) -> u32 {
    limit.clamp(1, MAX_SEARCH_LIMIT)
}

/// Searches the Spotify catalog for tracks matching a free-text query.
///
/// Issues an authenticated GET against the search endpoint with query
/// parameters `q`, `type=track`, and the clamped `limit`, and returns the
/// `tracks.items` array from the response body. A response without a
/// `tracks` object yields an empty list.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `query` - Free-text search query (artist, track, genre, ...)
/// * `limit` - Maximum number of tracks to return (clamped to 1-50)
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<Track>)` - Matching tracks in the order the API returned them
/// - `Err(Error)` - Validation, network, or HTTP failure
///
/// # Errors
///
/// - [`Error::InvalidToken`] - the token is empty; no request is made
/// - [`Error::Network`] - transport failure or undecodable response body
/// - [`Error::Http`] - the endpoint answered with a non-2xx status
///
/// # Example
///
/// ```
/// let tracks = search_tracks(&token.access_token, "Discover", 25).await?;
/// println!("Found {} tracks", tracks.len());
/// ```
pub async fn search_tracks(token: &str, query: &str, limit: u32) -> Result<Vec<Track>> {
    if token.is_empty() {
        return Err(Error::InvalidToken);
    }

    let api_url = format!("{uri}/search", uri = &config::spotify_apiurl());
    let limit = clamp_limit(limit).to_string();

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .query(&[("q", query), ("type", "track"), ("limit", limit.as_str())])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::Http(status));
    }

    let res = response.json::<SearchResponse>().await?;
    Ok(res.tracks.map(|page| page.items).unwrap_or_default())
}
