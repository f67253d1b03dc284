use reqwest::Client;

use crate::{
    config,
    error::{Error, Result},
    types::{AudioFeatures, AudioFeaturesResponse},
};

/// Fetches audio-feature records for a batch of tracks.
///
/// Joins the track IDs into a single comma-separated `ids` parameter and
/// issues one authenticated GET against the audio-features endpoint. No
/// client-side chunking is performed; batches beyond the upstream
/// per-request limit are left to the API to reject.
///
/// The returned vector preserves the upstream `null` markers as `None`, so
/// entries stay positionally aligned with the requested `track_ids`. A track
/// Spotify has no feature data for yields `None` at its position rather than
/// being dropped.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `track_ids` - Catalog track IDs to fetch feature records for
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<Option<AudioFeatures>>)` - One entry per requested ID, in
///   request order; empty when `track_ids` is empty
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
/// let features = audio_features(&token.access_token, &track_ids).await?;
/// for (id, entry) in track_ids.iter().zip(&features) {
///     match entry {
///         Some(f) => println!("{}: {} bpm", id, f.tempo),
///         None => println!("{}: no feature data", id),
///     }
/// }
/// ```
pub async fn audio_features(
    token: &str,
    track_ids: &[String],
) -> Result<Vec<Option<AudioFeatures>>> {
    if token.is_empty() {
        return Err(Error::InvalidToken);
    }
    if track_ids.is_empty() {
        return Ok(Vec::new());
    }

    let api_url = format!("{uri}/audio-features", uri = &config::spotify_apiurl());
    let ids = track_ids.join(",");

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .query(&[("ids", ids.as_str())])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::Http(status));
    }

    let res = response.json::<AudioFeaturesResponse>().await?;
    Ok(res.audio_features.unwrap_or_default())
}
