use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    config, error, info, spotify, success,
    types::{AudioFeatures, FeatureTableRow, Token, Track, TrackTableRow},
    utils, warning,
};

/// Searches Spotify for tracks and displays their audio features.
///
/// Runs the full interaction flow in one shot: requests a fresh access
/// token, searches the catalog for `query`, renders the matching tracks as
/// a table, then fetches the audio features for those tracks and renders a
/// second table.
///
/// The track list is deduplicated by ID (first occurrence wins) and entries
/// without an ID are dropped before display. Tracks for which Spotify has
/// no feature data are counted and reported instead of silently vanishing.
///
/// # Arguments
///
/// * `query` - Free-text search query (artist, track, genre, ...)
/// * `limit` - Maximum number of tracks to fetch (the API caps this at 50)
///
/// # Error Handling
///
/// - Token failures terminate the command; nothing downstream can run
/// - Search failures are reported as a warning with an empty result display
/// - Feature-fetch failures are reported as a warning, leaving the already
///   rendered track table in place
///
/// # Example Usage
///
/// ```bash
/// spafcli search "Discover" --limit 25
/// ```
pub async fn search(query: String, limit: u32) {
    let token = match fetch_token().await {
        Ok(token) => token,
        Err(e) => {
            error!("Failed to get token. Check credentials. Err: {}", e);
        }
    };
    info!("Obtained Spotify access token.");

    let pb = spinner(&format!("Searching for '{}'...", query));
    let result = spotify::search::search_tracks(&token.access_token, &query, limit).await;
    pb.finish_and_clear();

    let mut tracks = match result {
        Ok(tracks) => tracks,
        Err(e) => {
            warning!("Track search failed. Err: {}", e);
            Vec::new()
        }
    };

    utils::dedup_tracks(&mut tracks);

    if tracks.is_empty() {
        warning!("No tracks found for your query.");
        return;
    }

    success!("Fetched {} tracks for '{}'.", tracks.len(), query);
    print_track_table(&tracks);

    // every remaining track has an id after dedup_tracks
    let track_ids: Vec<String> = tracks.iter().filter_map(|t| t.id.clone()).collect();

    let pb = spinner("Fetching audio features...");
    let result = spotify::features::audio_features(&token.access_token, &track_ids).await;
    pb.finish_and_clear();

    match result {
        Ok(features) => print_feature_table(&tracks, &features),
        Err(e) => warning!("Failed to fetch audio features. Err: {}", e),
    }
}

async fn fetch_token() -> Result<Token, error::Error> {
    let pb = spinner("Requesting access token...");
    let result = spotify::auth::request_token(
        &config::spotify_client_id(),
        &config::spotify_client_secret(),
    )
    .await;
    pb.finish_and_clear();
    result
}

fn print_track_table(tracks: &[Track]) {
    let table_rows: Vec<TrackTableRow> = tracks
        .iter()
        .map(|track| TrackTableRow {
            name: track.name.clone(),
            artists: utils::join_artist_names(&track.artists),
            album: track.album.name.clone(),
        })
        .collect();

    let table = Table::new(table_rows);
    println!("{}", table);
}

fn print_feature_table(tracks: &[Track], features: &[Option<AudioFeatures>]) {
    let missing = features.iter().filter(|entry| entry.is_none()).count();
    if missing > 0 {
        info!(
            "No audio features available for {} of {} tracks.",
            missing,
            tracks.len()
        );
    }

    // features are positionally aligned with tracks
    let table_rows: Vec<FeatureTableRow> = tracks
        .iter()
        .zip(features)
        .filter_map(|(track, entry)| entry.as_ref().map(|f| feature_table_row(track, f)))
        .collect();

    if table_rows.is_empty() {
        warning!("No audio features to display.");
        return;
    }

    let table = Table::new(table_rows);
    println!("{}", table);
}

fn feature_table_row(track: &Track, features: &AudioFeatures) -> FeatureTableRow {
    FeatureTableRow {
        track: track.name.clone(),
        tempo: features.tempo,
        energy: features.energy,
        danceability: features.danceability,
        valence: features.valence,
        acousticness: features.acousticness,
        instrumentalness: features.instrumentalness,
        liveness: features.liveness,
        speechiness: features.speechiness,
        loudness: features.loudness,
        duration: utils::format_duration(features.duration_ms),
    }
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
