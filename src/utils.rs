use std::collections::HashSet;

use base64::{Engine, engine::general_purpose::STANDARD};

use crate::types::{Track, TrackArtist};

pub fn basic_auth_header(client_id: &str, client_secret: &str) -> String {
    let auth = format!("{}:{}", client_id, client_secret);
    format!("Basic {}", STANDARD.encode(auth))
}

pub fn dedup_tracks(tracks: &mut Vec<Track>) {
    let mut seen_ids = HashSet::new();
    tracks.retain(|track| match &track.id {
        Some(id) if !id.is_empty() => seen_ids.insert(id.clone()),
        _ => false,
    });
}

pub fn join_artist_names(artists: &[TrackArtist]) -> String {
    artists
        .iter()
        .map(|artist| artist.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn format_duration(duration_ms: u64) -> String {
    let total_secs = duration_ms / 1000;
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}
