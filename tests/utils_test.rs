use spafcli::types::{Track, TrackAlbum, TrackArtist};
use spafcli::utils::*;

// Helper function to create a test track
fn create_test_track(id: Option<&str>, name: &str, artist: &str) -> Track {
    Track {
        id: id.map(|s| s.to_string()),
        name: name.to_string(),
        artists: vec![TrackArtist {
            name: artist.to_string(),
        }],
        album: TrackAlbum {
            name: format!("{} (Album)", name),
        },
    }
}

#[test]
fn test_basic_auth_header() {
    let header = basic_auth_header("id", "secret");

    // base64("id:secret")
    assert_eq!(header, "Basic aWQ6c2VjcmV0");

    // Deterministic - same input produces same output
    assert_eq!(header, basic_auth_header("id", "secret"));

    // Different credentials produce a different header
    assert_ne!(header, basic_auth_header("other", "secret"));
}

#[test]
fn test_dedup_tracks_removes_duplicates() {
    let mut tracks = vec![
        create_test_track(Some("id1"), "Track 1", "Artist A"),
        create_test_track(Some("id2"), "Track 2", "Artist B"),
        create_test_track(Some("id1"), "Track 1 Duplicate", "Artist A"),
        create_test_track(Some("id3"), "Track 3", "Artist C"),
    ];

    dedup_tracks(&mut tracks);

    // Should have 3 unique tracks
    assert_eq!(tracks.len(), 3);

    // Should contain the first occurrence of each unique ID, in order
    let ids: Vec<&str> = tracks.iter().filter_map(|t| t.id.as_deref()).collect();
    assert_eq!(ids, vec!["id1", "id2", "id3"]);
    assert_eq!(tracks[0].name, "Track 1");
}

#[test]
fn test_dedup_tracks_drops_missing_ids() {
    let mut tracks = vec![
        create_test_track(Some("id1"), "Track 1", "Artist A"),
        create_test_track(None, "No Id", "Artist B"),
        create_test_track(Some(""), "Empty Id", "Artist C"),
        create_test_track(Some("id2"), "Track 2", "Artist D"),
    ];

    dedup_tracks(&mut tracks);

    // Entries without a usable id should be excluded
    assert_eq!(tracks.len(), 2);
    let ids: Vec<&str> = tracks.iter().filter_map(|t| t.id.as_deref()).collect();
    assert_eq!(ids, vec!["id1", "id2"]);
}

#[test]
fn test_join_artist_names() {
    let artists = vec![
        TrackArtist {
            name: "Artist A".to_string(),
        },
        TrackArtist {
            name: "Artist B".to_string(),
        },
    ];
    assert_eq!(join_artist_names(&artists), "Artist A, Artist B");

    // Single artist has no separator
    assert_eq!(join_artist_names(&artists[..1]), "Artist A");

    // No artists yields an empty string
    assert_eq!(join_artist_names(&[]), "");
}

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(201_000), "3:21");
    assert_eq!(format_duration(600_000), "10:00");

    // Sub-minute durations keep a leading zero on seconds
    assert_eq!(format_duration(59_999), "0:59");

    // Sub-second remainder is truncated
    assert_eq!(format_duration(999), "0:00");
}
