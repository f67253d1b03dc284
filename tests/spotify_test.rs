use serde_json::json;

use spafcli::error::Error;
use spafcli::spotify::{auth, features, search};
use spafcli::types::{AudioFeaturesResponse, SearchResponse};

#[tokio::test]
async fn test_request_token_missing_credentials() {
    // Empty credentials fail before any network call is attempted
    let result = auth::request_token("", "secret").await;
    assert!(matches!(result, Err(Error::CredentialsMissing)));

    let result = auth::request_token("client", "").await;
    assert!(matches!(result, Err(Error::CredentialsMissing)));

    let result = auth::request_token("", "").await;
    assert!(matches!(result, Err(Error::CredentialsMissing)));
}

#[tokio::test]
async fn test_search_tracks_missing_token() {
    let result = search::search_tracks("", "some query", 10).await;
    assert!(matches!(result, Err(Error::InvalidToken)));
}

#[tokio::test]
async fn test_audio_features_missing_token() {
    let ids = vec!["id1".to_string()];
    let result = features::audio_features("", &ids).await;
    assert!(matches!(result, Err(Error::InvalidToken)));
}

#[tokio::test]
async fn test_audio_features_empty_ids() {
    // No IDs means no request; the result is simply empty
    let result = features::audio_features("token", &[]).await;
    assert!(result.unwrap().is_empty());
}

#[test]
fn test_parse_token_response() {
    let body = json!({
        "access_token": "X",
        "token_type": "Bearer",
        "expires_in": 3600
    });

    let token = auth::parse_token_response(&body).unwrap();
    assert_eq!(token.access_token, "X");
    assert_eq!(token.token_type, "Bearer");
    assert_eq!(token.expires_in, 3600);
}

#[test]
fn test_parse_token_response_defaults() {
    // Only access_token is required
    let body = json!({ "access_token": "X" });

    let token = auth::parse_token_response(&body).unwrap();
    assert_eq!(token.access_token, "X");
    assert_eq!(token.token_type, "Bearer");
    assert_eq!(token.expires_in, 3600);
}

#[test]
fn test_parse_token_response_missing_access_token() {
    let body = json!({ "token_type": "Bearer", "expires_in": 3600 });
    let result = auth::parse_token_response(&body);
    assert!(matches!(result, Err(Error::MalformedResponse(_))));

    // An empty access token is treated the same as a missing one
    let body = json!({ "access_token": "" });
    let result = auth::parse_token_response(&body);
    assert!(matches!(result, Err(Error::MalformedResponse(_))));
}

#[test]
fn test_clamp_limit() {
    // The API hard-caps results at 50
    assert_eq!(search::clamp_limit(200), 50);
    assert_eq!(search::clamp_limit(51), 50);
    assert_eq!(search::clamp_limit(50), 50);
    assert_eq!(search::clamp_limit(25), 25);
    assert_eq!(search::clamp_limit(1), 1);
    assert_eq!(search::clamp_limit(0), 1);
}

#[test]
fn test_search_response_deserialization() {
    let body = json!({
        "tracks": {
            "items": [
                {
                    "id": "A",
                    "name": "Track A",
                    "artists": [{ "name": "Artist 1" }, { "name": "Artist 2" }],
                    "album": { "name": "Album A" }
                },
                {
                    "name": "No Id Track",
                    "artists": [{ "name": "Artist 3" }],
                    "album": { "name": "Album B" }
                }
            ]
        }
    });

    let res: SearchResponse = serde_json::from_value(body).unwrap();
    let items = res.tracks.unwrap().items;

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id.as_deref(), Some("A"));
    assert_eq!(items[0].name, "Track A");
    assert_eq!(items[0].artists.len(), 2);
    assert_eq!(items[0].album.name, "Album A");

    // A track entry without an id still deserializes
    assert!(items[1].id.is_none());
}

#[test]
fn test_search_response_without_tracks() {
    // A body without a tracks object yields no items
    let res: SearchResponse = serde_json::from_str("{}").unwrap();
    assert!(res.tracks.is_none());

    let body = json!({ "tracks": { } });
    let res: SearchResponse = serde_json::from_value(body).unwrap();
    assert!(res.tracks.unwrap().items.is_empty());
}

#[test]
fn test_features_response_preserves_null_entries() {
    let body = json!({
        "audio_features": [
            { "id": "A", "tempo": 120.0, "energy": 0.8, "duration_ms": 201000 },
            null,
            { "id": "C", "tempo": 98.5, "energy": 0.3, "duration_ms": 183000 }
        ]
    });

    let res: AudioFeaturesResponse = serde_json::from_value(body).unwrap();
    let entries = res.audio_features.unwrap();

    // Null entries stay in place so positions line up with the requested IDs
    assert_eq!(entries.len(), 3);
    assert!(entries[1].is_none());

    let first = entries[0].as_ref().unwrap();
    assert_eq!(first.id, "A");
    assert_eq!(first.tempo, 120.0);
    assert_eq!(first.duration_ms, 201_000);

    let third = entries[2].as_ref().unwrap();
    assert_eq!(third.id, "C");
}

#[test]
fn test_features_response_absent_or_null_array() {
    // A body without an audio_features array deserializes to nothing
    let res: AudioFeaturesResponse = serde_json::from_str("{}").unwrap();
    assert!(res.audio_features.is_none());

    // An explicit null array is treated the same way
    let body = json!({ "audio_features": null });
    let res: AudioFeaturesResponse = serde_json::from_value(body).unwrap();
    assert!(res.audio_features.is_none());
}
