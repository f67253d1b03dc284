//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by spafcli,
//! implementing authentication and catalog queries. It serves as the
//! integration layer between the CLI commands and Spotify's services, handling
//! all HTTP communication and response decoding.
//!
//! ## Core Modules
//!
//! ### Authentication Module
//!
//! [`auth`] - Implements the OAuth 2.0 client-credentials grant:
//! - **Token Exchange**: Exchanges the application's client ID and secret for
//!   a bearer token via HTTP Basic auth
//! - **No User Involvement**: The grant authorizes the application itself;
//!   no browser redirect or callback server is required
//! - **Per-Invocation Tokens**: A fresh token is requested for every command;
//!   tokens are never cached, persisted, or refreshed
//!
//! ### Search Module
//!
//! [`search`] - Free-text track search:
//! - **Track Queries**: Searches the catalog by artist, track, or genre text
//! - **Result Limits**: Clamps the requested result count to the API's hard
//!   cap of 50 items per request
//!
//! ### Features Module
//!
//! [`features`] - Audio-feature retrieval:
//! - **Batch Requests**: Fetches feature records for many tracks in a single
//!   comma-joined `ids` request
//! - **Alignment**: Preserves the upstream `null` markers so results stay
//!   positionally aligned with the requested track IDs
//!
//! ## Error Handling Philosophy
//!
//! Every function validates its inputs before touching the network (empty
//! credentials or tokens fail immediately), maps non-success status codes to
//! [`crate::error::Error::Http`], and propagates transport failures as
//! [`crate::error::Error::Network`]. There is no retry, backoff, or
//! circuit-breaking; each operation is a single-shot request/response pair
//! whose outcome is reported at the CLI boundary.
//!
//! ## Configuration Integration
//!
//! Endpoint URLs come from the application's configuration system: the token
//! endpoint from `SPOTIFY_API_TOKEN_URL` and the Web API base from
//! `SPOTIFY_API_URL`, with the search and audio-features paths composed from
//! the base.

pub mod auth;
pub mod features;
pub mod search;
