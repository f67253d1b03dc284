//! # CLI Module
//!
//! This module provides the command-line interface layer for spafcli, a
//! Spotify API client for searching tracks and inspecting their audio
//! features. It implements all user-facing CLI commands and coordinates
//! between the Spotify API layer and user interaction.
//!
//! ## Commands
//!
//! - [`auth`] - Verifies the configured credentials by requesting a token
//! - [`search`] - Searches tracks and renders the track and audio-feature
//!   tables
//!
//! ## Architecture Design
//!
//! The CLI module follows a layered architecture approach:
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! API Layer (Spotify Integration)
//!     ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! Each command is an explicit handler invoked per user action. Handlers
//! fetch a fresh token, pass it into the client functions, and render the
//! results; no token or result state survives a command.
//!
//! ## Error Handling Philosophy
//!
//! All API failures are caught here and converted into user-visible
//! messages via the colored status macros. A failed token fetch aborts the
//! command, a failed search is reported as a warning with an empty result
//! display, and a failed feature fetch warns without discarding the track
//! table that was already rendered.
//!
//! ## Progress and User Experience
//!
//! Network operations display a spinner while in flight, results are
//! rendered as tables, and warnings call out tracks for which Spotify has
//! no audio-feature data.

mod auth;
mod search;

pub use auth::auth;
pub use search::search;
