//! # CLI Module
//!
//! This module provides the command-line interface layer for spogenre. It turns
//! parsed command-line options into calls to the genre pipeline and presents the
//! outcome to the user.
//!
//! ## Overview
//!
//! - [`genres`] - Breaks a playlist down by genre and prints the ranking table
//!
//! ## Architecture Design
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Genre Pipeline (Fan-out Aggregation, Report Building)
//!     ↓
//! API Layer (Spotify Integration)
//!     ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! The CLI only resolves configuration, reports progress and renders results;
//! all counting happens in [`crate::genres`].
//!
//! ## Error Presentation
//!
//! Every [`crate::error::GenreError`] kind is rendered with its own message,
//! telling the user whether to fix the input, refresh the token or simply try
//! again later. Failures terminate the program with exit code 1.
//!
//! ## Usage Patterns
//!
//! ```bash
//! spogenre genres https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M
//! spogenre genres 37i9dQZF1DXcBWIGoYBM5M --dedupe --max-in-flight 32
//! spogenre genres spotify:playlist:37i9dQZF1DXcBWIGoYBM5M --skip-failed --json
//! ```

mod genres;

pub use genres::GenresRequest;
pub use genres::genres;
