//! Configuration management for spogenre.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. It provides a centralized way to manage the Spotify
//! credential, the Web API location and the tuning knobs of the genre pipeline.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. `.env` file in the current working directory
//! 4. Application defaults (where applicable)

use std::{env, path::PathBuf, str::FromStr, time::Duration};

use crate::{Res, error::GenreError, genres::AggregateOptions};

pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_MAX_IN_FLIGHT: usize = 16;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Loads environment variables from `.env` files.
///
/// Creates the local data directory if it doesn't exist and loads the `.env`
/// file located under `spogenre/.env` there, followed by a `.env` file in the
/// current working directory. Neither file is required; variables that are
/// already set are never overwritten.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/spogenre/.env`
/// - macOS: `~/Library/Application Support/spogenre/.env`
/// - Windows: `%LOCALAPPDATA%/spogenre/.env`
///
/// # Errors
///
/// This function will return an error if:
/// - The parent directory cannot be created
/// - An existing `.env` file cannot be read or parsed
///
/// # Example
///
/// ```
/// use spogenre::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Res<()> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    if path.is_file() {
        dotenv::from_path(&path)?;
    }

    match dotenv::dotenv() {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e.into()),
    }
}

fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spogenre/.env");
    path
}

/// Returns the bearer credential for the Spotify Web API.
///
/// Retrieves the `SPOTIFY_TOKEN` environment variable. Obtaining the token is
/// left to the user, e.g. through the client credentials flow.
///
/// # Errors
///
/// Returns [`GenreError::Config`] if the variable is unset or empty.
pub fn spotify_token() -> Result<String, GenreError> {
    match env::var("SPOTIFY_TOKEN") {
        Ok(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
        _ => Err(GenreError::Config(
            "SPOTIFY_TOKEN must be set (or pass --token)".to_string(),
        )),
    }
}

/// Returns the Spotify Web API base URL.
///
/// Reads `SPOTIFY_API_URL`, falling back to [`DEFAULT_SPOTIFY_API_URL`]. A
/// trailing slash is removed so endpoint paths can be appended directly.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL")
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(|_| DEFAULT_SPOTIFY_API_URL.to_string())
}

/// Returns the maximum number of artist lookups kept in flight.
///
/// Reads `SPOGENRE_MAX_IN_FLIGHT`, falling back to [`DEFAULT_MAX_IN_FLIGHT`].
pub fn max_in_flight() -> Result<usize, GenreError> {
    parse_var("SPOGENRE_MAX_IN_FLIGHT", DEFAULT_MAX_IN_FLIGHT)
}

/// Returns the timeout applied to every catalog request.
///
/// Reads `SPOGENRE_REQUEST_TIMEOUT_SECS`, falling back to
/// [`DEFAULT_REQUEST_TIMEOUT_SECS`].
pub fn request_timeout() -> Result<Duration, GenreError> {
    parse_var("SPOGENRE_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)
        .map(Duration::from_secs)
}

/// Aggregation options seeded from the environment.
pub fn aggregate_options() -> Result<AggregateOptions, GenreError> {
    Ok(AggregateOptions {
        max_in_flight: max_in_flight()?,
        ..AggregateOptions::default()
    })
}

fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T, GenreError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| GenreError::Config(format!("{} has an invalid value `{}`", name, raw))),
        Err(_) => Ok(default),
    }
}
