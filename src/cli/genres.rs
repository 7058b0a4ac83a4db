use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    config, error,
    error::GenreError,
    genres::{self, FailurePolicy, LookupMode},
    info,
    spotify::SpotifyClient,
    success,
    types::{GenreReport, GenreTableRow},
    warning,
};

/// Options of a single `genres` invocation.
#[derive(Debug, Clone, Default)]
pub struct GenresRequest {
    /// Playlist link, `spotify:playlist:` URI or bare ID.
    pub playlist: String,
    /// Overrides `SPOTIFY_TOKEN`.
    pub token: Option<String>,
    /// Overrides `SPOGENRE_MAX_IN_FLIGHT`.
    pub max_in_flight: Option<usize>,
    pub dedupe: bool,
    pub skip_failed: bool,
    pub json: bool,
}

/// Prints the genre breakdown of a playlist.
///
/// Resolves the credential and pipeline options from the request and the
/// environment, runs the aggregation behind a spinner and renders the ranked
/// genres as a table (or as JSON with `--json`).
///
/// # Error Handling
///
/// Any failure terminates the program with a message specific to its kind:
/// - **Invalid reference**: the input is not a playlist link or ID
/// - **Credential rejected**: the token has to be refreshed
/// - **Not found**: the playlist or one of its artists is missing or private
/// - **Transient**: Spotify is unreachable or rate limiting, try again later
///
/// # Example Usage
///
/// ```bash
/// spogenre genres https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M
/// ```
///
/// # Output Example
///
/// ```
/// +-----------+-------+------------+
/// | genre     | count | percentage |
/// +-----------+-------+------------+
/// | pop       | 3     | 60.00%     |
/// | rock      | 2     | 40.00%     |
/// +-----------+-------+------------+
/// [o] Total genre hits: 5
/// [o] Artist occurrences: 3
/// ```
pub async fn genres(request: GenresRequest) {
    let token = match request.token {
        Some(token) => token,
        None => match config::spotify_token() {
            Ok(token) => token,
            Err(e) => error!("{}", failure_message(&e)),
        },
    };

    let mut options = match config::aggregate_options() {
        Ok(options) => options,
        Err(e) => error!("{}", failure_message(&e)),
    };
    if let Some(max_in_flight) = request.max_in_flight {
        options.max_in_flight = max_in_flight;
    }
    if request.dedupe {
        options.lookup = LookupMode::Memoized;
    }
    if request.skip_failed {
        options.on_failure = FailurePolicy::SkipFailed;
    }

    let client = match SpotifyClient::from_env(token) {
        Ok(client) => client,
        Err(e) => error!("{}", failure_message(&e)),
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message("Collecting genres of playlist artists...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let result = genres::aggregate_with(&client, &request.playlist, &options).await;
    pb.finish_and_clear();

    let report = match result {
        Ok(report) => report,
        Err(e) => error!("{}", failure_message(&e)),
    };

    if request.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => error!("Cannot serialize report. Err: {}", e),
        }
        return;
    }

    render(&report);
}

fn render(report: &GenreReport) {
    if report.genres.is_empty() {
        warning!(
            "Playlist {} has no genre information ({} artist occurrences).",
            report.playlist_id,
            report.occurrences
        );
    } else {
        let rows: Vec<GenreTableRow> = report.genres.iter().map(GenreTableRow::from).collect();
        println!("{}", Table::new(rows));
        info!("Total genre hits: {}", report.total);
        info!("Artist occurrences: {}", report.occurrences);
    }

    if report.skipped > 0 {
        warning!(
            "Skipped {} artist occurrences whose lookup failed.",
            report.skipped
        );
    } else if !report.genres.is_empty() {
        success!("Counted {} genres.", report.genres.len());
    }
}

fn failure_message(err: &GenreError) -> String {
    match err {
        GenreError::InvalidReference(input) => {
            format!("`{}` is not a Spotify playlist link or ID.", input)
        }
        GenreError::Auth { .. } => {
            "Spotify rejected the access token. Set a fresh SPOTIFY_TOKEN or pass --token."
                .to_string()
        }
        GenreError::NotFound { resource } => {
            format!("Spotify has no {} (or it is private).", resource)
        }
        GenreError::Transient { .. } => {
            format!("Spotify is unavailable, try again later. Err: {}", err)
        }
        GenreError::MalformedResponse { .. }
        | GenreError::ForeignLink { .. }
        | GenreError::UnexpectedStatus { .. } => {
            format!("Unexpected answer from Spotify. Err: {}", err)
        }
        GenreError::Config(msg) => format!("Configuration error: {}", msg),
    }
}
