use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};
use tracing_subscriber::EnvFilter;

use spogenre::{cli, config, error};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Break a playlist down by artist genres
    Genres(GenresOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct GenresOptions {
    /// Playlist link, spotify:playlist URI or playlist ID
    playlist: String,

    /// Bearer token (defaults to SPOTIFY_TOKEN)
    #[clap(long)]
    token: Option<String>,

    /// Maximum number of concurrent artist lookups
    #[clap(long)]
    max_in_flight: Option<usize>,

    /// Look up each distinct artist once
    #[clap(long)]
    dedupe: bool,

    /// Leave out artists whose lookup fails instead of aborting
    #[clap(long)]
    skip_failed: bool,

    /// Print the report as JSON
    #[clap(long)]
    json: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Genres(opt) => {
            cli::genres(cli::GenresRequest {
                playlist: opt.playlist,
                token: opt.token,
                max_in_flight: opt.max_in_flight,
                dedupe: opt.dedupe,
                skip_failed: opt.skip_failed,
                json: opt.json,
            })
            .await
        }
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
