use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use tracksheet::{cli, config};

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
    /// Export a Spotify playlist to CSV
    Spotify(SpotifyOptions),

    /// Export a Deezer playlist to CSV
    Deezer(DeezerOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct SpotifyOptions {
    /// Path of the CSV report
    #[clap(long, default_value = "playlist.csv")]
    pub output: PathBuf,

    /// Also print the report as a table
    #[clap(long)]
    pub table: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct DeezerOptions {
    /// Path of the CSV report
    #[clap(long, default_value = "deezer_playlist.csv")]
    pub output: PathBuf,

    /// Also print the report as a table
    #[clap(long)]
    pub table: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    config::load_env().await;

    let cli = Cli::parse();

    match cli.command {
        Command::Spotify(opt) => cli::spotify_report(opt.output, opt.table).await,
        Command::Deezer(opt) => cli::deezer_report(opt.output, opt.table).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
