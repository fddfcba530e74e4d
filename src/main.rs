use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use apodwall::{cli, config, config::Config, warning};

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
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Re-compose the wallpaper even if it already exists
    #[clap(short, long)]
    force: bool,

    /// Switch to the next stored wallpaper instead of fetching
    #[clap(short, long, conflicts_with_all = ["force", "date"])]
    rotate: bool,

    /// Day to fetch: today, YYMMDD or YYYY-MM-DD
    #[clap(short, long, default_value = "today")]
    date: String,

    /// Only update files, leave the desktop background alone
    #[clap(long)]
    no_apply: bool,

    /// Download directory (overrides APOD_DOWNLOAD_DIR)
    #[clap(long)]
    dir: Option<PathBuf>,

    /// Wallpaper width in pixels
    #[clap(long)]
    width: Option<u32>,

    /// Wallpaper height in pixels
    #[clap(long)]
    height: Option<u32>,

    /// Caption font size in points
    #[clap(long)]
    font_size: Option<u32>,

    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List stored wallpapers and the current rotation target
    Info,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

impl Cli {
    fn config(&self) -> Config {
        let mut config = Config::from_env();
        if let Some(dir) = &self.dir {
            config.download_dir = dir.clone();
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(font_size) = self.font_size {
            config.font_size = font_size;
        }
        config
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();
    let config = cli.config();

    match cli.command {
        Some(Command::Info) => cli::info(config).await,
        Some(Command::Completions(opt)) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
        None if cli.rotate => cli::rotate(config, !cli.no_apply).await,
        None => cli::fetch(config, &cli.date, cli.force, !cli.no_apply).await,
    }
}
