//! APOD Wallpaper Library
//!
//! This library fetches NASA's Astronomy Picture of the Day, bakes the
//! explanatory caption into a fixed-size wallpaper and applies it as the
//! desktop background. It also rotates through previously fetched wallpapers
//! using a single symbolic link as the only piece of state.
//!
//! # Modules
//!
//! - `apod` - Page fetching, page indexing and the fetch pipeline
//! - `background` - Desktop background backends (GNOME, sway)
//! - `cli` - Command-line interface implementations
//! - `compositor` - Wallpaper composition through an external raster tool
//! - `config` - Configuration value and environment loading
//! - `management` - Date-keyed cache store and rotation cursor
//! - `types` - Data structures, the error taxonomy and table rows
//! - `utils` - Caption, date and URL helpers
//!
//! # Example
//!
//! ```
//! use apodwall::{apod::FetchPipeline, compositor::MagickCompositor, config::Config, types::DateRequest};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), apodwall::types::ApodError> {
//!     let pipeline = FetchPipeline::new(Config::from_env(), MagickCompositor::default())?;
//!     let wallpaper = pipeline.run(&DateRequest::Today, false).await?;
//!     println!("{}", wallpaper.display());
//!     Ok(())
//! }
//! ```

pub mod apod;
pub mod background;
pub mod cli;
pub mod compositor;
pub mod config;
pub mod management;
pub mod types;
pub mod utils;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Getting {}'s picture", stamp);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Saved wallpaper to {}", path.display());
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only the CLI layer uses this macro; library code returns
/// [`types::ApodError`] and lets the caller decide.
///
/// # Example
///
/// ```
/// error!("No apod images found in {}", dir.display());
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// # Example
///
/// ```
/// warning!("No new background: {}", err);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
