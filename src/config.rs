//! Configuration management for the APOD wallpaper tool.
//!
//! Settings live in an explicit [`Config`] value that is handed to the fetch
//! pipeline and the rotation cursor at construction time. Values are resolved
//! in this order:
//! 1. Command-line flags (applied by the binary on top of the loaded value)
//! 2. Environment variables, including a `.env` file in the config directory
//! 3. The defaults documented on [`Config::default`]

use std::{env, path::PathBuf, str::FromStr};

use crate::utils;

pub const DEFAULT_BASE_URL: &str = "https://apod.nasa.gov/apod";
pub const DEFAULT_LINK_NAME: &str = "current.jpg";
pub const DEFAULT_WIDTH: u32 = 1920;
pub const DEFAULT_HEIGHT: u32 = 1080;
pub const DEFAULT_FONT_SIZE: u32 = 20;

/// Loads environment variables from a `.env` file in the user config directory.
///
/// The file is looked up at:
/// - Linux: `~/.config/apodwall/.env`
/// - macOS: `~/Library/Application Support/apodwall/.env`
///
/// A missing file is not an error; every setting has a default.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or an existing
/// `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path)
        .map(|_| ())
        .map_err(|e| format!("{}: {}", path.display(), e))
}

fn env_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("apodwall/.env");
    path
}

/// Runtime settings for fetching, composing and rotating wallpapers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// APOD site root; pages and pictures are resolved against it.
    pub base_url: String,
    /// Directory holding wallpapers, page snapshots and the rotation link.
    pub download_dir: PathBuf,
    /// File name of the rotation link inside `download_dir`.
    pub link_name: String,
    pub width: u32,
    pub height: u32,
    pub font_size: u32,
    /// Identifying `User-Agent` sent with every request.
    pub user_agent: String,
}

impl Default for Config {
    /// `https://apod.nasa.gov/apod`, `<pictures>/apod`, `current.jpg`,
    /// 1920x1080 at font size 20.
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            download_dir: default_download_dir(),
            link_name: DEFAULT_LINK_NAME.to_string(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            font_size: DEFAULT_FONT_SIZE,
            user_agent: default_user_agent(),
        }
    }
}

impl Config {
    /// Builds a config from `APOD_*` environment variables over the defaults.
    ///
    /// Unparseable numeric values fall back to the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: env::var("APOD_BASE_URL").unwrap_or(defaults.base_url),
            download_dir: env::var("APOD_DOWNLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.download_dir),
            link_name: env::var("APOD_LINK_NAME").unwrap_or(defaults.link_name),
            width: env_number("APOD_WIDTH").unwrap_or(defaults.width),
            height: env_number("APOD_HEIGHT").unwrap_or(defaults.height),
            font_size: env_number("APOD_FONT_SIZE").unwrap_or(defaults.font_size),
            user_agent: env::var("APOD_USER_AGENT").unwrap_or(defaults.user_agent),
        }
    }

    /// Download directory with a leading `~` expanded.
    pub fn library_dir(&self) -> PathBuf {
        utils::expand_home(&self.download_dir)
    }

    pub fn link_path(&self) -> PathBuf {
        self.library_dir().join(&self.link_name)
    }

    /// Page URL for the "today" endpoint.
    pub fn today_url(&self) -> String {
        utils::join_url(&self.base_url, "astropix.html")
    }

    /// Page URL for a specific `YYMMDD` stamp.
    pub fn dated_url(&self, stamp: &str) -> String {
        utils::join_url(&self.base_url, &format!("ap{stamp}.html"))
    }
}

fn env_number<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

fn default_download_dir() -> PathBuf {
    let mut path = dirs::picture_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Pictures")))
        .unwrap_or_else(|| PathBuf::from("."));
    path.push("apod");
    path
}

fn default_user_agent() -> String {
    format!(
        "{name} {version}",
        name = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION")
    )
}
