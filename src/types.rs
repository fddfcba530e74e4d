use std::{
    fmt,
    io::Error,
    path::{Path, PathBuf},
    process::ExitStatus,
};

use chrono::NaiveDate;
use tabled::Tabled;

use crate::utils;

/// Calendar day identifying one APOD entry, rendered as `YYMMDD`.
///
/// The rendering is fixed width and zero padded, so sorting file names built
/// from stamps sorts them chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateStamp(NaiveDate);

impl DateStamp {
    pub const FORMAT: &'static str = "%y%m%d";

    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for DateStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

/// Which APOD entry a fetch targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRequest {
    /// The current picture, served by the "today" endpoint.
    Today,
    /// A historical picture, served by the date-parameterized endpoint.
    On(DateStamp),
}

impl DateRequest {
    /// Parses the `--date` argument: `today` (or empty), `YYMMDD` or `YYYY-MM-DD`.
    pub fn parse(value: &str) -> Result<Self, ApodError> {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("today") {
            return Ok(DateRequest::Today);
        }

        utils::parse_date_stamp(value)
            .map(DateRequest::On)
            .ok_or_else(|| ApodError::InvalidDate(value.to_string()))
    }

    /// Stamp used as the filesystem key; `Today` resolves to the local date.
    pub fn stamp(&self) -> DateStamp {
        match self {
            DateRequest::Today => utils::today_stamp(),
            DateRequest::On(stamp) => *stamp,
        }
    }
}

/// The on-disk files belonging to one date stamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSet {
    pub stamp: DateStamp,
    /// Durable composited wallpaper, `<stamp>.jpg`.
    pub wallpaper: PathBuf,
    /// Cached page snapshot, `<stamp>.jpg.html`.
    pub page: PathBuf,
    /// Transient downloaded image, `<stamp>.jpg.orig`.
    pub raw_image: PathBuf,
}

impl ArtifactSet {
    pub fn new(dir: &Path, stamp: DateStamp) -> Self {
        let wallpaper = dir.join(format!("{stamp}.jpg"));
        let page = utils::with_suffix(&wallpaper, ".html");
        let raw_image = utils::with_suffix(&wallpaper, ".orig");
        Self {
            stamp,
            wallpaper,
            page,
            raw_image,
        }
    }
}

/// Everything the page indexer pulls out of an APOD page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageIndex {
    /// Absolute URL of the full-size picture.
    pub image_url: String,
    /// Whitespace-normalized caption, wrapped into display lines.
    pub caption: String,
}

#[derive(Tabled)]
pub struct WallpaperTableRow {
    pub date: String,
    pub file: String,
    pub size: String,
    pub cached_page: String,
    pub current: String,
}

#[derive(Debug)]
pub enum ApodError {
    /// The wallpaper for the date already exists and force was not requested.
    AlreadyFetched(PathBuf),
    Http(reqwest::Error),
    NoImageFound(String),
    EmptyLibrary(PathBuf),
    InvalidDate(String),
    Tool { tool: String, status: ExitStatus },
    IoError(Error),
}

impl fmt::Display for ApodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApodError::AlreadyFetched(path) => {
                write!(f, "image already exists at {}", path.display())
            }
            ApodError::Http(err) => write!(f, "request failed: {err}"),
            ApodError::NoImageFound(page) => write!(f, "no picture link found on {page}"),
            ApodError::EmptyLibrary(dir) => write!(f, "no apod images found in {}", dir.display()),
            ApodError::InvalidDate(value) => {
                write!(f, "invalid date '{value}', expected today, YYMMDD or YYYY-MM-DD")
            }
            ApodError::Tool { tool, status } => write!(f, "{tool} failed with {status}"),
            ApodError::IoError(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ApodError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApodError::Http(err) => Some(err),
            ApodError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<Error> for ApodError {
    fn from(err: Error) -> Self {
        ApodError::IoError(err)
    }
}

impl From<reqwest::Error> for ApodError {
    fn from(err: reqwest::Error) -> Self {
        ApodError::Http(err)
    }
}
