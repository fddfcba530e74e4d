use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use chrono::{Local, NaiveDate};

use crate::types::DateStamp;

pub fn today_stamp() -> DateStamp {
    DateStamp::new(Local::now().date_naive())
}

/// Parses `YYMMDD` or `YYYY-MM-DD` into a stamp.
pub fn parse_date_stamp(value: &str) -> Option<DateStamp> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(DateStamp::new(date));
    }

    if value.len() != 6 || !value.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    NaiveDate::parse_from_str(value, DateStamp::FORMAT)
        .ok()
        .map(DateStamp::new)
}

/// Collapses every run of whitespace into a single space and trims the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<&str>>().join(" ")
}

/// Number of characters per caption line for a canvas width and font size.
///
/// A glyph is assumed to be about half as wide as the font size.
pub fn caption_wrap_width(image_width: u32, font_size: u32) -> usize {
    let glyph_width = (font_size as f64 / 2.0).max(1.0);
    ((image_width as f64 / glyph_width) as usize).max(1)
}

/// Normalizes whitespace and re-wraps the text into `width` character lines.
pub fn wrap_caption(raw: &str, width: usize) -> String {
    let normalized = normalize_whitespace(raw);
    if normalized.is_empty() {
        return String::new();
    }

    textwrap::wrap(&normalized, width).join("\n")
}

/// Resolves an href found on a page against the APOD base URL.
pub fn join_url(base_url: &str, href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        return href.to_string();
    }

    format!(
        "{base}/{href}",
        base = base_url.trim_end_matches('/'),
        href = href.trim_start_matches('/')
    )
}

/// Appends a raw suffix to a file name, e.g. `x.jpg` -> `x.jpg.html`.
pub fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

/// Expands a leading `~` to the home directory.
pub fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => path.to_path_buf(),
        },
        Err(_) => path.to_path_buf(),
    }
}

/// Human readable byte count for the library table.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{value:.1} {}", UNITS[unit])
    }
}
