//! Desktop background backends.
//!
//! A backend is picked once by [`detect_backend`] and then only asked to
//! [`BackgroundSetter::apply`] a path. Commands are launched detached and
//! their outcome is not observed.

use std::{
    env,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use crate::{info, warning};

pub trait BackgroundSetter {
    fn name(&self) -> &'static str;

    /// Applies the picture at `path` as the desktop background, best effort.
    fn apply(&self, path: &Path);
}

/// GNOME session: sets the light and dark picture URIs via `gsettings`.
pub struct GnomeBackground;

impl GnomeBackground {
    const SCHEMA: &'static str = "org.gnome.desktop.background";
    const KEYS: [&'static str; 2] = ["picture-uri", "picture-uri-dark"];
}

impl BackgroundSetter for GnomeBackground {
    fn name(&self) -> &'static str {
        "gnome"
    }

    fn apply(&self, path: &Path) {
        let uri = format!("file://{}", absolute(path).display());
        for key in Self::KEYS {
            spawn_detached(
                Command::new("gsettings").args(["set", Self::SCHEMA, key, uri.as_str()]),
            );
        }
    }
}

/// Standalone `swaybg` daemon; the previous instance is killed first.
pub struct SwayBackground;

impl BackgroundSetter for SwayBackground {
    fn name(&self) -> &'static str {
        "sway"
    }

    fn apply(&self, path: &Path) {
        let _ = Command::new("pkill")
            .args(["-f", "swaybg"])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        let mut command = Command::new("swaybg");
        command
            .args(["--output", "*", "--image"])
            .arg(absolute(path))
            .args(["--mode", "fit", "--color", "000000"]);
        spawn_detached(&mut command);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Gnome,
    Sway,
}

/// Picks a backend from the desktop identifier, probing for a running sway
/// only when the identifier is unset or empty.
pub fn select_backend(desktop: Option<&str>, sway_running: impl FnOnce() -> bool) -> Backend {
    match desktop.map(str::trim) {
        Some(d) if d.eq_ignore_ascii_case("gnome") => Backend::Gnome,
        None | Some("") => {
            if sway_running() {
                Backend::Sway
            } else {
                Backend::Gnome
            }
        }
        Some(_) => Backend::Sway,
    }
}

/// Inspects `XDG_CURRENT_DESKTOP` (falling back to `pgrep sway`) and returns
/// the matching setter.
pub fn detect_backend() -> Box<dyn BackgroundSetter> {
    let desktop = env::var("XDG_CURRENT_DESKTOP").ok();
    let backend = select_backend(desktop.as_deref(), sway_running);

    let setter: Box<dyn BackgroundSetter> = match backend {
        Backend::Gnome => Box::new(GnomeBackground),
        Backend::Sway => Box::new(SwayBackground),
    };
    info!(
        "Using {} background (XDG_CURRENT_DESKTOP={})",
        setter.name(),
        desktop.as_deref().unwrap_or("<unset>")
    );
    setter
}

fn sway_running() -> bool {
    Command::new("pgrep")
        .arg("sway")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok_and(|status| status.success())
}

fn spawn_detached(command: &mut Command) {
    let program = command.get_program().to_string_lossy().into_owned();
    if let Err(e) = command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
    {
        warning!("Could not start {}: {}", program, e);
    }
}

/// Resolves symlinks so the backend sees the real file, not the rotation link.
fn absolute(path: &Path) -> PathBuf {
    std::fs::canonicalize(path)
        .or_else(|_| std::path::absolute(path))
        .unwrap_or_else(|_| path.to_path_buf())
}
