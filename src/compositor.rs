//! Wallpaper composition.
//!
//! Resizing, letterboxing and text rendering are delegated to a raster tool.
//! The [`Compositor`] trait is the contract the fetch pipeline relies on: given
//! a source picture, produce a file of exactly `width`x`height` pixels at
//! `dest`, padded with a black background and with the caption drawn centered
//! in yellow near the lower third of the canvas.

use std::{future::Future, path::Path};

use tokio::process::Command;

use crate::types::ApodError;

/// Inputs for a single composition.
#[derive(Debug, Clone, Copy)]
pub struct CompositionJob<'a> {
    pub source: &'a Path,
    pub dest: &'a Path,
    /// Caption already wrapped into lines separated by `\n`.
    pub caption: &'a str,
    pub width: u32,
    pub height: u32,
    pub font_size: u32,
}

impl CompositionJob<'_> {
    pub fn size_arg(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }

    /// Vertical text offset from the canvas center, shifted up by one pixel
    /// per caption line so longer captions stay balanced.
    pub fn caption_offset(&self) -> i64 {
        i64::from(self.height) / 3 - self.caption.lines().count() as i64
    }
}

pub trait Compositor {
    fn compose(
        &self,
        job: &CompositionJob<'_>,
    ) -> impl Future<Output = Result<(), ApodError>> + Send;
}

/// ImageMagick based compositor (`convert` by default).
#[derive(Debug, Clone)]
pub struct MagickCompositor {
    pub program: String,
}

impl Default for MagickCompositor {
    fn default() -> Self {
        Self {
            program: "convert".to_string(),
        }
    }
}

impl MagickCompositor {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Argument list for one composition.
    pub fn args(job: &CompositionJob<'_>) -> Vec<String> {
        let size = job.size_arg();
        vec![
            job.source.display().to_string(),
            "-resize".to_string(),
            size.clone(),
            "-gravity".to_string(),
            "center".to_string(),
            "-background".to_string(),
            "rgb(0,0,0)".to_string(),
            "-extent".to_string(),
            size,
            "-pointsize".to_string(),
            job.font_size.to_string(),
            "-fill".to_string(),
            "yellow".to_string(),
            "-draw".to_string(),
            format!(
                "text 0,{offset} \"{text}\"",
                offset = job.caption_offset(),
                text = escape_draw_text(job.caption)
            ),
            job.dest.display().to_string(),
        ]
    }
}

impl Compositor for MagickCompositor {
    async fn compose(&self, job: &CompositionJob<'_>) -> Result<(), ApodError> {
        let status = Command::new(&self.program)
            .args(Self::args(job))
            .status()
            .await?;

        if !status.success() {
            return Err(ApodError::Tool {
                tool: self.program.clone(),
                status,
            });
        }

        Ok(())
    }
}

/// Escapes characters that would end the quoted `-draw` text early, and
/// `%` so the caption is not read as a property escape.
pub fn escape_draw_text(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('%', "%%")
}
