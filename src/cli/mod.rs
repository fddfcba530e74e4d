//! # CLI Module
//!
//! User-facing command handlers. Each handler receives the resolved
//! [`Config`](crate::config::Config), talks to the library layers and turns
//! their results into console output. Fatal conditions end the process with
//! exit code 1 through the crate's `error!` macro; an already fetched day is
//! the only failure reported as a warning with a clean exit.
//!
//! ```text
//! CLI Layer (fetch, rotate, info)
//!     ↓
//! Pipeline / Rotation (apod, management)
//!     ↓
//! HTTP, filesystem, external tools
//! ```
//!
//! ## Usage Patterns
//!
//! ```bash
//! apodwall                    # fetch today's picture and apply it
//! apodwall --date 250101      # fetch a historical picture
//! apodwall --force            # re-compose a day that already exists
//! apodwall --rotate           # switch to the next stored wallpaper
//! apodwall info               # list stored wallpapers
//! ```

mod fetch;
mod info;
mod rotate;

pub use fetch::fetch;
pub use info::info;
pub use rotate::rotate;
