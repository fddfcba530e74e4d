use std::{path::PathBuf, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    apod::{PageIndexer, ResourceFetcher},
    compositor::{CompositionJob, Compositor},
    config::Config,
    info,
    management::CacheStore,
    types::{ApodError, DateRequest},
    utils,
};

/// Produces one dated wallpaper: cache check, page, picture, composition.
///
/// Steps run strictly in sequence and any failure aborts the run. The raw
/// picture is only removed after a successful composition.
pub struct FetchPipeline<C: Compositor> {
    config: Config,
    fetcher: ResourceFetcher,
    cache: CacheStore,
    indexer: PageIndexer,
    compositor: C,
}

impl<C: Compositor> FetchPipeline<C> {
    pub fn new(config: Config, compositor: C) -> Result<Self, ApodError> {
        let fetcher = ResourceFetcher::new(&config.user_agent)?;
        let cache = CacheStore::new(config.library_dir());
        let indexer = PageIndexer::new(
            config.base_url.clone(),
            utils::caption_wrap_width(config.width, config.font_size),
        );

        Ok(Self {
            config,
            fetcher,
            cache,
            indexer,
            compositor,
        })
    }

    /// Runs the pipeline and returns the durable wallpaper path.
    ///
    /// # Errors
    ///
    /// - [`ApodError::AlreadyFetched`] if the wallpaper exists and `force` is off
    /// - [`ApodError::Http`] for any failed request
    /// - [`ApodError::NoImageFound`] if the page has no picture link
    /// - [`ApodError::Tool`] / [`ApodError::IoError`] from composition and disk access
    pub async fn run(&self, request: &DateRequest, force: bool) -> Result<PathBuf, ApodError> {
        let stamp = request.stamp();
        info!(
            "Getting {}'s picture (to {})",
            stamp,
            self.cache.artifacts(stamp).wallpaper.display()
        );

        let artifacts = self.cache.prepare(stamp, force).await?;

        let page_url = match request {
            DateRequest::Today => self.config.today_url(),
            DateRequest::On(stamp) => self.config.dated_url(&stamp.to_string()),
        };

        let html = match self.cache.load_page(&artifacts).await? {
            Some(html) => {
                info!("    loaded html dump from {}", artifacts.page.display());
                html
            }
            None => {
                let pb = spinner(format!("Fetching {page_url}..."));
                let fetched = self.fetcher.fetch_text(&page_url).await;
                pb.finish_and_clear();

                let html = fetched?;
                self.cache.store_page(&artifacts, &html).await?;
                info!("    saved html dump to {}", artifacts.page.display());
                html
            }
        };

        let index = self.indexer.index(&html, &page_url)?;

        let pb = spinner(format!("Downloading {}...", index.image_url));
        let downloaded = self
            .fetcher
            .stream_to_file(&index.image_url, &artifacts.raw_image)
            .await;
        pb.finish_and_clear();
        let bytes = downloaded?;
        info!(
            "    saved picture to {} ({})",
            artifacts.raw_image.display(),
            utils::format_size(bytes)
        );

        let job = CompositionJob {
            source: &artifacts.raw_image,
            dest: &artifacts.wallpaper,
            caption: &index.caption,
            width: self.config.width,
            height: self.config.height,
            font_size: self.config.font_size,
        };
        self.compositor.compose(&job).await?;

        self.cache.discard_raw_image(&artifacts).await?;
        Ok(artifacts.wallpaper)
    }
}

fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
