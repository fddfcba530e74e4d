use crate::{
    apod::FetchPipeline,
    background,
    compositor::MagickCompositor,
    config::Config,
    error, success,
    types::{ApodError, DateRequest},
    warning,
};

/// Fetches the requested day's picture and applies it as the background.
///
/// An already fetched day is reported as a warning and the process exits
/// normally; every other failure terminates with an error message.
pub async fn fetch(config: Config, date: &str, force: bool, apply: bool) {
    let request = match DateRequest::parse(date) {
        Ok(request) => request,
        Err(e) => error!("{}", e),
    };

    let pipeline = match FetchPipeline::new(config, MagickCompositor::default()) {
        Ok(pipeline) => pipeline,
        Err(e) => error!("Cannot build http client: {}", e),
    };

    let wallpaper = match pipeline.run(&request, force).await {
        Ok(path) => path,
        Err(e @ ApodError::AlreadyFetched(_)) => {
            warning!("No new background: {}", e);
            return;
        }
        Err(e) => error!("Failed to get picture: {}", e),
    };

    success!("Saved wallpaper to {}", wallpaper.display());

    if apply {
        background::detect_backend().apply(&wallpaper);
    }
}
