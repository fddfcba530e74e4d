use std::path::Path;

use futures_lite::io::AsyncWriteExt;
use reqwest::{Client, Response};

use crate::types::ApodError;

/// Thin HTTP client tagging every request with the configured user agent.
///
/// Each resource is requested exactly once; a non-success status surfaces as
/// [`ApodError::Http`] and is never retried.
pub struct ResourceFetcher {
    client: Client,
}

impl ResourceFetcher {
    pub fn new(user_agent: &str) -> Result<Self, ApodError> {
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client })
    }

    /// Sends a GET and returns the response once headers arrived.
    ///
    /// The body is left unread so callers can either buffer it or stream it.
    ///
    /// # Errors
    ///
    /// Transport failures and any non-2xx status.
    pub async fn fetch(&self, url: &str) -> Result<Response, ApodError> {
        let response = self.client.get(url).send().await?;
        Ok(response.error_for_status()?)
    }

    pub async fn fetch_text(&self, url: &str) -> Result<String, ApodError> {
        let response = self.fetch(url).await?;
        Ok(response.text().await?)
    }

    /// Copies the response body to `dest` chunk by chunk and returns the
    /// number of bytes written. The body is never fully buffered in memory.
    pub async fn stream_to_file(&self, url: &str, dest: &Path) -> Result<u64, ApodError> {
        let mut response = self.fetch(url).await?;
        let mut file = async_fs::File::create(dest).await?;
        let mut written: u64 = 0;

        while let Some(chunk) = response.chunk().await? {
            file.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }

        file.flush().await?;
        Ok(written)
    }
}
