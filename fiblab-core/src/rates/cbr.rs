//! Central Bank of Russia daily-rate source.
//!
//! The base component of the pipeline: one blocking HTTP GET against the
//! daily JSON endpoint, parsed into a [`RateDataset`]. There is no retry
//! layer and no local recovery — a failed request or a malformed body
//! surfaces as an error on that call and nowhere else.

use std::path::{Path, PathBuf};

use super::dataset::RateDataset;
use super::provider::{write_text, RateError, RatePayload, RateProvider};

/// Daily JSON endpoint mirroring the CBR XML feed.
pub const DAILY_URL: &str = "https://www.cbr-xml-daily.ru/daily_json.js";

/// Concrete rate source fetching the daily document over HTTP.
pub struct CbrProvider {
    client: reqwest::blocking::Client,
    url: String,
}

impl CbrProvider {
    pub fn new() -> Self {
        Self::with_url(DAILY_URL)
    }

    /// Point the provider at a non-default endpoint (tests, mirrors).
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            url: url.into(),
        }
    }

    /// Parse one daily document body.
    fn parse_document(body: &str) -> Result<RateDataset, RateError> {
        serde_json::from_str(body).map_err(|e| RateError::Format(e.to_string()))
    }

    fn fetch_dataset(&self) -> Result<RateDataset, RateError> {
        let resp = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| RateError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(RateError::Network(format!(
                "HTTP {status} from {}",
                self.url
            )));
        }

        let body = resp.text().map_err(|e| RateError::Network(e.to_string()))?;
        Self::parse_document(&body)
    }
}

impl Default for CbrProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl RateProvider for CbrProvider {
    fn fetch(&self) -> Result<RatePayload, RateError> {
        Ok(RatePayload::Dataset(self.fetch_dataset()?))
    }

    /// Writes the dataset as pretty-printed JSON, UTF-8, non-ASCII kept
    /// as-is. The base component never rewrites the given path.
    fn persist(&self, path: &Path) -> Result<PathBuf, RateError> {
        let dataset = self.fetch_dataset()?;
        let text =
            serde_json::to_string_pretty(&dataset).map_err(|e| RateError::Encode(e.to_string()))?;
        write_text(path, &text)?;
        Ok(path.to_path_buf())
    }
}
