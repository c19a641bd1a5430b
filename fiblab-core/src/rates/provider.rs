//! Rate provider trait, payload, and structured error types.
//!
//! `RateProvider` is the two-operation seam the decorator chain is built
//! on: one concrete source fetches and parses the daily document, format
//! decorators wrap any provider behind the same contract and re-encode the
//! payload in transit.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use super::dataset::RateDataset;

/// What one link of a chain hands back from `fetch`: the parsed document at
/// the base, rendered text once a format decorator has run.
///
/// Serializes untagged — as the inner value — which is what lets an outer
/// decorator re-encode whatever its inner link produced, matched or not.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RatePayload {
    Dataset(RateDataset),
    Text(String),
}

impl RatePayload {
    pub fn as_dataset(&self) -> Option<&RateDataset> {
        match self {
            RatePayload::Dataset(dataset) => Some(dataset),
            RatePayload::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            RatePayload::Dataset(_) => None,
            RatePayload::Text(text) => Some(text),
        }
    }
}

/// Structured error types for fetch and persist operations.
///
/// No failure here is retried or recovered; each one is terminal for the
/// operation that raised it.
#[derive(Debug, Error)]
pub enum RateError {
    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected response format: {0}")]
    Format(String),

    #[error("encoding error: {0}")]
    Encode(String),

    #[error("write failed for {}: {message}", .path.display())]
    Write { path: PathBuf, message: String },
}

/// Two-operation contract shared by the base source and every decorator.
pub trait RateProvider {
    /// Produce the payload for this link of the chain.
    fn fetch(&self) -> Result<RatePayload, RateError>;

    /// Fetch through this link and write the result to `path`, creating or
    /// overwriting the file.
    ///
    /// Returns the path actually written, which may differ from `path` when
    /// a decorator appends its format extension.
    fn persist(&self, path: &Path) -> Result<PathBuf, RateError>;
}

/// UTF-8 write shared by the provider impls.
pub(crate) fn write_text(path: &Path, text: &str) -> Result<(), RateError> {
    fs::write(path, text).map_err(|e| RateError::Write {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Append `extension` only when `path` carries none at all.
pub(crate) fn with_default_extension(path: &Path, extension: &str) -> PathBuf {
    let mut path = path.to_path_buf();
    if path.extension().is_none() {
        path.set_extension(extension);
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_extension_only_fills_a_gap() {
        assert_eq!(
            with_default_extension(Path::new("rates"), "yaml"),
            PathBuf::from("rates.yaml")
        );
        assert_eq!(
            with_default_extension(Path::new("rates.yml"), "yaml"),
            PathBuf::from("rates.yml")
        );
        assert_eq!(
            with_default_extension(Path::new("out/rates.csv"), "csv"),
            PathBuf::from("out/rates.csv")
        );
    }
}
