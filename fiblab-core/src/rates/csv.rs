//! CSV format decorator.
//!
//! Flattens only the currency mapping into `CharCode,Name,Value,Nominal`
//! rows, one per currency in document order. Everything else — dates,
//! service fields — is dropped. A payload with no currency records renders
//! as the empty string rather than an error.

use std::path::{Path, PathBuf};

use csv::Writer;
use serde::Serialize;

use super::dataset::RateDataset;
use super::provider::{with_default_extension, write_text, RateError, RatePayload, RateProvider};

/// One output row, fields in header order.
#[derive(Debug, Serialize)]
struct Row<'a> {
    #[serde(rename = "CharCode")]
    char_code: &'a str,
    #[serde(rename = "Name")]
    name: &'a str,
    #[serde(rename = "Value")]
    value: f64,
    #[serde(rename = "Nominal")]
    nominal: u64,
}

/// Wraps any provider and renders its currency records as CSV text.
pub struct CsvDecorator {
    inner: Box<dyn RateProvider>,
}

impl CsvDecorator {
    pub fn new(inner: impl RateProvider + 'static) -> Self {
        Self {
            inner: Box::new(inner),
        }
    }

    fn render(&self) -> Result<String, RateError> {
        match self.inner.fetch()? {
            RatePayload::Dataset(dataset) => render_rows(&dataset),
            // Text from another decorator carries no record mapping to
            // flatten; the empty document is the accepted outcome.
            RatePayload::Text(_) => Ok(String::new()),
        }
    }
}

fn render_rows(dataset: &RateDataset) -> Result<String, RateError> {
    if dataset.valute.is_empty() {
        return Ok(String::new());
    }

    let mut writer = Writer::from_writer(Vec::new());
    for (code, record) in &dataset.valute {
        // Records missing their own CharCode fall back to the map key.
        let char_code = if record.char_code.is_empty() {
            code.as_str()
        } else {
            record.char_code.as_str()
        };
        writer
            .serialize(Row {
                char_code,
                name: &record.name,
                value: record.value,
                nominal: record.nominal,
            })
            .map_err(|e| RateError::Encode(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| RateError::Encode(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| RateError::Encode(e.to_string()))
}

impl RateProvider for CsvDecorator {
    fn fetch(&self) -> Result<RatePayload, RateError> {
        Ok(RatePayload::Text(self.render()?))
    }

    fn persist(&self, path: &Path) -> Result<PathBuf, RateError> {
        let path = with_default_extension(path, "csv");
        // fs::write performs no newline translation; rows keep their `\n`
        // terminators on every platform.
        write_text(&path, &self.render()?)?;
        Ok(path)
    }
}
