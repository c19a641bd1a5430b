//! YAML format decorator.

use std::path::{Path, PathBuf};

use super::provider::{with_default_extension, write_text, RateError, RatePayload, RateProvider};

/// Wraps any provider and re-encodes its payload as YAML.
///
/// The inner payload is serialized as-is, whatever its shape: a dataset
/// becomes a block-style document with key order intact, while text from
/// another decorator becomes one big scalar. The latter chain is allowed;
/// it just is not useful.
pub struct YamlDecorator {
    inner: Box<dyn RateProvider>,
}

impl YamlDecorator {
    pub fn new(inner: impl RateProvider + 'static) -> Self {
        Self {
            inner: Box::new(inner),
        }
    }

    fn render(&self) -> Result<String, RateError> {
        let payload = self.inner.fetch()?;
        serde_yaml::to_string(&payload).map_err(|e| RateError::Encode(e.to_string()))
    }
}

impl RateProvider for YamlDecorator {
    fn fetch(&self) -> Result<RatePayload, RateError> {
        Ok(RatePayload::Text(self.render()?))
    }

    fn persist(&self, path: &Path) -> Result<PathBuf, RateError> {
        let path = with_default_extension(path, "yaml");
        write_text(&path, &self.render()?)?;
        Ok(path)
    }
}
