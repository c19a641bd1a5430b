//! Currency-rate acquisition and format pipeline.
//!
//! One concrete source ([`CbrProvider`]) performs the HTTP fetch; format
//! decorators ([`YamlDecorator`], [`CsvDecorator`]) wrap any provider
//! behind the same two-operation contract and re-encode the payload in
//! transit. Decorators nest freely and nesting order decides transform
//! order — including chains whose output is no longer a meaningful rate
//! listing.

pub mod cbr;
pub mod csv;
pub mod dataset;
pub mod provider;
pub mod yaml;

pub use self::cbr::{CbrProvider, DAILY_URL};
pub use self::csv::CsvDecorator;
pub use self::dataset::{RateDataset, RateRecord};
pub use self::provider::{RateError, RatePayload, RateProvider};
pub use self::yaml::YamlDecorator;
