//! Parsed shape of one daily rate document.

use chrono::{DateTime, FixedOffset};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One currency entry from the `Valute` mapping.
///
/// Only the four fields the transforms read are typed; service fields
/// (`ID`, `NumCode`, `Previous`, …) ride along in `extra` so re-encoding
/// the dataset keeps the full record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateRecord {
    #[serde(rename = "CharCode", default)]
    pub char_code: String,
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Value", default)]
    pub value: f64,
    #[serde(rename = "Nominal", default = "nominal_one")]
    pub nominal: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn nominal_one() -> u64 {
    1
}

/// The payload of one API call: currency records keyed by code, plus
/// document metadata the transforms never touch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RateDataset {
    #[serde(rename = "Date", default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<FixedOffset>>,
    #[serde(
        rename = "PreviousDate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub previous_date: Option<DateTime<FixedOffset>>,
    #[serde(rename = "Valute", default, skip_serializing_if = "IndexMap::is_empty")]
    pub valute: IndexMap<String, RateRecord>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
