//! Climber dataset and the lookup of the climber to display.

use indexmap::IndexMap;
use log::{debug, warn};
use rand::Rng;
use serde::Deserialize;

/// Link and description of a climber, supplied by the hosting page as
/// `[href, descriptionHtml]`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ClimberRecord {
    pub href: String,
    /// Trusted HTML, inserted into the page as is.
    #[serde(default)]
    pub description_html: String,
}

impl ClimberRecord {
    pub fn new(href: impl Into<String>, description_html: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            description_html: description_html.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("the hosting page does not define `{0}`")]
    Missing(&'static str),
    #[error("cannot convert `{global}` to JSON: {reason}")]
    NotSerializable {
        global: &'static str,
        reason: String,
    },
    #[error("malformed climber dataset: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("climber dataset is empty")]
    Empty,
}

/// Climbers keyed by their lowercase name, in the order the hosting page
/// listed them. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClimberDataset {
    records: IndexMap<String, ClimberRecord>,
}

impl ClimberDataset {
    /// Normalizes the supplied keys to lowercase. When two keys only differ in
    /// case, the first one wins.
    pub fn new(
        supplied: impl IntoIterator<Item = (String, ClimberRecord)>,
    ) -> Result<Self, DatasetError> {
        let mut records = IndexMap::new();
        for (key, record) in supplied {
            let normalized = key.to_lowercase();
            if records.contains_key(&normalized) {
                warn!("Ignoring climber `{key}`, `{normalized}` is already defined");
                continue;
            }
            records.insert(normalized, record);
        }
        if records.is_empty() {
            return Err(DatasetError::Empty);
        }
        Ok(Self { records })
    }

    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let supplied: IndexMap<String, ClimberRecord> = serde_json::from_str(json)?;
        Self::new(supplied)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// Looks up a climber, ignoring case.
    pub fn get(&self, key: &str) -> Option<&ClimberRecord> {
        self.records.get(&key.to_lowercase())
    }

    /// Returns the canonical key of the requested climber, or a uniformly
    /// random key when nothing (or an unknown climber) was requested.
    pub fn resolve<R: Rng + ?Sized>(&self, requested: Option<&str>, rng: &mut R) -> &str {
        if let Some(requested) = requested.filter(|key| !key.is_empty()) {
            let normalized = requested.to_lowercase();
            if let Some((key, _)) = self.records.get_key_value(&normalized) {
                return key;
            }
            debug!("Unknown climber `{requested}`, picking a random one");
        }
        self.random_key(rng)
    }

    pub fn random_key<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        let idx = rng.gen_range(0..self.records.len());
        self.records
            .get_index(idx)
            .map(|(key, _)| key.as_str())
            .expect("dataset is never empty")
    }
}
