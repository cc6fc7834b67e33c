//! Destination model for cities, temples and beaches

use serde::{Deserialize, Serialize};

use crate::TravelRecError;
use crate::time;

/// One travel item with its display metadata
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DestinationRecord {
    /// Identifier within its category (temples and beaches only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    /// Display name, e.g. "Kyoto, Japan"
    pub name: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub description: String,
    /// IANA timezone identifier, empty when no clock should be shown
    #[serde(default)]
    pub time_zone: String,
}

impl DestinationRecord {
    /// Create a new destination without an id
    #[must_use]
    pub fn new(name: &str, image_url: &str, description: &str, time_zone: &str) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            image_url: image_url.to_string(),
            description: description.to_string(),
            time_zone: time_zone.to_string(),
        }
    }

    /// Attach a category id
    #[must_use]
    pub fn with_id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    /// Case-insensitive substring match on name or description.
    ///
    /// `needle` must already be lower-cased.
    #[must_use]
    pub fn matches_text(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.description.to_lowercase().contains(needle)
    }

    pub fn has_time_zone(&self) -> bool {
        !self.time_zone.is_empty()
    }

    /// Check the record invariants: non-empty name, known timezone if set
    pub fn validate(&self) -> crate::Result<()> {
        if self.name.trim().is_empty() {
            return Err(TravelRecError::validation("Destination name cannot be empty"));
        }
        if self.has_time_zone() {
            time::resolve_zone(&self.time_zone)?;
        }
        Ok(())
    }
}
