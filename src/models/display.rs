use serde::{Deserialize, Serialize};

use super::DestinationRecord;

/// A destination augmented with its current local time
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRecord {
    #[serde(flatten)]
    pub destination: DestinationRecord,
    /// Empty when the destination has no timezone
    pub current_time: String,
}

impl DisplayRecord {
    pub fn has_clock(&self) -> bool {
        !self.current_time.is_empty()
    }
}
