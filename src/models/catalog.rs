//! Catalog model grouping destinations by category

use serde::{Deserialize, Serialize};

use super::DestinationRecord;

/// A country and the cities it owns
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CountryGroup {
    pub id: u32,
    pub name: String,
    pub cities: Vec<DestinationRecord>,
}

/// All destinations known to the application.
///
/// The JSON shape of this type is also the shape of an external catalog
/// document.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    #[serde(default)]
    pub countries: Vec<CountryGroup>,
    #[serde(default)]
    pub temples: Vec<DestinationRecord>,
    #[serde(default)]
    pub beaches: Vec<DestinationRecord>,
}

impl Catalog {
    /// All cities of all countries, in country order
    pub fn cities(&self) -> impl Iterator<Item = &DestinationRecord> {
        self.countries.iter().flat_map(|country| country.cities.iter())
    }

    /// Beaches, then temples, then cities
    pub fn all_destinations(&self) -> impl Iterator<Item = &DestinationRecord> {
        self.beaches.iter().chain(self.temples.iter()).chain(self.cities())
    }

    /// Total number of destination records
    #[must_use]
    pub fn len(&self) -> usize {
        self.beaches.len() + self.temples.len() + self.cities().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Validate every record, failing on the first broken one
    pub fn validate(&self) -> crate::Result<()> {
        for record in self.all_destinations() {
            record.validate()?;
        }
        Ok(())
    }
}
