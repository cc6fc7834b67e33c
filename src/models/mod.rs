//! Data models for the TravelRec application
//!
//! - Destination: a single city, temple or beach
//! - Catalog: the grouped set of all destinations
//! - Display: a destination prepared for presentation

pub mod catalog;
pub mod destination;
pub mod display;

// Re-export all public types for convenient access
pub use catalog::{Catalog, CountryGroup};
pub use destination::DestinationRecord;
pub use display::DisplayRecord;
