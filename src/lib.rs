//! `TravelRec` - travel destination recommendations
//!
//! This library holds the destination catalog, the keyword search over it,
//! rendering of results with live local clocks, and contact form validation.

pub mod api;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod error;
pub mod loader;
pub mod logging;
pub mod models;
pub mod render;
pub mod search;
pub mod terminal;
pub mod time;
pub mod web;

// Re-export core types for public API
pub use crate::config::TravelRecConfig;
pub use contact::{ContactForm, ValidationOutcome};
pub use error::TravelRecError;
pub use loader::{CatalogLoader, CatalogSource};
pub use models::{Catalog, CountryGroup, DestinationRecord, DisplayRecord};
pub use render::{PresentationSink, RenderOutcome, ResultRenderer};
pub use search::{SearchPlan, SearchQuery, search};
pub use terminal::TerminalSink;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TravelRecError>;
