//! Catalog loading from an optional external JSON source
//!
//! A source is an `http(s)://` URL or a local file path holding a document
//! shaped like [`Catalog`]. Whatever goes wrong while loading it, the
//! built-in catalog is used instead.

use std::path::PathBuf;
use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info, warn};

use crate::config::DataSourceConfig;
use crate::models::Catalog;
use crate::{Result, TravelRecError, catalog};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Url(String),
    File(PathBuf),
}

impl CatalogSource {
    #[must_use]
    pub fn parse(source: &str) -> Self {
        let source = source.trim();
        if source.starts_with("http://") || source.starts_with("https://") {
            CatalogSource::Url(source.to_string())
        } else {
            CatalogSource::File(PathBuf::from(source))
        }
    }
}

pub struct CatalogLoader {
    source: Option<CatalogSource>,
    timeout: Duration,
}

impl CatalogLoader {
    #[must_use]
    pub fn new(source: CatalogSource, timeout: Duration) -> Self {
        Self {
            source: Some(source),
            timeout,
        }
    }

    #[must_use]
    pub fn from_config(config: &DataSourceConfig) -> Self {
        Self {
            source: config.source.as_deref().map(CatalogSource::parse),
            timeout: Duration::from_secs(config.timeout_seconds.into()),
        }
    }

    /// Load the configured catalog, falling back to the built-in one
    pub async fn load(&self) -> Catalog {
        let Some(source) = &self.source else {
            debug!("No catalog source configured, using built-in catalog");
            return catalog::builtin().clone();
        };

        match self.try_load(source).await {
            Ok(catalog) => {
                info!("Travel data loaded from {:?}: {} destinations", source, catalog.len());
                catalog
            }
            Err(e) => {
                warn!("Using built-in catalog instead: {}", e);
                catalog::builtin().clone()
            }
        }
    }

    async fn try_load(&self, source: &CatalogSource) -> Result<Catalog> {
        let catalog: Catalog = match source {
            CatalogSource::Url(url) => self.fetch(url).await?,
            CatalogSource::File(path) => {
                let text = tokio::fs::read_to_string(path).await?;
                serde_json::from_str(&text)?
            }
        };
        catalog.validate().map_err(|e| {
            TravelRecError::data_source(format!("catalog failed validation: {e}"))
        })?;
        Ok(catalog)
    }

    async fn fetch(&self, url: &str) -> Result<Catalog> {
        debug!("Fetching travel data from {}", url);
        let client = Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("TravelRec/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let response = client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(TravelRecError::data_source(format!(
                "Failed to fetch data: HTTP {}",
                response.status()
            )));
        }
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("travelrec-{}-{}", std::process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_source_parsing() {
        assert_eq!(
            CatalogSource::parse("https://example.com/travel.json"),
            CatalogSource::Url("https://example.com/travel.json".to_string())
        );
        assert_eq!(
            CatalogSource::parse(" data/travel.json "),
            CatalogSource::File(PathBuf::from("data/travel.json"))
        );
    }

    #[tokio::test]
    async fn test_no_source_is_builtin() {
        let catalog = CatalogLoader::from_config(&DataSourceConfig::default()).load().await;
        assert_eq!(&catalog, catalog::builtin());
    }

    #[tokio::test]
    async fn test_loads_catalog_from_file() {
        let path = temp_file(
            "ok.json",
            r#"{
                "countries": [],
                "temples": [],
                "beaches": [
                    {"id": 1, "name": "Whitehaven Beach", "imageUrl": "", "description": "Silica sand", "timeZone": "Australia/Brisbane"}
                ]
            }"#,
        );
        let catalog = CatalogLoader::new(CatalogSource::File(path.clone()), Duration::from_secs(1))
            .load()
            .await;
        fs::remove_file(&path).unwrap();

        assert_eq!(catalog.beaches.len(), 1);
        assert_eq!(catalog.beaches[0].name, "Whitehaven Beach");
        assert_eq!(catalog.beaches[0].id, Some(1));
    }

    #[tokio::test]
    async fn test_missing_file_falls_back() {
        let loader = CatalogLoader::new(
            CatalogSource::File(PathBuf::from("/definitely/not/here/travel.json")),
            Duration::from_secs(1),
        );
        assert_eq!(&loader.load().await, catalog::builtin());
    }

    #[tokio::test]
    async fn test_malformed_file_falls_back() {
        let path = temp_file("bad.json", "{ not json");
        let catalog = CatalogLoader::new(CatalogSource::File(path.clone()), Duration::from_secs(1))
            .load()
            .await;
        fs::remove_file(&path).unwrap();
        assert_eq!(&catalog, catalog::builtin());
    }

    #[tokio::test]
    async fn test_invalid_zone_falls_back() {
        let path = temp_file(
            "zone.json",
            r#"{"beaches": [{"name": "Nowhere", "timeZone": "Not/AZone"}]}"#,
        );
        let catalog = CatalogLoader::new(CatalogSource::File(path.clone()), Duration::from_secs(1))
            .load()
            .await;
        fs::remove_file(&path).unwrap();
        assert_eq!(&catalog, catalog::builtin());
    }

    #[tokio::test]
    async fn test_lowercase_zone_is_loaded() {
        let path = temp_file(
            "lowercase.json",
            r#"{"temples": [{"id": 1, "name": "Kinkaku-ji, Japan", "timeZone": "asia/tokyo"}]}"#,
        );
        let catalog = CatalogLoader::new(CatalogSource::File(path.clone()), Duration::from_secs(1))
            .load()
            .await;
        fs::remove_file(&path).unwrap();

        assert_eq!(catalog.temples.len(), 1);
        assert_eq!(catalog.temples[0].name, "Kinkaku-ji, Japan");
        assert!(catalog.beaches.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_url_falls_back() {
        let loader = CatalogLoader::new(
            CatalogSource::Url("http://127.0.0.1:9/travel.json".to_string()),
            Duration::from_secs(2),
        );
        assert_eq!(&loader.load().await, catalog::builtin());
    }
}
