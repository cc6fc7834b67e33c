//! Keyword search over the catalog
//!
//! A query is resolved to a [`SearchPlan`] by walking an ordered rule table.
//! The first rule with a matching keyword decides the scope, and whole
//! categories are returned unfiltered. A query that hits no rule falls back
//! to a substring search over every destination.

use tracing::debug;

use crate::models::{Catalog, DestinationRecord};
use crate::{Result, TravelRecError};

/// Message shown when a search is attempted without a query
pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a search term";

/// A trimmed, lower-cased, non-blank search query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Normalize raw user input, rejecting blank queries
    pub fn parse(raw: &str) -> Result<Self> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(TravelRecError::validation(EMPTY_QUERY_MESSAGE));
        }
        Ok(Self(normalized))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Which part of the catalog a search draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchScope {
    Beaches,
    Temples,
    /// Every city of every country
    Cities,
    /// Beaches, temples and cities
    Everything,
}

/// Whether the scope is returned whole or filtered by the query text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    Unfiltered,
    Substring,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchPlan {
    pub scope: SearchScope,
    pub mode: MatchMode,
}

struct SearchRule {
    keywords: &'static [&'static str],
    scope: SearchScope,
}

// Order matters: "beach temples" is a beach search.
// Country names select all cities, not only the named country's.
const RULES: &[SearchRule] = &[
    SearchRule {
        keywords: &["beach", "beaches"],
        scope: SearchScope::Beaches,
    },
    SearchRule {
        keywords: &["temple", "temples"],
        scope: SearchScope::Temples,
    },
    SearchRule {
        keywords: &["country", "countries", "australia", "japan", "brazil"],
        scope: SearchScope::Cities,
    },
];

impl SearchPlan {
    /// Resolve the plan for a query, first matching rule wins
    #[must_use]
    pub fn for_query(query: &SearchQuery) -> Self {
        let text = query.as_str();
        RULES
            .iter()
            .find(|rule| rule.keywords.iter().any(|keyword| text.contains(keyword)))
            .map_or(
                SearchPlan {
                    scope: SearchScope::Everything,
                    mode: MatchMode::Substring,
                },
                |rule| SearchPlan {
                    scope: rule.scope,
                    mode: MatchMode::Unfiltered,
                },
            )
    }
}

/// Search the catalog, returning records in category then source order
#[must_use]
pub fn search(catalog: &Catalog, query: &SearchQuery) -> Vec<DestinationRecord> {
    let plan = SearchPlan::for_query(query);
    debug!("Search plan for '{}': {:?}", query.as_str(), plan);

    let candidates: Box<dyn Iterator<Item = &DestinationRecord> + '_> = match plan.scope {
        SearchScope::Beaches => Box::new(catalog.beaches.iter()),
        SearchScope::Temples => Box::new(catalog.temples.iter()),
        SearchScope::Cities => Box::new(catalog.cities()),
        SearchScope::Everything => Box::new(catalog.all_destinations()),
    };

    let results: Vec<DestinationRecord> = match plan.mode {
        MatchMode::Unfiltered => candidates.cloned().collect(),
        MatchMode::Substring => candidates
            .filter(|record| record.matches_text(query.as_str()))
            .cloned()
            .collect(),
    };

    debug!("Search for '{}' found {} results", query.as_str(), results.len());
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin;
    use rstest::rstest;

    fn run(raw: &str) -> Vec<DestinationRecord> {
        search(builtin(), &SearchQuery::parse(raw).unwrap())
    }

    fn names(results: &[DestinationRecord]) -> Vec<&str> {
        results.iter().map(|r| r.name.as_str()).collect()
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn test_blank_query_is_rejected(#[case] raw: &str) {
        let err = SearchQuery::parse(raw).unwrap_err();
        assert!(matches!(err, TravelRecError::Validation { .. }));
        assert_eq!(err.user_message(), EMPTY_QUERY_MESSAGE);
    }

    #[test]
    fn test_query_is_trimmed_and_lowercased() {
        let query = SearchQuery::parse("  Sydney Opera  ").unwrap();
        assert_eq!(query.as_str(), "sydney opera");
    }

    #[rstest]
    #[case("beach")]
    #[case("BEACHES")]
    #[case("sunny beach holiday")]
    #[case("beachfront")]
    #[case("beach temple")]
    fn test_beach_queries_return_all_beaches(#[case] raw: &str) {
        let results = run(raw);
        assert_eq!(results, builtin().beaches);
        assert_eq!(results.len(), 2);
    }

    #[rstest]
    #[case("temple")]
    #[case("Temples")]
    #[case("old temples in japan")]
    fn test_temple_queries_return_all_temples(#[case] raw: &str) {
        let results = run(raw);
        assert_eq!(results, builtin().temples);
        assert_eq!(results.len(), 2);
    }

    #[rstest]
    #[case("japan")]
    #[case("australia")]
    #[case("brazil")]
    #[case("country")]
    #[case("Countries")]
    fn test_country_queries_return_every_city(#[case] raw: &str) {
        let results = run(raw);
        assert_eq!(results.len(), 6);
        assert_eq!(
            names(&results),
            vec![
                "Sydney, Australia",
                "Melbourne, Australia",
                "Tokyo, Japan",
                "Kyoto, Japan",
                "Rio de Janeiro, Brazil",
                "São Paulo, Brazil",
            ]
        );
    }

    #[test]
    fn test_substring_fallback_matches_description() {
        let results = run("opera");
        assert_eq!(names(&results), vec!["Sydney, Australia"]);
    }

    #[test]
    fn test_substring_fallback_keeps_category_order() {
        // Copacabana (beach) mentions Rio, Rio de Janeiro is a city
        let results = run("rio de janeiro");
        assert_eq!(names(&results), vec!["Copacabana Beach, Brazil", "Rio de Janeiro, Brazil"]);
    }

    #[test]
    fn test_substring_fallback_spans_temples() {
        let results = run("unesco");
        assert_eq!(names(&results), vec!["Angkor Wat, Cambodia"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        assert!(run("antarctica").is_empty());
    }

    #[rstest]
    #[case("beach", SearchScope::Beaches, MatchMode::Unfiltered)]
    #[case("temple", SearchScope::Temples, MatchMode::Unfiltered)]
    #[case("japan", SearchScope::Cities, MatchMode::Unfiltered)]
    #[case("kyoto", SearchScope::Everything, MatchMode::Substring)]
    fn test_plan_for_query(#[case] raw: &str, #[case] scope: SearchScope, #[case] mode: MatchMode) {
        let plan = SearchPlan::for_query(&SearchQuery::parse(raw).unwrap());
        assert_eq!(plan, SearchPlan { scope, mode });
    }
}
