use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use crate::helpers::text_helper::camel_case_to_title;

/// One selectable category of requested analysis.
///
/// Declaration order is the canonical order used for schemas and prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum AnalysisFacet {
    ErrorDetection,
    PerformanceSuggestions,
    BestPractices,
    CodeStructureReview,
}

impl AnalysisFacet {
    pub const ALL: [AnalysisFacet; 4] = [
        AnalysisFacet::ErrorDetection,
        AnalysisFacet::PerformanceSuggestions,
        AnalysisFacet::BestPractices,
        AnalysisFacet::CodeStructureReview,
    ];

    /// Field name of this facet in the structured response.
    pub fn key(&self) -> &'static str {
        match self {
            Self::ErrorDetection => "errorDetection",
            Self::PerformanceSuggestions => "performanceSuggestions",
            Self::BestPractices => "bestPractices",
            Self::CodeStructureReview => "codeStructureReview",
        }
    }

    /// Human readable label, e.g. "Error Detection".
    pub fn label(&self) -> String {
        camel_case_to_title(self.key())
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|facet| facet.key() == key)
    }

    /// De-duplicates and sorts into canonical order.
    pub fn canonicalize(facets: &[AnalysisFacet]) -> Vec<AnalysisFacet> {
        let mut facets = facets.to_vec();
        facets.sort();
        facets.dedup();
        facets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_title_cased() {
        assert_eq!(AnalysisFacet::ErrorDetection.label(), "Error Detection");
        assert_eq!(AnalysisFacet::CodeStructureReview.label(), "Code Structure Review");
    }

    #[test]
    fn from_key_round_trips_known_keys() {
        for facet in AnalysisFacet::ALL {
            assert_eq!(AnalysisFacet::from_key(facet.key()), Some(facet));
        }
        assert_eq!(AnalysisFacet::from_key("securityAudit"), None);
    }

    #[test]
    fn canonicalize_orders_and_dedups() {
        let facets = [
            AnalysisFacet::BestPractices,
            AnalysisFacet::ErrorDetection,
            AnalysisFacet::BestPractices,
        ];
        assert_eq!(
            AnalysisFacet::canonicalize(&facets),
            vec![AnalysisFacet::ErrorDetection, AnalysisFacet::BestPractices]
        );
    }
}
