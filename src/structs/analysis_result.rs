use serde::{Deserialize, Serialize};
use crate::enums::analysis_facet::AnalysisFacet;
use crate::structs::best_practice::BestPractice;
use crate::structs::detected_error::DetectedError;
use crate::structs::performance_suggestion::PerformanceSuggestion;

/// Structured findings of one analysis call.
///
/// A `None` facet field means the facet was not analyzed, which is not the
/// same as an empty list of findings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub overall_summary: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_structure_review: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_detection: Option<Vec<DetectedError>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance_suggestions: Option<Vec<PerformanceSuggestion>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_practices: Option<Vec<BestPractice>>,
}

impl AnalysisResult {
    pub fn is_analyzed(&self, facet: AnalysisFacet) -> bool {
        match facet {
            AnalysisFacet::ErrorDetection => self.error_detection.is_some(),
            AnalysisFacet::PerformanceSuggestions => self.performance_suggestions.is_some(),
            AnalysisFacet::BestPractices => self.best_practices.is_some(),
            AnalysisFacet::CodeStructureReview => self.code_structure_review.is_some(),
        }
    }

    /// Drops facet fields outside `facets`.
    pub fn retain_facets(mut self, facets: &[AnalysisFacet]) -> Self {
        if !facets.contains(&AnalysisFacet::ErrorDetection) {
            self.error_detection = None;
        }
        if !facets.contains(&AnalysisFacet::PerformanceSuggestions) {
            self.performance_suggestions = None;
        }
        if !facets.contains(&AnalysisFacet::BestPractices) {
            self.best_practices = None;
        }
        if !facets.contains(&AnalysisFacet::CodeStructureReview) {
            self.code_structure_review = None;
        }
        self
    }

    pub fn finding_count(&self) -> usize {
        self.error_detection.as_ref().map_or(0, Vec::len)
            + self.performance_suggestions.as_ref().map_or(0, Vec::len)
            + self.best_practices.as_ref().map_or(0, Vec::len)
    }
}
