use std::sync::Arc;
use crate::enums::analysis_facet::AnalysisFacet;
use crate::errors::{ForensicError, ForensicResult, Operation};
use crate::helpers::input_validator::{ensure_facets_present, ensure_files_present};
use crate::helpers::prompt_generator;
use crate::services::schema_builder::analysis_schema;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::source_file::SourceFile;
use crate::traits::ai_provider::AiProvider;

pub struct CodeAnalyzer {
    ai_provider: Arc<dyn AiProvider>,
}

impl CodeAnalyzer {
    pub fn new(ai_provider: Arc<dyn AiProvider>) -> Self {
        Self { ai_provider }
    }

    /// Runs one structured forensic review of `files` limited to `facets`.
    ///
    /// Fails with a validation error before any model call when `files` or
    /// `facets` is empty. No retries.
    pub async fn analyze(
        &self,
        files: &[SourceFile],
        issue_description: &str,
        facets: &[AnalysisFacet],
    ) -> ForensicResult<AnalysisResult> {
        ensure_files_present(files)?;
        ensure_facets_present(facets)?;

        let facets = AnalysisFacet::canonicalize(facets);
        let schema = analysis_schema(&facets);
        let prompt = prompt_generator::generate_analysis_prompt(files, issue_description, &facets);

        log::info!(
            "🔍 Requesting analysis of {} files ({})",
            files.len(),
            facets.iter().map(AnalysisFacet::key).collect::<Vec<_>>().join(", ")
        );

        let response_text = self
            .ai_provider
            .generate_structured(prompt, &schema)
            .await
            .map_err(|e| ForensicError::from_provider(Operation::Analysis, e))?;

        let result = parse_analysis_response(&response_text, &facets)?;
        log::info!("✅ Analysis complete with {} findings", result.finding_count());
        Ok(result)
    }
}

/// Strict parse of the model's JSON text into a report holding exactly the
/// requested facets.
pub fn parse_analysis_response(response_text: &str, facets: &[AnalysisFacet]) -> ForensicResult<AnalysisResult> {
    let json_text = response_text.trim();
    if json_text.is_empty() {
        log::error!("Analysis response was empty");
        return Err(ForensicError::model_response_error(Operation::Analysis, "empty response"));
    }

    let result: AnalysisResult = serde_json::from_str(json_text).map_err(|e| {
        log::error!("Failed to parse analysis response: {}", e);
        ForensicError::model_response_error(Operation::Analysis, "response did not match the analysis schema")
    })?;

    if let Some(missing) = facets.iter().find(|facet| !result.is_analyzed(**facet)) {
        log::error!("Analysis response is missing required field '{}'", missing.key());
        return Err(ForensicError::model_response_error(
            Operation::Analysis,
            "response is missing a requested analysis field",
        ));
    }

    Ok(result.retain_facets(facets))
}
