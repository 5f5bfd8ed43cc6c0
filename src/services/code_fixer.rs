use std::collections::HashMap;
use std::sync::Arc;
use crate::errors::{ForensicError, ForensicResult, Operation};
use crate::helpers::input_validator::ensure_files_present;
use crate::helpers::prompt_generator;
use crate::services::normalizer::is_substantively_different;
use crate::services::schema_builder::fix_schema;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::fix_response::FixResponse;
use crate::structs::fix_validation::FixValidation;
use crate::structs::fixed_file_candidate::FixedFileCandidate;
use crate::structs::source_file::SourceFile;
use crate::traits::ai_provider::AiProvider;

pub struct CodeFixer {
    ai_provider: Arc<dyn AiProvider>,
}

impl CodeFixer {
    pub fn new(ai_provider: Arc<dyn AiProvider>) -> Self {
        Self { ai_provider }
    }

    /// Asks the model to apply `report` and returns only the files that
    /// substantively changed, with the model's content verbatim.
    pub async fn generate_fixes(&self, files: &[SourceFile], report: &AnalysisResult) -> ForensicResult<Vec<SourceFile>> {
        Ok(self.generate_fixes_with_summary(files, report).await?.changed_files)
    }

    pub async fn generate_fixes_with_summary(
        &self,
        files: &[SourceFile],
        report: &AnalysisResult,
    ) -> ForensicResult<FixValidation> {
        ensure_files_present(files)?;

        let report_json = serde_json::to_string_pretty(report)
            .map_err(|e| ForensicError::validation_error("report", &format!("cannot be serialized: {}", e), None))?;
        let prompt = prompt_generator::generate_fix_prompt(files, &report_json);

        log::info!("🛠️ Requesting fixes for {} files", files.len());

        let response_text = self
            .ai_provider
            .generate_structured(prompt, &fix_schema())
            .await
            .map_err(|e| ForensicError::from_provider(Operation::FixGeneration, e))?;

        let candidates = parse_fix_response(&response_text)?;
        log::info!("[CodeFixer] AI returned {} potentially modified files for validation.", candidates.len());

        Ok(validate_candidates(files, candidates))
    }
}

pub fn parse_fix_response(response_text: &str) -> ForensicResult<Vec<FixedFileCandidate>> {
    let json_text = response_text.trim();
    if json_text.is_empty() {
        log::error!("Fix response was empty");
        return Err(ForensicError::model_response_error(Operation::FixGeneration, "empty response"));
    }

    let response: FixResponse = serde_json::from_str(json_text).map_err(|e| {
        log::error!("Failed to parse fix response: {}", e);
        ForensicError::model_response_error(Operation::FixGeneration, "response did not match the fix schema")
    })?;

    Ok(response.files)
}

/// Keeps candidates that name an original file and differ from it after
/// normalization. Everything else is skipped, which is not an error.
pub fn validate_candidates(originals: &[SourceFile], candidates: Vec<FixedFileCandidate>) -> FixValidation {
    let original_contents: HashMap<&str, &str> = originals
        .iter()
        .map(|file| (file.name.as_str(), file.content.as_str()))
        .collect();

    let mut validation = FixValidation {
        processed: candidates.len(),
        ..FixValidation::default()
    };

    for candidate in candidates {
        let Some(original_content) = original_contents.get(candidate.name.as_str()) else {
            log::warn!(
                "[CodeFixer] AI generated a new file '{}' which was not in the original project. Skipping.",
                candidate.name
            );
            validation.skipped += 1;
            continue;
        };

        if is_substantively_different(original_content, &candidate.content) {
            log::info!("[CodeFixer] Substantive changes detected for {}. Including in result.", candidate.name);
            validation.changed_files.push(SourceFile::new(candidate.name, candidate.content));
        } else {
            let reason = if *original_content == candidate.content {
                "content is identical"
            } else {
                "only formatting changes were detected"
            };
            log::info!("[CodeFixer] No substantive changes for {} ({}). Skipping.", candidate.name, reason);
            validation.skipped += 1;
        }
    }

    log::info!(
        "[CodeFixer] Validation Summary -> Total Processed: {}, Files Changed: {}, Files Skipped: {}",
        validation.processed,
        validation.changed_count(),
        validation.skipped
    );

    validation
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, content: &str) -> FixedFileCandidate {
        FixedFileCandidate {
            name: name.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn discards_identical_unknown_and_whitespace_only() {
        let originals = vec![SourceFile::new("a.txt", "x")];
        let candidates = vec![candidate("a.txt", "x"), candidate("b.txt", "y"), candidate("a.txt", " x ")];

        let validation = validate_candidates(&originals, candidates);

        assert!(validation.changed_files.is_empty());
        assert_eq!(validation.processed, 3);
        assert_eq!(validation.skipped, 3);
    }

    #[test]
    fn keeps_substantive_change_verbatim() {
        let originals = vec![SourceFile::new("a.txt", "foo()")];
        let validation = validate_candidates(&originals, vec![candidate("a.txt", "  foo();\r\n\r\n")]);

        assert_eq!(validation.changed_files, vec![SourceFile::new("a.txt", "  foo();\r\n\r\n")]);
        assert_eq!(validation.skipped, 0);
    }

    #[test]
    fn preserves_model_response_order() {
        let originals = vec![SourceFile::new("a.rs", "1"), SourceFile::new("b.rs", "2")];
        let validation = validate_candidates(&originals, vec![candidate("b.rs", "20"), candidate("a.rs", "10")]);

        let names: Vec<&str> = validation.changed_files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["b.rs", "a.rs"]);
    }

    #[test]
    fn parse_requires_files_array() {
        assert!(parse_fix_response(r#"{"files": []}"#).unwrap().is_empty());
        assert!(parse_fix_response(r#"{"changes": []}"#).is_err());
        assert!(parse_fix_response("").is_err());
        assert!(parse_fix_response(r#"{"files": [{"name": "a"}]}"#).is_err());
    }
}
