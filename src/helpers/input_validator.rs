use crate::enums::analysis_facet::AnalysisFacet;
use crate::errors::{ForensicError, ForensicResult};
use crate::helpers::text_helper::is_blank;
use crate::structs::source_file::SourceFile;

pub fn ensure_files_present(files: &[SourceFile]) -> ForensicResult<()> {
    if files.is_empty() {
        return Err(ForensicError::validation_error(
            "files",
            "the archive is empty or contains no readable text files",
            Some("Upload a zip archive that contains source files"),
        ));
    }
    Ok(())
}

pub fn ensure_facets_present(facets: &[AnalysisFacet]) -> ForensicResult<()> {
    if facets.is_empty() {
        return Err(ForensicError::validation_error(
            "facets",
            "at least one analysis type must be selected",
            Some("Pass --facet or set analysis.facets in the config"),
        ));
    }
    Ok(())
}

pub fn ensure_not_blank(field: &str, value: &str) -> ForensicResult<()> {
    if is_blank(value) {
        return Err(ForensicError::validation_error(field, "must not be blank", None));
    }
    Ok(())
}
