use crate::structs::source_file::SourceFile;

/// Outcome of filtering the model's proposed files against the originals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FixValidation {
    pub changed_files: Vec<SourceFile>,
    pub processed: usize,
    pub skipped: usize,
}

impl FixValidation {
    pub fn changed_count(&self) -> usize {
        self.changed_files.len()
    }
}
