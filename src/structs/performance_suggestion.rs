use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSuggestion {
    pub file: String,
    pub suggestion: String,
    pub rationale: String,
}
