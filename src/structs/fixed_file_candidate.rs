use serde::Deserialize;

/// A file body as claimed by the model. Only consumed by fix validation.
#[derive(Debug, Clone, Deserialize)]
pub struct FixedFileCandidate {
    pub name: String,
    pub content: String,
}
