use serde::Deserialize;
use crate::structs::fixed_file_candidate::FixedFileCandidate;

#[derive(Debug, Deserialize)]
pub struct FixResponse {
    pub files: Vec<FixedFileCandidate>,
}
