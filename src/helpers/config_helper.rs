use std::path::PathBuf;
use crate::enums::analysis_facet::AnalysisFacet;
use crate::config::constants::{DEFAULT_API_KEY_ENV, DEFAULT_GEMINI_BASE_URL, DEFAULT_MODEL};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_provider() -> String {
        "gemini".to_string()
    }

    pub fn default_model() -> String {
        DEFAULT_MODEL.to_string()
    }

    pub fn default_api_key_env() -> String {
        DEFAULT_API_KEY_ENV.to_string()
    }

    pub fn default_base_url() -> String {
        DEFAULT_GEMINI_BASE_URL.to_string()
    }

    pub fn default_max_output_tokens() -> u32 {
        65536
    }

    pub fn default_rate_limit_per_minute() -> u32 {
        50
    }

    pub fn default_rate_limit_per_second() -> u32 {
        5
    }

    pub fn default_facets() -> Vec<AnalysisFacet> {
        AnalysisFacet::ALL.to_vec()
    }

    pub fn default_output_dir() -> PathBuf {
        PathBuf::from(".")
    }
}
