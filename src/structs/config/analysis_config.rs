use serde::{Deserialize, Serialize};
use crate::enums::analysis_facet::AnalysisFacet;
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AnalysisConfig {
    #[serde(default = "ConfigHelper::default_facets")]
    pub facets: Vec<AnalysisFacet>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            facets: ConfigHelper::default_facets(),
        }
    }
}
