use serde::{Deserialize, Serialize};
use crate::structs::config::ai_config::AiConfig;
use crate::structs::config::analysis_config::AnalysisConfig;
use crate::structs::config::output_config::OutputConfig;

#[derive(Debug, Default, Deserialize, Serialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub ai: AiConfig,

    #[serde(default)]
    pub analysis: AnalysisConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::analysis_facet::AnalysisFacet;

    #[test]
    fn empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.ai.provider, "gemini");
        assert_eq!(config.ai.model, "gemini-2.5-flash");
        assert_eq!(config.ai.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.analysis.facets, AnalysisFacet::ALL.to_vec());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config: Config = toml::from_str(
            r#"
            [ai]
            model = "gemini-2.5-pro"

            [analysis]
            facets = ["errorDetection", "bestPractices"]
            "#,
        ).unwrap();

        assert_eq!(config.ai.model, "gemini-2.5-pro");
        assert_eq!(config.ai.rate_limit_per_minute, 50);
        assert_eq!(
            config.analysis.facets,
            vec![AnalysisFacet::ErrorDetection, AnalysisFacet::BestPractices]
        );
    }
}
