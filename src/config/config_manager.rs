use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::errors::{ForensicError, ForensicResult};
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {

    pub fn config_path() -> ForensicResult<PathBuf> {
        dirs::home_dir()
            .map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| ForensicError::config_error("could not determine home directory", None, None))
    }

    pub fn load() -> ForensicResult<Config> {
        Self::load_from(&Self::config_path()?)
    }

    /// Missing file means defaults.
    pub fn load_from(path: &Path) -> ForensicResult<Config> {
        if path.exists() {
            log::info!("📋 Loading config from: {}", path.display());
            let content = fs::read_to_string(path)
                .map_err(|e| ForensicError::file_error(&path.display().to_string(), "read config", &e.to_string()))?;
            let config: Config = toml::from_str(&content)?;
            return Ok(config);
        }

        log::debug!("No config at {}, using defaults", path.display());
        Ok(Config::default())
    }

    pub fn create_sample_config() -> ForensicResult<PathBuf> {
        let config_file_path = Self::config_path()?;
        Self::write_sample_config(&config_file_path)?;
        Ok(config_file_path)
    }

    pub fn write_sample_config(config_file_path: &Path) -> ForensicResult<()> {
        let sample_config = r#"# Code Forensics Configuration

# AI Configuration
[ai]
provider = "gemini"
model = "gemini-2.5-flash"
# Name of the environment variable holding the API key
api_key_env = "GEMINI_API_KEY"
max_output_tokens = 65536
# temperature = 0.2

# Rate limiting for model requests
rate_limit_per_minute = 50
rate_limit_per_second = 5

# Default facets when none are passed on the command line
[analysis]
facets = ["errorDetection", "performanceSuggestions", "bestPractices", "codeStructureReview"]

# Output Configuration
[output]
# Directory fixed archives are written to
output_dir = "."
"#;
        if config_file_path.exists() {
            return Err(ForensicError::config_error(
                &format!("config file already exists at {}", config_file_path.display()),
                None,
                Some("Edit the existing file or remove it first"),
            ));
        }

        if let Some(parent) = config_file_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ForensicError::file_error(&parent.display().to_string(), "create directory", &e.to_string()))?;
        }
        fs::write(config_file_path, sample_config)
            .map_err(|e| ForensicError::file_error(&config_file_path.display().to_string(), "write config", &e.to_string()))?;
        log::info!("✅ Created sample config at: {}", config_file_path.display());
        Ok(())
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if config.ai.provider != "gemini" {
            errors.push(format!("Unsupported AI provider '{}', only 'gemini' is available", config.ai.provider));
        }

        if config.ai.model.trim().is_empty() {
            errors.push("AI model name is empty".to_string());
        }

        if config.ai.api_key_env.trim().is_empty() {
            errors.push("ai.api_key_env is empty".to_string());
        }

        if config.ai.rate_limit_per_minute == 0 || config.ai.rate_limit_per_second == 0 {
            errors.push("Rate limits must be greater than zero".to_string());
        }

        if config.analysis.facets.is_empty() {
            errors.push("analysis.facets must name at least one facet".to_string());
        }

        if let Some(temperature) = config.ai.temperature {
            if !(0.0..=2.0).contains(&temperature) {
                errors.push(format!("ai.temperature {} is outside 0.0..=2.0", temperature));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Reads the API key from the environment variable named in the config.
    pub fn resolve_api_key(config: &Config) -> ForensicResult<String> {
        let env_name = config.ai.api_key_env.as_str();
        match std::env::var(env_name) {
            Ok(key) if !key.trim().is_empty() => Ok(key.trim().to_string()),
            _ => Err(ForensicError::config_error(
                &format!("{} environment variable not set", env_name),
                Some("ai.api_key_env"),
                Some(&format!("export {}=<your key>", env_name)),
            )),
        }
    }
}
