pub mod normalizer;
pub mod schema_builder;
pub mod code_analyzer;
pub mod code_fixer;
pub mod conversation;
pub mod archive_service;
pub mod rate_limiter;
pub mod ai_providers;
