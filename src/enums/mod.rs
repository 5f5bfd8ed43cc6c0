pub mod analysis_facet;
pub mod severity;
pub mod chat_role;
pub mod commands;
pub mod ai_provider_error;
