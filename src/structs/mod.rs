pub mod source_file;
pub mod analysis_result;
pub mod detected_error;
pub mod performance_suggestion;
pub mod best_practice;
pub mod chat_message;
pub mod chat_transcript;
pub mod fixed_file_candidate;
pub mod fix_response;
pub mod fix_validation;
pub mod stream_item;
pub mod archive_blob;
pub mod schema_node;
pub mod cli;
pub mod config;
pub mod ai;
