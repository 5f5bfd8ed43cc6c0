pub mod config_helper;
pub mod input_validator;
pub mod prompt_generator;
pub mod text_helper;
