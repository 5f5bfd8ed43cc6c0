mod common;

mod archive_tests;
mod conversation_tests;
mod normalizer_tests;
