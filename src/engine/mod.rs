pub mod apply_fields;
pub mod engine;
pub mod field_extractor;
pub mod llm_client;
pub mod prompt_builder;
pub mod protocol;
pub mod response_parser;
pub mod session_store;
