pub mod http_helpers;
pub mod json_extractor;
pub mod model_service;
pub mod prompt_chain;
pub mod quiz_service;
pub mod quiz_table;
pub mod text_extractor;
