pub mod history_service;
pub mod model_service;
pub mod page_selector;
pub mod prompt_builder;
pub mod response_parser;
pub mod study_service;
pub mod text_extractor;
