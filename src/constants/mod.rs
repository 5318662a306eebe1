pub mod mime;
pub mod prompts;
