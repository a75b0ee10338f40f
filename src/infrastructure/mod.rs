pub mod config;
pub mod llm;
pub mod news;
pub mod notify;
