pub mod parser;
pub mod pipeline;
pub mod prompt;
pub mod selector;
