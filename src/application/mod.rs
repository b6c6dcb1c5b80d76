pub mod extractor;
pub mod formatter;
pub mod pipeline;
pub mod prompt;
