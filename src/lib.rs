pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod presentation;
pub mod state;

pub use application::pipeline::TranslationPipeline;
pub use domain::model::{AnswerRecord, ExecutionOutcome, ExtractedQuery};
