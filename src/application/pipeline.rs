use crate::application::extractor;
use crate::application::formatter;
use crate::application::prompt::compose_prompt;
use crate::domain::error::{ExtractionFailure, SqlChatError};
use crate::domain::model::{AnswerRecord, ExtractedQuery};
use crate::domain::traits::{ModelCaller, QueryStore};
use crate::presentation::messages::Locale;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};

const INVALID_KEY_MARKER: &str = "API_KEY_INVALID";

/// Why a question never reached the store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineFailure {
    #[error(transparent)]
    Extraction(#[from] ExtractionFailure),

    #[error("Error: Gemini API key is invalid.")]
    InvalidApiKey,

    #[error("Error in AI response: {0}")]
    ModelCall(String),
}

impl From<SqlChatError> for PipelineFailure {
    fn from(err: SqlChatError) -> Self {
        let msg = match err {
            SqlChatError::ModelCall(msg) => msg,
            other => other.to_string(),
        };
        if msg.to_uppercase().contains(INVALID_KEY_MARKER) {
            PipelineFailure::InvalidApiKey
        } else {
            PipelineFailure::ModelCall(msg)
        }
    }
}

/// Question in, answer out: prompt, one model call, extract, execute, format.
pub struct TranslationPipeline {
    template: &'static str,
    model: Arc<dyn ModelCaller>,
    store: Arc<dyn QueryStore>,
    locale: Locale,
}

impl TranslationPipeline {
    pub fn new(
        template: &'static str,
        model: Arc<dyn ModelCaller>,
        store: Arc<dyn QueryStore>,
        locale: Locale,
    ) -> Self {
        Self {
            template,
            model,
            store,
            locale,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub async fn answer(&self, question: &str) -> AnswerRecord {
        let query = match self.translate(question).await {
            Ok(query) => query,
            Err(failure) => {
                warn!("Question not translated: {}", failure);
                let text = (self.locale.messages().request_failed)(&failure.to_string());
                return AnswerRecord::new(text, None);
            }
        };

        info!("Executing generated SQL: {}", query);
        let outcome = self.store.execute(&query).await;
        let text = formatter::format(&outcome, query.as_str(), self.locale);

        AnswerRecord::new(text, Some(query))
    }

    async fn translate(&self, question: &str) -> Result<ExtractedQuery, PipelineFailure> {
        let prompt = compose_prompt(self.template, question);
        info!(
            "Sending prompt to model (first 500 chars): {}...",
            prompt.chars().take(500).collect::<String>()
        );

        let response = self.model.generate(&prompt).await.map_err(|e| {
            error!("Model API error: {}", e);
            PipelineFailure::from(e)
        })?;
        info!("Raw response from model: {}", response);

        Ok(extractor::extract(Some(response.as_str()))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_key_is_recognised() {
        let failure = PipelineFailure::from(SqlChatError::ModelCall(
            "400 INVALID_ARGUMENT: API key not valid (api_key_invalid)".to_string(),
        ));
        assert_eq!(failure, PipelineFailure::InvalidApiKey);
    }

    #[test]
    fn test_other_faults_keep_message() {
        let failure = PipelineFailure::from(SqlChatError::ModelCall("429 quota".to_string()));
        assert_eq!(failure.to_string(), "Error in AI response: 429 quota");
    }

    #[test]
    fn test_extraction_reason_is_transparent() {
        let failure = PipelineFailure::from(ExtractionFailure::NoResponse);
        assert_eq!(failure.to_string(), "No response from the model.");
    }
}
