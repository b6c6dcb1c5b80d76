use crate::application::pipeline::TranslationPipeline;
use crate::application::prompt::STUDENT_PROMPT;
use crate::domain::error::SqlChatError;
use crate::infrastructure::config::Config;
use crate::infrastructure::network::gemini::GeminiClient;
use crate::infrastructure::network::http::create_client;
use crate::infrastructure::storage::db::SqliteStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub pipeline: Arc<TranslationPipeline>,
}

impl AppState {
    /// Wire the Gemini client and SQLite store into a pipeline.
    ///
    /// The API key is resolved once here and handed to the client.
    pub fn new(config: Config) -> Result<Self, SqlChatError> {
        let http_client = create_client(config.gemini.timeout_secs)?;
        let model = GeminiClient::new(http_client, &config.gemini, config.resolve_api_key())?;
        let store = SqliteStore::new(config.database_path.clone());

        let pipeline = TranslationPipeline::new(
            STUDENT_PROMPT,
            Arc::new(model),
            Arc::new(store),
            config.locale,
        );

        Ok(Self {
            config: Arc::new(config),
            pipeline: Arc::new(pipeline),
        })
    }
}
