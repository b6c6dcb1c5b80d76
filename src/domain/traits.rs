use crate::domain::error::SqlChatError;
use crate::domain::model::{ExecutionOutcome, ExtractedQuery};
use async_trait::async_trait;

/// Trait for generative model backends
///
/// Takes the full prompt and returns the raw response text. Transport,
/// auth and quota failures come back as `Err`; an empty string means the
/// model produced nothing usable.
#[async_trait]
pub trait ModelCaller: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, SqlChatError>;
}

/// Trait for the relational store queries run against
///
/// Implementations must not let store failures escape: they are reported
/// as `ExecutionOutcome::ExecutionError`.
#[async_trait]
pub trait QueryStore: Send + Sync {
    async fn execute(&self, query: &ExtractedQuery) -> ExecutionOutcome;
}
