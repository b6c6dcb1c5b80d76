//! 测试用的模拟模型与查询存储

#![allow(dead_code)]

use async_trait::async_trait;
use sqlchat::domain::error::SqlChatError;
use sqlchat::domain::model::{ExecutionOutcome, ExtractedQuery};
use sqlchat::domain::traits::{ModelCaller, QueryStore};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Model that always answers with the same script.
pub struct ScriptedModel {
    reply: Result<String, String>,
    pub calls: AtomicUsize,
    pub last_prompt: Mutex<Option<String>>,
}

impl ScriptedModel {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            reply: Err(msg.to_string()),
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ModelCaller for ScriptedModel {
    async fn generate(&self, prompt: &str) -> Result<String, SqlChatError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
        self.reply.clone().map_err(SqlChatError::ModelCall)
    }
}

/// Store that records executions and returns a canned outcome.
pub struct CountingStore {
    outcome: ExecutionOutcome,
    pub executions: AtomicUsize,
    pub last_query: Mutex<Option<String>>,
}

impl CountingStore {
    pub fn new(outcome: ExecutionOutcome) -> Self {
        Self {
            outcome,
            executions: AtomicUsize::new(0),
            last_query: Mutex::new(None),
        }
    }

    pub fn execution_count(&self) -> usize {
        self.executions.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QueryStore for CountingStore {
    async fn execute(&self, query: &ExtractedQuery) -> ExecutionOutcome {
        self.executions.fetch_add(1, Ordering::SeqCst);
        *self.last_query.lock().unwrap() = Some(query.as_str().to_string());
        self.outcome.clone()
    }
}

/// Seeded sample database inside a fresh temp dir.
pub async fn sample_database() -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("student_db.sqlite");
    sqlchat::infrastructure::storage::seed::init_sample_database(&path)
        .await
        .unwrap();
    (dir, path)
}
