use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// A query that passed extraction: trimmed, non-empty, mentions `SELECT`.
///
/// Only `application::extractor` builds these, so holding one means the
/// text was validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExtractedQuery(String);

impl ExtractedQuery {
    pub(crate) fn new_unchecked(sql: String) -> Self {
        Self(sql)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ExtractedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ExtractedQuery {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// 单元格的值，保留 SQLite 的存储类型
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(Vec<u8>), // 原始字节，UTF-8 校验留给格式化阶段
    Blob(Vec<u8>),
}

impl SqlValue {
    pub fn text(s: impl Into<String>) -> Self {
        SqlValue::Text(s.into().into_bytes())
    }
}

impl From<rusqlite::types::ValueRef<'_>> for SqlValue {
    fn from(value: rusqlite::types::ValueRef<'_>) -> Self {
        use rusqlite::types::ValueRef;
        match value {
            ValueRef::Null => SqlValue::Null,
            ValueRef::Integer(i) => SqlValue::Integer(i),
            ValueRef::Real(r) => SqlValue::Real(r),
            ValueRef::Text(t) => SqlValue::Text(t.to_vec()),
            ValueRef::Blob(b) => SqlValue::Blob(b.to_vec()),
        }
    }
}

pub type Row = Vec<SqlValue>;

/// Result of running one query against the store.
#[derive(Debug, Clone, PartialEq)]
pub enum ExecutionOutcome {
    Rows(Vec<Row>),
    ExecutionError(String),
}

/// Terminal artifact of one interaction.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerRecord {
    pub text: String,
    pub query: Option<ExtractedQuery>,
    pub answered_at: DateTime<Utc>,
}

impl AnswerRecord {
    pub fn new(text: String, query: Option<ExtractedQuery>) -> Self {
        Self {
            text,
            query,
            answered_at: Utc::now(),
        }
    }
}

// 聊天记录角色
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    pub sql: Option<String>, // 助手回复附带的 SQL
}

/// Append-only conversation log owned by the caller.
#[derive(Debug, Default, Serialize)]
pub struct ChatHistory {
    messages: Vec<ChatMessage>,
}

impl ChatHistory {
    pub fn with_greeting(greeting: &str) -> Self {
        let mut history = Self::default();
        history.messages.push(ChatMessage {
            role: Role::Assistant,
            content: greeting.to_string(),
            sql: None,
        });
        history
    }

    pub fn push_question(&mut self, question: &str) {
        self.messages.push(ChatMessage {
            role: Role::User,
            content: question.to_string(),
            sql: None,
        });
    }

    pub fn push_answer(&mut self, answer: &AnswerRecord) {
        self.messages.push(ChatMessage {
            role: Role::Assistant,
            content: answer.text.clone(),
            sql: answer.query.as_ref().map(|q| q.as_str().to_string()),
        });
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_is_append_only_log() {
        let mut history = ChatHistory::with_greeting("hi");
        history.push_question("how many students?");
        history.push_answer(&AnswerRecord::new(
            "There are 4 results matching the query.".to_string(),
            Some(ExtractedQuery::new_unchecked("SELECT COUNT(*) FROM Students".to_string())),
        ));
        history.push_answer(&AnswerRecord::new("Sorry".to_string(), None));

        let roles: Vec<Role> = history.messages().iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::Assistant, Role::User, Role::Assistant, Role::Assistant]);
        assert_eq!(history.messages()[2].sql.as_deref(), Some("SELECT COUNT(*) FROM Students"));
        assert!(history.messages()[3].sql.is_none());
    }

    #[test]
    fn test_answer_record_serializes_query_as_string() {
        let record = AnswerRecord::new(
            "ok".to_string(),
            Some(ExtractedQuery::new_unchecked("SELECT 1".to_string())),
        );
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["query"], "SELECT 1");
        assert_eq!(json["text"], "ok");
    }
}
