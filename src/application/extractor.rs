use crate::domain::error::ExtractionFailure;
use crate::domain::model::ExtractedQuery;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info, warn};

// ```sql ... ``` block, tag case-insensitive, first closing fence wins
static SQL_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)```sql\s*(.*?)\s*```").expect("valid fence regex"));

const READ_KEYWORD: &str = "SELECT";

/// Pull a single validated query out of raw model output.
///
/// A ```` ```sql ```` fenced block is preferred. Without one, the whole
/// response is accepted only if it starts with `SELECT`.
pub fn extract(response: Option<&str>) -> Result<ExtractedQuery, ExtractionFailure> {
    let text = match response {
        Some(t) if !t.trim().is_empty() => t,
        _ => {
            warn!("No response or empty text from model");
            return Err(ExtractionFailure::NoResponse);
        }
    };

    let candidate = if let Some(caps) = SQL_FENCE.captures(text) {
        caps.get(1).map(|m| m.as_str().trim()).unwrap_or_default()
    } else {
        warn!("No ```sql``` block found in response: {}", text);
        let trimmed = text.trim();
        if !starts_with_ignore_case(trimmed, READ_KEYWORD) {
            return Err(ExtractionFailure::NoSqlBlockFound);
        }
        info!("Raw response looks like SQL, using it as a fallback");
        trimmed
    };

    if !is_valid_read_query(candidate) {
        warn!("Extracted SQL is invalid or empty: '{}'", candidate);
        return Err(ExtractionFailure::InvalidOrEmptySql);
    }

    debug!("Extracted SQL: {}", candidate);
    Ok(ExtractedQuery::new_unchecked(candidate.to_string()))
}

/// Shallow check: non-empty and mentions `SELECT` somewhere.
fn is_valid_read_query(candidate: &str) -> bool {
    !candidate.is_empty() && candidate.to_uppercase().contains(READ_KEYWORD)
}

fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.get(..prefix.len())
        .map(|head| head.eq_ignore_ascii_case(prefix))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fenced_block_is_preferred_over_prose() {
        let response = "Here you go:\n```sql\nSELECT 1;\n```\nHope it helps";
        assert_eq!(extract(Some(response)).unwrap().as_str(), "SELECT 1;");
    }

    #[test]
    fn test_first_fence_wins() {
        let response = "```sql\nSELECT a FROM t;\n```\n```sql\nSELECT b FROM t;\n```";
        assert_eq!(extract(Some(response)).unwrap().as_str(), "SELECT a FROM t;");
    }

    #[test]
    fn test_tag_is_case_insensitive() {
        let response = "```SQL\n  select * from Students;  \n```";
        assert_eq!(
            extract(Some(response)).unwrap().as_str(),
            "select * from Students;"
        );
    }

    #[test]
    fn test_empty_fence_is_invalid() {
        assert_eq!(
            extract(Some("```sql\n\n```")),
            Err(ExtractionFailure::InvalidOrEmptySql)
        );
    }

    #[test]
    fn test_fence_without_select_is_invalid() {
        assert_eq!(
            extract(Some("```sql\nDELETE FROM Students;\n```")),
            Err(ExtractionFailure::InvalidOrEmptySql)
        );
    }

    #[test]
    fn test_starts_with_ignore_case_handles_multibyte() {
        // 前缀长度落在多字节字符中间时不能 panic
        assert!(!starts_with_ignore_case("كم عدد الطلاب", "SELECT"));
        assert!(!starts_with_ignore_case("SEL", "SELECT"));
        assert!(starts_with_ignore_case("sElEcT 1", "SELECT"));
    }
}
