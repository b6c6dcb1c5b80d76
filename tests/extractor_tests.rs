//! SQL 提取功能测试

use sqlchat::application::extractor::extract;
use sqlchat::domain::error::ExtractionFailure;

#[test]
fn test_tagged_fence_returns_trimmed_inner_text() {
    let cases = [
        ("```sql\nSELECT COUNT(*) FROM Students;\n```", "SELECT COUNT(*) FROM Students;"),
        ("```sql SELECT 1 ```", "SELECT 1"),
        (
            "Sure!\n```Sql\n\n  SELECT s.FirstName\n  FROM Students s;\n\n```\nDone.",
            "SELECT s.FirstName\n  FROM Students s;",
        ),
    ];

    for (response, expected) in cases {
        assert_eq!(extract(Some(response)).unwrap().as_str(), expected);
    }
}

#[test]
fn test_select_prefixed_fallback() {
    // 没有代码块，但文本以 SELECT 开头
    let query = extract(Some("   select FirstName from Students;\n")).unwrap();
    assert_eq!(query.as_str(), "select FirstName from Students;");

    let query = extract(Some("\nSELECT * FROM Parents")).unwrap();
    assert_eq!(query.as_str(), "SELECT * FROM Parents");
}

#[test]
fn test_absent_or_empty_response() {
    assert_eq!(extract(None), Err(ExtractionFailure::NoResponse));
    assert_eq!(extract(Some("")), Err(ExtractionFailure::NoResponse));
    assert_eq!(extract(Some("  \n\t ")), Err(ExtractionFailure::NoResponse));
}

#[test]
fn test_prose_is_rejected() {
    let responses = [
        "I'm sorry, I can't help with that.",
        "Here is the query: SELECT * FROM Students",
        "```\nSELECT * FROM Students\n```",
    ];
    for response in responses {
        assert_eq!(
            extract(Some(response)),
            Err(ExtractionFailure::NoSqlBlockFound),
            "response: {response}"
        );
    }
}

#[test]
fn test_fence_without_select_is_invalid() {
    assert_eq!(
        extract(Some("```sql\nUPDATE Students SET Gender = 'x';\n```")),
        Err(ExtractionFailure::InvalidOrEmptySql)
    );
}

#[test]
fn test_select_substring_anywhere_passes_validation() {
    // 校验只检查关键字是否出现，不做语法分析
    let query = extract(Some("```sql\nWITH t AS (SELECT 1) SELECT * FROM t\n```")).unwrap();
    assert!(query.as_str().starts_with("WITH"));
}
