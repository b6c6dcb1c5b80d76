use serde::{Deserialize, Serialize};

/// Language user-facing sentences are rendered in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "ar")]
    Arabic,
    #[serde(rename = "en")]
    English,
}

impl Locale {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "ar" | "arabic" => Some(Locale::Arabic),
            "en" | "english" => Some(Locale::English),
            _ => None,
        }
    }

    pub fn messages(self) -> Messages {
        match self {
            Locale::Arabic => Messages::arabic(),
            Locale::English => Messages::english(),
        }
    }
}

/// Sentence table for one locale.
pub struct Messages {
    pub execution_error: fn(&str) -> String,
    pub no_results: &'static str,
    pub match_count: fn(i64) -> String,
    pub count_unknown: &'static str,
    pub formatting_error: &'static str,
    pub request_failed: fn(&str) -> String,
    pub greeting: &'static str,
    pub thinking: &'static str,
    pub input_hint: &'static str,
    pub sql_label: &'static str,
}

impl Messages {
    fn arabic() -> Self {
        Self {
            execution_error: |msg| format!("حدث خطأ أثناء تنفيذ استعلام SQL: {}", msg),
            no_results: "لا توجد نتائج للاستعلام.",
            match_count: |n| format!("يوجد {} نتيجة مطابقة للاستعلام.", n),
            count_unknown: "لا يمكن تحديد عدد النتائج.",
            formatting_error: "حدث خطأ أثناء تنسيق الرد.",
            request_failed: |reason| {
                format!(
                    "عذراً، لم أتمكن من معالجة طلبك بالشكل الصحيح. سبب المشكلة: {}",
                    reason
                )
            },
            greeting: "مرحباً! كيف يمكنني مساعدتك اليوم في الاستعلام عن بيانات الطلاب؟ (مثال: كم عدد الطلاب الذكور؟)",
            thinking: "أفكر... 🤔 الرجاء الانتظار قليلاً.",
            input_hint: "اسأل سؤالك هنا...",
            sql_label: "استعلام SQL الذي تم إنشاؤه",
        }
    }

    fn english() -> Self {
        Self {
            execution_error: |msg| format!("An error occurred while running the SQL query: {}", msg),
            no_results: "The query returned no results.",
            match_count: |n| format!("There are {} results matching the query.", n),
            count_unknown: "Could not determine the number of results.",
            formatting_error: "An error occurred while formatting the answer.",
            request_failed: |reason| {
                format!(
                    "Sorry, I could not process your request properly. Reason: {}",
                    reason
                )
            },
            greeting: "Hello! How can I help you query the student data today? (e.g. how many male students are there?)",
            thinking: "Thinking... 🤔 please wait a moment.",
            input_hint: "Ask your question here...",
            sql_label: "Generated SQL query",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_from_name() {
        assert_eq!(Locale::from_name("AR"), Some(Locale::Arabic));
        assert_eq!(Locale::from_name("english"), Some(Locale::English));
        assert_eq!(Locale::from_name("fr"), None);
    }

    #[test]
    fn test_templates_embed_arguments() {
        for locale in [Locale::Arabic, Locale::English] {
            let m = locale.messages();
            assert!((m.execution_error)("no such column: foo").contains("no such column: foo"));
            assert!((m.match_count)(42).contains("42"));
            assert!((m.request_failed)("boom").contains("boom"));
        }
    }
}
