//! Request bodies for the analysis endpoints.

use serde::Serialize;

use crate::types::{Language, SummaryLength};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SentimentRequest {
    pub text: String,
    pub language: Language,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SummaryRequest {
    pub text: String,
    pub language: Language,
    pub length: SummaryLength,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct QaRequest {
    pub context: String,
    pub question: String,
    pub language: Language,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_summary_page_body() {
        let body = serde_json::to_value(SummaryRequest {
            text: "lap notes".into(),
            language: Language::En,
            length: SummaryLength::Medium,
        })
        .unwrap();
        assert_eq!(
            body,
            json!({"text": "lap notes", "language": "en", "length": "medium"})
        );
    }

    #[test]
    fn test_qa_body_field_names() {
        let body = serde_json::to_value(QaRequest {
            context: String::new(),
            question: "Who won Monza?".into(),
            language: Language::Auto,
        })
        .unwrap();
        assert_eq!(
            body,
            json!({"context": "", "question": "Who won Monza?", "language": "auto"})
        );
    }
}
