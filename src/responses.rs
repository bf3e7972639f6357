//! Normalized views of the analysis endpoints' replies.
//!
//! The backend's JSON is read field by field. A field that is missing, empty,
//! or of the wrong type falls back to the documented default; normalization
//! itself never fails.

use serde::Serialize;
use serde_json::Value;

pub const DEFAULT_SENTIMENT: &str = "neutral";
pub const NO_SUMMARY: &str = "No summary returned.";
pub const NO_ANSWER: &str = "No answer returned.";
/// Shown instead of a percentage when the score is exactly zero.
pub const NO_SCORE: &str = "–";

fn text_field<'a>(data: &'a Value, field: &str) -> Option<&'a str> {
    data.get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Reply of `POST /ai/sentiment`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SentimentReading {
    /// `label`, else `sentiment`, else `"neutral"`.
    pub label: String,
    /// Numeric `score`, else 0.
    pub score: f64,
    /// `explanation`, else empty.
    pub explanation: String,
}

impl SentimentReading {
    pub fn from_json(data: &Value) -> Self {
        let label = text_field(data, "label")
            .or_else(|| text_field(data, "sentiment"))
            .unwrap_or(DEFAULT_SENTIMENT);

        Self {
            label: label.to_string(),
            score: data.get("score").and_then(Value::as_f64).unwrap_or(0.0),
            explanation: text_field(data, "explanation").unwrap_or_default().to_string(),
        }
    }

    pub fn headline(&self) -> String {
        format!("Detected sentiment: {}", self.label)
    }

    /// `"82% (0.82)"`, or `"–"` for a zero score.
    pub fn score_text(&self) -> String {
        if self.score == 0.0 {
            return NO_SCORE.to_string();
        }
        // Both parts round half away from zero; `{:.2}` alone rounds ties to even.
        let pct = (self.score.abs() * 100.0).round();
        let raw = (self.score * 100.0).round() / 100.0;
        format!("{pct}% ({raw:.2})")
    }
}

/// Reply of `POST /ai/summary`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SummaryReading {
    /// `summary`, else `"No summary returned."`.
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_length: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_words: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl SummaryReading {
    pub fn from_json(data: &Value) -> Self {
        Self {
            summary: text_field(data, "summary").unwrap_or(NO_SUMMARY).to_string(),
            original_length: data.get("original_length").and_then(Value::as_u64),
            max_words: data.get("max_words").and_then(Value::as_u64),
            language: text_field(data, "language").map(String::from),
        }
    }
}

/// Reply of `POST /ai/qa`.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "outcome", content = "text", rename_all = "lowercase")]
pub enum QaReading {
    /// `answer`, else `result`.
    Answered(String),
    /// The backend refused the question (`{"type": "error", "message": ...}`).
    Rejected(String),
    /// Neither an answer nor a refusal.
    Empty,
}

impl QaReading {
    pub fn from_json(data: &Value) -> Self {
        if let Some(answer) = text_field(data, "answer").or_else(|| text_field(data, "result")) {
            return QaReading::Answered(answer.to_string());
        }

        if text_field(data, "type") == Some("error") {
            let message = text_field(data, "message").unwrap_or("unspecified error");
            return QaReading::Rejected(message.to_string());
        }

        QaReading::Empty
    }

    /// What the result area shows.
    pub fn display_text(&self) -> &str {
        match self {
            QaReading::Answered(answer) => answer,
            QaReading::Rejected(_) | QaReading::Empty => NO_ANSWER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sentiment_full_reply() {
        let reading = SentimentReading::from_json(&json!({
            "label": "positive",
            "score": 0.82,
            "explanation": "excited tone"
        }));
        assert_eq!(reading.headline(), "Detected sentiment: positive");
        assert_eq!(reading.score_text(), "82% (0.82)");
        assert_eq!(reading.explanation, "excited tone");
    }

    #[test]
    fn test_sentiment_label_fallbacks() {
        let reading = SentimentReading::from_json(&json!({"sentiment": "negative"}));
        assert_eq!(reading.label, "negative");

        let reading = SentimentReading::from_json(&json!({"label": "", "sentiment": "mixed"}));
        assert_eq!(reading.label, "mixed");

        let reading = SentimentReading::from_json(&json!({"label": 3}));
        assert_eq!(reading.label, "neutral");

        let reading = SentimentReading::from_json(&json!([]));
        assert_eq!(reading.label, "neutral");
        assert_eq!(reading.explanation, "");
    }

    #[test]
    fn test_zero_score_is_a_dash() {
        let reading = SentimentReading::from_json(&json!({"label": "neutral", "score": 0}));
        assert_eq!(reading.score_text(), "–");

        // Non-numeric scores count as zero
        let reading = SentimentReading::from_json(&json!({"score": "0.9"}));
        assert_eq!(reading.score_text(), "–");
    }

    #[test]
    fn test_negative_score_uses_magnitude_for_percent() {
        let reading = SentimentReading::from_json(&json!({"label": "negative", "score": -0.456}));
        assert_eq!(reading.score_text(), "46% (-0.46)");

        let reading = SentimentReading::from_json(&json!({"score": 1}));
        assert_eq!(reading.score_text(), "100% (1.00)");
    }

    #[test]
    fn test_score_ties_round_away_from_zero() {
        let text = |score: f64| SentimentReading::from_json(&json!({"score": score})).score_text();

        assert_eq!(text(0.125), "13% (0.13)");
        assert_eq!(text(0.625), "63% (0.63)");
        assert_eq!(text(-0.125), "13% (-0.13)");
    }

    #[test]
    fn test_summary_fallback_and_metadata() {
        let reading = SummaryReading::from_json(&json!({
            "summary": "Verstappen led every lap.",
            "original_length": 412,
            "max_words": 80,
            "language": "en"
        }));
        assert_eq!(reading.summary, "Verstappen led every lap.");
        assert_eq!(reading.max_words, Some(80));

        let reading = SummaryReading::from_json(&json!({"summary": null}));
        assert_eq!(reading.summary, "No summary returned.");
        assert_eq!(reading.original_length, None);
    }

    #[test]
    fn test_qa_precedence() {
        let reading = QaReading::from_json(&json!({"answer": "Leclerc", "result": "ignored"}));
        assert_eq!(reading, QaReading::Answered("Leclerc".into()));

        let reading = QaReading::from_json(&json!({"result": "Sainz"}));
        assert_eq!(reading.display_text(), "Sainz");

        let reading = QaReading::from_json(&json!({}));
        assert_eq!(reading, QaReading::Empty);
        assert_eq!(reading.display_text(), "No answer returned.");
    }

    #[test]
    fn test_qa_backend_refusal() {
        let reading =
            QaReading::from_json(&json!({"type": "error", "message": "Question is required."}));
        assert_eq!(reading, QaReading::Rejected("Question is required.".into()));
        assert_eq!(reading.display_text(), "No answer returned.");
    }
}
