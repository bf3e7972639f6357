//! The three analysis forms and the controller that submits them.
//!
//! A form moves Idle -> Pending -> Idle. Submitting with an empty primary
//! input shows a prompt and never touches the network. Every submission
//! takes a fresh request token; a reply that arrives after a newer
//! submission is dropped so it cannot overwrite the newer state.

use std::cell::Cell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::client::AiBackend;
use crate::config::ApiConfig;
use crate::error::PitwallError;
use crate::requests::{QaRequest, SentimentRequest, SummaryRequest};
use crate::responses::{QaReading, SentimentReading, SummaryReading};
use crate::types::{Language, SummaryLength};
use crate::view::{Input, Text, Toggle};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FormKind {
    Sentiment,
    Summary,
    Qa,
}

impl FormKind {
    pub fn empty_prompt(self) -> &'static str {
        match self {
            FormKind::Sentiment | FormKind::Summary => "Please paste some text first.",
            FormKind::Qa => "Please write your question.",
        }
    }

    pub fn pending_text(self) -> &'static str {
        match self {
            FormKind::Sentiment => "Analyzing mood…",
            FormKind::Summary => "Summarizing…",
            FormKind::Qa => "Thinking like an F1 engineer…",
        }
    }

    pub fn error_text(self) -> &'static str {
        match self {
            FormKind::Sentiment => "Error calling sentiment API.",
            FormKind::Summary => "Error calling summary API.",
            FormKind::Qa => "Error calling Q&A API.",
        }
    }

    pub fn path(self, api: &ApiConfig) -> &str {
        match self {
            FormKind::Sentiment => &api.sentiment_path,
            FormKind::Summary => &api.summary_path,
            FormKind::Qa => &api.qa_path,
        }
    }
}

/// Result of one submit.
#[derive(Debug)]
pub enum SubmitOutcome<R> {
    /// Primary input was empty; the prompt is showing.
    Prompted,
    /// Reply normalized and rendered.
    Rendered(R),
    /// Backend call failed; the error text is showing.
    Failed(PitwallError),
    /// A newer submission started while this one was pending.
    Superseded,
}

impl<R> SubmitOutcome<R> {
    pub fn is_rendered(&self) -> bool {
        matches!(self, SubmitOutcome::Rendered(_))
    }
}

/// One form's inputs, payload shape and output elements.
pub trait AiForm {
    type Request: Serialize;
    type Reading;

    const KIND: FormKind;

    fn result(&self) -> &Text;

    /// Trimmed payload, or `None` when the primary input is empty.
    fn read_request(&self) -> Option<Self::Request>;

    fn normalize(data: &Value) -> Self::Reading;

    fn show_reading(&self, reading: &Self::Reading);

    fn show_prompt(&self) {
        self.result().set_text(Self::KIND.empty_prompt());
    }

    fn show_pending(&self) {
        self.result().set_text(Self::KIND.pending_text());
    }

    fn show_failure(&self) {
        self.result().set_text(Self::KIND.error_text());
    }
}

fn trimmed(input: &Input) -> Option<String> {
    let value = input.value();
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

pub const SENTIMENT_STATUS_EMPTY: &str = "Paste text and click “Analyze mood”.";
pub const SENTIMENT_STATUS_PENDING: &str = "Contacting sentiment agent...";
pub const SENTIMENT_STATUS_DONE: &str = "Sentiment analyzed successfully.";
pub const SENTIMENT_STATUS_FAILED: &str = "Error: could not contact sentiment backend.";

/// Mood analysis: text plus optional language select, with a details panel.
#[derive(Clone)]
pub struct SentimentForm {
    pub text: Input,
    pub language: Option<Input>,
    pub result: Text,
    pub status: Option<Text>,
    pub details: Option<Rc<dyn Toggle>>,
    pub badge: Option<Text>,
    pub score: Option<Text>,
    pub explanation: Option<Text>,
}

impl SentimentForm {
    /// Form with only the required elements bound.
    pub fn new(text: Input, result: Text) -> Self {
        Self {
            text,
            language: None,
            result,
            status: None,
            details: None,
            badge: None,
            score: None,
            explanation: None,
        }
    }

    fn set_status(&self, message: &str) {
        if let Some(status) = &self.status {
            status.set_text(message);
        }
    }
}

impl AiForm for SentimentForm {
    type Request = SentimentRequest;
    type Reading = SentimentReading;

    const KIND: FormKind = FormKind::Sentiment;

    fn result(&self) -> &Text {
        &self.result
    }

    fn read_request(&self) -> Option<SentimentRequest> {
        let text = trimmed(&self.text)?;
        let language = self
            .language
            .as_ref()
            .map(|select| Language::from_value(&select.value()))
            .unwrap_or_default();
        Some(SentimentRequest { text, language })
    }

    fn normalize(data: &Value) -> SentimentReading {
        SentimentReading::from_json(data)
    }

    fn show_prompt(&self) {
        self.result.set_text(FormKind::Sentiment.empty_prompt());
        self.set_status(SENTIMENT_STATUS_EMPTY);
    }

    fn show_pending(&self) {
        self.result.set_text(FormKind::Sentiment.pending_text());
        self.set_status(SENTIMENT_STATUS_PENDING);
    }

    fn show_reading(&self, reading: &SentimentReading) {
        self.result.clear_empty_state();
        self.result.set_text(&reading.headline());

        if let Some(details) = &self.details {
            details.set_hidden(false);
        }
        if let Some(badge) = &self.badge {
            badge.set_text(&reading.label);
        }
        if let Some(score) = &self.score {
            score.set_text(&reading.score_text());
        }
        if let Some(explanation) = &self.explanation {
            explanation.set_text(&reading.explanation);
        }
        self.set_status(SENTIMENT_STATUS_DONE);
    }

    fn show_failure(&self) {
        self.result.set_text(FormKind::Sentiment.error_text());
        self.set_status(SENTIMENT_STATUS_FAILED);
        if let Some(details) = &self.details {
            details.set_hidden(true);
        }
    }
}

#[derive(Clone)]
pub struct SummaryForm {
    pub text: Input,
    pub result: Text,
    pub language: Language,
    pub length: SummaryLength,
}

impl SummaryForm {
    /// Summary page settings: English, medium length.
    pub fn new(text: Input, result: Text) -> Self {
        Self {
            text,
            result,
            language: Language::En,
            length: SummaryLength::Medium,
        }
    }
}

impl AiForm for SummaryForm {
    type Request = SummaryRequest;
    type Reading = SummaryReading;

    const KIND: FormKind = FormKind::Summary;

    fn result(&self) -> &Text {
        &self.result
    }

    fn read_request(&self) -> Option<SummaryRequest> {
        Some(SummaryRequest {
            text: trimmed(&self.text)?,
            language: self.language,
            length: self.length,
        })
    }

    fn normalize(data: &Value) -> SummaryReading {
        SummaryReading::from_json(data)
    }

    fn show_reading(&self, reading: &SummaryReading) {
        self.result.set_text(&reading.summary);
    }
}

#[derive(Clone)]
pub struct QaForm {
    pub question: Input,
    pub context: Option<Input>,
    pub result: Text,
    pub language: Language,
}

impl QaForm {
    pub fn new(question: Input, result: Text) -> Self {
        Self {
            question,
            context: None,
            result,
            language: Language::Auto,
        }
    }
}

impl AiForm for QaForm {
    type Request = QaRequest;
    type Reading = QaReading;

    const KIND: FormKind = FormKind::Qa;

    fn result(&self) -> &Text {
        &self.result
    }

    fn read_request(&self) -> Option<QaRequest> {
        let question = trimmed(&self.question)?;
        let context = self.context.as_ref().and_then(trimmed).unwrap_or_default();
        Some(QaRequest {
            context,
            question,
            language: self.language,
        })
    }

    fn normalize(data: &Value) -> QaReading {
        let reading = QaReading::from_json(data);
        if let QaReading::Rejected(message) = &reading {
            warn!(%message, "backend rejected question");
        }
        reading
    }

    fn show_reading(&self, reading: &QaReading) {
        self.result.set_text(reading.display_text());
    }
}

/// Submits one form to the backend.
pub struct FormController<F, B> {
    form: F,
    backend: Rc<B>,
    path: String,
    latest: Cell<u64>,
}

impl<F: AiForm, B: AiBackend> FormController<F, B> {
    pub fn new(form: F, backend: Rc<B>, api: &ApiConfig) -> Self {
        Self {
            form,
            backend,
            path: F::KIND.path(api).to_string(),
            latest: Cell::new(0),
        }
    }

    pub async fn submit(&self) -> SubmitOutcome<F::Reading> {
        let token = self.latest.get() + 1;
        self.latest.set(token);

        let Some(request) = self.form.read_request() else {
            self.form.show_prompt();
            return SubmitOutcome::Prompted;
        };

        self.form.show_pending();

        let result = match serde_json::to_value(&request) {
            Ok(body) => self.backend.post_json(&self.path, &body).await,
            Err(e) => Err(PitwallError::Decode(e)),
        };

        if token != self.latest.get() {
            debug!(form = ?F::KIND, token, "discarding reply to superseded submission");
            return SubmitOutcome::Superseded;
        }

        match result {
            Ok(data) => {
                let reading = F::normalize(&data);
                self.form.show_reading(&reading);
                SubmitOutcome::Rendered(reading)
            }
            Err(err) => {
                error!(form = ?F::KIND, error = %err, "backend call failed");
                self.form.show_failure();
                SubmitOutcome::Failed(err)
            }
        }
    }
}
