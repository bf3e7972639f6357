use std::io::Read;
use std::rc::Rc;

use colored::Colorize;

use pitwall::client::AiClient;
use pitwall::config::Config;
use pitwall::error::{PitwallError, Result};
use pitwall::forms::{AiForm, FormController, QaForm, SentimentForm, SubmitOutcome, SummaryForm};
use pitwall::responses::SummaryReading;
use pitwall::view::{FieldValue, Input, Text, TextSlot, TextTarget};

use crate::cli::{AskArgs, SentimentArgs, SummaryArgs};
use crate::output;

/// Status element that writes progress lines to stderr.
struct StatusLine;

impl TextTarget for StatusLine {
    fn set_text(&self, text: &str) {
        output::print_status(text);
    }
}

/// `-` means read the whole of stdin.
fn read_arg(arg: Option<String>) -> Result<String> {
    match arg.as_deref() {
        Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        _ => Ok(arg.unwrap_or_default()),
    }
}

/// Turn a finished submit into command output and an exit status.
fn finish<F: AiForm>(
    outcome: SubmitOutcome<F::Reading>,
    result: &TextSlot,
    render: impl FnOnce(&F::Reading),
) -> Result<()>
where
    F::Reading: serde::Serialize,
{
    match outcome {
        SubmitOutcome::Rendered(reading) => {
            output::print_item(&reading, render);
            Ok(())
        }
        SubmitOutcome::Prompted => Err(PitwallError::EmptyInput(F::KIND)),
        SubmitOutcome::Failed(err) => {
            if !output::is_json_output() {
                let shown = result.text().unwrap_or_default();
                println!("{}", shown.red());
            }
            Err(err)
        }
        // One submission per process; nothing can supersede it
        SubmitOutcome::Superseded => Ok(()),
    }
}

pub async fn sentiment(client: Rc<AiClient>, config: &Config, args: SentimentArgs) -> Result<()> {
    let result = TextSlot::new();
    let mut form = SentimentForm::new(FieldValue::new(read_arg(args.text)?), result.clone());
    form.language = Some(FieldValue::new(args.language.as_str()));
    form.status = Some(Rc::new(StatusLine) as Text);

    let controller = FormController::new(form, client, &config.api);
    let outcome = controller.submit().await;

    finish::<SentimentForm>(outcome, &result, |reading| {
        println!("{}", reading.headline());
        println!(
            "  {} {}",
            "Label:".bold(),
            output::sentiment_colored(&reading.label)
        );
        println!("  {} {}", "Score:".bold(), reading.score_text());
        if !reading.explanation.is_empty() {
            println!("  {} {}", "Why:".bold(), reading.explanation);
        }
    })
}

pub async fn summary(client: Rc<AiClient>, config: &Config, args: SummaryArgs) -> Result<()> {
    let result = TextSlot::new();
    let mut form = SummaryForm::new(FieldValue::new(read_arg(args.text)?), result.clone());
    form.language = args.language;
    form.length = args.length;

    let controller = FormController::new(form, client, &config.api);
    let outcome = controller.submit().await;

    finish::<SummaryForm>(outcome, &result, |reading: &SummaryReading| {
        println!("{}", reading.summary);
        if let (Some(original), Some(max)) = (reading.original_length, reading.max_words) {
            println!(
                "{}",
                format!("({original} words in, up to {max} out)").bright_black()
            );
        }
    })
}

pub async fn ask(client: Rc<AiClient>, config: &Config, args: AskArgs) -> Result<()> {
    let result = TextSlot::new();
    let mut form = QaForm::new(FieldValue::new(read_arg(args.question)?), result.clone());
    form.context = args.context.map(|c| FieldValue::new(c) as Input);
    form.language = args.language;

    let controller = FormController::new(form, client, &config.api);
    let outcome = controller.submit().await;

    finish::<QaForm>(outcome, &result, |reading| {
        println!("{}", reading.display_text());
    })
}
