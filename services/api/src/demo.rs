use clap::Args;
use heavendesk::assessment::{
    Advance, AnswerSheet, AssessmentService, AssessmentSubmission, CtaPopupGate,
    InMemoryPreferences, Lead, NavigationError, QuizCursor, RawAnswers, ScoreReport,
    ScoringEngine, Section, TracingNotifier, CATALOG,
};
use heavendesk::config::AppConfig;
use heavendesk::error::AppError;
use serde_json::{json, Value};
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use crate::infra::InMemoryResultStore;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON file holding an answers object or a full `{lead, answers}` submission; `-` or no value reads stdin
    #[arg(long)]
    pub(crate) answers: Option<PathBuf>,
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct QuestionsArgs {
    /// Only print one section (e.g. frontDesk)
    #[arg(long, value_parser = parse_section)]
    pub(crate) section: Option<Section>,
    /// Print the catalog as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Option picked for every question (0 = fully manual, 3 = fully automated)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(0..=3))]
    pub(crate) option: u8,
    /// Sections answered as fully manual; repeat for several
    #[arg(long = "manual", value_parser = parse_section)]
    pub(crate) manual: Vec<Section>,
    /// Visitor e-mail address used for the results notice
    #[arg(long)]
    pub(crate) email: Option<String>,
}

pub(crate) fn parse_section(raw: &str) -> Result<Section, String> {
    Section::from_key(raw.trim()).ok_or_else(|| {
        let keys: Vec<&str> = Section::ALL.iter().map(|section| section.key()).collect();
        format!("unknown section '{raw}' (expected one of {})", keys.join(", "))
    })
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;

    let input = match args.answers.as_deref().filter(|path| path.as_os_str() != "-") {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    let value: Value = serde_json::from_str(&input)?;
    let answers = RawAnswers::from_value(answers_from_input(&value));

    let report = ScoringEngine::new(config.scoring).score(&answers);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render_report(&report);
    }
    Ok(())
}

/// Accepts either a bare answers object or a submission wrapping one.
fn answers_from_input(value: &Value) -> &Value {
    match value.get("answers") {
        Some(answers) if value.get("lead").is_some() => answers,
        _ => value,
    }
}

pub(crate) fn print_questions(args: QuestionsArgs) -> Result<(), AppError> {
    let sections: Vec<_> = match args.section {
        Some(section) => vec![section.definition()],
        None => CATALOG.iter().collect(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&sections)?);
        return Ok(());
    }

    for definition in sections {
        println!("\n{} [{}]", definition.label, definition.key);
        println!("  {}", definition.eyebrow);
        for (index, question) in definition.questions.iter().enumerate() {
            println!("  {}. {}", index + 1, question.text);
            for (code, option) in question.options.iter().enumerate() {
                println!("     ({code}) {option}");
            }
        }
    }
    Ok(())
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        option,
        manual,
        email,
    } = args;
    let config = AppConfig::load()?;

    println!("HeavenDesk.ai assessment demo");

    let preferences = Arc::new(InMemoryPreferences::default());
    let popup = CtaPopupGate::new(preferences.clone());
    println!("- First visit shows booking popup: {}", popup.should_show());
    popup.dismiss();
    println!(
        "- Return visit shows booking popup: {}",
        CtaPopupGate::new(preferences).should_show()
    );

    let sheet = scripted_sheet(option, &manual)?;
    println!(
        "- Answered {} questions across {} sections",
        sheet.answered_count(),
        CATALOG.len()
    );

    let lead_payload = json!({
        "name": "Demo Visitor",
        "company": "Sample Dental Group",
        "email": email,
    });
    let answers: serde_json::Map<String, Value> = sheet
        .to_raw_answers()
        .iter()
        .map(|(key, codes)| (key.to_string(), json!(codes)))
        .collect();
    let submission = AssessmentSubmission {
        lead: Lead::from_value(&lead_payload),
        lead_payload,
        answers: Value::Object(answers),
    };

    let mut delivery = config.notifications.delivery_settings();
    delivery.operator_email = None;
    let store = Arc::new(InMemoryResultStore::default());
    let service = AssessmentService::new(
        store.clone(),
        Arc::new(TracingNotifier::new(delivery.booking_url.clone())),
        ScoringEngine::new(config.scoring),
        delivery,
    );

    let receipt = service.submit(submission).await?;
    render_report(&receipt.report);
    println!("\nResult link: {}", receipt.result_url);

    match service.result(&receipt.result_id) {
        Ok(Some(record)) => println!(
            "Stored result {} at {} ({} stored)",
            record.id,
            record.submitted_at.to_rfc3339(),
            store.len()
        ),
        Ok(None) => println!("Stored result lookup returned nothing"),
        Err(err) => println!("Result store unavailable: {}", err),
    }
    println!("Book a call: {}", service.delivery().booking_url);

    Ok(())
}

/// Walks the quiz the way a visitor would, answering `option` everywhere except
/// the `manual` sections, which get the fully manual answer.
fn scripted_sheet(option: u8, manual: &[Section]) -> Result<AnswerSheet, NavigationError> {
    let mut sheet = AnswerSheet::new();
    let mut cursor = QuizCursor::start();
    loop {
        let section = cursor.section().section;
        let choice = if manual.contains(&section) { 0 } else { option };
        sheet.select(section, cursor.question_index, usize::from(choice))?;

        if !cursor.is_last_question_in_section() {
            cursor = cursor.after_answer();
            continue;
        }
        match cursor.next(&sheet) {
            Advance::Moved(next) => cursor = next,
            Advance::Submit | Advance::Blocked => return Ok(sheet),
        }
    }
}

fn render_report(report: &ScoreReport) {
    println!(
        "\nOverall automation score: {}/100 ({})",
        report.overall_score, report.tier
    );
    println!("Section scores:");
    for section in &report.sections {
        println!("  - {}: {}", section.label, section.score);
    }
    if !report.recommendations.is_empty() {
        println!("Owner homework:");
        for line in &report.recommendations {
            println!("  - {}", line);
        }
    }
    if !report.quick_wins.is_empty() {
        println!("Quick wins:");
        for line in &report.quick_wins {
            println!("  - {}", line.replace("**", ""));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_names_parse_by_key() {
        assert_eq!(parse_section(" sales "), Ok(Section::Sales));
        let err = parse_section("billing").expect_err("unknown key");
        assert!(err.contains("frontDesk"));
    }

    #[test]
    fn scripted_walkthrough_answers_everything() {
        let sheet =
            scripted_sheet(2, &[Section::FrontDesk, Section::TechStack]).expect("valid options");
        assert_eq!(sheet.answered_count(), 48);

        let raw = sheet.to_raw_answers();
        assert_eq!(raw.section("frontDesk"), Some(&[0, 0, 0, 0, 0, 0][..]));
        assert_eq!(raw.section("sales"), Some(&[2, 2, 2, 2, 2, 2][..]));

        let report = ScoringEngine::default().score(&raw);
        assert_eq!(report.sections[0].score, 100);
        assert_eq!(report.sections[7].score, 100);
    }

    #[tokio::test]
    async fn demo_fails_on_an_invalid_option() {
        let args = DemoArgs {
            option: 7,
            manual: Vec::new(),
            email: None,
        };
        let err = run_demo(args).await.expect_err("option 7 does not exist");
        assert!(matches!(
            err,
            AppError::Quiz(NavigationError::UnknownOption(7))
        ));
    }

    #[test]
    fn score_input_accepts_bare_answers_or_submission() {
        let bare = json!({ "sales": [1, 2] });
        assert_eq!(answers_from_input(&bare), &bare);

        let wrapped = json!({ "lead": {}, "answers": { "support": [0] } });
        assert_eq!(answers_from_input(&wrapped), &json!({ "support": [0] }));
    }
}
