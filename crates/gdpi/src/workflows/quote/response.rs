use std::sync::LazyLock;

use regex::Regex;

use super::domain::{is_none_seen, AnalysisResult, JobTiming, QuoteVerdict};

pub const DEFAULT_PRICE_CONTEXT: &str = "Analysis completed.";
pub const DEFAULT_NEXT_STEP: &str = "Review the analysis and decide how to proceed.";
pub const DEFAULT_VENDOR_QUESTIONS: [&str; 2] = [
    "Can you walk me through exactly what is included in this price?",
    "What warranty do you provide on parts and labor?",
];

static VERDICT_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(green|yellow|red)").expect("valid verdict pattern"));

/// Section of the reply the cursor is currently inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Preamble,
    Verdict,
    PriceContext,
    RedFlags,
    VendorQuestions,
    NextStep,
}

impl Section {
    /// Detects a section key anywhere in the line, accepting both the
    /// underscore and the space spelling.
    fn from_key(lower: &str) -> Option<Section> {
        if lower.contains("verdict:") {
            Some(Section::Verdict)
        } else if lower.contains("price_context:") || lower.contains("price context:") {
            Some(Section::PriceContext)
        } else if lower.contains("red_flags:") || lower.contains("red flags:") {
            Some(Section::RedFlags)
        } else if lower.contains("vendor_questions:") || lower.contains("vendor questions:") {
            Some(Section::VendorQuestions)
        } else if lower.contains("next_step:") || lower.contains("next step:") {
            Some(Section::NextStep)
        } else {
            None
        }
    }
}

#[derive(Debug, Default)]
struct ParsedReply {
    verdict: Option<QuoteVerdict>,
    price_context: Vec<String>,
    red_flags: Vec<String>,
    vendor_questions: Vec<String>,
    next_step: Option<String>,
}

impl ParsedReply {
    fn push_red_flag(&mut self, item: &str) {
        if !item.is_empty() && !is_none_marker(item) {
            self.red_flags.push(item.to_string());
        }
    }

    fn push_vendor_question(&mut self, item: &str) {
        if !item.is_empty() {
            self.vendor_questions.push(item.to_string());
        }
    }
}

/// Parses the analyst's loosely formatted `KEY: value` reply.
///
/// Never fails: unrecognized input yields a yellow verdict with default
/// context, questions, and next step.
pub fn parse_ai_response(raw: &str, timing: JobTiming) -> AnalysisResult {
    let mut parsed = ParsedReply::default();
    let mut section = Section::Preamble;

    for line in raw.lines().map(str::trim).filter(|line| !line.is_empty()) {
        let lower = line.to_lowercase();

        if let Some(key) = Section::from_key(&lower) {
            section = key;
            let value = value_after_key(line);
            match key {
                Section::Verdict => {
                    if let Some(found) = VERDICT_WORD.find(line) {
                        parsed.verdict = found.as_str().parse().ok();
                    }
                }
                Section::PriceContext => {
                    parsed.price_context = vec![value.to_string()];
                }
                Section::RedFlags => parsed.push_red_flag(value),
                Section::VendorQuestions => parsed.push_vendor_question(value),
                Section::NextStep => parsed.next_step = Some(value.to_string()),
                Section::Preamble => {}
            }
        } else if let Some(item) = bullet_item(line) {
            match section {
                Section::RedFlags => parsed.push_red_flag(item),
                Section::VendorQuestions => parsed.push_vendor_question(item),
                _ => {}
            }
        } else if section == Section::PriceContext {
            parsed.price_context.push(line.to_string());
        }
    }

    let price_context = parsed
        .price_context
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    let vendor_questions = if parsed.vendor_questions.is_empty() {
        DEFAULT_VENDOR_QUESTIONS
            .iter()
            .map(|question| question.to_string())
            .collect()
    } else {
        parsed.vendor_questions
    };

    let next_step = parsed
        .next_step
        .filter(|step| !step.is_empty())
        .unwrap_or_else(|| DEFAULT_NEXT_STEP.to_string());

    tracing::debug!(
        timing = %timing,
        verdict = ?parsed.verdict,
        red_flags = parsed.red_flags.len(),
        "parsed analyst reply"
    );

    AnalysisResult {
        verdict: parsed.verdict.unwrap_or(QuoteVerdict::Yellow),
        price_context: if price_context.is_empty() {
            DEFAULT_PRICE_CONTEXT.to_string()
        } else {
            price_context
        },
        red_flags: parsed.red_flags,
        vendor_questions,
        next_step,
    }
    .normalized()
}

fn value_after_key(line: &str) -> &str {
    line.split_once(':').map_or("", |(_, rest)| rest.trim())
}

fn bullet_item(line: &str) -> Option<&str> {
    line.strip_prefix('-')
        .or_else(|| line.strip_prefix('•'))
        .map(str::trim)
}

fn is_none_marker(item: &str) -> bool {
    let trimmed = item.trim_end_matches(['.', '!']).trim();
    trimmed.eq_ignore_ascii_case("none") || is_none_seen(trimmed)
}
