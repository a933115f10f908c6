use std::sync::LazyLock;

use regex::Regex;

use super::amount::format_dollars;
use super::domain::{AnalysisResult, JobTiming, QuoteVerdict};

static FIRST_AMOUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$?(\d+(?:,\d{3})*(?:\.\d{2})?)").expect("valid first amount pattern")
});

const WARRANTY_QUESTION: &str = "What warranty do you provide on parts and labor?";
const PARTS_QUESTION: &str = "Are all parts new or refurbished?";

/// Rough assessment used when the analyst cannot be reached.
///
/// Looks only at the first figure in the text and a couple of coarse price
/// bands, so callers still merge the torsion heuristic on top of it.
pub fn offline_analysis(quote_text: &str, timing: JobTiming) -> AnalysisResult {
    let amount = FIRST_AMOUNT
        .captures(quote_text)
        .and_then(|captures| captures.get(1))
        .and_then(|token| token.as_str().replace(',', "").parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(0.0);
    let quoted = format_dollars(amount);

    let mut red_flags = Vec::new();
    let mut vendor_questions = Vec::new();

    let (verdict, price_context) = if amount == 0.0 {
        red_flags.push("Quote format unclear".to_string());
        vendor_questions.push("Can you provide a detailed breakdown of all charges?".to_string());
        (
            QuoteVerdict::Yellow,
            "Unable to extract pricing from quote. Please verify with vendor.".to_string(),
        )
    } else if timing.is_after_hours() {
        if amount > 1000.0 {
            vendor_questions.push("Why is after-hours pricing necessary?".to_string());
            (
                QuoteVerdict::Yellow,
                format!(
                    "Quote is {quoted}. For after-hours service, typical markup is 1.4-2.0x. Verify this is justified."
                ),
            )
        } else {
            (
                QuoteVerdict::Green,
                format!("Quote is {quoted}. Reasonable for after-hours emergency service."),
            )
        }
    } else if amount > 2000.0 {
        red_flags.push("Price is above typical range".to_string());
        vendor_questions
            .push("Can you justify the pricing relative to Arizona market rates?".to_string());
        (
            QuoteVerdict::Yellow,
            format!(
                "Quote is {quoted}. This is on the higher end. Compare with Arizona baseline pricing."
            ),
        )
    } else if amount > 500.0 {
        (
            QuoteVerdict::Green,
            format!("Quote is {quoted}. Within reasonable range for scheduled service in Arizona."),
        )
    } else {
        (
            QuoteVerdict::Green,
            format!("Quote is {quoted}. Good price for scheduled service."),
        )
    };

    vendor_questions.push(WARRANTY_QUESTION.to_string());
    vendor_questions.push(PARTS_QUESTION.to_string());

    let next_step = match verdict {
        QuoteVerdict::Green => "Price appears fair. Proceed if vendor is licensed.",
        QuoteVerdict::Yellow | QuoteVerdict::Red => {
            "Ask the vendor questions listed above before proceeding."
        }
    };

    AnalysisResult {
        verdict,
        price_context,
        red_flags,
        vendor_questions,
        next_step: next_step.to_string(),
    }
    .normalized()
}
