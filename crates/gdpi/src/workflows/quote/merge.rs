use super::amount::extract_amount;
use super::domain::{is_none_seen, AnalysisResult, DoorContext, JobTiming};
use super::torsion::{TorsionHeuristic, TorsionPricingSignal};

pub const BENCHMARK_TRAILER: &str = "A torsion-spring benchmark check was applied to this quote.";

/// Reconciles an analyst result with the torsion heuristic signal.
///
/// The more severe verdict wins, heuristic red flags and questions are
/// prioritized ahead of the analyst's, and the result invariants
/// (non-empty red flags, at most three questions) are restored.
pub fn merge(ai: AnalysisResult, signal: &TorsionPricingSignal) -> AnalysisResult {
    let Some(finding) = signal.finding() else {
        return ai;
    };

    let mut red_flags: Vec<String> = ai
        .red_flags
        .into_iter()
        .filter(|flag| !is_none_seen(flag))
        .collect();

    let already_flagged = red_flags.iter().any(|flag| {
        let lower = flag.to_lowercase();
        lower.contains("springs") && lower.contains("red flag")
    });
    if !already_flagged {
        red_flags.insert(0, finding.red_flag.clone());
    }

    for note in &finding.notes {
        let note = format!("Note: {note}");
        let duplicate = red_flags
            .iter()
            .any(|flag| flag.to_lowercase() == note.to_lowercase());
        if !duplicate {
            red_flags.push(note);
        }
    }

    let mut vendor_questions = ai.vendor_questions;
    let already_asked = vendor_questions.iter().any(|question| {
        let lower = question.to_lowercase();
        lower.contains("itemized") || lower.contains("center bearing")
    });
    if !already_asked {
        vendor_questions.insert(0, finding.vendor_question.clone());
    }

    let verdict = ai.verdict.more_severe(finding.verdict);
    tracing::debug!(
        analyst = %ai.verdict,
        heuristic = %finding.verdict,
        merged = %verdict,
        "reconciled quote verdicts"
    );

    let price_context = if ai.price_context.trim().is_empty() {
        BENCHMARK_TRAILER.to_string()
    } else {
        format!("{} {}", ai.price_context.trim_end(), BENCHMARK_TRAILER)
    };

    AnalysisResult {
        verdict,
        price_context,
        red_flags,
        vendor_questions,
        next_step: ai.next_step,
    }
    .normalized()
}

impl TorsionHeuristic {
    /// Runs the heuristic over the combined input text and folds the signal
    /// into `base`.
    pub fn apply(&self, base: AnalysisResult, input_text: &str, ctx: &DoorContext) -> AnalysisResult {
        let amount = extract_amount(input_text);
        let signal = self.evaluate(input_text, amount, ctx);
        merge(base, &signal)
    }
}

/// Extracts the amount, evaluates the default benchmarks, and merges.
pub fn apply_heuristics(
    base: AnalysisResult,
    input_text: &str,
    timing: JobTiming,
    door_setup: Option<&str>,
) -> AnalysisResult {
    let ctx = DoorContext {
        door_setup: door_setup.map(str::to_string),
        timing,
    };
    TorsionHeuristic::default().apply(base, input_text, &ctx)
}
