//! Torsion-spring pricing heuristic for standard 16x7 doors.
//!
//! Benchmarks:
//! - oil-tempered springs only: red flag above $675
//! - springs plus any other torsion-system part: red flag above $700
//!
//! After-hours timing, multi-door or oversize/special jobs, and door setups
//! that cannot be confirmed as standard soften a red flag to yellow.

mod config;
pub mod keywords;
mod policy;
mod rules;

pub use config::TorsionBenchmarks;

use super::domain::{DoorContext, QuoteVerdict};
use super::normalizer::normalize_text;
use rules::QuoteSignals;
use serde::{Deserialize, Serialize};

/// Outcome of the heuristic. `NotApplicable` means the heuristic has no
/// opinion and the caller must keep the AI judgement as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TorsionPricingSignal {
    NotApplicable,
    Applied(TorsionFinding),
}

impl TorsionPricingSignal {
    pub fn is_applied(&self) -> bool {
        matches!(self, TorsionPricingSignal::Applied(_))
    }

    pub fn verdict(&self) -> Option<QuoteVerdict> {
        self.finding().map(|finding| finding.verdict)
    }

    pub fn finding(&self) -> Option<&TorsionFinding> {
        match self {
            TorsionPricingSignal::Applied(finding) => Some(finding),
            TorsionPricingSignal::NotApplicable => None,
        }
    }
}

/// Benchmark overage with the explanation and question to surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TorsionFinding {
    pub verdict: QuoteVerdict,
    pub red_flag: String,
    pub vendor_question: String,
    /// Exceptions that softened the verdict, in detection order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

/// Stateless evaluator holding the configured benchmarks.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TorsionHeuristic {
    benchmarks: TorsionBenchmarks,
}

impl TorsionHeuristic {
    pub fn new(benchmarks: TorsionBenchmarks) -> Self {
        Self { benchmarks }
    }

    pub fn benchmarks(&self) -> &TorsionBenchmarks {
        &self.benchmarks
    }

    pub fn evaluate(&self, quote_text: &str, amount: f64, ctx: &DoorContext) -> TorsionPricingSignal {
        if !amount.is_finite() || amount <= 0.0 {
            return TorsionPricingSignal::NotApplicable;
        }

        let normalized = normalize_text(quote_text);
        let signals = QuoteSignals::detect(&normalized);
        if !signals.springs {
            return TorsionPricingSignal::NotApplicable;
        }

        let Some(overage) = rules::benchmark_overage(&signals, amount, &self.benchmarks) else {
            return TorsionPricingSignal::NotApplicable;
        };

        let notes = policy::exception_notes(&signals, ctx);
        let verdict = policy::downgrade(overage.verdict, &notes);

        tracing::debug!(
            amount,
            springs_plus_parts = signals.other_torsion_parts,
            %verdict,
            exceptions = notes.len(),
            "torsion benchmark exceeded"
        );

        TorsionPricingSignal::Applied(TorsionFinding {
            verdict,
            red_flag: overage.red_flag,
            vendor_question: overage.vendor_question,
            notes,
        })
    }
}

/// Evaluates a quote against the default 16x7 benchmarks.
pub fn evaluate_torsion_spring_pricing(
    quote_text: &str,
    amount: f64,
    ctx: &DoorContext,
) -> TorsionPricingSignal {
    TorsionHeuristic::default().evaluate(quote_text, amount, ctx)
}
