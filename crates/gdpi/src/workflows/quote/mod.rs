//! Quote analysis: amount extraction, the torsion-spring pricing heuristic,
//! analyst reply parsing, and verdict reconciliation.
//!
//! The analysis functions are pure and synchronous. The service, repository
//! traits, and router wrap them for callers that need an analyst, history, or
//! an HTTP surface.

pub mod amount;
pub mod baseline;
pub mod domain;
pub mod fallback;
pub mod intake;
pub mod merge;
mod normalizer;
pub mod repository;
pub mod response;
pub mod router;
pub mod service;
pub mod torsion;

#[cfg(test)]
mod tests;

pub use amount::{extract_amount, format_dollars};
pub use baseline::{build_analysis_prompt, BaselinePricing, PriceRange, PREMIUM_WIRE_CAP};
pub use domain::{
    AnalysisResult, DoorContext, JobTiming, QuoteVerdict, TimingParseError, VerdictParseError,
    MAX_VENDOR_QUESTIONS, NONE_SEEN,
};
pub use fallback::offline_analysis;
pub use intake::{classify_job_type, JobType, ManualQuoteEntry, QuoteParts, QuoteSubmission};
pub use merge::{apply_heuristics, merge, BENCHMARK_TRAILER};
pub use repository::{
    AnalystError, HistoryError, QuoteAnalyst, QuoteHistory, QuoteHistoryStats, QuoteId,
    QuoteRecord,
};
pub use response::parse_ai_response;
pub use router::quote_router;
pub use service::{QuoteAnalysis, QuoteAnalysisService, QuoteServiceError};
pub use torsion::{
    evaluate_torsion_spring_pricing, TorsionBenchmarks, TorsionFinding, TorsionHeuristic,
    TorsionPricingSignal,
};
