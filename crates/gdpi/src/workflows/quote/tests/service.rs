use super::common::*;
use std::sync::Arc;

use crate::workflows::quote::repository::{HistoryError, QuoteHistory};
use crate::workflows::quote::{
    JobTiming, JobType, ManualQuoteEntry, QuoteAnalysisService, QuoteParts, QuoteServiceError,
    QuoteVerdict, TorsionBenchmarks, BENCHMARK_TRAILER, NONE_SEEN,
};

#[test]
fn heuristic_overrides_green_analyst_on_spring_overage() {
    let (service, _, history) = build_service(GREEN_REPLY);

    let analysis = service
        .analyze(submission(
            "Replace torsion springs and cables. Total $795.",
            JobTiming::Scheduled,
            "Double, insulated, 7ft",
        ))
        .expect("analysis succeeds");

    assert_eq!(analysis.result.verdict, QuoteVerdict::Red);
    assert!(analysis.result.red_flags[0].contains("red flag when over $700"));
    assert!(analysis.result.vendor_questions[0].contains("itemized breakdown"));
    assert_eq!(analysis.result.vendor_questions.len(), 3);
    assert!(analysis.result.price_context.ends_with(BENCHMARK_TRAILER));

    assert_eq!(analysis.record.verdict, QuoteVerdict::Red);
    assert_eq!(analysis.record.job_type, JobType::TorsionSprings);
    assert_eq!(analysis.record.quoted_amount, 795.0);
    assert_eq!(history.list(HOA_ID).expect("history readable").len(), 1);
}

#[test]
fn analyst_verdict_stands_when_heuristic_does_not_apply() {
    let (service, _, _) = build_service(GREEN_REPLY);

    let analysis = service
        .analyze(submission(
            "Replace torsion springs (springs only). Total $800.",
            JobTiming::Scheduled,
            "double 7ft",
        ))
        .expect("analysis succeeds");

    assert_eq!(analysis.result.verdict, QuoteVerdict::Green);
    assert_eq!(analysis.result.red_flags, vec![NONE_SEEN]);
    assert!(!analysis.result.price_context.contains(BENCHMARK_TRAILER));
}

#[test]
fn offline_assessment_is_used_when_analyst_fails() {
    let service = QuoteAnalysisService::new(
        Arc::new(OfflineAnalyst),
        Arc::new(MemoryHistory::default()),
        TorsionBenchmarks::default(),
    );

    let analysis = service
        .analyze(submission(
            "Replace torsion springs and cables. Total $795.",
            JobTiming::AfterHours,
            "double 7ft",
        ))
        .expect("analysis succeeds");

    // Offline says green for after-hours under $1000; the benchmark softens to yellow.
    assert_eq!(analysis.result.verdict, QuoteVerdict::Yellow);
    assert!(analysis
        .result
        .red_flags
        .iter()
        .any(|flag| flag.starts_with("Note: After-hours")));
    assert!(analysis.result.price_context.starts_with("Quote is $795."));
}

#[test]
fn prompt_carries_quote_timing_and_setup() {
    let (service, analyst, _) = build_service(GREEN_REPLY);
    let mut request = submission("Rollers $175", JobTiming::AfterHours, "Single, 7ft");
    request.manual = Some(ManualQuoteEntry {
        parts: QuoteParts {
            hinges: true,
            ..QuoteParts::default()
        },
        ..ManualQuoteEntry::default()
    });

    service.analyze(request).expect("analysis succeeds");

    let prompts = analyst.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("QUOTE:\nRollers $175\nParts: Hinges\n"));
    assert!(prompts[0].contains("TIMING: after-hours"));
    assert!(prompts[0].contains("DOOR SETUP: Single, 7ft"));
}

#[test]
fn rejects_missing_quote_text_and_door_setup() {
    let (service, analyst, history) = build_service(GREEN_REPLY);

    let missing_text = service.analyze(submission("   ", JobTiming::Scheduled, "double 7ft"));
    assert!(matches!(
        missing_text,
        Err(QuoteServiceError::InvalidSubmission(_))
    ));

    let missing_setup = service.analyze(submission("Springs $400", JobTiming::Scheduled, " "));
    match missing_setup {
        Err(QuoteServiceError::InvalidSubmission(reason)) => {
            assert!(reason.contains("door setup"))
        }
        other => panic!("expected invalid submission, got {other:?}"),
    }

    assert!(analyst.prompts().is_empty());
    assert!(history.list(HOA_ID).expect("history readable").is_empty());
}

#[test]
fn history_failure_is_reported() {
    let service = QuoteAnalysisService::new(
        Arc::new(CannedAnalyst::new(GREEN_REPLY)),
        Arc::new(UnavailableHistory),
        TorsionBenchmarks::default(),
    );

    let outcome = service.analyze(submission("Springs $400", JobTiming::Scheduled, "double 7ft"));

    assert!(matches!(
        outcome,
        Err(QuoteServiceError::History(HistoryError::Unavailable(_)))
    ));
}

#[test]
fn record_notes_are_truncated_and_history_is_scoped_by_hoa() {
    let (service, _, _) = build_service(GREEN_REPLY);
    let long_text = format!("Opener install $650. {}", "x".repeat(400));

    let analysis = service
        .analyze(submission(&long_text, JobTiming::Scheduled, "double 7ft"))
        .expect("analysis succeeds");
    assert_eq!(analysis.record.notes.chars().count(), 200);
    assert_eq!(analysis.record.job_type, JobType::OpenerReplacement);

    let mut other = submission("Springs $300", JobTiming::Scheduled, "double 7ft");
    other.hoa_id = "hoa-other".to_string();
    service.analyze(other).expect("analysis succeeds");

    let records = service.history(HOA_ID).expect("history readable");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, analysis.record.id);
}
