use crate::infra::{InMemoryQuoteHistory, LocalAnalyst};
use clap::{ArgGroup, Args};
use gdpi::config::AppConfig;
use gdpi::error::AppError;
use gdpi::workflows::quote::{
    format_dollars, BaselinePricing, JobTiming, QuoteAnalysis, QuoteAnalysisService,
    QuoteSubmission, TorsionBenchmarks, PREMIUM_WIRE_CAP,
};
use std::fmt::Write as _;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("quote").required(true).args(["file", "text"])))]
pub(crate) struct AnalyzeArgs {
    /// Read the quote text from a file (e.g. OCR output)
    #[arg(long)]
    pub(crate) file: Option<PathBuf>,
    /// Quote text passed inline
    #[arg(long)]
    pub(crate) text: Option<String>,
    /// Job timing: scheduled or after-hours
    #[arg(long, value_parser = crate::infra::parse_timing, default_value = "scheduled")]
    pub(crate) timing: JobTiming,
    /// Door setup, e.g. "Double, insulated, 7ft"
    #[arg(long)]
    pub(crate) door_setup: String,
    /// HOA the quote is recorded against
    #[arg(long, default_value = "local")]
    pub(crate) hoa_id: String,
    /// Replay a captured analyst reply instead of the offline assessment
    #[arg(long)]
    pub(crate) ai_reply: Option<PathBuf>,
    /// Emit the analysis as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct BaselineArgs {
    /// Emit the baseline as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let AnalyzeArgs {
        file,
        text,
        timing,
        door_setup,
        hoa_id,
        ai_reply,
        json,
    } = args;

    let config = AppConfig::load()?;
    let quote_text = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => text.unwrap_or_default(),
    };

    let analyst = ai_reply.map_or(LocalAnalyst::Offline, LocalAnalyst::ReplyFile);
    let service = QuoteAnalysisService::new(
        Arc::new(analyst),
        Arc::new(InMemoryQuoteHistory::default()),
        config.benchmarks,
    );

    let analysis = service.analyze(QuoteSubmission {
        hoa_id,
        quote_text,
        manual: None,
        timing,
        door_setup,
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print!("{}", render_analysis(&analysis));
    }

    Ok(())
}

pub(crate) fn run_baseline(args: BaselineArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let baseline = BaselinePricing::arizona();

    if args.json {
        let payload = serde_json::json!({
            "regional": baseline,
            "premium_wire_cap": PREMIUM_WIRE_CAP,
            "torsion_benchmarks": config.benchmarks,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        print!("{}", render_baseline(&baseline, &config.benchmarks));
    }

    Ok(())
}

fn render_analysis(analysis: &QuoteAnalysis) -> String {
    let QuoteAnalysis { record, result } = analysis;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} | {} ({})",
        result.verdict.label(),
        record.job_type.label(),
        record.timing
    );
    let _ = writeln!(
        out,
        "Quoted: {} | Door: {} | Recorded {} at {}",
        format_dollars(record.quoted_amount),
        record.door_setup,
        record.id.0,
        record.submitted_at.format("%Y-%m-%d %H:%M UTC")
    );
    let _ = writeln!(out, "\nPrice context\n  {}", result.price_context);

    let _ = writeln!(out, "\nRed flags");
    for flag in &result.red_flags {
        let _ = writeln!(out, "  - {flag}");
    }

    let _ = writeln!(out, "\nQuestions for the vendor");
    for (index, question) in result.vendor_questions.iter().enumerate() {
        let _ = writeln!(out, "  {}. {question}", index + 1);
    }

    let _ = writeln!(out, "\nNext step\n  {}", result.next_step);
    out
}

fn render_baseline(baseline: &BaselinePricing, benchmarks: &TorsionBenchmarks) -> String {
    let mut out = String::from("Arizona baseline pricing (parts and labor)\n");
    for line in baseline.format_reference().lines() {
        let _ = writeln!(out, "  {line}");
    }
    let _ = writeln!(out, "\nTorsion-spring ceilings (standard 16x7 door)");
    let _ = writeln!(
        out,
        "  Oil-tempered springs only: {}",
        format_dollars(benchmarks.springs_only_ceiling)
    );
    let _ = writeln!(
        out,
        "  Springs plus torsion parts: {}",
        format_dollars(benchmarks.springs_plus_parts_ceiling)
    );
    out
}
