use super::rules::QuoteSignals;
use crate::workflows::quote::domain::{DoorContext, QuoteVerdict};
use crate::workflows::quote::normalizer::normalize_text;

pub(crate) const AFTER_HOURS_NOTE: &str =
    "After-hours/emergency timing can legitimately increase pricing.";
pub(crate) const MULTI_DOOR_NOTE: &str = "Quote may cover multiple doors.";
pub(crate) const OVERSIZE_NOTE: &str = "Door may be oversized/special (e.g., high-lift/custom/heavy), which can increase parts and labor.";
pub(crate) const NON_STANDARD_NOTE: &str =
    "Door setup may not match a standard 16×7 benchmark.";

/// A standard 16x7 door is approximated as a setup naming both "double" and "7ft".
pub(crate) fn is_standard_door(ctx: &DoorContext) -> bool {
    let setup = normalize_text(ctx.door_setup());
    setup.contains("double") && setup.contains("7ft")
}

/// Collects the exception notes that justify softening a benchmark overage.
pub(crate) fn exception_notes(signals: &QuoteSignals, ctx: &DoorContext) -> Vec<String> {
    let mut notes = Vec::new();

    if ctx.timing.is_after_hours() {
        notes.push(AFTER_HOURS_NOTE.to_string());
    }
    if signals.multi_door {
        notes.push(MULTI_DOOR_NOTE.to_string());
    }
    if signals.oversize_or_special {
        notes.push(OVERSIZE_NOTE.to_string());
    }
    if !is_standard_door(ctx) {
        notes.push(NON_STANDARD_NOTE.to_string());
    }

    notes
}

/// Any exception softens red to yellow; a detected overage is never waived.
pub(crate) fn downgrade(verdict: QuoteVerdict, notes: &[String]) -> QuoteVerdict {
    if notes.is_empty() {
        verdict
    } else {
        QuoteVerdict::Yellow
    }
}
