use std::fmt;

use serde::{Deserialize, Serialize};

use super::domain::JobTiming;

/// Ceiling for oil-tempered springs with wire up to 0.250 on a standard door.
///
/// Kept separate from the torsion heuristic ceilings; the two benchmarks come
/// from different field data and have not been reconciled.
pub const PREMIUM_WIRE_CAP: u32 = 600;

/// Inclusive dollar range, parts and labor included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub low: u32,
    pub high: u32,
}

impl PriceRange {
    pub const fn new(low: u32, high: u32) -> Self {
        Self { low, high }
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}-${}", self.low, self.high)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MultiplierRange {
    pub low: f64,
    pub high: f64,
}

/// Regional reference prices fed to the analyst prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselinePricing {
    pub service_call: PriceRange,
    pub torsion_springs: PriceRange,
    pub rollers: PriceRange,
    pub opener: PriceRange,
    pub panel_swap: PriceRange,
    pub single_door: PriceRange,
    pub double_door: PriceRange,
    pub torsion_conversion: PriceRange,
    pub after_hours_multiplier: MultiplierRange,
}

impl BaselinePricing {
    pub fn arizona() -> Self {
        Self {
            service_call: PriceRange::new(75, 150),
            torsion_springs: PriceRange::new(320, 520),
            rollers: PriceRange::new(180, 320),
            opener: PriceRange::new(650, 900),
            panel_swap: PriceRange::new(950, 1350),
            single_door: PriceRange::new(1600, 2200),
            double_door: PriceRange::new(2400, 3600),
            torsion_conversion: PriceRange::new(420, 650),
            after_hours_multiplier: MultiplierRange {
                low: 1.4,
                high: 2.0,
            },
        }
    }

    pub fn format_reference(&self) -> String {
        let lines = [
            format!("Service Call: {}", self.service_call),
            format!(
                "Torsion Springs (pair, 2-car insulated): {}",
                self.torsion_springs
            ),
            format!("Rollers + Tune-up (single door): {}", self.rollers),
            format!("Opener Replacement (belt drive, 2-car): {}", self.opener),
            format!("Panel Swap (2 panels, double insulated): {}", self.panel_swap),
            format!("Single Insulated Door: {}", self.single_door),
            format!("Double Insulated Door: {}", self.double_door),
            format!("Torsion Conversion: {}", self.torsion_conversion),
            format!(
                "Oil-Tempered Springs (wire up to .250, standard 16x7): up to ${PREMIUM_WIRE_CAP}"
            ),
            format!(
                "After-Hours: {:.1}x-{:.1}x scheduled rate",
                self.after_hours_multiplier.low, self.after_hours_multiplier.high
            ),
        ];
        lines.join("\n")
    }
}

impl Default for BaselinePricing {
    fn default() -> Self {
        Self::arizona()
    }
}

/// Builds the analyst request in the reply format `parse_ai_response` reads.
pub fn build_analysis_prompt(
    quote_text: &str,
    timing: JobTiming,
    door_setup: &str,
    baseline: &BaselinePricing,
) -> String {
    let multiplier_rule = match timing {
        JobTiming::AfterHours => format!(
            "{:.1}-{:.1}x multiplier",
            baseline.after_hours_multiplier.low, baseline.after_hours_multiplier.high
        ),
        JobTiming::Scheduled => "scheduled rates".to_string(),
    };

    format!(
        "Analyze this Arizona garage door service quote:

QUOTE:
{quote_text}

TIMING: {timing}
DOOR SETUP: {door_setup}

ARIZONA BASELINE PRICING:
{reference}

Provide analysis in this format:

VERDICT: [green/yellow/red]
PRICE_CONTEXT: [1-2 sentences explaining if price is fair, within baseline, or has multiplier]
RED_FLAGS: [list each concern on new line, or \"None seen\"]
VENDOR_QUESTIONS: [2-3 specific questions to ask the vendor]
NEXT_STEP: [clear recommendation: negotiate/compare/proceed/walk away]

Rules:
- GREEN: Within baseline or reasonable after-hours markup
- YELLOW: Slightly high or needs clarification
- RED: Significantly overpriced or risky
- Apply {multiplier_rule}
- Flag duplicate charges, vague warranties, unnecessary upsells
- Be concise and use plain English",
        reference = baseline.format_reference(),
    )
}
