use super::config::TorsionBenchmarks;
use super::keywords::{
    CENTER_BEARING, MULTI_DOOR_KEYWORDS, OIL_TEMPERED_KEYWORDS, OVERSIZE_OR_SPECIAL_KEYWORDS,
    SPRING_KEYWORDS, TORSION_OTHER_PART_KEYWORDS,
};
use crate::workflows::quote::amount::format_dollars;
use crate::workflows::quote::domain::QuoteVerdict;
use crate::workflows::quote::normalizer::contains_any;

const SPRINGS_ONLY_QUESTION: &str = "Can you help me understand what is included beyond springs \
(service call, tune-up, bearings/cables, disposal/fees) and why the price is above a typical \
springs-only benchmark?";

const ITEMIZED_QUESTION: &str = "Would you mind walking me through an itemized breakdown \
(springs, parts like cables/bearings, labor, service call, and any fees) and confirming exactly \
which torsion-system parts are being replaced?";

const CENTER_BEARING_QUESTION: &str = "Can you help me understand why the center bearing is \
charged separately? Many companies include the center bearing with a spring job unless it is \
damaged.";

/// Keyword signals detected in normalized quote text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct QuoteSignals {
    pub springs: bool,
    pub other_torsion_parts: bool,
    pub oil_tempered: bool,
    pub center_bearing: bool,
    pub multi_door: bool,
    pub oversize_or_special: bool,
}

impl QuoteSignals {
    pub(crate) fn detect(normalized: &str) -> Self {
        Self {
            springs: contains_any(normalized, SPRING_KEYWORDS),
            other_torsion_parts: contains_any(normalized, TORSION_OTHER_PART_KEYWORDS),
            oil_tempered: contains_any(normalized, OIL_TEMPERED_KEYWORDS),
            center_bearing: normalized.contains(CENTER_BEARING),
            multi_door: contains_any(normalized, MULTI_DOOR_KEYWORDS),
            oversize_or_special: contains_any(normalized, OVERSIZE_OR_SPECIAL_KEYWORDS),
        }
    }
}

/// A quote priced above the applicable benchmark, before exceptions.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BenchmarkOverage {
    pub verdict: QuoteVerdict,
    pub red_flag: String,
    pub vendor_question: String,
}

/// Compares the amount against the springs-only or springs-plus-parts ceiling.
///
/// Springs-only quotes are only judged when oil-tempered springs are named
/// explicitly, since that ceiling is calibrated to oil-tempered pricing.
pub(crate) fn benchmark_overage(
    signals: &QuoteSignals,
    amount: f64,
    benchmarks: &TorsionBenchmarks,
) -> Option<BenchmarkOverage> {
    let quoted = format_dollars(amount.round());

    if !signals.other_torsion_parts {
        if !signals.oil_tempered {
            tracing::debug!("springs-only quote without oil-tempered mention; skipping benchmark");
            return None;
        }

        if amount <= benchmarks.springs_only_ceiling {
            return None;
        }

        return Some(BenchmarkOverage {
            verdict: QuoteVerdict::Red,
            red_flag: format!(
                "Oil-tempered springs-only on a standard 16×7 door is a red flag when over {} (quoted {}).",
                format_dollars(benchmarks.springs_only_ceiling),
                quoted
            ),
            vendor_question: SPRINGS_ONLY_QUESTION.to_string(),
        });
    }

    if amount <= benchmarks.springs_plus_parts_ceiling {
        return None;
    }

    let vendor_question = if signals.center_bearing {
        CENTER_BEARING_QUESTION
    } else {
        ITEMIZED_QUESTION
    };

    Some(BenchmarkOverage {
        verdict: QuoteVerdict::Red,
        red_flag: format!(
            "Springs plus any other torsion-system part on a standard 16×7 door is a red flag when over {} (quoted {}).",
            format_dollars(benchmarks.springs_plus_parts_ceiling),
            quoted
        ),
        vendor_question: vendor_question.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::quote::normalizer::normalize_text;

    fn signals(text: &str) -> QuoteSignals {
        QuoteSignals::detect(&normalize_text(text))
    }

    #[test]
    fn detects_parts_and_spring_grade() {
        let detected = signals("Replace OIL-TEMPERED springs, new center bearing");
        assert!(detected.springs);
        assert!(detected.oil_tempered);
        assert!(detected.other_torsion_parts);
        assert!(detected.center_bearing);
        assert!(!detected.multi_door);
    }

    #[test]
    fn springs_only_ceiling_is_strict() {
        let benchmarks = TorsionBenchmarks::default();
        let detected = signals("oil tempered springs only");

        assert!(benchmark_overage(&detected, 675.0, &benchmarks).is_none());
        let overage = benchmark_overage(&detected, 675.01, &benchmarks).expect("over ceiling");
        assert_eq!(overage.verdict, QuoteVerdict::Red);
        assert!(overage.red_flag.contains("over $675"));
        assert!(overage.red_flag.contains("quoted $675"));
    }

    #[test]
    fn center_bearing_replaces_itemized_question() {
        let benchmarks = TorsionBenchmarks::default();
        let overage = benchmark_overage(
            &signals("springs and center bearing"),
            900.0,
            &benchmarks,
        )
        .expect("over ceiling");

        assert!(overage.vendor_question.contains("center bearing"));
        assert!(!overage.vendor_question.contains("itemized"));
    }

    #[test]
    fn configured_ceilings_are_respected() {
        let benchmarks = TorsionBenchmarks {
            springs_only_ceiling: 600.0,
            springs_plus_parts_ceiling: 650.0,
        };
        let overage = benchmark_overage(&signals("springs and drums"), 660.0, &benchmarks)
            .expect("over configured ceiling");
        assert!(overage.red_flag.contains("over $650"));
    }
}
