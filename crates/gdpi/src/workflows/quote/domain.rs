use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Placeholder red flag used when nothing suspicious was found.
pub const NONE_SEEN: &str = "None seen";

/// Upper bound on vendor questions surfaced to a resident.
pub const MAX_VENDOR_QUESTIONS: usize = 3;

/// Severity classification attached to a price assessment.
///
/// Variants are declared in severity order, so the derived `Ord` ranks
/// `Green < Yellow < Red`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum QuoteVerdict {
    Green,
    #[default]
    Yellow,
    Red,
}

impl QuoteVerdict {
    pub fn rank(self) -> u8 {
        match self {
            QuoteVerdict::Green => 0,
            QuoteVerdict::Yellow => 1,
            QuoteVerdict::Red => 2,
        }
    }

    /// Returns whichever verdict is more severe; ties keep `self`.
    pub fn more_severe(self, other: QuoteVerdict) -> QuoteVerdict {
        if other.rank() > self.rank() {
            other
        } else {
            self
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            QuoteVerdict::Green => "green",
            QuoteVerdict::Yellow => "yellow",
            QuoteVerdict::Red => "red",
        }
    }

    /// Short resident-facing label.
    pub fn label(self) -> &'static str {
        match self {
            QuoteVerdict::Green => "FAIR PRICE",
            QuoteVerdict::Yellow => "ASK QUESTIONS",
            QuoteVerdict::Red => "OVERPRICED/RISKY",
        }
    }
}

impl fmt::Display for QuoteVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized verdict '{0}' (expected green, yellow, or red)")]
pub struct VerdictParseError(pub String);

impl FromStr for QuoteVerdict {
    type Err = VerdictParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "green" => Ok(QuoteVerdict::Green),
            "yellow" => Ok(QuoteVerdict::Yellow),
            "red" => Ok(QuoteVerdict::Red),
            _ => Err(VerdictParseError(value.to_string())),
        }
    }
}

/// When the work is performed; after-hours jobs carry a 1.4x-2.0x premium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobTiming {
    #[default]
    Scheduled,
    AfterHours,
}

impl JobTiming {
    pub fn as_str(self) -> &'static str {
        match self {
            JobTiming::Scheduled => "scheduled",
            JobTiming::AfterHours => "after-hours",
        }
    }

    pub fn is_after_hours(self) -> bool {
        matches!(self, JobTiming::AfterHours)
    }
}

impl fmt::Display for JobTiming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized job timing '{0}' (expected scheduled or after-hours)")]
pub struct TimingParseError(pub String);

impl FromStr for JobTiming {
    type Err = TimingParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "scheduled" => Ok(JobTiming::Scheduled),
            "after-hours" | "after_hours" | "afterhours" => Ok(JobTiming::AfterHours),
            _ => Err(TimingParseError(value.to_string())),
        }
    }
}

/// Job context supplied alongside the quote text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DoorContext {
    #[serde(default)]
    pub door_setup: Option<String>,
    pub timing: JobTiming,
}

impl DoorContext {
    pub fn new(door_setup: impl Into<String>, timing: JobTiming) -> Self {
        Self {
            door_setup: Some(door_setup.into()),
            timing,
        }
    }

    pub fn door_setup(&self) -> &str {
        self.door_setup.as_deref().unwrap_or("")
    }
}

/// Structured assessment shown to the resident.
///
/// `red_flags` is never empty (see [`NONE_SEEN`]) and `vendor_questions` holds
/// at most [`MAX_VENDOR_QUESTIONS`] entries, most important first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub verdict: QuoteVerdict,
    pub price_context: String,
    pub red_flags: Vec<String>,
    pub vendor_questions: Vec<String>,
    pub next_step: String,
}

impl AnalysisResult {
    /// Restores the red-flag sentinel and the vendor-question cap.
    pub fn normalized(mut self) -> Self {
        if self.red_flags.is_empty() {
            self.red_flags.push(NONE_SEEN.to_string());
        }
        self.vendor_questions.truncate(MAX_VENDOR_QUESTIONS);
        self
    }

    /// True when at least one real red flag (not the sentinel) is present.
    pub fn has_red_flags(&self) -> bool {
        self.red_flags.iter().any(|flag| !is_none_seen(flag))
    }
}

pub(crate) fn is_none_seen(flag: &str) -> bool {
    flag.trim().eq_ignore_ascii_case(NONE_SEEN)
}
