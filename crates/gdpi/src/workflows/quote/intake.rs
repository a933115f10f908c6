use serde::{Deserialize, Serialize};

use super::domain::JobTiming;

/// Coarse job category recorded alongside a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobType {
    TorsionSprings,
    Rollers,
    OpenerReplacement,
    PanelSwap,
    DoorReplacement,
    GeneralService,
}

impl JobType {
    pub fn label(self) -> &'static str {
        match self {
            JobType::TorsionSprings => "Torsion springs",
            JobType::Rollers => "Rollers",
            JobType::OpenerReplacement => "Opener replacement",
            JobType::PanelSwap => "Panel swap",
            JobType::DoorReplacement => "Door replacement",
            JobType::GeneralService => "General service",
        }
    }
}

/// First matching keyword wins, springs first.
pub fn classify_job_type(text: &str) -> JobType {
    let lower = text.to_lowercase();
    if lower.contains("spring") {
        JobType::TorsionSprings
    } else if lower.contains("roller") {
        JobType::Rollers
    } else if lower.contains("opener") {
        JobType::OpenerReplacement
    } else if lower.contains("panel") {
        JobType::PanelSwap
    } else if lower.contains("door") {
        JobType::DoorReplacement
    } else {
        JobType::GeneralService
    }
}

/// Parts checklist from the manual entry form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteParts {
    pub torsion_springs: bool,
    pub rollers: bool,
    pub hinges: bool,
    pub cables: bool,
    pub opener: bool,
    pub panels: bool,
    pub full_door: bool,
    pub other: Option<String>,
}

impl QuoteParts {
    pub fn selected(&self) -> Vec<String> {
        let checklist = [
            (self.torsion_springs, "Torsion springs"),
            (self.rollers, "Rollers"),
            (self.hinges, "Hinges"),
            (self.cables, "Cables"),
            (self.opener, "Opener"),
            (self.panels, "Panels"),
            (self.full_door, "Full door"),
        ];

        let mut parts: Vec<String> = checklist
            .iter()
            .filter(|(checked, _)| *checked)
            .map(|(_, label)| label.to_string())
            .collect();

        if let Some(other) = self.other.as_deref().map(str::trim) {
            if !other.is_empty() {
                parts.push(other.to_string());
            }
        }

        parts
    }
}

/// Line items typed in by the resident instead of (or alongside) pasted text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualQuoteEntry {
    #[serde(default)]
    pub parts: QuoteParts,
    #[serde(default)]
    pub labor_cost: String,
    #[serde(default)]
    pub notes: String,
}

impl ManualQuoteEntry {
    /// Renders the form as quote-like lines so the amount extractor and the
    /// keyword heuristics can read it.
    pub fn render(&self) -> String {
        let mut lines = Vec::new();

        let parts = self.parts.selected();
        if !parts.is_empty() {
            lines.push(format!("Parts: {}", parts.join(", ")));
        }

        let labor = self.labor_cost.trim().trim_start_matches('$').trim();
        if !labor.is_empty() {
            lines.push(format!("Labor: ${labor}"));
        }

        let notes = self.notes.trim();
        if !notes.is_empty() {
            lines.push(format!("Notes: {notes}"));
        }

        lines.join("\n")
    }
}

/// A resident's request to analyze one quote.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteSubmission {
    pub hoa_id: String,
    #[serde(default)]
    pub quote_text: String,
    #[serde(default)]
    pub manual: Option<ManualQuoteEntry>,
    #[serde(default)]
    pub timing: JobTiming,
    #[serde(default)]
    pub door_setup: String,
}

impl QuoteSubmission {
    /// Concatenates pasted text and manual fields into the single input blob
    /// the analyst and the heuristics both see.
    pub fn input_text(&self) -> String {
        let mut sections = Vec::new();

        let pasted = self.quote_text.trim();
        if !pasted.is_empty() {
            sections.push(pasted.to_string());
        }

        if let Some(manual) = &self.manual {
            let rendered = manual.render();
            if !rendered.is_empty() {
                sections.push(rendered);
            }
        }

        sections.join("\n")
    }
}
