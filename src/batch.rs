use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::assistant::Assistant;
use crate::models::{Category, RiskLevel};

#[derive(Debug, Deserialize)]
struct MessageRow {
    #[serde(default)]
    id: Option<String>,
    message: String,
}

#[derive(Debug, Serialize)]
struct AssessmentRow {
    id: String,
    risk: RiskLevel,
    category: Option<Category>,
    sad: Option<usize>,
    stressed: Option<usize>,
    anxious: Option<usize>,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub assessed: usize,
    pub high_risk: usize,
    pub skipped: usize,
}

/// Reads a CSV with a `message` column (and optional `id`) and writes one
/// assessment row per non-blank message. Rows without an id are numbered
/// by their 1-based position in the input.
pub fn assess_csv<R: Read, W: Write>(
    assistant: &Assistant,
    input: R,
    output: W,
) -> anyhow::Result<BatchSummary> {
    let mut reader = csv::Reader::from_reader(input);
    let mut writer = csv::Writer::from_writer(output);
    let mut summary = BatchSummary::default();

    for (index, result) in reader.deserialize::<MessageRow>().enumerate() {
        let row = result?;
        let id = row.id.unwrap_or_else(|| (index + 1).to_string());
        let message = row.message.trim();

        if message.is_empty() {
            tracing::warn!(%id, "skipping blank message");
            summary.skipped += 1;
            continue;
        }

        let assessment = assistant.assess(message);
        if assessment.risk.is_high() {
            summary.high_risk += 1;
        }

        writer.serialize(AssessmentRow {
            id,
            risk: assessment.risk,
            category: assessment.category,
            sad: assessment.scores.map(|s| s.sad),
            stressed: assessment.scores.map(|s| s.stressed),
            anxious: assessment.scores.map(|s| s.anxious),
        })?;
        summary.assessed += 1;
    }

    writer.flush()?;
    Ok(summary)
}
