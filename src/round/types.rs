use serde::{Deserialize, Serialize};

/// Round-wide sequence id of an argument unit.
pub type AduId = i64;

/// A debate round as handed over by the round-retrieval service.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Round {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_uploaded: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// Speeches in speaking order
    #[serde(default)]
    pub speeches: Vec<Speech>,
    #[serde(default)]
    pub rebuttals: Vec<Rebuttal>,
    /// Argument units flagged as points of information
    #[serde(default)]
    pub pois: Vec<AduId>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Speech {
    #[serde(default)]
    pub argument_units: Vec<ArgumentUnit>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ArgumentUnit {
    pub sequence_id: AduId,
    #[serde(default)]
    pub start: f64,
    #[serde(default)]
    pub end: f64,
    #[serde(default)]
    pub text: String,
}

/// Directed rebuttal: `src` attacks `tgt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Rebuttal {
    pub src: AduId,
    pub tgt: AduId,
}

/// Attack edge as used by the scorers. Same shape as [`Rebuttal`].
pub type Attack = Rebuttal;

impl Rebuttal {
    pub fn new(src: AduId, tgt: AduId) -> Self {
        Self { src, tgt }
    }
}

/// Structural counts for a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoundSummary {
    pub poi_count: usize,
    pub rebuttal_count: usize,
    pub speech_count: usize,
    pub total_argument_units: usize,
}

impl Round {
    pub fn summary(&self) -> RoundSummary {
        RoundSummary {
            poi_count: self.pois.len(),
            rebuttal_count: self.rebuttals.len(),
            speech_count: self.speeches.len(),
            total_argument_units: self
                .speeches
                .iter()
                .map(|speech| speech.argument_units.len())
                .sum(),
        }
    }

    /// Label for display: title, then video id, then round id.
    pub fn label(&self) -> Option<String> {
        self.title
            .clone()
            .or_else(|| self.video_id.clone())
            .or_else(|| self.id.map(|id| format!("round {}", id)))
    }
}
