use serde::{Deserialize, Serialize};

use crate::{PromoterType, Score, classify};

/// The outcome of one completed survey session.
///
/// A snapshot of the score and feedback at the moment of submission. The
/// promoter type is always derived from the score, never supplied separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RecordedResult")]
pub struct SurveyResult {
    score: Option<Score>,
    feedback: String,
    promoter_type: PromoterType,
}

impl SurveyResult {
    /// Build a result, classifying the score.
    pub fn new(score: Option<Score>, feedback: impl Into<String>) -> Self {
        Self {
            score,
            feedback: feedback.into(),
            promoter_type: classify(score),
        }
    }

    pub fn score(&self) -> Option<Score> {
        self.score
    }

    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    pub fn promoter_type(&self) -> PromoterType {
        self.promoter_type
    }
}

/// Wire form of a result; any serialized `promoter_type` is ignored and
/// re-derived from the score.
#[derive(Deserialize)]
struct RecordedResult {
    score: Option<Score>,
    #[serde(default)]
    feedback: String,
}

impl From<RecordedResult> for SurveyResult {
    fn from(recorded: RecordedResult) -> Self {
        Self::new(recorded.score, recorded.feedback)
    }
}
