use serde::{Deserialize, Serialize};

use crate::ScoreError;

/// A single answer on the 0–10 recommendation scale.
///
/// The value is range-checked on construction, so a `Score` held anywhere in
/// the crate is always within `Score::MIN..=Score::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Score(u8);

impl Score {
    /// Lowest selectable score.
    pub const MIN: u8 = 0;

    /// Highest selectable score.
    pub const MAX: u8 = 10;

    /// Create a score, rejecting values above [`Score::MAX`].
    pub fn new(value: u8) -> Result<Self, ScoreError> {
        if value > Self::MAX {
            return Err(ScoreError::OutOfRange(i64::from(value)));
        }
        Ok(Self(value))
    }

    /// The raw value.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Every selectable score in ascending order, for rendering the scale.
    pub fn all() -> impl DoubleEndedIterator<Item = Score> + ExactSizeIterator {
        (Self::MIN..=Self::MAX).map(Score)
    }

    /// Classification of this score.
    pub fn promoter_type(self) -> PromoterType {
        classify(Some(self))
    }
}

impl TryFrom<u8> for Score {
    type Error = ScoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i64> for Score {
    type Error = ScoreError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map_err(|_| ScoreError::OutOfRange(value))
            .and_then(Self::new)
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The NPS bucket a respondent falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromoterType {
    /// Scores 0 through 6 (and no score at all).
    Detractor,
    /// Scores 7 and 8.
    Passive,
    /// Scores 9 and 10.
    Promoter,
}

impl PromoterType {
    /// Get the name of this bucket for display and logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Detractor => "detractor",
            Self::Passive => "passive",
            Self::Promoter => "promoter",
        }
    }
}

impl std::fmt::Display for PromoterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Highest score still counted as a detractor.
const DETRACTOR_MAX: u8 = 6;

/// Highest score still counted as passive.
const PASSIVE_MAX: u8 = 8;

/// Map an optional score to its NPS bucket.
///
/// An unset score is classified as [`PromoterType::Detractor`]. This mirrors
/// the behavior hosts already depend on, but it is a fallback rather than a
/// product rule: the controller refuses to leave the score page without a
/// score, so a completed survey never reaches this arm.
pub fn classify(score: Option<Score>) -> PromoterType {
    match score.map(Score::value) {
        None => PromoterType::Detractor,
        Some(value) if value <= DETRACTOR_MAX => PromoterType::Detractor,
        Some(value) if value <= PASSIVE_MAX => PromoterType::Passive,
        Some(_) => PromoterType::Promoter,
    }
}
