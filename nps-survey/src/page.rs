use serde::{Deserialize, Serialize};

/// One of the three screens of the survey flow, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurveyPage {
    /// Pick a score on the 0–10 scale.
    Score,
    /// Optional free-text feedback.
    Feedback,
    /// Final acknowledgement; the session ends when the host dismisses it.
    ThankYou,
}

impl SurveyPage {
    /// The page every session starts on.
    pub const INITIAL: Self = Self::Score;

    /// Whether the flow can move directly from `self` to `to`.
    ///
    /// Forward moves follow presentation order one step at a time; the only
    /// backward move is feedback back to score.
    pub fn can_transition_to(self, to: SurveyPage) -> bool {
        matches!(
            (self, to),
            (Self::Score, Self::Feedback)
                | (Self::Feedback, Self::Score)
                | (Self::Feedback, Self::ThankYou)
        )
    }

    /// Whether this is the last page of the flow.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::ThankYou)
    }

    /// Get the page name for display and logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Score => "score",
            Self::Feedback => "feedback",
            Self::ThankYou => "thank-you",
        }
    }
}

impl Default for SurveyPage {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl std::fmt::Display for SurveyPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
