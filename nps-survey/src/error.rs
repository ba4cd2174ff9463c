use crate::{SurveyEvent, SurveyPage};

/// A score outside the 0–10 scale.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoreError {
    #[error("Score {0} is outside the 0-10 scale")]
    OutOfRange(i64),
}

/// Error type for events the controller refuses to apply.
///
/// None of these are recoverable runtime conditions: views only emit events
/// that belong to their own page, and the score view disables its continue
/// button while no score is selected. State is left untouched on error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FlowError {
    /// Continue was requested before a score was chosen.
    #[error("A score must be selected before continuing")]
    ScoreRequired,

    /// The event is not emitted by the view for the current page.
    #[error("Event '{event}' is not valid on the {page} page")]
    UnexpectedEvent {
        page: SurveyPage,
        event: &'static str,
    },

    /// Submit was requested after the result was already built.
    #[error("Survey already completed")]
    AlreadyCompleted,
}

impl FlowError {
    pub(crate) fn unexpected(page: SurveyPage, event: &SurveyEvent) -> Self {
        Self::UnexpectedEvent {
            page,
            event: event.name(),
        }
    }
}

/// Error type for loading a text bundle.
#[derive(Debug, thiserror::Error)]
pub enum TextBundleError {
    #[error("Invalid text bundle: {0}")]
    Parse(#[from] serde_json::Error),
}
