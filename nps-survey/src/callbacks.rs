use crate::{Score, SurveyResult};

type CloseFn = Box<dyn FnMut()>;
type ScoreChangedFn = Box<dyn FnMut(Option<Score>)>;
type FeedbackChangedFn = Box<dyn FnMut(&str)>;
type CompletedFn = Box<dyn FnMut(&SurveyResult)>;

/// Host-supplied hooks fired by the controller.
///
/// Every hook is optional; an absent hook is simply skipped.
#[derive(Default)]
pub struct SurveyCallbacks {
    on_close: Option<CloseFn>,
    on_score_changed: Option<ScoreChangedFn>,
    on_feedback_changed: Option<FeedbackChangedFn>,
    on_survey_completed: Option<CompletedFn>,
}

impl SurveyCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called each time the close button is pressed.
    pub fn on_close(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_close = Some(Box::new(f));
        self
    }

    /// Called on every score selection change.
    pub fn on_score_changed(mut self, f: impl FnMut(Option<Score>) + 'static) -> Self {
        self.on_score_changed = Some(Box::new(f));
        self
    }

    /// Called on every feedback edit, without debouncing.
    pub fn on_feedback_changed(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.on_feedback_changed = Some(Box::new(f));
        self
    }

    /// Called once per session, when the feedback is submitted.
    pub fn on_survey_completed(mut self, f: impl FnMut(&SurveyResult) + 'static) -> Self {
        self.on_survey_completed = Some(Box::new(f));
        self
    }

    pub(crate) fn close(&mut self) {
        if let Some(f) = self.on_close.as_mut() {
            f();
        }
    }

    pub(crate) fn score_changed(&mut self, score: Option<Score>) {
        if let Some(f) = self.on_score_changed.as_mut() {
            f(score);
        }
    }

    pub(crate) fn feedback_changed(&mut self, feedback: &str) {
        if let Some(f) = self.on_feedback_changed.as_mut() {
            f(feedback);
        }
    }

    pub(crate) fn survey_completed(&mut self, result: &SurveyResult) {
        if let Some(f) = self.on_survey_completed.as_mut() {
            f(result);
        }
    }
}

impl std::fmt::Debug for SurveyCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SurveyCallbacks")
            .field("on_close", &self.on_close.is_some())
            .field("on_score_changed", &self.on_score_changed.is_some())
            .field("on_feedback_changed", &self.on_feedback_changed.is_some())
            .field("on_survey_completed", &self.on_survey_completed.is_some())
            .finish()
    }
}
