//! The page-sequencing state machine.

use tracing::{debug, info, warn};

use crate::{
    FeedbackView, FlowError, PageView, PromoterType, Score, ScoreView, SurveyCallbacks,
    SurveyPage, SurveyResult, TextBundle, ThankYouView, classify,
};

/// A user action surfaced by one of the page views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurveyEvent {
    /// A score was selected (or cleared) on the score page.
    ScoreChanged(Option<Score>),
    /// Continue from the score page to the feedback page.
    Continue,
    /// The feedback text was edited; carries the full new text.
    FeedbackChanged(String),
    /// Go back from the feedback page to change the score.
    EditScore,
    /// Submit the survey from the feedback page.
    Submit,
    /// The close button was pressed, on any page.
    Close,
}

impl SurveyEvent {
    /// Get the event name for errors and logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ScoreChanged(_) => "score-changed",
            Self::Continue => "continue",
            Self::FeedbackChanged(_) => "feedback-changed",
            Self::EditScore => "edit-score",
            Self::Submit => "submit",
            Self::Close => "close",
        }
    }
}

/// What the host has to do after an event was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowSignal {
    /// Nothing beyond showing the (possibly new) current page.
    None,
    /// The user asked to close; the host dismisses the container.
    CloseRequested,
    /// The survey was just submitted; the host schedules auto-dismiss.
    Completed,
}

/// Owns the state of one survey session and applies [`SurveyEvent`]s to it.
#[derive(Debug)]
pub struct SurveyController {
    page: SurveyPage,
    score: Option<Score>,
    feedback: String,
    texts: TextBundle,
    callbacks: SurveyCallbacks,
    result: Option<SurveyResult>,
}

impl SurveyController {
    /// Create a controller positioned on the score page.
    pub fn new(texts: TextBundle, callbacks: SurveyCallbacks) -> Self {
        Self {
            page: SurveyPage::INITIAL,
            score: None,
            feedback: String::new(),
            texts,
            callbacks,
            result: None,
        }
    }

    pub fn page(&self) -> SurveyPage {
        self.page
    }

    pub fn score(&self) -> Option<Score> {
        self.score
    }

    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    pub fn texts(&self) -> &TextBundle {
        &self.texts
    }

    /// Classification of the current score.
    pub fn promoter_type(&self) -> PromoterType {
        classify(self.score)
    }

    /// The submitted result, once the survey is complete.
    pub fn result(&self) -> Option<&SurveyResult> {
        self.result.as_ref()
    }

    pub fn is_completed(&self) -> bool {
        self.result.is_some()
    }

    /// The view for the current page, built from current state.
    pub fn view(&self) -> PageView<'_> {
        match self.page {
            SurveyPage::Score => PageView::Score(ScoreView {
                score: self.score,
                texts: &self.texts.score,
            }),
            SurveyPage::Feedback => PageView::Feedback(FeedbackView {
                score: self.score,
                feedback: &self.feedback,
                promoter_type: self.promoter_type(),
                texts: &self.texts.feedback,
            }),
            SurveyPage::ThankYou => PageView::ThankYou(ThankYouView {
                texts: &self.texts.thank_you,
            }),
        }
    }

    /// Apply one event.
    ///
    /// On error nothing changes and no callback fires.
    pub fn handle(&mut self, event: SurveyEvent) -> Result<FlowSignal, FlowError> {
        debug!(page = %self.page, event = event.name(), "survey event");

        match (self.page, event) {
            (_, SurveyEvent::Close) => {
                self.callbacks.close();
                Ok(FlowSignal::CloseRequested)
            }
            (SurveyPage::Score, SurveyEvent::ScoreChanged(score)) => {
                self.score = score;
                self.callbacks.score_changed(score);
                Ok(FlowSignal::None)
            }
            (SurveyPage::Score, SurveyEvent::Continue) => {
                if self.score.is_none() {
                    warn!("continue requested without a score");
                    return Err(FlowError::ScoreRequired);
                }
                self.go_to(SurveyPage::Feedback);
                Ok(FlowSignal::None)
            }
            (SurveyPage::Feedback, SurveyEvent::FeedbackChanged(feedback)) => {
                self.callbacks.feedback_changed(&feedback);
                self.feedback = feedback;
                Ok(FlowSignal::None)
            }
            (SurveyPage::Feedback, SurveyEvent::EditScore) => {
                self.go_to(SurveyPage::Score);
                Ok(FlowSignal::None)
            }
            (SurveyPage::Feedback, SurveyEvent::Submit) => {
                if self.result.is_some() {
                    return Err(FlowError::AlreadyCompleted);
                }
                let result = SurveyResult::new(self.score, self.feedback.clone());
                info!(
                    score = ?result.score().map(Score::value),
                    promoter_type = %result.promoter_type(),
                    "survey completed"
                );
                self.callbacks.survey_completed(&result);
                self.result = Some(result);
                self.go_to(SurveyPage::ThankYou);
                Ok(FlowSignal::Completed)
            }
            (SurveyPage::ThankYou, SurveyEvent::Submit) => Err(FlowError::AlreadyCompleted),
            (page, event) => Err(FlowError::unexpected(page, &event)),
        }
    }

    fn go_to(&mut self, to: SurveyPage) {
        assert!(
            self.page.can_transition_to(to),
            "illegal survey transition {} -> {}",
            self.page,
            to
        );
        debug!(from = %self.page, to = %to, "survey page");
        self.page = to;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn score(value: u8) -> Option<Score> {
        Some(Score::new(value).unwrap())
    }

    fn controller() -> SurveyController {
        SurveyController::new(TextBundle::default(), SurveyCallbacks::new())
    }

    #[test]
    fn starts_on_score_page() {
        let controller = controller();
        assert_eq!(controller.page(), SurveyPage::Score);
        assert_eq!(controller.score(), None);
        assert_eq!(controller.feedback(), "");
        assert!(matches!(controller.view(), PageView::Score(_)));
    }

    #[test]
    fn continue_requires_a_score() {
        let mut controller = controller();
        assert_eq!(
            controller.handle(SurveyEvent::Continue),
            Err(FlowError::ScoreRequired)
        );
        assert_eq!(controller.page(), SurveyPage::Score);
    }

    #[test]
    fn score_changes_fire_callback() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut controller = SurveyController::new(
            TextBundle::default(),
            SurveyCallbacks::new().on_score_changed(move |s| sink.borrow_mut().push(s)),
        );

        controller.handle(SurveyEvent::ScoreChanged(score(3))).unwrap();
        controller.handle(SurveyEvent::ScoreChanged(score(9))).unwrap();

        assert_eq!(*seen.borrow(), vec![score(3), score(9)]);
        assert_eq!(controller.score(), score(9));
    }

    #[test]
    fn edit_score_keeps_state() {
        let mut controller = controller();
        controller.handle(SurveyEvent::ScoreChanged(score(5))).unwrap();
        controller.handle(SurveyEvent::Continue).unwrap();
        controller
            .handle(SurveyEvent::FeedbackChanged("slow".into()))
            .unwrap();

        controller.handle(SurveyEvent::EditScore).unwrap();
        assert_eq!(controller.page(), SurveyPage::Score);
        assert_eq!(controller.score(), score(5));
        assert_eq!(controller.feedback(), "slow");

        controller.handle(SurveyEvent::Continue).unwrap();
        assert_eq!(controller.page(), SurveyPage::Feedback);
        assert_eq!(controller.feedback(), "slow");
    }

    #[test]
    fn feedback_view_copy_tracks_score() {
        let mut controller = controller();
        controller.handle(SurveyEvent::ScoreChanged(score(2))).unwrap();
        controller.handle(SurveyEvent::Continue).unwrap();
        let PageView::Feedback(view) = controller.view() else {
            panic!("expected feedback view");
        };
        assert_eq!(view.label(), controller.texts().feedback.detractor_label);

        controller.handle(SurveyEvent::EditScore).unwrap();
        controller.handle(SurveyEvent::ScoreChanged(score(9))).unwrap();
        controller.handle(SurveyEvent::Continue).unwrap();
        let PageView::Feedback(view) = controller.view() else {
            panic!("expected feedback view");
        };
        assert_eq!(view.label(), controller.texts().feedback.promoter_label);
        assert_eq!(
            view.placeholder(),
            controller.texts().feedback.promoter_placeholder
        );
    }

    #[test]
    fn events_from_other_pages_are_rejected() {
        let mut controller = controller();
        assert_eq!(
            controller.handle(SurveyEvent::Submit),
            Err(FlowError::UnexpectedEvent {
                page: SurveyPage::Score,
                event: "submit",
            })
        );
        assert!(controller.handle(SurveyEvent::EditScore).is_err());
        assert!(
            controller
                .handle(SurveyEvent::FeedbackChanged("x".into()))
                .is_err()
        );
        assert_eq!(controller.page(), SurveyPage::Score);
        assert_eq!(controller.feedback(), "");

        controller.handle(SurveyEvent::ScoreChanged(score(1))).unwrap();
        controller.handle(SurveyEvent::Continue).unwrap();
        assert!(controller.handle(SurveyEvent::Continue).is_err());
        assert!(controller.handle(SurveyEvent::ScoreChanged(score(4))).is_err());
        assert_eq!(controller.score(), score(1));
    }

    #[test]
    fn submit_is_single_shot() {
        let completions = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&completions);
        let mut controller = SurveyController::new(
            TextBundle::default(),
            SurveyCallbacks::new().on_survey_completed(move |_| *counter.borrow_mut() += 1),
        );

        controller.handle(SurveyEvent::ScoreChanged(score(7))).unwrap();
        controller.handle(SurveyEvent::Continue).unwrap();
        assert_eq!(
            controller.handle(SurveyEvent::Submit),
            Ok(FlowSignal::Completed)
        );
        assert_eq!(
            controller.handle(SurveyEvent::Submit),
            Err(FlowError::AlreadyCompleted)
        );

        assert_eq!(*completions.borrow(), 1);
        assert_eq!(
            controller.result(),
            Some(&SurveyResult::new(score(7), ""))
        );
        assert!(matches!(controller.view(), PageView::ThankYou(_)));
    }

    #[test]
    fn close_is_accepted_on_every_page() {
        let closes = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&closes);
        let mut controller = SurveyController::new(
            TextBundle::default(),
            SurveyCallbacks::new().on_close(move || *counter.borrow_mut() += 1),
        );

        assert_eq!(
            controller.handle(SurveyEvent::Close),
            Ok(FlowSignal::CloseRequested)
        );
        controller.handle(SurveyEvent::ScoreChanged(score(10))).unwrap();
        controller.handle(SurveyEvent::Continue).unwrap();
        controller.handle(SurveyEvent::Close).unwrap();
        controller.handle(SurveyEvent::Submit).unwrap();
        controller.handle(SurveyEvent::Close).unwrap();

        assert_eq!(*closes.borrow(), 3);
        assert_eq!(controller.page(), SurveyPage::ThankYou);
    }
}
