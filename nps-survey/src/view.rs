//! Page views and the renderer seam.
//!
//! Views are rebuilt from controller state on every frame and hold nothing of
//! their own. A [`PageRenderer`] draws them and reports user actions through
//! the `emit` sink; it never touches session state.

use std::collections::{HashMap, VecDeque};

use crate::{
    FeedbackTexts, PromoterType, Score, ScoreTexts, SurveyEvent, SurveyPage, ThankYouTexts,
};

/// Everything the score page needs to draw itself.
#[derive(Debug, Clone, Copy)]
pub struct ScoreView<'a> {
    pub score: Option<Score>,
    pub texts: &'a ScoreTexts,
}

impl ScoreView<'_> {
    /// Continue is only offered once a score is selected.
    pub fn can_continue(&self) -> bool {
        self.score.is_some()
    }
}

/// Everything the feedback page needs to draw itself.
#[derive(Debug, Clone, Copy)]
pub struct FeedbackView<'a> {
    pub score: Option<Score>,
    pub feedback: &'a str,
    pub promoter_type: PromoterType,
    pub texts: &'a FeedbackTexts,
}

impl FeedbackView<'_> {
    /// Main label for the current promoter type.
    pub fn label(&self) -> &str {
        self.texts.label(self.promoter_type)
    }

    /// Placeholder for the current promoter type.
    pub fn placeholder(&self) -> &str {
        self.texts.placeholder(self.promoter_type)
    }
}

/// Everything the thank-you page needs to draw itself.
#[derive(Debug, Clone, Copy)]
pub struct ThankYouView<'a> {
    pub texts: &'a ThankYouTexts,
}

/// The view for exactly one page.
#[derive(Debug, Clone, Copy)]
pub enum PageView<'a> {
    Score(ScoreView<'a>),
    Feedback(FeedbackView<'a>),
    ThankYou(ThankYouView<'a>),
}

impl PageView<'_> {
    pub fn page(&self) -> SurveyPage {
        match self {
            Self::Score(_) => SurveyPage::Score,
            Self::Feedback(_) => SurveyPage::Feedback,
            Self::ThankYou(_) => SurveyPage::ThankYou,
        }
    }

    /// Draw this view with `renderer` and return the events it emitted, in
    /// the order they were emitted.
    pub fn render<R: PageRenderer + ?Sized>(&self, renderer: &mut R) -> Vec<SurveyEvent> {
        let mut events = Vec::new();
        let mut emit = |event: SurveyEvent| events.push(event);
        match self {
            Self::Score(view) => renderer.score_page(view, &mut emit),
            Self::Feedback(view) => renderer.feedback_page(view, &mut emit),
            Self::ThankYou(view) => renderer.thank_you_page(view, &mut emit),
        }
        events
    }
}

/// A presentation layer for the three pages.
///
/// Implementations call `emit` synchronously for each user action they
/// observe while drawing.
pub trait PageRenderer {
    fn score_page(&mut self, view: &ScoreView<'_>, emit: &mut dyn FnMut(SurveyEvent));

    fn feedback_page(&mut self, view: &FeedbackView<'_>, emit: &mut dyn FnMut(SurveyEvent));

    fn thank_you_page(&mut self, view: &ThankYouView<'_>, emit: &mut dyn FnMut(SurveyEvent));
}

/// A renderer that replays pre-defined user actions, one per frame.
///
/// Useful for driving a session in tests without a UI:
///
/// ```rust
/// use nps_survey::{Score, ScriptedRenderer, SurveyEvent, SurveyPage};
///
/// let renderer = ScriptedRenderer::new()
///     .on(SurveyPage::Score, SurveyEvent::ScoreChanged(Some(Score::new(9).unwrap())))
///     .on(SurveyPage::Score, SurveyEvent::Continue)
///     .on(SurveyPage::Feedback, SurveyEvent::Submit);
/// assert_eq!(renderer.pending(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedRenderer {
    script: HashMap<SurveyPage, VecDeque<SurveyEvent>>,
    rendered: Vec<SurveyPage>,
    feedback_labels: Vec<String>,
}

impl ScriptedRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `event` to be emitted the next time `page` is drawn.
    pub fn on(mut self, page: SurveyPage, event: SurveyEvent) -> Self {
        self.script.entry(page).or_default().push_back(event);
        self
    }

    /// Number of queued events not yet emitted.
    pub fn pending(&self) -> usize {
        self.script.values().map(VecDeque::len).sum()
    }

    /// Pages drawn so far, in order.
    pub fn rendered(&self) -> &[SurveyPage] {
        &self.rendered
    }

    /// Feedback labels shown so far, in order.
    pub fn feedback_labels(&self) -> &[String] {
        &self.feedback_labels
    }

    fn next(&mut self, page: SurveyPage, emit: &mut dyn FnMut(SurveyEvent)) {
        self.rendered.push(page);
        if let Some(event) = self.script.get_mut(&page).and_then(VecDeque::pop_front) {
            emit(event);
        }
    }
}

impl PageRenderer for ScriptedRenderer {
    fn score_page(&mut self, _view: &ScoreView<'_>, emit: &mut dyn FnMut(SurveyEvent)) {
        self.next(SurveyPage::Score, emit);
    }

    fn feedback_page(&mut self, view: &FeedbackView<'_>, emit: &mut dyn FnMut(SurveyEvent)) {
        self.feedback_labels.push(view.label().to_string());
        self.next(SurveyPage::Feedback, emit);
    }

    fn thank_you_page(&mut self, _view: &ThankYouView<'_>, emit: &mut dyn FnMut(SurveyEvent)) {
        self.next(SurveyPage::ThankYou, emit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TextBundle;

    #[test]
    fn render_dispatches_on_variant() {
        let texts = TextBundle::default();
        let mut renderer = ScriptedRenderer::new().on(SurveyPage::ThankYou, SurveyEvent::Close);

        let view = PageView::ThankYou(ThankYouView {
            texts: &texts.thank_you,
        });
        assert_eq!(view.page(), SurveyPage::ThankYou);
        assert_eq!(view.render(&mut renderer), vec![SurveyEvent::Close]);
        assert!(view.render(&mut renderer).is_empty());
        assert_eq!(
            renderer.rendered(),
            &[SurveyPage::ThankYou, SurveyPage::ThankYou]
        );
    }

    #[test]
    fn score_view_blocks_continue_until_selected() {
        let texts = TextBundle::default();
        let mut view = ScoreView {
            score: None,
            texts: &texts.score,
        };
        assert!(!view.can_continue());
        view.score = Some(Score::new(0).unwrap());
        assert!(view.can_continue());
    }
}
