//! # nps-survey
//!
//! A Net Promoter Score survey flow: score selection, feedback, thank-you.
//! Presentation-agnostic; GUI hosts live in separate crates
//! (`nps-survey-egui` renders the flow as a modal sheet).
//!
//! This crate provides:
//! - `classify` and `PromoterType` - The fixed 0-6 / 7-8 / 9-10 bucketing
//! - `SurveyController` - The three-page state machine
//! - `PageView` and `PageRenderer` - The seam a presentation layer implements
//! - `SurveySession` and `SessionEnded` - Dismissal lifecycle, including the
//!   delayed auto-dismiss after completion
//! - `TextBundle` - Display strings, loadable from partial JSON
//!
//! ## Usage
//!
//! ```rust
//! use std::time::Duration;
//! use nps_survey::{
//!     PromoterType, Score, ScriptedRenderer, SurveyCallbacks, SurveyEvent, SurveyPage,
//!     SurveySession, TextBundle,
//! };
//!
//! let (mut session, _ended) = SurveySession::open(TextBundle::default(), SurveyCallbacks::new());
//! let mut renderer = ScriptedRenderer::new()
//!     .on(SurveyPage::Score, SurveyEvent::ScoreChanged(Some(Score::new(9).unwrap())))
//!     .on(SurveyPage::Score, SurveyEvent::Continue)
//!     .on(SurveyPage::Feedback, SurveyEvent::Submit);
//!
//! for _ in 0..3 {
//!     session.render(&mut renderer, Duration::ZERO).unwrap();
//! }
//!
//! let result = session.controller().result().unwrap();
//! assert_eq!(result.promoter_type(), PromoterType::Promoter);
//! ```

mod promoter;
pub use promoter::{PromoterType, Score, classify};

mod page;
pub use page::SurveyPage;

mod text_bundle;
pub use text_bundle::{FeedbackTexts, ScoreTexts, TextBundle, ThankYouTexts};

mod result;
pub use result::SurveyResult;

mod callbacks;
pub use callbacks::SurveyCallbacks;

mod controller;
pub use controller::{FlowSignal, SurveyController, SurveyEvent};

mod view;
pub use view::{FeedbackView, PageRenderer, PageView, ScoreView, ScriptedRenderer, ThankYouView};

mod session;
pub use session::{AUTO_DISMISS_DELAY, DismissReason, SessionEnded, SurveySession};

mod error;
pub use error::{FlowError, ScoreError, TextBundleError};
