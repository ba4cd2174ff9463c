//! Configuration and entry points for a survey session.

use std::cell::RefCell;
use std::rc::Rc;

use eframe::egui;
use nps_survey::{Score, SessionEnded, SurveyCallbacks, SurveyResult, SurveySession, TextBundle};
use thiserror::Error;
use tracing::info;

use crate::modal::ActiveSurvey;
use crate::{SurveyModal, SurveyTheme};

/// Error type for the standalone runner.
#[derive(Debug, Error)]
pub enum EguiError {
    /// The window was closed before the survey was submitted.
    #[error("Survey cancelled by user")]
    Cancelled,

    /// An error occurred in the egui/eframe backend.
    #[error("Egui error: {0}")]
    EguiError(String),
}

/// Builder for one survey session.
///
/// Everything is optional: theme and texts fall back to their defaults, and
/// callbacks that are not set are skipped.
#[derive(Default)]
pub struct NpsSurvey {
    theme: Option<SurveyTheme>,
    texts: Option<TextBundle>,
    thank_you_icon: Option<egui::ImageSource<'static>>,
    callbacks: SurveyCallbacks,
}

impl NpsSurvey {
    /// Create a survey with default theme and texts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the visual theme of the sheet.
    pub fn with_theme(mut self, theme: SurveyTheme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Set the display strings.
    pub fn with_texts(mut self, texts: TextBundle) -> Self {
        self.texts = Some(texts);
        self
    }

    /// Replace the default check mark on the thank-you page.
    ///
    /// URI sources such as `"file://assets/heart.png"` only render once the
    /// host has installed egui image loaders (`egui_extras::install_image_loaders`).
    /// Use [`egui::include_image!`] to bundle the bytes instead.
    pub fn with_thank_you_icon(mut self, icon: impl Into<egui::ImageSource<'static>>) -> Self {
        self.thank_you_icon = Some(icon.into());
        self
    }

    /// Called each time the close button is pressed.
    pub fn on_close(mut self, f: impl FnMut() + 'static) -> Self {
        self.callbacks = self.callbacks.on_close(f);
        self
    }

    /// Called on every score selection change.
    pub fn on_score_changed(mut self, f: impl FnMut(Option<Score>) + 'static) -> Self {
        self.callbacks = self.callbacks.on_score_changed(f);
        self
    }

    /// Called on every feedback edit.
    pub fn on_feedback_changed(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.callbacks = self.callbacks.on_feedback_changed(f);
        self
    }

    /// Called once, when the feedback is submitted.
    pub fn on_survey_completed(mut self, f: impl FnMut(&SurveyResult) + 'static) -> Self {
        self.callbacks = self.callbacks.on_survey_completed(f);
        self
    }

    /// Show the survey in `modal`, replacing any session it currently shows.
    ///
    /// The returned future resolves when the session ends, however it ends.
    pub fn open(self, modal: &mut SurveyModal, ctx: &egui::Context) -> SessionEnded {
        let (session, ended) =
            SurveySession::open(self.texts.unwrap_or_default(), self.callbacks);
        modal.install(ActiveSurvey {
            session,
            theme: self.theme.unwrap_or_default(),
            thank_you_icon: self.thank_you_icon,
        });
        ctx.request_repaint();
        ended
    }

    /// Run the survey in its own native window and block until it closes.
    ///
    /// Returns the submitted result, or [`EguiError::Cancelled`] if the
    /// window was closed before the survey was submitted.
    pub fn run_native(self, title: &str) -> Result<SurveyResult, EguiError> {
        let width = self
            .theme
            .as_ref()
            .map_or(SurveyTheme::default().sheet_width, |theme| theme.sheet_width);
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(title)
                .with_inner_size([width + 80.0, 320.0]),
            ..Default::default()
        };

        let outcome: Rc<RefCell<Option<SurveyResult>>> = Rc::new(RefCell::new(None));
        let app_outcome = Rc::clone(&outcome);

        eframe::run_native(
            title,
            options,
            Box::new(move |_cc| {
                Ok(Box::new(StandaloneApp {
                    modal: SurveyModal::default(),
                    pending: Some(self),
                    outcome: app_outcome,
                }) as Box<dyn eframe::App>)
            }),
        )
        .map_err(|e| EguiError::EguiError(e.to_string()))?;

        let result = outcome.borrow_mut().take();
        result.ok_or(EguiError::Cancelled)
    }
}

/// Window host for [`NpsSurvey::run_native`].
struct StandaloneApp {
    modal: SurveyModal,
    pending: Option<NpsSurvey>,
    outcome: Rc<RefCell<Option<SurveyResult>>>,
}

impl eframe::App for StandaloneApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(survey) = self.pending.take() {
            // The window itself is the session's lifetime.
            drop(survey.open(&mut self.modal, ctx));
        }

        egui::CentralPanel::default().show(ctx, |_ui| {});
        self.modal.show(ctx);

        // Keep the result even if the window is closed during the thank-you page.
        let finished = self
            .modal
            .session()
            .and_then(|session| session.controller().result())
            .or_else(|| self.modal.last_result());
        if let Some(result) = finished {
            let mut outcome = self.outcome.borrow_mut();
            if outcome.is_none() {
                info!(promoter_type = %result.promoter_type(), "standalone survey submitted");
                *outcome = Some(result.clone());
            }
        }

        if !self.modal.is_open() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}
