//! The survey as a modal sheet over a host egui application.

use std::hash::Hash;
use std::time::Duration;

use eframe::egui;
use nps_survey::{DismissReason, FlowError, FlowSignal, SurveyEvent, SurveyResult, SurveySession};
use tracing::{debug, error};

use crate::SurveyTheme;
use crate::pages::EguiPages;

/// Hosts at most one survey session as a modal sheet.
///
/// Keep one in your app state, call [`SurveyModal::show`] every frame, and
/// open sessions with [`NpsSurvey::open`](crate::NpsSurvey::open).
pub struct SurveyModal {
    id: egui::Id,
    active: Option<ActiveSurvey>,
    last_result: Option<SurveyResult>,
}

pub(crate) struct ActiveSurvey {
    pub session: SurveySession,
    pub theme: SurveyTheme,
    pub thank_you_icon: Option<egui::ImageSource<'static>>,
}

impl Default for SurveyModal {
    fn default() -> Self {
        Self::new("nps_survey_modal")
    }
}

impl SurveyModal {
    /// Create a modal host; `id_salt` must be unique among the host's modals.
    pub fn new(id_salt: impl Hash) -> Self {
        Self {
            id: egui::Id::new(id_salt),
            active: None,
            last_result: None,
        }
    }

    /// Whether a session is currently shown.
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// The session currently shown.
    pub fn session(&self) -> Option<&SurveySession> {
        self.active.as_ref().map(|active| &active.session)
    }

    /// The theme of the session currently shown.
    pub fn theme(&self) -> Option<&SurveyTheme> {
        self.active.as_ref().map(|active| &active.theme)
    }

    /// The result of the most recently ended session, if it was completed.
    pub fn last_result(&self) -> Option<&SurveyResult> {
        self.last_result.as_ref()
    }

    /// Dismiss the current session from the host side.
    ///
    /// Returns `false` if no session was shown. A pending auto-dismiss of the
    /// dismissed session never fires.
    pub fn dismiss(&mut self) -> bool {
        self.end(DismissReason::Dismissed)
    }

    /// Feed an event to the current session as if its page had emitted it,
    /// e.g. for keyboard shortcuts.
    pub fn send(
        &mut self,
        ctx: &egui::Context,
        event: SurveyEvent,
    ) -> Result<FlowSignal, FlowError> {
        let Some(active) = self.active.as_mut() else {
            debug!(event = event.name(), "no survey shown");
            return Ok(FlowSignal::None);
        };
        let signal = active.session.dispatch(event, frame_time(ctx))?;
        self.retire_if_ended();
        ctx.request_repaint();
        Ok(signal)
    }

    /// Draw the sheet and run its deadlines. Call once per frame.
    pub fn show(&mut self, ctx: &egui::Context) {
        let now = frame_time(ctx);
        let Some(active) = self.active.as_mut() else {
            return;
        };

        if active.session.tick(now) {
            self.retire_if_ended();
            return;
        }

        let style = active.theme.style(ctx);
        let frame = egui::Frame::popup(&style);
        let response = egui::Modal::new(self.id).frame(frame).show(ctx, |ui| {
            *ui.style_mut() = style.clone();
            ui.set_width(active.theme.sheet_width);
            let mut pages = EguiPages {
                ui,
                theme: &active.theme,
                thank_you_icon: active.thank_you_icon.as_ref(),
            };
            active.session.render(&mut pages, now)
        });

        if let Err(err) = &response.inner {
            error!(%err, "survey page emitted an event the flow rejects");
        }
        debug_assert!(
            response.inner.is_ok(),
            "survey page emitted an invalid event: {:?}",
            response.inner
        );

        if response.should_close() {
            active.session.dismiss(DismissReason::Dismissed);
        }

        if let Some(remaining) = active.session.time_until_auto_dismiss(now) {
            ctx.request_repaint_after(remaining);
        }
        self.retire_if_ended();
    }

    pub(crate) fn install(&mut self, active: ActiveSurvey) {
        self.end(DismissReason::Replaced);
        self.last_result = None;
        self.active = Some(active);
    }

    fn end(&mut self, reason: DismissReason) -> bool {
        match self.active.as_mut() {
            Some(active) => {
                active.session.dismiss(reason);
                self.retire_if_ended();
                true
            }
            None => false,
        }
    }

    /// Drop the session once it is no longer active, keeping its result.
    fn retire_if_ended(&mut self) {
        if self
            .active
            .as_ref()
            .is_some_and(|active| !active.session.is_active())
        {
            self.last_result = self
                .active
                .take()
                .and_then(|active| active.session.controller().result().cloned());
        }
    }
}

/// Current frame time as a duration since the context started.
fn frame_time(ctx: &egui::Context) -> Duration {
    Duration::from_secs_f64(ctx.input(|i| i.time).max(0.0))
}
