//! One presentation of the survey, from open to dismissal.
//!
//! The session wraps a [`SurveyController`] with the container lifecycle:
//! close requests dismiss immediately, completion schedules an automatic
//! dismissal [`AUTO_DISMISS_DELAY`] later, and whichever dismissal comes first
//! wins. Time is supplied by the host (frame time since an arbitrary origin),
//! so the deadline is evaluated on the same loop that drives the UI.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use futures::channel::oneshot;
use tracing::{debug, info};

use crate::{
    FlowError, FlowSignal, PageRenderer, SurveyCallbacks, SurveyController, SurveyEvent,
    TextBundle,
};

/// Delay between completing the survey and dismissing the thank-you page.
pub const AUTO_DISMISS_DELAY: Duration = Duration::from_millis(2000);

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    /// The close button was pressed.
    Closed,
    /// The host (or the user, outside the survey's own buttons) dismissed the
    /// container.
    Dismissed,
    /// The thank-you page timed out after completion.
    AutoDismissed,
    /// Another survey was opened in the same container.
    Replaced,
    /// The session was dropped without being dismissed.
    Abandoned,
}

impl DismissReason {
    /// Get the reason name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Dismissed => "dismissed",
            Self::AutoDismissed => "auto-dismissed",
            Self::Replaced => "replaced",
            Self::Abandoned => "abandoned",
        }
    }
}

impl std::fmt::Display for DismissReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolves when its session ends, by any means.
#[derive(Debug)]
#[must_use = "SessionEnded does nothing unless awaited or polled"]
pub struct SessionEnded {
    rx: oneshot::Receiver<DismissReason>,
    reason: Option<DismissReason>,
}

impl SessionEnded {
    /// The reason the session ended, if it already has.
    ///
    /// Once a reason is observed, every later call returns the same one.
    pub fn try_reason(&mut self) -> Option<DismissReason> {
        if self.reason.is_none() {
            self.reason = match self.rx.try_recv() {
                Ok(reason) => reason,
                Err(oneshot::Canceled) => Some(DismissReason::Abandoned),
            };
        }
        self.reason
    }
}

impl Future for SessionEnded {
    type Output = DismissReason;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        if let Some(reason) = self.reason {
            return Poll::Ready(reason);
        }
        let polled = Pin::new(&mut self.rx)
            .poll(cx)
            .map(|reason| reason.unwrap_or(DismissReason::Abandoned));
        if let Poll::Ready(reason) = polled {
            self.reason = Some(reason);
        }
        polled
    }
}

/// A survey controller plus its container lifecycle.
#[derive(Debug)]
pub struct SurveySession {
    controller: SurveyController,
    active: bool,
    auto_dismiss_at: Option<Duration>,
    ended: Option<oneshot::Sender<DismissReason>>,
}

impl SurveySession {
    /// Start a session on the score page.
    pub fn open(texts: TextBundle, callbacks: SurveyCallbacks) -> (Self, SessionEnded) {
        let (tx, rx) = oneshot::channel();
        info!("survey session opened");
        let session = Self {
            controller: SurveyController::new(texts, callbacks),
            active: true,
            auto_dismiss_at: None,
            ended: Some(tx),
        };
        (session, SessionEnded { rx, reason: None })
    }

    pub fn controller(&self) -> &SurveyController {
        &self.controller
    }

    /// Whether the container is still showing this session.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// When the pending automatic dismissal fires, if one is scheduled.
    pub fn auto_dismiss_at(&self) -> Option<Duration> {
        self.auto_dismiss_at
    }

    /// Time left until the pending automatic dismissal, for repaint scheduling.
    pub fn time_until_auto_dismiss(&self, now: Duration) -> Option<Duration> {
        self.auto_dismiss_at
            .map(|deadline| deadline.saturating_sub(now))
    }

    /// Apply an event at frame time `now`.
    ///
    /// Events arriving after dismissal are ignored.
    pub fn dispatch(&mut self, event: SurveyEvent, now: Duration) -> Result<FlowSignal, FlowError> {
        if !self.active {
            debug!(event = event.name(), "event after dismissal ignored");
            return Ok(FlowSignal::None);
        }

        let signal = self.controller.handle(event)?;
        match signal {
            FlowSignal::None => {}
            FlowSignal::CloseRequested => {
                self.dismiss(DismissReason::Closed);
            }
            FlowSignal::Completed => {
                let deadline = now + AUTO_DISMISS_DELAY;
                debug!(?deadline, "auto-dismiss scheduled");
                self.auto_dismiss_at = Some(deadline);
            }
        }
        Ok(signal)
    }

    /// Draw the current page with `renderer` and apply whatever it emitted.
    ///
    /// Stops at the first rejected event.
    pub fn render<R: PageRenderer + ?Sized>(
        &mut self,
        renderer: &mut R,
        now: Duration,
    ) -> Result<(), FlowError> {
        if !self.active {
            return Ok(());
        }
        let events = self.controller.view().render(renderer);
        for event in events {
            self.dispatch(event, now)?;
        }
        Ok(())
    }

    /// Fire the automatic dismissal if its deadline has passed.
    ///
    /// Returns `true` if this call dismissed the session. A deadline reached
    /// after the session was already dismissed is consumed without effect.
    pub fn tick(&mut self, now: Duration) -> bool {
        match self.auto_dismiss_at {
            Some(deadline) if now >= deadline => {
                self.auto_dismiss_at = None;
                self.dismiss(DismissReason::AutoDismissed)
            }
            _ => false,
        }
    }

    /// End the session.
    ///
    /// Returns `false` if it had already ended; only the first dismissal is
    /// reported to [`SessionEnded`].
    pub fn dismiss(&mut self, reason: DismissReason) -> bool {
        if !self.active {
            debug!(%reason, "survey session already dismissed");
            return false;
        }
        self.active = false;
        info!(
            %reason,
            completed = self.controller.is_completed(),
            "survey session dismissed"
        );
        if let Some(tx) = self.ended.take() {
            // The host may have dropped its `SessionEnded`.
            let _ = tx.send(reason);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::{Score, SurveyPage};

    fn completed_session(now: Duration) -> (SurveySession, SessionEnded) {
        let (mut session, ended) = SurveySession::open(TextBundle::default(), SurveyCallbacks::new());
        let score = Some(Score::new(10).unwrap());
        session.dispatch(SurveyEvent::ScoreChanged(score), now).unwrap();
        session.dispatch(SurveyEvent::Continue, now).unwrap();
        session.dispatch(SurveyEvent::Submit, now).unwrap();
        (session, ended)
    }

    #[test]
    fn completion_schedules_auto_dismiss() {
        let start = Duration::from_secs(5);
        let (mut session, ended) = completed_session(start);
        assert_eq!(session.auto_dismiss_at(), Some(start + AUTO_DISMISS_DELAY));
        assert_eq!(
            session.time_until_auto_dismiss(start + Duration::from_millis(500)),
            Some(Duration::from_millis(1500))
        );

        assert!(!session.tick(start + Duration::from_millis(1999)));
        assert!(session.is_active());
        assert!(session.tick(start + AUTO_DISMISS_DELAY));
        assert!(!session.is_active());
        assert_eq!(block_on(ended), DismissReason::AutoDismissed);
    }

    #[test]
    fn manual_dismiss_suppresses_auto_dismiss() {
        let (mut session, ended) = completed_session(Duration::ZERO);
        assert!(session.dismiss(DismissReason::Dismissed));
        assert!(!session.tick(AUTO_DISMISS_DELAY));
        assert!(!session.tick(AUTO_DISMISS_DELAY * 2));
        assert_eq!(session.auto_dismiss_at(), None);
        assert_eq!(block_on(ended), DismissReason::Dismissed);
    }

    #[test]
    fn close_dismisses_immediately() {
        let (mut session, mut ended) =
            SurveySession::open(TextBundle::default(), SurveyCallbacks::new());
        assert_eq!(ended.try_reason(), None);
        assert_eq!(
            session.dispatch(SurveyEvent::Close, Duration::ZERO),
            Ok(FlowSignal::CloseRequested)
        );
        assert!(!session.is_active());
        assert!(!session.dismiss(DismissReason::Dismissed));
        assert_eq!(ended.try_reason(), Some(DismissReason::Closed));
    }

    #[test]
    fn end_reason_is_stable_across_checks() {
        let (mut session, mut ended) =
            SurveySession::open(TextBundle::default(), SurveyCallbacks::new());
        session.dispatch(SurveyEvent::Close, Duration::ZERO).unwrap();
        assert_eq!(ended.try_reason(), Some(DismissReason::Closed));
        assert_eq!(ended.try_reason(), Some(DismissReason::Closed));

        drop(session);
        assert_eq!(ended.try_reason(), Some(DismissReason::Closed));
        assert_eq!(block_on(ended), DismissReason::Closed);
    }

    #[test]
    fn events_after_dismissal_are_ignored() {
        let (mut session, _ended) =
            SurveySession::open(TextBundle::default(), SurveyCallbacks::new());
        session.dismiss(DismissReason::Dismissed);
        let score = Some(Score::new(3).unwrap());
        assert_eq!(
            session.dispatch(SurveyEvent::ScoreChanged(score), Duration::ZERO),
            Ok(FlowSignal::None)
        );
        assert_eq!(session.controller().score(), None);
        assert_eq!(session.controller().page(), SurveyPage::Score);
    }

    #[test]
    fn dropped_session_is_abandoned() {
        let (session, ended) = SurveySession::open(TextBundle::default(), SurveyCallbacks::new());
        drop(session);
        assert_eq!(block_on(ended), DismissReason::Abandoned);
    }
}
