//! # nps-survey-egui
//!
//! An egui host for `nps-survey`: the score, feedback and thank-you pages
//! shown as a modal sheet over your application.
//!
//! Keep a [`SurveyModal`] in your app state, call [`SurveyModal::show`] every
//! frame, and open a session with [`NpsSurvey::open`]. The returned
//! [`SessionEnded`](nps_survey::SessionEnded) future resolves when the sheet
//! is dismissed: by the close button, by clicking outside it, by the host,
//! or automatically two seconds after the survey is submitted.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use nps_survey_egui::{NpsSurvey, SurveyModal, SurveyTheme};
//!
//! struct App {
//!     survey: SurveyModal,
//! }
//!
//! impl eframe::App for App {
//!     fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
//!         egui::CentralPanel::default().show(ctx, |ui| {
//!             if ui.button("Rate us").clicked() {
//!                 let _ended = NpsSurvey::new()
//!                     .with_theme(SurveyTheme::light())
//!                     .on_survey_completed(|result| println!("{result:?}"))
//!                     .open(&mut self.survey, ctx);
//!             }
//!         });
//!         self.survey.show(ctx);
//!     }
//! }
//! ```
//!
//! For a one-off survey without a host app, [`NpsSurvey::run_native`] opens
//! its own window and blocks until it closes.

mod modal;
mod pages;
mod survey;
mod theme;

pub use modal::SurveyModal;
pub use survey::{EguiError, NpsSurvey};
pub use theme::SurveyTheme;

pub use nps_survey;
