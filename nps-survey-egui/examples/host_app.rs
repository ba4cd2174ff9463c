//! A host application that opens the survey as a modal sheet.
//!
//! Run with: cargo run -p nps-survey-egui --example host_app

use nps_survey_egui::nps_survey::{SessionEnded, SurveyResult};
use nps_survey_egui::{NpsSurvey, SurveyModal, SurveyTheme};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Default)]
struct HostApp {
    survey: SurveyModal,
    ended: Option<SessionEnded>,
    status: String,
    dark: bool,
}

impl HostApp {
    fn status_line(result: Option<&SurveyResult>) -> String {
        match result {
            Some(result) => format!(
                "Last answer: {} ({}) \"{}\"",
                result
                    .score()
                    .map_or_else(|| "-".to_string(), |s| s.to_string()),
                result.promoter_type(),
                result.feedback()
            ),
            None => "No answer yet".to_string(),
        }
    }
}

impl eframe::App for HostApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("My Application");
            ui.checkbox(&mut self.dark, "Dark survey sheet");
            ui.add_space(8.0);

            if ui.button("Rate us").clicked() {
                let theme = if self.dark {
                    SurveyTheme::dark()
                } else {
                    SurveyTheme::light()
                };
                let ended = NpsSurvey::new()
                    .with_theme(theme)
                    .on_close(|| tracing::info!("close pressed"))
                    .on_score_changed(|score| tracing::info!(?score, "score changed"))
                    .on_feedback_changed(|text| tracing::debug!(len = text.len(), "feedback"))
                    .on_survey_completed(|result| tracing::info!(?result, "survey completed"))
                    .open(&mut self.survey, ctx);
                self.ended = Some(ended);
            }

            if let Some(reason) = self.ended.as_mut().and_then(SessionEnded::try_reason) {
                self.ended = None;
                self.status = format!(
                    "Session {reason}. {}",
                    Self::status_line(self.survey.last_result())
                );
            }
            ui.label(&self.status);
        });

        self.survey.show(ctx);
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("NPS survey host")
            .with_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "NPS survey host",
        options,
        Box::new(|_cc| Ok(Box::new(HostApp::default()) as Box<dyn eframe::App>)),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))?;
    Ok(())
}
