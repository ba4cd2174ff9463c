//! egui rendering of the three survey pages.

use eframe::egui::{self, Align, Layout, RichText};
use nps_survey::{FeedbackView, PageRenderer, Score, ScoreView, SurveyEvent, ThankYouView};

use crate::SurveyTheme;

const SCORE_BUTTON_SIZE: f32 = 30.0;

/// Draws survey pages into one `Ui`.
pub(crate) struct EguiPages<'a> {
    pub ui: &'a mut egui::Ui,
    pub theme: &'a SurveyTheme,
    pub thank_you_icon: Option<&'a egui::ImageSource<'static>>,
}

impl EguiPages<'_> {
    /// Close button in the sheet's top-right corner, shared by every page.
    fn close_button(&mut self, emit: &mut dyn FnMut(SurveyEvent)) {
        self.ui.with_layout(Layout::right_to_left(Align::TOP), |ui| {
            if ui.small_button("✕").on_hover_text("Close").clicked() {
                emit(SurveyEvent::Close);
            }
        });
    }
}

fn score_button(
    ui: &mut egui::Ui,
    theme: &SurveyTheme,
    score: Score,
    selected: bool,
) -> egui::Response {
    let mut button = egui::Button::new(RichText::new(score.to_string()).strong())
        .min_size(egui::vec2(SCORE_BUTTON_SIZE, SCORE_BUTTON_SIZE))
        .selected(selected);
    if selected {
        button = button.fill(theme.color_for(score.promoter_type()));
    }
    ui.add(button)
}

impl PageRenderer for EguiPages<'_> {
    fn score_page(&mut self, view: &ScoreView<'_>, emit: &mut dyn FnMut(SurveyEvent)) {
        self.close_button(emit);
        self.ui.heading(&view.texts.question);
        self.ui.add_space(12.0);

        let theme = self.theme;
        let mut picked = None;
        self.ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 4.0;
            for score in Score::all() {
                let selected = view.score == Some(score);
                if score_button(ui, theme, score, selected).clicked() && !selected {
                    picked = Some(score);
                }
            }
        });
        if let Some(score) = picked {
            emit(SurveyEvent::ScoreChanged(Some(score)));
        }

        self.ui.horizontal(|ui| {
            ui.weak(&view.texts.low_label);
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.weak(&view.texts.high_label);
            });
        });
        self.ui.add_space(12.0);

        let continue_button = egui::Button::new(&view.texts.submit_label);
        if self
            .ui
            .add_enabled(view.can_continue(), continue_button)
            .clicked()
        {
            emit(SurveyEvent::Continue);
        }
    }

    fn feedback_page(&mut self, view: &FeedbackView<'_>, emit: &mut dyn FnMut(SurveyEvent)) {
        self.close_button(emit);
        self.ui.heading(view.label());
        self.ui.add_space(8.0);

        let mut draft = view.feedback.to_string();
        let response = self.ui.add(
            egui::TextEdit::multiline(&mut draft)
                .hint_text(view.placeholder())
                .desired_rows(4)
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            emit(SurveyEvent::FeedbackChanged(draft));
        }
        self.ui.add_space(8.0);

        self.ui.horizontal(|ui| {
            let edit_label = match view.score {
                Some(score) => format!("{} ({score})", view.texts.edit_score_label),
                None => view.texts.edit_score_label.clone(),
            };
            if ui.link(edit_label).clicked() {
                emit(SurveyEvent::EditScore);
            }
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button(&view.texts.submit_label).clicked() {
                    emit(SurveyEvent::Submit);
                }
            });
        });
    }

    fn thank_you_page(&mut self, view: &ThankYouView<'_>, emit: &mut dyn FnMut(SurveyEvent)) {
        self.close_button(emit);
        let icon = self.thank_you_icon;
        self.ui.vertical_centered(|ui| {
            match icon {
                Some(source) => {
                    ui.add(egui::Image::new(source.clone()).max_width(64.0));
                }
                None => {
                    ui.label(RichText::new("✔").size(48.0));
                }
            }
            ui.add_space(8.0);
            ui.heading(&view.texts.label);
        });
        self.ui.add_space(12.0);
    }
}
