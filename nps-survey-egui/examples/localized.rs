//! A survey with a partial German text bundle and a custom theme.
//!
//! Run with: cargo run -p nps-survey-egui --example localized

use nps_survey_egui::nps_survey::TextBundle;
use nps_survey_egui::{NpsSurvey, SurveyTheme};

const GERMAN: &str = r#"{
    "score": {
        "question": "Wie wahrscheinlich ist es, dass Sie uns weiterempfehlen?",
        "low_label": "Unwahrscheinlich",
        "high_label": "Sehr wahrscheinlich",
        "submit_label": "Weiter"
    },
    "feedback": {
        "promoter_label": "Was gefällt Ihnen am besten?",
        "detractor_label": "Was ist schiefgelaufen?",
        "edit_score_label": "Bewertung ändern",
        "submit_label": "Absenden"
    },
    "thank_you": { "label": "Vielen Dank!" }
}"#;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let texts = TextBundle::from_json(GERMAN)?;
    let theme = SurveyTheme::dark()
        .with_sheet_width(520.0)
        .with_visuals(egui::Visuals {
            window_fill: egui::Color32::from_rgb(0x1E, 0x22, 0x2A),
            ..egui::Visuals::dark()
        });

    let result = NpsSurvey::new()
        .with_texts(texts)
        .with_theme(theme)
        .run_native("Umfrage")?;
    println!("{result:#?}");
    Ok(())
}
