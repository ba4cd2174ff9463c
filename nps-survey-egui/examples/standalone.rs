//! A one-off survey in its own window; prints the result as JSON.
//!
//! Run with: cargo run -p nps-survey-egui --example standalone

use nps_survey_egui::{EguiError, NpsSurvey};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    match NpsSurvey::new().run_native("Feedback") {
        Ok(result) => println!("{}", serde_json::to_string_pretty(&result)?),
        Err(EguiError::Cancelled) => eprintln!("Survey closed without an answer"),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}
