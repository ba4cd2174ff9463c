//! Display strings for the three survey pages.
//!
//! Every record derives `Deserialize` with `#[serde(default)]`, so a localized
//! bundle only needs to name the strings it overrides:
//!
//! ```rust
//! use nps_survey::TextBundle;
//!
//! let texts = TextBundle::from_json(r#"{ "thank_you": { "label": "Danke!" } }"#).unwrap();
//! assert_eq!(texts.thank_you.label, "Danke!");
//! assert_eq!(texts.score.submit_label, "Continue");
//! ```

use serde::{Deserialize, Serialize};

use crate::{PromoterType, TextBundleError};

/// All display strings, one record per page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextBundle {
    pub score: ScoreTexts,
    pub feedback: FeedbackTexts,
    pub thank_you: ThankYouTexts,
}

impl TextBundle {
    /// Parse a (possibly partial) bundle from JSON; missing strings keep
    /// their defaults.
    pub fn from_json(json: &str) -> Result<Self, TextBundleError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Strings for the score page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreTexts {
    pub question: String,
    pub low_label: String,
    pub high_label: String,
    pub submit_label: String,
}

impl Default for ScoreTexts {
    fn default() -> Self {
        Self {
            question: "How likely are you to recommend us to a friend or colleague?".to_string(),
            low_label: "Not likely".to_string(),
            high_label: "Very likely".to_string(),
            submit_label: "Continue".to_string(),
        }
    }
}

/// Strings for the feedback page.
///
/// The main label and placeholder come in three variants, picked by the
/// promoter type of the current score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackTexts {
    pub promoter_label: String,
    pub promoter_placeholder: String,
    pub passive_label: String,
    pub passive_placeholder: String,
    pub detractor_label: String,
    pub detractor_placeholder: String,
    pub edit_score_label: String,
    pub submit_label: String,
}

impl FeedbackTexts {
    /// Main label for the given bucket.
    pub fn label(&self, promoter_type: PromoterType) -> &str {
        match promoter_type {
            PromoterType::Promoter => &self.promoter_label,
            PromoterType::Passive => &self.passive_label,
            PromoterType::Detractor => &self.detractor_label,
        }
    }

    /// Text-field placeholder for the given bucket.
    pub fn placeholder(&self, promoter_type: PromoterType) -> &str {
        match promoter_type {
            PromoterType::Promoter => &self.promoter_placeholder,
            PromoterType::Passive => &self.passive_placeholder,
            PromoterType::Detractor => &self.detractor_placeholder,
        }
    }
}

impl Default for FeedbackTexts {
    fn default() -> Self {
        Self {
            promoter_label: "What do you love the most about us?".to_string(),
            promoter_placeholder: "I love the app because...".to_string(),
            passive_label: "What could we do to improve?".to_string(),
            passive_placeholder: "It would be great if...".to_string(),
            detractor_label: "What went wrong for you?".to_string(),
            detractor_placeholder: "I was disappointed that...".to_string(),
            edit_score_label: "Edit score".to_string(),
            submit_label: "Submit".to_string(),
        }
    }
}

/// Strings for the thank-you page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThankYouTexts {
    pub label: String,
}

impl Default for ThankYouTexts {
    fn default() -> Self {
        Self {
            label: "Thank you for your feedback!".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_copy_follows_promoter_type() {
        let texts = FeedbackTexts::default();
        assert_eq!(texts.label(PromoterType::Promoter), texts.promoter_label);
        assert_eq!(texts.label(PromoterType::Passive), texts.passive_label);
        assert_eq!(texts.label(PromoterType::Detractor), texts.detractor_label);
        assert_eq!(
            texts.placeholder(PromoterType::Passive),
            texts.passive_placeholder
        );
    }

    #[test]
    fn partial_bundle_keeps_defaults() {
        let texts = TextBundle::from_json(
            r#"{ "score": { "question": "Wie wahrscheinlich?" }, "feedback": { "submit_label": "Senden" } }"#,
        )
        .unwrap();

        assert_eq!(texts.score.question, "Wie wahrscheinlich?");
        assert_eq!(texts.score.low_label, ScoreTexts::default().low_label);
        assert_eq!(texts.feedback.submit_label, "Senden");
        assert_eq!(texts.thank_you, ThankYouTexts::default());
    }

    #[test]
    fn empty_object_is_the_default_bundle() {
        assert_eq!(TextBundle::from_json("{}").unwrap(), TextBundle::default());
    }

    #[test]
    fn malformed_bundle_is_rejected() {
        let err = TextBundle::from_json("{ \"score\": 3 }").unwrap_err();
        assert!(err.to_string().starts_with("Invalid text bundle"));
    }
}
