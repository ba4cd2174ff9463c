use eframe::egui::{self, Color32};
use nps_survey::PromoterType;

/// Colors and sizing for the survey sheet.
#[derive(Debug, Clone)]
pub struct SurveyTheme {
    /// Visuals applied inside the sheet. `None` inherits the host's visuals.
    pub visuals: Option<egui::Visuals>,
    /// Fill of a selected score from 0 to 6.
    pub detractor: Color32,
    /// Fill of a selected score of 7 or 8.
    pub passive: Color32,
    /// Fill of a selected score of 9 or 10.
    pub promoter: Color32,
    /// Width of the sheet's content area.
    pub sheet_width: f32,
}

impl Default for SurveyTheme {
    fn default() -> Self {
        Self {
            visuals: None,
            detractor: Color32::from_rgb(0xE5, 0x48, 0x4D),
            passive: Color32::from_rgb(0xF5, 0xA6, 0x23),
            promoter: Color32::from_rgb(0x30, 0xA4, 0x6C),
            sheet_width: 420.0,
        }
    }
}

impl SurveyTheme {
    /// Default colors on light visuals.
    pub fn light() -> Self {
        Self::default().with_visuals(egui::Visuals::light())
    }

    /// Default colors on dark visuals.
    pub fn dark() -> Self {
        Self::default().with_visuals(egui::Visuals::dark())
    }

    /// Override the visuals used inside the sheet.
    pub fn with_visuals(mut self, visuals: egui::Visuals) -> Self {
        self.visuals = Some(visuals);
        self
    }

    /// Set the width of the sheet.
    pub fn with_sheet_width(mut self, width: f32) -> Self {
        self.sheet_width = width;
        self
    }

    /// Fill color for a selected score in the given bucket.
    pub fn color_for(&self, promoter_type: PromoterType) -> Color32 {
        match promoter_type {
            PromoterType::Detractor => self.detractor,
            PromoterType::Passive => self.passive,
            PromoterType::Promoter => self.promoter,
        }
    }

    /// The host style with this theme's visuals applied.
    pub(crate) fn style(&self, ctx: &egui::Context) -> egui::Style {
        let mut style = (*ctx.style()).clone();
        if let Some(visuals) = &self.visuals {
            style.visuals = visuals.clone();
        }
        style
    }
}
