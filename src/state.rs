use crate::color::ColorMap;
use crate::data::filter::{
    aggregate_outcomes, filter_payload, OutcomeSummary, PayloadSelection,
};
use crate::data::model::{LaunchDataset, Outcome, SiteSelection};

// ---------------------------------------------------------------------------
// Payload range control domain
// ---------------------------------------------------------------------------

/// Slider domain for the payload range control, in kg.
pub const PAYLOAD_MIN: f64 = 0.0;
pub const PAYLOAD_MAX: f64 = 10_000.0;
/// Slider step, in kg.
pub const PAYLOAD_STEP: f64 = 1_000.0;
/// Labelled tick marks shown under the range control.
pub const PAYLOAD_TICKS: [f64; 5] = [0.0, 2500.0, 5000.0, 7500.0, 10_000.0];

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering. The dataset is immutable
/// after startup; only the control values and the derived results change.
pub struct AppState {
    /// Loaded dataset (read-only for the process lifetime).
    pub dataset: LaunchDataset,

    /// Current value of the site control.
    pub selected_site: SiteSelection,

    /// Current payload range (low, high), low <= high, within the slider
    /// domain.
    pub payload_range: (f64, f64),

    /// Outcome counts for the pie chart (cached, rebuilt on control change).
    pub outcome_summary: OutcomeSummary,

    /// Record indices for the scatter chart (cached, rebuilt on control
    /// change).
    pub payload_selection: PayloadSelection,

    /// Colour per booster version category (scatter points).
    pub category_colors: ColorMap,

    /// Colour per launch site (all-sites pie slices).
    pub site_colors: ColorMap,

    /// Colour per outcome class (single-site pie slices).
    pub outcome_colors: ColorMap,
}

impl AppState {
    /// Ingest the loaded dataset, seed the controls from its payload bounds,
    /// and derive the initial chart inputs.
    pub fn new(dataset: LaunchDataset) -> Self {
        let bounds = dataset.payload_bounds;
        let payload_range = (
            bounds.min.clamp(PAYLOAD_MIN, PAYLOAD_MAX),
            bounds.max.clamp(PAYLOAD_MIN, PAYLOAD_MAX),
        );

        let category_colors = ColorMap::new(dataset.booster_categories.iter().cloned());
        let site_colors = ColorMap::new(dataset.sites.iter().cloned());
        let outcome_colors = ColorMap::new([
            Outcome::Failure.axis_label(),
            Outcome::Success.axis_label(),
        ]);

        let selected_site = SiteSelection::default();
        let outcome_summary = aggregate_outcomes(&dataset, &selected_site);
        let payload_selection = filter_payload(
            &dataset,
            payload_range.0,
            payload_range.1,
            &selected_site,
        );

        Self {
            dataset,
            selected_site,
            payload_range,
            outcome_summary,
            payload_selection,
            category_colors,
            site_colors,
            outcome_colors,
        }
    }

    /// Change the site control and re-derive both chart inputs.
    pub fn set_site(&mut self, selection: SiteSelection) {
        if self.selected_site != selection {
            self.selected_site = selection;
            self.refilter();
        }
    }

    /// Change the payload range control and re-derive the scatter input.
    /// Values are clamped to the slider domain and reordered so low <= high.
    pub fn set_payload_range(&mut self, low: f64, high: f64) {
        let low = low.clamp(PAYLOAD_MIN, PAYLOAD_MAX);
        let high = high.clamp(PAYLOAD_MIN, PAYLOAD_MAX);
        let range = if low <= high { (low, high) } else { (high, low) };
        if self.payload_range != range {
            self.payload_range = range;
            self.refilter();
        }
    }

    /// Re-derive both cached results from the current control values.
    pub fn refilter(&mut self) {
        self.outcome_summary = aggregate_outcomes(&self.dataset, &self.selected_site);
        self.payload_selection = filter_payload(
            &self.dataset,
            self.payload_range.0,
            self.payload_range.1,
            &self.selected_site,
        );
    }

    /// Colour for a pie slice label under the current selection: sites in
    /// the all-sites case, outcome classes in the single-site case.
    pub fn slice_color(&self, label: &str) -> eframe::egui::Color32 {
        match self.selected_site {
            SiteSelection::All => self.site_colors.color_for(label),
            SiteSelection::Site(_) => self.outcome_colors.color_for(label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::LaunchRecord;

    fn dataset() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            LaunchRecord {
                site: "KSC LC-39A".to_string(),
                payload_mass: 5000.0,
                outcome: Outcome::Success,
                booster_category: "FT".to_string(),
            },
            LaunchRecord {
                site: "VAFB SLC-4E".to_string(),
                payload_mass: 9000.0,
                outcome: Outcome::Success,
                booster_category: "B5".to_string(),
            },
        ])
    }

    #[test]
    fn initial_range_is_seeded_from_bounds() {
        let state = AppState::new(dataset());
        assert_eq!(state.payload_range, (5000.0, 9000.0));
        assert_eq!(state.selected_site, SiteSelection::All);
        assert_eq!(state.payload_selection.len(), 2);
    }

    #[test]
    fn changing_site_rederives_both_results() {
        let mut state = AppState::new(dataset());
        state.set_site(SiteSelection::Site("VAFB SLC-4E".to_string()));
        assert_eq!(state.outcome_summary.total(), 1);
        assert_eq!(state.payload_selection.indices, vec![1]);
        assert_eq!(
            state.payload_selection.title,
            "Payload vs. Success — VAFB SLC-4E"
        );
    }

    #[test]
    fn payload_range_is_clamped_and_ordered() {
        let mut state = AppState::new(dataset());
        state.set_payload_range(12_000.0, -500.0);
        assert_eq!(state.payload_range, (0.0, 10_000.0));
        state.set_payload_range(6000.0, 4000.0);
        assert_eq!(state.payload_range, (4000.0, 6000.0));
        assert_eq!(state.payload_selection.indices, vec![0]);
    }
}
