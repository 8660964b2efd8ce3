use eframe::egui::{self, Ui};

use crate::data::model::SiteSelection;
use crate::state::{AppState, PAYLOAD_MAX, PAYLOAD_MIN, PAYLOAD_STEP, PAYLOAD_TICKS};

// ---------------------------------------------------------------------------
// Left side panel – dashboard controls
// ---------------------------------------------------------------------------

/// Render the control panel: site selector and payload range.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    // ---- Launch site selector ----
    ui.strong("Launch Site");
    // Clone the site list so we can mutate state inside the combo closure.
    let sites = state.dataset.sites.clone();
    let current = state.selected_site.clone();
    egui::ComboBox::from_id_salt("site_select")
        .selected_text(current.to_string())
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(current == SiteSelection::All, "All Sites")
                .clicked()
            {
                state.set_site(SiteSelection::All);
            }
            for site in &sites {
                let candidate = SiteSelection::Site(site.clone());
                if ui.selectable_label(current == candidate, site).clicked() {
                    state.set_site(candidate);
                }
            }
        });

    ui.separator();

    // ---- Payload range ----
    ui.strong("Payload range (kg)");
    let (mut low, mut high) = state.payload_range;
    let mut changed = false;
    changed |= ui
        .add(
            egui::Slider::new(&mut low, PAYLOAD_MIN..=PAYLOAD_MAX)
                .step_by(PAYLOAD_STEP)
                .text("min"),
        )
        .changed();
    changed |= ui
        .add(
            egui::Slider::new(&mut high, PAYLOAD_MIN..=PAYLOAD_MAX)
                .step_by(PAYLOAD_STEP)
                .text("max"),
        )
        .changed();
    if changed {
        state.set_payload_range(low, high);
    }

    let ticks = PAYLOAD_TICKS.map(|t| format!("{t:.0}")).join("   ");
    ui.weak(ticks);
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title bar with dataset and selection counts.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading("Launch Records Dashboard");
        ui.separator();
        ui.label(format!(
            "{} launches from {} sites",
            state.dataset.len(),
            state.dataset.sites.len()
        ));
        ui.separator();
        ui.label(format!(
            "{} in payload selection",
            state.payload_selection.len()
        ));
    });
}
