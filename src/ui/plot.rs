use std::f64::consts::{FRAC_PI_2, TAU};

use eframe::egui::{Color32, Stroke, Ui};
use egui_plot::{Legend, MarkerShape, Plot, PlotPoints, Points, Polygon};

use crate::data::model::Outcome;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Outcome pie chart
// ---------------------------------------------------------------------------

/// Render the outcome pie chart for the current site selection.
pub fn outcome_pie(ui: &mut Ui, state: &AppState, height: f32) {
    let summary = &state.outcome_summary;
    ui.strong(&summary.title);

    if summary.is_empty() {
        // Keep the layout stable: reserve the chart area for the placeholder.
        ui.label("No launches match the current selection.");
        ui.add_space(height);
        return;
    }

    let total = summary.total() as f64;

    Plot::new("outcome_pie")
        .legend(Legend::default())
        .height(height)
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            let mut start = 0.0;
            for slice in &summary.slices {
                let end = start + slice.count as f64 / total;
                let wedge = Polygon::new(PlotPoints::from(wedge_points(start, end)))
                    .name(format!("{} ({})", slice.label, slice.count))
                    .fill_color(state.slice_color(&slice.label))
                    .stroke(Stroke::new(1.0, Color32::from_gray(30)));
                plot_ui.polygon(wedge);
                start = end;
            }
        });
}

/// Vertex fan for one pie wedge spanning `[start, end]` of the unit circle
/// (fractions of a full turn, clockwise from 12 o'clock).
fn wedge_points(start: f64, end: f64) -> Vec<[f64; 2]> {
    const SEGMENTS_PER_TURN: f64 = 96.0;

    let a0 = FRAC_PI_2 - start * TAU;
    let a1 = FRAC_PI_2 - end * TAU;
    let steps = ((end - start) * SEGMENTS_PER_TURN).ceil().max(2.0) as usize;

    let mut points = Vec::with_capacity(steps + 2);
    points.push([0.0, 0.0]);
    for i in 0..=steps {
        let angle = a0 + (a1 - a0) * i as f64 / steps as f64;
        points.push([angle.cos(), angle.sin()]);
    }
    points
}

// ---------------------------------------------------------------------------
// Payload vs. success scatter chart
// ---------------------------------------------------------------------------

/// Render the payload-mass vs. outcome scatter for the current payload
/// range and site selection. Points are coloured by booster version
/// category; hovering a point shows its launch site.
pub fn payload_scatter(ui: &mut Ui, state: &AppState, height: f32) {
    let selection = &state.payload_selection;
    ui.strong(&selection.title);

    // One series per booster category so the legend doubles as the colour
    // key, like px.scatter(color=...).
    let mut by_category: Vec<(&str, Vec<[f64; 2]>)> = state
        .dataset
        .booster_categories
        .iter()
        .map(|c| (c.as_str(), Vec::new()))
        .collect();
    let mut hover: Vec<([f64; 2], String)> = Vec::with_capacity(selection.len());

    for &idx in &selection.indices {
        let rec = &state.dataset.records[idx];
        let point = [rec.payload_mass, rec.outcome.class() as f64];
        if let Some((_, points)) = by_category
            .iter_mut()
            .find(|(c, _)| *c == rec.booster_category)
        {
            points.push(point);
        }
        hover.push((
            point,
            format!("{}\n{:.0} kg\n{}", rec.site, rec.payload_mass, rec.outcome),
        ));
    }

    Plot::new("payload_scatter")
        .legend(Legend::default())
        .height(height)
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("Launch Outcome")
        .include_y(-0.5)
        .include_y(1.5)
        .y_axis_formatter(|mark, _range| {
            if mark.value.abs() < 1e-6 {
                Outcome::Failure.axis_label().to_string()
            } else if (mark.value - 1.0).abs() < 1e-6 {
                Outcome::Success.axis_label().to_string()
            } else {
                String::new()
            }
        })
        .label_formatter(move |name, value| {
            // Snap the hover label to the nearest selected record so the
            // launch site is shown, not just raw coordinates.
            let nearest = hover
                .iter()
                .map(|(p, text)| {
                    let dx = p[0] - value.x;
                    // One outcome-class step counts like 2000 kg.
                    let dy = (p[1] - value.y) * 2000.0;
                    (dx * dx + dy * dy, text)
                })
                .min_by(|a, b| a.0.total_cmp(&b.0));
            match nearest {
                Some((d2, text)) if d2.sqrt() <= 500.0 => {
                    if name.is_empty() {
                        text.clone()
                    } else {
                        format!("{name}\n{text}")
                    }
                }
                _ => format!("{:.0} kg", value.x),
            }
        })
        .show(ui, |plot_ui| {
            for (category, points) in by_category {
                if points.is_empty() {
                    continue;
                }
                plot_ui.points(
                    Points::new(PlotPoints::from(points))
                        .name(category)
                        .color(state.category_colors.color_for(category))
                        .shape(MarkerShape::Circle)
                        .radius(4.0),
                );
            }
        });
}
