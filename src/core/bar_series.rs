use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, Viewport};
use crate::error::{DashboardError, DashboardResult};

/// Deterministic geometry for one labelled bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBar {
    pub label: String,
    pub value: f64,
    pub x_left: f64,
    pub x_right: f64,
    pub y_top: f64,
    pub y_bottom: f64,
}

/// Projects labelled values into evenly spaced vertical bars.
///
/// Each bar gets an equal slot of the viewport width; `gap_ratio` of every
/// slot is left empty. Bars grow from zero, so negative values hang below
/// the zero line.
pub fn project_category_bars(
    entries: &[(String, f64)],
    viewport: Viewport,
    gap_ratio: f64,
) -> DashboardResult<Vec<CategoryBar>> {
    if !gap_ratio.is_finite() || !(0.0..1.0).contains(&gap_ratio) {
        return Err(DashboardError::InvalidData(
            "bar gap ratio must be finite and in [0, 1)".to_owned(),
        ));
    }

    if entries.is_empty() {
        return Ok(Vec::new());
    }

    let value_scale = LinearScale::covering(entries.iter().map(|(_, value)| Some(*value)));
    let baseline_y = value_scale.domain_to_pixel_y(0.0, viewport)?;
    let slot_width = f64::from(viewport.width) / entries.len() as f64;
    let inset = slot_width * gap_ratio * 0.5;

    let mut bars = Vec::with_capacity(entries.len());
    for (slot, (label, value)) in entries.iter().enumerate() {
        let slot_left = slot_width * slot as f64;
        let value_y = value_scale.domain_to_pixel_y(*value, viewport)?;
        bars.push(CategoryBar {
            label: label.clone(),
            value: *value,
            x_left: slot_left + inset,
            x_right: slot_left + slot_width - inset,
            y_top: value_y.min(baseline_y),
            y_bottom: value_y.max(baseline_y),
        });
    }

    Ok(bars)
}
