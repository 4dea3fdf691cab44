use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, LinearScale, Viewport};
use crate::error::DashboardResult;

/// Projected line segment in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Pixel geometry of one line chart.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LineGeometry {
    /// One marker per present value.
    pub points: Vec<DataPoint>,
    /// Segments joining neighbouring present values; a missing value breaks the line.
    pub segments: Vec<LineSegment>,
}

/// Horizontal pixel of sample `index` out of `count`, spread edge to edge.
///
/// A single sample sits in the middle of the viewport.
#[must_use]
pub fn sample_x(index: usize, count: usize, viewport: Viewport) -> f64 {
    let width = f64::from(viewport.width);
    if count < 2 {
        return width * 0.5;
    }
    width * index as f64 / (count - 1) as f64
}

/// Projects an ordered value series into line geometry.
///
/// The output is deterministic and side-effect free so renderers and tests
/// consume the same geometry.
pub fn project_line(
    values: &[Option<f64>],
    value_scale: LinearScale,
    viewport: Viewport,
) -> DashboardResult<LineGeometry> {
    let mut geometry = LineGeometry::default();
    let mut previous: Option<DataPoint> = None;

    for (index, value) in values.iter().enumerate() {
        let Some(value) = *value else {
            previous = None;
            continue;
        };

        let point = DataPoint::new(
            sample_x(index, values.len(), viewport),
            value_scale.domain_to_pixel_y(value, viewport)?,
        );
        if let Some(start) = previous {
            geometry.segments.push(LineSegment {
                x1: start.x,
                y1: start.y,
                x2: point.x,
                y2: point.y,
            });
        }
        geometry.points.push(point);
        previous = Some(point);
    }

    Ok(geometry)
}
