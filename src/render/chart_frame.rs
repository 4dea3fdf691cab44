use crate::core::{LinearScale, Viewport, project_category_bars, project_line, sample_x};
use crate::error::DashboardResult;
use crate::render::{Color, LinePrimitive, RectPrimitive, RenderFrame, TextPrimitive};
use crate::view::{ChartKind, ChartSpec};

const BAR_GAP_RATIO: f64 = 0.2;
const LINE_STROKE_PX: f64 = 2.0;
const AXIS_STROKE_PX: f64 = 1.0;
const MARKER_SIZE_PX: f64 = 4.0;
const LABEL_BASELINE_INSET_PX: f64 = 2.0;

/// Projects one chart spec into a pixel frame.
///
/// Bars become filled rects, line samples become segments plus square
/// markers. A horizontal axis is drawn at value zero and every x position
/// gets its label along the bottom edge.
pub fn build_chart_frame(chart: &ChartSpec, viewport: Viewport) -> DashboardResult<RenderFrame> {
    let mut frame = RenderFrame::new(chart.id, viewport);
    if chart.is_empty() {
        return Ok(frame);
    }

    let value_scale = LinearScale::covering(chart.values.iter().copied());
    let zero_y = value_scale.domain_to_pixel_y(0.0, viewport)?;
    frame.lines.push(LinePrimitive::new(
        0.0,
        zero_y,
        f64::from(viewport.width),
        zero_y,
        AXIS_STROKE_PX,
        Color::AXIS,
    ));

    let label_y = f64::from(viewport.height) - LABEL_BASELINE_INSET_PX;
    match chart.kind {
        ChartKind::Bar => {
            let entries = chart
                .present_points()
                .map(|(label, value)| (label.to_owned(), value))
                .collect::<Vec<_>>();
            for bar in project_category_bars(&entries, viewport, BAR_GAP_RATIO)? {
                frame.rects.push(RectPrimitive::new(
                    bar.x_left,
                    bar.y_top,
                    bar.x_right - bar.x_left,
                    bar.y_bottom - bar.y_top,
                    Color::SERIES,
                ));
                push_label(
                    &mut frame,
                    &bar.label,
                    (bar.x_left + bar.x_right) * 0.5,
                    label_y,
                );
            }
        }
        ChartKind::Line => {
            let geometry = project_line(&chart.values, value_scale, viewport)?;
            for segment in &geometry.segments {
                frame.lines.push(LinePrimitive::new(
                    segment.x1,
                    segment.y1,
                    segment.x2,
                    segment.y2,
                    LINE_STROKE_PX,
                    Color::SERIES,
                ));
            }
            let half = MARKER_SIZE_PX * 0.5;
            for point in &geometry.points {
                frame.rects.push(RectPrimitive::new(
                    point.x - half,
                    point.y - half,
                    MARKER_SIZE_PX,
                    MARKER_SIZE_PX,
                    Color::SERIES,
                ));
            }
            for (index, label) in chart.labels.iter().enumerate() {
                let x = sample_x(index, chart.labels.len(), viewport);
                push_label(&mut frame, label, x, label_y);
            }
        }
    }

    Ok(frame)
}

fn push_label(frame: &mut RenderFrame, label: &str, x: f64, y: f64) {
    if label.is_empty() {
        return;
    }
    frame.texts.push(TextPrimitive::new(label, x, y));
}
