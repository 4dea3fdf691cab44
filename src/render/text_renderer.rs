use std::io::{self, Write};

use crate::core::TablePreview;
use crate::error::{DashboardError, DashboardResult};
use crate::render::Renderer;
use crate::view::{ChartKind, ChartSpec, NoticeLevel, PageView, ViewElement};

const BAR_WIDTH_CHARS: f64 = 40.0;
const DIVIDER: &str = "----------------------------------------";
const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Plain-text renderer for terminals and logs.
#[derive(Debug)]
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_view(&mut self, view: &PageView) -> io::Result<()> {
        for element in &view.elements {
            match element {
                // Page metadata has no visible body in a terminal.
                ViewElement::PageConfig { .. } => {}
                ViewElement::Title { text } => writeln!(self.out, "# {text}")?,
                ViewElement::Header { text } => writeln!(self.out, "\n## {text}")?,
                ViewElement::Subheader { text } => writeln!(self.out, "\n### {text}")?,
                ViewElement::Text { text } => writeln!(self.out, "{text}")?,
                ViewElement::Divider => writeln!(self.out, "{DIVIDER}")?,
                ViewElement::Notice(notice) => {
                    let tag = match notice.level {
                        NoticeLevel::Success => "ok",
                        NoticeLevel::Warning => "warn",
                    };
                    writeln!(self.out, "[{tag}] {}", notice.message)?;
                }
                ViewElement::Table(preview) => self.write_table(preview)?,
                ViewElement::Json { value } => {
                    let pretty = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
                    writeln!(self.out, "{pretty}")?;
                }
                ViewElement::SelectBox(select_box) => writeln!(
                    self.out,
                    "{} [{}]  options: {}",
                    select_box.label,
                    select_box.selected,
                    select_box.options.join(", ")
                )?,
                ViewElement::Slider(slider) => writeln!(
                    self.out,
                    "{} {} (range {}..={})",
                    slider.label, slider.value, slider.min, slider.max
                )?,
                ViewElement::Chart(chart) => match chart.kind {
                    ChartKind::Bar => self.write_bar_chart(chart)?,
                    ChartKind::Line => self.write_line_chart(chart)?,
                },
            }
        }
        self.out.flush()
    }

    fn write_table(&mut self, preview: &TablePreview) -> io::Result<()> {
        let mut widths = preview
            .columns
            .iter()
            .map(|column| column.chars().count())
            .collect::<Vec<_>>();
        for row in &preview.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        self.write_table_row(&preview.columns, &widths)?;
        for row in &preview.rows {
            self.write_table_row(row, &widths)?;
        }
        writeln!(
            self.out,
            "({} of {} rows)",
            preview.rows.len(),
            preview.total_rows
        )
    }

    fn write_table_row(&mut self, cells: &[String], widths: &[usize]) -> io::Result<()> {
        let line = cells
            .iter()
            .zip(widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join(" | ");
        writeln!(self.out, "{}", line.trim_end())
    }

    fn write_bar_chart(&mut self, chart: &ChartSpec) -> io::Result<()> {
        let label_width = label_width(chart);
        let max = chart
            .values
            .iter()
            .flatten()
            .fold(0.0_f64, |max, value| max.max(value.abs()));

        for (label, value) in chart.labels.iter().zip(&chart.values) {
            let magnitude = value.map_or(0.0, f64::abs);
            let length = if max > 0.0 {
                (magnitude / max * BAR_WIDTH_CHARS).round() as usize
            } else {
                0
            };
            writeln!(
                self.out,
                "{label:<label_width$} | {} {}",
                "█".repeat(length),
                format_value(*value)
            )?;
        }
        Ok(())
    }

    fn write_line_chart(&mut self, chart: &ChartSpec) -> io::Result<()> {
        writeln!(self.out, "{}: {}", chart.series_name, sparkline(&chart.values))?;
        let label_width = label_width(chart);
        for (label, value) in chart.labels.iter().zip(&chart.values) {
            writeln!(self.out, "{label:>label_width$} | {}", format_value(*value))?;
        }
        Ok(())
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, view: &PageView) -> DashboardResult<()> {
        self.write_view(view).map_err(DashboardError::Write)
    }
}

fn label_width(chart: &ChartSpec) -> usize {
    chart
        .labels
        .iter()
        .map(|label| label.chars().count())
        .max()
        .unwrap_or(0)
}

/// Formats a chart value; whole numbers print without a fraction, gaps as `null`.
#[must_use]
pub fn format_value(value: Option<f64>) -> String {
    match value {
        None => "null".to_owned(),
        Some(value) if value.fract() == 0.0 && value.abs() < 1e15 => format!("{value:.0}"),
        Some(value) => value.to_string(),
    }
}

/// One block character per sample scaled between the series min and max.
///
/// Gaps render as spaces; a flat series renders at mid height.
#[must_use]
pub fn sparkline(values: &[Option<f64>]) -> String {
    let (min, max) = values
        .iter()
        .flatten()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), value| {
            (min.min(*value), max.max(*value))
        });
    let top = (SPARK_LEVELS.len() - 1) as f64;

    values
        .iter()
        .map(|value| match value {
            None => ' ',
            Some(_) if max <= min => SPARK_LEVELS[SPARK_LEVELS.len() / 2],
            Some(value) => {
                let level = ((value - min) / (max - min) * top).round() as usize;
                SPARK_LEVELS[level.min(SPARK_LEVELS.len() - 1)]
            }
        })
        .collect()
}
