use crate::core::Viewport;
use crate::error::{DashboardError, DashboardResult};
use crate::render::{LinePrimitive, RectPrimitive, TextPrimitive};
use crate::view::ChartId;

/// Pixel scene for one chart of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub chart: ChartId,
    pub viewport: Viewport,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(chart: ChartId, viewport: Viewport) -> Self {
        Self {
            chart,
            viewport,
            lines: Vec::new(),
            rects: Vec::new(),
            texts: Vec::new(),
        }
    }

    /// Checks the viewport and every primitive; the first bad one wins.
    pub fn validate(&self) -> DashboardResult<()> {
        if !self.viewport.is_valid() {
            return Err(DashboardError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        self.lines.iter().try_for_each(|line| line.validate())?;
        self.rects.iter().try_for_each(|rect| rect.validate())?;
        self.texts.iter().try_for_each(TextPrimitive::validate)
    }

    #[must_use]
    pub fn primitive_count(&self) -> usize {
        self.lines.len() + self.rects.len() + self.texts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitive_count() == 0
    }
}
