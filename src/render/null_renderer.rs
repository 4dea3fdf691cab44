use crate::core::Viewport;
use crate::error::DashboardResult;
use crate::render::{Renderer, build_chart_frame};
use crate::view::PageView;

/// Headless renderer used by tests and embedding hosts.
///
/// Nothing is drawn, but every chart is still projected into a frame and
/// validated so bad geometry surfaces without a real backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub viewport: Viewport,
    pub passes: usize,
    pub last_element_count: usize,
    pub last_chart_count: usize,
    pub last_warning_count: usize,
    pub last_primitive_count: usize,
}

impl NullRenderer {
    #[must_use]
    pub fn with_viewport(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }
}

impl Renderer for NullRenderer {
    fn render(&mut self, view: &PageView) -> DashboardResult<()> {
        let mut primitives = 0;
        for chart in view.charts() {
            let frame = build_chart_frame(chart, self.viewport)?;
            frame.validate()?;
            primitives += frame.primitive_count();
        }

        self.passes += 1;
        self.last_element_count = view.elements.len();
        self.last_chart_count = view.charts().count();
        self.last_warning_count = view.warnings().count();
        self.last_primitive_count = primitives;
        Ok(())
    }
}
