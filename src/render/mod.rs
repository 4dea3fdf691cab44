mod chart_frame;
mod frame;
mod json_renderer;
mod null_renderer;
mod primitives;
mod text_renderer;

pub use chart_frame::build_chart_frame;
pub use frame::RenderFrame;
pub use json_renderer::JsonRenderer;
pub use null_renderer::NullRenderer;
pub use primitives::{Color, LinePrimitive, RectPrimitive, TextPrimitive};
pub use text_renderer::{TextRenderer, format_value, sparkline};

use crate::error::DashboardResult;
use crate::view::PageView;

/// Contract implemented by any page output backend.
///
/// Backends receive a fully materialized `PageView`, so output code stays
/// isolated from loading and session logic.
pub trait Renderer {
    fn render(&mut self, view: &PageView) -> DashboardResult<()>;
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&mut self, view: &PageView) -> DashboardResult<()> {
        (**self).render(view)
    }
}
