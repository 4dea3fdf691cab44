use std::io::Write;

use crate::error::{DashboardError, DashboardResult};
use crate::render::Renderer;
use crate::view::PageView;

/// Writes each page view as one JSON document followed by a newline.
#[derive(Debug)]
pub struct JsonRenderer<W: Write> {
    out: W,
    pretty: bool,
}

impl<W: Write> JsonRenderer<W> {
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { out, pretty: false }
    }

    #[must_use]
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn render(&mut self, view: &PageView) -> DashboardResult<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.out, view)?;
        } else {
            serde_json::to_writer(&mut self.out, view)?;
        }
        writeln!(self.out).map_err(DashboardError::Write)?;
        self.out.flush().map_err(DashboardError::Write)
    }
}
