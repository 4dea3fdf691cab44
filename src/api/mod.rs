mod dashboard_config;
pub mod graphs;
mod page;

pub use dashboard_config::DashboardConfig;
pub use page::{PAGE_ICON, PAGE_TITLE, PageInputs, load_inputs, render_page};

use tracing::{debug, info};

use crate::error::DashboardResult;
use crate::interaction::{SessionState, UserEvent, WidgetInput};
use crate::render::Renderer;
use crate::view::PageView;

/// Event loop around the page: one user event, one full render pass.
///
/// Every pass reloads both input files, so edits on disk show up on the next
/// event. Session state lives as long as the app.
pub struct DashboardApp<R: Renderer> {
    renderer: R,
    config: DashboardConfig,
    session: SessionState,
    passes: u64,
}

impl<R: Renderer> DashboardApp<R> {
    pub fn new(renderer: R, config: DashboardConfig) -> DashboardResult<Self> {
        config.validate()?;
        info!(
            table = %config.table_path.display(),
            document = %config.document_path.display(),
            "dashboard session started"
        );
        Ok(Self {
            renderer,
            config,
            session: SessionState::default(),
            passes: 0,
        })
    }

    /// Applies `event` and runs a render pass.
    pub fn handle(&mut self, event: UserEvent) -> DashboardResult<PageView> {
        debug!(?event, "user event");
        self.run_pass(&WidgetInput::from(event))
    }

    /// Runs a render pass with several widget values applied at once.
    pub fn run_pass(&mut self, widgets: &WidgetInput) -> DashboardResult<PageView> {
        let inputs = load_inputs(&self.config)?;
        let view = render_page(&inputs, &mut self.session, widgets, &self.config);
        self.renderer.render(&view)?;
        self.passes += 1;
        debug!(pass = self.passes, "render pass complete");
        Ok(view)
    }

    #[must_use]
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    #[must_use]
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Number of completed render passes.
    #[must_use]
    pub fn passes(&self) -> u64 {
        self.passes
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
