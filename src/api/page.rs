use tracing::debug;

use crate::core::{Loaded, StructuredDocument, TabularDataset, load_document, load_table};
use crate::error::DashboardResult;
use crate::interaction::{SessionState, WidgetInput};
use crate::view::{PageView, ViewElement};

use super::{DashboardConfig, graphs};

pub const PAGE_TITLE: &str = "Visualizations";
pub const PAGE_ICON: &str = "📈";

/// Freshly loaded inputs for one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PageInputs {
    pub table: Loaded<TabularDataset>,
    pub document: Loaded<StructuredDocument>,
}

/// Loads both input files named by `config`.
///
/// Missing or empty files fall back to their defaults; a malformed table or
/// an unparsable document is returned as an error.
pub fn load_inputs(config: &DashboardConfig) -> DashboardResult<PageInputs> {
    Ok(PageInputs {
        table: load_table(&config.table_path)?,
        document: load_document(&config.document_path)?,
    })
}

/// Runs one full top-to-bottom pass of the page.
///
/// The result depends only on `inputs`, `session` and `widgets`; the effective
/// widget values are written back into `session`.
#[must_use]
pub fn render_page(
    inputs: &PageInputs,
    session: &mut SessionState,
    widgets: &WidgetInput,
    config: &DashboardConfig,
) -> PageView {
    let mut view = PageView::default();
    view.push(ViewElement::PageConfig {
        title: PAGE_TITLE.to_owned(),
        icon: PAGE_ICON.to_owned(),
    });
    view.title(format!("Data Visualizations {PAGE_ICON}"));
    view.text("This page displays graphs based on the collected data.");

    view.divider();
    view.header("Load Data");
    render_table_status(&inputs.table, config.preview_rows, &mut view);
    render_document_status(&inputs.document, &mut view);

    view.divider();
    view.header("Graphs");
    graphs::render_category_counts(&inputs.table.value, &mut view);
    graphs::render_category_values(&inputs.table.value, session, widgets, &mut view);
    graphs::render_document_values(&inputs.document.value, session, widgets, &mut view);

    debug!(
        elements = view.elements.len(),
        selected_category = session.selected_category(),
        num_points = session.num_points(),
        "page rendered"
    );
    view
}

fn render_table_status(table: &Loaded<TabularDataset>, preview_rows: usize, view: &mut PageView) {
    if table.is_loaded() {
        view.success(format!("Loaded {} successfully!", table.source_name));
        view.push(ViewElement::Table(table.value.head(preview_rows)));
    } else {
        view.warning(format!("{} not found or empty.", table.source_name));
    }
}

fn render_document_status(document: &Loaded<StructuredDocument>, view: &mut PageView) {
    if document.is_loaded() {
        view.success(format!("Loaded {} successfully!", document.source_name));
        view.push(ViewElement::Json {
            value: document.value.as_value().clone(),
        });
    } else {
        view.warning(format!("{} not found or empty.", document.source_name));
    }
}
