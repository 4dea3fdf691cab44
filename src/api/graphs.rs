use tracing::debug;

use crate::core::document::RECORD_VALUE_KEY;
use crate::core::table::VALUE_COLUMN;
use crate::core::{
    StructuredDocument, TabularDataset, distinct_categories, filter_by_category, head_values,
    value_counts,
};
use crate::interaction::{SessionState, WidgetInput, clamp_num_points, resolve_selection};
use crate::view::{ChartId, ChartKind, ChartSpec, PageView, SelectBox, Slider, ViewElement};

pub const NO_TABLE_DATA: &str = "No CSV data available for this graph.";
pub const NO_CATEGORY_DATA: &str = "No data available for that category.";
pub const NO_DOCUMENT_DATA: &str = "No JSON data available for this graph.";

pub const CATEGORY_SELECT_LABEL: &str = "Select a Category:";
pub const POINT_SLIDER_LABEL: &str = "Select number of data points:";

const CATEGORY_COUNTS_CAPTION: &str =
    "This static bar chart shows how many times each category appears in your CSV data.";
const DOCUMENT_VALUES_CAPTION: &str = "This dynamic graph displays values from your JSON file. \
     Use the slider to change how many points are shown.";

/// Graph 1: bar chart of row counts per category.
pub fn render_category_counts(table: &TabularDataset, view: &mut PageView) {
    view.subheader("Graph 1: Static");
    if table.is_empty() {
        view.warning(NO_TABLE_DATA);
        return;
    }

    let counts = value_counts(table);
    debug!(categories = counts.len(), rows = table.len(), "category counts");
    view.push(ViewElement::Chart(ChartSpec {
        id: ChartId::CategoryCounts,
        kind: ChartKind::Bar,
        series_name: "count".to_owned(),
        labels: counts.labels().map(str::to_owned).collect(),
        values: counts
            .entries()
            .iter()
            .map(|(_, count)| Some(*count as f64))
            .collect(),
    }));
    view.text(CATEGORY_COUNTS_CAPTION);
}

/// Graph 2: line chart of `Value` for the selected category.
///
/// Writes the effective selection back into `session`.
pub fn render_category_values(
    table: &TabularDataset,
    session: &mut SessionState,
    widgets: &WidgetInput,
    view: &mut PageView,
) {
    view.subheader("Graph 2: Dynamic");
    if table.is_empty() {
        view.warning(NO_TABLE_DATA);
        return;
    }

    let options = distinct_categories(table);
    let Some(selected) = resolve_selection(
        &options,
        widgets.category.as_deref(),
        session.selected_category(),
    )
    .map(str::to_owned) else {
        view.warning(NO_CATEGORY_DATA);
        return;
    };

    view.push(ViewElement::SelectBox(SelectBox {
        label: CATEGORY_SELECT_LABEL.to_owned(),
        options: options.clone(),
        selected: selected.clone(),
    }));
    session.select_category(selected.as_str());

    let rows = filter_by_category(table, &selected);
    debug!(category = %selected, rows = rows.len(), "category filter");
    if rows.is_empty() {
        view.warning(NO_CATEGORY_DATA);
        return;
    }

    view.push(ViewElement::Chart(ChartSpec {
        id: ChartId::CategoryValues,
        kind: ChartKind::Line,
        series_name: VALUE_COLUMN.to_owned(),
        labels: rows.iter().map(|row| row.position().to_string()).collect(),
        values: rows.iter().map(|row| row.value()).collect(),
    }));
    view.text(format!(
        "This dynamic line chart shows the values for the selected category: **{selected}**."
    ));
}

/// Graph 3: line chart of the first `num_points` document values.
///
/// Writes the clamped slider position back into `session`.
pub fn render_document_values(
    document: &StructuredDocument,
    session: &mut SessionState,
    widgets: &WidgetInput,
    view: &mut PageView,
) {
    view.subheader("Graph 3: Dynamic");
    if !document.has_records() {
        view.warning(NO_DOCUMENT_DATA);
        return;
    }

    let values = document.coerced_values();
    let requested = widgets.num_points.unwrap_or(session.num_points());
    let num_points = clamp_num_points(requested, values.len());
    view.push(ViewElement::Slider(Slider {
        label: POINT_SLIDER_LABEL.to_owned(),
        min: 1,
        max: values.len(),
        value: num_points,
    }));
    session.set_num_points(num_points);

    let shown = head_values(&values, num_points);
    debug!(
        requested,
        num_points,
        records = values.len(),
        missing = shown.iter().filter(|value| value.is_none()).count(),
        "document slice"
    );
    view.push(ViewElement::Chart(ChartSpec {
        id: ChartId::DocumentValues,
        kind: ChartKind::Line,
        series_name: RECORD_VALUE_KEY.to_owned(),
        labels: (0..shown.len()).map(|index| index.to_string()).collect(),
        values: shown,
    }));
    view.text(DOCUMENT_VALUES_CAPTION);
}
