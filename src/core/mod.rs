pub mod aggregate;
pub mod bar_series;
pub mod document;
pub mod line_series;
pub mod loader;
pub mod numeric;
pub mod scale;
pub mod table;
pub mod types;

pub use aggregate::{
    FrequencyTable, distinct_categories, filter_by_category, head_values, value_counts,
};
pub use bar_series::{CategoryBar, project_category_bars};
pub use document::StructuredDocument;
pub use line_series::{LineGeometry, LineSegment, project_line, sample_x};
pub use loader::{LoadStatus, Loaded, load_document, load_table};
pub use numeric::{coerce_numeric, parse_numeric};
pub use scale::LinearScale;
pub use table::{TablePreview, TableRow, TabularDataset};
pub use types::{DataPoint, Viewport};
