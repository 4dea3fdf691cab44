//! Backend-agnostic description of one rendered page.
//!
//! A `PageView` is plain data: renderers turn it into terminal text, JSON or
//! pixel frames, and tests inspect it directly.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::TablePreview;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }
}

/// Which of the three page charts a spec belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartId {
    CategoryCounts,
    CategoryValues,
    DocumentValues,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    Line,
}

/// Data behind one chart.
///
/// `labels[i]` names the x position of `values[i]`: a category for bar
/// charts, the source row index for line charts. A `None` value is a gap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub id: ChartId,
    pub kind: ChartKind,
    pub series_name: String,
    pub labels: Vec<String>,
    pub values: Vec<Option<f64>>,
}

impl ChartSpec {
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Label/value pairs with gaps dropped.
    pub fn present_points(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.labels
            .iter()
            .zip(&self.values)
            .filter_map(|(label, value)| value.map(|value| (label.as_str(), value)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectBox {
    pub label: String,
    pub options: Vec<String>,
    pub selected: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slider {
    pub label: String,
    pub min: usize,
    pub max: usize,
    pub value: usize,
}

/// One piece of page content, tagged by `element` when serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "element", rename_all = "snake_case")]
pub enum ViewElement {
    PageConfig { title: String, icon: String },
    Title { text: String },
    Header { text: String },
    Subheader { text: String },
    Text { text: String },
    Divider,
    Notice(Notice),
    Table(TablePreview),
    Json { value: Value },
    SelectBox(SelectBox),
    Slider(Slider),
    Chart(ChartSpec),
}

/// Ordered page content produced by one render pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PageView {
    pub elements: Vec<ViewElement>,
}

impl PageView {
    pub fn push(&mut self, element: ViewElement) {
        self.elements.push(element);
    }

    pub fn title(&mut self, text: impl Into<String>) {
        self.push(ViewElement::Title { text: text.into() });
    }

    pub fn header(&mut self, text: impl Into<String>) {
        self.push(ViewElement::Header { text: text.into() });
    }

    pub fn subheader(&mut self, text: impl Into<String>) {
        self.push(ViewElement::Subheader { text: text.into() });
    }

    pub fn text(&mut self, text: impl Into<String>) {
        self.push(ViewElement::Text { text: text.into() });
    }

    pub fn divider(&mut self) {
        self.push(ViewElement::Divider);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ViewElement::Notice(Notice::success(message)));
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(ViewElement::Notice(Notice::warning(message)));
    }

    pub fn charts(&self) -> impl Iterator<Item = &ChartSpec> + '_ {
        self.elements.iter().filter_map(|element| match element {
            ViewElement::Chart(chart) => Some(chart),
            _ => None,
        })
    }

    #[must_use]
    pub fn chart(&self, id: ChartId) -> Option<&ChartSpec> {
        self.charts().find(|chart| chart.id == id)
    }

    pub fn notices(&self) -> impl Iterator<Item = &Notice> + '_ {
        self.elements.iter().filter_map(|element| match element {
            ViewElement::Notice(notice) => Some(notice),
            _ => None,
        })
    }

    pub fn warnings(&self) -> impl Iterator<Item = &str> + '_ {
        self.notices()
            .filter(|notice| notice.level == NoticeLevel::Warning)
            .map(|notice| notice.message.as_str())
    }

    #[must_use]
    pub fn select_box(&self) -> Option<&SelectBox> {
        self.elements.iter().find_map(|element| match element {
            ViewElement::SelectBox(select_box) => Some(select_box),
            _ => None,
        })
    }

    #[must_use]
    pub fn slider(&self) -> Option<&Slider> {
        self.elements.iter().find_map(|element| match element {
            ViewElement::Slider(slider) => Some(slider),
            _ => None,
        })
    }

    /// Plain text lines (captions, intro), in page order.
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.elements.iter().filter_map(|element| match element {
            ViewElement::Text { text } => Some(text.as_str()),
            _ => None,
        })
    }
}
