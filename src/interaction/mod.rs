use serde::{Deserialize, Serialize};
use tracing::trace;

pub const DEFAULT_NUM_POINTS: usize = 3;

/// Fields that survive across render passes of one page session.
///
/// Created once per session with `Default`; widget values are written back
/// through `select_category` and `set_num_points` after every pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    selected_category: String,
    num_points: usize,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            selected_category: String::new(),
            num_points: DEFAULT_NUM_POINTS,
        }
    }
}

impl SessionState {
    #[must_use]
    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    #[must_use]
    pub fn num_points(&self) -> usize {
        self.num_points
    }

    pub fn select_category(&mut self, category: impl Into<String>) {
        self.selected_category = category.into();
        trace!(category = %self.selected_category, "session category updated");
    }

    pub fn set_num_points(&mut self, num_points: usize) {
        self.num_points = num_points;
        trace!(num_points, "session point count updated");
    }
}

/// Values a user entered into widgets since the previous pass.
///
/// `None` means the widget was left untouched and falls back to session state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WidgetInput {
    pub category: Option<String>,
    pub num_points: Option<usize>,
}

impl WidgetInput {
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn with_num_points(mut self, num_points: usize) -> Self {
        self.num_points = Some(num_points);
        self
    }
}

/// Event that triggers a full render pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserEvent {
    SelectCategory(String),
    SetNumPoints(usize),
    /// Re-read the input files without touching any widget.
    Refresh,
}

impl From<UserEvent> for WidgetInput {
    fn from(event: UserEvent) -> Self {
        match event {
            UserEvent::SelectCategory(category) => Self::default().with_category(category),
            UserEvent::SetNumPoints(num_points) => Self::default().with_num_points(num_points),
            UserEvent::Refresh => Self::default(),
        }
    }
}

/// Clamps a requested point count into the slider range `[1, record_count]`.
///
/// `record_count` of zero is treated as one so the result is always a valid
/// slider position.
#[must_use]
pub fn clamp_num_points(requested: usize, record_count: usize) -> usize {
    requested.clamp(1, record_count.max(1))
}

/// Picks the selector value: widget input, then session, then first option.
///
/// Values not present in `options` are skipped. Returns `None` only when
/// `options` is empty.
#[must_use]
pub fn resolve_selection<'a>(
    options: &'a [String],
    requested: Option<&str>,
    remembered: &str,
) -> Option<&'a str> {
    let find = |wanted: &str| {
        options
            .iter()
            .find(|option| option.as_str() == wanted)
            .map(String::as_str)
    };

    requested
        .and_then(find)
        .or_else(|| find(remembered))
        .or_else(|| options.first().map(String::as_str))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_starts_with_defaults() {
        let session = SessionState::default();
        assert_eq!(session.selected_category(), "");
        assert_eq!(session.num_points(), 3);
    }

    #[test]
    fn clamp_handles_both_bounds() {
        assert_eq!(clamp_num_points(0, 5), 1);
        assert_eq!(clamp_num_points(9, 5), 5);
        assert_eq!(clamp_num_points(3, 5), 3);
        assert_eq!(clamp_num_points(3, 0), 1);
    }

    #[test]
    fn selection_prefers_widget_then_session_then_first() {
        let options = vec!["A".to_owned(), "B".to_owned()];
        assert_eq!(resolve_selection(&options, Some("B"), "A"), Some("B"));
        assert_eq!(resolve_selection(&options, Some("Z"), "B"), Some("B"));
        assert_eq!(resolve_selection(&options, None, ""), Some("A"));
        assert_eq!(resolve_selection(&[], Some("A"), "A"), None);
    }
}
