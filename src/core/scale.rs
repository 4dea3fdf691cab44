use crate::core::types::Viewport;
use crate::error::{DashboardError, DashboardResult};

/// Linear mapping from a value domain onto viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> DashboardResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(DashboardError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    /// Builds a value scale covering `values` and always including zero.
    ///
    /// Missing values are ignored. An all-missing or all-zero input falls back
    /// to `[0, 1]`.
    #[must_use]
    pub fn covering(values: impl IntoIterator<Item = Option<f64>>) -> Self {
        let (min, max) = values
            .into_iter()
            .flatten()
            .filter(|value| value.is_finite())
            .fold((0.0_f64, 0.0_f64), |(min, max), value| {
                (min.min(value), max.max(value))
            });

        if min == max {
            return Self {
                domain_start: 0.0,
                domain_end: 1.0,
            };
        }

        Self {
            domain_start: min,
            domain_end: max,
        }
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    /// Maps a domain value onto the horizontal axis, left to right.
    pub fn domain_to_pixel_x(self, value: f64, viewport: Viewport) -> DashboardResult<f64> {
        let normalized = self.normalize(value, viewport)?;
        Ok(normalized * f64::from(viewport.width))
    }

    /// Maps a domain value onto the vertical axis, bottom to top.
    pub fn domain_to_pixel_y(self, value: f64, viewport: Viewport) -> DashboardResult<f64> {
        let normalized = self.normalize(value, viewport)?;
        let height = f64::from(viewport.height);
        Ok(height - normalized * height)
    }

    fn normalize(self, value: f64, viewport: Viewport) -> DashboardResult<f64> {
        if !viewport.is_valid() {
            return Err(DashboardError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        if !value.is_finite() {
            return Err(DashboardError::InvalidData(
                "value must be finite".to_owned(),
            ));
        }

        Ok((value - self.domain_start) / (self.domain_end - self.domain_start))
    }
}
