use serde::{Deserialize, Serialize};

use crate::core::ChartFamily;
use crate::error::{ChartError, ChartResult};

use super::{StyleOptions, TickFormatter, TooltipFormatter};

/// Resolved color of one series: solid, or one entry per label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeriesColor {
    Single(String),
    PerCategory(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedSeries {
    pub name: String,
    pub values: Vec<f64>,
    pub color: SeriesColor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    pub fill: bool,
}

impl ResolvedSeries {
    /// Sum of finite values; the denominator for tooltip shares.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.values.iter().filter(|value| value.is_finite()).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartOptions {
    #[serde(flatten)]
    pub style: StyleOptions,
    pub tick_formatter: Option<TickFormatter>,
    pub tooltip_formatter: Option<TooltipFormatter>,
}

/// Fully resolved, renderer-agnostic chart description.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartSpec {
    pub family: ChartFamily,
    pub labels: Vec<String>,
    pub series: Vec<ResolvedSeries>,
    pub options: ChartOptions,
}

impl ChartSpec {
    /// Designated placeholder for datasets that cannot be charted.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.family == ChartFamily::Unknown && self.series.is_empty()
    }

    /// Checks label alignment of values and per-category colors.
    pub fn validate(&self) -> ChartResult<()> {
        for series in &self.series {
            if series.values.len() != self.labels.len() {
                return Err(ChartError::InvalidData(format!(
                    "series `{}` has {} values for {} labels",
                    series.name,
                    series.values.len(),
                    self.labels.len()
                )));
            }
            if let SeriesColor::PerCategory(colors) = &series.color {
                if colors.len() != self.labels.len() {
                    return Err(ChartError::InvalidData(format!(
                        "series `{}` has {} colors for {} labels",
                        series.name,
                        colors.len(),
                        self.labels.len()
                    )));
                }
            }
        }
        if let Some(ratio) = self.options.style.cutout_ratio {
            if !ratio.is_finite() || !(0.0..1.0).contains(&ratio) {
                return Err(ChartError::InvalidData(
                    "cutout ratio must be finite and in [0, 1)".to_owned(),
                ));
            }
        }
        Ok(())
    }
}
