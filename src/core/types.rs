use std::hash::{DefaultHasher, Hash, Hasher};

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::DataShapeError;

/// Shape category a dataset is rendered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartFamily {
    Line,
    Bar,
    Pie,
    Radar,
    #[default]
    Unknown,
}

impl ChartFamily {
    /// Families drawn on an x/y plane where series may be stride-sampled.
    #[must_use]
    pub fn is_cartesian(self) -> bool {
        matches!(self, Self::Line | Self::Bar)
    }

    /// Families where each label is a slice or spoke of one whole.
    #[must_use]
    pub fn is_categorical(self) -> bool {
        matches!(self, Self::Pie | Self::Radar)
    }
}

/// Coarse device class derived from viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayProfile {
    Compact,
    #[default]
    Standard,
}

impl DisplayProfile {
    /// Parses a profile name, falling back to `Standard` for anything unknown.
    #[must_use]
    pub fn parse_lossy(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "compact" | "mobile" => Self::Compact,
            "standard" | "desktop" => Self::Standard,
            other => {
                warn!(profile = other, "unrecognized display profile, using standard");
                Self::Standard
            }
        }
    }
}

/// Color theme supplied by the host. The pipeline never mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Parses a theme name, falling back to `Light` for anything unknown.
    #[must_use]
    pub fn parse_lossy(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "light" => Self::Light,
            "dark" => Self::Dark,
            other => {
                warn!(theme = other, "unrecognized theme, using light");
                Self::Light
            }
        }
    }
}

/// Color supplied with a raw series: one solid color or one per category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorHint {
    Single(String),
    PerCategory(Vec<String>),
}

/// One named value array aligned with `Dataset::labels`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
    #[serde(default)]
    pub declared_family: Option<ChartFamily>,
    /// `Some(false)` is the explicit "no fill" line-chart signal.
    #[serde(default)]
    pub fill_hint: Option<bool>,
    #[serde(default)]
    pub color_hint: Option<ColorHint>,
    /// Explicit line styling; its presence rules out pie classification.
    #[serde(default)]
    pub border_color: Option<String>,
}

impl Series {
    #[must_use]
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
            declared_family: None,
            fill_hint: None,
            color_hint: None,
            border_color: None,
        }
    }

    #[must_use]
    pub fn with_declared_family(mut self, family: ChartFamily) -> Self {
        self.declared_family = Some(family);
        self
    }

    #[must_use]
    pub fn with_fill_hint(mut self, fill: bool) -> Self {
        self.fill_hint = Some(fill);
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color_hint = Some(ColorHint::Single(color.into()));
        self
    }

    #[must_use]
    pub fn with_category_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.color_hint = Some(ColorHint::PerCategory(
            colors.into_iter().map(Into::into).collect(),
        ));
        self
    }

    #[must_use]
    pub fn with_border_color(mut self, color: impl Into<String>) -> Self {
        self.border_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn has_category_colors(&self) -> bool {
        matches!(self.color_hint, Some(ColorHint::PerCategory(_)))
    }

    fn hash_content<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.values.len().hash(state);
        for value in &self.values {
            OrderedFloat(*value).hash(state);
        }
        self.declared_family.hash(state);
        self.fill_hint.hash(state);
        self.color_hint.hash(state);
        self.border_color.hash(state);
    }
}

/// Raw analytic dataset as delivered by the data provider.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub labels: Vec<String>,
    pub series: Vec<Series>,
}

impl Dataset {
    #[must_use]
    pub fn new<I, S>(labels: I, series: Vec<Series>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            series,
        }
    }

    /// Checks label/value alignment for every series.
    pub fn validate_shape(&self) -> Result<(), DataShapeError> {
        if self.series.is_empty() {
            return Err(DataShapeError::NoSeries);
        }
        if self.labels.is_empty() {
            return Err(DataShapeError::MissingLabels {
                series_count: self.series.len(),
            });
        }
        for series in &self.series {
            if series.values.len() != self.labels.len() {
                return Err(DataShapeError::LengthMismatch {
                    series: series.name.clone(),
                    expected: self.labels.len(),
                    actual: series.values.len(),
                });
            }
        }
        Ok(())
    }

    /// Stable content hash used as the dataset part of cache keys.
    ///
    /// Values hash through `OrderedFloat`, so every NaN maps to the same key.
    #[must_use]
    pub fn content_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.labels.hash(&mut hasher);
        self.series.len().hash(&mut hasher);
        for series in &self.series {
            series.hash_content(&mut hasher);
        }
        hasher.finish()
    }
}
