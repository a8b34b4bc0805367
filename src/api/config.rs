use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::DisplayProfile;
use crate::error::{ChartError, ChartResult};

use super::resolve_profile;

/// Pipeline tuning shared by every chart on a dashboard.
///
/// This type is serializable so hosts can ship tuning alongside their theme
/// tokens; every field falls back to its default when missing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Viewports narrower than this resolve to `Compact`.
    #[serde(default = "default_compact_breakpoint_px")]
    pub compact_breakpoint_px: f64,
    #[serde(default = "default_resize_debounce_ms")]
    pub resize_debounce_ms: u64,
    /// Stride-sampling target for line/bar charts on compact displays.
    #[serde(default = "default_compact_target_points")]
    pub compact_target_points: usize,
    /// Pie/radar slices kept before the tail folds into "Other".
    #[serde(default = "default_max_slices")]
    pub max_slices: usize,
    #[serde(default = "default_compact_max_ticks")]
    pub compact_max_ticks: usize,
    #[serde(default = "default_standard_max_ticks")]
    pub standard_max_ticks: usize,
    #[serde(default = "default_compact_label_max_chars")]
    pub compact_label_max_chars: usize,
    /// Compact category axes with more labels than this omit every other one.
    #[serde(default = "default_dense_label_threshold")]
    pub dense_label_threshold: usize,
    #[serde(default = "default_standard_animation_ms")]
    pub standard_animation_ms: u32,
    #[serde(default = "default_compact_animation_ms")]
    pub compact_animation_ms: u32,
    #[serde(default = "default_pie_cutout_ratio")]
    pub pie_cutout_ratio: Option<f64>,
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            compact_breakpoint_px: default_compact_breakpoint_px(),
            resize_debounce_ms: default_resize_debounce_ms(),
            compact_target_points: default_compact_target_points(),
            max_slices: default_max_slices(),
            compact_max_ticks: default_compact_max_ticks(),
            standard_max_ticks: default_standard_max_ticks(),
            compact_label_max_chars: default_compact_label_max_chars(),
            dense_label_threshold: default_dense_label_threshold(),
            standard_animation_ms: default_standard_animation_ms(),
            compact_animation_ms: default_compact_animation_ms(),
            pie_cutout_ratio: default_pie_cutout_ratio(),
            cache_capacity: default_cache_capacity(),
        }
    }
}

impl PipelineConfig {
    #[must_use]
    pub fn with_compact_breakpoint_px(mut self, breakpoint_px: f64) -> Self {
        self.compact_breakpoint_px = breakpoint_px;
        self
    }

    #[must_use]
    pub fn with_resize_debounce_ms(mut self, debounce_ms: u64) -> Self {
        self.resize_debounce_ms = debounce_ms;
        self
    }

    #[must_use]
    pub fn with_compact_target_points(mut self, target_points: usize) -> Self {
        self.compact_target_points = target_points;
        self
    }

    #[must_use]
    pub fn with_max_slices(mut self, max_slices: usize) -> Self {
        self.max_slices = max_slices;
        self
    }

    #[must_use]
    pub fn with_pie_cutout_ratio(mut self, cutout_ratio: Option<f64>) -> Self {
        self.pie_cutout_ratio = cutout_ratio;
        self
    }

    #[must_use]
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    #[must_use]
    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    #[must_use]
    pub fn resolve_profile(&self, viewport_width_px: f64) -> DisplayProfile {
        resolve_profile(viewport_width_px, self.compact_breakpoint_px)
    }

    #[must_use]
    pub fn max_ticks(&self, profile: DisplayProfile) -> usize {
        match profile {
            DisplayProfile::Compact => self.compact_max_ticks,
            DisplayProfile::Standard => self.standard_max_ticks,
        }
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.compact_breakpoint_px.is_finite() || self.compact_breakpoint_px <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "compact breakpoint must be finite and > 0".to_owned(),
            ));
        }
        if !(150..=300).contains(&self.resize_debounce_ms) {
            return Err(ChartError::InvalidConfig(
                "resize debounce must be between 150 and 300 ms".to_owned(),
            ));
        }
        if self.compact_target_points == 0 {
            return Err(ChartError::InvalidConfig(
                "compact target points must be >= 1".to_owned(),
            ));
        }
        if self.max_slices < 2 {
            return Err(ChartError::InvalidConfig(
                "max slices must be >= 2 to leave room for the \"Other\" slice".to_owned(),
            ));
        }
        if !(5..=8).contains(&self.compact_max_ticks) {
            return Err(ChartError::InvalidConfig(
                "compact max ticks must be between 5 and 8".to_owned(),
            ));
        }
        if self.standard_max_ticks < self.compact_max_ticks {
            return Err(ChartError::InvalidConfig(
                "standard max ticks must be >= compact max ticks".to_owned(),
            ));
        }
        if self.compact_label_max_chars < 2 {
            return Err(ChartError::InvalidConfig(
                "compact label budget must be >= 2 characters".to_owned(),
            ));
        }
        if self.compact_animation_ms > self.standard_animation_ms {
            return Err(ChartError::InvalidConfig(
                "compact animation must not be longer than standard animation".to_owned(),
            ));
        }
        if let Some(ratio) = self.pie_cutout_ratio {
            if !ratio.is_finite() || !(0.0..1.0).contains(&ratio) {
                return Err(ChartError::InvalidConfig(
                    "pie cutout ratio must be finite and in [0, 1)".to_owned(),
                ));
            }
        }
        if self.cache_capacity == 0 {
            return Err(ChartError::InvalidConfig(
                "cache capacity must be >= 1".to_owned(),
            ));
        }
        Ok(self)
    }
}

fn default_compact_breakpoint_px() -> f64 {
    768.0
}

fn default_resize_debounce_ms() -> u64 {
    200
}

fn default_compact_target_points() -> usize {
    6
}

fn default_max_slices() -> usize {
    5
}

fn default_compact_max_ticks() -> usize {
    6
}

fn default_standard_max_ticks() -> usize {
    10
}

fn default_compact_label_max_chars() -> usize {
    10
}

fn default_dense_label_threshold() -> usize {
    6
}

fn default_standard_animation_ms() -> u32 {
    800
}

fn default_compact_animation_ms() -> u32 {
    400
}

fn default_pie_cutout_ratio() -> Option<f64> {
    Some(0.6)
}

fn default_cache_capacity() -> usize {
    64
}
