use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::core::DisplayProfile;

const THOUSAND: f64 = 1_000.0;
const MILLION: f64 = 1_000_000.0;
const ELLIPSIS: char = '…';

/// Formats a magnitude with the standard rules: `1500 -> "1.5K"`,
/// `2_300_000 -> "2.3M"`, values below one thousand as given.
#[must_use]
pub fn format_value(value: f64) -> String {
    ValueFormat::for_profile(DisplayProfile::Standard).format(value)
}

/// Magnitude formatting rule used for value ticks and tooltips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValueFormat {
    pub profile: DisplayProfile,
}

impl ValueFormat {
    #[must_use]
    pub fn for_profile(profile: DisplayProfile) -> Self {
        Self { profile }
    }

    /// Abbreviates with `K`/`M`, one decimal, half away from zero.
    ///
    /// Trailing `.0` is dropped and a result that rounds up to `1000K` is
    /// promoted to `1M`. `Compact` drops the decimal once the scaled value
    /// reaches 10 and rounds unabbreviated values to integers before the
    /// thresholds apply, so `999.6` becomes `1K`. Negative zero prints as `0`.
    #[must_use]
    pub fn format(self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }
        let value = if value == 0.0 { 0.0 } else { value };

        let compact = self.profile == DisplayProfile::Compact;
        let magnitude = if compact {
            value.abs().round()
        } else {
            value.abs()
        };
        if magnitude >= THOUSAND {
            if magnitude < MILLION {
                if let Some(thousands) = self
                    .rounded(value / THOUSAND)
                    .filter(|thousands| thousands.abs() < Decimal::ONE_THOUSAND)
                {
                    return format!("{thousands}K");
                }
            }
            return format!("{}M", self.scaled_text(value / MILLION));
        }

        if compact {
            round_half_away(value, 0).map_or_else(|| format!("{value:.0}"), |d| d.to_string())
        } else {
            value.to_string()
        }
    }

    fn decimals(self, scaled: f64) -> u32 {
        if self.profile == DisplayProfile::Compact && scaled.abs() >= 10.0 {
            0
        } else {
            1
        }
    }

    fn rounded(self, scaled: f64) -> Option<Decimal> {
        round_half_away(scaled, self.decimals(scaled))
    }

    /// Rounded text for a scaled magnitude; values outside `Decimal`'s range
    /// (about 7.9e28) fall back to float formatting.
    fn scaled_text(self, scaled: f64) -> String {
        match self.rounded(scaled) {
            Some(decimal) => decimal.to_string(),
            None => {
                let precision = self.decimals(scaled) as usize;
                let text = format!("{scaled:.precision$}");
                match text.strip_suffix(".0") {
                    Some(whole) => whole.to_owned(),
                    None => text,
                }
            }
        }
    }
}

fn round_half_away(value: f64, decimals: u32) -> Option<Decimal> {
    Decimal::from_f64(value).map(|decimal| {
        decimal
            .round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero)
            .normalize()
    })
}

/// Category-axis label policy: tick cap, truncation budget, alternate skipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AxisLabelRule {
    pub max_ticks: usize,
    /// Labels longer than this many characters end in `…`.
    pub max_label_chars: Option<usize>,
    /// Omit every other category label (odd indices).
    pub skip_alternate: bool,
}

impl AxisLabelRule {
    /// Text rendered for the category at `index`, or `None` when omitted.
    #[must_use]
    pub fn category_label(&self, index: usize, label: &str) -> Option<String> {
        if self.skip_alternate && index % 2 == 1 {
            return None;
        }
        Some(match self.max_label_chars {
            Some(budget) => truncate_label(label, budget),
            None => label.to_owned(),
        })
    }

    #[must_use]
    pub fn category_labels(&self, labels: &[String]) -> Vec<Option<String>> {
        labels
            .iter()
            .enumerate()
            .map(|(index, label)| self.category_label(index, label))
            .collect()
    }
}

/// Shortens `label` to at most `budget` characters, ending in `…` when cut.
#[must_use]
pub fn truncate_label(label: &str, budget: usize) -> String {
    if label.chars().count() <= budget {
        return label.to_owned();
    }
    if budget == 0 {
        return String::new();
    }
    let mut truncated: String = label.chars().take(budget - 1).collect();
    truncated.push(ELLIPSIS);
    truncated
}

/// Axis formatting attached to a spec: value ticks plus category labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TickFormatter {
    pub value: ValueFormat,
    pub axis: AxisLabelRule,
}

impl TickFormatter {
    #[must_use]
    pub fn format_tick(&self, value: f64) -> String {
        self.value.format(value)
    }

    #[must_use]
    pub fn format_category(&self, index: usize, label: &str) -> Option<String> {
        self.axis.category_label(index, label)
    }
}

/// Tooltip text rule; categorical charts append each slice's share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TooltipFormatter {
    pub value: ValueFormat,
    pub show_share: bool,
}

impl TooltipFormatter {
    /// `"label: value"`, or `"label: value (xx.x%)"` when shares are shown
    /// and `series_total` is a finite non-zero sum.
    #[must_use]
    pub fn format(&self, label: &str, value: f64, series_total: f64) -> String {
        let mut text = format!("{label}: {}", self.value.format(value));
        if self.show_share && series_total.is_finite() && series_total != 0.0 {
            let share = value / series_total * 100.0;
            text.push_str(&format!(" ({share:.1}%)"));
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::{AxisLabelRule, TooltipFormatter, ValueFormat, format_value, truncate_label};
    use crate::core::DisplayProfile;

    #[test]
    fn standard_format_matches_dashboard_rules() {
        assert_eq!(format_value(999.0), "999");
        assert_eq!(format_value(1_500.0), "1.5K");
        assert_eq!(format_value(2_300_000.0), "2.3M");
        assert_eq!(format_value(1_000.0), "1K");
        assert_eq!(format_value(12.25), "12.25");
        assert_eq!(format_value(-4_560.0), "-4.6K");
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        assert_eq!(format_value(1_250.0), "1.3K");
        assert_eq!(format_value(1_050_000.0), "1.1M");
    }

    #[test]
    fn thousands_that_round_up_are_promoted_to_millions() {
        assert_eq!(format_value(999_950.0), "1M");
        assert_eq!(format_value(999_940.0), "999.9K");
    }

    #[test]
    fn compact_format_is_more_aggressive() {
        let compact = ValueFormat::for_profile(DisplayProfile::Compact);
        assert_eq!(compact.format(1_500.0), "1.5K");
        assert_eq!(compact.format(12_345.0), "12K");
        assert_eq!(compact.format(42.6), "43");
        assert_eq!(compact.format(2_300_000.0), "2.3M");
        assert_eq!(compact.format(999.6), "1K");
        assert_eq!(compact.format(-999.5), "-1K");
        assert_eq!(compact.format(999.4), "999");
    }

    #[test]
    fn magnitudes_beyond_decimal_range_still_scale_to_millions() {
        for value in [1e35, 1e40, -1e40] {
            let text = format_value(value);
            assert!(text.ends_with('M'), "{text}");
            assert!(!text.contains('.'), "{text}");
            assert!(text.trim_start_matches('-').len() >= 29, "{text}");
        }
        assert!(format_value(-1e40).starts_with('-'));

        let max = format_value(f64::MAX);
        assert!(max.starts_with("179769313486231"), "{max}");
        assert!(max.ends_with('M'));
        assert_ne!(
            ValueFormat::for_profile(DisplayProfile::Compact).format(f64::MAX),
            "0M"
        );
    }

    #[test]
    fn negative_zero_formats_like_zero() {
        assert_eq!(format_value(-0.0), "0");
        assert_eq!(ValueFormat::for_profile(DisplayProfile::Compact).format(-0.0), "0");
        assert_eq!(ValueFormat::for_profile(DisplayProfile::Compact).format(-0.3), "0");
    }

    #[test]
    fn non_finite_values_pass_through() {
        assert_eq!(format_value(f64::NAN), "NaN");
        assert_eq!(format_value(f64::INFINITY), "inf");
    }

    #[test]
    fn truncation_respects_character_budget() {
        assert_eq!(truncate_label("Electronic", 10), "Electronic");
        assert_eq!(truncate_label("Electronica", 10), "Electroni…");
        assert_eq!(truncate_label("Beyoncé Knowles", 8), "Beyoncé…");
    }

    #[test]
    fn alternate_skipping_drops_odd_labels() {
        let rule = AxisLabelRule {
            max_ticks: 6,
            max_label_chars: None,
            skip_alternate: true,
        };
        let labels: Vec<String> = ["a", "b", "c"].iter().map(|s| (*s).to_owned()).collect();
        assert_eq!(
            rule.category_labels(&labels),
            vec![Some("a".to_owned()), None, Some("c".to_owned())]
        );
    }

    #[test]
    fn tooltip_appends_share_for_categorical_charts() {
        let tooltip = TooltipFormatter {
            value: ValueFormat::for_profile(DisplayProfile::Standard),
            show_share: true,
        };
        assert_eq!(tooltip.format("Rock", 1_500.0, 6_000.0), "Rock: 1.5K (25.0%)");
        assert_eq!(tooltip.format("Rock", 1_500.0, 0.0), "Rock: 1.5K");
    }
}
