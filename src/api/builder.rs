#[cfg(feature = "parallel-build")]
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::core::{
    ChartFamily, ColorHint, Dataset, DisplayProfile, Series, ThemeMode, classify, consolidate,
    reduce, should_consolidate, should_reduce,
};
use crate::error::{ChartResult, DataShapeError};

use super::style::OTHER_SLICE_COLOR;
use super::{
    AxisLabelRule, ChartOptions, ChartSpec, PipelineConfig, ResolvedSeries, SeriesColor,
    ThemePalette, TickFormatter, TooltipFormatter, ValueFormat, resolve_style,
};

/// Turns `(Dataset, DisplayProfile, ThemeMode)` into a `ChartSpec`.
///
/// The builder holds only its validated config, so `build` is a pure
/// function of its arguments and equal inputs give deep-equal specs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartSpecBuilder {
    config: PipelineConfig,
}

impl ChartSpecBuilder {
    pub fn new(config: PipelineConfig) -> ChartResult<Self> {
        Ok(Self {
            config: config.validate()?,
        })
    }

    #[must_use]
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Builds a spec, substituting `ChartSpec::empty()` for malformed datasets.
    #[must_use]
    pub fn build(&self, dataset: &Dataset, profile: DisplayProfile, theme: ThemeMode) -> ChartSpec {
        match self.try_build(dataset, profile, theme) {
            Ok(spec) => spec,
            Err(err) => {
                warn!(error = %err, "malformed dataset, emitting empty chart spec");
                ChartSpec::empty()
            }
        }
    }

    /// Builds specs for every chart on a screen, in input order.
    #[must_use]
    pub fn build_all(
        &self,
        datasets: &[Dataset],
        profile: DisplayProfile,
        theme: ThemeMode,
    ) -> Vec<ChartSpec> {
        #[cfg(feature = "parallel-build")]
        {
            datasets
                .par_iter()
                .map(|dataset| self.build(dataset, profile, theme))
                .collect()
        }

        #[cfg(not(feature = "parallel-build"))]
        {
            datasets
                .iter()
                .map(|dataset| self.build(dataset, profile, theme))
                .collect()
        }
    }

    /// Pipeline order: validate, classify, reduce or consolidate, formatters,
    /// style, assemble.
    pub fn try_build(
        &self,
        dataset: &Dataset,
        profile: DisplayProfile,
        theme: ThemeMode,
    ) -> Result<ChartSpec, DataShapeError> {
        dataset.validate_shape()?;

        let family = classify(&dataset.series);
        if family.is_categorical() && !has_usable_values(&dataset.series[0]) {
            return Err(DataShapeError::NoUsableValues { family });
        }

        let palette = ThemePalette::for_theme(theme);
        let labels_in = dataset.labels.len();
        let (labels, series) = if should_reduce(
            family,
            profile,
            labels_in,
            self.config.compact_target_points,
        ) {
            reduce(
                &dataset.labels,
                &dataset.series,
                self.config.compact_target_points,
            )
        } else if should_consolidate(
            family,
            dataset.series.len(),
            labels_in,
            self.config.max_slices,
        ) {
            let (labels, series) = consolidate(
                &dataset.labels,
                &dataset.series[0],
                self.config.max_slices,
                &palette.series_css(),
                &OTHER_SLICE_COLOR.to_css(),
            );
            (labels, vec![series])
        } else {
            (dataset.labels.clone(), dataset.series.clone())
        };

        let resolved: Vec<ResolvedSeries> = series
            .iter()
            .zip(&dataset.series)
            .enumerate()
            .map(|(index, (series, original))| {
                resolve_series(family, index, series, original, labels.len(), palette)
            })
            .collect();

        let value_format = ValueFormat::for_profile(profile);
        let compact = profile == DisplayProfile::Compact;
        let tick_formatter = TickFormatter {
            value: value_format,
            axis: AxisLabelRule {
                max_ticks: self.config.max_ticks(profile),
                max_label_chars: compact.then_some(self.config.compact_label_max_chars),
                skip_alternate: compact
                    && family.is_cartesian()
                    && labels.len() > self.config.dense_label_threshold,
            },
        };
        let tooltip_formatter = TooltipFormatter {
            value: value_format,
            show_share: family.is_categorical(),
        };

        debug!(
            ?family,
            ?profile,
            ?theme,
            labels_in,
            labels_out = labels.len(),
            series = resolved.len(),
            "built chart spec"
        );

        Ok(ChartSpec {
            family,
            labels,
            series: resolved,
            options: ChartOptions {
                style: resolve_style(family, profile, theme, &self.config),
                tick_formatter: Some(tick_formatter),
                tooltip_formatter: Some(tooltip_formatter),
            },
        })
    }
}

fn has_usable_values(series: &Series) -> bool {
    series
        .values
        .iter()
        .any(|value| value.is_finite() && *value > 0.0)
}

fn resolve_series(
    family: ChartFamily,
    index: usize,
    series: &Series,
    original: &Series,
    label_count: usize,
    palette: &ThemePalette,
) -> ResolvedSeries {
    let palette_color = palette.series_color(index);
    let color = match (family, &series.color_hint) {
        // Radar spokes share one stroke; the raw hint decides it because
        // consolidation rewrites hints per category.
        (ChartFamily::Radar, _) => SeriesColor::Single(match &original.color_hint {
            Some(ColorHint::Single(color)) => color.clone(),
            Some(ColorHint::PerCategory(colors)) if !colors.is_empty() => colors[0].clone(),
            _ => palette_color.clone(),
        }),
        (_, Some(ColorHint::Single(color))) => SeriesColor::Single(color.clone()),
        (_, Some(ColorHint::PerCategory(colors))) if !colors.is_empty() => {
            SeriesColor::PerCategory(cycle_to(colors, label_count))
        }
        (ChartFamily::Pie, _) => {
            SeriesColor::PerCategory(cycle_to(&palette.series_css(), label_count))
        }
        _ => SeriesColor::Single(palette_color.clone()),
    };

    let primary = match &color {
        SeriesColor::Single(color) => color.clone(),
        SeriesColor::PerCategory(_) => palette_color,
    };
    let border_color = series.border_color.clone().or_else(|| match family {
        ChartFamily::Pie => Some(palette.slice_border.to_css()),
        ChartFamily::Line | ChartFamily::Radar => Some(primary),
        ChartFamily::Bar | ChartFamily::Unknown => None,
    });
    let fill = match family {
        ChartFamily::Line => series.fill_hint.unwrap_or(false),
        ChartFamily::Radar => series.fill_hint.unwrap_or(true),
        ChartFamily::Bar | ChartFamily::Pie => true,
        ChartFamily::Unknown => false,
    };

    ResolvedSeries {
        name: series.name.clone(),
        values: series.values.clone(),
        color,
        border_color,
        fill,
    }
}

fn cycle_to(colors: &[String], len: usize) -> Vec<String> {
    colors.iter().cycle().take(len).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::{ChartSpecBuilder, cycle_to};
    use crate::api::SeriesColor;
    use crate::core::{ChartFamily, Dataset, DisplayProfile, Series, ThemeMode};
    use crate::error::DataShapeError;

    #[test]
    fn cycle_to_repeats_short_color_lists() {
        let colors = vec!["#a".to_owned(), "#b".to_owned()];
        assert_eq!(cycle_to(&colors, 3), vec!["#a", "#b", "#a"]);
        assert!(cycle_to(&colors, 0).is_empty());
    }

    #[test]
    fn pie_without_positive_values_is_rejected() {
        let dataset = Dataset::new(
            ["a", "b"],
            vec![Series::new("s", vec![0.0, f64::NAN]).with_declared_family(ChartFamily::Pie)],
        );
        let builder = ChartSpecBuilder::default();
        assert_eq!(
            builder.try_build(&dataset, DisplayProfile::Standard, ThemeMode::Light),
            Err(DataShapeError::NoUsableValues {
                family: ChartFamily::Pie
            })
        );
    }

    #[test]
    fn radar_keeps_single_stroke_color_after_consolidation() {
        let labels: Vec<String> = (0..7).map(|i| format!("k{i}")).collect();
        let dataset = Dataset::new(
            labels,
            vec![
                Series::new("skills", vec![1.0, 7.0, 3.0, 4.0, 5.0, 6.0, 2.0])
                    .with_declared_family(ChartFamily::Radar)
                    .with_color("#123456"),
            ],
        );
        let spec = ChartSpecBuilder::default().build(
            &dataset,
            DisplayProfile::Standard,
            ThemeMode::Dark,
        );

        assert_eq!(spec.labels.len(), 5);
        assert_eq!(spec.series[0].color, SeriesColor::Single("#123456".to_owned()));
        assert_eq!(spec.series[0].border_color.as_deref(), Some("#123456"));
        assert!(spec.series[0].fill);
    }

    #[test]
    fn line_series_get_palette_colors_and_matching_border() {
        let dataset = Dataset::new(
            ["a", "b"],
            vec![
                Series::new("plays", vec![1.0, 2.0]),
                Series::new("skips", vec![3.0, 4.0]),
            ],
        );
        let spec = ChartSpecBuilder::default().build(
            &dataset,
            DisplayProfile::Standard,
            ThemeMode::Light,
        );

        assert_eq!(spec.family, ChartFamily::Line);
        assert_eq!(spec.series[0].color, SeriesColor::Single("#4f46e5".to_owned()));
        assert_eq!(spec.series[1].color, SeriesColor::Single("#0ea5e9".to_owned()));
        assert_eq!(spec.series[1].border_color.as_deref(), Some("#0ea5e9"));
        assert!(!spec.series[0].fill);
    }
}
