use serde::{Deserialize, Serialize};

use crate::core::{ChartFamily, DisplayProfile, ThemeMode};
use crate::render::Color;

use super::PipelineConfig;

/// Neutral color for the consolidated `"Other"` slice, shared by both themes.
pub const OTHER_SLICE_COLOR: Color = Color::rgb8(0x9c, 0xa3, 0xaf);

/// Theme-keyed token set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemePalette {
    pub series: [Color; 8],
    pub grid: Color,
    pub text: Color,
    /// Separator drawn between pie slices; matches the chart background.
    pub slice_border: Color,
}

static LIGHT_PALETTE: ThemePalette = ThemePalette {
    series: [
        Color::rgb8(0x4f, 0x46, 0xe5),
        Color::rgb8(0x0e, 0xa5, 0xe9),
        Color::rgb8(0x10, 0xb9, 0x81),
        Color::rgb8(0xf5, 0x9e, 0x0b),
        Color::rgb8(0xef, 0x44, 0x44),
        Color::rgb8(0x8b, 0x5c, 0xf6),
        Color::rgb8(0xec, 0x48, 0x99),
        Color::rgb8(0x14, 0xb8, 0xa6),
    ],
    grid: Color::rgba(0.0, 0.0, 0.0, 0.08),
    text: Color::rgb8(0x37, 0x41, 0x51),
    slice_border: Color::rgb8(0xff, 0xff, 0xff),
};

static DARK_PALETTE: ThemePalette = ThemePalette {
    series: [
        Color::rgb8(0x81, 0x8c, 0xf8),
        Color::rgb8(0x38, 0xbd, 0xf8),
        Color::rgb8(0x34, 0xd3, 0x99),
        Color::rgb8(0xfb, 0xbf, 0x24),
        Color::rgb8(0xf8, 0x71, 0x71),
        Color::rgb8(0xa7, 0x8b, 0xfa),
        Color::rgb8(0xf4, 0x72, 0xb6),
        Color::rgb8(0x2d, 0xd4, 0xbf),
    ],
    grid: Color::rgba(1.0, 1.0, 1.0, 0.12),
    text: Color::rgb8(0xe5, 0xe7, 0xeb),
    slice_border: Color::rgb8(0x11, 0x18, 0x27),
};

impl ThemePalette {
    #[must_use]
    pub fn for_theme(theme: ThemeMode) -> &'static Self {
        match theme {
            ThemeMode::Light => &LIGHT_PALETTE,
            ThemeMode::Dark => &DARK_PALETTE,
        }
    }

    #[must_use]
    pub fn series_color(&self, index: usize) -> String {
        self.series[index % self.series.len()].to_css()
    }

    #[must_use]
    pub fn series_css(&self) -> Vec<String> {
        self.series.iter().map(|color| color.to_css()).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendPosition {
    Top,
    Bottom,
    Right,
    #[default]
    Hidden,
}

/// Visual options resolved from family, profile and theme.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StyleOptions {
    pub legend_position: LegendPosition,
    pub grid_visible: bool,
    pub grid_color: String,
    pub text_color: String,
    pub line_width_px: f64,
    pub point_radius_px: f64,
    pub animation_duration_ms: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cutout_ratio: Option<f64>,
}

/// Resolves legend, grid, stroke and animation tokens.
///
/// `Compact` hides grids, moves legends to the bottom, thins strokes and
/// shortens animations. `Unknown` charts get a hidden legend and no animation.
#[must_use]
pub fn resolve_style(
    family: ChartFamily,
    profile: DisplayProfile,
    theme: ThemeMode,
    config: &PipelineConfig,
) -> StyleOptions {
    let palette = ThemePalette::for_theme(theme);
    let compact = profile == DisplayProfile::Compact;

    let legend_position = match (family, compact) {
        (ChartFamily::Unknown, _) => LegendPosition::Hidden,
        (_, true) => LegendPosition::Bottom,
        (ChartFamily::Pie | ChartFamily::Radar, false) => LegendPosition::Right,
        (ChartFamily::Line | ChartFamily::Bar, false) => LegendPosition::Top,
    };

    let (line_width_px, point_radius_px) = if compact { (1.5, 2.0) } else { (2.0, 3.0) };
    let animation_duration_ms = match family {
        ChartFamily::Unknown => 0,
        _ if compact => config.compact_animation_ms,
        _ => config.standard_animation_ms,
    };

    StyleOptions {
        legend_position,
        grid_visible: !compact && family.is_cartesian(),
        grid_color: palette.grid.to_css(),
        text_color: palette.text.to_css(),
        line_width_px,
        point_radius_px,
        animation_duration_ms,
        cutout_ratio: if family == ChartFamily::Pie {
            config.pie_cutout_ratio
        } else {
            None
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{LegendPosition, ThemePalette, resolve_style};
    use crate::api::PipelineConfig;
    use crate::core::{ChartFamily, DisplayProfile, ThemeMode};

    #[test]
    fn legend_position_follows_family_and_profile() {
        let config = PipelineConfig::default();
        let cases = [
            (ChartFamily::Pie, DisplayProfile::Compact, LegendPosition::Bottom),
            (ChartFamily::Pie, DisplayProfile::Standard, LegendPosition::Right),
            (ChartFamily::Radar, DisplayProfile::Standard, LegendPosition::Right),
            (ChartFamily::Line, DisplayProfile::Compact, LegendPosition::Bottom),
            (ChartFamily::Bar, DisplayProfile::Standard, LegendPosition::Top),
            (ChartFamily::Unknown, DisplayProfile::Standard, LegendPosition::Hidden),
        ];
        for (family, profile, expected) in cases {
            let style = resolve_style(family, profile, ThemeMode::Light, &config);
            assert_eq!(style.legend_position, expected, "{family:?} {profile:?}");
        }
    }

    #[test]
    fn compact_hides_grid_and_shortens_animation() {
        let config = PipelineConfig::default();
        let compact = resolve_style(
            ChartFamily::Line,
            DisplayProfile::Compact,
            ThemeMode::Dark,
            &config,
        );
        let standard = resolve_style(
            ChartFamily::Line,
            DisplayProfile::Standard,
            ThemeMode::Dark,
            &config,
        );

        assert!(!compact.grid_visible);
        assert!(standard.grid_visible);
        assert!(compact.animation_duration_ms < standard.animation_duration_ms);
        assert!(compact.line_width_px < standard.line_width_px);
        assert!(compact.point_radius_px < standard.point_radius_px);
    }

    #[test]
    fn theme_selects_text_and_grid_tokens() {
        let config = PipelineConfig::default();
        let light = resolve_style(
            ChartFamily::Bar,
            DisplayProfile::Standard,
            ThemeMode::Light,
            &config,
        );
        let dark = resolve_style(
            ChartFamily::Bar,
            DisplayProfile::Standard,
            ThemeMode::Dark,
            &config,
        );

        assert_eq!(light.text_color, "#374151");
        assert_eq!(dark.text_color, "#e5e7eb");
        assert_eq!(dark.grid_color, "rgba(255, 255, 255, 0.12)");
        assert_ne!(light.grid_color, dark.grid_color);
    }

    #[test]
    fn only_pie_carries_cutout_ratio() {
        let config = PipelineConfig::default();
        let pie = resolve_style(
            ChartFamily::Pie,
            DisplayProfile::Standard,
            ThemeMode::Light,
            &config,
        );
        let radar = resolve_style(
            ChartFamily::Radar,
            DisplayProfile::Standard,
            ThemeMode::Light,
            &config,
        );
        assert_eq!(pie.cutout_ratio, config.pie_cutout_ratio);
        assert_eq!(radar.cutout_ratio, None);
    }

    #[test]
    fn palette_cycles_series_colors() {
        let palette = ThemePalette::for_theme(ThemeMode::Light);
        assert_eq!(palette.series_color(0), palette.series_color(8));
        assert_eq!(palette.series_css().len(), 8);
    }
}
