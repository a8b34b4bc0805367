use crate::core::{ChartFamily, ColorHint, Series};

/// Infers the chart family for a dataset's series.
///
/// Decision order, first match wins:
/// 1. a series with a declared family (the first declaring series wins),
/// 2. one series with per-category colors and no border styling: `Pie`,
/// 3. several series, or one series with `fill_hint == Some(false)`: `Line`,
/// 4. one series with a single solid color: `Bar`,
/// 5. anything else: `Bar`.
#[must_use]
pub fn classify(series: &[Series]) -> ChartFamily {
    if let Some(declared) = series.iter().find_map(|series| series.declared_family) {
        return declared;
    }

    match series {
        [single] if single.has_category_colors() && single.border_color.is_none() => {
            ChartFamily::Pie
        }
        [single] if single.fill_hint == Some(false) => ChartFamily::Line,
        [_, _, ..] => ChartFamily::Line,
        [single] if matches!(single.color_hint, Some(ColorHint::Single(_))) => ChartFamily::Bar,
        _ => ChartFamily::Bar,
    }
}

#[cfg(test)]
mod tests {
    use super::classify;
    use crate::core::{ChartFamily, Series};

    #[test]
    fn declared_family_overrides_shape() {
        let series = vec![
            Series::new("a", vec![1.0]).with_category_colors(["#111"]),
            Series::new("b", vec![2.0]).with_declared_family(ChartFamily::Radar),
        ];
        assert_eq!(classify(&series), ChartFamily::Radar);
    }

    #[test]
    fn category_colors_with_border_fall_through_to_bar() {
        let series = vec![
            Series::new("a", vec![1.0, 2.0])
                .with_category_colors(["#111", "#222"])
                .with_border_color("#000"),
        ];
        assert_eq!(classify(&series), ChartFamily::Bar);
    }

    #[test]
    fn explicit_no_fill_single_series_is_line() {
        let series = vec![Series::new("plays", vec![1.0, 2.0]).with_fill_hint(false)];
        assert_eq!(classify(&series), ChartFamily::Line);
    }

    #[test]
    fn multiple_series_are_line() {
        let series = vec![
            Series::new("a", vec![1.0]).with_color("#111"),
            Series::new("b", vec![2.0]).with_color("#222"),
        ];
        assert_eq!(classify(&series), ChartFamily::Line);
    }

    #[test]
    fn solid_color_and_bare_series_default_to_bar() {
        let solid = vec![Series::new("a", vec![1.0]).with_color("#111")];
        let bare = vec![Series::new("a", vec![1.0]).with_fill_hint(true)];
        assert_eq!(classify(&solid), ChartFamily::Bar);
        assert_eq!(classify(&bare), ChartFamily::Bar);
        assert_eq!(classify(&[]), ChartFamily::Bar);
    }
}
