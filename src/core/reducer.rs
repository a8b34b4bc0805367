use smallvec::SmallVec;
use tracing::trace;

use crate::core::{ChartFamily, ColorHint, DisplayProfile, Series};

/// Index set selected by stride sampling. Default targets stay inline.
pub type SampleIndices = SmallVec<[usize; 8]>;

/// Returns whether stride reduction applies to a dataset of `len` labels.
#[must_use]
pub fn should_reduce(
    family: ChartFamily,
    profile: DisplayProfile,
    len: usize,
    target_points: usize,
) -> bool {
    family.is_cartesian() && profile == DisplayProfile::Compact && len > target_points.max(1)
}

/// Selects `0, stride, 2*stride, ..` below `len` with `stride = ceil(len / target)`.
///
/// The result holds at most `target_points` strictly increasing indices and
/// always starts at `0` when `len > 0`.
#[must_use]
pub fn stride_indices(len: usize, target_points: usize) -> SampleIndices {
    let target = target_points.max(1);
    if len <= target {
        return (0..len).collect();
    }
    let stride = len.div_ceil(target);
    (0..len).step_by(stride).collect()
}

/// Stride-samples labels and every series with one shared index set.
///
/// Skipped points are dropped, not blended into neighbors, so short spikes
/// between sampled indices disappear from the output.
#[must_use]
pub fn reduce(
    labels: &[String],
    series: &[Series],
    target_points: usize,
) -> (Vec<String>, Vec<Series>) {
    let indices = stride_indices(labels.len(), target_points);
    if indices.len() == labels.len() {
        return (labels.to_vec(), series.to_vec());
    }
    trace!(
        original = labels.len(),
        reduced = indices.len(),
        target_points,
        "stride-sampled series"
    );

    let reduced_labels = pick(labels, &indices);
    let reduced_series = series
        .iter()
        .map(|series| Series {
            values: pick(&series.values, &indices),
            color_hint: series.color_hint.as_ref().map(|hint| match hint {
                ColorHint::Single(color) => ColorHint::Single(color.clone()),
                ColorHint::PerCategory(colors) => {
                    ColorHint::PerCategory(pick_cycled(colors, &indices))
                }
            }),
            ..series.clone()
        })
        .collect();
    (reduced_labels, reduced_series)
}

fn pick<T: Clone>(items: &[T], indices: &[usize]) -> Vec<T> {
    indices
        .iter()
        .filter_map(|&index| items.get(index).cloned())
        .collect()
}

fn pick_cycled(colors: &[String], indices: &[usize]) -> Vec<String> {
    if colors.is_empty() {
        return Vec::new();
    }
    indices
        .iter()
        .map(|&index| colors[index % colors.len()].clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{reduce, should_reduce, stride_indices};
    use crate::core::{ChartFamily, ColorHint, DisplayProfile, Series};

    #[test]
    fn stride_indices_stay_within_target() {
        assert_eq!(stride_indices(12, 6).as_slice(), &[0, 2, 4, 6, 8, 10]);
        assert_eq!(stride_indices(13, 6).as_slice(), &[0, 3, 6, 9, 12]);
        assert_eq!(stride_indices(7, 6).as_slice(), &[0, 2, 4, 6]);
        assert_eq!(stride_indices(4, 6).as_slice(), &[0, 1, 2, 3]);
        assert!(stride_indices(0, 6).is_empty());
    }

    #[test]
    fn zero_target_is_treated_as_one_point() {
        assert_eq!(stride_indices(5, 0).as_slice(), &[0]);
    }

    #[test]
    fn reduction_only_applies_to_compact_cartesian_overflow() {
        assert!(should_reduce(ChartFamily::Line, DisplayProfile::Compact, 12, 6));
        assert!(should_reduce(ChartFamily::Bar, DisplayProfile::Compact, 7, 6));
        assert!(!should_reduce(ChartFamily::Bar, DisplayProfile::Compact, 6, 6));
        assert!(!should_reduce(ChartFamily::Line, DisplayProfile::Standard, 12, 6));
        assert!(!should_reduce(ChartFamily::Pie, DisplayProfile::Compact, 12, 6));
    }

    #[test]
    fn per_category_colors_follow_sampled_indices() {
        let labels: Vec<String> = (0..8).map(|i| format!("w{i}")).collect();
        let colors: Vec<String> = (0..8).map(|i| format!("#00000{i}")).collect();
        let series = vec![Series::new("s", (0..8).map(f64::from).collect())
            .with_category_colors(colors)];

        let (labels, series) = reduce(&labels, &series, 4);

        assert_eq!(labels, vec!["w0", "w2", "w4", "w6"]);
        assert_eq!(series[0].values, vec![0.0, 2.0, 4.0, 6.0]);
        assert_eq!(
            series[0].color_hint,
            Some(ColorHint::PerCategory(vec![
                "#000000".to_owned(),
                "#000002".to_owned(),
                "#000004".to_owned(),
                "#000006".to_owned(),
            ]))
        );
    }
}
