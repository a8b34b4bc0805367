use tracing::trace;

use crate::core::{ChartFamily, ColorHint, Series};

pub const OTHER_LABEL: &str = "Other";

/// Returns whether long-tail consolidation applies.
#[must_use]
pub fn should_consolidate(
    family: ChartFamily,
    series_count: usize,
    len: usize,
    max_slices: usize,
) -> bool {
    family.is_categorical() && series_count == 1 && len > max_slices.max(1)
}

#[derive(Debug, Clone)]
struct Slice {
    label: String,
    value: f64,
    color: String,
}

/// Keeps the `max_slices - 1` largest categories and folds the rest into one
/// trailing `"Other"` slice whose value is the sum of everything dropped.
///
/// Colors stay attached to their category: each slice takes its per-category
/// hint when present, else `palette[index % palette.len()]` by original index.
/// The result always carries a per-category color list.
#[must_use]
pub fn consolidate(
    labels: &[String],
    series: &Series,
    max_slices: usize,
    palette: &[String],
    other_color: &str,
) -> (Vec<String>, Series) {
    let mut slices: Vec<Slice> = labels
        .iter()
        .zip(&series.values)
        .enumerate()
        .map(|(index, (label, value))| Slice {
            label: label.clone(),
            value: *value,
            color: category_color(series.color_hint.as_ref(), palette, index),
        })
        .collect();

    let max_slices = max_slices.max(1);
    if slices.len() > max_slices {
        slices.sort_by(|left, right| right.value.total_cmp(&left.value));
        let tail = slices.split_off(max_slices - 1);
        let other_value: f64 = tail.iter().map(|slice| slice.value).sum();
        trace!(
            kept = slices.len(),
            folded = tail.len(),
            other_value,
            "consolidated categorical tail"
        );
        slices.push(Slice {
            label: OTHER_LABEL.to_owned(),
            value: other_value,
            color: other_color.to_owned(),
        });
    }

    let mut out_labels = Vec::with_capacity(slices.len());
    let mut values = Vec::with_capacity(slices.len());
    let mut colors = Vec::with_capacity(slices.len());
    for slice in slices {
        out_labels.push(slice.label);
        values.push(slice.value);
        colors.push(slice.color);
    }

    let consolidated = Series {
        values,
        color_hint: Some(ColorHint::PerCategory(colors)),
        ..series.clone()
    };
    (out_labels, consolidated)
}

fn category_color(hint: Option<&ColorHint>, palette: &[String], index: usize) -> String {
    match hint {
        Some(ColorHint::PerCategory(colors)) if !colors.is_empty() => {
            colors[index % colors.len()].clone()
        }
        _ if !palette.is_empty() => palette[index % palette.len()].clone(),
        _ => String::new(),
    }
}
