use crate::api::ChartSpec;
use crate::core::ChartFamily;
use crate::error::ChartResult;
use crate::render::ChartRenderer;

/// No-op renderer used by tests and headless pipeline usage.
///
/// It still validates each spec so tests catch misaligned output before a
/// real backend consumes it.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_family: Option<ChartFamily>,
    pub last_label_count: usize,
    pub last_series_count: usize,
    pub placeholder_count: usize,
}

impl ChartRenderer for NullRenderer {
    fn render(&mut self, spec: &ChartSpec) -> ChartResult<()> {
        spec.validate()?;
        self.render_count += 1;
        self.last_family = Some(spec.family);
        self.last_label_count = spec.labels.len();
        self.last_series_count = spec.series.len();
        if spec.is_empty() {
            self.placeholder_count += 1;
        }
        Ok(())
    }
}
