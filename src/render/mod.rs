mod null_renderer;
mod primitives;

pub use null_renderer::NullRenderer;
pub use primitives::Color;

use crate::api::ChartSpec;
use crate::error::ChartResult;

/// Contract implemented by any chart drawing backend.
///
/// Backends receive a fully resolved `ChartSpec` and own pixel drawing,
/// animation and pointer interaction. An empty spec (`ChartSpec::is_empty`)
/// asks the backend to show its "no chart data" placeholder.
pub trait ChartRenderer {
    fn render(&mut self, spec: &ChartSpec) -> ChartResult<()>;
}
