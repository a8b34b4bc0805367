use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, trace};

use crate::core::{Dataset, DisplayProfile, ThemeMode};
use crate::error::ChartResult;
use crate::render::ChartRenderer;

use super::{ChartSpec, ChartSpecBuilder, ChartSpecCache, PipelineConfig, ViewportDebouncer};

/// Input change delivered by the dataset, viewport and theme observers.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineEvent {
    DatasetChanged(Dataset),
    ViewportResized { width_px: f64, at: Instant },
    ThemeChanged(ThemeMode),
}

/// Spec computed for one input generation, waiting to be committed.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSpec {
    generation: u64,
    spec: Arc<ChartSpec>,
}

impl PendingSpec {
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn spec(&self) -> &ChartSpec {
        &self.spec
    }
}

/// Boundary coordinator between external observers and a chart renderer.
///
/// Every accepted input change bumps the generation. A `PendingSpec` is only
/// handed to the renderer while its generation is current; stale results are
/// dropped, never merged (last write wins).
pub struct ChartPipeline<R: ChartRenderer> {
    renderer: R,
    builder: ChartSpecBuilder,
    cache: ChartSpecCache,
    debouncer: ViewportDebouncer,
    dataset: Option<Dataset>,
    dataset_hash: Option<u64>,
    profile: DisplayProfile,
    theme: ThemeMode,
    generation: u64,
    committed_generation: Option<u64>,
}

impl<R: ChartRenderer> ChartPipeline<R> {
    pub fn new(renderer: R, config: PipelineConfig) -> ChartResult<Self> {
        let builder = ChartSpecBuilder::new(config)?;
        Ok(Self {
            renderer,
            cache: ChartSpecCache::new(config.cache_capacity),
            debouncer: ViewportDebouncer::new(config.resize_debounce()),
            builder,
            dataset: None,
            dataset_hash: None,
            profile: DisplayProfile::default(),
            theme: ThemeMode::default(),
            generation: 0,
            committed_generation: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &PipelineConfig {
        self.builder.config()
    }

    #[must_use]
    pub fn profile(&self) -> DisplayProfile {
        self.profile
    }

    #[must_use]
    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    #[must_use]
    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn committed_generation(&self) -> Option<u64> {
        self.committed_generation
    }

    #[must_use]
    pub fn cache(&self) -> &ChartSpecCache {
        &self.cache
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Applies one observer event. Returns `true` when the inputs changed.
    pub fn handle_event(&mut self, event: PipelineEvent) -> bool {
        match event {
            PipelineEvent::DatasetChanged(dataset) => self.set_dataset(dataset),
            PipelineEvent::ViewportResized { width_px, at } => {
                self.debouncer.report(width_px, at);
                false
            }
            PipelineEvent::ThemeChanged(theme) => self.set_theme(theme),
        }
    }

    pub fn set_dataset(&mut self, dataset: Dataset) -> bool {
        let hash = dataset.content_hash();
        if self.dataset_hash == Some(hash) {
            return false;
        }
        self.dataset_hash = Some(hash);
        self.dataset = Some(dataset);
        self.bump("dataset")
    }

    pub fn set_theme(&mut self, theme: ThemeMode) -> bool {
        if self.theme == theme {
            return false;
        }
        self.theme = theme;
        self.bump("theme")
    }

    /// Lenient theme input from string-typed observers; unknown names are `Light`.
    pub fn set_theme_name(&mut self, name: &str) -> bool {
        self.set_theme(ThemeMode::parse_lossy(name))
    }

    /// Applies a width immediately, bypassing the debouncer (initial layout).
    pub fn apply_viewport_width(&mut self, width_px: f64) -> bool {
        let profile = self.config().resolve_profile(width_px);
        if self.profile == profile {
            return false;
        }
        self.profile = profile;
        self.bump("profile")
    }

    /// Releases a debounced viewport width whose quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.debouncer.poll(now) {
            Some(width_px) => self.apply_viewport_width(width_px),
            None => false,
        }
    }

    /// Computes the spec for the current inputs, or `None` before any dataset.
    #[must_use]
    pub fn prepare(&self) -> Option<PendingSpec> {
        let dataset = self.dataset.as_ref()?;
        let spec = self
            .cache
            .get_or_build(&self.builder, dataset, self.profile, self.theme);
        Some(PendingSpec {
            generation: self.generation,
            spec,
        })
    }

    /// Hands `pending` to the renderer if no newer input arrived since it was
    /// prepared. Returns `Ok(false)` for discarded stale results.
    pub fn commit(&mut self, pending: PendingSpec) -> ChartResult<bool> {
        if pending.generation != self.generation {
            debug!(
                stale = pending.generation,
                current = self.generation,
                "discarding stale chart spec"
            );
            return Ok(false);
        }
        if self.committed_generation == Some(pending.generation) {
            return Ok(false);
        }
        self.renderer.render(&pending.spec)?;
        self.committed_generation = Some(pending.generation);
        Ok(true)
    }

    /// Prepares and commits in one step when the current generation is unrendered.
    pub fn refresh(&mut self) -> ChartResult<bool> {
        match self.prepare() {
            Some(pending) => self.commit(pending),
            None => Ok(false),
        }
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn bump(&mut self, reason: &'static str) -> bool {
        self.generation = self.generation.saturating_add(1);
        trace!(reason, generation = self.generation, "pipeline inputs changed");
        true
    }
}
