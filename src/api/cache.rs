use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use indexmap::IndexMap;
use tracing::trace;

use crate::core::{Dataset, DisplayProfile, ThemeMode};

use super::{ChartSpec, ChartSpecBuilder};

/// Runtime metrics exposed by the spec cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpecCacheStats {
    pub hits: u64,
    pub misses: u64,
    pub size: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpecCacheKey {
    pub dataset_hash: u64,
    pub profile: DisplayProfile,
    pub theme: ThemeMode,
}

impl SpecCacheKey {
    #[must_use]
    pub fn new(dataset: &Dataset, profile: DisplayProfile, theme: ThemeMode) -> Self {
        Self {
            dataset_hash: dataset.content_hash(),
            profile,
            theme,
        }
    }
}

/// Bounded spec cache keyed by `(dataset hash, profile, theme)`.
///
/// Readers share the lock; a writer only ever inserts or evicts whole
/// `Arc<ChartSpec>` entries, so a cached spec is never mutated in place.
/// When full, the oldest inserted entry is evicted first.
#[derive(Debug)]
pub struct ChartSpecCache {
    entries: RwLock<IndexMap<SpecCacheKey, Arc<ChartSpec>>>,
    capacity: usize,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl ChartSpecCache {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(IndexMap::with_capacity(capacity.max(1))),
            capacity: capacity.max(1),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn get(&self, key: &SpecCacheKey) -> Option<Arc<ChartSpec>> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        let value = entries.get(key).cloned();
        if value.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
        }
        value
    }

    pub fn insert(&self, key: SpecCacheKey, spec: ChartSpec) -> Arc<ChartSpec> {
        self.misses.fetch_add(1, Ordering::Relaxed);
        let spec = Arc::new(spec);
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if !entries.contains_key(&key) && entries.len() >= self.capacity {
            if let Some((evicted, _)) = entries.shift_remove_index(0) {
                trace!(
                    dataset_hash = evicted.dataset_hash,
                    "evicted oldest chart spec"
                );
            }
        }
        entries.insert(key, Arc::clone(&spec));
        spec
    }

    /// Returns the cached spec for these inputs, building it on a miss.
    pub fn get_or_build(
        &self,
        builder: &ChartSpecBuilder,
        dataset: &Dataset,
        profile: DisplayProfile,
        theme: ThemeMode,
    ) -> Arc<ChartSpec> {
        let key = SpecCacheKey::new(dataset, profile, theme);
        if let Some(cached) = self.get(&key) {
            return cached;
        }
        self.insert(key, builder.build(dataset, profile, theme))
    }

    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    #[must_use]
    pub fn stats(&self) -> SpecCacheStats {
        SpecCacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            size: self
                .entries
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .len(),
        }
    }
}
