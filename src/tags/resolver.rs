//! Tag color resolution
//!
//! Maps a tag name to a stable palette entry using three precedence
//! tiers: a per-document override, the central registry, then a
//! permanent round-robin assignment. Results are memoized per
//! (normalized tag, override set). Resolution never fails; every input
//! degrades to a palette entry.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, PoisonError};

use crate::tags::palette::{PALETTE, PaletteColor};
use crate::tags::registry::TagRegistry;

/// Per-document tag color overrides (tag name to color name).
pub type TagOverrides = BTreeMap<String, String>;

/// Resolver state counters, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverStats {
    pub cached_results: usize,
    pub auto_assigned: usize,
    pub next_index: usize,
}

#[derive(Default)]
struct ResolverState {
    /// Normalized tag name to permanent palette index.
    assigned: HashMap<String, usize>,
    /// Round-robin cursor; wraps modulo the palette size.
    next_index: usize,
    /// (normalized tag + serialized override set) to resolved entry.
    cache: HashMap<String, PaletteColor>,
}

/// Owned resolver instance holding the registry and all mutable
/// assignment state. Construct one per process (or per test) so the
/// lifecycle of assignments and caches is explicit.
pub struct TagColorResolver {
    registry: TagRegistry,
    state: Mutex<ResolverState>,
}

impl TagColorResolver {
    pub fn new(registry: TagRegistry) -> Self {
        Self {
            registry,
            state: Mutex::new(ResolverState::default()),
        }
    }

    /// Resolve a tag to its palette entry.
    ///
    /// Precedence: override naming a recognized color, then the central
    /// registry (unrecognized configured colors substitute the default
    /// entry), then the tag's permanent round-robin assignment. A cache
    /// hit returns without touching the assignment counter.
    pub fn resolve(&self, tag: &str, overrides: Option<&TagOverrides>) -> PaletteColor {
        let trimmed = tag.trim();
        let normalized = trimmed.to_lowercase();
        let key = cache_key(&normalized, overrides);

        let mut state = self
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(color) = state.cache.get(&key) {
            return *color;
        }

        let color = self.resolve_uncached(trimmed, &normalized, overrides, &mut state);
        state.cache.insert(key, color);
        color
    }

    /// Resolve a tag to its joined light/dark class string.
    pub fn classes(&self, tag: &str, overrides: Option<&TagOverrides>) -> String {
        self.resolve(tag, overrides).scheme().classes()
    }

    pub fn registry(&self) -> &TagRegistry {
        &self.registry
    }

    pub fn stats(&self) -> ResolverStats {
        let state = self
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        ResolverStats {
            cached_results: state.cache.len(),
            auto_assigned: state.assigned.len(),
            next_index: state.next_index,
        }
    }

    fn resolve_uncached(
        &self,
        trimmed: &str,
        normalized: &str,
        overrides: Option<&TagOverrides>,
        state: &mut ResolverState,
    ) -> PaletteColor {
        // Tier 1: per-document override, exact tag name, recognized
        // colors only. Unrecognized names fall through.
        if let Some(color) = overrides
            .and_then(|map| map.get(trimmed))
            .and_then(|name| PaletteColor::parse(name))
        {
            return color;
        }

        // Tier 2: central registry. A configured entry always wins, with
        // typo'd color names substituting the default entry.
        if let Some(definition) = self.registry.get(trimmed) {
            return PaletteColor::parse(&definition.color).unwrap_or(PaletteColor::DEFAULT);
        }

        // Tier 3: permanent round-robin assignment.
        let index = if let Some(index) = state.assigned.get(normalized).copied() {
            index
        } else {
            let index = state.next_index % PALETTE.len();
            state.next_index += 1;
            state.assigned.insert(normalized.to_string(), index);
            index
        };
        PALETTE[index]
    }
}

fn cache_key(normalized: &str, overrides: Option<&TagOverrides>) -> String {
    let mut key = String::from(normalized);
    key.push('|');
    if let Some(map) = overrides {
        for (tag, color) in map {
            key.push_str(tag);
            key.push('=');
            key.push_str(color);
            key.push(';');
        }
    }
    key
}
