//! Expiring in-memory cache of loaded draw history.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use log::debug;

use crate::draws::{DataDir, Draw};
use crate::error::Result;
use crate::lottery::LotteryKind;

/// Default time a loaded history stays fresh.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(300);

struct CacheEntry {
    loaded_at: Instant,
    draws: Vec<Draw>,
}

/// Per-lottery draw cache with a fixed time-to-live.
///
/// Owned by whoever loads the data; there is no shared global instance.
pub struct DrawCache {
    ttl: Duration,
    entries: HashMap<LotteryKind, CacheEntry>,
    loads: u64,
}

impl DrawCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
            loads: 0,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Return cached draws for `kind`, calling `loader` if the entry is
    /// missing or older than the TTL. A failed load leaves any stale entry in
    /// place and returns the error.
    pub fn get_or_load<F>(&mut self, kind: LotteryKind, loader: F) -> Result<&[Draw]>
    where
        F: FnOnce(LotteryKind) -> Result<Vec<Draw>>,
    {
        let fresh = self
            .entries
            .get(&kind)
            .is_some_and(|e| e.loaded_at.elapsed() < self.ttl);
        if !fresh {
            debug!("draw cache miss for {kind}");
            let draws = loader(kind)?;
            self.loads += 1;
            self.entries.insert(
                kind,
                CacheEntry {
                    loaded_at: Instant::now(),
                    draws,
                },
            );
        }
        Ok(self
            .entries
            .get(&kind)
            .map(|e| e.draws.as_slice())
            .unwrap_or_default())
    }

    /// [`get_or_load`](Self::get_or_load) backed by a [`DataDir`].
    pub fn get_from(&mut self, data: &DataDir, kind: LotteryKind) -> Result<&[Draw]> {
        self.get_or_load(kind, |k| data.load(k))
    }

    pub fn invalidate(&mut self, kind: LotteryKind) -> bool {
        self.entries.remove(&kind).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of times a loader has been invoked successfully.
    pub fn loads(&self) -> u64 {
        self.loads
    }
}

impl Default for DrawCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_TTL)
    }
}
