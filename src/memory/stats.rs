use core::fmt;
use core::cell::Cell;


thread_local! {
    static ALLOC_STATS: Cell<AllocStats> = Cell::new(AllocStats::default());
}

/// Returns a snapshot of the allocation counters for the current thread.
pub fn alloc_stats() -> AllocStats {
    ALLOC_STATS.with(|stats| stats.get())
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AllocStats {
    pub allocations: usize,
    pub reallocations: usize,
    pub frees: usize,
    pub live_bytes: usize,
}

impl AllocStats {
    /// Number of buffers that have been allocated and not yet released
    pub fn live_buffers(&self) -> usize {
        self.allocations.saturating_sub(self.frees)
    }

    /// The counters accumulated between `earlier` and this snapshot
    pub fn since(&self, earlier: &AllocStats) -> AllocStats {
        AllocStats {
            allocations: self.allocations.saturating_sub(earlier.allocations),
            reallocations: self.reallocations.saturating_sub(earlier.reallocations),
            frees: self.frees.saturating_sub(earlier.frees),
            live_bytes: self.live_bytes.saturating_sub(earlier.live_bytes),
        }
    }
}

impl fmt::Display for AllocStats {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            fmt, "{} allocations, {} reallocations, {} frees ({} live bytes)",
            self.allocations, self.reallocations, self.frees, self.live_bytes,
        )
    }
}


fn update(f: impl FnOnce(&mut AllocStats)) {
    ALLOC_STATS.with(|cell| {
        let mut stats = cell.get();
        f(&mut stats);
        cell.set(stats);
    })
}

pub(super) fn record_alloc(bytes: usize) {
    update(|stats| {
        stats.allocations += 1;
        stats.live_bytes += bytes;
    })
}

pub(super) fn record_realloc(old_bytes: usize, new_bytes: usize) {
    update(|stats| {
        stats.reallocations += 1;
        stats.live_bytes = stats.live_bytes.saturating_sub(old_bytes) + new_bytes;
    })
}

pub(super) fn record_free(bytes: usize) {
    update(|stats| {
        stats.frees += 1;
        stats.live_bytes = stats.live_bytes.saturating_sub(bytes);
    })
}
