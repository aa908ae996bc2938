//! A searcher handle that can be swapped out while queries are running.

use std::sync::{Arc, PoisonError, RwLock};

use crate::searcher::Searcher;

/// Cloneable handle to the live [`Searcher`].
///
/// Callers take a snapshot with [`current`](Self::current) and query it
/// without holding any lock. A reload builds a complete new `Searcher` first
/// and then [`replace`](Self::replace)s the live one in a single step;
/// snapshots taken before the swap keep answering from the old corpus until
/// they are dropped.
#[derive(Debug, Clone)]
pub struct SharedSearcher {
    live: Arc<RwLock<Arc<Searcher>>>,
}

impl SharedSearcher {
    #[must_use]
    pub fn new(searcher: Searcher) -> Self {
        Self {
            live: Arc::new(RwLock::new(Arc::new(searcher))),
        }
    }

    /// The searcher currently serving queries.
    pub fn current(&self) -> Arc<Searcher> {
        let guard = self.live.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Install a fully built searcher, returning the one it replaced.
    pub fn replace(&self, searcher: Searcher) -> Arc<Searcher> {
        let next = Arc::new(searcher);
        let mut guard = self.live.write().unwrap_or_else(PoisonError::into_inner);
        log::info!(
            "Swapping searcher: {} -> {} songs",
            guard.corpus().len(),
            next.corpus().len()
        );
        std::mem::replace(&mut *guard, next)
    }
}
