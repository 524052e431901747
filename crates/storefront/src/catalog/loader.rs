//! Incremental catalog loader.
//!
//! Accumulates the paginated product list across repeated "load more"
//! triggers. The loader is a small state machine:
//!
//! ```text
//! Idle -> LoadingInitial -> Ready <-> LoadingMore -> Exhausted
//!              |                           |
//!              +---------> Error <---------+
//! ```
//!
//! The initial load issues two page fetches concurrently and joins
//! them before leaving `LoadingInitial`, so consumers never observe a
//! "ready" flash between the first and second initial page. After
//! that, at most one fetch is ever in flight: `load_more` is a no-op
//! while loading, and a failed fetch parks the loader in `Error` with
//! its page token unchanged so the next `load_more` retries the same
//! page.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, warn};

use mystore_core::{CatalogPage, ProductSummary};

use super::PageFetcher;

/// Batch numbers fetched concurrently on first mount.
const INITIAL_BATCHES: (u32, u32) = (1, 2);

/// Where the loader is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    /// Nothing fetched yet.
    Idle,
    /// The paired initial fetches are in flight.
    LoadingInitial,
    /// At least one page is showing and more can be requested.
    Ready,
    /// A "load more" fetch is in flight.
    LoadingMore,
    /// The catalog reported no further pages.
    Exhausted,
    /// The last fetch failed; accumulated products are preserved and
    /// the next `load_more` retries the same page.
    Error,
}

impl LoadPhase {
    /// True while any fetch is in flight.
    #[must_use]
    pub const fn is_loading(self) -> bool {
        matches!(self, Self::LoadingInitial | Self::LoadingMore)
    }
}

/// Point-in-time view of the loader for rendering.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    /// Accumulated products in fetch order.
    pub products: Vec<ProductSummary>,
    /// Current lifecycle phase.
    pub phase: LoadPhase,
    /// Whether the catalog has reported further pages.
    pub has_more: bool,
    /// Whether the initial load has completed successfully.
    pub has_loaded_initial: bool,
}

struct LoaderState {
    products: Vec<ProductSummary>,
    next_batch: u32,
    has_more: bool,
    has_loaded_initial: bool,
    phase: LoadPhase,
}

/// Accumulating product-list loader over a [`PageFetcher`].
///
/// Cheaply cloneable; all clones share the same accumulated state.
pub struct CatalogLoader<F: PageFetcher> {
    inner: Arc<CatalogLoaderInner<F>>,
}

impl<F: PageFetcher> Clone for CatalogLoader<F> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

struct CatalogLoaderInner<F> {
    fetcher: F,
    state: Mutex<LoaderState>,
}

impl<F: PageFetcher> CatalogLoader<F> {
    /// Create an idle loader; nothing is fetched until
    /// [`load_initial`](Self::load_initial).
    #[must_use]
    pub fn new(fetcher: F) -> Self {
        Self {
            inner: Arc::new(CatalogLoaderInner {
                fetcher,
                state: Mutex::new(LoaderState {
                    products: Vec::new(),
                    next_batch: INITIAL_BATCHES.0,
                    has_more: true,
                    has_loaded_initial: false,
                    phase: LoadPhase::Idle,
                }),
            }),
        }
    }

    /// Run the initial load: both initial pages fetched concurrently,
    /// merged in request order.
    ///
    /// Only valid from `Idle`; later calls are no-ops. On any failure
    /// the accumulated list stays empty and the loader parks in
    /// `Error`; recovery happens through [`load_more`](Self::load_more)
    /// (no automatic retry).
    pub async fn load_initial(&self) {
        {
            let mut state = self.lock_state();
            if state.phase != LoadPhase::Idle {
                debug!(phase = ?state.phase, "Ignoring load_initial: already mounted");
                return;
            }
            state.phase = LoadPhase::LoadingInitial;
        }

        let (first, second) = tokio::join!(
            self.inner.fetcher.fetch_page(INITIAL_BATCHES.0),
            self.inner.fetcher.fetch_page(INITIAL_BATCHES.1),
        );

        let mut state = self.lock_state();
        match (first, second) {
            (Ok(first), Ok(second)) => {
                state.products.extend(first.products);
                state.products.extend(second.products);
                state.has_more = second.more_products;
                state.next_batch = INITIAL_BATCHES.1 + 1;
                state.has_loaded_initial = true;
                state.phase = LoadPhase::Ready;
                debug!(
                    products = state.products.len(),
                    has_more = state.has_more,
                    "Initial catalog load complete"
                );
            }
            (first, second) => {
                if let Err(e) = first {
                    warn!("Initial catalog load failed: {e}");
                }
                if let Err(e) = second {
                    warn!("Initial catalog load failed: {e}");
                }
                // List stays empty; next_batch still points at the
                // first page so load_more can recover page by page.
                state.phase = LoadPhase::Error;
            }
        }
    }

    /// Fetch the next page and append it to the accumulated list.
    ///
    /// No-op while a fetch is in flight, before the first mount, or
    /// once the catalog is exhausted. From `Error` it retries the same
    /// page token that failed.
    pub async fn load_more(&self) {
        let batch = {
            let mut state = self.lock_state();
            if state.phase.is_loading() {
                debug!("Ignoring load_more: a fetch is already in flight");
                return;
            }
            if state.phase == LoadPhase::Idle {
                debug!("Ignoring load_more: initial load has not run");
                return;
            }
            if !state.has_more {
                state.phase = LoadPhase::Exhausted;
                debug!("Ignoring load_more: catalog exhausted");
                return;
            }
            state.phase = LoadPhase::LoadingMore;
            state.next_batch
        };

        let result = self.inner.fetcher.fetch_page(batch).await;

        let mut state = self.lock_state();
        match result {
            Ok(page) => self.apply_page(&mut state, page),
            Err(e) => {
                // Keep the accumulated list and the page token; the
                // next load_more retries this batch.
                warn!(batch, "Catalog page fetch failed: {e}");
                state.phase = LoadPhase::Error;
            }
        }
    }

    /// Accumulated products in fetch order. Duplicate product IDs
    /// across pages are kept as delivered.
    #[must_use]
    pub fn products(&self) -> Vec<ProductSummary> {
        self.lock_state().products.clone()
    }

    /// True while any fetch is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.lock_state().phase.is_loading()
    }

    /// Whether the catalog has reported further pages.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.lock_state().has_more
    }

    /// Whether the initial load has completed successfully.
    #[must_use]
    pub fn has_loaded_initial(&self) -> bool {
        self.lock_state().has_loaded_initial
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> LoadPhase {
        self.lock_state().phase
    }

    /// Point-in-time view for rendering.
    #[must_use]
    pub fn snapshot(&self) -> CatalogSnapshot {
        let state = self.lock_state();
        CatalogSnapshot {
            products: state.products.clone(),
            phase: state.phase,
            has_more: state.has_more,
            has_loaded_initial: state.has_loaded_initial,
        }
    }

    fn apply_page(&self, state: &mut LoaderState, page: CatalogPage) {
        state.products.extend(page.products);
        state.has_more = page.more_products;
        state.next_batch += 1;
        state.has_loaded_initial = true;
        state.phase = if page.more_products {
            LoadPhase::Ready
        } else {
            LoadPhase::Exhausted
        };
        debug!(
            products = state.products.len(),
            next_batch = state.next_batch,
            "Catalog page applied"
        );
    }

    fn lock_state(&self) -> MutexGuard<'_, LoaderState> {
        self.inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
