//! Refresh orchestration and cached-versus-fresh arbitration.

use log::{debug, info, warn};
use std::sync::Arc;

use super::snapshot_sink::{NoOpSnapshotSink, SnapshotSink};
use super::source_traits::PortfolioSource;
use super::sync_model::{RefreshOutcome, ResolvedSnapshot, SnapshotOrigin, SnapshotUpdate};
use crate::errors::Result;
use crate::portfolio::{merge_holdings, Holding, PortfolioSummary, Snapshot};
use crate::snapshot::SnapshotStore;

/// Runs portfolio refreshes for every screen that shows portfolio figures.
///
/// # Algorithm
///
/// 1. Load the cached snapshot and publish it as a provisional result.
/// 2. Fetch the fresh summary and holdings concurrently.
/// 3. A fresh summary with positive equity always wins and is cached. A fresh
///    zero is suspect: the cached value is preferred, then the caller's prior
///    in-memory value, and only if neither holds a positive value is the zero
///    adopted, untrusted and uncached.
/// 4. If the summary fetch fails, fall back to the cached value, then the
///    prior value, else report [`RefreshOutcome::NoData`].
///
/// Summaries are never blended; holdings follow [`merge_holdings`]. Overlapping
/// refreshes are not serialized, and nothing is remembered between calls apart
/// from what the store holds.
pub struct SyncCoordinator {
    store: Arc<SnapshotStore>,
    sink: Arc<dyn SnapshotSink>,
}

impl SyncCoordinator {
    pub fn new(store: Arc<SnapshotStore>) -> Self {
        Self {
            store,
            sink: Arc::new(NoOpSnapshotSink),
        }
    }

    /// Publishes provisional and final results to `sink`.
    pub fn with_sink(mut self, sink: Arc<dyn SnapshotSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn store(&self) -> &Arc<SnapshotStore> {
        &self.store
    }

    /// Returns the cached snapshot for first paint, without contacting the
    /// backend.
    pub fn provisional(&self) -> Result<Option<ResolvedSnapshot>> {
        Ok(self.store.load()?.map(ResolvedSnapshot::from_cached))
    }

    /// Refreshes the portfolio from `source`.
    ///
    /// `prior` is the value the caller is currently displaying, if any. Only a
    /// failure of the session storage itself is returned as an error.
    pub async fn refresh(
        &self,
        source: &dyn PortfolioSource,
        prior: Option<&Snapshot>,
    ) -> Result<RefreshOutcome> {
        let cached = self.store.load()?;
        if let Some(cached) = &cached {
            debug!(
                "Publishing cached snapshot (equity {}) as provisional",
                cached.total_equity()
            );
            self.sink.publish(SnapshotUpdate::Provisional(
                ResolvedSnapshot::from_cached(cached.clone()),
            ));
        }

        let (summary_result, holdings_result) =
            tokio::join!(source.fetch_summary(), source.fetch_holdings());

        let fresh_holdings = holdings_result.unwrap_or_else(|e| {
            warn!("Failed to fetch holdings, keeping previous rows: {}", e);
            Vec::new()
        });

        let outcome = match summary_result {
            Ok(fresh) if fresh.is_valid() => {
                self.arbitrate(fresh, fresh_holdings, cached, prior)?
            }
            Ok(fresh) => {
                warn!(
                    "Ignoring fresh summary with invalid total equity {}",
                    fresh.total_equity
                );
                Self::fall_back(cached, prior)
            }
            Err(e) => {
                warn!("Failed to fetch portfolio summary: {}", e);
                Self::fall_back(cached, prior)
            }
        };

        self.sink.publish(SnapshotUpdate::Resolved(outcome.clone()));
        Ok(outcome)
    }

    fn arbitrate(
        &self,
        fresh: PortfolioSummary,
        fresh_holdings: Vec<Holding>,
        cached: Option<Snapshot>,
        prior: Option<&Snapshot>,
    ) -> Result<RefreshOutcome> {
        if fresh.has_positive_equity() {
            let previous = Self::previous_holdings(cached.as_ref(), prior);
            let resolved = Snapshot::new(fresh, merge_holdings(previous, &fresh_holdings));
            self.store.save(&resolved)?;
            debug!("Fresh summary accepted (equity {})", resolved.total_equity());
            return Ok(RefreshOutcome::Resolved(ResolvedSnapshot::new(
                resolved,
                true,
                SnapshotOrigin::Fresh,
            )));
        }

        // Zero equity from here on
        if let Some(cached) = cached.filter(Snapshot::is_persistable) {
            warn!(
                "Backend reported zero total equity, keeping cached value {}",
                cached.total_equity()
            );
            // Already the stored value; not written again
            let holdings = merge_holdings(&cached.holdings, &fresh_holdings);
            return Ok(RefreshOutcome::Resolved(ResolvedSnapshot::new(
                Snapshot::new(cached.summary, holdings),
                true,
                SnapshotOrigin::Cached,
            )));
        }

        if let Some(prior) = prior.filter(|p| p.is_persistable()) {
            warn!(
                "Backend reported zero total equity, keeping in-memory value {}",
                prior.total_equity()
            );
            let holdings = merge_holdings(&prior.holdings, &fresh_holdings);
            return Ok(RefreshOutcome::Resolved(ResolvedSnapshot::new(
                Snapshot::new(prior.summary.clone(), holdings),
                true,
                SnapshotOrigin::Prior,
            )));
        }

        info!("Backend reported zero total equity and no earlier value exists");
        Ok(RefreshOutcome::Resolved(ResolvedSnapshot::new(
            Snapshot::new(fresh, fresh_holdings),
            false,
            SnapshotOrigin::SuspectFresh,
        )))
    }

    fn fall_back(cached: Option<Snapshot>, prior: Option<&Snapshot>) -> RefreshOutcome {
        // A positive value beats a zero wherever it comes from
        let (snapshot, origin) = match (cached, prior) {
            (Some(cached), _) if cached.is_persistable() => (cached, SnapshotOrigin::Cached),
            (_, Some(prior)) if prior.is_persistable() => (prior.clone(), SnapshotOrigin::Prior),
            (Some(cached), _) => (cached, SnapshotOrigin::Cached),
            (None, Some(prior)) => (prior.clone(), SnapshotOrigin::Prior),
            (None, None) => {
                info!("No fresh portfolio data and nothing to fall back to");
                return RefreshOutcome::NoData;
            }
        };

        let trusted = snapshot.is_persistable();
        debug!(
            "Falling back to {:?} snapshot (equity {}, trusted {})",
            origin,
            snapshot.total_equity(),
            trusted
        );
        RefreshOutcome::Resolved(ResolvedSnapshot::new(snapshot, trusted, origin))
    }

    /// Holdings to keep when the fresh list comes back empty: the cached rows,
    /// or the caller's rows when nothing useful is cached.
    fn previous_holdings<'a>(
        cached: Option<&'a Snapshot>,
        prior: Option<&'a Snapshot>,
    ) -> &'a [Holding] {
        cached
            .map(|c| c.holdings.as_slice())
            .filter(|h| !h.is_empty())
            .or_else(|| prior.map(|p| p.holdings.as_slice()))
            .unwrap_or(&[])
    }
}
