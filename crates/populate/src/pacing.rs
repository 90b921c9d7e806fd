//! Fixed-interval pacing between backend calls.
//!
//! Deliberately not adaptive backoff: the delays exist only to avoid
//! bursting the remote service, not to react to throttling signals.

use std::time::Duration;

/// Which gap in the run is being paced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaceKind {
    /// Between individual product-creation calls for one supplier.
    BetweenProducts,
    /// Between finishing one supplier's full sequence and starting the next.
    BetweenSuppliers,
}

/// Fixed delays inserted between operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// Short delay between product creations (default 100 ms).
    pub between_products: Duration,
    /// Longer delay between suppliers (default 1 s).
    pub between_suppliers: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            between_products: Duration::from_millis(100),
            between_suppliers: Duration::from_secs(1),
        }
    }
}

impl Pacing {
    /// No delays at all, for tests and dry runs.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            between_products: Duration::ZERO,
            between_suppliers: Duration::ZERO,
        }
    }

    /// Sleep for the configured gap.
    pub async fn pace(&self, kind: PaceKind) {
        let delay = match kind {
            PaceKind::BetweenProducts => self.between_products,
            PaceKind::BetweenSuppliers => self.between_suppliers,
        };
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}
