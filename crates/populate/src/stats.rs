//! Run statistics and summary reporting.
//!
//! `RunStats` is an owned aggregate threaded through the pipeline, not a
//! process-wide singleton: the pipeline owns it, mutates it after every
//! attempt, and hands it to callers when the run ends.

use core::fmt;

use tracing::info;

/// Counters for one provisioning run.
///
/// Invariant: `suppliers_succeeded + suppliers_failed == suppliers_attempted`
/// at all times, and likewise for products. The `record_*` methods are the
/// only mutation path, so the invariant holds by construction.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub suppliers_attempted: u64,
    pub suppliers_succeeded: u64,
    pub suppliers_failed: u64,
    pub products_attempted: u64,
    pub products_succeeded: u64,
    pub products_failed: u64,
}

impl RunStats {
    /// Record one supplier attempt.
    pub fn record_supplier(&mut self, success: bool) {
        self.suppliers_attempted += 1;
        if success {
            self.suppliers_succeeded += 1;
        } else {
            self.suppliers_failed += 1;
        }
    }

    /// Record one product attempt.
    pub fn record_product(&mut self, success: bool) {
        self.products_attempted += 1;
        if success {
            self.products_succeeded += 1;
        } else {
            self.products_failed += 1;
        }
    }

    /// Supplier success rate as a percentage; zero attempts count as 0 %.
    #[must_use]
    pub fn supplier_success_rate(&self) -> f64 {
        percentage(self.suppliers_succeeded, self.suppliers_attempted)
    }

    /// Product success rate as a percentage; zero attempts count as 0 %.
    #[must_use]
    pub fn product_success_rate(&self) -> f64 {
        percentage(self.products_succeeded, self.products_attempted)
    }

    /// Average products created per successful supplier, when any supplier
    /// succeeded.
    #[must_use]
    pub fn avg_products_per_supplier(&self) -> Option<f64> {
        if self.suppliers_succeeded == 0 {
            return None;
        }
        #[allow(clippy::cast_precision_loss)]
        Some(self.products_succeeded as f64 / self.suppliers_succeeded as f64)
    }
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Final results:")?;
        writeln!(
            f,
            "  Suppliers: {}/{} succeeded, {} failed ({:.1}%)",
            self.suppliers_succeeded,
            self.suppliers_attempted,
            self.suppliers_failed,
            self.supplier_success_rate()
        )?;
        writeln!(
            f,
            "  Products:  {}/{} succeeded, {} failed ({:.1}%)",
            self.products_succeeded,
            self.products_attempted,
            self.products_failed,
            self.product_success_rate()
        )?;
        if let Some(avg) = self.avg_products_per_supplier() {
            writeln!(f, "  Average products per successful supplier: {avg:.1}")?;
        }
        Ok(())
    }
}

#[allow(clippy::cast_precision_loss)]
fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// Owns the run's [`RunStats`] and emits checkpoint/final summaries.
#[derive(Debug)]
pub struct Reporter {
    stats: RunStats,
    /// Emit a checkpoint every N suppliers; 0 disables checkpoints.
    checkpoint_every: usize,
}

impl Reporter {
    /// Reporter with the given checkpoint cadence (0 disables).
    #[must_use]
    pub fn new(checkpoint_every: usize) -> Self {
        Self {
            stats: RunStats::default(),
            checkpoint_every,
        }
    }

    /// Record one supplier attempt.
    pub fn record_supplier(&mut self, success: bool) {
        self.stats.record_supplier(success);
    }

    /// Record one product attempt.
    pub fn record_product(&mut self, success: bool) {
        self.stats.record_product(success);
    }

    /// Current counters.
    #[must_use]
    pub const fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Emit a mid-run checkpoint when the cadence says so. Purely
    /// observational; never changes run semantics.
    pub fn maybe_checkpoint(&self, suppliers_processed: usize) {
        if self.checkpoint_every == 0 || suppliers_processed % self.checkpoint_every != 0 {
            return;
        }
        info!(
            suppliers_processed,
            suppliers_succeeded = self.stats.suppliers_succeeded,
            suppliers_failed = self.stats.suppliers_failed,
            products_succeeded = self.stats.products_succeeded,
            products_failed = self.stats.products_failed,
            "Progress checkpoint"
        );
    }

    /// Render the final summary text.
    #[must_use]
    pub fn summarize(&self) -> String {
        self.stats.to_string()
    }

    /// Finish the run and hand the aggregate to the caller.
    #[must_use]
    pub const fn into_stats(self) -> RunStats {
        self.stats
    }
}
