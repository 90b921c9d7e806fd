//! Bulk provisioning pipeline for the marketplace backend.
//!
//! # Architecture
//!
//! - [`Generator`] fabricates supplier and product candidates from the
//!   category catalog - pure generation, no failure modes
//! - [`Pipeline`] drives register → authenticate → create-K-products per
//!   supplier, strictly sequentially; failures are counted, never fatal
//! - [`Pacing`] inserts fixed delays between calls (100 ms between
//!   products, 1 s between suppliers)
//! - [`Reporter`] owns the [`RunStats`] aggregate and renders checkpoint
//!   and final summaries
//!
//! Per-entity fail-fast: a supplier that cannot register or authenticate
//! gets zero product attempts, and the pipeline moves on to the next one.

#![cfg_attr(not(test), forbid(unsafe_code))]

mod generator;
mod pacing;
mod pipeline;
mod stats;

pub use generator::Generator;
pub use pacing::{PaceKind, Pacing};
pub use pipeline::{AuthMode, Pipeline, PopulateConfig};
pub use stats::{Reporter, RunStats};
