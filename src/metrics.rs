//! Prometheus metrics registry and instruments.
//!
//! The boundary layer exposes [`REGISTRY`]; this crate only records.

use lazy_static::lazy_static;
use prometheus::{IntCounterVec, Opts, Registry};

lazy_static! {
    /// Global Prometheus registry
    pub static ref REGISTRY: Registry = Registry::new();

    pub static ref CONVERSIONS_TOTAL: IntCounterVec = IntCounterVec::new(
        Opts::new("mastoview_conversions_total", "Total number of entity-to-view conversions"),
        &["kind", "outcome"]
    ).expect("metric can be created");

    pub static ref BATCH_ITEM_FAILURES_TOTAL: IntCounterVec = IntCounterVec::new(
        Opts::new("mastoview_batch_item_failures_total", "Items skipped by batch conversions"),
        &["kind"]
    ).expect("metric can be created");

    pub static ref STORE_LOOKUPS_TOTAL: IntCounterVec = IntCounterVec::new(
        Opts::new("mastoview_store_lookups_total", "Relation lookups issued against the store"),
        &["entity"]
    ).expect("metric can be created");
}

/// Initialize metrics registry.
pub fn init_metrics() {
    REGISTRY
        .register(Box::new(CONVERSIONS_TOTAL.clone()))
        .expect("CONVERSIONS_TOTAL can be registered");
    REGISTRY
        .register(Box::new(BATCH_ITEM_FAILURES_TOTAL.clone()))
        .expect("BATCH_ITEM_FAILURES_TOTAL can be registered");
    REGISTRY
        .register(Box::new(STORE_LOOKUPS_TOTAL.clone()))
        .expect("STORE_LOOKUPS_TOTAL can be registered");

    tracing::info!("Metrics registry initialized");
}

/// Record the outcome of one top-level conversion
pub(crate) fn record_conversion<T, E>(kind: &str, result: &Result<T, E>) {
    let outcome = if result.is_ok() { "ok" } else { "error" };
    CONVERSIONS_TOTAL.with_label_values(&[kind, outcome]).inc();
}
