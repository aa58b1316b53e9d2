//! Conversion from stored entities to API responses
//!
//! [`Converter`] turns partially hydrated entities into Mastodon API
//! responses. Missing relations are fetched through the [`Store`] and
//! written back onto the entity passed in, so a relation is looked up at most
//! once per call tree.
//!
//! Failures split three ways:
//! - a mandatory field cannot be produced: the call returns [`ConvertError`]
//! - an optional part degrades: the failure is logged and a default is used
//! - an item of a child list fails: it is skipped and reported through
//!   [`Partial::error`]
//!
//! Cancellation of the [`Context`] always aborts the whole call.
//!
//! [`ConvertError`]: crate::error::ConvertError
//! [`Context`]: crate::context::Context

mod account;
mod batch;
mod emoji;
mod instance;
mod media;
mod misc;
mod notification;
mod report;
mod resolve;
mod status;

use std::sync::Arc;

use crate::config::AppConfig;
use crate::data::Store;

pub use batch::Partial;

/// Deepest boost nesting converted; a boost of a boost is malformed
pub const MAX_BOOST_DEPTH: usize = 1;

/// Entity-to-response converter
///
/// Holds no per-call state; share one instance across requests.
#[derive(Clone)]
pub struct Converter {
    store: Arc<dyn Store>,
    config: Arc<AppConfig>,
}

impl Converter {
    pub fn new(store: Arc<dyn Store>, config: Arc<AppConfig>) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    fn store(&self) -> &dyn Store {
        self.store.as_ref()
    }

    /// `<protocol>://<domain>/assets/<file>`
    fn asset_url(&self, file: &str) -> String {
        format!("{}/assets/{}", self.config.server.base_url(), file)
    }
}
