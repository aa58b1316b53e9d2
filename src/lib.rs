//! Mastoview - Materializes stored fediverse entities into Mastodon API responses
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Boundary (caller's HTTP layer)               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │  &mut entity, viewer, Context
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      API Layer                               │
//! │  - Converter: entity -> response                            │
//! │  - Batch converters with partial results                    │
//! │  - Derived fields (acct, visibility, roles, timestamps)     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Data Layer                              │
//! │  - Entity models with partially loaded relations            │
//! │  - Store trait (implemented by the persistence crate)       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - `api`: response DTOs and the [`Converter`]
//! - `data`: entity models and the [`Store`] trait
//! - `context`: per-call cancellation and deadlines
//! - `config`: configuration management
//! - `error`: error types
//! - `logging`: tracing subscriber setup
//! - `metrics`: Prometheus instruments
//!
//! # Example
//!
//! ```no_run
//! # use std::sync::Arc;
//! # use mastoview::{AppConfig, Context, Converter, Status, Store};
//! # async fn example(store: Arc<dyn Store>, mut status: Status) -> mastoview::Result<()> {
//! let converter = Converter::new(store, Arc::new(AppConfig::load().expect("config")));
//! let ctx = Context::background().with_timeout(std::time::Duration::from_secs(5));
//! let response = converter.status_to_response(&ctx, &mut status, None).await?;
//! println!("{}", serde_json::to_string(&response).expect("serializable"));
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod context;
pub mod data;
pub mod error;
pub mod logging;
pub mod metrics;

pub use api::{Converter, MAX_BOOST_DEPTH, Partial};
pub use config::AppConfig;
pub use context::Context;
pub use data::*;
pub use error::{ConvertError, MultiError, Result, StoreError};
