//! API layer
//!
//! Everything the boundary hands back to clients:
//! - Mastodon API response DTOs
//! - Derived field helpers
//! - Converters from stored entities to responses

mod converters;
mod dto;
pub mod fields;

pub use converters::*;
pub use dto::*;
