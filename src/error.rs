//! Error types for Mastoview
//!
//! Three kinds of failure exist in the conversion layer:
//!
//! - [`StoreError`]: what a [`Store`](crate::data::Store) lookup reports.
//!   `NotFound` is kept apart from backend failures so callers can apply a
//!   default where absence is meaningful.
//! - [`ConvertError`]: a mandatory part of a view could not be produced, or
//!   the call was cancelled. The enclosing conversion returns no view.
//! - [`MultiError`]: per-item failures collected by batch conversions. These
//!   never abort the batch.

use std::fmt;

use thiserror::Error;

/// Failure reported by a store lookup
#[derive(Debug, Error)]
pub enum StoreError {
    /// No entity matched the lookup
    #[error("no entries")]
    NotFound,

    /// The call's context was cancelled while the lookup was in flight
    #[error("lookup cancelled")]
    Cancelled,

    /// The call's deadline passed while the lookup was in flight
    #[error("lookup deadline exceeded")]
    DeadlineExceeded,

    /// Any other failure in the storage backend
    #[error("store backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// True when the lookup stopped because the call was interrupted
    pub fn is_interrupted(&self) -> bool {
        matches!(self, Self::Cancelled | Self::DeadlineExceeded)
    }
}

/// Conversion-layer error type
///
/// Returned when a view cannot be produced at all. Per-item failures inside
/// child lists are *not* reported through this type; see [`MultiError`].
#[derive(Debug, Error)]
pub enum ConvertError {
    /// A mandatory relation could not be loaded
    #[error("error getting {entity} {id}: {source}")]
    Lookup {
        entity: &'static str,
        id: String,
        #[source]
        source: StoreError,
    },

    /// A live count could not be computed
    #[error("error counting {what} for {id}: {source}")]
    Count {
        what: &'static str,
        id: String,
        #[source]
        source: StoreError,
    },

    /// A nested view failed to convert
    #[error("error converting {entity} {id}: {source}")]
    Nested {
        entity: &'static str,
        id: String,
        #[source]
        source: Box<ConvertError>,
    },

    /// Boost chain deeper than any legitimate status graph
    #[error("status {status_id} exceeds boost depth {depth}")]
    RecursionLimit { status_id: String, depth: usize },

    /// The call's context was cancelled
    #[error("conversion cancelled")]
    Cancelled,

    /// The call's deadline passed
    #[error("conversion deadline exceeded")]
    DeadlineExceeded,
}

impl ConvertError {
    pub(crate) fn lookup(entity: &'static str, id: impl Into<String>, source: StoreError) -> Self {
        match source {
            StoreError::Cancelled => Self::Cancelled,
            StoreError::DeadlineExceeded => Self::DeadlineExceeded,
            source => Self::Lookup {
                entity,
                id: id.into(),
                source,
            },
        }
    }

    pub(crate) fn count(what: &'static str, id: impl Into<String>, source: StoreError) -> Self {
        match source {
            StoreError::Cancelled => Self::Cancelled,
            StoreError::DeadlineExceeded => Self::DeadlineExceeded,
            source => Self::Count {
                what,
                id: id.into(),
                source,
            },
        }
    }

    pub(crate) fn nested(entity: &'static str, id: impl Into<String>, source: ConvertError) -> Self {
        if source.is_interrupted() {
            return source;
        }
        Self::Nested {
            entity,
            id: id.into(),
            source: Box::new(source),
        }
    }

    /// True when the innermost cause is a store `NotFound`
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Lookup { source, .. } | Self::Count { source, .. } => source.is_not_found(),
            Self::Nested { source, .. } => source.is_not_found(),
            _ => false,
        }
    }

    /// True when the conversion stopped because its context was cancelled
    /// or its deadline passed. Interrupted errors always propagate.
    pub fn is_interrupted(&self) -> bool {
        matches!(self, Self::Cancelled | Self::DeadlineExceeded)
    }
}

/// Result type alias using ConvertError
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Accumulates per-item failures during a batch operation
///
/// Messages are kept in the order they were recorded. [`MultiError::combine`]
/// collapses the accumulator into `None` when nothing failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiError {
    messages: Vec<String>,
}

impl MultiError {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one already-formatted failure message
    pub fn append(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    /// Record one failure built from format arguments
    pub fn append_fmt(&mut self, args: fmt::Arguments<'_>) {
        self.messages.push(args.to_string());
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Fold another aggregator's messages into this one
    pub fn extend(&mut self, other: MultiError) {
        self.messages.extend(other.messages);
    }

    /// `None` when nothing was recorded, otherwise the accumulator itself
    pub fn combine(self) -> Option<MultiError> {
        if self.messages.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

impl fmt::Display for MultiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, message) in self.messages.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", i + 1, message)?;
        }
        Ok(())
    }
}

impl std::error::Error for MultiError {}
