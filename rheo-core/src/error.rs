// Copyright 2026 The rheo authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for rheo reactive pipelines.
//!
//! Every terminal error flowing through a sequence is a [`RheoError`]. The
//! taxonomy is deliberately small: an error is raised by a user-supplied
//! transform ([`Computation`](RheoError::Computation)), by a deadline
//! ([`Timeout`](RheoError::Timeout)), or propagated from a source
//! ([`Upstream`](RheoError::Upstream)).
//!
//! Fallback operators dispatch on [`ErrorKind`] with an explicit `match`
//! rather than any runtime type inspection.

/// Root error type for all rheo sequences.
///
/// Any unhandled `RheoError` terminates the sequence immediately for all
/// active subscribers.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RheoError {
    /// A user-supplied transform failed or panicked reporting an error.
    #[error("Computation error: {context}")]
    Computation {
        /// Description of the failed computation
        context: String,
    },

    /// A time-bounded operation exceeded its deadline.
    #[error("Timeout error: {context}")]
    Timeout {
        /// Context about the timeout (e.g. the configured duration)
        context: String,
    },

    /// An error propagated from an upstream source.
    #[error("Upstream error: {context}")]
    Upstream {
        /// Description of the source failure
        context: String,
    },
}

/// Discriminant tag for [`RheoError`], used by fallback operators to choose
/// a substitute sequence per error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`RheoError::Computation`]
    Computation,
    /// See [`RheoError::Timeout`]
    Timeout,
    /// See [`RheoError::Upstream`]
    Upstream,
}

impl RheoError {
    /// Create a computation error with the given context.
    pub fn computation(context: impl Into<String>) -> Self {
        Self::Computation {
            context: context.into(),
        }
    }

    /// Create a timeout error with the given context.
    pub fn timeout(context: impl Into<String>) -> Self {
        Self::Timeout {
            context: context.into(),
        }
    }

    /// Create an upstream error with the given context.
    pub fn upstream(context: impl Into<String>) -> Self {
        Self::Upstream {
            context: context.into(),
        }
    }

    /// The kind tag of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Computation { .. } => ErrorKind::Computation,
            Self::Timeout { .. } => ErrorKind::Timeout,
            Self::Upstream { .. } => ErrorKind::Upstream,
        }
    }

    /// The human-readable context attached to this error.
    #[must_use]
    pub fn context(&self) -> &str {
        match self {
            Self::Computation { context }
            | Self::Timeout { context }
            | Self::Upstream { context } => context,
        }
    }
}

/// Specialized `Result` type for rheo operations.
pub type Result<T> = std::result::Result<T, RheoError>;
