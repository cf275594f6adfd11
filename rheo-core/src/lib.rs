// Copyright 2026 The rheo authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Core building blocks for rheo reactive pipelines.
//!
//! This crate defines the vocabulary shared by every other crate in the
//! workspace:
//!
//! - [`Signal`] - one event in a sequence (a value or a terminating error;
//!   completion is the end of the underlying stream)
//! - [`RheoError`] / [`ErrorKind`] - the error taxonomy carried by `Signal::Error`
//! - [`CancellationToken`] - cooperative cancellation for subscription loops

pub mod cancellation_token;
pub mod error;
pub mod signal;

pub use self::cancellation_token::CancellationToken;
pub use self::error::{ErrorKind, Result, RheoError};
pub use self::signal::Signal;
