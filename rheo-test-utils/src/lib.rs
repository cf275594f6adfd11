// Copyright 2026 The rheo authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Test utilities for the rheo reactive publisher library.
//!
//! This crate is development-and-test support only, never a production
//! dependency.
//!
//! # Key types
//!
//! ## `StepVerifier<T>`
//!
//! Subscribes to a [`Flux`](rheo::Flux) and asserts the signal sequence
//! step by step:
//!
//! ```rust,no_run
//! use rheo::Flux;
//! use rheo_test_utils::StepVerifier;
//!
//! # async fn example() {
//! let mut verifier = StepVerifier::create(&Flux::range(1, 3));
//! verifier.expect_next(1).await;
//! verifier.expect_next(2).await;
//! verifier.expect_next(3).await;
//! verifier.verify_complete().await;
//! # }
//! ```
//!
//! Every await inside the verifier is bounded, so a wedged stream fails the
//! test fast instead of hanging it.
//!
//! ## `ErrorInjectingStream`
//!
//! Wraps a value stream and injects a `Signal::Error` at a chosen position,
//! for error-propagation tests.
//!
//! ## Channel helpers
//!
//! [`signal_channel`] pairs an unbounded sender with a signal-stream
//! receiver for imperative test setup; [`recv_timeout`] and
//! [`assert_no_recv`] bound the consuming side.

mod error_injection;
mod helpers;
mod step_verifier;

pub use error_injection::ErrorInjectingStream;
pub use helpers::{assert_no_recv, recv_timeout, signal_channel};
pub use step_verifier::{StepEvent, StepVerifier};
