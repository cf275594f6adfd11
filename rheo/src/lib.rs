// Copyright 2026 The rheo authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! # rheo
//!
//! Cold reactive publishers for Rust: the single-value [`Mono`] and the
//! multi-value [`Flux`], with a composable operator surface over signal
//! streams.
//!
//! ## Overview
//!
//! A publisher is an assembly recipe. Operators compose the recipe;
//! nothing runs until `subscribe`, and every subscription re-runs the
//! chain from its source, so subscribers never share sequence state.
//!
//! Errors travel in-band as [`Signal::Error`] and terminate the sequence;
//! only the `on_error_*` operators intercept them. Execution context is
//! explicit through [`Scheduler`]: `subscribe_on` pins where the chain
//! runs, `publish_on` switches context mid-chain.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use rheo::Flux;
//!
//! #[tokio::main]
//! async fn main() {
//!     let doubled = Flux::range(1, 5).map(|v| v * 2);
//!     doubled.subscribe(
//!         |v| println!("next: {v}"),
//!         |e| eprintln!("error: {e}"),
//!         || println!("complete"),
//!     );
//! }
//! ```

mod flux;
mod mono;
mod subscription;

pub use flux::Flux;
pub use mono::Mono;
pub use subscription::{Subscription, SubscriptionState};

// Re-export the signal layer and scheduling so downstream crates depend on
// the facade alone.
pub use rheo_core::{CancellationToken, ErrorKind, Result, RheoError, Signal};
pub use rheo_sched::{Scheduler, Timer, TokioTimer};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{
        ErrorKind, Flux, Mono, RheoError, Scheduler, Signal, Subscription, SubscriptionState,
    };
}
