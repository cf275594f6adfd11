// Copyright 2026 The rheo authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Execution contexts and timers for rheo pipelines.
//!
//! A [`Scheduler`] is an explicit execution-context parameter threaded
//! through sequence composition: `subscribe_on` and `publish_on` take a
//! scheduler value rather than looking up an ambient thread pool. The
//! [`Timer`] trait supplies the clock used by the timing operators, so
//! tests can run them under Tokio's paused (virtual) clock.

pub mod scheduler;
pub mod timer;

pub use self::scheduler::Scheduler;
pub use self::timer::{Timer, TokioTimer};
