// Copyright 2026 The rheo authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Timing operators for signal streams.
//!
//! Every operator here takes its clock through the [`Timer`] abstraction
//! from `rheo-sched` rather than calling the time driver directly, so the
//! default [`TokioTimer`] observes virtual time under a paused runtime.
//!
//! [`Timer`]: rheo_sched::Timer
//! [`TokioTimer`]: rheo_sched::TokioTimer

mod delay_elements;
mod delay_subscription;
mod timeout;

pub use delay_elements::{DelayElements, DelayElementsExt};
pub use delay_subscription::{DelaySubscription, DelaySubscriptionExt};
pub use timeout::{Timeout, TimeoutExt};
