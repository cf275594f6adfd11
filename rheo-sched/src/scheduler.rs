// Copyright 2026 The rheo authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// A named execution context for producer and consumer work.
///
/// The scheduler captures a Tokio runtime handle at construction time, so
/// dispatch is explicit: work lands on the runtime the scheduler was built
/// against, not on whatever runtime happens to be current at the point of
/// use. Clones share the same handle and dispatch counter.
///
/// Dispatch is cooperative and non-blocking; a scheduler never runs work
/// inline.
#[derive(Clone, Debug)]
pub struct Scheduler {
    name: Arc<str>,
    handle: Handle,
    dispatched: Arc<AtomicUsize>,
}

impl Scheduler {
    /// Create a scheduler bound to the current Tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime context.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self::with_handle(name, Handle::current())
    }

    /// Create a scheduler bound to an explicit runtime handle.
    pub fn with_handle(name: impl Into<Arc<str>>, handle: Handle) -> Self {
        Self {
            name: name.into(),
            handle,
            dispatched: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// The name this context was given at construction.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of futures dispatched onto this context so far.
    ///
    /// Shared across clones; tests use this to observe which scheduler a
    /// composition chain actually used.
    #[must_use]
    pub fn dispatch_count(&self) -> usize {
        self.dispatched.load(Ordering::Relaxed)
    }

    /// Dispatch a future onto this execution context.
    pub fn spawn<F>(&self, future: F) -> JoinHandle<F::Output>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        self.dispatched.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(scheduler = %self.name, "dispatching task");
        self.handle.spawn(future)
    }
}
