// Copyright 2026 The rheo authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Channel plumbing for imperative test setup.

use futures::Stream;
use futures::StreamExt;
use rheo_core::Signal;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::time::sleep;
use tokio_stream::wrappers::UnboundedReceiverStream;

/// An unbounded channel whose receiving side is a signal stream.
///
/// The sender pushes `Signal`s imperatively; dropping it completes the
/// stream.
pub fn signal_channel<T: Send>() -> (
    UnboundedSender<Signal<T>>,
    impl Stream<Item = Signal<T>> + Send + Unpin,
) {
    let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
    (tx, UnboundedReceiverStream::new(rx))
}

/// Receives the next item, failing the test after `timeout_ms`.
pub async fn recv_timeout<S>(stream: &mut S, timeout_ms: u64) -> Option<S::Item>
where
    S: Stream + Unpin,
{
    match tokio::time::timeout(Duration::from_millis(timeout_ms), stream.next()).await {
        Ok(item) => item,
        Err(_) => panic!("no item within {timeout_ms}ms"),
    }
}

/// Asserts that nothing is emitted for `timeout_ms`.
pub async fn assert_no_recv<S>(stream: &mut S, timeout_ms: u64)
where
    S: Stream + Unpin,
{
    tokio::select! {
        _ = stream.next() => {
            panic!("unexpected item emitted, expected silence for {timeout_ms}ms");
        }
        () = sleep(Duration::from_millis(timeout_ms)) => {}
    }
}
