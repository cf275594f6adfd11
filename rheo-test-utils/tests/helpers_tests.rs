// Copyright 2026 The rheo authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rheo_core::Signal;
use rheo_test_utils::{assert_no_recv, recv_timeout, signal_channel};

#[tokio::test]
async fn test_signal_channel_delivers_in_order() {
    let (tx, mut rx) = signal_channel();

    tx.send(Signal::Next(1)).unwrap();
    tx.send(Signal::Next(2)).unwrap();

    assert_eq!(recv_timeout(&mut rx, 100).await, Some(Signal::Next(1)));
    assert_eq!(recv_timeout(&mut rx, 100).await, Some(Signal::Next(2)));
}

#[tokio::test]
async fn test_dropping_the_sender_completes_the_stream() {
    let (tx, mut rx) = signal_channel::<i32>();

    tx.send(Signal::Next(1)).unwrap();
    drop(tx);

    assert_eq!(recv_timeout(&mut rx, 100).await, Some(Signal::Next(1)));
    assert_eq!(recv_timeout(&mut rx, 100).await, None);
}

#[tokio::test(start_paused = true)]
async fn test_assert_no_recv_passes_on_silence() {
    let (_tx, mut rx) = signal_channel::<i32>();

    assert_no_recv(&mut rx, 50).await;
}
