//! Log Sink Test - SafeBuffer sebagai writer untuk tracing_subscriber
//!
//! Usage:
//!   cargo test --test log_sink_test -- --nocapture

use std::io::Read;
use std::thread;

use safebuffer::{sink, SafeBuffer};
use tracing::{info, warn, Level};

#[test]
fn test_make_writer_with_plain_fmt_subscriber() {
    let buf = SafeBuffer::new();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buf.clone())
        .with_ansi(false)
        .without_time()
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        info!(order_id = 1001, "order accepted");
        warn!("inventory low");
    });

    let text = buf.to_string_lossy();
    println!("captured:\n{}", text);
    assert!(text.contains("order accepted"));
    assert!(text.contains("order_id=1001"));
    assert!(text.contains("inventory low"));
}

#[test]
fn test_snapshot_does_not_disturb_later_drain() {
    let ((), logs) = sink::capture(Level::INFO, || {
        info!("first");
        info!("second");
    });

    // Assertion via snapshot, then the same content is still drainable
    let before = logs.to_string_lossy();
    assert!(before.contains("first"));

    let mut drained = String::new();
    (&logs).read_to_string(&mut drained).unwrap();
    assert_eq!(drained, before);
    assert!(logs.is_empty());
}

#[test]
fn test_read_line_per_event() {
    let ((), logs) = sink::capture(Level::DEBUG, || {
        for i in 0..5 {
            tracing::debug!(step = i, "progress");
        }
    });

    let mut lines = 0;
    while let Ok(line) = logs.read_line() {
        let line = String::from_utf8(line).unwrap();
        assert!(line.ends_with('\n'));
        assert!(line.contains(&format!("step={}", lines)));
        lines += 1;
    }
    assert_eq!(lines, 5);
}

#[test]
fn test_reset_between_phases() {
    let buf = SafeBuffer::new();
    let _guard = sink::set_default(&buf, Level::INFO);

    info!("phase one");
    assert!(buf.to_string_lossy().contains("phase one"));

    buf.reset();
    info!("phase two");

    let text = buf.to_string_lossy();
    assert!(!text.contains("phase one"));
    assert!(text.contains("phase two"));
    assert_eq!(text.lines().count(), 1);
}

#[test]
fn test_global_capture_across_threads() {
    const THREADS: usize = 4;
    const EVENTS: usize = 50;

    let buf = SafeBuffer::new();
    sink::try_init_global(&buf, Level::INFO).expect("global subscriber already set");

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            thread::spawn(move || {
                for e in 0..EVENTS {
                    info!(worker = t, event = e, "global-marker");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let text = buf.to_string_lossy();
    let marked: Vec<&str> = text.lines().filter(|l| l.contains("global-marker")).collect();
    assert_eq!(marked.len(), THREADS * EVENTS);

    // Every event landed as a whole line
    for t in 0..THREADS {
        for e in 0..EVENTS {
            let needle = format!("worker={} event={}", t, e);
            assert!(
                marked.iter().any(|l| l.contains(&needle)),
                "missing {}",
                needle
            );
        }
    }
}
