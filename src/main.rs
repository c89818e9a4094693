//! Safebuffer Demo - latency per operasi SafeBuffer
//!
//! Mengukur:
//! - Write (exclusive lock)
//! - Read (exclusive lock, consume dari depan)
//! - Snapshot (shared lock, copy tanpa consume)
//! - Banyak writer paralel ke satu buffer
//! - Capture log tracing ke buffer

use std::thread;
use std::time::Instant;

use safebuffer::{sink, SafeBuffer};
use tracing::Level;

const LINE: &[u8] = b"2024-01-01T00:00:00Z INFO app: request handled status=200\n";

fn main() {
    println!("🧪 Safebuffer - Thread-Safe Log Sink Demo");
    println!("==========================================\n");

    benchmark_write_read();

    benchmark_snapshot();

    benchmark_concurrent_writers();

    demo_log_capture();

    println!("\n✅ All benchmarks complete!");
}

fn benchmark_write_read() {
    println!("📊 Write/Read Benchmark (Exclusive Lock)");
    println!("----------------------------------------");

    const ITERATIONS: usize = 1_000_000;
    let buf = SafeBuffer::with_capacity(ITERATIONS * LINE.len());

    let start = Instant::now();
    for _ in 0..ITERATIONS {
        buf.write(LINE);
    }
    let write_duration = start.elapsed();

    let mut dst = [0u8; LINE.len()];
    let start = Instant::now();
    while buf.read(&mut dst).is_ok() {}
    let read_duration = start.elapsed();

    let write_ns = write_duration.as_nanos() as f64 / ITERATIONS as f64;
    let read_ns = read_duration.as_nanos() as f64 / ITERATIONS as f64;

    println!("  Line size: {} bytes", LINE.len());
    println!("  Operations: {}", ITERATIONS);
    println!("  Write latency: {:.2} ns/op", write_ns);
    println!("  Read latency:  {:.2} ns/op", read_ns);
    println!(
        "  Write throughput: {:.2} MB/sec\n",
        (ITERATIONS * LINE.len()) as f64 / write_duration.as_secs_f64() / 1_000_000.0
    );
}

fn benchmark_snapshot() {
    println!("📊 Snapshot Benchmark (Shared Lock)");
    println!("-----------------------------------");

    const ITERATIONS: usize = 10_000;
    let buf = SafeBuffer::new();
    while buf.len() < 64 * 1024 {
        buf.write(LINE);
    }

    let start = Instant::now();
    let mut total = 0;
    for _ in 0..ITERATIONS {
        total += buf.snapshot().len();
    }
    let duration = start.elapsed();

    println!("  Buffer size: {} bytes", buf.len());
    println!(
        "  Snapshot latency: {:.2} μs/op",
        duration.as_nanos() as f64 / ITERATIONS as f64 / 1000.0
    );
    println!(
        "  Copy throughput: {:.2} MB/sec\n",
        total as f64 / duration.as_secs_f64() / 1_000_000.0
    );
}

fn benchmark_concurrent_writers() {
    println!("📊 Concurrent Writers (8 threads)");
    println!("---------------------------------");

    const THREADS: usize = 8;
    const PER_THREAD: usize = 100_000;
    let buf = SafeBuffer::new();

    let start = Instant::now();
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let buf = buf.clone();
            thread::spawn(move || {
                for _ in 0..PER_THREAD {
                    buf.write(LINE);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().ok();
    }
    let duration = start.elapsed();

    let expected = THREADS * PER_THREAD * LINE.len();
    println!("  Bytes expected: {}", expected);
    println!("  Bytes captured: {}", buf.len());
    println!(
        "  Throughput: {:.2} M writes/sec",
        (THREADS * PER_THREAD) as f64 / duration.as_secs_f64() / 1_000_000.0
    );
    if buf.len() == expected {
        println!("  ✅ No bytes lost\n");
    } else {
        println!("  ⚠️  Byte count mismatch\n");
    }
}

fn demo_log_capture() {
    println!("📊 Log Capture");
    println!("--------------");

    let ((), logs) = sink::capture(Level::INFO, || {
        tracing::info!(port = 8080, "server started");
        tracing::warn!(elapsed_ms = 250, "slow request");
        tracing::debug!("filtered out");
    });

    while let Ok(line) = logs.read_line() {
        print!("  > {}", String::from_utf8_lossy(&line));
    }
}
