//! Log capture: pasang `SafeBuffer` sebagai writer `tracing_subscriber::fmt`
//!
//! Output berupa plain text (tanpa ANSI, tanpa timestamp) supaya mudah
//! di-assert. Event dari buffer itu sendiri (`safebuffer::core`) difilter,
//! jadi `reset()` pada buffer yang sedang jadi sink tidak menulis ulang ke
//! dirinya sendiri.
//!
//! ```
//! use safebuffer::sink;
//! use tracing::Level;
//!
//! let ((), logs) = sink::capture(Level::INFO, || {
//!     tracing::info!(user = "alice", "login ok");
//!     tracing::debug!("hidden");
//! });
//!
//! let text = logs.to_string_lossy();
//! assert!(text.contains("login ok"));
//! assert!(!text.contains("hidden"));
//! ```

use tracing::subscriber::{DefaultGuard, SetGlobalDefaultError};
use tracing::{Level, Subscriber};
use tracing_subscriber::EnvFilter;

use crate::SafeBuffer;

/// Build a plain-text `fmt` subscriber that writes every event at `level`
/// or above into `buf`.
pub fn capture_subscriber(
    buf: &SafeBuffer,
    level: Level,
) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_env_filter(filter_for(level))
        .with_writer(buf.clone())
        .with_ansi(false)
        .without_time()
        .with_target(true)
        .finish()
}

/// Jalankan `f` dengan subscriber capture sebagai default thread ini.
///
/// Hanya event dari thread pemanggil yang tertangkap. Untuk worker thread,
/// pakai [`try_init_global`].
pub fn capture<T>(level: Level, f: impl FnOnce() -> T) -> (T, SafeBuffer) {
    let buf = SafeBuffer::new();
    let out = tracing::subscriber::with_default(capture_subscriber(&buf, level), f);
    (out, buf)
}

/// Pasang subscriber capture sebagai default thread ini sampai guard di-drop.
#[must_use = "capture stops when the guard is dropped"]
pub fn set_default(buf: &SafeBuffer, level: Level) -> DefaultGuard {
    tracing::subscriber::set_default(capture_subscriber(buf, level))
}

/// Pasang subscriber capture secara global (semua thread).
///
/// # Errors
/// Gagal jika global subscriber sudah pernah dipasang di proses ini.
pub fn try_init_global(buf: &SafeBuffer, level: Level) -> Result<(), SetGlobalDefaultError> {
    tracing::subscriber::set_global_default(capture_subscriber(buf, level))
}

fn filter_for(level: Level) -> EnvFilter {
    let level = level.as_str().to_ascii_lowercase();
    EnvFilter::new(format!("{level},{}::core=off", env!("CARGO_CRATE_NAME")))
}
