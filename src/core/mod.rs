//! Core module: Thread-Safe Byte Buffer untuk log capture
//!
//! Prinsip desain:
//! - Satu RwLock menjaga seluruh state, tidak ada akses di luar guard
//! - Snapshot memakai shared lock, operasi yang mengubah stream exclusive
//! - Stream semantics: read meng-consume dari depan

mod byte_stream;
mod safe_buffer;

pub use safe_buffer::SafeBuffer;
