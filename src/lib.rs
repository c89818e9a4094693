//! Safebuffer - Thread-Safe Byte Buffer untuk Test Harness
//!
//! Arsitektur:
//! - Shared handle: `SafeBuffer` bisa di-clone ke banyak thread
//! - RwLock discipline: snapshot paralel, write/read/reset exclusive
//! - Standard capability: `io::Write`, `io::Read`, `MakeWriter`
//! - Log capture: lihat modul [`sink`]

pub mod core;
pub mod error;
pub mod sink;

pub use crate::core::SafeBuffer;
pub use crate::error::BufferError;
