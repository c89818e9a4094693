//! Error type untuk SafeBuffer
//!
//! Hanya ada satu kondisi error yang terlihat oleh caller: end-of-data.
//! Write, reset, dan snapshot tidak pernah gagal.

use std::io;
use thiserror::Error;

/// Errors reported by [`SafeBuffer`](crate::SafeBuffer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BufferError {
    /// No unread bytes were available when the read was attempted.
    ///
    /// Buffer tidak punya state "closed", jadi ini bersifat sementara:
    /// read berikutnya bisa berhasil setelah ada write baru.
    #[error("end of data: buffer has no unread bytes")]
    EndOfData,
}

impl BufferError {
    /// Returns `true` for [`BufferError::EndOfData`].
    #[inline]
    pub fn is_end_of_data(&self) -> bool {
        matches!(self, BufferError::EndOfData)
    }
}

impl From<BufferError> for io::Error {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::EndOfData => io::Error::new(io::ErrorKind::UnexpectedEof, err),
        }
    }
}
