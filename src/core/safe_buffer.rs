//! Thread-Safe Byte Buffer dengan RwLock
//!
//! Disiplin locking:
//! - `snapshot`, `len`, `to_string_lossy`: shared (read) lock, boleh paralel
//! - `write`, `read`, `read_line`, `reset`, `take`: exclusive (write) lock
//!
//! `read` termasuk exclusive karena menggeser posisi consume di stream.
//! Satu lock saja, tidak pernah nested, jadi tidak ada deadlock.

use std::fmt;
use std::io;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::trace;
use tracing_subscriber::fmt::MakeWriter;

use super::byte_stream::ByteStream;
use crate::error::BufferError;

/// Byte buffer yang aman diakses dari banyak thread sekaligus.
///
/// Dibuat untuk jadi sink log di test harness: logger menulis dari thread
/// manapun, test membaca hasilnya lewat [`snapshot`](Self::snapshot) tanpa
/// mengganggu stream, atau men-drain lewat [`read`](Self::read).
///
/// `SafeBuffer` adalah handle: `clone()` berbagi content yang sama.
///
/// ```
/// use safebuffer::SafeBuffer;
///
/// let buf = SafeBuffer::new();
/// buf.write(b"hello world");
///
/// let mut head = [0u8; 5];
/// assert_eq!(buf.read(&mut head), Ok(5));
/// assert_eq!(&head, b"hello");
/// assert_eq!(buf.to_string_lossy(), " world");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SafeBuffer {
    inner: Arc<RwLock<ByteStream>>,
}

impl SafeBuffer {
    /// Membuat buffer kosong.
    pub fn new() -> Self {
        Self::default()
    }

    /// Membuat buffer kosong dengan storage yang sudah dialokasikan.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_stream(ByteStream::with_capacity(capacity))
    }

    fn from_stream(stream: ByteStream) -> Self {
        Self {
            inner: Arc::new(RwLock::new(stream)),
        }
    }

    /// Append `data` di akhir buffer (exclusive lock).
    ///
    /// Selalu menerima semua bytes; return value selalu `data.len()`.
    pub fn write(&self, data: &[u8]) -> usize {
        self.inner.write().write(data)
    }

    /// Consume sampai `dst.len()` bytes dari depan buffer (exclusive lock).
    ///
    /// # Errors
    /// [`BufferError::EndOfData`] jika buffer kosong dan `dst` tidak kosong.
    /// Ini sementara: write berikutnya membuat read bisa berhasil lagi.
    pub fn read(&self, dst: &mut [u8]) -> Result<usize, BufferError> {
        self.inner.write().read(dst).ok_or(BufferError::EndOfData)
    }

    /// Consume satu baris termasuk `\n` (exclusive lock).
    ///
    /// Tanpa newline, sisa content dikembalikan utuh.
    ///
    /// # Errors
    /// [`BufferError::EndOfData`] jika buffer kosong.
    pub fn read_line(&self) -> Result<Vec<u8>, BufferError> {
        self.inner.write().read_line().ok_or(BufferError::EndOfData)
    }

    /// Copy semua unread content tanpa consume (shared lock).
    pub fn snapshot(&self) -> Vec<u8> {
        self.inner.read().unread().to_vec()
    }

    /// Snapshot sebagai text; byte UTF-8 yang tidak valid diganti U+FFFD.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(self.inner.read().unread()).into_owned()
    }

    /// Buang semua content (exclusive lock).
    pub fn reset(&self) {
        let discarded = {
            let mut stream = self.inner.write();
            let len = stream.len();
            stream.clear();
            len
        };
        trace!(discarded, "buffer reset");
    }

    /// Drain semua unread content dalam satu exclusive acquisition.
    ///
    /// Sama dengan `snapshot()` lalu `reset()`, tanpa celah di antaranya
    /// yang bisa diisi writer lain.
    pub fn take(&self) -> Vec<u8> {
        let data = self.inner.write().take();
        trace!(drained = data.len(), "buffer taken");
        data
    }

    /// Jumlah unread bytes (shared lock).
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Cek apakah tidak ada unread bytes (shared lock).
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// `true` jika kedua handle menunjuk ke buffer yang sama.
    pub fn same_buffer(&self, other: &SafeBuffer) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl From<Vec<u8>> for SafeBuffer {
    fn from(data: Vec<u8>) -> Self {
        Self::from_stream(ByteStream::from_vec(data))
    }
}

impl From<&[u8]> for SafeBuffer {
    fn from(data: &[u8]) -> Self {
        Self::from(data.to_vec())
    }
}

impl From<&str> for SafeBuffer {
    fn from(text: &str) -> Self {
        Self::from(text.as_bytes())
    }
}

impl fmt::Display for SafeBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

impl fmt::Write for SafeBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        SafeBuffer::write(self, s.as_bytes());
        Ok(())
    }
}

// Sink/source capability lewat trait standar. Implementasi untuk `&SafeBuffer`
// supaya shared reference bisa dipakai sebagai writer tanpa `mut`.

impl io::Write for &SafeBuffer {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        Ok(SafeBuffer::write(self, data))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl io::Write for SafeBuffer {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        Ok(SafeBuffer::write(self, data))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// End-of-data dipetakan ke `Ok(0)`, konvensi EOF di `io::Read`.

impl io::Read for &SafeBuffer {
    fn read(&mut self, dst: &mut [u8]) -> io::Result<usize> {
        match SafeBuffer::read(self, dst) {
            Ok(n) => Ok(n),
            Err(BufferError::EndOfData) => Ok(0),
        }
    }
}

impl io::Read for SafeBuffer {
    fn read(&mut self, dst: &mut [u8]) -> io::Result<usize> {
        io::Read::read(&mut &*self, dst)
    }
}

impl<'a> MakeWriter<'a> for SafeBuffer {
    type Writer = &'a SafeBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self
    }
}
