//! Unsynchronized byte stream: append di belakang, consume dari depan
//!
//! Ini adalah state yang dijaga oleh lock di `SafeBuffer`. Tidak ada
//! sinkronisasi di sini, semua method butuh `&mut self` atau `&self`
//! dari pemegang guard.

use std::mem;

/// Growable FIFO byte sequence.
///
/// Bytes before `off` are already consumed. They are reclaimed lazily:
/// on full drain, or on write once the consumed prefix is at least as
/// long as the unread tail.
#[derive(Debug, Default)]
pub(crate) struct ByteStream {
    buf: Vec<u8>,
    off: usize,
}

impl ByteStream {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
            off: 0,
        }
    }

    pub(crate) fn from_vec(buf: Vec<u8>) -> Self {
        Self { buf, off: 0 }
    }

    /// Unread bytes, in write order.
    #[inline]
    pub(crate) fn unread(&self) -> &[u8] {
        &self.buf[self.off..]
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.buf.len() - self.off
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.off == self.buf.len()
    }

    /// Append data di belakang stream. Selalu menerima semua bytes.
    pub(crate) fn write(&mut self, data: &[u8]) -> usize {
        if self.is_empty() {
            self.clear();
        } else if self.off >= self.len() {
            self.compact();
        }
        self.buf.extend_from_slice(data);
        data.len()
    }

    /// Copy sampai `dst.len()` bytes dari depan stream ke `dst`.
    ///
    /// Returns `None` jika stream kosong dan `dst` tidak kosong.
    pub(crate) fn read(&mut self, dst: &mut [u8]) -> Option<usize> {
        if self.is_empty() {
            self.clear();
            return if dst.is_empty() { Some(0) } else { None };
        }

        let n = self.len().min(dst.len());
        dst[..n].copy_from_slice(&self.buf[self.off..self.off + n]);
        self.advance(n);
        Some(n)
    }

    /// Consume sampai dan termasuk `\n` berikutnya.
    ///
    /// Tanpa newline, seluruh sisa content dikembalikan.
    pub(crate) fn read_line(&mut self) -> Option<Vec<u8>> {
        if self.is_empty() {
            self.clear();
            return None;
        }

        let unread = self.unread();
        let n = unread
            .iter()
            .position(|&b| b == b'\n')
            .map_or(unread.len(), |i| i + 1);
        let line = unread[..n].to_vec();
        self.advance(n);
        Some(line)
    }

    /// Drain semua unread bytes sekaligus.
    pub(crate) fn take(&mut self) -> Vec<u8> {
        self.compact();
        mem::take(&mut self.buf)
    }

    pub(crate) fn clear(&mut self) {
        self.buf.clear();
        self.off = 0;
    }

    #[inline]
    fn advance(&mut self, n: usize) {
        self.off += n;
        if self.is_empty() {
            self.clear();
        }
    }

    fn compact(&mut self) {
        if self.off > 0 {
            self.buf.drain(..self.off);
            self.off = 0;
        }
    }
}
