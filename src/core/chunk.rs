//! Splitting of long messages into bounded-length chunks
//!
//! Log ingestion pipelines commonly truncate or reject lines above a fixed
//! length. The emitter writes a long message as several lines, each carrying
//! an `index/count` marker so the pieces can be stitched back together.
//!
//! Splitting works on raw byte offsets. A multi-byte UTF-8 character may be
//! split across two chunks; the bytes are written unchanged, so
//! concatenating the chunks always reproduces the message exactly.

use std::borrow::Cow;

/// Default maximum chunk length in bytes.
pub const DEFAULT_MAX_CHUNK_LENGTH: usize = 3000;

/// One piece of a rendered message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderedChunk<'a> {
    pub bytes: &'a [u8],
    /// 1-based position of this chunk.
    pub index: usize,
    pub count: usize,
}

impl<'a> RenderedChunk<'a> {
    /// The chunk text, with any split UTF-8 sequence replaced by `U+FFFD`.
    pub fn text(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.bytes)
    }

    pub fn is_last(&self) -> bool {
        self.index == self.count
    }
}

/// Number of chunks a message of `len` bytes splits into.
///
/// `max_len` of zero is treated as [`DEFAULT_MAX_CHUNK_LENGTH`].
#[inline]
pub fn chunk_count(len: usize, max_len: usize) -> usize {
    len.div_ceil(effective_max(max_len))
}

#[inline]
fn effective_max(max_len: usize) -> usize {
    if max_len == 0 {
        DEFAULT_MAX_CHUNK_LENGTH
    } else {
        max_len
    }
}

/// Split `message` into chunks of at most `max_len` bytes.
///
/// An empty message yields no chunks at all.
///
/// ```
/// use chunked_logger::core::chunk::split_chunks;
///
/// let chunks: Vec<_> = split_chunks("hello world", 5).collect();
/// assert_eq!(chunks.len(), 3);
/// assert_eq!(chunks[1].bytes, b" worl");
/// assert_eq!((chunks[2].index, chunks[2].count), (3, 3));
/// ```
pub fn split_chunks(message: &str, max_len: usize) -> Chunks<'_> {
    let max_len = effective_max(max_len);
    Chunks {
        bytes: message.as_bytes(),
        max_len,
        next_index: 1,
        count: chunk_count(message.len(), max_len),
    }
}

/// Iterator returned by [`split_chunks`].
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    bytes: &'a [u8],
    max_len: usize,
    next_index: usize,
    count: usize,
}

impl<'a> Iterator for Chunks<'a> {
    type Item = RenderedChunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_index > self.count {
            return None;
        }

        let start = (self.next_index - 1) * self.max_len;
        let end = (start + self.max_len).min(self.bytes.len());
        let chunk = RenderedChunk {
            bytes: &self.bytes[start..end],
            index: self.next_index,
            count: self.count,
        };
        self.next_index += 1;
        Some(chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count + 1 - self.next_index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Chunks<'_> {}
