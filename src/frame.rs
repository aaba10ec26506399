//! BGR frame buffers.
//!
//! Pixel data is row-major, three `u8` channels per pixel in B, G, R order.
//! A [`Frame`] is an exclusive lease on a caller-owned buffer for the duration
//! of one effect call; [`OwnedFrame`] owns its bytes and hands out leases.

use std::slice::{ChunksExact, ChunksExactMut};

use crate::error::{FxError, FxResult};

/// Channels per pixel (B, G, R).
pub const CHANNELS: usize = 3;

fn byte_len(rows: usize, cols: usize) -> FxResult<usize> {
    rows.checked_mul(cols)
        .and_then(|n| n.checked_mul(CHANNELS))
        .ok_or_else(|| FxError::InvalidDimensions(format!("{rows}x{cols} overflows usize")))
}

/// Mutable view over a caller-owned BGR buffer.
#[derive(Debug)]
pub struct Frame<'a> {
    data: &'a mut [u8],
    rows: usize,
    cols: usize,
}

impl<'a> Frame<'a> {
    /// Wrap `data` as a `rows x cols` BGR frame.
    ///
    /// Fails without touching the buffer if its length is not exactly
    /// `rows * cols * 3`.
    pub fn new(data: &'a mut [u8], rows: usize, cols: usize) -> FxResult<Self> {
        let expected = byte_len(rows, cols)?;
        if data.len() != expected {
            return Err(FxError::MalformedBuffer {
                len: data.len(),
                rows,
                cols,
            });
        }
        Ok(Self { data, rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn pixel_count(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &*self.data
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut *self.data
    }

    /// Iterate pixels as `[b, g, r]` slices.
    pub fn pixels(&self) -> ChunksExact<'_, u8> {
        self.data.chunks_exact(CHANNELS)
    }

    pub fn pixels_mut(&mut self) -> ChunksExactMut<'_, u8> {
        self.data.chunks_exact_mut(CHANNELS)
    }

    /// Byte offset of the first channel of pixel `(row, col)`.
    #[inline]
    pub fn offset(&self, row: usize, col: usize) -> usize {
        (row * self.cols + col) * CHANNELS
    }

    /// Pixel at `(row, col)`. Panics when out of bounds, like slice indexing.
    pub fn pixel(&self, row: usize, col: usize) -> [u8; 3] {
        let o = self.offset(row, col);
        [self.data[o], self.data[o + 1], self.data[o + 2]]
    }

    /// Shorter-lived lease on the same buffer.
    pub fn reborrow(&mut self) -> Frame<'_> {
        Frame {
            data: &mut *self.data,
            rows: self.rows,
            cols: self.cols,
        }
    }
}

/// BGR frame that owns its buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedFrame {
    data: Vec<u8>,
    rows: usize,
    cols: usize,
}

impl OwnedFrame {
    /// Frame of `rows x cols` pixels, all set to `bgr`.
    pub fn filled(rows: usize, cols: usize, bgr: [u8; 3]) -> FxResult<Self> {
        let len = byte_len(rows, cols)?;
        let mut data = Vec::with_capacity(len);
        for _ in 0..rows * cols {
            data.extend_from_slice(&bgr);
        }
        Ok(Self { data, rows, cols })
    }

    /// Take ownership of an existing BGR buffer.
    pub fn from_bytes(data: Vec<u8>, rows: usize, cols: usize) -> FxResult<Self> {
        let expected = byte_len(rows, cols)?;
        if data.len() != expected {
            return Err(FxError::MalformedBuffer {
                len: data.len(),
                rows,
                cols,
            });
        }
        Ok(Self { data, rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    pub fn pixel(&self, row: usize, col: usize) -> [u8; 3] {
        let o = (row * self.cols + col) * CHANNELS;
        [self.data[o], self.data[o + 1], self.data[o + 2]]
    }

    /// Lease the buffer as a [`Frame`].
    pub fn as_frame(&mut self) -> Frame<'_> {
        Frame {
            data: &mut self.data,
            rows: self.rows,
            cols: self.cols,
        }
    }
}
