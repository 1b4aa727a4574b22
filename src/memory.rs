//! Byte buffer primitives over caller-owned memory.
//!
//! Every operation works on a slice the caller already owns and checks the
//! requested index or range before touching it, so a bad length is reported
//! as [`MemoryError::OutOfBounds`] instead of writing past the buffer. The
//! range operations hand back the region they touched, which keeps calls
//! chainable the way the pointer-returning C versions are.

use std::ops::{Deref, DerefMut};

use log::{debug, trace};

use crate::error::MemoryError;

// =============================================================================
// Single element access
// =============================================================================

pub fn get_value(buf: &[u8], index: usize) -> Result<u8, MemoryError> {
    buf.get(index).copied().ok_or(MemoryError::OutOfBounds {
        index,
        len: buf.len(),
    })
}

pub fn set_value(buf: &mut [u8], index: usize, value: u8) -> Result<(), MemoryError> {
    let len = buf.len();
    let slot = buf
        .get_mut(index)
        .ok_or(MemoryError::OutOfBounds { index, len })?;
    *slot = value;
    Ok(())
}

pub fn clear_value(buf: &mut [u8], index: usize) -> Result<(), MemoryError> {
    set_value(buf, index, 0)
}

/// Sets the first `size` elements of `buf` to `value`.
pub fn set_all(buf: &mut [u8], value: u8, size: usize) -> Result<(), MemoryError> {
    my_memset(buf, size, value).map(|_| ())
}

/// Zeroes the first `size` elements of `buf`.
pub fn clear_all(buf: &mut [u8], size: usize) -> Result<(), MemoryError> {
    set_all(buf, 0, size)
}

// =============================================================================
// Range operations
// =============================================================================

fn region(buf: &[u8], start: usize, length: usize) -> Result<&[u8], MemoryError> {
    let len = buf.len();
    start
        .checked_add(length)
        .and_then(|end| buf.get(start..end))
        .ok_or_else(|| MemoryError::range(start, length, len))
}

fn region_mut(buf: &mut [u8], start: usize, length: usize) -> Result<&mut [u8], MemoryError> {
    let len = buf.len();
    start
        .checked_add(length)
        .and_then(|end| buf.get_mut(start..end))
        .ok_or_else(|| MemoryError::range(start, length, len))
}

/// Copies `length` bytes from `src` into `dst`.
///
/// The two buffers are distinct borrows, so the overlapping case that makes
/// a plain copy unsafe cannot be expressed here. Use [`my_memmove`] to copy
/// within a single buffer.
pub fn my_memcopy<'a>(
    src: &[u8],
    dst: &'a mut [u8],
    length: usize,
) -> Result<&'a mut [u8], MemoryError> {
    let from = region(src, 0, length)?;
    let to = region_mut(dst, 0, length)?;
    to.copy_from_slice(from);
    Ok(to)
}

/// Moves `length` bytes inside `buf` from offset `src` to offset `dst`.
///
/// Overlapping ranges are handled by picking the copy direction: forward
/// when the source lies after the destination, backward otherwise, so no
/// byte is overwritten before it has been read.
pub fn my_memmove(
    buf: &mut [u8],
    src: usize,
    dst: usize,
    length: usize,
) -> Result<&mut [u8], MemoryError> {
    region(buf, src, length)?;
    region(buf, dst, length)?;
    trace!("memmove {length} bytes from {src} to {dst}");

    if src > dst {
        for i in 0..length {
            buf[dst + i] = buf[src + i];
        }
    } else {
        for i in (0..length).rev() {
            buf[dst + i] = buf[src + i];
        }
    }

    region_mut(buf, dst, length)
}

pub fn my_memset(buf: &mut [u8], length: usize, value: u8) -> Result<&mut [u8], MemoryError> {
    let target = region_mut(buf, 0, length)?;
    target.fill(value);
    Ok(target)
}

pub fn my_memzero(buf: &mut [u8], length: usize) -> Result<&mut [u8], MemoryError> {
    my_memset(buf, length, 0)
}

/// Reverses the first `length` bytes of `buf` in place.
pub fn my_reverse(buf: &mut [u8], length: usize) -> Result<&mut [u8], MemoryError> {
    let target = region_mut(buf, 0, length)?;
    if target.is_empty() {
        return Ok(target);
    }

    let (mut left, mut right) = (0, target.len() - 1);
    while left < right {
        target.swap(left, right);
        left += 1;
        right -= 1;
    }
    Ok(target)
}

// =============================================================================
// Word allocation
// =============================================================================

/// An owned run of 32-bit words returned by [`reserve_words`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBlock {
    words: Vec<i32>,
}

impl WordBlock {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Deref for WordBlock {
    type Target = [i32];

    fn deref(&self) -> &[i32] {
        &self.words
    }
}

impl DerefMut for WordBlock {
    fn deref_mut(&mut self) -> &mut [i32] {
        &mut self.words
    }
}

/// Reserves `length` zeroed words.
///
/// Allocation failure is reported as [`MemoryError::AllocationFailed`]
/// rather than aborting the process.
pub fn reserve_words(length: usize) -> Result<WordBlock, MemoryError> {
    let mut words = Vec::new();
    words
        .try_reserve_exact(length)
        .map_err(|_| MemoryError::AllocationFailed { words: length })?;
    words.resize(length, 0);
    debug!("reserved {length} words");
    Ok(WordBlock { words })
}

/// Releases a block obtained from [`reserve_words`]. `None` is a no-op.
pub fn free_words(block: Option<WordBlock>) {
    if let Some(block) = block {
        debug!("freed {} words", block.len());
        drop(block);
    }
}
