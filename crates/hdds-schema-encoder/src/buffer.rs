// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Exclusively-owned encode result.

use std::ops::Deref;

/// Encoded bytes handed to the caller.
///
/// Move-only: there is no `Clone`, and the writer that produced it keeps no
/// reference. Crossing a foreign boundary goes through
/// [`into_raw_parts`](Self::into_raw_parts) /
/// [`from_raw_parts`](Self::from_raw_parts).
#[derive(Debug, PartialEq, Eq)]
pub struct OwnedBuffer {
    data: Box<[u8]>,
}

impl OwnedBuffer {
    /// Number of encoded bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True for a zero-length payload.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Borrow the encoded bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Convert into a `Vec<u8>` without copying.
    pub fn into_vec(self) -> Vec<u8> {
        self.data.into_vec()
    }

    /// Unwrap the underlying boxed slice.
    pub fn into_boxed_slice(self) -> Box<[u8]> {
        self.data
    }

    /// Release ownership as a pointer/length pair.
    ///
    /// The caller must hand the pair back to [`from_raw_parts`](Self::from_raw_parts)
    /// exactly once to free it.
    #[must_use = "the released buffer leaks unless reclaimed with from_raw_parts"]
    pub fn into_raw_parts(self) -> (*mut u8, usize) {
        let len = self.data.len();
        let ptr = Box::into_raw(self.data).cast::<u8>();
        (ptr, len)
    }

    /// Reclaim a buffer released by [`into_raw_parts`](Self::into_raw_parts).
    ///
    /// # Safety
    /// - `ptr` and `len` must come from a single `into_raw_parts` call.
    /// - The pair must not have been reclaimed before.
    pub unsafe fn from_raw_parts(ptr: *mut u8, len: usize) -> Self {
        let slice = std::ptr::slice_from_raw_parts_mut(ptr, len);
        Self {
            data: Box::from_raw(slice),
        }
    }
}

impl Deref for OwnedBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl AsRef<[u8]> for OwnedBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl From<Vec<u8>> for OwnedBuffer {
    fn from(v: Vec<u8>) -> Self {
        Self {
            data: v.into_boxed_slice(),
        }
    }
}

impl From<OwnedBuffer> for Vec<u8> {
    fn from(b: OwnedBuffer) -> Self {
        b.into_vec()
    }
}
