//! Direction-independent edge fingerprints
//!
//! An edge is stored as two integers: the pixel pattern read along the tile's
//! clockwise traversal and the same pattern read backwards. Two tiles can only
//! share an edge if one of the readings agrees, whatever orientation either
//! tile was scanned in.

use bitvec::prelude::*;
use std::fmt;

use crate::io::configuration::MAX_EDGE_LENGTH;
use crate::io::error::{MosaicError, Result};

/// Canonical encoding of one tile border
///
/// The most significant of the `length` bits is the first pixel in traversal
/// order. `reverse` is always the bit reversal of `forward`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct EdgeFingerprint {
    length: u8,
    forward: u64,
    reverse: u64,
}

impl EdgeFingerprint {
    /// Encode a border from its pixels in traversal order (`true` = on)
    ///
    /// # Errors
    ///
    /// Returns an error if the border is empty or longer than 64 pixels
    pub fn from_pixels(pixels: &[bool]) -> Result<Self> {
        if pixels.is_empty() || pixels.len() > MAX_EDGE_LENGTH {
            return Err(MosaicError::InvalidParameter {
                parameter: "edge",
                value: pixels.len().to_string(),
                reason: format!("edge length must be between 1 and {MAX_EDGE_LENGTH} pixels"),
            });
        }

        let mut forward = 0u64;
        let mut reverse = 0u64;
        for (i, &on) in pixels.iter().enumerate() {
            forward <<= 1;
            if on {
                forward |= 1;
                reverse |= 1 << i;
            }
        }

        Ok(Self {
            length: pixels.len() as u8,
            forward,
            reverse,
        })
    }

    /// Number of pixels along the edge
    pub const fn len(&self) -> usize {
        self.length as usize
    }

    /// Always false; fingerprints are never built from empty borders
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Pattern in traversal order
    pub const fn forward(&self) -> u64 {
        self.forward
    }

    /// Pattern read against traversal order
    pub const fn reverse(&self) -> u64 {
        self.reverse
    }

    /// Key shared by both readings, used to index edges by shape
    pub fn canonical(&self) -> u64 {
        self.forward.min(self.reverse)
    }

    /// Whether both edges could be the same physical border
    pub const fn matches(&self, other: &Self) -> bool {
        self.length == other.length
            && (self.forward == other.forward || self.forward == other.reverse)
    }

    /// Whether the edges line up pixel for pixel as oriented right now
    ///
    /// Neighbouring tiles traverse a shared border from opposite ends, so an
    /// exact fit reads forward on one side and backward on the other.
    pub const fn abuts(&self, other: &Self) -> bool {
        self.length == other.length && self.forward == other.reverse
    }

    /// Swap readings, for an edge now traversed the other way round
    pub const fn flip(&mut self) {
        std::mem::swap(&mut self.forward, &mut self.reverse);
    }

    /// Pixels in traversal order
    pub fn pixels(&self) -> BitVec {
        (0..self.len())
            .rev()
            .map(|bit| (self.forward >> bit) & 1 == 1)
            .collect()
    }
}

impl fmt::Display for EdgeFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for on in self.pixels() {
            f.write_str(if on { "#" } else { "." })?;
        }
        Ok(())
    }
}
