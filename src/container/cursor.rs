//! A bounds-checked forward cursor over a decoded body.
//!
//! Every field the parser reads goes through `read_exact`, which either yields the
//! requested bytes or reports exactly how far short the buffer is.

use crate::error::BlueprintError;

/// A failed read: `needed` bytes were requested at `offset`, only `available` remain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Shortfall {
    pub offset: usize,
    pub needed: u64,
    pub available: usize,
}

impl From<Shortfall> for BlueprintError {
    fn from(s: Shortfall) -> Self {
        BlueprintError::BlockOutOfBounds {
            offset: s.offset,
            needed: s.needed,
            available: s.available,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct ByteCursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// A cursor positioned at `pos`, clamped to the end of `bytes`.
    pub fn at(bytes: &'a [u8], pos: usize) -> Self {
        Self {
            bytes,
            pos: pos.min(bytes.len()),
        }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Checks that `n` more bytes are available without consuming them.
    pub fn ensure(&self, n: u64) -> Result<(), Shortfall> {
        if n > self.remaining() as u64 {
            return Err(Shortfall {
                offset: self.pos,
                needed: n,
                available: self.remaining(),
            });
        }
        Ok(())
    }

    /// Reads exactly `n` bytes or fails without moving.
    pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8], Shortfall> {
        self.ensure(n as u64)?;
        let out = &self.bytes[self.pos..self.pos + n];
        self.pos += n;
        Ok(out)
    }

    pub fn read_u32_be(&mut self) -> Result<u32, Shortfall> {
        let raw = self.read_exact(4)?;
        Ok(u32::from_be_bytes([raw[0], raw[1], raw[2], raw[3]]))
    }
}
