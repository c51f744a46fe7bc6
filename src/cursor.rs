//! A bounds-checked, forward-only reader over a byte buffer.

use byteorder::{BigEndian, ReadBytesExt};

use crate::error::{Error, Result};

/// Tracks a read position over an immutable byte slice. Every access is
/// bounds checked; a failed read leaves the position untouched.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Cursor { data, pos: 0 }
    }

    /// The next `n` bytes, advancing past them. Fails with an EOF error,
    /// without advancing, when fewer than `n` bytes remain.
    pub fn read(&mut self, n: usize) -> Result<&'a [u8]> {
        let bs = self.peek(n)?;
        self.pos += n;
        Ok(bs)
    }

    /// The next `n` bytes without advancing.
    pub fn peek(&self, n: usize) -> Result<&'a [u8]> {
        if n > self.data.len() - self.pos {
            Err(Error::unexpected_eof())
        } else {
            Ok(&self.data[self.pos..self.pos + n])
        }
    }

    /// True while any bytes remain.
    pub fn has_more(&self) -> bool {
        self.pos < self.data.len()
    }

    /// The current read position.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left to read.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read(1)?[0])
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.read(1)?[0] as i8)
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        let mut bs = self.read(std::mem::size_of::<i16>())?;
        Ok(bs.read_i16::<BigEndian>()?)
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        let mut bs = self.read(std::mem::size_of::<i32>())?;
        Ok(bs.read_i32::<BigEndian>()?)
    }

    pub fn read_i64(&mut self) -> Result<i64> {
        let mut bs = self.read(std::mem::size_of::<i64>())?;
        Ok(bs.read_i64::<BigEndian>()?)
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        let mut bs = self.read(std::mem::size_of::<f32>())?;
        Ok(bs.read_f32::<BigEndian>()?)
    }

    pub fn read_f64(&mut self) -> Result<f64> {
        let mut bs = self.read(std::mem::size_of::<f64>())?;
        Ok(bs.read_f64::<BigEndian>()?)
    }
}
