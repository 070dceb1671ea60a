use byteorder::{ByteOrder, LittleEndian};

use crate::error::{Error, Result};

fn field(span: &[u8], offset: usize, width: usize) -> Result<&[u8]> {
    offset
        .checked_add(width)
        .and_then(|end| span.get(offset..end))
        .ok_or(Error::OutOfBounds { offset, width, len: span.len() })
}

pub fn read_u8(span: &[u8], offset: usize) -> Result<u8> {
    Ok(field(span, offset, 1)?[0])
}

pub fn read_u16_le(span: &[u8], offset: usize) -> Result<u16> {
    Ok(LittleEndian::read_u16(field(span, offset, 2)?))
}

pub fn read_u32_le(span: &[u8], offset: usize) -> Result<u32> {
    Ok(LittleEndian::read_u32(field(span, offset, 4)?))
}

/// Sequential little-endian reader over a borrowed section body
pub struct BinaryReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> BinaryReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        let slice = field(self.data, self.pos, n)?;
        self.pos += n;
        Ok(slice)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        let v = read_u8(self.data, self.pos)?;
        self.pos += 1;
        Ok(v)
    }

    pub fn read_u16_le(&mut self) -> Result<u16> {
        let v = read_u16_le(self.data, self.pos)?;
        self.pos += 2;
        Ok(v)
    }

    pub fn read_u32_le(&mut self) -> Result<u32> {
        let v = read_u32_le(self.data, self.pos)?;
        self.pos += 4;
        Ok(v)
    }
}
