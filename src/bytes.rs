//! Bounds-checked integer reads over raw byte buffers.

use crate::types::error::{ParseError, Result};

fn take<const N: usize>(buf: &[u8], offset: usize) -> Result<[u8; N]> {
    let end = offset.checked_add(N).ok_or(ParseError::Truncated {
        offset,
        needed: N,
        available: buf.len(),
    })?;
    let slice = buf.get(offset..end).ok_or(ParseError::Truncated {
        offset,
        needed: N,
        available: buf.len(),
    })?;
    let mut out = [0u8; N];
    out.copy_from_slice(slice);
    Ok(out)
}

pub fn byte_at(buf: &[u8], offset: usize) -> Result<u8> {
    buf.get(offset).copied().ok_or(ParseError::Truncated {
        offset,
        needed: 1,
        available: buf.len(),
    })
}

pub fn read_u16_le(buf: &[u8], offset: usize) -> Result<u16> {
    Ok(u16::from_le_bytes(take(buf, offset)?))
}

pub fn read_i16_le(buf: &[u8], offset: usize) -> Result<i16> {
    Ok(i16::from_le_bytes(take(buf, offset)?))
}

pub fn read_u32_le(buf: &[u8], offset: usize) -> Result<u32> {
    Ok(u32::from_le_bytes(take(buf, offset)?))
}

pub fn read_i32_be(buf: &[u8], offset: usize) -> Result<i32> {
    Ok(i32::from_be_bytes(take(buf, offset)?))
}

pub fn read_u32_be(buf: &[u8], offset: usize) -> Result<u32> {
    Ok(u32::from_be_bytes(take(buf, offset)?))
}
