use crate::error::Error;
use std::mem;

const WIDTH: usize = mem::size_of::<u32>();

/// An unsigned 32-bit quantity stored in little-endian byte order, as found
/// in ZIP-style archive headers (signatures, CRC32 checksums, sizes,
/// offsets).
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[repr(C)]
pub struct LittleEndianU32 {
    value: u32,
}

impl LittleEndianU32 {
    // Only the low 32 bits of the input are kept, always interpreted as
    // unsigned. Sign-extended garbage from a widened signed source is
    // discarded here rather than stored.
    pub const fn from_value(value: u64) -> LittleEndianU32 {
        LittleEndianU32 {
            value: ((value & 0xffff_ffff) as u32).to_le(),
        }
    }

    /// Decodes the four bytes at `offset` as a little-endian u32, byte 0
    /// least significant.
    pub fn from_bytes(bytes: &[u8], offset: usize) -> Result<LittleEndianU32, Error> {
        let available = bytes.len().saturating_sub(offset);
        if available < WIDTH {
            return Err(Error::BufferTooShort {
                needed: WIDTH,
                available,
            });
        }
        let mut raw = [0u8; WIDTH];
        raw.copy_from_slice(&bytes[offset..offset + WIDTH]);
        Ok(LittleEndianU32 {
            value: u32::from_le_bytes(raw).to_le(),
        })
    }

    pub fn to_bytes(&self) -> [u8; WIDTH] {
        self.value().to_le_bytes()
    }

    /// Encodes into `bytes[offset..offset + 4]` without allocating. Bytes
    /// outside that range are left untouched.
    pub fn write_into(&self, bytes: &mut [u8], offset: usize) -> Result<(), Error> {
        let available = bytes.len().saturating_sub(offset);
        if available < WIDTH {
            return Err(Error::BufferTooShort {
                needed: WIDTH,
                available,
            });
        }
        bytes[offset..offset + WIDTH].copy_from_slice(&self.to_bytes());
        Ok(())
    }

    pub fn value(&self) -> u32 {
        u32::from_le(self.value)
    }

    /// The same 32 bits reinterpreted as two's-complement; magnitudes at or
    /// above 2^31 come out negative.
    pub fn as_i32(&self) -> i32 {
        self.value() as i32
    }
}
