use crate::error::Error;
use serde::{Deserialize, Serialize};

/// Byte order of a sample on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ByteOrder {
    BigEndian,
    LittleEndian,
    Native,
}

impl Default for ByteOrder {
    fn default() -> Self {
        ByteOrder::Native
    }
}

/// Over-the-wire sample encoding: how a complex sample is packed for
/// bus or network transmission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtwType {
    /// Bits per component (real or imaginary).
    pub width: usize,
    /// Bit shift applied before packing.
    pub shift: usize,
    pub byteorder: ByteOrder,
}

impl OtwType {
    /// Bytes per complex sample: two components packed at `width` bits,
    /// byte-aligned.
    pub fn get_sample_size(&self) -> usize {
        (self.width * 2) / 8
    }
}

/// Tag for an in-memory complex sample format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IoTag {
    ComplexFloat32,
    ComplexInt16,
    ComplexInt8,
    Custom,
}

/// In-memory sample encoding: a type tag plus its byte size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IoType {
    pub tag: IoTag,
    pub size: usize,
}

impl IoType {
    /// Descriptor for one of the fixed complex formats; the size is
    /// derived from the tag. The custom tag has no derivable size.
    pub fn from_tag(tag: IoTag) -> Result<Self, Error> {
        let size = match tag {
            IoTag::ComplexFloat32 => 8,
            IoTag::ComplexInt16 => 4,
            IoTag::ComplexInt8 => 2,
            IoTag::Custom => return Err(Error::UnsupportedIoType),
        };
        Ok(Self { tag, size })
    }

    /// Descriptor for a custom format with an explicit byte size.
    pub fn custom(size: usize) -> Self {
        Self {
            tag: IoTag::Custom,
            size,
        }
    }
}
