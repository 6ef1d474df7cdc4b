use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Byte length of a hardware address.
pub const MAC_ADDR_LEN: usize = 6;

/// A 6-byte hardware (MAC) address.
///
/// The textual form is always exactly 17 characters: six two-digit
/// lowercase hex groups joined by colons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MacAddr([u8; MAC_ADDR_LEN]);

impl MacAddr {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != MAC_ADDR_LEN {
            return Err(Error::InvalidMacLength { len: bytes.len() });
        }
        let mut addr = [0u8; MAC_ADDR_LEN];
        addr.copy_from_slice(bytes);
        Ok(Self(addr))
    }

    pub fn to_bytes(&self) -> [u8; MAC_ADDR_LEN] {
        self.0
    }
}

impl FromStr for MacAddr {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let invalid = || Error::InvalidMacFormat {
            addr: s.to_string(),
        };

        if s.len() != 17 {
            return Err(invalid());
        }

        let mut bytes = Vec::with_capacity(MAC_ADDR_LEN);
        for group in s.split(':') {
            if group.len() != 2 {
                return Err(invalid());
            }
            bytes.push(u8::from_str_radix(group, 16).map_err(|_| invalid())?);
        }

        // A wrong group count shows up as a byte-count violation here;
        // surface it with the original text attached.
        Self::from_bytes(&bytes).map_err(|_| invalid())
    }
}

impl fmt::Display for MacAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ":")?;
            }
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}
