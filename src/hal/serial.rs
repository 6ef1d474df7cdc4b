use crate::error::{Error, Result};
use anyhow::anyhow;
use log::trace;
use serde::{Deserialize, Serialize};
use std::thread;
use std::time::Duration;

/// Worst-case EEPROM byte-write latency; slept after every write
/// transaction before the next one is issued.
pub const EEPROM_WRITE_SETTLE: Duration = Duration::from_millis(10);

/// Clock edge a SPI line is latched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpiEdge {
    Rise,
    Fall,
}

/// Edge configuration for a SPI transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpiConfig {
    pub mosi_edge: SpiEdge,
    pub miso_edge: SpiEdge,
}

impl SpiConfig {
    /// Latch both lines on the same edge.
    pub fn new(edge: SpiEdge) -> Self {
        Self {
            mosi_edge: edge,
            miso_edge: edge,
        }
    }
}

impl Default for SpiConfig {
    fn default() -> Self {
        Self::new(SpiEdge::Rise)
    }
}

/// Synchronous byte-oriented I2C transport.
///
/// Implementors provide the two raw transactions; the EEPROM helpers
/// are layered on top as fixed single-byte sequences. The transport is
/// a single-owner capability: calls block the current thread and are
/// strictly sequential, with no retry on failure. The first transport
/// error aborts the remaining sequence.
pub trait I2cInterface {
    fn write_i2c(&mut self, addr: u8, bytes: &[u8]) -> Result<()>;

    fn read_i2c(&mut self, addr: u8, num_bytes: usize) -> Result<Vec<u8>>;

    /// Write `bytes` to the EEPROM at `addr` starting at `offset`.
    ///
    /// One byte per transaction, each addressed at `offset + i`, with
    /// a fixed settle sleep after each write.
    fn write_eeprom(&mut self, addr: u8, offset: u8, bytes: &[u8]) -> Result<()> {
        for (i, byte) in bytes.iter().enumerate() {
            let reg = offset.wrapping_add(i as u8);
            trace!("eeprom write addr={:#04x} reg={:#04x}", addr, reg);
            self.write_i2c(addr, &[reg, *byte])?;
            thread::sleep(EEPROM_WRITE_SETTLE);
        }
        Ok(())
    }

    /// Read `num_bytes` from the EEPROM at `addr` starting at `offset`.
    ///
    /// Per byte: a one-byte position-setting write, then a one-byte
    /// read. Results are returned in request order.
    fn read_eeprom(&mut self, addr: u8, offset: u8, num_bytes: usize) -> Result<Vec<u8>> {
        let mut bytes = Vec::with_capacity(num_bytes);
        for i in 0..num_bytes {
            let reg = offset.wrapping_add(i as u8);
            trace!("eeprom read addr={:#04x} reg={:#04x}", addr, reg);
            self.write_i2c(addr, &[reg])?;
            let read = self.read_i2c(addr, 1)?;
            let byte = read.first().copied().ok_or_else(|| {
                Error::Transport(anyhow!("empty read from i2c addr {:#04x}", addr))
            })?;
            bytes.push(byte);
        }
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hal::mock::{I2cTransaction, MockI2c};

    #[test]
    fn test_write_eeprom_one_transaction_per_byte() {
        let mut bus = MockI2c::new();
        bus.write_eeprom(0x50, 0x10, &[0xaa, 0xbb, 0xcc]).unwrap();

        assert_eq!(
            bus.transactions(),
            &[
                I2cTransaction::Write {
                    addr: 0x50,
                    bytes: vec![0x10, 0xaa]
                },
                I2cTransaction::Write {
                    addr: 0x50,
                    bytes: vec![0x11, 0xbb]
                },
                I2cTransaction::Write {
                    addr: 0x50,
                    bytes: vec![0x12, 0xcc]
                },
            ]
        );
    }

    #[test]
    fn test_read_eeprom_write_read_pairs_in_order() {
        let mut bus = MockI2c::new();
        bus.load(0x20, &[0xde, 0xad]);

        let bytes = bus.read_eeprom(0x50, 0x20, 2).unwrap();
        assert_eq!(bytes, vec![0xde, 0xad]);

        assert_eq!(
            bus.transactions(),
            &[
                I2cTransaction::Write {
                    addr: 0x50,
                    bytes: vec![0x20]
                },
                I2cTransaction::Read {
                    addr: 0x50,
                    num_bytes: 1
                },
                I2cTransaction::Write {
                    addr: 0x50,
                    bytes: vec![0x21]
                },
                I2cTransaction::Read {
                    addr: 0x50,
                    num_bytes: 1
                },
            ]
        );
    }

    #[test]
    fn test_transport_error_aborts_sequence() {
        let mut bus = MockI2c::new();
        bus.fail_after(1);

        let err = bus.write_eeprom(0x50, 0x00, &[1, 2, 3]).unwrap_err();
        assert!(matches!(err, Error::Transport(_)));
        // Only the first transaction went through before the failure.
        assert_eq!(bus.transactions().len(), 1);
    }

    #[test]
    fn test_spi_config_applies_edge_to_both_lines() {
        let config = SpiConfig::new(SpiEdge::Fall);
        assert_eq!(config.mosi_edge, SpiEdge::Fall);
        assert_eq!(config.miso_edge, SpiEdge::Fall);
        assert_eq!(SpiConfig::default(), SpiConfig::new(SpiEdge::Rise));
    }
}
