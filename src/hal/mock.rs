use crate::error::{Error, Result};
use crate::hal::serial::I2cInterface;
use anyhow::anyhow;

/// One raw bus transaction as seen by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum I2cTransaction {
    Write { addr: u8, bytes: Vec<u8> },
    Read { addr: u8, num_bytes: usize },
}

/// In-memory I2C transport backed by a 256-byte EEPROM model.
///
/// Records every transaction for assertions and can inject a transport
/// failure after a set number of successful transactions. A one-byte
/// write positions the read cursor; a multi-byte write stores data at
/// the register named by its first byte.
pub struct MockI2c {
    mem: [u8; 256],
    cursor: u8,
    transactions: Vec<I2cTransaction>,
    fail_after: Option<usize>,
}

impl MockI2c {
    pub fn new() -> Self {
        Self {
            mem: [0; 256],
            cursor: 0,
            transactions: Vec::new(),
            fail_after: None,
        }
    }

    /// Preload the memory model starting at `offset`.
    pub fn load(&mut self, offset: u8, bytes: &[u8]) {
        for (i, byte) in bytes.iter().enumerate() {
            self.mem[offset.wrapping_add(i as u8) as usize] = *byte;
        }
    }

    /// Fail every transaction after `count` successful ones.
    pub fn fail_after(&mut self, count: usize) {
        self.fail_after = Some(count);
    }

    pub fn transactions(&self) -> &[I2cTransaction] {
        &self.transactions
    }

    pub fn memory(&self) -> &[u8; 256] {
        &self.mem
    }

    fn check_failure(&self) -> Result<()> {
        if let Some(limit) = self.fail_after {
            if self.transactions.len() >= limit {
                return Err(Error::Transport(anyhow!("injected i2c failure")));
            }
        }
        Ok(())
    }
}

impl Default for MockI2c {
    fn default() -> Self {
        Self::new()
    }
}

impl I2cInterface for MockI2c {
    fn write_i2c(&mut self, addr: u8, bytes: &[u8]) -> Result<()> {
        self.check_failure()?;
        self.transactions.push(I2cTransaction::Write {
            addr,
            bytes: bytes.to_vec(),
        });

        match bytes {
            [] => {}
            [reg] => self.cursor = *reg,
            [reg, data @ ..] => {
                self.cursor = *reg;
                for (i, byte) in data.iter().enumerate() {
                    self.mem[reg.wrapping_add(i as u8) as usize] = *byte;
                }
            }
        }
        Ok(())
    }

    fn read_i2c(&mut self, addr: u8, num_bytes: usize) -> Result<Vec<u8>> {
        self.check_failure()?;
        self.transactions.push(I2cTransaction::Read { addr, num_bytes });

        let mut out = Vec::with_capacity(num_bytes);
        for _ in 0..num_bytes {
            out.push(self.mem[self.cursor as usize]);
            self.cursor = self.cursor.wrapping_add(1);
        }
        Ok(out)
    }
}
