pub mod mock;
pub mod serial;

pub use mock::{I2cTransaction, MockI2c};
pub use serial::{I2cInterface, SpiConfig, SpiEdge, EEPROM_WRITE_SETTLE};
