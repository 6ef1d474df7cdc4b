pub mod error;
pub mod hal;
pub mod types;

pub use error::{Error, Result};
