use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failure modes surfaced by the value types and bus helpers.
///
/// Every variant aborts the current operation; nothing here is retried
/// or recovered locally.
#[derive(Debug, Error)]
pub enum Error {
    /// A device address string had a segment without exactly one `=`.
    #[error("invalid args string: {args}")]
    MalformedArgs { args: String },

    /// A MAC address was constructed from the wrong number of bytes.
    #[error("mac address must be 6 bytes, got {len}")]
    InvalidMacLength { len: usize },

    /// A MAC address string did not parse; carries the offending text.
    #[error("invalid mac address: {addr}")]
    InvalidMacFormat { addr: String },

    /// The size of an in-memory sample type could not be derived.
    #[error("unknown io type tag")]
    UnsupportedIoType,

    /// An underlying bus transaction failed; propagated, never generated
    /// by the helpers themselves.
    #[error("i2c transport failure: {0}")]
    Transport(#[from] anyhow::Error),
}
