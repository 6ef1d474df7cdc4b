use super::time_spec::TimeSpec;
use serde::{Deserialize, Serialize};

/// Metadata attached to a transmit buffer.
///
/// `time_spec` of `None` means "send as soon as possible".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TxMetadata {
    pub time_spec: Option<TimeSpec>,
    pub start_of_burst: bool,
    pub end_of_burst: bool,
}
