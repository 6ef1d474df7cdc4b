use super::time_spec::TimeSpec;
use serde::{Deserialize, Serialize};

/// How the device should stream samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StreamMode {
    /// Stream until told to stop.
    StartContinuous,
    /// Halt a continuous stream.
    StopContinuous,
    /// Stream a fixed number of samples, then stop.
    NumSampsAndDone,
    /// Stream a fixed number of samples, more commands to follow.
    NumSampsAndMore,
}

/// A command instructing the device when and how to stream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StreamCommand {
    pub mode: StreamMode,
    pub num_samps: usize,
    /// Act immediately instead of at `time_spec`.
    pub stream_now: bool,
    pub time_spec: TimeSpec,
}

impl StreamCommand {
    pub fn new(mode: StreamMode) -> Self {
        Self {
            mode,
            num_samps: 0,
            stream_now: true,
            time_spec: TimeSpec::default(),
        }
    }
}
