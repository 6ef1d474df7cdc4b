use serde::{Deserialize, Serialize};

/// Source of the frequency reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RefSource {
    Internal,
    Sma,
    MimoCable,
}

/// Source of the pulse-per-second signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PpsSource {
    Internal,
    Sma,
    MimoCable,
}

/// Which PPS edge the device latches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PpsPolarity {
    Negative,
    Positive,
}

/// Reference and PPS routing for a device clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockConfig {
    pub ref_source: RefSource,
    pub pps_source: PpsSource,
    pub pps_polarity: PpsPolarity,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            ref_source: RefSource::Internal,
            pps_source: PpsSource::Internal,
            pps_polarity: PpsPolarity::Negative,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_internal() {
        let config = ClockConfig::default();
        assert_eq!(config.ref_source, RefSource::Internal);
        assert_eq!(config.pps_source, PpsSource::Internal);
        assert_eq!(config.pps_polarity, PpsPolarity::Negative);
    }
}
