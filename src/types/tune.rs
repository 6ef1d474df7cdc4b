use serde::{Deserialize, Serialize};

/// How a tunable stage picks its frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TunePolicy {
    /// Do not touch this stage.
    None,
    /// Let the driver pick the frequency.
    Auto,
    /// Use the frequency given in the request.
    Manual,
}

/// A request to tune the device to a target frequency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TuneRequest {
    pub target_freq: f64,
    pub inter_freq_policy: TunePolicy,
    pub inter_freq: f64,
    pub dsp_freq_policy: TunePolicy,
    pub dsp_freq: f64,
}

impl TuneRequest {
    /// Tune with automatic intermediate and DSP frequency selection.
    pub fn new(target_freq: f64) -> Self {
        Self {
            target_freq,
            inter_freq_policy: TunePolicy::Auto,
            inter_freq: 0.0,
            dsp_freq_policy: TunePolicy::Auto,
            dsp_freq: 0.0,
        }
    }

    /// Tune with a manual LO offset: the intermediate frequency is
    /// pinned to `target_freq + lo_off`, DSP selection stays automatic.
    pub fn with_lo_offset(target_freq: f64, lo_off: f64) -> Self {
        Self {
            target_freq,
            inter_freq_policy: TunePolicy::Manual,
            inter_freq: target_freq + lo_off,
            dsp_freq_policy: TunePolicy::Auto,
            dsp_freq: 0.0,
        }
    }
}

/// The frequencies actually achieved by a tune request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TuneResult {
    pub target_inter_freq: f64,
    pub actual_inter_freq: f64,
    pub target_dsp_freq: f64,
    pub actual_dsp_freq: f64,
}

impl TuneResult {
    /// Multi-line report with all frequencies in MHz.
    pub fn to_pp_string(&self) -> String {
        let mut out = String::from("Tune Result:\n");
        out.push_str(&format!(
            "    Target Intermediate Freq: {:.6} (MHz)\n",
            self.target_inter_freq / 1e6
        ));
        out.push_str(&format!(
            "    Actual Intermediate Freq: {:.6} (MHz)\n",
            self.actual_inter_freq / 1e6
        ));
        out.push_str(&format!(
            "    Target DSP Freq Shift:    {:.6} (MHz)\n",
            self.target_dsp_freq / 1e6
        ));
        out.push_str(&format!(
            "    Actual DSP Freq Shift:    {:.6} (MHz)\n",
            self.actual_dsp_freq / 1e6
        ));
        out
    }
}
