//! Windowing parameters for [`Sequencer`](crate::Sequencer).

use crate::error::ConfigError;

/// Windowing parameters shared by every sample of a timeline.
///
/// ```text
/// Idx / Time  0.......................................................n
/// 1           | lookback | delay | lookforward |                   |
/// 2           | step | lookback | delay | lookforward |            |
/// ...
/// last        | step | ... | step | lookback | delay | lookforward |
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SequencerConfig {
    /// Timesteps in each feature window, taken before the anchor.
    pub lookback: usize,
    /// Timesteps in each target window.
    pub lookforward: usize,
    /// Extra offset between the anchor and the target window.
    /// May be negative, but must stay above `-lookback`.
    pub delay: isize,
    /// Distance between consecutive anchors.
    pub step: usize,
    /// Collapse width-1 windows to scalar positions.
    pub squeeze: bool,
}

impl SequencerConfig {
    /// Check the parameters against a timeline of length `n`.
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self, n: usize) -> Result<(), ConfigError> {
        if n == 0 {
            return Err(ConfigError::EmptyTimeline);
        }
        if self.lookback == 0 {
            return Err(ConfigError::ZeroLookback);
        }
        if self.lookforward == 0 {
            return Err(ConfigError::ZeroLookforward);
        }
        if self.step == 0 {
            return Err(ConfigError::ZeroStep);
        }
        if (self.delay as i128) <= -(self.lookback as i128) {
            return Err(ConfigError::DelayTooNegative {
                delay: self.delay,
                lookback: self.lookback,
            });
        }
        Ok(())
    }
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            lookback: 1,
            lookforward: 1,
            delay: 0,
            step: 1,
            squeeze: true,
        }
    }
}
