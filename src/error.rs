//! Error types for sequencer configuration and array resolution.

/// Reasons a [`SequencerConfig`](crate::SequencerConfig) is rejected by
/// [`validate`](crate::SequencerConfig::validate).
///
/// The permissive constructor [`Sequencer::new`](crate::Sequencer::new) never
/// returns these; it builds degenerate (usually empty) tables instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfigError {
    /// Timeline length must be greater than zero.
    #[error("timeline length must be greater than zero")]
    EmptyTimeline,
    /// Feature windows must cover at least one step.
    #[error("lookback must be greater than zero")]
    ZeroLookback,
    /// Target windows must cover at least one step.
    #[error("lookforward must be greater than zero")]
    ZeroLookforward,
    /// Samples must advance along the timeline.
    #[error("step must be greater than zero")]
    ZeroStep,
    /// Delay must satisfy `delay > -lookback`.
    #[error("delay must be greater than -lookback (delay={delay}, lookback={lookback})")]
    DelayTooNegative { delay: isize, lookback: usize },
}

/// All errors surfaced by the crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// A window references a row the caller's array does not have.
    #[error("row {index} is out of bounds for an array with {rows} rows")]
    OutOfBounds { index: usize, rows: usize },

    /// A split references anchor positions past the end of the tables.
    #[error("split ends at position {end} but only {len} samples exist")]
    SplitOutOfRange { end: usize, len: usize },

    #[cfg(feature = "ndarray")]
    #[error("array shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

pub type Result<T> = std::result::Result<T, Error>;
