//! # tscv
//!
//! Sequence indices and walk-forward cross-validation for time series.
//!
//! ## Features
//!
//! - **Sample indices**: anchor, feature-window and target-window tables for a
//!   timeline `0..n`, built once and never mutated
//! - **Leak-free windows**: features always precede their anchor, targets
//!   start `delay` steps after it
//! - **Walk-forward splits**: lazy rolling or expanding train/test folds over
//!   the samples
//! - **Resolution**: slice caller data by split, as borrowed rows or as
//!   `ndarray` arrays
//!
//! ## Quick Start
//!
//! ```
//! use tscv::{Sequencer, SequencerConfig};
//!
//! let x: Vec<f64> = (0..2500).map(|t| t as f64).collect();
//!
//! let seq = Sequencer::new(x.len(), SequencerConfig { lookback: 5, ..Default::default() });
//!
//! for split in seq.split(250, 21) {
//!     let (x_train, x_test) = seq.features(&split, &x);
//!     let (y_train, y_test) = seq.targets(&split, &x);
//!     let (idx_train, idx_test) = seq.indices(&split);
//!
//!     assert_eq!(x_train.len(), 250);
//!     assert_eq!(y_train.len(), 250);
//!     assert_eq!(x_test.len(), y_test.len());
//!     assert!(idx_train.last() < idx_test.first());
//! }
//! ```
//!
//! ## Windows
//!
//! ```text
//! Idx / Time  0.......................................................n
//! 1           | lookback | delay | lookforward |                   |
//! 2           | step | lookback | delay | lookforward |            |
//! ...
//! last        | step | ... | step | lookback | delay | lookforward |
//! ```
//!
//! Sample `k` is anchored at `i = anchors()[k]`. Its features cover
//! `i - lookback..i` and its targets `i + delay..i + delay + lookforward`.
//! With `squeeze` enabled, width-1 tables hold bare positions:
//!
//! ```
//! use tscv::{Sequencer, SequencerConfig, WindowShape};
//!
//! let seq = Sequencer::new(10, SequencerConfig { lookback: 2, ..Default::default() });
//!
//! assert_eq!(seq.anchors(), &[2, 3, 4, 5, 6, 7, 8, 9]);
//! assert_eq!(seq.feature_windows().shape(), WindowShape::Sequence(2));
//! assert_eq!(seq.feature_windows().to_vecs()[0], vec![0, 1]);
//! assert_eq!(seq.target_windows().shape(), WindowShape::Scalar);
//! assert_eq!(seq.target_windows().scalars().unwrap()[0], 2);
//! ```
//!
//! ## Validation
//!
//! [`Sequencer::new`] accepts any parameters and returns empty tables when no
//! sample fits. Use [`Sequencer::try_new`] to reject degenerate parameters:
//!
//! ```
//! use tscv::{ConfigError, Sequencer, SequencerConfig};
//!
//! let config = SequencerConfig { lookback: 3, lookforward: 3, ..Default::default() };
//! assert!(Sequencer::new(5, config).is_empty());
//!
//! let config = SequencerConfig { lookback: 2, delay: -2, ..Default::default() };
//! assert!(matches!(
//!     Sequencer::try_new(100, config),
//!     Err(ConfigError::DelayTooNegative { .. })
//! ));
//! ```
//!
//! ## Cargo features
//!
//! | Feature | Default | Enables |
//! |---------|---------|---------|
//! | `ndarray` | yes | [`Sequencer::features_array`] and [`Sequencer::targets_array`] |
//! | `serde` | no | `Serialize`/`Deserialize` for configs and splits |
//! | `parallel` | no | `sweep`, parallel evaluation of folds with rayon |

#[cfg(feature = "ndarray")]
mod array;
mod config;
mod error;
mod resolve;
mod sequencer;
pub mod split;
#[cfg(feature = "parallel")]
pub mod sweep;
mod window;

// Re-export public API
pub use config::SequencerConfig;
pub use error::{ConfigError, Error, Result};
pub use resolve::Samples;
pub use sequencer::Sequencer;
pub use split::{RollingSplit, Split, WindowKind};
#[cfg(feature = "parallel")]
pub use sweep::sweep;
pub use window::{WindowShape, WindowTable};
