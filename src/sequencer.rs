//! Sample index construction for supervised learning on a single timeline.

use log::{debug, warn};

use crate::config::SequencerConfig;
use crate::error::ConfigError;
use crate::resolve::{gather, Samples};
use crate::split::{RollingSplit, Split};
use crate::window::WindowTable;

/// Anchor, feature-window and target-window tables for a timeline `0..n`.
///
/// Each sample `k` is anchored at timeline position `anchors()[k] = i`:
///
/// - its feature window is `i - lookback..i`,
/// - its target window is `i + delay..i + delay + lookforward`.
///
/// All three tables are built once on construction and never change, so a
/// `Sequencer` can be shared freely between threads.
///
/// # Example
///
/// ```
/// use tscv::{Sequencer, SequencerConfig};
///
/// let seq = Sequencer::new(10, SequencerConfig { lookback: 2, ..Default::default() });
/// assert_eq!(seq.anchors(), &[2, 3, 4, 5, 6, 7, 8, 9]);
/// assert_eq!(seq.feature_windows().get(0), Some(0..2));
/// assert_eq!(seq.target_windows().scalars().unwrap()[0], 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sequencer {
    n: usize,
    config: SequencerConfig,
    anchors: Vec<usize>,
    features: WindowTable,
    targets: WindowTable,
}

impl Sequencer {
    /// Build the tables for a timeline of length `n`.
    ///
    /// Never fails. Parameters that [`SequencerConfig::validate`] would reject
    /// are logged and produce degenerate, usually empty, tables. Anchors whose
    /// windows would leave `0..n` are skipped.
    pub fn new(n: usize, config: SequencerConfig) -> Self {
        if let Err(e) = config.validate(n) {
            warn!("building sequencer over degenerate parameters: {e}");
        }

        let anchors = if config.step == 0 {
            Vec::new()
        } else {
            enumerate_anchors(n, &config)
        };

        let features = WindowTable::new(
            anchors.iter().map(|&i| i - config.lookback).collect(),
            config.lookback,
            config.squeeze,
        );
        let targets = WindowTable::new(
            anchors
                .iter()
                .map(|&i| (i as i128 + config.delay as i128) as usize)
                .collect(),
            config.lookforward,
            config.squeeze,
        );

        debug!(
            "sequencer over {n} steps: {} samples, features {:?}, targets {:?}",
            anchors.len(),
            features.shape(),
            targets.shape()
        );

        Self {
            n,
            config,
            anchors,
            features,
            targets,
        }
    }

    /// Validate `config` against `n`, then build the tables.
    ///
    /// ```
    /// use tscv::{ConfigError, Sequencer, SequencerConfig};
    ///
    /// let config = SequencerConfig { step: 0, ..Default::default() };
    /// assert_eq!(Sequencer::try_new(100, config), Err(ConfigError::ZeroStep));
    /// ```
    pub fn try_new(n: usize, config: SequencerConfig) -> Result<Self, ConfigError> {
        config.validate(n)?;
        Ok(Self::new(n, config))
    }

    /// Tables for `n` steps with [`SequencerConfig::default`].
    pub fn with_defaults(n: usize) -> Self {
        Self::new(n, SequencerConfig::default())
    }

    /// Number of samples (anchors).
    #[inline]
    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// Length of the timeline the tables were built for.
    #[inline]
    pub fn timeline_len(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn config(&self) -> &SequencerConfig {
        &self.config
    }

    /// Anchor positions, strictly increasing.
    #[inline]
    pub fn anchors(&self) -> &[usize] {
        &self.anchors
    }

    #[inline]
    pub fn feature_windows(&self) -> &WindowTable {
        &self.features
    }

    #[inline]
    pub fn target_windows(&self) -> &WindowTable {
        &self.targets
    }

    /// Minimum number of rows an array needs so every window resolves.
    pub fn required_rows(&self) -> usize {
        let features = self.features.max_position().map_or(0, |p| p + 1);
        let targets = self.targets.max_position().map_or(0, |p| p + 1);
        features.max(targets)
    }

    // === Splitting ===

    /// Rolling-window splits with a fixed `train_size` and a stride of `test_size`.
    ///
    /// ```
    /// use tscv::Sequencer;
    ///
    /// let seq = Sequencer::with_defaults(20);
    /// let mut cv = seq.split(5, 3);
    ///
    /// let first = cv.next().unwrap();
    /// assert_eq!((first.train, first.test), (0..5, 5..8));
    /// let second = cv.next().unwrap();
    /// assert_eq!((second.train, second.test), (3..8, 8..11));
    /// ```
    pub fn split(&self, train_size: usize, test_size: usize) -> RollingSplit {
        debug!(
            "rolling split over {} samples (train={train_size}, test={test_size})",
            self.len()
        );
        RollingSplit::new(self.len(), train_size, test_size)
    }

    /// Expanding-window splits: training always starts at the first sample and
    /// grows by `test_size` each fold, starting from `min_train` samples.
    pub fn expanding_split(&self, min_train: usize, test_size: usize) -> RollingSplit {
        debug!(
            "expanding split over {} samples (min_train={min_train}, test={test_size})",
            self.len()
        );
        RollingSplit::expanding(self.len(), min_train, test_size)
    }

    // === Resolution ===

    /// Anchor positions of the train and test samples.
    ///
    /// # Panics
    ///
    /// Panics if the split extends past [`len`](Self::len).
    pub fn indices(&self, split: &Split) -> (&[usize], &[usize]) {
        (
            &self.anchors[split.train.clone()],
            &self.anchors[split.test.clone()],
        )
    }

    /// Feature windows of the train and test samples, taken from `rows`.
    ///
    /// `rows` is indexed by timeline position. Squeezed tables return one row
    /// per sample, otherwise each sample is a `lookback`-row slice.
    ///
    /// # Panics
    ///
    /// Panics if the split extends past [`len`](Self::len) or a window reaches
    /// past the end of `rows`.
    pub fn features<'a, T>(
        &self,
        split: &Split,
        rows: &'a [T],
    ) -> (Samples<'a, T>, Samples<'a, T>) {
        (
            gather(&self.features, split.train.clone(), rows),
            gather(&self.features, split.test.clone(), rows),
        )
    }

    /// Target windows of the train and test samples, taken from `rows`.
    ///
    /// # Panics
    ///
    /// Same conditions as [`features`](Self::features).
    pub fn targets<'a, T>(
        &self,
        split: &Split,
        rows: &'a [T],
    ) -> (Samples<'a, T>, Samples<'a, T>) {
        (
            gather(&self.targets, split.train.clone(), rows),
            gather(&self.targets, split.test.clone(), rows),
        )
    }
}

/// Walk `lookback, lookback + step, ...` while `i < n + 1 - delay - lookforward`.
///
/// Candidates are also capped at `n` so feature windows stay on the timeline,
/// and skipped while `i + delay < 0`. Bounds are computed in `i128` so no
/// parameter can wrap.
fn enumerate_anchors(n: usize, config: &SequencerConfig) -> Vec<usize> {
    let n = n as i128;
    let lookback = config.lookback as i128;
    let delay = config.delay as i128;
    let end = (n + 1 - delay - config.lookforward as i128).min(n + 1);

    if lookback >= end {
        return Vec::new();
    }

    (lookback..end)
        .step_by(config.step)
        .filter(|&i| i + delay >= 0)
        .map(|i| i as usize)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
