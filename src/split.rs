//! Walk-forward cross-validation splits over sample positions.
//!
//! Splits are expressed as positions into a [`Sequencer`](crate::Sequencer)'s
//! anchor sequence, not as raw timeline indices. Resolve them with
//! [`Sequencer::indices`](crate::Sequencer::indices),
//! [`Sequencer::features`](crate::Sequencer::features) or
//! [`Sequencer::targets`](crate::Sequencer::targets).

use std::fmt;
use std::iter::FusedIterator;
use std::ops::Range;

use log::trace;

/// A train/test partition of sample positions. `train` ends where `test` begins.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Split {
    pub train: Range<usize>,
    pub test: Range<usize>,
}

impl Split {
    #[inline]
    pub fn train_len(&self) -> usize {
        self.train.len()
    }

    #[inline]
    pub fn test_len(&self) -> usize {
        self.test.len()
    }

    /// True when both sides are empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.train.is_empty() && self.test.is_empty()
    }

    /// Positions covered from the first training sample to the last test sample.
    #[inline]
    pub fn span(&self) -> Range<usize> {
        self.train.start..self.test.end
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "train=[{}..{}) test=[{}..{})",
            self.train.start, self.train.end, self.test.start, self.test.end
        )
    }
}

/// How the training window moves between folds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WindowKind {
    /// Fixed-length training window that slides forward with each fold.
    #[default]
    Rolling,
    /// Training window anchored at position 0 that grows with each fold.
    Expanding,
}

/// Lazy generator of walk-forward [`Split`]s.
///
/// For `i = train_size, train_size + test_size, ...` while `i < len`, yields
/// `test = i..min(i + test_size, len)` with `train = i - train_size..i`
/// ([`WindowKind::Rolling`]) or `train = 0..i` ([`WindowKind::Expanding`]).
///
/// The iterator is forward-only. Build a new one to start over.
///
/// # Example
///
/// ```
/// use tscv::RollingSplit;
///
/// let splits: Vec<_> = RollingSplit::new(10, 4, 3).collect();
/// assert_eq!(splits.len(), 2);
/// assert_eq!(splits[0].train, 0..4);
/// assert_eq!(splits[0].test, 4..7);
/// assert_eq!(splits[1].train, 3..7);
/// assert_eq!(splits[1].test, 7..10);
/// ```
#[derive(Clone, Debug)]
pub struct RollingSplit {
    len: usize,
    train_size: usize,
    test_size: usize,
    cursor: usize,
    kind: WindowKind,
}

impl RollingSplit {
    /// Rolling splits over `len` samples.
    pub fn new(len: usize, train_size: usize, test_size: usize) -> Self {
        Self::with_kind(len, train_size, test_size, WindowKind::Rolling)
    }

    /// Expanding splits over `len` samples. `min_train` is the size of the
    /// first training window.
    pub fn expanding(len: usize, min_train: usize, test_size: usize) -> Self {
        Self::with_kind(len, min_train, test_size, WindowKind::Expanding)
    }

    pub fn with_kind(len: usize, train_size: usize, test_size: usize, kind: WindowKind) -> Self {
        Self {
            len,
            train_size,
            test_size,
            cursor: train_size,
            kind,
        }
    }

    #[inline]
    pub fn kind(&self) -> WindowKind {
        self.kind
    }

    #[inline]
    pub fn train_size(&self) -> usize {
        self.train_size
    }

    #[inline]
    pub fn test_size(&self) -> usize {
        self.test_size
    }

    /// Number of samples being partitioned.
    #[inline]
    pub fn sample_count(&self) -> usize {
        self.len
    }

    fn remaining(&self) -> usize {
        // A zero stride would never advance
        if self.test_size == 0 || self.cursor >= self.len {
            return 0;
        }
        (self.len - self.cursor - 1) / self.test_size + 1
    }
}

impl Iterator for RollingSplit {
    type Item = Split;

    fn next(&mut self) -> Option<Split> {
        if self.remaining() == 0 {
            return None;
        }

        let i = self.cursor;
        let train_start = match self.kind {
            WindowKind::Rolling => i - self.train_size,
            WindowKind::Expanding => 0,
        };
        let test_end = i.saturating_add(self.test_size).min(self.len);
        self.cursor = i.saturating_add(self.test_size);

        let split = Split {
            train: train_start..i,
            test: i..test_end,
        };
        trace!("yielding split {split}");
        Some(split)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for RollingSplit {}

impl FusedIterator for RollingSplit {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
