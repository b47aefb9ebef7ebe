//! Parallel evaluation of every fold of a walk-forward split.

use rayon::prelude::*;

use crate::sequencer::Sequencer;
use crate::split::Split;

/// Evaluate `eval_fn` on every rolling split in parallel.
///
/// Results are returned in split order. The sequencer's tables are immutable,
/// so each fold reads them without synchronization.
///
/// # Arguments
///
/// * `seq` - Sequencer whose samples are split
/// * `train_size` - Samples per training window
/// * `test_size` - Samples per test window, also the stride between folds
/// * `eval_fn` - Fits and scores one fold, returning whatever the caller needs
///
/// # Example
///
/// ```ignore
/// use tscv::{sweep, Sequencer};
///
/// let seq = Sequencer::with_defaults(1000);
/// let sizes = sweep(&seq, 250, 21, |seq, split| {
///     let (_, test) = seq.indices(split);
///     test.len()
/// });
/// ```
pub fn sweep<F, R>(seq: &Sequencer, train_size: usize, test_size: usize, eval_fn: F) -> Vec<R>
where
    F: Fn(&Sequencer, &Split) -> R + Sync,
    R: Send,
{
    let splits: Vec<Split> = seq.split(train_size, test_size).collect();
    splits.par_iter().map(|split| eval_fn(seq, split)).collect()
}
