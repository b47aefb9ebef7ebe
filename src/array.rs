//! Resolving splits against `ndarray` arrays indexed by timeline position.

use std::ops::Range;

use ndarray::{
    concatenate, stack, ArrayBase, ArrayD, ArrayView, Axis, Data, IxDyn, RemoveAxis, Slice,
};

use crate::error::{Error, Result};
use crate::sequencer::Sequencer;
use crate::split::Split;
use crate::window::{WindowShape, WindowTable};

impl Sequencer {
    /// Feature windows of the train and test samples, copied out of `array`.
    ///
    /// The leading axis of `array` is the timeline. A squeezed table yields
    /// shape `(samples, rest...)`; otherwise `(samples, lookback, rest...)`.
    ///
    /// ```
    /// use ndarray::Array2;
    /// use tscv::{Sequencer, SequencerConfig};
    ///
    /// let x = Array2::<f64>::zeros((100, 3));
    /// let seq = Sequencer::new(100, SequencerConfig { lookback: 5, ..Default::default() });
    /// let split = seq.split(50, 10).next().unwrap();
    ///
    /// let (train, test) = seq.features_array(&split, &x).unwrap();
    /// assert_eq!(train.shape(), &[50, 5, 3]);
    /// assert_eq!(test.shape(), &[10, 5, 3]);
    /// ```
    pub fn features_array<A, S, D>(
        &self,
        split: &Split,
        array: &ArrayBase<S, D>,
    ) -> Result<(ArrayD<A>, ArrayD<A>)>
    where
        A: Clone,
        S: Data<Elem = A>,
        D: RemoveAxis,
        D::Larger: RemoveAxis,
    {
        Ok((
            select_windows(self.feature_windows(), split.train.clone(), array)?,
            select_windows(self.feature_windows(), split.test.clone(), array)?,
        ))
    }

    /// Target windows of the train and test samples, copied out of `array`.
    ///
    /// Shapes follow [`features_array`](Self::features_array) with `lookforward`
    /// in place of `lookback`.
    pub fn targets_array<A, S, D>(
        &self,
        split: &Split,
        array: &ArrayBase<S, D>,
    ) -> Result<(ArrayD<A>, ArrayD<A>)>
    where
        A: Clone,
        S: Data<Elem = A>,
        D: RemoveAxis,
        D::Larger: RemoveAxis,
    {
        Ok((
            select_windows(self.target_windows(), split.train.clone(), array)?,
            select_windows(self.target_windows(), split.test.clone(), array)?,
        ))
    }
}

/// Copy the windows at `positions` out of `array`, one sample per leading row.
fn select_windows<A, S, D>(
    table: &WindowTable,
    positions: Range<usize>,
    array: &ArrayBase<S, D>,
) -> Result<ArrayD<A>>
where
    A: Clone,
    S: Data<Elem = A>,
    D: RemoveAxis,
    D::Larger: RemoveAxis,
{
    if positions.end > table.len() {
        return Err(Error::SplitOutOfRange {
            end: positions.end,
            len: table.len(),
        });
    }

    let rows = array.len_of(Axis(0));
    let width = table.width();
    let starts = table.starts_at(positions);

    if let Some(&last) = starts.last() {
        // starts are increasing, so the last window reaches furthest
        if width > 0 && last + width > rows {
            return Err(Error::OutOfBounds {
                index: last + width - 1,
                rows,
            });
        }
    }

    let views: Vec<ArrayView<'_, A, D>> = starts
        .iter()
        .map(|&s| array.slice_axis(Axis(0), Slice::from(s..s + width)))
        .collect();

    if views.is_empty() {
        let mut shape = vec![0];
        if let WindowShape::Sequence(width) = table.shape() {
            shape.push(width);
        }
        shape.extend_from_slice(&array.shape()[1..]);
        return Ok(ArrayD::from_shape_vec(IxDyn(&shape), Vec::new())?);
    }

    let selected = match table.shape() {
        WindowShape::Scalar => concatenate(Axis(0), &views)?.into_dyn(),
        WindowShape::Sequence(_) => stack(Axis(0), &views)?.into_dyn(),
    };
    Ok(selected)
}
