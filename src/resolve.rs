//! Resolving sample positions against caller-owned rows.

use std::ops::Range;

use crate::window::{WindowShape, WindowTable};

/// Rows selected for one side of a split.
///
/// The variant follows the [`WindowShape`] of the table that produced it, so
/// every sample of a `Samples` value has the same shape.
#[derive(Clone, Debug, PartialEq)]
pub enum Samples<'a, T> {
    /// One row per sample (squeezed width-1 windows).
    Scalar(Vec<&'a T>),
    /// A run of consecutive rows per sample.
    Windows(Vec<&'a [T]>),
}

impl<'a, T> Samples<'a, T> {
    /// Number of samples.
    pub fn len(&self) -> usize {
        match self {
            Samples::Scalar(rows) => rows.len(),
            Samples::Windows(windows) => windows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn scalars(&self) -> Option<&[&'a T]> {
        match self {
            Samples::Scalar(rows) => Some(rows.as_slice()),
            Samples::Windows(_) => None,
        }
    }

    pub fn windows(&self) -> Option<&[&'a [T]]> {
        match self {
            Samples::Scalar(_) => None,
            Samples::Windows(windows) => Some(windows.as_slice()),
        }
    }

    /// Clone the selected rows, one `Vec` per sample.
    ///
    /// Squeezed samples become single-row vectors.
    pub fn to_nested(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        match self {
            Samples::Scalar(rows) => rows.iter().map(|&r| vec![r.clone()]).collect(),
            Samples::Windows(windows) => windows.iter().map(|w| w.to_vec()).collect(),
        }
    }
}

/// Select the rows of `table`'s windows at sample `positions`.
///
/// # Panics
///
/// Panics if `positions` extends past the table or a window past `rows`.
pub(crate) fn gather<'a, T>(
    table: &WindowTable,
    positions: Range<usize>,
    rows: &'a [T],
) -> Samples<'a, T> {
    let starts = table.starts_at(positions);
    match table.shape() {
        WindowShape::Scalar => Samples::Scalar(starts.iter().map(|&s| &rows[s]).collect()),
        WindowShape::Sequence(width) => {
            Samples::Windows(starts.iter().map(|&s| &rows[s..s + width]).collect())
        }
    }
}
