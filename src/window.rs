//! Window tables: one contiguous run of timeline positions per sample.

use std::ops::Range;

/// Shape of every entry in a [`WindowTable`], fixed when the table is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WindowShape {
    /// Each entry is a single timeline position (a squeezed width-1 window).
    Scalar,
    /// Each entry is a run of this many consecutive positions.
    Sequence(usize),
}

/// Windows of equal width, stored by their start position.
///
/// Entry `k` covers `start[k]..start[k] + width`. Starts are strictly
/// increasing because they are derived from the anchor sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowTable {
    starts: Vec<usize>,
    width: usize,
    shape: WindowShape,
}

impl WindowTable {
    pub(crate) fn new(starts: Vec<usize>, width: usize, squeeze: bool) -> Self {
        let shape = if squeeze && width == 1 {
            WindowShape::Scalar
        } else {
            WindowShape::Sequence(width)
        };
        Self {
            starts,
            width,
            shape,
        }
    }

    /// Number of windows.
    #[inline]
    pub fn len(&self) -> usize {
        self.starts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    /// Positions covered by each window, squeezed or not.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn shape(&self) -> WindowShape {
        self.shape
    }

    #[inline]
    pub fn is_squeezed(&self) -> bool {
        self.shape == WindowShape::Scalar
    }

    /// First timeline position of every window.
    #[inline]
    pub fn starts(&self) -> &[usize] {
        &self.starts
    }

    /// The positions of a squeezed table, one per window.
    ///
    /// Returns `None` for [`WindowShape::Sequence`] tables.
    pub fn scalars(&self) -> Option<&[usize]> {
        match self.shape {
            WindowShape::Scalar => Some(self.starts.as_slice()),
            WindowShape::Sequence(_) => None,
        }
    }

    /// Timeline range covered by window `k`.
    pub fn get(&self, k: usize) -> Option<Range<usize>> {
        self.starts.get(k).map(|&s| s..s + self.width)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = Range<usize>> + '_ {
        let width = self.width;
        self.starts.iter().map(move |&s| s..s + width)
    }

    /// Materialize every window as an explicit list of positions.
    pub fn to_vecs(&self) -> Vec<Vec<usize>> {
        self.iter().map(|r| r.collect()).collect()
    }

    /// Largest timeline position referenced by any window.
    ///
    /// `None` when the table is empty or the windows have zero width.
    pub fn max_position(&self) -> Option<usize> {
        if self.width == 0 {
            return None;
        }
        self.starts.last().map(|&s| s + self.width - 1)
    }

    /// Window starts for a run of sample positions.
    ///
    /// # Panics
    ///
    /// Panics if `positions` extends past [`len`](Self::len).
    #[inline]
    pub(crate) fn starts_at(&self, positions: Range<usize>) -> &[usize] {
        &self.starts[positions]
    }
}
