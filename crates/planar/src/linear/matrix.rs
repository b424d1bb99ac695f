//! Row-major grid of values backed by `nalgebra::DMatrix`.
//!
//! Cells are addressed with a `Point<usize>` whose `x` is the column and `y` the row,
//! matching how bounds are laid out on screen.

use nalgebra::{DMatrix, Scalar};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::PlanarError;
use crate::points::Point;
use crate::scalar::{Dimensions, Slice};

/// Rectangular grid of `T`.
///
/// Invariants:
/// - Every row has the same number of columns.
/// - The empty matrix has dimensions `0 x 0`.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T: Scalar> {
    inner: DMatrix<T>,
}

impl<T: Scalar> Default for Matrix<T> {
    fn default() -> Self {
        Self {
            inner: DMatrix::from_vec(0, 0, Vec::new()),
        }
    }
}

impl<T: Scalar> Matrix<T> {
    /// Build from a list of rows. All rows must share the first row's width; zero-width
    /// input gives the empty matrix.
    pub fn new(rows: Vec<Vec<T>>) -> Result<Self, PlanarError> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != ncols)
        {
            return Err(PlanarError::RaggedRows {
                row,
                expected: ncols,
                found,
            });
        }
        if ncols == 0 {
            return Ok(Self::default());
        }
        Ok(Self {
            inner: DMatrix::from_row_iterator(nrows, ncols, rows.into_iter().flatten()),
        })
    }

    /// Chunk a flat list into rows of `width` elements.
    pub fn from_flat(flat: Vec<T>, width: usize) -> Result<Self, PlanarError> {
        if flat.is_empty() {
            return Ok(Self::default());
        }
        if width == 0 || flat.len() % width != 0 {
            return Err(PlanarError::ChunkMismatch {
                len: flat.len(),
                width,
            });
        }
        let nrows = flat.len() / width;
        Ok(Self {
            inner: DMatrix::from_row_iterator(nrows, width, flat),
        })
    }

    /// Fill a grid of `dimensions` with `cell(row, col)`.
    pub fn from_fn(dimensions: Dimensions, mut cell: impl FnMut(usize, usize) -> T) -> Self {
        if dimensions.is_empty() {
            return Self::default();
        }
        Self {
            inner: DMatrix::from_fn(dimensions.rows, dimensions.cols, |r, c| cell(r, c)),
        }
    }

    #[inline]
    pub fn size(&self) -> Dimensions {
        Dimensions::new(self.inner.nrows(), self.inner.ncols())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Cell at column `at.x`, row `at.y`.
    #[inline]
    pub fn get(&self, at: Point<usize>) -> Option<&T> {
        self.inner.get((at.y(), at.x()))
    }

    /// Sub-grid selected by a row range and a column range.
    pub fn slice(&self, rows: Slice, cols: Slice) -> Result<Self, PlanarError> {
        check_range("rows", rows, self.inner.nrows())?;
        check_range("cols", cols, self.inner.ncols())?;
        if rows.is_empty() || cols.is_empty() {
            return Ok(Self::default());
        }
        Ok(Self {
            inner: self
                .inner
                .view((rows.start, cols.start), (rows.len(), cols.len()))
                .clone_owned(),
        })
    }

    /// Rows top to bottom, each left to right.
    pub fn rows(&self) -> impl Iterator<Item = Vec<T>> + '_ {
        self.inner
            .row_iter()
            .map(|row| row.iter().cloned().collect())
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> Vec<T> {
        self.rows().flatten().collect()
    }

    pub fn sum(&self) -> T
    where
        T: std::iter::Sum,
    {
        self.inner.iter().cloned().sum()
    }
}

fn check_range(axis: &'static str, slice: Slice, limit: usize) -> Result<(), PlanarError> {
    if slice.start > slice.end || slice.end > limit {
        return Err(PlanarError::SliceOutOfRange {
            axis,
            start: slice.start,
            end: slice.end,
            limit,
        });
    }
    Ok(())
}

impl<T: Scalar + Serialize> Serialize for Matrix<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}

impl<'de, T: Scalar + Deserialize<'de>> Deserialize<'de> for Matrix<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<Vec<T>>::deserialize(deserializer)?;
        Matrix::new(rows).map_err(D::Error::custom)
    }
}
