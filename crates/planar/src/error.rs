//! Errors surfaced by matrix construction, slicing and parsing.

use std::fmt;

/// Errors surfaced by the planar types.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlanarError {
    /// A row did not match the width of the first row.
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A flat list could not be chunked into full rows.
    ChunkMismatch { len: usize, width: usize },
    /// A slice reached outside the matrix along `axis`.
    SliceOutOfRange {
        axis: &'static str,
        start: usize,
        end: usize,
        limit: usize,
    },
    /// A selection produced no cells.
    EmptySelection,
    /// Text did not name an alignment.
    UnknownAlignment { name: String },
}

impl fmt::Display for PlanarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanarError::RaggedRows {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {row} has {found} columns but the first row has {expected}"
            ),
            PlanarError::ChunkMismatch { len, width } => {
                write!(f, "cannot chunk {len} elements into rows of width {width}")
            }
            PlanarError::SliceOutOfRange {
                axis,
                start,
                end,
                limit,
            } => write!(f, "{axis} slice {start}..{end} exceeds limit {limit}"),
            PlanarError::EmptySelection => write!(f, "selection contains no cells"),
            PlanarError::UnknownAlignment { name } => {
                write!(f, "unknown alignment {name:?} (expected left, center or right)")
            }
        }
    }
}

impl std::error::Error for PlanarError {}
