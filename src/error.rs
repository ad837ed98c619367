/// Coarse classification of an [`AnalysisError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An input is not the expected coordinate shape.
    Type,
    /// Two grids that must align do not.
    ShapeMismatch,
    /// A grid is not a proper 2D rectangle.
    Dimensionality,
    /// A coordinate lies outside the grid.
    Bounds,
}

/// Errors raised by the grid analyzers.
///
/// Every variant is a caller error detected before any work is done. None of
/// them are retried and none fall back to a default value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    #[error("origin must be a pair of integers, got {found} value(s)")]
    OriginArity { found: usize },

    #[error("origin coordinate {value:?} is not an integer")]
    NonIntegerCoordinate { value: String },

    #[error("origin coordinate {value} does not fit a grid index")]
    CoordinateOverflow { value: i64 },

    #[error("walls grid is {walls_rows}x{walls_cols} but terrain grid is {terrain_rows}x{terrain_cols}")]
    ShapeMismatch {
        walls_rows: usize,
        walls_cols: usize,
        terrain_rows: usize,
        terrain_cols: usize,
    },

    #[error("grid must be 2-dimensional: no rows or no columns")]
    EmptyGrid,

    #[error("grid must be 2-dimensional: row {row} has {found} columns, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },

    #[error("grid must be 2-dimensional: {found} cells do not fill {rows}x{cols}")]
    CellCount { rows: usize, cols: usize, found: usize },

    #[error("origin ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds { row: i32, col: i32, rows: usize, cols: usize },
}

impl AnalysisError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AnalysisError::OriginArity { .. }
            | AnalysisError::NonIntegerCoordinate { .. }
            | AnalysisError::CoordinateOverflow { .. } => ErrorKind::Type,
            AnalysisError::ShapeMismatch { .. } => ErrorKind::ShapeMismatch,
            AnalysisError::EmptyGrid
            | AnalysisError::RaggedRow { .. }
            | AnalysisError::CellCount { .. } => ErrorKind::Dimensionality,
            AnalysisError::OutOfBounds { .. } => ErrorKind::Bounds,
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
