use crate::error::{AnalysisError, Result};

/// A (row, col) coordinate.
/// Signed so negative input reaches bounds checks instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub fn new(row: i32, col: i32) -> Self {
        Cell { row, col }
    }

    /// Build a cell from an arbitrary-length coordinate list
    pub fn from_coords(coords: &[i64]) -> Result<Self> {
        let [row, col] = coords else {
            return Err(AnalysisError::OriginArity { found: coords.len() });
        };
        Ok(Cell::new(narrow(*row)?, narrow(*col)?))
    }

    /// Parse "row,col" (whitespace around either number is ignored)
    pub fn parse(text: &str) -> Result<Self> {
        let parts: Vec<&str> = text.split(',').map(str::trim).collect();
        if parts.len() != 2 {
            return Err(AnalysisError::OriginArity { found: parts.len() });
        }

        let mut coords = [0i64; 2];
        for (slot, part) in coords.iter_mut().zip(&parts) {
            *slot = part
                .parse::<i64>()
                .map_err(|_| AnalysisError::NonIntegerCoordinate { value: part.to_string() })?;
        }
        Cell::from_coords(&coords)
    }

    /// The four axis-aligned neighbours: up, down, left, right
    pub fn neighbors(self) -> [Cell; 4] {
        [
            Cell::new(self.row - 1, self.col),
            Cell::new(self.row + 1, self.col),
            Cell::new(self.row, self.col - 1),
            Cell::new(self.row, self.col + 1),
        ]
    }
}

fn narrow(value: i64) -> Result<i32> {
    i32::try_from(value).map_err(|_| AnalysisError::CoordinateOverflow { value })
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Rectangular grid of small integer codes, stored row-major.
///
/// A `Grid` is always a proper 2D rectangle with at least one cell; the
/// constructors reject anything else with a dimensionality error. Analyzers
/// only ever borrow a grid immutably.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<i8>,
}

impl Grid {
    /// Create a grid with every cell set to `fill`
    pub fn filled(rows: usize, cols: usize, fill: i8) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(AnalysisError::EmptyGrid);
        }
        Ok(Grid { rows, cols, cells: vec![fill; rows * cols] })
    }

    /// Create a grid from a row-major cell buffer
    pub fn from_flat(rows: usize, cols: usize, cells: Vec<i8>) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(AnalysisError::EmptyGrid);
        }
        if cells.len() != rows * cols {
            return Err(AnalysisError::CellCount { rows, cols, found: cells.len() });
        }
        Ok(Grid { rows, cols, cells })
    }

    /// Create a grid from nested rows; every row must have the same length
    pub fn from_rows<R: AsRef<[i8]>>(rows: &[R]) -> Result<Self> {
        let cols = match rows.first() {
            Some(first) => first.as_ref().len(),
            None => return Err(AnalysisError::EmptyGrid),
        };
        if cols == 0 {
            return Err(AnalysisError::EmptyGrid);
        }

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(AnalysisError::RaggedRow { row: index, expected: cols, found: row.len() });
            }
            cells.extend_from_slice(row);
        }

        Ok(Grid { rows: rows.len(), cols, cells })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false for a constructed grid, kept for the `len` convention
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Row-major view of every cell
    pub fn cells(&self) -> &[i8] {
        &self.cells
    }

    /// Check if a cell lies inside the grid
    pub fn contains(&self, cell: Cell) -> bool {
        self.index_of(cell).is_some()
    }

    /// Convert a cell to its row-major index, or None when out of bounds
    pub fn index_of(&self, cell: Cell) -> Option<usize> {
        let row = usize::try_from(cell.row).ok()?;
        let col = usize::try_from(cell.col).ok()?;
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    /// Get the code at a cell, None when out of bounds
    pub fn get(&self, cell: Cell) -> Option<i8> {
        self.index_of(cell).map(|index| self.cells[index])
    }

    /// Check that another grid has exactly the same shape
    pub fn ensure_same_shape(&self, other: &Grid) -> Result<()> {
        if self.shape() == other.shape() {
            return Ok(());
        }
        Err(AnalysisError::ShapeMismatch {
            walls_rows: self.rows,
            walls_cols: self.cols,
            terrain_rows: other.rows,
            terrain_cols: other.cols,
        })
    }
}
