#![allow(dead_code)]

use serde::Deserialize;
use std::fs;
use std::path::Path;
use wallscan::config::DataConfig;
use wallscan::loader::{load_pair, GridPair};
use wallscan::{Cell, Grid};

/// Expected answers stored next to each fixture's CSV files
#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedResults {
    pub threshold: i8,
    pub origin: [i32; 2],
    pub unstable_walls: usize,
    pub leak_territory: usize,
    /// Unstable count at every terrain level, weakest first
    pub sweep: Vec<usize>,
}

/// One fixture: both grids plus what the analyzers should return
#[derive(Debug, Clone)]
pub struct Fixture {
    pub name: String,
    pub pair: GridPair,
    pub expected: ExpectedResults,
}

impl Fixture {
    pub fn origin(&self) -> Cell {
        Cell::new(self.expected.origin[0], self.expected.origin[1])
    }
}

/// Load a fixture directory containing walls.csv, terrain.csv, expected.json
pub fn load_fixture(dir: &Path) -> Result<Fixture, Box<dyn std::error::Error>> {
    let pair = load_pair(dir, &DataConfig::default())?;
    let contents = fs::read_to_string(dir.join("expected.json"))?;
    let expected: ExpectedResults = serde_json::from_str(&contents)?;
    let name = dir
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string();
    Ok(Fixture { name, pair, expected })
}

/// Every fixture under test_data/standard, sorted by name
pub fn load_standard_fixtures() -> Vec<Fixture> {
    let mut dirs: Vec<_> = fs::read_dir("./test_data/standard")
        .expect("test_data/standard should exist")
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    dirs.sort();

    dirs.iter()
        .map(|dir| {
            load_fixture(dir).unwrap_or_else(|e| panic!("fixture {} failed to load: {}", dir.display(), e))
        })
        .collect()
}

/// Build a grid from literal rows
pub fn grid(rows: &[&[i8]]) -> Grid {
    Grid::from_rows(rows).expect("test grid should be rectangular")
}

/// Write rows as a CSV file
pub fn write_csv(path: &Path, rows: &[&[i8]]) {
    let text: String = rows
        .iter()
        .map(|row| {
            let fields: Vec<String> = row.iter().map(|code| code.to_string()).collect();
            fields.join(",") + "\n"
        })
        .collect();
    fs::write(path, text).expect("failed to write csv");
}

/// Reorder rows and columns: output (r, c) takes input (row_order[r], col_order[c])
pub fn permute(grid: &Grid, row_order: &[usize], col_order: &[usize]) -> Grid {
    let mut cells = Vec::with_capacity(grid.len());
    for &row in row_order {
        for &col in col_order {
            cells.push(grid.cells()[row * grid.cols() + col]);
        }
    }
    Grid::from_flat(row_order.len(), col_order.len(), cells).expect("permutation keeps shape")
}

/// Flip horizontally (mirror left-right)
pub fn flip_horizontal(grid: &Grid, origin: Cell) -> (Grid, Cell) {
    let rows: Vec<usize> = (0..grid.rows()).collect();
    let cols: Vec<usize> = (0..grid.cols()).rev().collect();
    let flipped_origin = Cell::new(origin.row, grid.cols() as i32 - 1 - origin.col);
    (permute(grid, &rows, &cols), flipped_origin)
}

/// Flip vertically (mirror top-bottom)
pub fn flip_vertical(grid: &Grid, origin: Cell) -> (Grid, Cell) {
    let rows: Vec<usize> = (0..grid.rows()).rev().collect();
    let cols: Vec<usize> = (0..grid.cols()).collect();
    let flipped_origin = Cell::new(grid.rows() as i32 - 1 - origin.row, origin.col);
    (permute(grid, &rows, &cols), flipped_origin)
}

/// Flip both horizontally and vertically
pub fn flip_both(grid: &Grid, origin: Cell) -> (Grid, Cell) {
    let (grid, origin) = flip_horizontal(grid, origin);
    flip_vertical(&grid, origin)
}

/// Number of wall cells in a grid
pub fn wall_count(walls: &Grid) -> usize {
    walls.cells().iter().filter(|&&code| code > 0).count()
}
