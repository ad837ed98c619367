use crate::config::DataConfig;
use crate::error::AnalysisError;
use crate::grid::Grid;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment and parse failures while reading grids from disk.
/// The analyzers never see these; they only ever receive a finished [`Grid`].
#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    #[error("data directory {0} does not exist")]
    MissingDirectory(PathBuf),

    #[error("{0} does not exist")]
    MissingFile(PathBuf),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}:{line}:{column}: {value:?} is not a small integer")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        value: String,
    },

    #[error("{path}: {source}")]
    Grid {
        path: PathBuf,
        #[source]
        source: AnalysisError,
    },

    #[error(transparent)]
    ShapeMismatch(AnalysisError),
}

/// Walls and terrain loaded from the same directory, same shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridPair {
    pub walls: Grid,
    pub terrain: Grid,
}

/// Check that the data directory and both expected files exist.
/// Files are checked in order, so a missing walls file is reported first.
pub fn validate_env(dir: &Path, data: &DataConfig) -> Result<(), LoaderError> {
    if !dir.is_dir() {
        return Err(LoaderError::MissingDirectory(dir.to_path_buf()));
    }
    for name in data.expected_files() {
        let path = dir.join(name);
        if !path.is_file() {
            return Err(LoaderError::MissingFile(path));
        }
    }
    Ok(())
}

/// Load a comma-separated grid file
pub fn load_grid(path: &Path) -> Result<Grid, LoaderError> {
    let contents = fs::read_to_string(path).map_err(|source| LoaderError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let grid = parse_grid(path, &contents)?;
    debug!(path = %path.display(), rows = grid.rows(), cols = grid.cols(), "loaded grid");
    Ok(grid)
}

/// Parse CSV text into a grid. `path` is only used for error context.
///
/// Blank lines and `#` comments are skipped. Fields written as floats are
/// truncated toward zero.
pub fn parse_grid(path: &Path, contents: &str) -> Result<Grid, LoaderError> {
    let mut rows: Vec<Vec<i8>> = Vec::new();

    for (line_index, line) in contents.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let row = trimmed
            .split(',')
            .enumerate()
            .map(|(column_index, field)| {
                parse_code(field.trim()).ok_or_else(|| LoaderError::Parse {
                    path: path.to_path_buf(),
                    line: line_index + 1,
                    column: column_index + 1,
                    value: field.trim().to_string(),
                })
            })
            .collect::<Result<Vec<i8>, _>>()?;
        rows.push(row);
    }

    Grid::from_rows(&rows).map_err(|source| LoaderError::Grid {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_code(field: &str) -> Option<i8> {
    if let Ok(code) = field.parse::<i8>() {
        return Some(code);
    }
    let value = field.parse::<f64>().ok()?;
    if !value.is_finite() {
        return None;
    }
    let truncated = value.trunc();
    if truncated < i8::MIN as f64 || truncated > i8::MAX as f64 {
        return None;
    }
    Some(truncated as i8)
}

/// Validate the directory, then load walls and terrain and check they align
pub fn load_pair(dir: &Path, data: &DataConfig) -> Result<GridPair, LoaderError> {
    validate_env(dir, data)?;

    let walls = load_grid(&data.walls_path(dir))?;
    let terrain = load_grid(&data.terrain_path(dir))?;
    walls.ensure_same_shape(&terrain).map_err(LoaderError::ShapeMismatch)?;

    info!(
        dir = %dir.display(),
        rows = walls.rows(),
        cols = walls.cols(),
        "loaded walls and terrain"
    );
    Ok(GridPair { walls, terrain })
}
