use crate::batch::ThresholdCount;
use crate::grid::Cell;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to access report file: {0}")]
    Io(#[from] std::io::Error),
}

/// Results of one walls/terrain analysis run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub rows: usize,
    pub cols: usize,
    pub threshold: i8,
    /// Leak origin as [row, col]
    pub origin: [i32; 2],
    pub unstable_walls: usize,
    pub leak_territory: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sweep: Vec<ThresholdCount>,
}

impl AnalysisReport {
    pub fn new(
        shape: (usize, usize),
        threshold: i8,
        origin: Cell,
        unstable_walls: usize,
        leak_territory: usize,
    ) -> Self {
        AnalysisReport {
            rows: shape.0,
            cols: shape.1,
            threshold,
            origin: [origin.row, origin.col],
            unstable_walls,
            leak_territory,
            sweep: Vec::new(),
        }
    }

    pub fn with_sweep(mut self, sweep: Vec<ThresholdCount>) -> Self {
        self.sweep = sweep;
        self
    }

    /// Plain console lines, one answer per line
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("unstable_walls: {}", self.unstable_walls),
            format!("leak_territory: {}", self.leak_territory),
        ];
        for entry in &self.sweep {
            lines.push(format!(
                "unstable_walls[{}<={}]: {}",
                entry.level, entry.threshold, entry.unstable_walls
            ));
        }
        lines
    }

    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<(), ReportError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ReportError> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}
