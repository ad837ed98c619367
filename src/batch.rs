use crate::error::Result;
use crate::grid::{Cell, Grid};
use crate::leak::flood_size;
use crate::material::TerrainLevel;
use crate::stability::count_unstable;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Unstable wall count at one terrain threshold
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdCount {
    pub threshold: i8,
    pub level: String,
    pub unstable_walls: usize,
}

/// Count unstable walls at every terrain level, in parallel.
/// Results are ordered weakest to strongest.
pub fn sweep_thresholds(walls: &Grid, terrain: &Grid) -> Result<Vec<ThresholdCount>> {
    walls.ensure_same_shape(terrain)?;

    TerrainLevel::ALL[..]
        .par_iter()
        .map(|&level| {
            count_unstable(walls, terrain, level.code()).map(|unstable_walls| ThresholdCount {
                threshold: level.code(),
                level: level.name().to_string(),
                unstable_walls,
            })
        })
        .collect()
}

/// Flood from each origin in parallel; result `i` belongs to `origins[i]`
pub fn flood_sizes(walls: &Grid, origins: &[Cell]) -> Vec<Result<usize>> {
    origins
        .par_iter()
        .map(|&origin| flood_size(walls, origin))
        .collect()
}
