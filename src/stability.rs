use crate::error::Result;
use crate::grid::Grid;
use crate::material::{is_wall, TerrainLevel};
use tracing::debug;

/// Count wall cells whose terrain is at or below `threshold`.
///
/// A cell counts when `walls[cell] > 0` and `terrain[cell] <= threshold`.
/// Both grids are only read. A threshold below [`TerrainLevel::WEAKEST`]
/// always yields 0; one at or above [`TerrainLevel::STRONGEST`] counts every
/// wall.
///
/// Fails with a shape-mismatch error before counting if the grids differ in
/// shape.
pub fn count_unstable(walls: &Grid, terrain: &Grid, threshold: i8) -> Result<usize> {
    walls.ensure_same_shape(terrain)?;

    let count = walls
        .cells()
        .iter()
        .zip(terrain.cells())
        .filter(|&(&wall, &support)| is_wall(wall) && support <= threshold)
        .count();

    debug!(
        rows = walls.rows(),
        cols = walls.cols(),
        threshold,
        count,
        "counted unstable walls"
    );
    Ok(count)
}

/// [`count_unstable`] with the default threshold: the weakest terrain level
pub fn count_unstable_weakest(walls: &Grid, terrain: &Grid) -> Result<usize> {
    count_unstable(walls, terrain, TerrainLevel::WEAKEST.code())
}
