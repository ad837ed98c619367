use crate::error::{AnalysisError, Result};
use crate::grid::{Cell, Grid};
use crate::material::is_empty;
use std::collections::VecDeque;
use tracing::debug;

/// Bookkeeping from one flood fill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloodStats {
    /// Cells dequeued and counted, origin included
    pub reached: usize,
    /// Cells pushed onto the queue, origin included
    pub enqueued: usize,
}

/// Number of cells reachable from `origin` through 4-connected empty cells
pub fn flood_size(walls: &Grid, origin: Cell) -> Result<usize> {
    flood_fill(walls, origin).map(|stats| stats.reached)
}

/// Breadth-first flood fill over empty wall cells, returning its bookkeeping.
///
/// The origin is counted and expanded unconditionally; only neighbours are
/// required to be empty before they are queued. A walled origin therefore
/// still reports at least 1, and any empty cells touching it are included.
/// Callers that need an empty-only region must check the origin themselves.
///
/// `walls` is only read; the visited marker is allocated per call, so
/// concurrent calls over the same grid never interfere.
pub fn flood_fill(walls: &Grid, origin: Cell) -> Result<FloodStats> {
    let Some(origin_index) = walls.index_of(origin) else {
        return Err(AnalysisError::OutOfBounds {
            row: origin.row,
            col: origin.col,
            rows: walls.rows(),
            cols: walls.cols(),
        });
    };

    let mut visited = vec![false; walls.len()];
    let mut queue = VecDeque::new();
    visited[origin_index] = true;
    queue.push_back(origin);

    let mut stats = FloodStats { reached: 0, enqueued: 1 };

    while let Some(current) = queue.pop_front() {
        stats.reached += 1;

        for next in current.neighbors() {
            let Some(index) = walls.index_of(next) else {
                continue;
            };
            if is_empty(walls.cells()[index]) && !visited[index] {
                visited[index] = true;
                queue.push_back(next);
                stats.enqueued += 1;
            }
        }
    }

    debug!(
        origin = %origin,
        reached = stats.reached,
        "flood fill finished"
    );
    Ok(stats)
}
