pub mod batch;
pub mod config;
pub mod error;
pub mod grid;
pub mod leak;
pub mod loader;
pub mod logging;
pub mod material;
pub mod report;
pub mod stability;

pub use error::{AnalysisError, ErrorKind};
pub use grid::{Cell, Grid};
pub use leak::{flood_fill, flood_size, FloodStats};
pub use material::{TerrainLevel, WallMaterial};
pub use stability::{count_unstable, count_unstable_weakest};
