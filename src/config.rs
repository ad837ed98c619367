use crate::error::AnalysisError;
use crate::grid::Cell;
use crate::material::TerrainLevel;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_CONFIG_PATH: &str = "wallscan.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid leak origin: {0}")]
    Origin(#[from] AnalysisError),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_walls_file")]
    pub walls_file: String,
    #[serde(default = "default_terrain_file")]
    pub terrain_file: String,
    #[serde(default = "default_extension")]
    pub extension: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default = "default_threshold")]
    pub threshold: i8,
    #[serde(default = "default_leak_origin")]
    pub leak_origin: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

// Default values
fn default_data_dir() -> PathBuf { PathBuf::from("csvs") }
fn default_walls_file() -> String { "walls".to_string() }
fn default_terrain_file() -> String { "terrain".to_string() }
fn default_extension() -> String { "csv".to_string() }
fn default_threshold() -> i8 { TerrainLevel::Dirt.code() }
fn default_leak_origin() -> Vec<i64> { vec![6, 5] }
fn default_log_filter() -> String { "wallscan=info".to_string() }

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
            walls_file: default_walls_file(),
            terrain_file: default_terrain_file(),
            extension: default_extension(),
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            leak_origin: default_leak_origin(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            analysis: AnalysisConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl DataConfig {
    /// File names the loader requires, walls first
    pub fn expected_files(&self) -> [String; 2] {
        [
            format!("{}.{}", self.walls_file, self.extension),
            format!("{}.{}", self.terrain_file, self.extension),
        ]
    }

    pub fn walls_path(&self, dir: &Path) -> PathBuf {
        dir.join(format!("{}.{}", self.walls_file, self.extension))
    }

    pub fn terrain_path(&self, dir: &Path) -> PathBuf {
        dir.join(format!("{}.{}", self.terrain_file, self.extension))
    }
}

impl AnalysisConfig {
    /// Configured leak origin as a cell
    pub fn origin(&self) -> Result<Cell, ConfigError> {
        Ok(Cell::from_coords(&self.leak_origin)?)
    }
}

impl Config {
    /// Read `wallscan.toml` from the working directory; `None` if absent
    pub fn try_load_default() -> Result<Option<Self>, ConfigError> {
        Self::try_load(Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Like [`Config::load_from`], but a missing file is `Ok(None)`
    pub fn try_load(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            debug!("no config at {}", path.display());
            return Ok(None);
        }
        Self::load_from(path).map(Some)
    }

    /// Load configuration from an explicit path; any failure is an error
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}
