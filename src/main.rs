use std::env;
use std::path::{Path, PathBuf};
use std::process;
use tracing::{error, info, warn};
use wallscan::batch::sweep_thresholds;
use wallscan::config::{Config, ConfigError, DEFAULT_CONFIG_PATH};
use wallscan::loader::load_pair;
use wallscan::logging::init_tracing;
use wallscan::report::AnalysisReport;
use wallscan::{count_unstable, flood_size, Cell};

const USAGE: &str = "Usage: wallscan [--config <path>] [--dir <path>] [--threshold <n>] \
[--origin <row,col>] [--json] [--report <path>] [--sweep]";

/// Command-line overrides on top of the config file
#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    dir: Option<PathBuf>,
    threshold: Option<i8>,
    origin: Option<Cell>,
    json: bool,
    report: Option<PathBuf>,
    sweep: bool,
    help: bool,
}

fn parse_args(raw: &[String]) -> Result<Args, String> {
    let mut args = Args::default();
    let mut iter = raw.iter();

    while let Some(flag) = iter.next() {
        let mut value = |name: &str| {
            iter.next()
                .cloned()
                .ok_or_else(|| format!("{} requires a value", name))
        };
        match flag.as_str() {
            "--config" => args.config = Some(PathBuf::from(value("--config")?)),
            "--dir" => args.dir = Some(PathBuf::from(value("--dir")?)),
            "--threshold" => {
                let text = value("--threshold")?;
                let threshold = text
                    .parse::<i8>()
                    .map_err(|_| format!("--threshold expects a small integer, got {:?}", text))?;
                args.threshold = Some(threshold);
            }
            "--origin" => {
                let text = value("--origin")?;
                args.origin = Some(Cell::parse(&text).map_err(|e| format!("--origin: {}", e))?);
            }
            "--report" => args.report = Some(PathBuf::from(value("--report")?)),
            "--json" => args.json = true,
            "--sweep" => args.sweep = true,
            "--help" | "-h" => args.help = true,
            other => return Err(format!("unknown argument {:?}\n{}", other, USAGE)),
        }
    }

    Ok(args)
}

/// How the config was obtained, logged once the subscriber exists
#[derive(Debug)]
enum ConfigSource {
    File(PathBuf),
    Defaults,
    Fallback(ConfigError),
}

/// An explicit `--config` must load; the default path may be absent or broken
fn load_config(args: &Args, default_path: &Path) -> Result<(Config, ConfigSource), ConfigError> {
    if let Some(path) = &args.config {
        return Ok((Config::load_from(path)?, ConfigSource::File(path.clone())));
    }
    Ok(match Config::try_load(default_path) {
        Ok(Some(config)) => (config, ConfigSource::File(default_path.to_path_buf())),
        Ok(None) => (Config::default(), ConfigSource::Defaults),
        Err(e) => (Config::default(), ConfigSource::Fallback(e)),
    })
}

fn run(args: Args, config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let dir = args.dir.clone().unwrap_or_else(|| config.data.dir.clone());
    let threshold = args.threshold.unwrap_or(config.analysis.threshold);
    let origin = match args.origin {
        Some(origin) => origin,
        None => config.analysis.origin()?,
    };

    let pair = load_pair(&dir, &config.data)?;

    let unstable = count_unstable(&pair.walls, &pair.terrain, threshold)?;
    let territory = flood_size(&pair.walls, origin)?;
    info!(unstable, territory, "analysis complete");

    let mut report = AnalysisReport::new(pair.walls.shape(), threshold, origin, unstable, territory);
    if args.sweep {
        report = report.with_sweep(sweep_thresholds(&pair.walls, &pair.terrain)?);
    }

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        for line in report.summary_lines() {
            println!("{}", line);
        }
    }

    if let Some(path) = &args.report {
        report.save_to_file(path)?;
        info!("wrote report to {}", path.display());
    }

    Ok(())
}

fn main() {
    let raw: Vec<String> = env::args().skip(1).collect();
    let args = match parse_args(&raw) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{}", message);
            process::exit(1);
        }
    };

    if args.help {
        println!("{}", USAGE);
        return;
    }

    let (config, source) = match load_config(&args, Path::new(DEFAULT_CONFIG_PATH)) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    init_tracing(&config.logging.filter);
    match source {
        ConfigSource::File(path) => info!("loaded configuration from {}", path.display()),
        ConfigSource::Defaults => info!("no {} found, using default configuration", DEFAULT_CONFIG_PATH),
        ConfigSource::Fallback(e) => warn!("{}; using default configuration", e),
    }

    if let Err(e) = run(args, config) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_all_flags() {
        let args = parse_args(&strings(&[
            "--dir", "data", "--threshold", "2", "--origin", "3,4", "--json", "--sweep",
        ]))
        .unwrap();
        assert_eq!(args.dir, Some(PathBuf::from("data")));
        assert_eq!(args.threshold, Some(2));
        assert_eq!(args.origin, Some(Cell::new(3, 4)));
        assert!(args.json);
        assert!(args.sweep);
        assert!(args.report.is_none());
    }

    #[test]
    fn test_missing_value() {
        let err = parse_args(&strings(&["--threshold"])).unwrap_err();
        assert!(err.contains("requires a value"));
    }

    #[test]
    fn test_bad_origin() {
        let err = parse_args(&strings(&["--origin", "1,2,3"])).unwrap_err();
        assert!(err.starts_with("--origin:"));
    }

    #[test]
    fn test_unknown_flag() {
        assert!(parse_args(&strings(&["--verbose"])).is_err());
    }

    #[test]
    fn test_help_is_not_an_error() {
        let args = parse_args(&strings(&["--dir", "data", "--help"])).unwrap();
        assert!(args.help);
        assert!(parse_args(&strings(&["-h"])).unwrap().help);
        assert!(!parse_args(&[]).unwrap().help);
    }

    #[test]
    fn test_explicit_config_that_cannot_be_read_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let args = Args {
            config: Some(dir.path().join("missing.toml")),
            ..Args::default()
        };
        let result = load_config(&args, &dir.path().join("wallscan.toml"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_explicit_config_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        std::fs::write(&path, "[analysis]\nleak_origin = [2, 3]\n").unwrap();
        let args = Args {
            config: Some(path.clone()),
            ..Args::default()
        };

        let (config, source) = load_config(&args, &dir.path().join("wallscan.toml")).unwrap();
        assert_eq!(config.analysis.origin().unwrap(), Cell::new(2, 3));
        match source {
            ConfigSource::File(loaded) => assert_eq!(loaded, path),
            other => panic!("expected file source, got {:?}", other),
        }
    }

    #[test]
    fn test_absent_default_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let (config, source) = load_config(&Args::default(), &dir.path().join("wallscan.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert!(matches!(source, ConfigSource::Defaults));
    }

    #[test]
    fn test_broken_default_config_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wallscan.toml");
        std::fs::write(&path, "[analysis\nthreshold = ").unwrap();

        assert!(matches!(Config::load_from(&path), Err(ConfigError::Parse { .. })));

        let (config, source) = load_config(&Args::default(), &path).unwrap();
        assert_eq!(config, Config::default());
        assert!(matches!(source, ConfigSource::Fallback(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_broken_file_passed_explicitly_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wallscan.toml");
        std::fs::write(&path, "[analysis]\nthreshold = \"high\"\n").unwrap();
        let args = Args {
            config: Some(path.clone()),
            ..Args::default()
        };
        assert!(matches!(load_config(&args, &path), Err(ConfigError::Parse { .. })));
    }
}
