//! Configuration options.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::debug;
use serde::Deserialize;

use crate::errors::ConfigError;

const DEFAULT_UNIT: &'static str = "km";
const DEFAULT_CONFIG_FILE_NAME: &'static str = ".citynav";

/// Front end options, as read from a config file.
#[derive(Clone, Default, PartialEq, Eq, Debug, Deserialize)]
pub struct Opts {
    /// Distance unit label used in reports. If `None`, "km" is used.
    #[serde(rename = "unit")]
    pub unit: Option<String>,

    /// Pause between printed route legs, in milliseconds.
    #[serde(rename = "playbackDelayMs")]
    pub playback_delay_ms: Option<u64>,

    /// Print route results as JSON.
    #[serde(rename = "json", default)]
    pub json: bool,
}

/// Effective front end settings.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Settings {
    pub unit: String,
    pub playback_delay: Duration,
    pub json: bool,
    pub used_config_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Opts::default().into_settings(None)
    }
}

impl Opts {
    /// Load settings from `config_file`, which must exist if given.
    /// Otherwise `~/.citynav` is read if present, defaults are used if not.
    pub fn load(config_file: Option<&Path>) -> Result<Settings, ConfigError> {
        if let Some(path) = config_file {
            let opts = Self::read_config_file(path)?;
            debug!("Read config file [{}]", path.display());
            return Ok(opts.into_settings(Some(path.to_path_buf())));
        }

        if let Some(path) = Self::default_config_file_location() {
            if let Some(opts) = Self::read_optional_config_file(&path)? {
                debug!("Read config file [{}]", path.display());
                return Ok(opts.into_settings(Some(path)));
            }
            debug!("No config file at [{}], using defaults", path.display());
        }

        Ok(Opts::default().into_settings(None))
    }

    fn into_settings(self, conf_file: Option<PathBuf>) -> Settings {
        Settings {
            unit: self.unit.unwrap_or_else(|| DEFAULT_UNIT.to_string()),
            playback_delay: Duration::from_millis(self.playback_delay_ms.unwrap_or(0)),
            json: self.json,
            used_config_file: conf_file,
        }
    }

    fn default_config_file_location() -> Option<PathBuf> {
        let mut path = dirs::home_dir()?;
        path.push(DEFAULT_CONFIG_FILE_NAME);
        Some(path)
    }

    fn parse_config(json: &[u8]) -> Result<Self, ConfigError> {
        serde_json::from_slice(json).map_err(|e| ConfigError::BadConfigFile(e))
    }

    fn read_config_file(file_path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read(file_path).map_err(|e| ConfigError::ConfigFileRead(e))?;
        Self::parse_config(&json)
    }

    fn read_optional_config_file(file_path: &Path) -> Result<Option<Self>, ConfigError> {
        match Self::read_config_file(file_path) {
            Ok(conf) => Ok(Some(conf)),
            Err(ConfigError::ConfigFileRead(err)) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }
}

#[test]
fn test_into_settings() {
    assert_eq!(
        Opts::default().into_settings(None),
        Settings {
            unit: "km".to_string(),
            playback_delay: Duration::from_millis(0),
            json: false,
            used_config_file: None,
        }
    );

    assert_eq!(
        Opts {
            unit: Some("mi".to_string()),
            playback_delay_ms: Some(250),
            json: true,
        }
        .into_settings(Some(PathBuf::from("/etc/citynav.json"))),
        Settings {
            unit: "mi".to_string(),
            playback_delay: Duration::from_millis(250),
            json: true,
            used_config_file: Some(PathBuf::from("/etc/citynav.json")),
        }
    );

    assert_eq!(Settings::default().unit, "km");
}

#[test]
fn test_parse_config() {
    let c = |json: &str| -> Opts { Opts::parse_config(json.as_bytes()).expect("bad test config") };

    assert_eq!(c(r#"{}"#), Opts::default());

    assert_eq!(c(r#"{ "unknown": "foo" }"#), Opts::default());

    assert_eq!(
        c(r#"{ "unit": "mi" }"#),
        Opts {
            unit: Some("mi".to_string()),
            ..Opts::default()
        }
    );

    assert_eq!(
        c(r#"{ "unit": "km", "playbackDelayMs": 20, "json": true }"#),
        Opts {
            unit: Some("km".to_string()),
            playback_delay_ms: Some(20),
            json: true,
        }
    );

    assert!(matches!(Opts::parse_config(b"not json"), Err(ConfigError::BadConfigFile(_))));
    assert!(matches!(Opts::parse_config(br#"{ "playbackDelayMs": -1 }"#), Err(ConfigError::BadConfigFile(_))));
}

#[test]
fn test_read_config_file() {
    let dir = std::env::temp_dir().join(format!("citynav-config-test-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("create temp dir");

    let missing = dir.join("missing.json");
    assert!(matches!(Opts::read_optional_config_file(&missing), Ok(None)));
    assert!(matches!(Opts::load(Some(missing.as_path())), Err(ConfigError::ConfigFileRead(_))));

    let present = dir.join("present.json");
    fs::write(&present, r#"{ "unit": "mi" }"#).expect("write temp config");
    let settings = Opts::load(Some(present.as_path())).expect("load config");
    assert_eq!(settings.unit, "mi");
    assert_eq!(settings.used_config_file, Some(present.clone()));

    let broken = dir.join("broken.json");
    fs::write(&broken, "{").expect("write temp config");
    assert!(matches!(Opts::read_optional_config_file(&broken), Err(ConfigError::BadConfigFile(_))));

    let _ = fs::remove_dir_all(&dir);
}
