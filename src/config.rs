//! Startup configuration.
//!
//! The listen port comes from the first command-line argument, the serving
//! root from `BATTERY_BEACON_ROOT`, and an optional YAML file named by
//! `BATTERY_BEACON_CONFIG` can override the root and the collector command.

use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Loopback only; the server is not meant to be reachable from other hosts.
pub const LISTEN_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

pub const ROOT_ENV: &str = "BATTERY_BEACON_ROOT";
pub const CONFIG_ENV: &str = "BATTERY_BEACON_CONFIG";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Directory static paths are resolved against.
    pub root: PathBuf,
    pub collector: CollectorConfig,
}

/// How to invoke the power utility.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CollectorConfig {
    pub program: String,
    pub args: Vec<String>,
    /// Substrings selecting which output lines are kept. Empty keeps all lines.
    pub fields: Vec<String>,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            program: "upower".to_string(),
            args: vec![
                "-i".to_string(),
                "/org/freedesktop/UPower/devices/battery_BAT0".to_string(),
            ],
            fields: ["state", "time to empty", "to full", "percentage"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

/// Contents of the optional YAML file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub root: Option<PathBuf>,
    pub collector: CollectorConfig,
}

impl FileConfig {
    pub fn from_yaml(text: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(text).context("invalid configuration")
    }

    pub fn read(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml(&text).with_context(|| format!("in config file {}", path.display()))
    }
}

impl Config {
    /// Builds the configuration from the process arguments and environment.
    pub fn load() -> anyhow::Result<Self> {
        let root = std::env::var_os(ROOT_ENV).map(PathBuf::from);
        let file = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        Self::resolve(std::env::args().skip(1), root, file.as_deref())
    }

    /// Root precedence: explicit root, then the config file's root, then the current directory.
    pub fn resolve<I, S>(
        args: I,
        root: Option<PathBuf>,
        config_file: Option<&Path>,
    ) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let port = Self::port_from_args(args);

        let file = match config_file {
            Some(path) => FileConfig::read(path)?,
            None => FileConfig::default(),
        };

        let root = match root.or(file.root) {
            Some(root) => root,
            None => std::env::current_dir().context("failed to determine current directory")?,
        };

        Ok(Self {
            port,
            root,
            collector: file.collector,
        })
    }

    /// First positional argument as a port. Anything unusable falls back to [`DEFAULT_PORT`].
    ///
    /// # Example
    ///
    /// ```
    /// # use battery_beacon::config::Config;
    /// assert_eq!(Config::port_from_args(["9000"]), 9000);
    /// assert_eq!(Config::port_from_args(["nine"]), 8080);
    /// assert_eq!(Config::port_from_args(Vec::<String>::new()), 8080);
    /// ```
    pub fn port_from_args<I, S>(args: I) -> u16
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        args.into_iter()
            .next()
            .and_then(|arg| arg.as_ref().trim().parse().ok())
            .unwrap_or(DEFAULT_PORT)
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", LISTEN_HOST, self.port)
    }
}
