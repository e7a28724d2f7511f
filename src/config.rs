use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use serde::Deserialize;

/// Command-line interface.
///
/// `--directory` is the only flag; the listen address and the optional
/// config file come from the environment.
#[derive(Debug, Parser)]
#[command(name = "rshttpd", about = "Minimal HTTP/1.1 file server", version)]
pub struct Cli {
    /// Root directory for the /files/ endpoints
    #[arg(long, value_name = "PATH", env = "RSHTTPD_DIRECTORY")]
    pub directory: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub files: FilesConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the listener binds, e.g. "0.0.0.0:4221".
    pub listen_addr: String,
    /// Accept backlog handed to listen(2).
    pub backlog: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FilesConfig {
    /// Root directory served by the /files/ endpoints.
    pub directory: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            files: FilesConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:4221".to_string(),
            backlog: 128,
        }
    }
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Loads configuration in precedence order: defaults, then the YAML
    /// file named by `RSHTTPD_CONFIG`, then the `LISTEN` environment
    /// variable, then CLI flags.
    pub fn load(cli: Cli) -> anyhow::Result<Self> {
        let mut cfg = match std::env::var("RSHTTPD_CONFIG") {
            Ok(path) => {
                let raw = std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read config file {path}"))?;
                serde_yaml::from_str(&raw)
                    .with_context(|| format!("failed to parse config file {path}"))?
            }
            Err(_) => Config::default(),
        };

        if let Ok(addr) = std::env::var("LISTEN") {
            cfg.server.listen_addr = addr;
        }
        if let Some(dir) = cli.directory {
            cfg.files.directory = dir;
        }

        Ok(cfg)
    }
}
