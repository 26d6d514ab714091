use std::io;
use std::path::Path;
use std::path::PathBuf;

use nlsh_commands::ShellSettings;
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("PORT must be a port number, got {value:?}")]
    InvalidPortEnv { value: String },
}

/// Contents of `config.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NlshConfig {
    pub shell: ShellToml,
    pub http: HttpToml,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShellToml {
    pub natural_language: Option<bool>,
    pub confirm_recursive_remove: Option<bool>,
    pub process_limit: Option<usize>,
    pub max_suggestions: Option<usize>,
    pub history_size: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HttpToml {
    pub host: Option<String>,
    pub port: Option<u16>,
}

impl NlshConfig {
    /// Loads `config.toml` from `home`; a missing file yields the defaults.
    pub fn load(home: &Path) -> Result<Self, ConfigError> {
        let path = nlsh_utils_home_dir::config_file(home);
        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file; using defaults");
                return Ok(Self::default());
            }
            Err(source) => return Err(ConfigError::Read { path, source }),
        };
        toml::from_str(&contents).map_err(|source| ConfigError::Parse { path, source })
    }

    /// Applies the `[shell]` table on top of the built-in defaults.
    pub fn shell_settings(&self, natural_language_flag: bool) -> ShellSettings {
        let defaults = ShellSettings::default();
        let shell = &self.shell;
        ShellSettings {
            natural_language: natural_language_flag
                && shell.natural_language.unwrap_or(defaults.natural_language),
            confirm_recursive_remove: shell
                .confirm_recursive_remove
                .unwrap_or(defaults.confirm_recursive_remove),
            process_limit: shell.process_limit.unwrap_or(defaults.process_limit),
            max_suggestions: shell.max_suggestions.unwrap_or(defaults.max_suggestions),
            history_size: shell.history_size.unwrap_or(defaults.history_size),
        }
    }

    /// Bind address for `serve`: flags beat `PORT`, which beats the file.
    pub fn http_address(
        &self,
        host_flag: Option<&str>,
        port_flag: Option<u16>,
        port_env: Option<&str>,
    ) -> Result<(String, u16), ConfigError> {
        let host = host_flag
            .or(self.http.host.as_deref())
            .unwrap_or(DEFAULT_HOST)
            .to_string();

        let env_port = match port_env.map(str::trim).filter(|value| !value.is_empty()) {
            Some(value) => Some(value.parse::<u16>().map_err(|_| {
                ConfigError::InvalidPortEnv {
                    value: value.to_string(),
                }
            })?),
            None => None,
        };
        let port = port_flag
            .or(env_port)
            .or(self.http.port)
            .unwrap_or(DEFAULT_PORT);
        Ok((host, port))
    }
}
