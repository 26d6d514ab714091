use std::io;
use std::path::Path;
use std::path::PathBuf;

use dirs::home_dir;

const HOME_ENV_VAR: &str = "NLSH_HOME";
const DEFAULT_DIR_NAME: &str = ".nlsh";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Directory holding nlsh's `config.toml`.
///
/// `NLSH_HOME` wins when set and must name an existing directory; the
/// returned path is canonicalized. Otherwise this is `~/.nlsh`, which is
/// not required to exist.
pub fn find_nlsh_home() -> io::Result<PathBuf> {
    let from_env = std::env::var(HOME_ENV_VAR)
        .ok()
        .filter(|value| !value.is_empty());
    match from_env {
        Some(value) => existing_dir(&value),
        None => default_home(),
    }
}

/// Location of the config file inside `home`.
pub fn config_file(home: &Path) -> PathBuf {
    home.join(CONFIG_FILE_NAME)
}

fn existing_dir(value: &str) -> io::Result<PathBuf> {
    let path = PathBuf::from(value);
    let metadata = std::fs::metadata(&path).map_err(|err| {
        let message = if err.kind() == io::ErrorKind::NotFound {
            format!("{HOME_ENV_VAR} is set to {value:?}, which does not exist")
        } else {
            format!("cannot read {HOME_ENV_VAR} {value:?}: {err}")
        };
        io::Error::new(err.kind(), message)
    })?;

    if !metadata.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{HOME_ENV_VAR} is set to {value:?}, which is not a directory"),
        ));
    }

    path.canonicalize().map_err(|err| {
        io::Error::new(
            err.kind(),
            format!("cannot canonicalize {HOME_ENV_VAR} {value:?}: {err}"),
        )
    })
}

fn default_home() -> io::Result<PathBuf> {
    home_dir()
        .map(|home| home.join(DEFAULT_DIR_NAME))
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "could not find home directory"))
}
