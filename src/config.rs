use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "ticklist";

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("~/.local/share"))
        .join(APP_NAME)
}

fn default_listen() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 3000))
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct ListConfig {
    /// Directory holding `todos.json` and `names.json`.
    pub data_directory: PathBuf,
    /// Address the server binds to.
    pub listen: SocketAddr,
    /// Front-end assets served for any path no route claims.
    pub static_directory: Option<PathBuf>,
    /// Base URL the list view talks to.
    pub server_url: String,
    pub debug_logging: bool,
}

impl Default for ListConfig {
    fn default() -> Self {
        let listen = default_listen();
        Self {
            data_directory: default_data_dir(),
            listen,
            static_directory: None,
            server_url: format!("http://{}", listen),
            debug_logging: false,
        }
    }
}

impl ListConfig {
    /// `~/.config/ticklist/config.toml` on Linux.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_NAME).join("config.toml"))
    }

    /// Load from `path`, or from [`Self::default_path`]. A missing file at the
    /// default location yields the defaults; an explicitly named one must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_from(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn todos_path(&self) -> PathBuf {
        self.data_directory.join("todos.json")
    }

    pub fn names_path(&self) -> PathBuf {
        self.data_directory.join("names.json")
    }

    /// Ensure the data directory exists and seed missing list files with `[]`.
    pub fn ensure_files(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.data_directory)?;

        for path in [self.todos_path(), self.names_path()] {
            if !path.exists() {
                std::fs::write(&path, "[]")?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "listen = \"0.0.0.0:8080\"\ndebug_logging = true\n").unwrap();

        let config = ListConfig::load(Some(&path)).unwrap();
        assert_eq!(config.listen, "0.0.0.0:8080".parse().unwrap());
        assert!(config.debug_logging);
        assert_eq!(config.data_directory, ListConfig::default().data_directory);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ListConfig::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn bad_toml_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "listen = 12").unwrap();
        assert!(matches!(ListConfig::load_from(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn ensure_files_seeds_empty_arrays_once() {
        let dir = tempfile::tempdir().unwrap();
        let config = ListConfig {
            data_directory: dir.path().join("data"),
            ..ListConfig::default()
        };
        config.ensure_files().unwrap();
        assert_eq!(std::fs::read_to_string(config.todos_path()).unwrap(), "[]");
        assert_eq!(std::fs::read_to_string(config.names_path()).unwrap(), "[]");

        std::fs::write(config.todos_path(), "[{\"kept\":true}]").unwrap();
        config.ensure_files().unwrap();
        assert_eq!(
            std::fs::read_to_string(config.todos_path()).unwrap(),
            "[{\"kept\":true}]"
        );
    }
}
