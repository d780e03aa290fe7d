use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::de::DeserializeOwned;
use toml::{map::Map, Value};

pub fn workspace_dir() -> anyhow::Result<PathBuf> {
    let output = std::process::Command::new(env!("CARGO"))
        .arg("locate-project")
        .arg("--workspace")
        .arg("--message-format=plain")
        .output()
        .context("failed to run cargo locate-project")?
        .stdout;
    let cargo_path = Path::new(std::str::from_utf8(&output)?.trim());
    cargo_path
        .parent()
        .map(Path::to_path_buf)
        .context("Cargo.toml has no parent directory")
}

/// Reads a TOML file relative to `dir` into `T`.
pub fn load_toml<T: DeserializeOwned>(
    dir: &Path,
    file_name: &str,
) -> anyhow::Result<T> {
    let path = dir.join(file_name);
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    toml::from_str::<T>(&contents)
        .with_context(|| format!("failed to parse {}", path.display()))
}

pub fn load_config<T: DeserializeOwned>(
    config_name: &str,
) -> anyhow::Result<T> {
    load_toml(&workspace_dir()?, config_name)
}

pub fn load_env() -> anyhow::Result<Map<String, Value>> {
    load_toml(&workspace_dir()?, "Secrets.dev.toml")
}

#[cfg(test)]
mod test {
    use std::fs;

    use serde::Deserialize;
    use tempfile::TempDir;

    use super::*;

    #[derive(Deserialize, Debug, PartialEq)]
    struct Server {
        port: u16,
    }

    #[derive(Deserialize, Debug, PartialEq)]
    struct Config {
        server: Server,
    }

    #[test]
    fn loads_typed_toml() {
        // Arrange
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Config.toml"), "[server]\nport = 8000\n")
            .unwrap();

        // Act
        let config = load_toml::<Config>(dir.path(), "Config.toml");

        // Assert
        assert_eq!(
            config.unwrap(),
            Config {
                server: Server { port: 8000 }
            }
        );
    }

    #[test]
    fn reports_missing_file() {
        let dir = TempDir::new().unwrap();

        let error =
            load_toml::<Config>(dir.path(), "Missing.toml").unwrap_err();

        assert!(error.to_string().contains("failed to read"));
    }

    #[test]
    fn finds_workspace_root() {
        let dir = workspace_dir().unwrap();

        assert!(dir.join("Cargo.toml").exists());
    }
}
