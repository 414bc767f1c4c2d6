use std::fs;

use anyhow::{Context, Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;

pub const DEFAULT_AUTHOR: &str = "Your Name";

/// Optional user configuration, loaded from `.modkit/config.toml` discovered
/// upward from the current directory, falling back to `~/.modkit/config.toml`.
/// A missing file is not an error.
#[derive(Debug, Default, Deserialize)]
pub struct ModkitConfig {
    pub author: Option<String>,
}

pub fn load() -> Result<ModkitConfig> {
    match locate()? {
        Some(path) => load_from_path(&path),
        None => Ok(ModkitConfig::default()),
    }
}

pub fn load_from_path(path: &Utf8Path) -> Result<ModkitConfig> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading config {}", path))?;
    toml::from_str(&raw).with_context(|| format!("parsing config {}", path))
}

fn locate() -> Result<Option<Utf8PathBuf>> {
    if let Ok(cwd) = std::env::current_dir() {
        if let Ok(mut dir) = Utf8PathBuf::from_path_buf(cwd) {
            loop {
                let candidate = dir.join(".modkit").join("config.toml");
                if candidate.exists() {
                    return Ok(Some(candidate));
                }
                if !dir.pop() {
                    break;
                }
            }
        }
    }

    let home = dirs::home_dir().ok_or_else(|| anyhow!("unable to determine home directory"))?;
    let mut path = home;
    path.push(".modkit");
    path.push("config.toml");
    let path =
        Utf8PathBuf::from_path_buf(path).map_err(|_| anyhow!("config path must be valid UTF-8"))?;
    if path.exists() { Ok(Some(path)) } else { Ok(None) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_author_from_toml() {
        let tmp = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::from_path_buf(tmp.path().join("config.toml")).unwrap();
        fs::write(&path, "author = 'Ada Lovelace'\n").unwrap();

        let config = load_from_path(&path).unwrap();
        assert_eq!(config.author.as_deref(), Some("Ada Lovelace"));
    }

    #[test]
    fn empty_config_has_no_author() {
        let tmp = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::from_path_buf(tmp.path().join("config.toml")).unwrap();
        fs::write(&path, "").unwrap();

        let config = load_from_path(&path).unwrap();
        assert!(config.author.is_none());
    }

    #[test]
    fn malformed_config_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::from_path_buf(tmp.path().join("config.toml")).unwrap();
        fs::write(&path, "author = [not toml").unwrap();

        assert!(load_from_path(&path).is_err());
    }
}
