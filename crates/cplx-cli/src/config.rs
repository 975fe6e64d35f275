//! Configuration loading from TOML files.
//!
//! Lookup order:
//! 1. `$CPLX_CONFIG` environment variable
//! 2. `~/.config/cplx/config.toml`
//! 3. Built-in defaults (everything is optional)

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
    pub batch: BatchConfig,
}

/// How results are printed.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Decimal places. Unset prints the shortest exact form.
    pub precision: Option<usize>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// `cplx batch` settings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Stop reading input after the first error response.
    pub fail_fast: bool,
}

/// Load config from disk. Returns defaults if no config file exists.
pub fn load_config() -> Result<Config> {
    match config_path() {
        Some(p) if p.exists() => load_config_from(&p),
        _ => Ok(Config::default()),
    }
}

pub fn load_config_from(path: &Path) -> Result<Config> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))
}

fn config_path() -> Option<PathBuf> {
    resolve_config_path(std::env::var_os("CPLX_CONFIG"), std::env::var_os("HOME"))
}

/// `$CPLX_CONFIG` is taken as given, even when the file does not exist.
fn resolve_config_path(explicit: Option<OsString>, home: Option<OsString>) -> Option<PathBuf> {
    explicit
        .map(PathBuf::from)
        .or_else(|| home.map(|h| Path::new(&h).join(".config/cplx/config.toml")))
}

/// One-line description of where settings come from, for `cplx config`.
pub fn describe_config_source() -> String {
    match config_path() {
        Some(p) if p.exists() => format!("{} (loaded)", p.display()),
        Some(p) => format!("{} (missing, built-in defaults)", p.display()),
        None => "built-in defaults (neither $CPLX_CONFIG nor $HOME is set)".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.output.precision.is_none());
        assert!(!config.batch.fail_fast);
    }

    #[test]
    fn test_parse_minimal_toml() {
        let toml_str = r#"
[output]
precision = 4
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output.precision, Some(4));
        // Other fields should be defaults
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(!config.batch.fail_fast);
    }

    #[test]
    fn test_parse_full_toml() {
        let toml_str = r#"
[output]
format = "json"
precision = 2

[batch]
fail_fast = true
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.precision, Some(2));
        assert!(config.batch.fail_fast);
    }

    #[test]
    fn test_parse_rejects_unknown_format() {
        let toml_str = r#"
[output]
format = "xml"
"#;
        assert!(toml::from_str::<Config>(toml_str).is_err());
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[batch]\nfail_fast = true").unwrap();
        let config = load_config_from(file.path()).unwrap();
        assert!(config.batch.fail_fast);
    }

    #[test]
    fn test_load_config_from_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[output\nformat = ").unwrap();
        let err = load_config_from(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("parsing "));
    }

    #[test]
    fn test_resolve_config_path() {
        let explicit = resolve_config_path(Some("/etc/cplx.toml".into()), Some("/home/u".into()));
        assert_eq!(explicit, Some(PathBuf::from("/etc/cplx.toml")));

        let home = resolve_config_path(None, Some("/home/u".into()));
        assert_eq!(home, Some(PathBuf::from("/home/u/.config/cplx/config.toml")));

        assert_eq!(resolve_config_path(None, None), None);
    }
}
