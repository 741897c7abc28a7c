//! Configuration loading and management.
//!
//! The generator is configured by a TOML file (default `lintdoc.toml` in the
//! current working directory) plus one-way CLI overrides applied in `main`.
//!
//! ```toml
//! [dirs]
//! output = "wiki"
//! examples = "examples"
//! explanations = "explanations"
//!
//! [render]
//! front_matter = true
//! pygments = true
//! ```

use std::path::{Path, PathBuf};

/// Main configuration for page generation.
///
/// All fields carry defaults so the config file can be omitted entirely.
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Config {
    /// Source and output directory layout.
    pub dirs: DirsConfig,
    /// Page shape options.
    pub render: RenderConfig,
}

/// Directory layout consumed and produced by the generator.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct DirsConfig {
    /// Where rendered pages are written.
    pub output: PathBuf,
    /// Root of the example snippet tree (package-path layout).
    pub examples: PathBuf,
    /// Root of the sidecar explanation files.
    pub explanations: PathBuf,
}

impl Default for DirsConfig {
    fn default() -> Self {
        DirsConfig {
            output: PathBuf::from("wiki"),
            examples: PathBuf::from("examples"),
            explanations: PathBuf::from("explanations"),
        }
    }
}

/// Page shape options; each maps to one CLI flag.
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Emit a structured front-matter header instead of a plain heading.
    pub front_matter: bool,
    /// Use highlighter directives instead of GFM code fences.
    pub pygments: bool,
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// Resolution order:
    /// 1. If `path` is `Some`, load from that file (error if missing).
    /// 2. If `path` is `None`, try `lintdoc.toml` in the current directory.
    /// 3. If that file does not exist either, return [`Config::default()`].
    ///
    /// # Errors
    ///
    /// Returns `Err(String)` when the explicit path does not exist, the file
    /// cannot be read, or the TOML content fails to parse.
    pub fn load(path: Option<&Path>) -> Result<Config, String> {
        let config_path = if let Some(p) = path {
            if p.exists() {
                Some(p.to_path_buf())
            } else {
                return Err(format!("Config file not found: {}", p.display()));
            }
        } else {
            let default_path = Path::new("lintdoc.toml");
            if default_path.exists() {
                Some(default_path.to_path_buf())
            } else {
                None
            }
        };

        match config_path {
            Some(path) => {
                let content = std::fs::read_to_string(&path)
                    .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
                let config: Config = toml::from_str(&content)
                    .map_err(|e| format!("Failed to parse config {}: {}", path.display(), e))?;
                Ok(config)
            }
            None => Ok(Config::default()),
        }
    }
}
