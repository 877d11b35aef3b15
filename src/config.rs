// Configuration file handling

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory the artifacts are written to.
    /// Defaults to the directory of the reporter executable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,

    /// File name of the JSON summary
    #[serde(default = "default_json_file")]
    pub json_file: String,

    /// File name of the HTML report
    #[serde(default = "default_html_file")]
    pub html_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: None,
            json_file: default_json_file(),
            html_file: default_html_file(),
        }
    }
}

// Default values
pub const CONFIG_FILE_NAME: &str = ".testsummaryrc";

pub fn default_json_file() -> String {
    String::from("test-summary.json")
}

pub fn default_html_file() -> String {
    String::from("report.html")
}

/// Directory containing the running executable, or `.` if it cannot be
/// determined.
pub fn default_output_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

impl OutputConfig {
    /// Effective output directory
    pub fn resolve_dir(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(default_output_dir)
    }

    pub fn json_path(&self) -> PathBuf {
        self.resolve_dir().join(&self.json_file)
    }

    pub fn html_path(&self) -> PathBuf {
        self.resolve_dir().join(&self.html_file)
    }
}

impl Config {
    /// Load configuration from default locations
    pub fn load() -> Option<Self> {
        // Check locations in order:
        // 1. .testsummaryrc (current directory)
        // 2. ~/.testsummaryrc (home directory)
        // 3. .testsummaryrc.toml (current directory)
        // 4. ~/.testsummaryrc.toml (home directory)

        let cwd = std::env::current_dir().ok()?;
        let home = dirs::home_dir()?;
        let toml_name = format!("{}.toml", CONFIG_FILE_NAME);

        let paths = [
            cwd.join(CONFIG_FILE_NAME),
            home.join(CONFIG_FILE_NAME),
            cwd.join(&toml_name),
            home.join(&toml_name),
        ];

        for path in &paths {
            if path.exists() {
                return Self::load_from_file(path);
            }
        }

        None
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        match toml::from_str(&content) {
            Ok(config) => Some(config),
            Err(e) => {
                warn!("Ignoring invalid config file {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Parse configuration from TOML string
    pub fn parse(content: &str) -> Option<Self> {
        toml::from_str(content).ok()
    }

    /// Render configuration as TOML
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_else(|_| String::new())
    }
}
