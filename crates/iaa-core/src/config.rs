//! Workbook layout and run configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Where scores live on a team sheet and which texts mark pass and fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetLayout {
    /// Only sheets whose name starts with this prefix are team sheets.
    pub sheet_prefix: String,
    /// Leading rows skipped on every team sheet.
    pub header_rows: usize,
    /// Zero-based column holding the question id.
    pub qid_column: usize,
    /// Zero-based column holding the pass indicator text.
    pub pass_column: usize,
    /// Zero-based column holding the fail indicator text.
    pub fail_column: usize,
    /// Zero-based column holding the optional numeric score.
    pub score_column: usize,
    /// Text the pass indicator cell must equal verbatim.
    pub pass_marker: String,
    /// Text the fail indicator cell must equal verbatim.
    pub fail_marker: String,
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            sheet_prefix: "Team".to_string(),
            header_rows: 1,
            qid_column: 0,
            pass_column: 3,
            fail_column: 4,
            score_column: 5,
            pass_marker: "Pass (1)".to_string(),
            fail_marker: "Fail (0)".to_string(),
        }
    }
}

impl SheetLayout {
    pub fn is_team_sheet(&self, sheet_name: &str) -> bool {
        sheet_name.starts_with(&self.sheet_prefix)
    }
}

/// The two annotators being compared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotatorsConfig {
    pub first_path: PathBuf,
    pub second_path: PathBuf,
    pub first_label: String,
    pub second_label: String,
}

impl Default for AnnotatorsConfig {
    fn default() -> Self {
        Self {
            first_path: PathBuf::from("eval/first.xlsx"),
            second_path: PathBuf::from("eval/second.xlsx"),
            first_label: "A".to_string(),
            second_label: "B".to_string(),
        }
    }
}

/// Top-level iaa configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IaaConfig {
    #[serde(default)]
    pub layout: SheetLayout,
    #[serde(default)]
    pub annotators: AnnotatorsConfig,
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `path`, which must exist when given
/// 2. `iaa.toml` in the current directory
/// 3. `~/.config/iaa/config.toml`
///
/// Environment variable overrides: `IAA_FIRST`, `IAA_SECOND`.
pub fn load_config_from(path: Option<&Path>) -> Result<IaaConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("iaa.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => IaaConfig::default(),
    };

    if let Ok(first) = std::env::var("IAA_FIRST") {
        config.annotators.first_path = PathBuf::from(first);
    }
    if let Ok(second) = std::env::var("IAA_SECOND") {
        config.annotators.second_path = PathBuf::from(second);
    }

    Ok(config)
}

/// Parse a TOML configuration string.
pub fn parse_config(content: &str) -> Result<IaaConfig> {
    let config: IaaConfig = toml::from_str(content)?;
    anyhow::ensure!(
        !config.layout.pass_marker.is_empty() && !config.layout.fail_marker.is_empty(),
        "pass and fail markers must not be empty"
    );
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("iaa"))
}
