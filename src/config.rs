//! Site configuration module.
//!
//! Two kinds of configuration reach the pipeline:
//!
//! - [`PipelineConfig`]: where to read and write. Built once at startup from
//!   CLI flags and passed into [`crate::pipeline::build`]; nothing reads paths
//!   from process-wide state.
//! - [`SiteConfig`]: presentation settings loaded from an optional
//!   `config.toml` in the data directory.
//!
//! ## Config File Location
//!
//! ```text
//! data/
//! ├── config.toml     # Optional, overrides stock defaults
//! ├── index.json
//! ├── html.json
//! └── css.json
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! index_file = "index.json"  # Index document, relative to the data directory
//!
//! [site]
//! title = "Quizzes"
//! lang = "en"
//! intro = ""                 # Paragraph under the index heading (omitted when empty)
//!
//! [labels]
//! correct = "(Correct)"
//! no_answers = "No answers available."
//! back = "All quizzes"
//!
//! [answers]
//! mark_correct = true        # Append the correct label to correct answers
//!
//! [colors.light]
//! background = "#ffffff"
//! text = "#111111"
//! text_muted = "#666666"
//! border = "#e0e0e0"
//! link = "#333333"
//! correct = "#1a7f37"
//!
//! [colors.dark]
//! background = "#0a0a0a"
//! text = "#eeeeee"
//! text_muted = "#999999"
//! border = "#333333"
//! link = "#cccccc"
//! correct = "#3fb950"
//! ```
//!
//! Config files are sparse: override just the values you want. Unknown keys
//! are rejected to catch typos early.

use crate::fs::{Filesystem, FsError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config: {0}")]
    Fs(#[from] FsError),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

// =============================================================================
// Pipeline paths
// =============================================================================

/// Input and output locations for one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// The index document listing every quiz.
    pub index_path: PathBuf,
    /// Directory that `file` fields in the index are resolved against.
    pub data_root: PathBuf,
    /// Directory the generated site is written to.
    pub output_root: PathBuf,
}

impl PipelineConfig {
    pub fn new(data_root: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Self {
        let data_root = data_root.into();
        Self {
            index_path: data_root.join(default_index_file()),
            data_root,
            output_root: output_root.into(),
        }
    }

    /// Point the index at `index_file` inside the data root.
    pub fn with_index_file(mut self, index_file: &str) -> Self {
        self.index_path = self.data_root.join(index_file);
        self
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::new("data", "dist")
    }
}

// =============================================================================
// Site config
// =============================================================================

/// Site configuration loaded from `config.toml`.
///
/// All fields have defaults. User config files need only specify the values
/// they want to override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Index document name, relative to the data directory.
    #[serde(default = "default_index_file")]
    pub index_file: String,
    /// Page metadata and index heading.
    pub site: SiteMeta,
    /// Fixed strings rendered into pages.
    pub labels: Labels,
    /// How answers are presented.
    pub answers: AnswersConfig,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
}

fn default_index_file() -> String {
    "index.json".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            index_file: default_index_file(),
            site: SiteMeta::default(),
            labels: Labels::default(),
            answers: AnswersConfig::default(),
            colors: ColorConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.index_file.trim().is_empty() {
            return Err(ConfigError::Validation(
                "index_file must not be empty".into(),
            ));
        }
        if !self.index_file.ends_with(".json") {
            return Err(ConfigError::Validation(
                "index_file must end in .json".into(),
            ));
        }
        if self.site.title.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site.title must not be empty".into(),
            ));
        }
        if self.site.lang.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site.lang must not be empty".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteMeta {
    /// `<title>` and `<h1>` of the index page.
    pub title: String,
    /// `lang` attribute of every generated page.
    pub lang: String,
    /// Optional paragraph under the index heading. Empty means none.
    pub intro: String,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: "Quizzes".to_string(),
            lang: "en".to_string(),
            intro: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Labels {
    /// Appended to correct answers when `answers.mark_correct` is on.
    pub correct: String,
    /// Shown in place of the answer list for questions with no valid answers.
    pub no_answers: String,
    /// Text of the link from a quiz page back to the index.
    pub back: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            correct: "(Correct)".to_string(),
            no_answers: "No answers available.".to_string(),
            back: "All quizzes".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnswersConfig {
    pub mark_correct: bool,
}

impl Default for AnswersConfig {
    fn default() -> Self {
        Self { mark_correct: true }
    }
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub light: ColorScheme,
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    pub background: String,
    pub text: String,
    /// Breadcrumbs and the no-answers placeholder.
    pub text_muted: String,
    pub border: String,
    pub link: String,
    /// Highlight for correct answers.
    pub correct: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            text: "#111111".to_string(),
            text_muted: "#666666".to_string(),
            border: "#e0e0e0".to_string(),
            link: "#333333".to_string(),
            correct: "#1a7f37".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#0a0a0a".to_string(),
            text: "#eeeeee".to_string(),
            text_muted: "#999999".to_string(),
            border: "#333333".to_string(),
            link: "#cccccc".to_string(),
            correct: "#3fb950".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(SiteConfig::default())?)
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the directory has no `config.toml`.
pub fn load_raw_config(
    fs: &impl Filesystem,
    dir: &Path,
) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join("config.toml");
    if !fs.exists(&config_path) {
        return Ok(None);
    }
    let content = fs.read_text(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory, on top of stock defaults.
pub fn load_config(fs: &impl Filesystem, dir: &Path) -> Result<SiteConfig, ConfigError> {
    resolve_config(stock_defaults_value()?, load_raw_config(fs, dir)?)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Quiz Site Configuration
# =======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Place this file in the data
# directory next to index.json. Unknown keys will cause an error.

# Index document listing every quiz, relative to the data directory.
index_file = "index.json"

# ---------------------------------------------------------------------------
# Site
# ---------------------------------------------------------------------------
[site]
# Title and heading of the index page.
title = "Quizzes"

# Value of the lang attribute on every page.
lang = "en"

# Paragraph shown under the index heading. Leave empty for none.
intro = ""

# ---------------------------------------------------------------------------
# Labels
# ---------------------------------------------------------------------------
[labels]
# Appended to correct answers (see answers.mark_correct).
correct = "(Correct)"

# Shown for a question that has no valid answers.
no_answers = "No answers available."

# Link text from a quiz page back to the index.
back = "All quizzes"

# ---------------------------------------------------------------------------
# Answers
# ---------------------------------------------------------------------------
[answers]
# Reveal which answers are correct.
mark_correct = true

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#ffffff"
text = "#111111"
text_muted = "#666666"    # Breadcrumbs, placeholders
border = "#e0e0e0"
link = "#333333"
correct = "#1a7f37"

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#0a0a0a"
text = "#eeeeee"
text_muted = "#999999"
border = "#333333"
link = "#cccccc"
correct = "#3fb950"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-bg: {light_bg};
    --color-text: {light_text};
    --color-text-muted: {light_text_muted};
    --color-border: {light_border};
    --color-link: {light_link};
    --color-correct: {light_correct};
}}

@media (prefers-color-scheme: dark) {{
    :root {{
        --color-bg: {dark_bg};
        --color-text: {dark_text};
        --color-text-muted: {dark_text_muted};
        --color-border: {dark_border};
        --color-link: {dark_link};
        --color-correct: {dark_correct};
    }}
}}"#,
        light_bg = colors.light.background,
        light_text = colors.light.text,
        light_text_muted = colors.light.text_muted,
        light_border = colors.light.border,
        light_link = colors.light.link,
        light_correct = colors.light.correct,
        dark_bg = colors.dark.background,
        dark_text = colors.dark.text,
        dark_text_muted = colors.dark.text_muted,
        dark_border = colors.dark.border,
        dark_link = colors.dark.link,
        dark_correct = colors.dark.correct,
    )
}
