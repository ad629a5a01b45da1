//! Styling configuration: content patterns scanned for class usage and the
//! named color palettes exposed to the stylesheets as CSS custom properties.
//!
//! The shipped configuration lives in `assets/theme/theme.json` and is
//! embedded at compile time. Shapes:
//! ```text
//! {
//!   "content": ["src/**/*.rs", ...],          // globs, relative to the crate root
//!   "colors": { "brand": { "50": "#f4f7ff", ... } }
//! }
//! ```

use std::collections::BTreeMap;
#[cfg(not(target_arch = "wasm32"))]
use std::collections::BTreeSet;
#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const THEME_JSON: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/theme.json"
));

static EMBEDDED: Lazy<ThemeConfig> = Lazy::new(|| match ThemeConfig::from_json(THEME_JSON) {
    Ok(config) => config,
    Err(err) => {
        tracing::warn!(error = %err, "embedded theme unreadable; using built-in palette");
        ThemeConfig::default()
    }
});

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("malformed theme configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid color `{value}` (expected #rgb or #rrggbb)")]
    InvalidColor { value: String },
    #[cfg(not(target_arch = "wasm32"))]
    #[error("invalid content pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[cfg(not(target_arch = "wasm32"))]
    #[error("unreadable content path: {0}")]
    Io(#[from] glob::GlobError),
}

/// A `#rgb` / `#rrggbb` color, stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    pub fn parse(value: &str) -> Result<Self, ThemeError> {
        let digits = value.strip_prefix('#').unwrap_or("");
        let valid = matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit());
        if !valid {
            return Err(ThemeError::InvalidColor {
                value: value.to_string(),
            });
        }
        Ok(Self(value.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for HexColor {
    type Error = ThemeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

impl std::fmt::Display for HexColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Shades of one color family, keyed by shade number (50, 100, ... 900).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette(BTreeMap<u16, HexColor>);

impl Palette {
    pub fn get(&self, shade: u16) -> Option<&HexColor> {
        self.0.get(&shade)
    }

    /// Shades in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (u16, &HexColor)> {
        self.0.iter().map(|(shade, color)| (*shade, color))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    pub content: Vec<String>,
    #[serde(default)]
    pub colors: BTreeMap<String, Palette>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        let brand = [
            (50, "#f4f7ff"),
            (100, "#e1e7ff"),
            (500, "#2563eb"),
            (600, "#1d4ed8"),
            (700, "#1e3a8a"),
        ]
        .into_iter()
        .map(|(shade, hex)| (shade, HexColor(hex.to_string())))
        .collect();

        Self {
            content: vec!["src/**/*.rs".to_string(), "assets/**/*.css".to_string()],
            colors: BTreeMap::from([("brand".to_string(), Palette(brand))]),
        }
    }
}

impl ThemeConfig {
    pub fn from_json(src: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(src)?)
    }

    /// Configuration shipped with the crate (parsed once).
    pub fn embedded() -> &'static ThemeConfig {
        &EMBEDDED
    }

    pub fn palette(&self, family: &str) -> Option<&Palette> {
        self.colors.get(family)
    }

    pub fn color(&self, family: &str, shade: u16) -> Option<&HexColor> {
        self.palette(family).and_then(|p| p.get(shade))
    }

    pub fn brand(&self, shade: u16) -> Option<&HexColor> {
        self.color("brand", shade)
    }

    /// `:root` block declaring `--color-<family>-<shade>` for every color.
    pub fn css_variables(&self) -> String {
        let mut css = String::from(":root {\n");
        for (family, palette) in &self.colors {
            for (shade, color) in palette.iter() {
                css.push_str(&format!("  --color-{family}-{shade}: {color};\n"));
            }
        }
        css.push_str("}\n");
        css
    }

    /// Files below `root` matched by any content pattern, sorted and unique.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn content_files(&self, root: &Path) -> Result<Vec<PathBuf>, ThemeError> {
        let base = glob::Pattern::escape(&root.to_string_lossy());
        let mut files = BTreeSet::new();
        for pattern in &self.content {
            let full = format!("{base}/{}", pattern.trim_start_matches('/'));
            for entry in glob::glob(&full)? {
                let path = entry?;
                if path.is_file() {
                    files.insert(path);
                }
            }
        }
        tracing::debug!(
            root = %root.display(),
            patterns = self.content.len(),
            files = files.len(),
            "content files resolved"
        );
        Ok(files.into_iter().collect())
    }
}
