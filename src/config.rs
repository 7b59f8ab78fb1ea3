use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::ui::theme::{parse_hex_color, Theme};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub appearance: AppearanceConfig,
    pub behavior: BehaviorConfig,
    pub theme: ThemeOverrides,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Theme preset: "default", "nord", "gruvbox", "catppuccin-mocha"
    pub theme: String,
    /// Title shown in the toolbar border
    pub title: String,
    /// Marker drawn on tiles of drawn cards
    pub drawn_marker: String,
    /// Marker drawn on tiles selected for deletion
    pub selected_marker: String,
    /// Tile width in columns (label area plus padding)
    pub tile_width: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Ask before deleting groups or cards and before restoring defaults
    pub confirm_destructive: bool,
    /// Fixed RNG seed for reproducible draws
    pub seed: Option<u64>,
    /// Directory export paths are resolved against when relative
    pub export_dir: Option<PathBuf>,
}

/// Optional per-colour overrides on top of the preset, as hex strings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeOverrides {
    pub background: Option<String>,
    pub foreground: Option<String>,
    pub accent: Option<String>,
    pub red_suit: Option<String>,
    pub black_suit: Option<String>,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            theme: "default".to_string(),
            title: " carddraw ".to_string(),
            drawn_marker: "✓".to_string(),
            selected_marker: "●".to_string(),
            tile_width: 8,
        }
    }
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            confirm_destructive: true,
            seed: None,
            export_dir: None,
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        let path = Path::new(expanded.as_ref());

        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            Self::parse(&content)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            tracing::info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Preset theme with any hex overrides applied. Bad values are logged and skipped.
    pub fn resolve_theme(&self) -> Theme {
        let mut theme = Theme::from_preset(&self.appearance.theme).unwrap_or_else(|| {
            tracing::warn!("Unknown theme '{}', using default", self.appearance.theme);
            Theme::default()
        });

        let overrides = [
            (&self.theme.background, &mut theme.background),
            (&self.theme.foreground, &mut theme.foreground),
            (&self.theme.accent, &mut theme.accent),
            (&self.theme.red_suit, &mut theme.red_suit),
            (&self.theme.black_suit, &mut theme.black_suit),
        ];
        for (value, slot) in overrides {
            if let Some(hex) = value {
                match parse_hex_color(hex) {
                    Ok(color) => *slot = color,
                    Err(e) => tracing::warn!("Ignoring theme colour '{}': {}", hex, e),
                }
            }
        }
        theme
    }

    /// Resolve an export path, joining relative paths onto `export_dir`
    pub fn export_path(&self, path: PathBuf) -> PathBuf {
        match &self.behavior.export_dir {
            Some(dir) if path.is_relative() => {
                PathBuf::from(shellexpand::tilde(&dir.to_string_lossy()).as_ref()).join(path)
            }
            _ => path,
        }
    }
}
