//! Site configuration.
//!
//! Precedence: CLI flag > `LANDING_HERO_SRC` env var > YAML file > default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{SiteError, SiteResult};
use crate::page::{AssetRef, DEFAULT_HERO_SRC, DEFAULT_TITLE, PageView};
use crate::style::{FillMode, StylingStrategy};
use crate::theme::{DEFAULT_SPACING_UNIT, Palette, StyleTokens};

pub const HERO_SRC_ENV: &str = "LANDING_HERO_SRC";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// URL or path of the hero image
    pub hero_src: String,
    /// Document title
    pub title: String,
    /// Palette the colors default to
    pub palette: Palette,
    /// Overrides the palette's background
    pub background_color: Option<String>,
    /// Overrides the palette's foreground
    pub foreground_color: Option<String>,
    /// Vertical spacing unit in pixels
    pub spacing_unit_px: u16,
    /// Fill mode of the hero's fade-in
    pub hero_fill_mode: FillMode,
    pub strategy: StylingStrategy,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            hero_src: DEFAULT_HERO_SRC.to_string(),
            title: DEFAULT_TITLE.to_string(),
            palette: Palette::default(),
            background_color: None,
            foreground_color: None,
            spacing_unit_px: DEFAULT_SPACING_UNIT,
            hero_fill_mode: FillMode::Forwards,
            strategy: StylingStrategy::default(),
        }
    }
}

impl SiteConfig {
    /// Defaults with env overrides applied.
    pub fn new() -> Self {
        Self::default().with_env_overrides()
    }

    /// Read a YAML file, then apply env overrides.
    pub fn load(path: &Path) -> SiteResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| SiteError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: SiteConfig =
            serde_yaml::from_str(&raw).map_err(|source| SiteError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(config.with_env_overrides())
    }

    /// `load` when a path is given, otherwise `new`.
    pub fn resolve(path: Option<&Path>) -> SiteResult<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::new()),
        }
    }

    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(src) = std::env::var(HERO_SRC_ENV) {
            self.hero_src = src;
        }
        self
    }

    pub fn with_hero_src(mut self, src: impl Into<String>) -> Self {
        self.hero_src = src.into();
        self
    }

    pub fn tokens(&self) -> StyleTokens {
        let mut tokens =
            StyleTokens::from_palette(self.palette).with_spacing_unit(self.spacing_unit_px);
        if let Some(bg) = &self.background_color {
            tokens = tokens.with_background(bg.clone());
        }
        if let Some(fg) = &self.foreground_color {
            tokens = tokens.with_foreground(fg.clone());
        }
        tokens
    }

    /// Validate and build the page view.
    pub fn page_view(&self) -> SiteResult<PageView> {
        let hero_src = AssetRef::new(self.hero_src.clone()).ok_or_else(|| {
            SiteError::InvalidConfig {
                message: "hero_src must not be empty".to_string(),
            }
        })?;
        let tokens = self.tokens();
        tokens
            .validate()
            .map_err(|message| SiteError::InvalidConfig { message })?;

        Ok(
            PageView::new(hero_src, &tokens, self.hero_fill_mode, self.strategy)
                .with_title(self.title.clone()),
        )
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
