//! The canonical page view.
//!
//! A container holding a hero image and a tagline, each fading in on first
//! render with the tagline staggered behind the hero. Every input is fixed
//! at startup, so a `PageView` is a plain immutable value.

use std::fmt;

use crate::style::{FillMode, StyleSheet, StylingStrategy};
use crate::theme::StyleTokens;

/// The site's one-line description.
pub const TAGLINE: &str = "a website built on serverless components via the serverless framework";

/// Where the bundled hero image is served from.
pub const DEFAULT_HERO_SRC: &str = "/assets/hero.svg";

pub const DEFAULT_TITLE: &str = "serverless website";

/// Opaque reference to the hero image; only ever used as the `src` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRef(String);

impl AssetRef {
    /// Returns `None` for an empty or whitespace-only reference.
    pub fn new(src: impl Into<String>) -> Option<Self> {
        let src = src.into();
        if src.trim().is_empty() {
            None
        } else {
            Some(Self(src))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for AssetRef {
    fn default() -> Self {
        Self(DEFAULT_HERO_SRC.to_string())
    }
}

impl fmt::Display for AssetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub title: String,
    pub hero_src: AssetRef,
    pub tagline: &'static str,
    pub style: StyleSheet,
    pub strategy: StylingStrategy,
}

impl PageView {
    pub fn new(
        hero_src: AssetRef,
        tokens: &StyleTokens,
        hero_fill: FillMode,
        strategy: StylingStrategy,
    ) -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            hero_src,
            tagline: TAGLINE,
            style: StyleSheet::build(tokens, hero_fill),
            strategy,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_hero_src(mut self, hero_src: AssetRef) -> Self {
        self.hero_src = hero_src;
        self
    }
}

impl Default for PageView {
    fn default() -> Self {
        Self::new(
            AssetRef::default(),
            &StyleTokens::default(),
            FillMode::Forwards,
            StylingStrategy::default(),
        )
    }
}
