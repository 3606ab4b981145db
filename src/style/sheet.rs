//! Role-keyed style rules for the page.

use std::time::Duration;

use super::animation::{Animation, FillMode, Keyframes, TAGLINE_DELAY};
use crate::theme::StyleTokens;

/// Upper bound on hero image height, relative to the viewport.
pub const HERO_MAX_HEIGHT: &str = "40vh";

/// The three styled regions of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementRole {
    Container,
    Hero,
    Tagline,
}

impl ElementRole {
    pub fn all() -> &'static [ElementRole] {
        &[ElementRole::Container, ElementRole::Hero, ElementRole::Tagline]
    }

    /// Class carried by the region's wrapper element.
    pub fn class_name(&self) -> &'static str {
        match self {
            ElementRole::Container => "container",
            ElementRole::Hero => "hero",
            ElementRole::Tagline => "tagline",
        }
    }

    /// Selector for the element the rule applies to. The hero rule targets
    /// the image inside the hero wrapper.
    pub fn selector(&self) -> &'static str {
        match self {
            ElementRole::Container => ".container",
            ElementRole::Hero => ".hero img",
            ElementRole::Tagline => ".tagline",
        }
    }
}

/// Declarations for one role, plus its entrance animation if any.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleRule {
    declarations: Vec<(&'static str, String)>,
    opacity: Option<f32>,
    animation: Option<Animation>,
}

impl StyleRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.declarations.push((property, value.into()));
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn with_animation(mut self, animation: Animation) -> Self {
        self.animation = Some(animation);
        self
    }

    pub fn animation(&self) -> Option<&Animation> {
        self.animation.as_ref()
    }

    /// Value of a plain declaration, if set.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Declared opacity; 1 when the rule leaves it unset.
    pub fn resting_opacity(&self) -> f32 {
        self.opacity.unwrap_or(1.0)
    }

    /// Opacity the element shows `elapsed` after first render.
    pub fn opacity_at(&self, elapsed: Duration) -> f32 {
        match &self.animation {
            Some(animation) => animation.opacity_at(elapsed, self.resting_opacity()),
            None => self.resting_opacity(),
        }
    }

    /// All declarations in emission order: plain, opacity, animation.
    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        let mut out = self.declarations.clone();
        if let Some(opacity) = self.opacity {
            out.push(("opacity", opacity.to_string()));
        }
        if let Some(animation) = &self.animation {
            out.extend(animation.declarations());
        }
        out
    }

    /// Declarations as a `style` attribute / rule body.
    pub fn to_css(&self) -> String {
        self.declarations()
            .iter()
            .map(|(p, v)| format!("{}: {};", p, v))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// The page's full style descriptor. Built once and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleSheet {
    container: StyleRule,
    hero: StyleRule,
    tagline: StyleRule,
}

impl StyleSheet {
    pub fn build(tokens: &StyleTokens, hero_fill: FillMode) -> Self {
        let container = StyleRule::new()
            .with("width", "100vw")
            .with("min-height", "100vh")
            .with("display", "flex")
            .with("flex-direction", "column")
            .with("align-items", "center")
            .with("justify-content", "center")
            .with("background-color", tokens.background_color.clone())
            .with("color", tokens.foreground_color.clone());

        let hero = StyleRule::new()
            .with("max-height", HERO_MAX_HEIGHT)
            .with("pointer-events", "none")
            .with_opacity(0.0)
            .with_animation(Animation::fade_in(Duration::ZERO, hero_fill));

        let tagline = StyleRule::new()
            .with("text-align", "center")
            .with("margin-top", tokens.spacing(2))
            .with("margin-bottom", tokens.spacing(2))
            .with_opacity(0.0)
            .with_animation(Animation::fade_in(TAGLINE_DELAY, FillMode::Forwards));

        Self {
            container,
            hero,
            tagline,
        }
    }

    pub fn rule(&self, role: ElementRole) -> &StyleRule {
        match role {
            ElementRole::Container => &self.container,
            ElementRole::Hero => &self.hero,
            ElementRole::Tagline => &self.tagline,
        }
    }

    /// Distinct keyframes referenced by any rule, in role order.
    pub fn keyframes(&self) -> Vec<Keyframes> {
        let mut out: Vec<Keyframes> = Vec::new();
        for role in ElementRole::all() {
            if let Some(animation) = self.rule(*role).animation() {
                if !out.iter().any(|k| k.name == animation.keyframes.name) {
                    out.push(animation.keyframes);
                }
            }
        }
        out
    }

    /// Time after which no element's opacity changes again.
    pub fn settled_at(&self) -> Duration {
        ElementRole::all()
            .iter()
            .filter_map(|role| self.rule(*role).animation())
            .map(Animation::end)
            .max()
            .unwrap_or(Duration::ZERO)
    }

    pub fn keyframes_css(&self) -> String {
        self.keyframes()
            .iter()
            .map(Keyframes::to_css)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Selector rules for every role.
    pub fn rules_css(&self) -> String {
        ElementRole::all()
            .iter()
            .map(|role| format!("{} {{ {} }}", role.selector(), self.rule(*role).to_css()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self::build(&StyleTokens::default(), FillMode::Forwards)
    }
}
