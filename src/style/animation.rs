//! Keyframe animations and their opacity timeline.
//!
//! The browser executes the real animation; this module describes it and
//! models the opacity an element shows at any point after first render so
//! the timing contract can be checked without a rendering host.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Name of the shared fade-in keyframes rule.
pub const FADE_IN: &str = "fadeIn";

/// Duration of every entrance animation on the page.
pub const FADE_DURATION: Duration = Duration::from_millis(2000);

/// Delay of the tagline relative to the hero.
pub const TAGLINE_DELAY: Duration = Duration::from_millis(500);

/// CSS `animation-fill-mode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillMode {
    #[default]
    None,
    Forwards,
    Backwards,
    Both,
}

impl FillMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FillMode::None => "none",
            FillMode::Forwards => "forwards",
            FillMode::Backwards => "backwards",
            FillMode::Both => "both",
        }
    }

    /// Whether the final keyframe is held after the animation ends.
    pub fn fills_forwards(&self) -> bool {
        matches!(self, FillMode::Forwards | FillMode::Both)
    }

    /// Whether the first keyframe applies during the delay.
    pub fn fills_backwards(&self) -> bool {
        matches!(self, FillMode::Backwards | FillMode::Both)
    }
}

/// A two-stop opacity keyframes rule (`0%` and `100%`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframes {
    pub name: &'static str,
    pub from_opacity: f32,
    pub to_opacity: f32,
}

impl Keyframes {
    /// `opacity: 0` at 0%, `opacity: 1` at 100%.
    pub const fn fade_in() -> Self {
        Self {
            name: FADE_IN,
            from_opacity: 0.0,
            to_opacity: 1.0,
        }
    }

    /// Opacity at `progress` in `[0, 1]` with a linear timing function.
    pub fn interpolate(&self, progress: f32) -> f32 {
        let t = progress.clamp(0.0, 1.0);
        self.from_opacity + (self.to_opacity - self.from_opacity) * t
    }

    pub fn to_css(&self) -> String {
        format!(
            "@keyframes {} {{ 0% {{ opacity: {}; }} 100% {{ opacity: {}; }} }}",
            self.name, self.from_opacity, self.to_opacity
        )
    }
}

/// One element's use of a keyframes rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    pub keyframes: Keyframes,
    pub duration: Duration,
    pub delay: Duration,
    pub fill_mode: FillMode,
}

impl Animation {
    pub fn fade_in(delay: Duration, fill_mode: FillMode) -> Self {
        Self {
            keyframes: Keyframes::fade_in(),
            duration: FADE_DURATION,
            delay,
            fill_mode,
        }
    }

    /// Time at which the animation reaches its last keyframe.
    pub fn end(&self) -> Duration {
        self.delay + self.duration
    }

    /// Opacity shown `elapsed` after first render.
    ///
    /// `resting` is the element's own declared opacity, used whenever the
    /// fill mode does not cover the current phase.
    pub fn opacity_at(&self, elapsed: Duration, resting: f32) -> f32 {
        if elapsed < self.delay {
            return if self.fill_mode.fills_backwards() {
                self.keyframes.from_opacity
            } else {
                resting
            };
        }

        let active = elapsed - self.delay;
        if active >= self.duration {
            return if self.fill_mode.fills_forwards() {
                self.keyframes.to_opacity
            } else {
                resting
            };
        }

        self.keyframes
            .interpolate(active.as_secs_f32() / self.duration.as_secs_f32())
    }

    /// Longhand declarations, in the order they are emitted.
    pub fn declarations(&self) -> [(&'static str, String); 5] {
        [
            ("animation-name", self.keyframes.name.to_string()),
            ("animation-duration", format!("{}ms", self.duration.as_millis())),
            ("animation-delay", format!("{}ms", self.delay.as_millis())),
            ("animation-timing-function", "linear".to_string()),
            ("animation-fill-mode", self.fill_mode.as_str().to_string()),
        ]
    }
}
