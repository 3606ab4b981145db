pub mod animation;
pub mod sheet;

use serde::{Deserialize, Serialize};

pub use animation::{Animation, FADE_DURATION, FADE_IN, FillMode, Keyframes, TAGLINE_DELAY};
pub use sheet::{ElementRole, HERO_MAX_HEIGHT, StyleRule, StyleSheet};

/// How role rules reach the elements.
///
/// Both strategies yield the same computed styles; the keyframes are always
/// emitted in a `<style>` block since they cannot be inlined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StylingStrategy {
    /// Rules go in each element's `style` attribute
    #[default]
    Inline,
    /// Rules go in the `<style>` block, keyed by class
    Classes,
}


#[cfg(test)]
#[path = "sheet_test.rs"]
mod sheet_test;
