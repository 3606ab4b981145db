use serde::{Deserialize, Serialize};

/// Catppuccin palette variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    Latte, // Light
    Frappe,
    Macchiato,
    #[default]
    Mocha, // Dark
}

impl Palette {
    pub fn all() -> &'static [Palette] {
        &[
            Palette::Latte,
            Palette::Frappe,
            Palette::Macchiato,
            Palette::Mocha,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Palette::Latte => "latte",
            Palette::Frappe => "frappe",
            Palette::Macchiato => "macchiato",
            Palette::Mocha => "mocha",
        }
    }

    pub fn colors(&self) -> PaletteColors {
        match self {
            Palette::Latte => PaletteColors::LATTE,
            Palette::Frappe => PaletteColors::FRAPPE,
            Palette::Macchiato => PaletteColors::MACCHIATO,
            Palette::Mocha => PaletteColors::MOCHA,
        }
    }
}

/// The subset of a palette the page draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteColors {
    pub base: &'static str,
    pub text: &'static str,
}

impl PaletteColors {
    pub const LATTE: PaletteColors = PaletteColors {
        base: "#eff1f5",
        text: "#4c4f69",
    };

    pub const FRAPPE: PaletteColors = PaletteColors {
        base: "#303446",
        text: "#c6d0f5",
    };

    pub const MACCHIATO: PaletteColors = PaletteColors {
        base: "#24273a",
        text: "#cad3f5",
    };

    pub const MOCHA: PaletteColors = PaletteColors {
        base: "#1e1e2e",
        text: "#cdd6f4",
    };
}

/// Default spacing unit in pixels.
pub const DEFAULT_SPACING_UNIT: u16 = 8;

/// Style tokens injected into the page's style sheet.
///
/// These are the only values the page takes from a theme: two colors and
/// the unit every vertical margin is a multiple of.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleTokens {
    pub background_color: String,
    pub foreground_color: String,
    pub vertical_spacing_unit: u16,
}

impl StyleTokens {
    pub fn from_palette(palette: Palette) -> Self {
        let colors = palette.colors();
        Self {
            background_color: colors.base.to_string(),
            foreground_color: colors.text.to_string(),
            vertical_spacing_unit: DEFAULT_SPACING_UNIT,
        }
    }

    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background_color = color.into();
        self
    }

    pub fn with_foreground(mut self, color: impl Into<String>) -> Self {
        self.foreground_color = color.into();
        self
    }

    pub fn with_spacing_unit(mut self, px: u16) -> Self {
        self.vertical_spacing_unit = px;
        self
    }

    /// `factor` spacing units as a CSS length.
    pub fn spacing(&self, factor: u16) -> String {
        format!("{}px", u32::from(self.vertical_spacing_unit) * u32::from(factor))
    }

    /// Check colors are hex literals and the spacing unit is non-zero.
    pub fn validate(&self) -> Result<(), String> {
        for (field, value) in [
            ("background_color", &self.background_color),
            ("foreground_color", &self.foreground_color),
        ] {
            if !is_hex_color(value) {
                return Err(format!("{} must be a hex color like #1e1e2e, got '{}'", field, value));
            }
        }
        if self.vertical_spacing_unit == 0 {
            return Err("vertical_spacing_unit must be greater than zero".to_string());
        }
        Ok(())
    }
}

impl Default for StyleTokens {
    fn default() -> Self {
        Self::from_palette(Palette::default())
    }
}

fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => {
            matches!(hex.len(), 3 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tokens_use_mocha() {
        let tokens = StyleTokens::default();
        assert_eq!(tokens.background_color, "#1e1e2e");
        assert_eq!(tokens.foreground_color, "#cdd6f4");
        assert_eq!(tokens.vertical_spacing_unit, 8);
    }

    #[test]
    fn test_every_palette_produces_valid_tokens() {
        for palette in Palette::all() {
            assert!(
                StyleTokens::from_palette(*palette).validate().is_ok(),
                "palette {} should validate",
                palette.as_str()
            );
        }
    }

    #[test]
    fn test_spacing_multiplies_unit() {
        let tokens = StyleTokens::default().with_spacing_unit(6);
        assert_eq!(tokens.spacing(2), "12px");
        assert_eq!(tokens.spacing(0), "0px");
    }

    #[test]
    fn test_validate_rejects_bad_color() {
        let tokens = StyleTokens::default().with_background("red; display: none");
        let err = tokens.validate().unwrap_err();
        assert!(err.contains("background_color"));
    }

    #[test]
    fn test_validate_rejects_zero_spacing() {
        let tokens = StyleTokens::default().with_spacing_unit(0);
        assert!(tokens.validate().is_err());
    }

    #[test]
    fn test_short_hex_is_accepted() {
        let tokens = StyleTokens::default().with_foreground("#fff");
        assert!(tokens.validate().is_ok());
    }
}
