//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! overridden by an optional `config.toml` in the content root.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [slider]
//! jump_policy = "clamp"     # "clamp" or "ignore" for out-of-range dot targets
//! keyboard = true           # ArrowLeft / ArrowRight drive the slider
//!
//! [nav]
//! hover_opacity = 0.5       # Opacity of the other links while one is hovered
//! rest_opacity = 1.0        # Opacity once the pointer leaves
//! height_px = 90            # Nav bar height; the sticky observer margin
//!
//! [observers]
//! reveal_threshold = 0.15   # Section visible fraction before reveal
//! lazy_threshold = 0.0      # Image visible fraction before loading
//! lazy_root_margin_px = 200 # Start loading this far before the viewport
//!
//! [colors]
//! primary = "#5ec576"
//! secondary = "#ffcb03"
//! tertiary = "#ff585f"
//! text = "#444444"
//! background = "#f3f3f3"
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse. Override just the values you want:
//!
//! ```toml
//! [nav]
//! hover_opacity = 0.3
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::slider::JumpPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have defaults; unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Slider navigation settings.
    pub slider: SliderConfig,
    /// Nav bar hover fade and height.
    pub nav: NavConfig,
    /// Intersection observer thresholds and margins.
    pub observers: ObserverConfig,
    /// Page palette.
    pub colors: ColorConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_unit("nav.hover_opacity", self.nav.hover_opacity)?;
        check_unit("nav.rest_opacity", self.nav.rest_opacity)?;
        check_unit("observers.reveal_threshold", self.observers.reveal_threshold)?;
        check_unit("observers.lazy_threshold", self.observers.lazy_threshold)?;
        if self.nav.height_px == 0 || self.nav.height_px > MAX_NAV_HEIGHT_PX {
            return Err(ConfigError::Validation(format!(
                "nav.height_px must be 1-{MAX_NAV_HEIGHT_PX}"
            )));
        }
        Ok(())
    }
}

/// Upper bound for `nav.height_px`. Anything taller covers the whole viewport.
pub const MAX_NAV_HEIGHT_PX: u32 = 10_000;

fn check_unit(key: &str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Validation(format!("{key} must be 0.0-1.0")))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SliderConfig {
    /// What happens to an indicator target past the last panel.
    pub jump_policy: JumpPolicy,
    /// Whether arrow keys navigate the slider.
    pub keyboard: bool,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            jump_policy: JumpPolicy::Clamp,
            keyboard: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavConfig {
    /// Opacity applied to the other links and the logo on hover.
    pub hover_opacity: f32,
    /// Opacity restored when the pointer leaves a link.
    pub rest_opacity: f32,
    /// Nav bar height in pixels. Shrinks the sticky observer's root margin.
    pub height_px: u32,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            hover_opacity: 0.5,
            rest_opacity: 1.0,
            height_px: 90,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ObserverConfig {
    /// Visible fraction of a section before it is revealed.
    pub reveal_threshold: f32,
    /// Visible fraction of a lazy image before it loads.
    pub lazy_threshold: f32,
    /// Lazy images start loading this many pixels before entering the viewport.
    pub lazy_root_margin_px: i32,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            reveal_threshold: 0.15,
            lazy_threshold: 0.0,
            lazy_root_margin_px: 200,
        }
    }
}

/// Page palette, emitted as CSS custom properties.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Buttons, active tab and active dot.
    pub primary: String,
    /// Second operations tab and highlights.
    pub secondary: String,
    /// Third operations tab.
    pub tertiary: String,
    /// Body text.
    pub text: String,
    /// Page background.
    pub background: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            primary: "#5ec576".to_string(),
            secondary: "#ffcb03".to_string(),
            tertiary: "#ff585f".to_string(),
            text: "#444444".to_string(),
            background: "#f3f3f3".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(SiteConfig::default())
        .map_err(|e| ConfigError::Validation(format!("default config must serialize: {e}")))
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
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
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

/// Load config from `config.toml` in the given directory, over stock defaults.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Simple Landing Configuration
# ============================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Slider
# ---------------------------------------------------------------------------
[slider]
# What a dot click past the last slide does:
#   "clamp"  -> show the last slide
#   "ignore" -> stay on the current slide
jump_policy = "clamp"

# ArrowLeft / ArrowRight move the slider.
keyboard = true

# ---------------------------------------------------------------------------
# Navigation bar
# ---------------------------------------------------------------------------
[nav]
# Opacity of the other links and the logo while a link is hovered.
hover_opacity = 0.5

# Opacity restored when the pointer leaves the link.
rest_opacity = 1.0

# Nav bar height in pixels (1-10000). The nav turns sticky this far before the
# header scrolls out of view.
height_px = 90

# ---------------------------------------------------------------------------
# Viewport observers
# ---------------------------------------------------------------------------
[observers]
# Fraction of a section that must be visible before it fades in.
reveal_threshold = 0.15

# Fraction of a lazy image that must be visible before it loads.
lazy_threshold = 0.0

# Start loading lazy images this many pixels before they scroll into view.
lazy_root_margin_px = 200

# ---------------------------------------------------------------------------
# Colors
# ---------------------------------------------------------------------------
[colors]
primary = "#5ec576"
secondary = "#ffcb03"
tertiary = "#ff585f"
text = "#444444"
background = "#f3f3f3"
"##
}

/// Generate CSS custom properties from the palette.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-primary: {primary};
    --color-secondary: {secondary};
    --color-tertiary: {tertiary};
    --color-text: {text};
    --color-bg: {background};
}}"#,
        primary = colors.primary,
        secondary = colors.secondary,
        tertiary = colors.tertiary,
        text = colors.text,
        background = colors.background,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_values() {
        let config = SiteConfig::default();
        assert_eq!(config.slider.jump_policy, JumpPolicy::Clamp);
        assert!(config.slider.keyboard);
        assert_eq!(config.nav.hover_opacity, 0.5);
        assert_eq!(config.nav.rest_opacity, 1.0);
        assert_eq!(config.nav.height_px, 90);
        assert_eq!(config.observers.reveal_threshold, 0.15);
        assert_eq!(config.observers.lazy_root_margin_px, 200);
        assert_eq!(config.colors.primary, "#5ec576");
    }

    #[test]
    fn parse_partial_config() {
        let toml = r#"
[nav]
hover_opacity = 0.3
"#;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.nav.hover_opacity, 0.3);
        // Defaults preserved
        assert_eq!(config.nav.rest_opacity, 1.0);
        assert_eq!(config.slider.jump_policy, JumpPolicy::Clamp);
    }

    #[test]
    fn parse_jump_policy() {
        let toml = r#"
[slider]
jump_policy = "ignore"
"#;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.slider.jump_policy, JumpPolicy::Ignore);
    }

    #[test]
    fn unknown_jump_policy_rejected() {
        let toml = r#"
[slider]
jump_policy = "wrap"
"#;
        let result: Result<SiteConfig, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn generate_css_uses_config_colors() {
        let mut colors = ColorConfig::default();
        colors.primary = "#00ff00".to_string();
        let css = generate_color_css(&colors);
        assert!(css.contains("--color-primary: #00ff00"));
        assert!(css.contains("--color-bg: #f3f3f3"));
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.nav.hover_opacity, 0.5);
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r#"
[observers]
reveal_threshold = 0.3
"#,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.observers.reveal_threshold, 0.3);
        assert_eq!(config.observers.lazy_root_margin_px, 200);
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "this is not valid toml [[[").unwrap();
        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn load_config_validates_values() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r#"
[nav]
hover_opacity = 1.5
"#,
        )
        .unwrap();
        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn unknown_key_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r#"
[nav]
hover_opacty = 0.5
"#,
        )
        .unwrap();
        assert!(load_config(tmp.path()).is_err());
    }

    #[test]
    fn unknown_section_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str("[navv]\nheight_px = 3\n");
        assert!(result.is_err());
    }

    // =========================================================================
    // Validation tests
    // =========================================================================

    #[test]
    fn validate_default_config_passes() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_threshold_bounds() {
        let mut config = SiteConfig::default();
        config.observers.reveal_threshold = 1.0;
        assert!(config.validate().is_ok());
        config.observers.reveal_threshold = -0.1;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("reveal_threshold"));
    }

    #[test]
    fn validate_nav_height_zero() {
        let mut config = SiteConfig::default();
        config.nav.height_px = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_nav_height_upper_bound() {
        let mut config = SiteConfig::default();
        config.nav.height_px = MAX_NAV_HEIGHT_PX;
        assert!(config.validate().is_ok());
        config.nav.height_px = MAX_NAV_HEIGHT_PX + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_config_rejects_huge_nav_height() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "[nav]\nheight_px = 2147483648\n").unwrap();
        let err = load_config(tmp.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("nav.height_px"));
    }

    // =========================================================================
    // merge_toml tests
    // =========================================================================

    #[test]
    fn merge_toml_deep_nested() {
        let base: toml::Value = toml::from_str(
            r#"
[nav]
hover_opacity = 0.5
height_px = 90
"#,
        )
        .unwrap();
        let overlay: toml::Value = toml::from_str(
            r#"
[nav]
height_px = 60
"#,
        )
        .unwrap();
        let merged = merge_toml(base, overlay);
        let nav = merged.get("nav").unwrap();
        assert_eq!(nav.get("height_px").unwrap().as_integer(), Some(60));
        assert_eq!(nav.get("hover_opacity").unwrap().as_float(), Some(0.5));
    }

    #[test]
    fn merge_toml_scalar_override() {
        let base: toml::Value = toml::from_str("a = 1\nb = 2").unwrap();
        let overlay: toml::Value = toml::from_str("a = 10").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("a").unwrap().as_integer(), Some(10));
        assert_eq!(merged.get("b").unwrap().as_integer(), Some(2));
    }

    #[test]
    fn resolve_config_rejects_invalid_values() {
        let base = stock_defaults_value().unwrap();
        let overlay: toml::Value = toml::from_str("[nav]\nrest_opacity = 2.0\n").unwrap();
        let result = resolve_config(base, Some(overlay));
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    // =========================================================================
    // stock_config_toml tests
    // =========================================================================

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let config: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        let defaults = SiteConfig::default();
        assert_eq!(config.slider.jump_policy, defaults.slider.jump_policy);
        assert_eq!(config.nav.hover_opacity, defaults.nav.hover_opacity);
        assert_eq!(config.nav.height_px, defaults.nav.height_px);
        assert_eq!(
            config.observers.lazy_root_margin_px,
            defaults.observers.lazy_root_margin_px
        );
        assert_eq!(config.colors.tertiary, defaults.colors.tertiary);
    }

    #[test]
    fn stock_config_toml_contains_all_sections() {
        let content = stock_config_toml();
        for section in ["[slider]", "[nav]", "[observers]", "[colors]"] {
            assert!(content.contains(section), "missing {section}");
        }
    }

    #[test]
    fn stock_defaults_value_has_all_sections() {
        let val = stock_defaults_value().unwrap();
        for key in ["slider", "nav", "observers", "colors"] {
            assert!(val.get(key).is_some(), "missing {key}");
        }
    }
}
