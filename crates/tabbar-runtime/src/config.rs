#![forbid(unsafe_code)]

//! Chart configuration: display flags, axis mode, and environment overrides.
//!
//! Host properties arrive untyped. A column is hidden only when its flag is
//! explicitly false; an unset, malformed, or true flag shows it.
//!
//! # Environment Variables
//!
//! | Variable                 | Values                 | Default   |
//! |--------------------------|------------------------|-----------|
//! | `TABBAR_SHOW_VALUE`      | `1/0/true/false/...`   | `true`    |
//! | `TABBAR_SHOW_PERCENTAGE` | `1/0/true/false/...`   | `true`    |
//! | `TABBAR_AXIS`            | `auto` \| `off`        | `auto`    |
//! | `TABBAR_GLYPH_MODE`      | `unicode` \| `ascii`   | `unicode` |

use std::env;
use std::fmt;

use tabbar_render::{GlyphMode, SceneConfig};

const ENV_SHOW_VALUE: &str = "TABBAR_SHOW_VALUE";
const ENV_SHOW_PERCENTAGE: &str = "TABBAR_SHOW_PERCENTAGE";
const ENV_AXIS: &str = "TABBAR_AXIS";
const ENV_GLYPH_MODE: &str = "TABBAR_GLYPH_MODE";

/// A raw host property value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PropertyValue {
    #[default]
    Unset,
    Bool(bool),
    Text(String),
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl<T: Into<PropertyValue>> From<Option<T>> for PropertyValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Unset, Into::into)
    }
}

/// Visibility decided by a host toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayFlag {
    #[default]
    Shown,
    Hidden,
}

impl DisplayFlag {
    /// Resolve a property. Only an explicit false hides.
    #[must_use]
    pub fn resolve(value: &PropertyValue) -> Self {
        let hidden = match value {
            PropertyValue::Bool(b) => !b,
            PropertyValue::Text(text) => parse_bool(text) == Some(false),
            PropertyValue::Unset => false,
        };
        if hidden { Self::Hidden } else { Self::Shown }
    }

    #[inline]
    #[must_use]
    pub const fn is_shown(self) -> bool {
        matches!(self, Self::Shown)
    }
}

/// When to draw the zero axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisMode {
    /// Only when some value is negative.
    #[default]
    Auto,
    Off,
}

impl AxisMode {
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "auto" | "on" => Some(Self::Auto),
            "off" | "none" => Some(Self::Off),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Off => "off",
        }
    }
}

fn parse_glyph_mode(value: &str) -> Option<GlyphMode> {
    match value.trim().to_ascii_lowercase().as_str() {
        "unicode" => Some(GlyphMode::Unicode),
        "ascii" => Some(GlyphMode::Ascii),
        _ => None,
    }
}

/// Configuration for one chart instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartConfig {
    pub show_value: DisplayFlag,
    pub show_percentage: DisplayFlag,
    pub axis: AxisMode,
    pub glyph_mode: GlyphMode,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            show_value: DisplayFlag::Shown,
            show_percentage: DisplayFlag::Shown,
            axis: AxisMode::Auto,
            glyph_mode: GlyphMode::Unicode,
        }
    }
}

/// Configuration parse error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub field: &'static str,
    pub value: String,
    pub message: String,
}

impl ConfigError {
    fn new(field: &'static str, value: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={} ({})", self.field, self.value, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Parsed configuration plus any values that were rejected.
#[derive(Debug, Clone)]
pub struct ConfigParse {
    pub config: ChartConfig,
    pub errors: Vec<ConfigError>,
}

impl ChartConfig {
    /// Parse config from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with_diagnostics().config
    }

    /// Parse config from environment variables and return diagnostics.
    #[must_use]
    pub fn from_env_with_diagnostics() -> ConfigParse {
        from_env_with(|key| env::var(key).ok())
    }

    /// Apply the host's two display properties on top of this config.
    #[must_use]
    pub fn with_properties(
        mut self,
        show_value: &PropertyValue,
        show_percentage: &PropertyValue,
    ) -> Self {
        self.show_value = DisplayFlag::resolve(show_value);
        self.show_percentage = DisplayFlag::resolve(show_percentage);
        self
    }

    /// Scene builder switches for this config.
    #[must_use]
    pub fn scene_config(&self) -> SceneConfig {
        SceneConfig {
            show_axis: self.axis == AxisMode::Auto,
            show_value: self.show_value.is_shown(),
            show_percentage: self.show_percentage.is_shown(),
        }
    }
}

pub(crate) fn from_env_with<F>(mut get: F) -> ConfigParse
where
    F: FnMut(&str) -> Option<String>,
{
    let mut config = ChartConfig::default();
    let mut errors = Vec::new();

    for (key, field) in [
        (ENV_SHOW_VALUE, "show_value"),
        (ENV_SHOW_PERCENTAGE, "show_percentage"),
    ] {
        let Some(value) = get(key) else { continue };
        let flag = match parse_bool(&value) {
            Some(true) => DisplayFlag::Shown,
            Some(false) => DisplayFlag::Hidden,
            None => {
                errors.push(ConfigError::new(
                    field,
                    value,
                    "expected bool (1/0/true/false)",
                ));
                continue;
            }
        };
        if field == "show_value" {
            config.show_value = flag;
        } else {
            config.show_percentage = flag;
        }
    }

    if let Some(value) = get(ENV_AXIS) {
        match AxisMode::parse(&value) {
            Some(parsed) => config.axis = parsed,
            None => errors.push(ConfigError::new("axis", value, "expected auto|off")),
        }
    }

    if let Some(value) = get(ENV_GLYPH_MODE) {
        match parse_glyph_mode(&value) {
            Some(parsed) => config.glyph_mode = parsed,
            None => errors.push(ConfigError::new(
                "glyph_mode",
                value,
                "expected unicode|ascii",
            )),
        }
    }

    ConfigParse { config, errors }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn parse_with(vars: &[(&str, &str)]) -> ConfigParse {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        from_env_with(|key| map.get(key).cloned())
    }

    #[test]
    fn flags_hide_only_on_explicit_false() {
        assert_eq!(DisplayFlag::resolve(&PropertyValue::Unset), DisplayFlag::Shown);
        assert_eq!(DisplayFlag::resolve(&true.into()), DisplayFlag::Shown);
        assert_eq!(DisplayFlag::resolve(&false.into()), DisplayFlag::Hidden);
        assert_eq!(DisplayFlag::resolve(&"FALSE".into()), DisplayFlag::Hidden);
        assert_eq!(DisplayFlag::resolve(&" off ".into()), DisplayFlag::Hidden);
        assert_eq!(DisplayFlag::resolve(&"yes".into()), DisplayFlag::Shown);
        assert_eq!(DisplayFlag::resolve(&"maybe".into()), DisplayFlag::Shown);
        assert_eq!(DisplayFlag::resolve(&"".into()), DisplayFlag::Shown);
        assert_eq!(
            DisplayFlag::resolve(&PropertyValue::from(None::<bool>)),
            DisplayFlag::Shown
        );
    }

    #[test]
    fn with_properties_maps_to_scene_config() {
        let config = ChartConfig::default().with_properties(&false.into(), &PropertyValue::Unset);
        let scene = config.scene_config();
        assert!(!scene.show_value);
        assert!(scene.show_percentage);
        assert!(scene.show_axis);
    }

    #[test]
    fn axis_off_disables_axis() {
        let config = ChartConfig {
            axis: AxisMode::Off,
            ..ChartConfig::default()
        };
        assert!(!config.scene_config().show_axis);
    }

    #[test]
    fn env_defaults() {
        let parsed = parse_with(&[]);
        assert_eq!(parsed.config, ChartConfig::default());
        assert!(parsed.errors.is_empty());
    }

    #[test]
    fn env_overrides() {
        let parsed = parse_with(&[
            (ENV_SHOW_VALUE, "0"),
            (ENV_SHOW_PERCENTAGE, "yes"),
            (ENV_AXIS, "OFF"),
            (ENV_GLYPH_MODE, "ascii"),
        ]);
        assert!(parsed.errors.is_empty());
        assert_eq!(parsed.config.show_value, DisplayFlag::Hidden);
        assert_eq!(parsed.config.show_percentage, DisplayFlag::Shown);
        assert_eq!(parsed.config.axis, AxisMode::Off);
        assert_eq!(parsed.config.glyph_mode, GlyphMode::Ascii);
    }

    #[test]
    fn invalid_values_are_reported_and_keep_defaults() {
        let parsed = parse_with(&[
            (ENV_SHOW_VALUE, "sometimes"),
            (ENV_AXIS, "left"),
            (ENV_GLYPH_MODE, "emoji"),
        ]);
        assert_eq!(parsed.config, ChartConfig::default());
        let fields: Vec<_> = parsed.errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, ["show_value", "axis", "glyph_mode"]);
        assert_eq!(
            parsed.errors[0].to_string(),
            "show_value=sometimes (expected bool (1/0/true/false))"
        );
    }

    #[test]
    fn axis_mode_names() {
        assert_eq!(AxisMode::parse("auto"), Some(AxisMode::Auto));
        assert_eq!(AxisMode::parse("none"), Some(AxisMode::Off));
        assert_eq!(AxisMode::Off.as_str(), "off");
    }
}
