#![forbid(unsafe_code)]

//! tabbar public facade crate.
//!
//! This crate provides the stable surface area for hosts. It re-exports the
//! common types from the internal crates and offers a small prelude.
//!
//! ```
//! use tabbar::prelude::*;
//!
//! let pipeline = RenderPipeline::new();
//! let rows = vec![
//!     tabbar::row("X", 5.0, "#d62728", "x")?,
//!     tabbar::row("Y", -3.0, "#1f77b4", "y")?,
//! ];
//! # struct Host;
//! # impl HostContext for Host {
//! #     fn theme(&self) -> Theme { Theme::default() }
//! #     fn show_error(&self, _: &[String]) {}
//! #     fn hide_error(&self) {}
//! #     fn render_complete(&self) {}
//! # }
//! let outcome = pollster::block_on(pipeline.render(
//!     &StaticData::new(rows),
//!     &Host,
//!     &ChartConfig::default(),
//!     Size::new(30, 4),
//! ));
//! assert!(outcome.is_committed());
//! # Ok::<(), tabbar::Error>(())
//! ```

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use tabbar_core::{
    Color, ColorParseError, Modifiers, MouseButton, MouseEvent, MouseEventKind, Rect, Row, RowId,
    Size,
};

// --- Layout re-exports -----------------------------------------------------

pub use tabbar_layout::{ChartLayout, Percentage, Segment, Sign, StackedBar, layout};

// --- Render re-exports -----------------------------------------------------

pub use tabbar_render::{
    Canvas, ClickTarget, GlyphMode, HitRegion, Rasterizer, Scene, SceneConfig, Theme, build_scene,
};

// --- Runtime re-exports ----------------------------------------------------

pub use tabbar_runtime::{
    AxisMode, ChartConfig, ConfigError, DataView, DisplayFlag, HostContext, PropertyValue,
    RenderOutcome, RenderPipeline, SelectionCommand, SelectionSink, StaticData,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for tabbar hosts.
#[derive(Debug)]
pub enum Error {
    /// A row color that is not a hex color.
    Color(ColorParseError),
    /// Rejected configuration values.
    Config(Vec<ConfigError>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color(err) => write!(f, "{err}"),
            Self::Config(errors) => {
                f.write_str("invalid configuration:")?;
                for err in errors {
                    write!(f, " {err};")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Color(err) => Some(err),
            Self::Config(errors) => errors
                .first()
                .map(|e| e as &(dyn std::error::Error + 'static)),
        }
    }
}

impl From<ColorParseError> for Error {
    fn from(err: ColorParseError) -> Self {
        Self::Color(err)
    }
}

impl From<Vec<ConfigError>> for Error {
    fn from(errors: Vec<ConfigError>) -> Self {
        Self::Config(errors)
    }
}

/// Standard result type for tabbar APIs.
pub type Result<T> = std::result::Result<T, Error>;

/// Build a row from host values with a hex color (`#rgb`, `#rrggbb`,
/// `#rrggbbaa`).
pub fn row(
    category: impl Into<String>,
    value: f64,
    hex_color: &str,
    identity: impl Into<RowId>,
) -> Result<Row> {
    let color = Color::from_hex(hex_color)?;
    Ok(Row::new(category, value, color, identity))
}

/// Read the configuration from the environment, failing on any rejected
/// value instead of falling back to defaults.
pub fn config_from_env_strict() -> Result<ChartConfig> {
    let parsed = ChartConfig::from_env_with_diagnostics();
    if parsed.errors.is_empty() {
        Ok(parsed.config)
    } else {
        Err(Error::Config(parsed.errors))
    }
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        ChartConfig, ClickTarget, Color, DataView, Error, HostContext, Modifiers, MouseEvent,
        RenderOutcome, RenderPipeline, Result, Row, RowId, SelectionCommand, SelectionSink, Size,
        StaticData, Theme,
    };

    pub use crate::{core, layout, render, runtime};
}

pub use tabbar_core as core;
pub use tabbar_layout as layout;
pub use tabbar_render as render;
pub use tabbar_runtime as runtime;
