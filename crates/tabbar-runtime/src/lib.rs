#![forbid(unsafe_code)]

//! Runtime: host collaborators, configuration, and the render pipeline.
//!
//! # Key Components
//!
//! - [`RenderPipeline`] - Generation counter and atomically committed scene
//! - [`DataView`] / [`HostContext`] - What the host provides
//! - [`SelectionSink`] - Where selection commands go
//! - [`ChartConfig`] - Display flags, axis mode, environment overrides
//! - [`map_click`] - The interaction mapper
//!
//! # How it fits in the system
//! The layout and render crates are pure: rows in, scene out. This crate
//! adds the only state that survives between passes (the latest generation
//! and the committed scene) and wires pointer input back to host selection.

pub mod config;
pub mod host;
pub mod interaction;
pub mod pipeline;

pub use config::{AxisMode, ChartConfig, ConfigError, ConfigParse, DisplayFlag, PropertyValue};
pub use host::{DataView, HostContext, SelectionSink, StaticData};
pub use interaction::{SelectionCommand, map_click};
pub use pipeline::{CommittedScene, RenderOutcome, RenderPipeline, RenderTicket};
