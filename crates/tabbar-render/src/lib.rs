#![forbid(unsafe_code)]

//! Render kernel: scene description, cell canvas, and hit testing.
//!
//! A render pass turns a [`ChartLayout`](tabbar_layout::ChartLayout) into a
//! [`Scene`] with [`build_scene`], then optionally draws it into a
//! [`Canvas`] with the [`Rasterizer`]. The canvas keeps a [`HitGrid`] so
//! pointer positions resolve back to the row identity that was drawn there.

pub mod buffer;
pub mod hit;
pub mod raster;
pub mod scene;

pub use buffer::{Buffer, Cell, display_width};
pub use hit::{ClickTarget, HitGrid, HitRegion};
pub use raster::{Canvas, GlyphMode, Rasterizer};
pub use scene::{AxisLine, BarRow, Scene, SceneConfig, SegmentShape, Theme, build_scene};
