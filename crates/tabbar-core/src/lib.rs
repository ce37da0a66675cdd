#![forbid(unsafe_code)]

//! Core: row model, colors, geometry, and pointer events.
//!
//! Everything here is shared by the layout, render, and runtime crates. The
//! types are plain values; nothing in this crate owns render-pass state.

pub mod color;
pub mod event;
pub mod geometry;
pub mod logging;
pub mod row;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};

pub use color::{Color, ColorParseError};
pub use event::{Modifiers, MouseButton, MouseEvent, MouseEventKind};
pub use geometry::{Rect, Size};
pub use row::{Row, RowId};
