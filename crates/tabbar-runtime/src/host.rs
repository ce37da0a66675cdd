#![forbid(unsafe_code)]

//! Host collaborators.
//!
//! The engine never owns data, drawing surfaces, or selection state. A host
//! hands those in through these traits; every method takes `&self`, so a
//! host can serve several in-flight render passes at once.

use std::future::Future;

use tabbar_core::Row;
use tabbar_render::Theme;

use crate::interaction::SelectionCommand;

/// The host's view of the underlying data.
pub trait DataView {
    /// Upstream error messages. Empty when the data is valid.
    fn errors(&self) -> impl Future<Output = Vec<String>>;

    /// Every row in host order, or `None` while the data is unavailable.
    fn all_rows(&self) -> impl Future<Output = Option<Vec<Row>>>;
}

/// The host's rendering context.
pub trait HostContext {
    /// Current foreground and background colors.
    fn theme(&self) -> Theme;

    /// Present upstream errors in place of the chart.
    fn show_error(&self, messages: &[String]);

    /// Remove a previously shown error presentation.
    fn hide_error(&self);

    /// Signalled once per committed render.
    fn render_complete(&self);
}

/// Receives selection ("marking") commands.
pub trait SelectionSink {
    fn apply(&self, command: SelectionCommand);
}

impl<F> SelectionSink for F
where
    F: Fn(SelectionCommand),
{
    fn apply(&self, command: SelectionCommand) {
        self(command);
    }
}

/// A data view over a fixed row set, for hosts that already hold their rows.
#[derive(Debug, Clone, Default)]
pub struct StaticData {
    rows: Option<Vec<Row>>,
    errors: Vec<String>,
}

impl StaticData {
    pub fn new(rows: Vec<Row>) -> Self {
        Self {
            rows: Some(rows),
            errors: Vec::new(),
        }
    }

    /// A view whose rows are not available yet.
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// A view that reports upstream errors.
    pub fn failing<I, S>(errors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: None,
            errors: errors.into_iter().map(Into::into).collect(),
        }
    }
}

impl DataView for StaticData {
    async fn errors(&self) -> Vec<String> {
        self.errors.clone()
    }

    async fn all_rows(&self) -> Option<Vec<Row>> {
        self.rows.clone()
    }
}
