#![forbid(unsafe_code)]

//! Interaction mapper: pointer targets to selection commands.
//!
//! | Target  | Modifier | Command             |
//! |---------|----------|---------------------|
//! | segment | none     | `Replace([row])`    |
//! | segment | shift    | `Add([row])`        |
//! | bar     | none     | `Clear`             |
//! | bar     | shift    | nothing             |
//!
//! A segment hit consumes the event; the bar behind it never sees it. Targets
//! drawn by an older pass, and identities the committed pass does not know,
//! resolve to nothing.

use tabbar_core::{Modifiers, Row};
use tabbar_render::ClickTarget;
use tracing::{debug, trace};

use crate::pipeline::CommittedScene;

/// A selection request for the host.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionCommand {
    /// Select exactly these rows.
    Replace(Vec<Row>),
    /// Add these rows to the current selection.
    Add(Vec<Row>),
    /// Clear the selection.
    Clear,
}

impl SelectionCommand {
    /// Short name for logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Replace(_) => "replace",
            Self::Add(_) => "add",
            Self::Clear => "clear",
        }
    }

    /// Rows carried by the command.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        match self {
            Self::Replace(rows) | Self::Add(rows) => rows,
            Self::Clear => &[],
        }
    }
}

/// Map a click on `target` to a command against the committed pass.
#[must_use]
pub fn map_click(
    committed: &CommittedScene,
    target: &ClickTarget,
    modifiers: Modifiers,
) -> Option<SelectionCommand> {
    if target.generation() != committed.generation() {
        debug!(
            target_generation = target.generation(),
            committed = committed.generation(),
            "ignoring click on a stale target"
        );
        return None;
    }

    let command = match target {
        ClickTarget::Segment { identity, .. } => {
            let Some(row) = committed.row(identity) else {
                debug!(identity = %identity, "click identity not in committed rows");
                return None;
            };
            if modifiers.is_additive() {
                SelectionCommand::Add(vec![row.clone()])
            } else {
                SelectionCommand::Replace(vec![row.clone()])
            }
        }
        ClickTarget::Background { .. } => {
            if modifiers.is_additive() {
                trace!("additive background click ignored");
                return None;
            }
            SelectionCommand::Clear
        }
    };
    Some(command)
}
