#![forbid(unsafe_code)]

//! Render pipeline: generation tracking and atomic commit.
//!
//! Every host notification starts a render pass. A pass takes the next
//! generation number, waits for the host's errors and rows, and then builds
//! its scene off-lock. It commits only if no newer pass has started in the
//! meantime; otherwise its result is dropped without touching the host.
//!
//! ```text
//!   begin ──► errors? ──yes──► current? ──► clear + show_error
//!               │ no
//!               ▼
//!           hide_error (if current)
//!               │
//!           rows? ──none──► leave committed scene as is
//!               │
//!               ▼
//!     layout + scene + canvas   (no lock held)
//!               │
//!     lock ─► generation still latest? ──no──► drop (stale)
//!               │ yes
//!          swap committed scene ─► unlock ─► render_complete
//! ```
//!
//! The committed scene is shared as an `Arc`, so click handlers always read
//! one consistent pass: rows, identity index, and hit grid together.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tabbar_core::{Modifiers, MouseEvent, Row, RowId, Size};
use tabbar_layout::layout;
use tabbar_render::{Canvas, ClickTarget, Rasterizer, Scene, Theme, build_scene};
use tracing::{debug, info, info_span, warn};

use crate::config::ChartConfig;
use crate::host::{DataView, HostContext, SelectionSink};
use crate::interaction::{SelectionCommand, map_click};

/// The result of one committed pass.
#[derive(Debug)]
pub struct CommittedScene {
    generation: u64,
    rows: Vec<Row>,
    index: HashMap<RowId, usize>,
    scene: Scene,
    canvas: Canvas,
}

impl CommittedScene {
    /// Run layout, scene building, and rasterization for one pass.
    pub fn build(
        generation: u64,
        rows: Vec<Row>,
        theme: &Theme,
        config: &ChartConfig,
        size: Size,
    ) -> Self {
        let chart = layout(&rows);
        let scene = build_scene(&chart, theme, &config.scene_config(), generation);
        let canvas = Rasterizer::new()
            .glyph_mode(config.glyph_mode)
            .rasterize(&scene, size);

        let mut index = HashMap::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            if index.contains_key(&row.identity) {
                warn!(identity = %row.identity, "duplicate row identity; first row wins");
                continue;
            }
            index.insert(row.identity.clone(), i);
        }

        Self {
            generation,
            rows,
            index,
            scene,
            canvas,
        }
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Rows of this pass, in host order.
    #[inline]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[inline]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    #[inline]
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Look up a row by identity.
    #[must_use]
    pub fn row(&self, identity: &RowId) -> Option<&Row> {
        self.index.get(identity).and_then(|&i| self.rows.get(i))
    }
}

/// Handle for one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderTicket {
    generation: u64,
}

impl RenderTicket {
    #[inline]
    pub fn generation(self) -> u64 {
        self.generation
    }
}

/// How a render pass ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The pass replaced the committed scene.
    Committed {
        generation: u64,
        groups: usize,
        rows: usize,
    },
    /// A newer pass started first; nothing changed.
    Stale { generation: u64, latest: u64 },
    /// The host reported errors; the committed scene was cleared.
    Error {
        generation: u64,
        messages: Vec<String>,
    },
    /// Rows were not available; the committed scene was kept.
    Unavailable { generation: u64 },
}

impl RenderOutcome {
    #[must_use]
    pub fn generation(&self) -> u64 {
        match self {
            Self::Committed { generation, .. }
            | Self::Stale { generation, .. }
            | Self::Error { generation, .. }
            | Self::Unavailable { generation } => *generation,
        }
    }

    #[must_use]
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed { .. })
    }
}

/// Owns the generation counter and the committed scene.
#[derive(Debug, Default)]
pub struct RenderPipeline {
    generation: AtomicU64,
    committed: Mutex<Option<Arc<CommittedScene>>>,
}

impl RenderPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Option<Arc<CommittedScene>>> {
        self.committed.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Latest generation handed out. Zero before the first pass.
    #[inline]
    pub fn latest_generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Start a pass. Any pass begun earlier becomes stale.
    pub fn begin(&self) -> RenderTicket {
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        debug!(generation, "render begin");
        RenderTicket { generation }
    }

    /// Whether `ticket` is still the latest pass.
    #[inline]
    pub fn is_current(&self, ticket: RenderTicket) -> bool {
        ticket.generation == self.latest_generation()
    }

    /// The committed scene, if any.
    #[must_use]
    pub fn committed(&self) -> Option<Arc<CommittedScene>> {
        self.lock().clone()
    }

    fn stale(&self, ticket: RenderTicket) -> RenderOutcome {
        let latest = self.latest_generation();
        debug!(generation = ticket.generation, latest, "discarding stale render");
        RenderOutcome::Stale {
            generation: ticket.generation,
            latest,
        }
    }

    /// Commit rows for `ticket`, unless a newer pass has started.
    pub fn finish<H: HostContext>(
        &self,
        ticket: RenderTicket,
        rows: Vec<Row>,
        host: &H,
        config: &ChartConfig,
        size: Size,
    ) -> RenderOutcome {
        if !self.is_current(ticket) {
            return self.stale(ticket);
        }

        let built = CommittedScene::build(ticket.generation, rows, &host.theme(), config, size);
        let groups = built.scene().rows.len();
        let row_count = built.rows().len();

        {
            let mut slot = self.lock();
            if !self.is_current(ticket) {
                drop(slot);
                return self.stale(ticket);
            }
            *slot = Some(Arc::new(built));
        }

        info!(
            generation = ticket.generation,
            groups,
            rows = row_count,
            "render committed"
        );
        host.render_complete();
        RenderOutcome::Committed {
            generation: ticket.generation,
            groups,
            rows: row_count,
        }
    }

    /// Record upstream errors for `ticket`: clear the committed scene and
    /// ask the host to present them.
    pub fn fail<H: HostContext>(
        &self,
        ticket: RenderTicket,
        messages: Vec<String>,
        host: &H,
    ) -> RenderOutcome {
        {
            let mut slot = self.lock();
            if !self.is_current(ticket) {
                drop(slot);
                return self.stale(ticket);
            }
            *slot = None;
        }

        warn!(
            generation = ticket.generation,
            count = messages.len(),
            "upstream data errors"
        );
        host.show_error(&messages);
        RenderOutcome::Error {
            generation: ticket.generation,
            messages,
        }
    }

    /// Run one full pass against the host.
    pub async fn render<D, H>(
        &self,
        data: &D,
        host: &H,
        config: &ChartConfig,
        size: Size,
    ) -> RenderOutcome
    where
        D: DataView,
        H: HostContext,
    {
        let ticket = self.begin();
        let span = info_span!("tabbar.render", generation = ticket.generation);

        let errors = data.errors().await;
        if !errors.is_empty() {
            return span.in_scope(|| self.fail(ticket, errors, host));
        }
        if self.is_current(ticket) {
            host.hide_error();
        }

        let Some(rows) = data.all_rows().await else {
            let _guard = span.enter();
            if !self.is_current(ticket) {
                return self.stale(ticket);
            }
            debug!(generation = ticket.generation, "rows unavailable; keeping committed scene");
            return RenderOutcome::Unavailable {
                generation: ticket.generation,
            };
        };

        span.in_scope(|| self.finish(ticket, rows, host, config, size))
    }

    /// Map a resolved target against the committed pass and forward the
    /// command to `sink`.
    pub fn handle_target<S: SelectionSink>(
        &self,
        target: &ClickTarget,
        modifiers: Modifiers,
        sink: &S,
    ) -> Option<SelectionCommand> {
        let committed = self.committed()?;
        let command = map_click(&committed, target, modifiers)?;
        debug!(
            command = command.kind(),
            rows = command.rows().len(),
            "selection command"
        );
        sink.apply(command.clone());
        Some(command)
    }

    /// Hit-test a pointer event on the committed canvas and handle it.
    ///
    /// Anything but a left-button press is ignored.
    pub fn handle_mouse<S: SelectionSink>(
        &self,
        event: &MouseEvent,
        sink: &S,
    ) -> Option<SelectionCommand> {
        if !event.is_click() {
            return None;
        }
        let committed = self.committed()?;
        let target = committed.canvas().target_at(event.x, event.y)?;
        self.handle_target(&target, event.modifiers, sink)
    }
}
