//! Rain engine state and the per-tick paint step.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use matrain_core::{EngineConfig, Palette, RainError};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::glyphs::random_glyph;
use crate::layout::{Column, recompute_layout};
use crate::surface::{Font, PixelRect, Size, Surface};

/// Delay between the end of one tick and the start of the next.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Lifecycle of the animation loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Constructed, not yet started.
    Idle,
    /// Ticking.
    Running,
    /// Stopped for good, either explicitly or because the surface went away.
    Stopped,
}

/// Cancellation token for a running engine.
///
/// Clones share the same flag, so a handle can be passed to whatever owns
/// the surface's teardown.
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    /// Ask the loop to stop before its next tick.
    pub fn stop(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Matrix rain engine.
///
/// Owns the column grid, the decoded colors and the random source. All
/// drawing goes through a [`Surface`] passed in by the caller.
#[derive(Debug)]
pub struct RainEngine<R = StdRng> {
    tile_size: u32,
    fade_factor: f32,
    palette: Palette,
    columns: Vec<Column>,
    /// Surface height in tiles, rounded up.
    max_stack_height: u32,
    state: LoopState,
    stop: StopHandle,
    rng: R,
    /// Ticks painted since start.
    ticks: u64,
}

impl RainEngine<StdRng> {
    /// Create an engine seeded from the OS.
    ///
    /// Fails if the tile size, fade factor or either color is invalid.
    pub fn new(config: &EngineConfig) -> Result<Self, RainError> {
        Self::with_rng(config, StdRng::from_entropy())
    }
}

impl<R: Rng> RainEngine<R> {
    /// Create an engine drawing from the given random source.
    pub fn with_rng(config: &EngineConfig, rng: R) -> Result<Self, RainError> {
        let palette = config.validate()?;
        Ok(Self {
            tile_size: config.tile_size,
            fade_factor: config.fade_factor,
            palette,
            columns: Vec::new(),
            max_stack_height: 0,
            state: LoopState::Idle,
            stop: StopHandle::default(),
            rng,
            ticks: 0,
        })
    }

    /// Lay out the grid for the surface's current size and enter
    /// [`LoopState::Running`].
    pub fn start<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<(), RainError> {
        if self.state() != LoopState::Idle {
            return Err(RainError::AlreadyStarted);
        }
        self.sync_surface_size(surface)?;
        self.state = LoopState::Running;
        log::info!(
            "rain started: {} columns, tile {}px, fade {}",
            self.columns.len(),
            self.tile_size,
            self.fade_factor
        );
        Ok(())
    }

    /// React to a resize notification by re-reading the surface size and
    /// rebuilding the grid. Ignored unless the loop is running.
    pub fn handle_resize<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<(), RainError> {
        if self.state() != LoopState::Running {
            log::trace!("resize ignored in state {:?}", self.state());
            return Ok(());
        }
        self.sync_surface_size(surface)
    }

    /// Replace every column with a fresh grid for `size`.
    pub fn relayout(&mut self, size: Size) {
        let layout = recompute_layout(size.width, size.height, self.tile_size, &mut self.rng);
        log::debug!(
            "relayout {}x{}: {} columns, max stack height {}",
            size.width,
            size.height,
            layout.columns.len(),
            layout.max_stack_height
        );
        self.columns = layout.columns;
        self.max_stack_height = layout.max_stack_height;
    }

    /// Paint one frame and advance every column.
    ///
    /// Does nothing unless the loop is running. Fails with
    /// [`RainError::SurfaceUnavailable`] if the surface has been disposed.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<(), RainError> {
        if self.state() != LoopState::Running {
            return Ok(());
        }
        if surface.layout_size().is_none() {
            return Err(RainError::SurfaceUnavailable);
        }

        let Palette { background, font } = self.palette;
        surface.fill_rect(
            PixelRect::covering(surface.buffer_size()),
            background.with_alpha(self.fade_factor),
        );
        surface.set_text_style(Font::monospace(self.tile_size.saturating_sub(2)), font);

        for column in &mut self.columns {
            let glyph = random_glyph(&mut self.rng);
            let y = column
                .stack_counter
                .saturating_mul(self.tile_size)
                .saturating_add(self.tile_size);
            surface.fill_text(glyph, column.x, y);
            column.advance(self.max_stack_height, &mut self.rng);
        }

        self.ticks += 1;
        log::trace!("tick {} drew {} glyphs", self.ticks, self.columns.len());
        Ok(())
    }

    /// Stop the loop. Further ticks are no-ops.
    pub fn stop(&mut self) {
        self.stop.stop();
        self.state = LoopState::Stopped;
    }

    /// A handle that stops this engine from elsewhere.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    pub fn state(&self) -> LoopState {
        if self.stop.is_stopped() {
            LoopState::Stopped
        } else {
            self.state
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn max_stack_height(&self) -> u32 {
        self.max_stack_height
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    pub fn fade_factor(&self) -> f32 {
        self.fade_factor
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    /// Ticks painted since start.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Mirror the host-assigned size onto the buffer and relayout.
    fn sync_surface_size<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<(), RainError> {
        let size = surface.layout_size().ok_or(RainError::SurfaceUnavailable)?;
        surface.set_buffer_size(size);
        self.relayout(size);
        Ok(())
    }
}
