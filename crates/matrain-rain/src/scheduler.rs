//! Fixed-delay tick loop.

use std::time::{Duration, Instant};

use matrain_core::RainError;
use rand::Rng;

use crate::engine::{RainEngine, TICK_INTERVAL};
use crate::surface::Surface;

/// Notifications delivered by the host between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// The surface's layout size may have changed.
    Resized,
    /// The host wants the animation to end.
    Quit,
}

/// Environment that owns the surface and delivers its events.
pub trait Host {
    type Surface: Surface;
    type Error: From<RainError>;

    fn surface(&mut self) -> &mut Self::Surface;

    /// Show whatever the last tick painted.
    fn present(&mut self) -> Result<(), Self::Error>;

    /// Block for at most `timeout` waiting for the next event. Returns
    /// `None` once the timeout has elapsed.
    fn wait(&mut self, timeout: Duration) -> Result<Option<HostEvent>, Self::Error>;
}

/// Start the engine on the host's surface and tick until stopped.
///
/// Each tick is followed by a full [`TICK_INTERVAL`] of waiting, during
/// which resize events relayout the grid. The loop ends when the engine's
/// stop handle fires, the host sends [`HostEvent::Quit`], or the surface
/// is disposed.
pub fn run<H: Host, R: Rng>(engine: &mut RainEngine<R>, host: &mut H) -> Result<(), H::Error> {
    engine.start(host.surface())?;
    let stop = engine.stop_handle();

    loop {
        engine.tick(host.surface())?;
        host.present()?;

        let deadline = Instant::now() + TICK_INTERVAL;
        while !stop.is_stopped() {
            match host.wait(deadline.saturating_duration_since(Instant::now()))? {
                Some(HostEvent::Resized) => {
                    if host.surface().layout_size().is_some() {
                        engine.handle_resize(host.surface())?;
                    }
                }
                Some(HostEvent::Quit) => stop.stop(),
                None => break,
            }
        }

        if stop.is_stopped() {
            log::info!("rain stopped after {} ticks", engine.ticks());
            break;
        }
        if host.surface().layout_size().is_none() {
            log::warn!("surface disposed, not scheduling further ticks");
            engine.stop();
            break;
        }
    }
    Ok(())
}
