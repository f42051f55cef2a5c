//! Redraw session: regenerates the decoration on mount and resize and notifies listeners.

use rand::Rng;
use rand::rngs::StdRng;

use crate::config::CurveConfig;
use crate::draw::{Drawing, draw};
use crate::foundation::core::Canvas;
use crate::foundation::error::StonkResult;

/// Handle returned by [`CurveSession::on_redraw`], used to unregister the callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type RedrawListener = Box<dyn FnMut(&Drawing)>;

/// Owns a configuration and a random source and produces a fresh drawing per layout event.
///
/// Each redraw is independent of the previous one; listeners receive the new drawing right after
/// it is generated.
pub struct CurveSession<R: Rng = StdRng> {
    config: CurveConfig,
    rng: R,
    listeners: Vec<(ListenerId, RedrawListener)>,
    next_listener: u64,
    current: Option<Drawing>,
}

impl CurveSession<StdRng> {
    /// Build a session using [`CurveConfig::rng`] as its random source.
    pub fn new(config: CurveConfig) -> StonkResult<Self> {
        let rng = config.rng();
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> CurveSession<R> {
    /// Build a session with an explicit random source.
    pub fn with_rng(config: CurveConfig, rng: R) -> StonkResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rng,
            listeners: Vec::new(),
            next_listener: 0,
            current: None,
        })
    }

    /// Active configuration; its canvas tracks the latest resize.
    pub fn config(&self) -> &CurveConfig {
        &self.config
    }

    /// Most recent drawing, if the session has drawn yet.
    pub fn current(&self) -> Option<&Drawing> {
        self.current.as_ref()
    }

    /// Register a callback invoked after every redraw.
    pub fn on_redraw<F>(&mut self, f: F) -> ListenerId
    where
        F: FnMut(&Drawing) + 'static,
    {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(f)));
        id
    }

    /// Unregister a callback. Returns `false` if `id` was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Initial draw for the configured canvas.
    pub fn mount(&mut self) -> StonkResult<&Drawing> {
        self.redraw()
    }

    /// Adopt a new canvas size and redraw. An invalid size leaves the session untouched.
    pub fn resize(&mut self, width: f64, height: f64) -> StonkResult<&Drawing> {
        let canvas = Canvas::new(width, height)?;
        self.config.canvas = canvas;
        tracing::debug!(width, height, "canvas resized");
        self.redraw()
    }

    fn redraw(&mut self) -> StonkResult<&Drawing> {
        let drawing = draw(&self.config, &mut self.rng)?;
        for (_, listener) in &mut self.listeners {
            listener(&drawing);
        }
        Ok(self.current.insert(drawing))
    }
}

#[cfg(test)]
#[path = "../tests/unit/session.rs"]
mod tests;
