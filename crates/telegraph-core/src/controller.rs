//! Drag interaction state machine.
//!
//! The controller is platform-free: it learns the dial geometry through a
//! [`DialSurface`] and rings through a [`BellCue`], both handed in by the
//! front-end. Input adapters feed it [`DialEvent`]s in the order the host
//! delivers them.

use crate::dial::{read_dial, DialRect, DialReading};
use crate::error::BellError;
use crate::position::TelegraphPosition;
use glam::Vec2;

/// Anything that can report where the dial currently is on screen.
pub trait DialSurface {
    /// `None` while the dial is not mounted or not laid out.
    fn measure(&self) -> Option<DialRect>;
}

impl DialSurface for DialRect {
    fn measure(&self) -> Option<DialRect> {
        Some(*self)
    }
}

impl DialSurface for Option<DialRect> {
    fn measure(&self) -> Option<DialRect> {
        *self
    }
}

/// One-shot audio cue played when the lever lands on a new order.
pub trait BellCue {
    /// Rewind to the start and play. Overlapping calls restart playback.
    fn reset_and_play(&mut self) -> Result<(), BellError>;
}

/// A bell that never rings.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentBell;

impl BellCue for SilentBell {
    fn reset_and_play(&mut self) -> Result<(), BellError> {
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DialEvent {
    Press(Vec2),
    Move(Vec2),
    Release,
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DialOutcome {
    Ignored,
    /// A session opened but the dial could not be measured.
    Grabbed,
    Moved {
        angle: f32,
    },
    Snapped {
        from: TelegraphPosition,
        to: TelegraphPosition,
        angle: f32,
    },
    Released,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteractionState {
    pub position: TelegraphPosition,
    pub angle: f32,
    pub dragging: bool,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            position: TelegraphPosition::Stop,
            angle: TelegraphPosition::Stop.angle(),
            dragging: false,
        }
    }
}

pub struct DragController<S, B> {
    surface: S,
    bell: B,
    state: InteractionState,
}

impl<S: DialSurface, B: BellCue> DragController<S, B> {
    pub fn new(surface: S, bell: B) -> Self {
        Self {
            surface,
            bell,
            state: InteractionState::default(),
        }
    }

    pub fn handle(&mut self, event: DialEvent) -> DialOutcome {
        match event {
            DialEvent::Press(pointer) => {
                if !self.state.dragging {
                    self.state.dragging = true;
                    log::debug!("[telegraph] drag start at ({:.1},{:.1})", pointer.x, pointer.y);
                }
                self.sample(pointer).unwrap_or(DialOutcome::Grabbed)
            }
            DialEvent::Move(pointer) => {
                if !self.state.dragging {
                    return DialOutcome::Ignored;
                }
                self.sample(pointer).unwrap_or(DialOutcome::Ignored)
            }
            DialEvent::Release | DialEvent::Cancel => {
                if !self.state.dragging {
                    return DialOutcome::Ignored;
                }
                self.state.dragging = false;
                log::debug!(
                    "[telegraph] drag end ({:?}) at {}",
                    event,
                    self.state.position.key()
                );
                DialOutcome::Released
            }
        }
    }

    #[inline]
    pub fn press(&mut self, pointer: Vec2) -> DialOutcome {
        self.handle(DialEvent::Press(pointer))
    }

    #[inline]
    pub fn move_to(&mut self, pointer: Vec2) -> DialOutcome {
        self.handle(DialEvent::Move(pointer))
    }

    #[inline]
    pub fn release(&mut self) -> DialOutcome {
        self.handle(DialEvent::Release)
    }

    #[inline]
    pub fn cancel(&mut self) -> DialOutcome {
        self.handle(DialEvent::Cancel)
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn position(&self) -> TelegraphPosition {
        self.state.position
    }

    pub fn angle(&self) -> f32 {
        self.state.angle
    }

    pub fn is_dragging(&self) -> bool {
        self.state.dragging
    }

    pub fn label(&self) -> &'static str {
        self.state.position.label()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn bell(&self) -> &B {
        &self.bell
    }

    pub fn into_parts(self) -> (S, B) {
        (self.surface, self.bell)
    }

    // None when geometry is unavailable; state is left untouched.
    fn sample(&mut self, pointer: Vec2) -> Option<DialOutcome> {
        let rect = self.surface.measure()?;
        let DialReading { angle, position } = read_dial(pointer, &rect)?;
        self.state.angle = angle;

        let from = self.state.position;
        if position == from {
            return Some(DialOutcome::Moved { angle });
        }
        self.state.position = position;
        log::debug!("[telegraph] {} -> {} ({:.1} deg)", from.key(), position.key(), angle);
        if let Err(e) = self.bell.reset_and_play() {
            log::debug!("[telegraph] bell suppressed: {}", e);
        }
        Some(DialOutcome::Snapped {
            from,
            to: position,
            angle,
        })
    }
}
