//! Interaction layer: user actions in, state transitions out
//!
//! The renderer never mutates [`GameState`] directly. It turns input into an
//! [`Action`], hands it to [`Interaction::dispatch`], and learns about changes
//! through listeners registered with [`Interaction::on_change`].

use tracing::{debug, info};

use crate::error::Result;

use super::state::{GameState, MoveOutcome};

/// A discrete user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Click on a board cell (0-8)
    Play(usize),
    /// Click on a history entry
    JumpTo(usize),
    /// Click on the "Reverse list" button
    ToggleOrder,
}

type Listener = Box<dyn FnMut(&GameState, &Action)>;

/// Owner of the single game state and its change listeners
pub struct Interaction {
    state: GameState,
    listeners: Vec<Listener>,
}

impl Interaction {
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            listeners: Vec::new(),
        }
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Register a callback run after every action that changed the state
    pub fn on_change(&mut self, listener: impl FnMut(&GameState, &Action) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Apply an action
    ///
    /// Returns `Ok(true)` if the state changed (listeners have been notified),
    /// `Ok(false)` for a no-op such as a rejected move or a jump to the step
    /// already selected.
    pub fn dispatch(&mut self, action: Action) -> Result<bool> {
        let changed = match action {
            Action::Play(cell) => match self.state.apply_move(cell)? {
                MoveOutcome::Placed { cell, mark } => {
                    info!(cell, %mark, step = self.state.current_step(), "Mark placed");
                    true
                }
                MoveOutcome::Rejected(reason) => {
                    debug!(cell, ?reason, "Click ignored");
                    false
                }
            },
            Action::JumpTo(step) => {
                if step == self.state.current_step() {
                    false
                } else {
                    self.state.jump_to(step)?;
                    info!(step, next = %self.state.next_mark(), "Jumped to step");
                    true
                }
            }
            Action::ToggleOrder => {
                self.state.toggle_order();
                debug!(order = ?self.state.list_order(), "Move list reversed");
                true
            }
        };

        if changed {
            for listener in &mut self.listeners {
                listener(&self.state, &action);
            }
        }

        Ok(changed)
    }
}

impl Default for Interaction {
    fn default() -> Self {
        Self::new(GameState::new())
    }
}
