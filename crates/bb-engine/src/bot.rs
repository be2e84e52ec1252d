//! A single bot: up to two chips and at most one routing directive.
//!
//! # States
//!
//! | State     | Chips | Routing | Next                                  |
//! |-----------|-------|---------|---------------------------------------|
//! | `Empty`   | 0     | any     | deposit → `Holding`                   |
//! | `Holding` | 1     | any     | deposit → `Ready` or `Armed`          |
//! | `Ready`   | 2     | none    | bind → `Armed`                        |
//! | `Armed`   | 2     | bound   | fire → `Empty`                        |
//!
//! Firing is atomic from the outside: [`Bot::take_fire`] drains both chips in
//! one call and the bot is `Empty` again before anything is dispatched.
//! Routing stays bound after a fire, so a refilled bot fires again.

use bb_core::{BotId, Chip, Target};

use crate::{EngineError, EngineResult};

/// Observable state of a [`Bot`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum BotState {
    Empty,
    Holding,
    Ready,
    Armed,
}

/// Destinations bound to a bot by a route directive.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Routing {
    pub low:  Target,
    pub high: Target,
}

/// The result of a fire: both chips, ordered, with where each one goes.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Fire {
    pub low:         Chip,
    pub high:        Chip,
    pub low_target:  Target,
    pub high_target: Target,
}

#[derive(Clone, Debug)]
pub struct Bot {
    id:         BotId,
    /// Only `held[..len]` is meaningful.
    held:       [Chip; 2],
    len:        u8,
    routing:    Option<Routing>,
    fire_count: u32,
}

impl Bot {
    pub fn new(id: BotId) -> Self {
        Self {
            id,
            held:       [Chip(0); 2],
            len:        0,
            routing:    None,
            fire_count: 0,
        }
    }

    #[inline]
    pub fn id(&self) -> BotId {
        self.id
    }

    /// Chips currently held, in arrival order.
    #[inline]
    pub fn chips(&self) -> &[Chip] {
        &self.held[..self.len as usize]
    }

    #[inline]
    pub fn routing(&self) -> Option<Routing> {
        self.routing
    }

    /// How many times this bot has fired.
    #[inline]
    pub fn fire_count(&self) -> u32 {
        self.fire_count
    }

    pub fn state(&self) -> BotState {
        match (self.len, self.routing.is_some()) {
            (0, _)     => BotState::Empty,
            (1, _)     => BotState::Holding,
            (_, false) => BotState::Ready,
            (_, true)  => BotState::Armed,
        }
    }

    /// Add a chip.  Returns `true` if the bot is now `Armed`.
    ///
    /// # Errors
    ///
    /// [`EngineError::Overfill`] if the bot already holds two chips.  The
    /// bot is left unchanged.
    pub fn deposit(&mut self, value: Chip) -> EngineResult<bool> {
        if self.len == 2 {
            return Err(EngineError::Overfill {
                bot:  self.id,
                held: self.held,
                value,
            });
        }
        self.held[self.len as usize] = value;
        self.len += 1;
        Ok(self.state() == BotState::Armed)
    }

    /// Attach routing.  Returns `true` if the bot is now `Armed`.
    ///
    /// # Errors
    ///
    /// [`EngineError::DoubleBinding`] if routing is already bound, even when
    /// the new routing is identical.
    pub fn bind(&mut self, low: Target, high: Target) -> EngineResult<bool> {
        if self.routing.is_some() {
            return Err(EngineError::DoubleBinding { bot: self.id });
        }
        self.routing = Some(Routing { low, high });
        Ok(self.state() == BotState::Armed)
    }

    /// Drain both chips if `Armed`; otherwise return `None` and change nothing.
    pub fn take_fire(&mut self) -> Option<Fire> {
        if self.state() != BotState::Armed {
            return None;
        }
        let routing = self.routing?;
        let [a, b] = self.held;
        self.len = 0;
        self.fire_count += 1;
        Some(Fire {
            low:         a.min(b),
            high:        a.max(b),
            low_target:  routing.low,
            high_target: routing.high,
        })
    }
}
