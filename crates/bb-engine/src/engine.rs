//! The `Engine` struct and its cascade loop.

use std::borrow::Borrow;

use bb_core::{BinId, BotId, Chip, Directive, Target};
use tracing::{debug, trace, warn};

use crate::{
    EngineConfig, EngineError, EngineResult, FactoryObserver, FireEvent, NoopObserver, Registry,
};

/// A chip in flight.  `depth` is the depth of the fire that emitted it
/// (0 for a chip coming straight from an input directive).
#[derive(Copy, Clone, Debug)]
struct Delivery {
    chip:  Chip,
    to:    Target,
    depth: u32,
}

// ── Engine ────────────────────────────────────────────────────────────────────

/// Applies directives to a [`Registry`] and drives the resulting cascades.
///
/// The engine is single-threaded and synchronous: [`apply`][Self::apply]
/// returns only once every fire it triggered has finished.  Any error leaves
/// the registry in a consistent but partially simulated state; callers should
/// discard the engine and start over with corrected input.
pub struct Engine<O: FactoryObserver = NoopObserver> {
    registry: Registry,
    config:   EngineConfig,
    observer: O,
    /// Pending deliveries, popped LIFO.
    stack:    Vec<Delivery>,
    fires:    u64,
    applied:  usize,
}

impl Engine<NoopObserver> {
    /// An engine with the default configuration and no observer.
    pub fn new() -> Self {
        Self::from_parts(EngineConfig::default(), NoopObserver)
    }
}

impl Default for Engine<NoopObserver> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: FactoryObserver> Engine<O> {
    /// Assemble an engine.  `config` must already be validated.
    pub(crate) fn from_parts(config: EngineConfig, observer: O) -> Self {
        Self {
            registry: Registry::new(),
            config,
            observer,
            stack:    Vec::new(),
            fires:    0,
            applied:  0,
        }
    }

    // ── Observer ──────────────────────────────────────────────────────────

    /// Swap in an observer of a different type, keeping all simulation state.
    pub fn with_observer<P: FactoryObserver>(self, observer: P) -> Engine<P> {
        Engine {
            registry: self.registry,
            config:   self.config,
            observer,
            stack:    self.stack,
            fires:    self.fires,
            applied:  self.applied,
        }
    }

    /// Replace the observer, returning the previous one.
    pub fn set_observer(&mut self, observer: O) -> O {
        std::mem::replace(&mut self.observer, observer)
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    // ── Results ───────────────────────────────────────────────────────────

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Contents of output bin `bin`, in the order chips arrived.
    pub fn bin_contents(&self, bin: BinId) -> &[Chip] {
        self.registry.bin(bin)
    }

    /// Total fires across all applied directives.
    pub fn fires(&self) -> u64 {
        self.fires
    }

    /// Number of directives applied successfully.
    pub fn directives_applied(&self) -> usize {
        self.applied
    }

    // ── Driving ───────────────────────────────────────────────────────────

    /// Apply every directive in order, stopping at the first error.
    pub fn run<I, D>(&mut self, directives: I) -> EngineResult<()>
    where
        I: IntoIterator<Item = D>,
        D: Borrow<Directive>,
    {
        for (index, directive) in directives.into_iter().enumerate() {
            let directive = directive.borrow();
            if let Err(e) = self.apply(directive) {
                warn!(index, %directive, error = %e, "directive failed");
                return Err(e);
            }
        }
        Ok(())
    }

    /// Apply one directive and run its cascade to completion.
    pub fn apply(&mut self, directive: &Directive) -> EngineResult<()> {
        self.stack.clear();
        match *directive {
            Directive::Input { value, bot } => {
                self.stack.push(Delivery { chip: value, to: Target::Bot(bot), depth: 0 });
            }
            Directive::Route { bot, low, high } => {
                let armed = self.registry.bot(bot).bind(low, high)?;
                debug!(%bot, %low, %high, armed, "routing bound");
                if armed {
                    self.fire(bot, 0)?;
                }
            }
        }
        self.cascade()?;

        self.observer.on_directive_applied(self.applied, directive);
        self.applied += 1;
        Ok(())
    }

    /// Deliver pending chips until the stack is empty.
    fn cascade(&mut self) -> EngineResult<()> {
        while let Some(Delivery { chip, to, depth }) = self.stack.pop() {
            trace!(%chip, %to, depth, "delivering");
            match to {
                Target::Bin(bin) => {
                    self.registry.bin_mut(bin).push(chip);
                    self.observer.on_bin_append(bin, chip);
                }
                Target::Bot(bot) => {
                    if self.registry.bot(bot).deposit(chip)? {
                        self.fire(bot, depth)?;
                    }
                }
            }
        }
        Ok(())
    }

    /// Fire an armed bot whose triggering chip came from depth `parent`.
    ///
    /// Pushes low then high so the high chip's cascade completes first.
    pub(crate) fn fire(&mut self, bot: BotId, parent: u32) -> EngineResult<()> {
        let depth = parent.saturating_add(1);
        let limit = self.config.max_cascade_depth;
        if depth > limit {
            return Err(EngineError::CycleSuspected { bot, depth, limit });
        }
        let Some(fire) = self.registry.bot(bot).take_fire() else {
            return Ok(());
        };
        self.fires += 1;
        debug!(%bot, low = %fire.low, high = %fire.high, depth, "bot fired");

        self.observer.on_fire(&FireEvent {
            bot,
            low: fire.low,
            high: fire.high,
            depth,
        });

        self.stack.push(Delivery { chip: fire.low, to: fire.low_target, depth });
        self.stack.push(Delivery { chip: fire.high, to: fire.high_target, depth });
        Ok(())
    }
}
