//! Factory observer trait for inspecting fires without touching dispatch.

use bb_core::{BinId, BotId, Chip, Directive};

/// One bot firing.  Values are always reported as `(low, high)`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FireEvent {
    pub bot:   BotId,
    pub low:   Chip,
    pub high:  Chip,
    /// Position of this fire in its cascade; 1 for a fire triggered directly
    /// by a directive.
    pub depth: u32,
}

/// Callbacks invoked by [`Engine`][crate::Engine] while it applies directives.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Observers see values only; they have no
/// access to the registry and cannot alter a run.
///
/// Any `FnMut(&FireEvent)` closure is an observer:
///
/// ```rust,ignore
/// let mut engine = Engine::new().with_observer(|e: &FireEvent| {
///     println!("{} compared {} and {}", e.bot, e.low, e.high);
/// });
/// ```
pub trait FactoryObserver {
    /// Called exactly once per fire, after the bot has been drained and
    /// before either chip is delivered.
    fn on_fire(&mut self, _event: &FireEvent) {}

    /// Called for every chip appended to an output bin.
    fn on_bin_append(&mut self, _bin: BinId, _chip: Chip) {}

    /// Called after a directive and its whole cascade completed.
    ///
    /// `index` counts successfully applied directives from 0.
    fn on_directive_applied(&mut self, _index: usize, _directive: &Directive) {}
}

impl<F: FnMut(&FireEvent)> FactoryObserver for F {
    fn on_fire(&mut self, event: &FireEvent) {
        self(event)
    }
}

/// A [`FactoryObserver`] that does nothing.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopObserver;

impl FactoryObserver for NoopObserver {}

/// Records every fire in order.
///
/// Answers questions such as "which bot compared 17 and 61?" after a run.
#[derive(Clone, Debug, Default)]
pub struct FireLog {
    events: Vec<FireEvent>,
}

impl FireLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[FireEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The first bot that fired holding exactly `a` and `b`, in either order.
    pub fn bot_comparing(&self, a: Chip, b: Chip) -> Option<BotId> {
        let (low, high) = (a.min(b), a.max(b));
        self.events
            .iter()
            .find(|e| e.low == low && e.high == high)
            .map(|e| e.bot)
    }
}

impl FactoryObserver for FireLog {
    fn on_fire(&mut self, event: &FireEvent) {
        self.events.push(*event);
    }
}
