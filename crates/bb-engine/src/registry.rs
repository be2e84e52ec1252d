//! Lazily populated namespace of bots and output bins.

use bb_core::{BinId, BotId, Chip};

use crate::Bot;

#[cfg(feature = "fx-hash")]
type Map<K, V> = rustc_hash::FxHashMap<K, V>;
#[cfg(not(feature = "fx-hash"))]
type Map<K, V> = std::collections::HashMap<K, V>;

/// Owns every bot and bin for the lifetime of one simulation.
///
/// Both are created on first reference and never removed.  Read-only
/// accessors ([`peek_bot`][Self::peek_bot], [`bin`][Self::bin]) do not create
/// anything, so inspecting the registry after a run cannot change it.
#[derive(Default)]
pub struct Registry {
    bots: Map<BotId, Bot>,
    bins: Map<BinId, Vec<Chip>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The bot for `id`, created empty on first access.
    pub fn bot(&mut self, id: BotId) -> &mut Bot {
        self.bots.entry(id).or_insert_with(|| Bot::new(id))
    }

    /// The bin for `id`, created empty on first access.
    pub fn bin_mut(&mut self, id: BinId) -> &mut Vec<Chip> {
        self.bins.entry(id).or_default()
    }

    pub fn peek_bot(&self, id: BotId) -> Option<&Bot> {
        self.bots.get(&id)
    }

    /// Contents of bin `id` in append order; empty if nothing reached it.
    pub fn bin(&self, id: BinId) -> &[Chip] {
        self.bins.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn bot_count(&self) -> usize {
        self.bots.len()
    }

    /// Ids of every bin created so far, ascending.
    pub fn bin_ids(&self) -> Vec<BinId> {
        let mut ids: Vec<BinId> = self.bins.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Bots in ascending id order.
    pub fn bots(&self) -> Vec<&Bot> {
        let mut bots: Vec<&Bot> = self.bots.values().collect();
        bots.sort_unstable_by_key(|b| b.id());
        bots
    }
}
