//! Fluent builder for constructing an [`Engine`].

use crate::{Engine, EngineConfig, EngineResult, FactoryObserver, NoopObserver};

/// Fluent builder for [`Engine<O>`].
///
/// | Method                     | Default                          |
/// |----------------------------|----------------------------------|
/// | `.config(c)`               | `EngineConfig::default()`        |
/// | `.max_cascade_depth(n)`    | `DEFAULT_MAX_CASCADE_DEPTH`      |
/// | `.observer(o)`             | `NoopObserver`                   |
///
/// # Example
///
/// ```rust,ignore
/// let mut engine = EngineBuilder::new()
///     .max_cascade_depth(500)
///     .observer(FireLog::new())
///     .build()?;
/// engine.run(&directives)?;
/// ```
pub struct EngineBuilder<O: FactoryObserver = NoopObserver> {
    config:   EngineConfig,
    observer: O,
}

impl EngineBuilder<NoopObserver> {
    pub fn new() -> Self {
        Self {
            config:   EngineConfig::default(),
            observer: NoopObserver,
        }
    }
}

impl Default for EngineBuilder<NoopObserver> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: FactoryObserver> EngineBuilder<O> {
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn max_cascade_depth(mut self, depth: u32) -> Self {
        self.config.max_cascade_depth = depth;
        self
    }

    /// Register the observer notified on every fire.
    pub fn observer<P: FactoryObserver>(self, observer: P) -> EngineBuilder<P> {
        EngineBuilder {
            config: self.config,
            observer,
        }
    }

    /// Validate the configuration and return a ready-to-run [`Engine`].
    pub fn build(self) -> EngineResult<Engine<O>> {
        self.config.validate()?;
        Ok(Engine::from_parts(self.config, self.observer))
    }
}
