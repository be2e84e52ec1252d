//! `bb-engine` — the balance-bots factory simulation.
//!
//! # Cascade model
//!
//! ```text
//! for directive in directives:
//!   Input(v, b)        → deposit v into bot b
//!   Route(b, lo, hi)   → bind routing to bot b
//!   whenever a bot holds two chips AND has routing:
//!     fire → observer.on_fire(bot, low, high)
//!          → deliver high to hi (full cascade), then low to lo
//! ```
//!
//! Binding and depositing are symmetric triggers: a bot fires as soon as
//! both have happened, whichever came first.  Cascades run on an explicit
//! work stack, depth-first, high chip first, and are capped by
//! [`EngineConfig::max_cascade_depth`] so a routing cycle fails instead of
//! spinning forever.
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                   |
//! |-----------|----------------------------------------------------------|
//! | `fx-hash` | Uses `FxHashMap` for the registry.                       |
//! | `serde`   | Derives serde traits on `EngineConfig` and `FireEvent`.  |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use bb_core::{load_directives, BinId, Chip};
//! use bb_engine::{EngineBuilder, FireLog};
//!
//! let directives = load_directives(path)?;
//! let mut engine = EngineBuilder::new().observer(FireLog::new()).build()?;
//! engine.run(&directives)?;
//! let bot = engine.observer().bot_comparing(Chip(17), Chip(61));
//! let out0 = engine.bin_contents(BinId(0));
//! ```

pub mod bot;
pub mod builder;
pub mod config;
pub mod engine;
pub mod error;
pub mod observer;
pub mod registry;


pub use bot::{Bot, BotState, Fire, Routing};
pub use builder::EngineBuilder;
pub use config::EngineConfig;
pub use engine::Engine;
pub use error::{EngineError, EngineResult};
pub use observer::{FactoryObserver, FireEvent, FireLog, NoopObserver};
pub use registry::Registry;
