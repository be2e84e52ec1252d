//! `bb-core` — foundational types for the balance-bots factory.
//!
//! This crate is a dependency of every other `bb-*` crate.  It has no `bb-*`
//! dependencies and only `thiserror` (plus optional `serde`) from outside.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `BotId`, `BinId`                                      |
//! | [`chip`]        | `Chip`                                                |
//! | [`directive`]   | `Directive`, `Target`, `TargetKind`, text parsing     |
//! | [`loader`]      | `load_directives`, `load_directives_reader`           |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod chip;
pub mod directive;
pub mod error;
pub mod ids;
pub mod loader;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use chip::Chip;
pub use directive::{Directive, Target, TargetKind};
pub use error::{CoreError, CoreResult};
pub use ids::{BinId, BotId};
pub use loader::{load_directives, load_directives_reader};
