//! `bb-output` — CSV output for the balance-bots engine.
//!
//! | Item                | Produces                                            |
//! |---------------------|-----------------------------------------------------|
//! | [`FireCsvObserver`] | `bot,low,high,depth` — one row per fire             |
//! | [`write_bins_csv`]  | `bin,position,chip` — final bin contents            |
//!
//! # Usage
//!
//! ```rust,ignore
//! use bb_output::{FireCsvObserver, write_bins_csv};
//!
//! let obs = FireCsvObserver::create(Path::new("fires.csv"))?;
//! let mut engine = EngineBuilder::new().observer(obs).build()?;
//! engine.run(&directives)?;
//! write_bins_csv(engine.registry(), File::create("bins.csv")?)?;
//! let mut obs = engine.into_observer();
//! obs.finish()?;
//! ```

pub mod bins;
pub mod error;
pub mod fires;

#[cfg(test)]
mod tests;

pub use bins::write_bins_csv;
pub use error::{OutputError, OutputResult};
pub use fires::FireCsvObserver;
