use bb_core::{BotId, Chip};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("engine configuration error: {0}")]
    Config(String),

    #[error("{bot} already holds chips {} and {}; cannot accept {value}", .held[0], .held[1])]
    Overfill {
        bot:   BotId,
        held:  [Chip; 2],
        value: Chip,
    },

    #[error("{bot} already has a routing directive bound")]
    DoubleBinding { bot: BotId },

    #[error("cycle suspected: {bot} would fire at cascade depth {depth} (limit {limit})")]
    CycleSuspected {
        bot:   BotId,
        depth: u32,
        limit: u32,
    },
}

pub type EngineResult<T> = Result<T, EngineError>;
