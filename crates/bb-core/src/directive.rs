//! Routing directives and their textual form.
//!
//! # Grammar
//!
//! ```text
//! value <N> goes to bot <id>
//! bot <id> gives low to <kind> <id> and high to <kind> <id>
//! ```
//!
//! `<kind>` is `bot` or `output`.  Tokens are separated by any run of
//! whitespace.

use std::fmt;
use std::str::FromStr;

use crate::{BinId, BotId, Chip, CoreError, CoreResult};

// ── TargetKind ────────────────────────────────────────────────────────────────

/// Destination category named in the text of a route directive.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetKind {
    Bot,
    Output,
}

impl TargetKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TargetKind::Bot    => "bot",
            TargetKind::Output => "output",
        }
    }
}

impl FromStr for TargetKind {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "bot"    => Ok(TargetKind::Bot),
            "output" => Ok(TargetKind::Output),
            other    => Err(CoreError::UnknownTargetKind(other.to_owned())),
        }
    }
}

// ── Target ────────────────────────────────────────────────────────────────────

/// Where a bot sends one of its chips when it fires.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Target {
    Bot(BotId),
    Bin(BinId),
}

impl Target {
    pub fn new(kind: TargetKind, id: u32) -> Self {
        match kind {
            TargetKind::Bot    => Target::Bot(BotId(id)),
            TargetKind::Output => Target::Bin(BinId(id)),
        }
    }

    pub fn kind(self) -> TargetKind {
        match self {
            Target::Bot(_) => TargetKind::Bot,
            Target::Bin(_) => TargetKind::Output,
        }
    }

    fn raw_id(self) -> u32 {
        match self {
            Target::Bot(id) => id.0,
            Target::Bin(id) => id.0,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind().as_str(), self.raw_id())
    }
}

// ── Directive ─────────────────────────────────────────────────────────────────

/// One parsed instruction line.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Directive {
    /// Deposit `value` into `bot`.
    Input { value: Chip, bot: BotId },
    /// Bind routing to `bot`: its lower chip goes to `low`, its higher to `high`.
    Route { bot: BotId, low: Target, high: Target },
}

impl Directive {
    /// The bot this directive acts on.
    pub fn bot(&self) -> BotId {
        match *self {
            Directive::Input { bot, .. } | Directive::Route { bot, .. } => bot,
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Directive::Input { value, bot } => {
                write!(f, "value {} goes to bot {}", value, bot.0)
            }
            Directive::Route { bot, low, high } => {
                write!(f, "bot {} gives low to {} and high to {}", bot.0, low, high)
            }
        }
    }
}

impl FromStr for Directive {
    type Err = CoreError;

    fn from_str(line: &str) -> CoreResult<Self> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.first() {
            Some(&"value") => parse_input(&tokens),
            Some(&"bot")   => parse_route(&tokens),
            Some(other)    => Err(CoreError::Parse(format!(
                "unrecognised directive starting with {other:?}"
            ))),
            None => Err(CoreError::Parse("empty directive".to_owned())),
        }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_input(tokens: &[&str]) -> CoreResult<Directive> {
    expect_len(tokens, 6)?;
    let value = parse_number(tokens[1])?;
    expect_words(tokens, &[(2, "goes"), (3, "to"), (4, "bot")])?;
    let bot = parse_number(tokens[5])?;
    Ok(Directive::Input { value: Chip(value), bot: BotId(bot) })
}

fn parse_route(tokens: &[&str]) -> CoreResult<Directive> {
    expect_len(tokens, 12)?;
    let bot = parse_number(tokens[1])?;
    expect_words(
        tokens,
        &[(2, "gives"), (3, "low"), (4, "to"), (7, "and"), (8, "high"), (9, "to")],
    )?;
    let low  = Target::new(tokens[5].parse()?, parse_number(tokens[6])?);
    let high = Target::new(tokens[10].parse()?, parse_number(tokens[11])?);
    Ok(Directive::Route { bot: BotId(bot), low, high })
}

fn expect_len(tokens: &[&str], n: usize) -> CoreResult<()> {
    if tokens.len() != n {
        return Err(CoreError::Parse(format!(
            "expected {n} words for a {:?} directive, got {}",
            tokens[0],
            tokens.len()
        )));
    }
    Ok(())
}

fn expect_words(tokens: &[&str], words: &[(usize, &str)]) -> CoreResult<()> {
    for &(i, word) in words {
        if tokens[i] != word {
            return Err(CoreError::Parse(format!(
                "expected {word:?} at word {}, found {:?}",
                i + 1,
                tokens[i]
            )));
        }
    }
    Ok(())
}

fn parse_number(s: &str) -> CoreResult<u32> {
    s.parse::<u32>()
        .map_err(|_| CoreError::Parse(format!("invalid number {s:?}")))
}
