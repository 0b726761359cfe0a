#![no_std]

extern crate alloc;

use core::time::Duration;
use serde::{Deserialize, Serialize};

pub use error::*;
pub use palette::*;
pub use reveal::*;
pub use scrambler::*;
pub use session::*;
pub use surface::*;
pub use token::*;
pub use types::*;

mod error;
mod palette;
mod reveal;
mod scrambler;
mod session;
mod surface;
mod token;
mod types;

#[cfg(test)]
mod fakes;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub min_tokens: u8,
    pub max_tokens: u8,
    /// Memorize pause per token before the first scramble.
    pub memorize_delay_ms: u32,
    pub round_interval_ms: u32,
}

impl GameConfig {
    pub const DEFAULT_MIN_TOKENS: u8 = 3;
    pub const DEFAULT_MAX_TOKENS: u8 = 7;
    pub const DEFAULT_MEMORIZE_DELAY_MS: u32 = 1000;
    pub const DEFAULT_ROUND_INTERVAL_MS: u32 = 2000;

    pub const fn new_unchecked(
        min_tokens: u8,
        max_tokens: u8,
        memorize_delay_ms: u32,
        round_interval_ms: u32,
    ) -> Self {
        Self {
            min_tokens,
            max_tokens,
            memorize_delay_ms,
            round_interval_ms,
        }
    }

    /// Clamps the token range so every session fits in the palette.
    pub fn new(
        min_tokens: u8,
        max_tokens: u8,
        memorize_delay_ms: u32,
        round_interval_ms: u32,
    ) -> Self {
        let max_tokens = max_tokens.clamp(1, PALETTE_SIZE as u8);
        let min_tokens = min_tokens.clamp(1, max_tokens);
        Self::new_unchecked(min_tokens, max_tokens, memorize_delay_ms, round_interval_ms)
    }

    pub fn memorize_delay(&self, tokens: u8) -> Duration {
        Duration::from_millis(u64::from(self.memorize_delay_ms) * u64::from(tokens))
    }

    pub fn round_interval(&self) -> Duration {
        Duration::from_millis(self.round_interval_ms.into())
    }

    /// Reads a token count the way a lenient base-10 integer parser would:
    /// surrounding whitespace and trailing non-digits are tolerated.
    pub fn parse_token_count(&self, input: &str) -> Result<u8> {
        let invalid = GameError::InvalidTokenCount {
            min: self.min_tokens,
            max: self.max_tokens,
        };

        let trimmed = input.trim_start();
        let (negative, rest) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        let digits = &rest[..end];
        if digits.is_empty() || negative {
            return Err(invalid);
        }

        let count: u64 = digits.parse().map_err(|_| invalid)?;
        u8::try_from(count)
            .ok()
            .filter(|count| (self.min_tokens..=self.max_tokens).contains(count))
            .ok_or(invalid)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(
            Self::DEFAULT_MIN_TOKENS,
            Self::DEFAULT_MAX_TOKENS,
            Self::DEFAULT_MEMORIZE_DELAY_MS,
            Self::DEFAULT_ROUND_INTERVAL_MS,
        )
    }
}

/// Outcome of clicking a token
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    NoChange,
    Revealed,
    Won,
    Failed,
}
