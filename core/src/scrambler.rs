use core::time::Duration;
use rand::Rng;

use crate::*;

/// Moves every token to fresh random spots, a fixed number of times.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Scrambler {
    interval: Duration,
}

impl Scrambler {
    pub const fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// Uniform top-left corner keeping a `token` sized box fully inside `bounds`.
    pub fn place_randomly<R: Rng>(rng: &mut R, bounds: Size, token: Size) -> Position {
        let max = bounds.max_origin(token);
        Position {
            left: rng.random_range(0..=max.left),
            top: rng.random_range(0..=max.top),
        }
    }

    /// Repositions each token `rounds` times, sleeping between rounds but not after the last.
    pub async fn run_rounds<S, T, R>(
        &self,
        surface: &mut S,
        timer: &T,
        rng: &mut R,
        tokens: &[Token],
        rounds: usize,
    ) -> Result<()>
    where
        S: Surface,
        T: Timer,
        R: Rng,
    {
        for round in 0..rounds {
            self.scramble_once(surface, rng, tokens)?;
            log::trace!("scramble round {}/{} applied", round + 1, rounds);
            if round + 1 < rounds {
                timer.sleep(self.interval).await;
            }
        }
        Ok(())
    }

    fn scramble_once<S: Surface, R: Rng>(
        &self,
        surface: &mut S,
        rng: &mut R,
        tokens: &[Token],
    ) -> Result<()> {
        let bounds = surface.arena();
        for token in tokens {
            let size = surface.measure(token.id())?.size();
            let position = Self::place_randomly(rng, bounds, size);
            surface.set_position(token.id(), position)?;
        }
        Ok(())
    }
}
