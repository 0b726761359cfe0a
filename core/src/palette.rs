use alloc::vec::Vec;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Orange,
    Yellow,
    Green,
    Teal,
    Blue,
    Purple,
}

impl Color {
    pub const ALL: [Color; PALETTE_SIZE] = [
        Color::Red,
        Color::Orange,
        Color::Yellow,
        Color::Green,
        Color::Teal,
        Color::Blue,
        Color::Purple,
    ];

    /// Stylesheet class carrying this color.
    pub const fn class_name(self) -> &'static str {
        use Color::*;
        match self {
            Red => "color-1",
            Orange => "color-2",
            Yellow => "color-3",
            Green => "color-4",
            Teal => "color-5",
            Blue => "color-6",
            Purple => "color-7",
        }
    }
}

pub const PALETTE_SIZE: usize = 7;

/// Draws palette colors without replacement.
///
/// The pool belongs to the assigner, so two sessions never share taken colors.
/// Call [`ColorAssigner::reset`] before every build.
#[derive(Clone, Debug, Default)]
pub struct ColorAssigner {
    pool: Vec<Color>,
}

impl ColorAssigner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.pool.clear();
        self.pool.extend_from_slice(&Color::ALL);
    }

    pub fn remaining(&self) -> usize {
        self.pool.len()
    }

    /// Removes a uniformly chosen color from the pool.
    pub fn take<R: Rng>(&mut self, rng: &mut R) -> Result<Color> {
        if self.pool.is_empty() {
            return Err(GameError::ExhaustedPalette);
        }
        let picked = rng.random_range(0..self.pool.len());
        // swap_remove moves the last entry into the hole, O(1)
        Ok(self.pool.swap_remove(picked))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn draws_every_color_exactly_once() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut colors = ColorAssigner::new();
        colors.reset();

        let drawn: BTreeSet<_> = (0..PALETTE_SIZE)
            .map(|_| colors.take(&mut rng).unwrap())
            .collect();

        assert_eq!(drawn.len(), PALETTE_SIZE);
        assert_eq!(colors.remaining(), 0);
    }

    #[test]
    fn take_past_palette_size_is_exhausted() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut colors = ColorAssigner::new();
        colors.reset();
        for _ in 0..PALETTE_SIZE {
            colors.take(&mut rng).unwrap();
        }

        assert_eq!(colors.take(&mut rng), Err(GameError::ExhaustedPalette));
    }

    #[test]
    fn take_without_reset_is_exhausted() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut colors = ColorAssigner::new();

        assert_eq!(colors.take(&mut rng), Err(GameError::ExhaustedPalette));
    }

    #[test]
    fn reset_refills_after_partial_draw() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut colors = ColorAssigner::new();
        colors.reset();
        colors.take(&mut rng).unwrap();
        colors.take(&mut rng).unwrap();

        colors.reset();

        assert_eq!(colors.remaining(), PALETTE_SIZE);
    }

    #[test]
    fn class_names_are_distinct() {
        let names: BTreeSet<_> = Color::ALL.iter().map(|c| c.class_name()).collect();
        assert_eq!(names.len(), PALETTE_SIZE);
    }
}
