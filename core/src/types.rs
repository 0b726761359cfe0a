/// Token identity, also the token's rank in the answer key.
pub type TokenId = u8;

/// Pixel unit used for positions and sizes on the surface.
pub type Px = u32;

/// Top-left corner of a token, relative to the arena.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Position {
    pub left: Px,
    pub top: Px,
}

impl Position {
    pub const fn new(left: Px, top: Px) -> Self {
        Self { left, top }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Size {
    pub width: Px,
    pub height: Px,
}

impl Size {
    pub const fn new(width: Px, height: Px) -> Self {
        Self { width, height }
    }

    /// Largest top-left corner that keeps a box of `inner` size fully inside `self`.
    pub const fn max_origin(self, inner: Size) -> Position {
        Position {
            left: self.width.saturating_sub(inner.width),
            top: self.height.saturating_sub(inner.height),
        }
    }
}

/// On-screen geometry of a token as reported by the surface.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub left: Px,
    pub top: Px,
    pub width: Px,
    pub height: Px,
}

impl Rect {
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_origin_never_underflows() {
        let arena = Size::new(100, 40);

        assert_eq!(arena.max_origin(Size::new(30, 10)), Position::new(70, 30));
        assert_eq!(arena.max_origin(Size::new(130, 50)), Position::new(0, 0));
    }
}
