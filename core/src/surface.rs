use core::future::Future;
use core::time::Duration;
use serde::{Deserialize, Serialize};

use crate::*;

/// Rendering side of the game: draws tokens and reports their geometry.
pub trait Surface {
    /// Replaces whatever was drawn before with `tokens`, in flow layout.
    fn render(&mut self, tokens: &[Token]) -> Result<()>;

    /// Size of the area tokens must stay inside.
    fn arena(&self) -> Size;

    /// Current geometry of a token, relative to the arena.
    fn measure(&self, id: TokenId) -> Result<Rect>;

    fn set_position(&mut self, id: TokenId, position: Position) -> Result<()>;

    /// Pins every token at its current place and switches to fixed coordinates,
    /// so later moves are plain coordinate updates.
    fn freeze_layout(&mut self) -> Result<()>;

    fn set_label_visible(&mut self, id: TokenId, visible: bool);

    fn set_locked(&mut self, id: TokenId, locked: bool);

    fn set_start_control_enabled(&mut self, enabled: bool);
}

/// User-facing messages, formatting is up to the implementation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notice {
    RangeError { min: u8, max: u8 },
    WrongOrder,
    Win,
    Aborted,
}

pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}

/// The single suspension primitive of a session.
pub trait Timer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}
