//! Recording collaborators for driving sessions in tests.

use alloc::collections::BTreeMap;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::future::{Future, ready};
use core::time::Duration;

use crate::*;

pub(crate) const TOKEN_SIZE: Size = Size::new(48, 32);

/// Collaborator calls, in the order they happened.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Event {
    Render(usize),
    Sleep(Duration),
    Freeze,
    Move(TokenId),
}

/// Shared between a fake surface and a fake timer to observe interleaving.
pub(crate) type Journal = Rc<RefCell<Vec<Event>>>;

#[derive(Debug, Default)]
pub(crate) struct FakeSurface {
    pub arena: Size,
    pub rendered: Vec<Token>,
    pub positions: BTreeMap<TokenId, Position>,
    pub moves: Vec<(TokenId, Position)>,
    pub labels: BTreeMap<TokenId, bool>,
    pub locks: BTreeMap<TokenId, bool>,
    pub start_enabled: Vec<bool>,
    pub frozen: bool,
    pub fail_render: bool,
    pub fail_freeze: bool,
    pub fail_move: bool,
    pub journal: Journal,
}

impl FakeSurface {
    pub fn new(arena: Size) -> Self {
        Self {
            arena,
            ..Default::default()
        }
    }

    pub fn start_control_enabled(&self) -> Option<bool> {
        self.start_enabled.last().copied()
    }

    pub fn all_labels(&self, visible: bool) -> bool {
        !self.labels.is_empty() && self.labels.values().all(|&v| v == visible)
    }

    pub fn all_locked(&self, locked: bool) -> bool {
        !self.locks.is_empty() && self.locks.values().all(|&v| v == locked)
    }
}

impl Surface for FakeSurface {
    fn render(&mut self, tokens: &[Token]) -> Result<()> {
        if self.fail_render {
            return Err(GameError::SurfaceFailure);
        }
        self.journal.borrow_mut().push(Event::Render(tokens.len()));
        self.rendered = tokens.to_vec();
        self.positions.clear();
        self.labels.clear();
        self.locks.clear();
        for (index, token) in tokens.iter().enumerate() {
            let left = index as Px * TOKEN_SIZE.width;
            self.positions.insert(token.id(), Position::new(left, 0));
            self.labels.insert(token.id(), token.is_visible());
            self.locks.insert(token.id(), token.is_locked());
        }
        Ok(())
    }

    fn arena(&self) -> Size {
        self.arena
    }

    fn measure(&self, id: TokenId) -> Result<Rect> {
        let pos = self
            .positions
            .get(&id)
            .ok_or(GameError::MissingToken(id))?;
        Ok(Rect {
            left: pos.left,
            top: pos.top,
            width: TOKEN_SIZE.width,
            height: TOKEN_SIZE.height,
        })
    }

    fn set_position(&mut self, id: TokenId, position: Position) -> Result<()> {
        if self.fail_move {
            return Err(GameError::SurfaceFailure);
        }
        let slot = self
            .positions
            .get_mut(&id)
            .ok_or(GameError::MissingToken(id))?;
        *slot = position;
        self.moves.push((id, position));
        self.journal.borrow_mut().push(Event::Move(id));
        Ok(())
    }

    fn freeze_layout(&mut self) -> Result<()> {
        if self.fail_freeze {
            return Err(GameError::SurfaceFailure);
        }
        self.frozen = true;
        self.journal.borrow_mut().push(Event::Freeze);
        Ok(())
    }

    fn set_label_visible(&mut self, id: TokenId, visible: bool) {
        self.labels.insert(id, visible);
    }

    fn set_locked(&mut self, id: TokenId, locked: bool) {
        self.locks.insert(id, locked);
    }

    fn set_start_control_enabled(&mut self, enabled: bool) {
        self.start_enabled.push(enabled);
    }
}

#[derive(Debug, Default)]
pub(crate) struct FakeNotifier {
    pub notices: Vec<Notice>,
}

impl Notifier for FakeNotifier {
    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}

/// Completes every sleep immediately and remembers what was asked for.
#[derive(Debug, Default)]
pub(crate) struct FakeTimer {
    requested: RefCell<Vec<Duration>>,
    journal: Journal,
}

impl FakeTimer {
    pub fn with_journal(journal: Journal) -> Self {
        Self {
            journal,
            ..Default::default()
        }
    }

    pub fn sleeps(&self) -> Vec<Duration> {
        self.requested.borrow().clone()
    }
}

impl Timer for FakeTimer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        self.requested.borrow_mut().push(duration);
        self.journal.borrow_mut().push(Event::Sleep(duration));
        ready(())
    }
}
