use alloc::vec::Vec;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Idle,
    Building,
    Displaying,
    Scrambling,
    AwaitingInput,
    Won,
    Failed,
}

impl Phase {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Failed)
    }

    pub const fn can_advance_to(self, next: Phase) -> bool {
        use Phase::*;
        matches!(
            (self, next),
            (Idle, Building)
                | (Building, Displaying)
                | (Displaying, Scrambling)
                | (Scrambling, AwaitingInput)
                | (AwaitingInput, Won | Failed)
                | (Won | Failed, Idle)
                | (Building | Displaying | Scrambling, Idle)
        )
    }
}

/// Drives one board through build, preview, scramble and recall.
///
/// The session exclusively owns the tokens and the reveal cursor. The only
/// suspension points are the memorize pause and the waits between scramble
/// rounds, both routed through the injected [`Timer`].
pub struct GameSession<S, N, T, R> {
    config: GameConfig,
    surface: S,
    notifier: N,
    timer: T,
    rng: R,
    colors: ColorAssigner,
    phase: Phase,
    tokens: Vec<Token>,
    validator: Option<RevealValidator>,
    in_progress: bool,
}

impl<S, N, T, R> GameSession<S, N, T, R>
where
    S: Surface,
    N: Notifier,
    T: Timer,
    R: Rng,
{
    pub fn new(config: GameConfig, surface: S, notifier: N, timer: T, rng: R) -> Self {
        Self {
            config,
            surface,
            notifier,
            timer,
            rng,
            colors: ColorAssigner::new(),
            phase: Phase::default(),
            tokens: Vec::new(),
            validator: None,
            in_progress: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn answer_key(&self) -> Option<&AnswerKey> {
        self.validator.as_ref().map(RevealValidator::answer_key)
    }

    pub fn expected_index(&self) -> usize {
        self.validator
            .as_ref()
            .map_or(0, RevealValidator::expected_index)
    }

    pub fn is_in_progress(&self) -> bool {
        self.in_progress
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// Starts a new board from the raw token count typed by the player.
    ///
    /// Returns once the board is waiting for clicks. An invalid count is
    /// reported through the notifier and leaves the session untouched; any
    /// failure while preparing the board drops back to [`Phase::Idle`].
    pub async fn start(&mut self, input: &str) -> Result<Phase> {
        if self.in_progress {
            log::warn!("start ignored, session in {:?}", self.phase);
            return Err(GameError::SessionInProgress);
        }

        let count = match self.config.parse_token_count(input) {
            Ok(count) => count,
            Err(err) => {
                log::debug!("rejected token count {:?}", input);
                self.notifier.notify(Notice::RangeError {
                    min: self.config.min_tokens,
                    max: self.config.max_tokens,
                });
                return Err(err);
            }
        };

        self.in_progress = true;
        self.surface.set_start_control_enabled(false);
        if self.phase.is_finished() {
            self.advance(Phase::Idle);
        }

        match self.prepare(count).await {
            Ok(()) => Ok(self.phase),
            Err(err) => {
                self.abort(err);
                Err(err)
            }
        }
    }

    /// Routes a click on token `id` through the reveal policy.
    pub fn click(&mut self, id: TokenId) -> ClickOutcome {
        if self.phase != Phase::AwaitingInput {
            log::trace!("click on {} ignored in {:?}", id, self.phase);
            return ClickOutcome::NoChange;
        }
        let Some(index) = self.tokens.iter().position(|token| token.id() == id) else {
            log::warn!("click on unknown token {}", id);
            return ClickOutcome::NoChange;
        };
        if self.tokens[index].is_locked() {
            return ClickOutcome::NoChange;
        }

        let verdict = match self.validator.as_mut() {
            Some(validator) => validator.judge(&self.tokens[index]),
            None => return ClickOutcome::NoChange,
        };
        log::trace!("click on {}: {:?}", id, verdict);

        match verdict {
            Verdict::Ignore => ClickOutcome::NoChange,
            Verdict::Reveal => {
                self.reveal_and_lock(index);
                ClickOutcome::Revealed
            }
            Verdict::Win => {
                self.reveal_and_lock(index);
                self.win();
                ClickOutcome::Won
            }
            Verdict::Fail => {
                self.fail();
                ClickOutcome::Failed
            }
        }
    }

    async fn prepare(&mut self, count: u8) -> Result<()> {
        self.advance(Phase::Building);
        self.build(count)?;
        self.surface.render(&self.tokens)?;

        self.advance(Phase::Displaying);
        self.validator = Some(RevealValidator::new(AnswerKey::capture(&self.tokens)));
        self.set_all_locked(true);

        self.advance(Phase::Scrambling);
        self.timer.sleep(self.config.memorize_delay(count)).await;
        self.surface.freeze_layout()?;
        Scrambler::new(self.config.round_interval())
            .run_rounds(
                &mut self.surface,
                &self.timer,
                &mut self.rng,
                &self.tokens,
                count.into(),
            )
            .await?;

        self.advance(Phase::AwaitingInput);
        for token in &mut self.tokens {
            token.set_visible(false);
            token.set_locked(false);
            self.surface.set_label_visible(token.id(), false);
            self.surface.set_locked(token.id(), false);
        }
        Ok(())
    }

    fn build(&mut self, count: u8) -> Result<()> {
        self.validator = None;
        self.tokens.clear();
        self.colors.reset();

        let mut tokens = Vec::with_capacity(count.into());
        for id in 1..=count {
            let color = self.colors.take(&mut self.rng)?;
            tokens.push(Token::new(id, color));
        }
        self.tokens = tokens;
        log::debug!("built {} tokens", count);
        Ok(())
    }

    fn win(&mut self) {
        self.advance(Phase::Won);
        self.notifier.notify(Notice::Win);
        self.set_all_locked(true);
        self.finish();
    }

    fn fail(&mut self) {
        self.advance(Phase::Failed);
        self.notifier.notify(Notice::WrongOrder);
        self.set_all_visible(true);
        self.set_all_locked(true);
        self.finish();
    }

    fn abort(&mut self, err: GameError) {
        log::error!("session aborted in {:?}: {}", self.phase, err);
        self.advance(Phase::Idle);
        self.validator = None;
        // a half-prepared board is useless, wipe it rather than leave it locked
        self.tokens.clear();
        if let Err(err) = self.surface.render(&self.tokens) {
            log::error!("failed to clear the board: {}", err);
        }
        self.notifier.notify(Notice::Aborted);
        self.finish();
    }

    fn finish(&mut self) {
        self.in_progress = false;
        self.surface.set_start_control_enabled(true);
    }

    fn advance(&mut self, next: Phase) {
        debug_assert!(
            self.phase.can_advance_to(next),
            "illegal phase change {:?} -> {:?}",
            self.phase,
            next
        );
        log::debug!("phase {:?} -> {:?}", self.phase, next);
        self.phase = next;
    }

    fn reveal_and_lock(&mut self, index: usize) {
        let token = &mut self.tokens[index];
        token.set_visible(true);
        token.set_locked(true);
        self.surface.set_label_visible(token.id(), true);
        self.surface.set_locked(token.id(), true);
    }

    fn set_all_visible(&mut self, visible: bool) {
        for token in &mut self.tokens {
            token.set_visible(visible);
            self.surface.set_label_visible(token.id(), visible);
        }
    }

    fn set_all_locked(&mut self, locked: bool) {
        for token in &mut self.tokens {
            token.set_locked(locked);
            self.surface.set_locked(token.id(), locked);
        }
    }
}
