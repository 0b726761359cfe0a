use crate::*;

/// Decision for a single click while the validator is attached.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Ignore,
    Reveal,
    Win,
    Fail,
}

/// Enforces that tokens are revealed in ascending answer-key order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealValidator {
    key: AnswerKey,
    expected_index: usize,
}

impl RevealValidator {
    pub fn new(key: AnswerKey) -> Self {
        Self {
            key,
            expected_index: 0,
        }
    }

    pub fn answer_key(&self) -> &AnswerKey {
        &self.key
    }

    /// Index into the answer key of the next token to reveal.
    pub fn expected_index(&self) -> usize {
        self.expected_index
    }

    pub fn is_complete(&self) -> bool {
        self.expected_index >= self.key.len()
    }

    /// Judges a click on `token`, advancing the cursor when it is the expected one.
    pub fn judge(&mut self, token: &Token) -> Verdict {
        if token.is_visible() {
            return Verdict::Ignore;
        }
        let Some(expected) = self.key.get(self.expected_index) else {
            return Verdict::Ignore;
        };

        if token.id() == expected.id {
            self.expected_index += 1;
            if self.is_complete() {
                Verdict::Win
            } else {
                Verdict::Reveal
            }
        } else {
            Verdict::Fail
        }
    }
}
