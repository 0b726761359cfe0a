use alloc::string::{String, ToString};
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    id: TokenId,
    label: String,
    color: Color,
    visible: bool,
    locked: bool,
}

impl Token {
    /// New token labelled with its own id, visible and unlocked.
    pub fn new(id: TokenId, color: Color) -> Self {
        Self::with_label(id, id.to_string(), color)
    }

    pub fn with_label(id: TokenId, label: String, color: Color) -> Self {
        Self {
            id,
            label,
            color,
            visible: true,
            locked: false,
        }
    }

    pub fn id(&self) -> TokenId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub(crate) fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }
}

/// One snapshot entry of the answer key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEntry {
    pub id: TokenId,
    pub label: String,
    pub color: Color,
}

impl From<&Token> for KeyEntry {
    fn from(token: &Token) -> Self {
        Self {
            id: token.id,
            label: token.label.clone(),
            color: token.color,
        }
    }
}

/// Required reveal order, captured once per build.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerKey {
    entries: Vec<KeyEntry>,
}

impl AnswerKey {
    /// Snapshots `tokens` in ascending id order.
    pub fn capture(tokens: &[Token]) -> Self {
        let mut entries: Vec<KeyEntry> = tokens.iter().map(KeyEntry::from).collect();
        entries.sort_by_key(|entry| entry.id);
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&KeyEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeyEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_token_is_visible_unlocked_and_labelled_by_id() {
        let token = Token::new(4, Color::Teal);

        assert_eq!(token.label(), "4");
        assert!(token.is_visible());
        assert!(!token.is_locked());
    }

    #[test]
    fn capture_orders_by_id() {
        let tokens = [
            Token::new(2, Color::Blue),
            Token::new(3, Color::Red),
            Token::new(1, Color::Green),
        ];

        let key = AnswerKey::capture(&tokens);

        let ids: Vec<_> = key.iter().map(|entry| entry.id).collect();
        assert_eq!(ids, [1, 2, 3]);
        assert_eq!(key.get(0).map(|entry| entry.color), Some(Color::Green));
        assert_eq!(key.get(3), None);
    }

    #[test]
    fn captured_key_is_detached_from_tokens() {
        let mut tokens = [Token::new(1, Color::Red), Token::new(2, Color::Blue)];
        let key = AnswerKey::capture(&tokens);

        tokens[0].set_visible(false);
        tokens[0].set_locked(true);

        assert_eq!(key.get(0), Some(&KeyEntry::from(&Token::new(1, Color::Red))));
    }
}
