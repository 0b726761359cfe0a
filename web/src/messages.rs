use recall_core::Notice;

/// Player-facing English strings.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum MessageKey {
    Prompt,
    Go,
    Range,
    Wrong,
    Excellent,
    Aborted,
}

impl MessageKey {
    const fn template(self) -> &'static str {
        use MessageKey::*;
        match self {
            Prompt => "How many buttons to create?",
            Go => "Go!",
            Range => "Please enter the number between {min} and {max}.",
            Wrong => "Wrong order!",
            Excellent => "Excellent memory!",
            Aborted => "Something went wrong, please start again.",
        }
    }
}

/// Fills `{name}` placeholders from `args`; names without a value become empty.
pub(crate) fn t(key: MessageKey, args: &[(&str, String)]) -> String {
    let template = key.template();
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) if is_placeholder_name(&after[..close]) => {
                let name = &after[..close];
                if let Some((_, value)) = args.iter().find(|(arg, _)| *arg == name) {
                    out.push_str(value);
                }
                rest = &after[close + 1..];
            }
            _ => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

pub(crate) fn text(key: MessageKey) -> String {
    t(key, &[])
}

pub(crate) fn notice_text(notice: Notice) -> String {
    match notice {
        Notice::RangeError { min, max } => t(
            MessageKey::Range,
            &[("min", min.to_string()), ("max", max.to_string())],
        ),
        Notice::WrongOrder => text(MessageKey::Wrong),
        Notice::Win => text(MessageKey::Excellent),
        Notice::Aborted => text(MessageKey::Aborted),
    }
}

fn is_placeholder_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_notice_mentions_both_bounds() {
        assert_eq!(
            notice_text(Notice::RangeError { min: 3, max: 7 }),
            "Please enter the number between 3 and 7."
        );
    }

    #[test]
    fn outcome_notices_use_their_messages() {
        assert_eq!(notice_text(Notice::WrongOrder), "Wrong order!");
        assert_eq!(notice_text(Notice::Win), "Excellent memory!");
    }

    #[test]
    fn missing_placeholder_values_render_empty() {
        assert_eq!(
            t(MessageKey::Range, &[("min", "1".to_string())]),
            "Please enter the number between 1 and ."
        );
    }

    #[test]
    fn plain_messages_pass_through() {
        assert_eq!(text(MessageKey::Prompt), "How many buttons to create?");
    }

    #[test]
    fn placeholder_names_are_word_characters() {
        assert!(is_placeholder_name("max"));
        assert!(!is_placeholder_name(""));
        assert!(!is_placeholder_name("a b"));
    }
}
