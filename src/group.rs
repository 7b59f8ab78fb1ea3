//! Card groups and their plain-text line format.

use crate::deck::DefaultDeck;

/// A named, ordered list of card labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardGroup {
    /// Display name (uniqueness is expected, not enforced)
    pub name: String,
    /// Card labels in display order, duplicates allowed
    pub cards: Vec<String>,
    /// Pristine deck this group was seeded from, if it is a default group
    pub origin: Option<DefaultDeck>,
    /// Whether the card list may be edited
    pub editable: bool,
}

impl CardGroup {
    /// Seed a default group from one of the built-in decks
    pub fn from_default(deck: DefaultDeck) -> Self {
        Self {
            name: deck.group_name().to_string(),
            cards: deck.cards(),
            origin: Some(deck),
            editable: true,
        }
    }

    /// A user-created group
    pub fn custom(name: impl Into<String>, cards: Vec<String>) -> Self {
        Self {
            name: name.into(),
            cards,
            origin: None,
            editable: true,
        }
    }

    pub fn is_default(&self) -> bool {
        self.origin.is_some()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Name shown in group lists, with a marker for default groups
    pub fn display_name(&self) -> String {
        if self.is_default() {
            format!("{} (default)", self.name)
        } else {
            self.name.clone()
        }
    }
}

/// Trim every line and drop the blank ones, preserving order and duplicates
pub fn parse_card_lines<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| {
            let card = line.as_ref().trim();
            (!card.is_empty()).then(|| card.to_string())
        })
        .collect()
}

/// One label per line, each followed by a newline
pub fn format_card_lines(cards: &[String]) -> String {
    let mut out = String::with_capacity(cards.iter().map(|c| c.len() + 1).sum());
    for card in cards {
        out.push_str(card);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_drops_blank_lines() {
        let cards = parse_card_lines(["  A♦ ", "", "   ", "K♠", "K♠"]);
        assert_eq!(cards, vec!["A♦", "K♠", "K♠"]);
    }

    #[test]
    fn test_format_round_trip() {
        let cards = vec!["A♦".to_string(), "K♠".to_string()];
        let text = format_card_lines(&cards);
        assert_eq!(text, "A♦\nK♠\n");
        assert_eq!(parse_card_lines(text.lines()), cards);
    }

    #[test]
    fn test_display_name() {
        let default = CardGroup::from_default(DefaultDeck::Standard);
        assert!(default.is_default());
        assert_eq!(default.display_name(), "Standard deck (default)");

        let custom = CardGroup::custom("Tarot", vec!["The Fool".to_string()]);
        assert!(!custom.is_default());
        assert_eq!(custom.display_name(), "Tarot");
    }
}
