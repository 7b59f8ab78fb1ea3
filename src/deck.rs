//! Built-in playing card decks.
//!
//! Provides:
//! - Suit and rank orderings used for every seeded deck
//! - The 54-card standard deck and the 108-card double deck
//! - Card colour classification for display

/// Suits in deck order: diamond, club, heart, spade
pub const SUITS: [&str; 4] = ["♦", "♣", "♥", "♠"];

/// Ranks in deck order, high to low
pub const RANKS: [&str; 13] = [
    "K", "Q", "J", "10", "9", "8", "7", "6", "5", "4", "3", "2", "A",
];

/// Small joker label
pub const SMALL_JOKER: &str = "小王";
/// Big joker label
pub const BIG_JOKER: &str = "大王";

/// One suit's full rank run, e.g. `K♦ Q♦ ... A♦`
fn suit_run(suit: &str) -> impl Iterator<Item = String> + '_ {
    RANKS.iter().map(move |rank| format!("{rank}{suit}"))
}

/// 52 cards suit-major, then small joker, then big joker
pub fn standard_deck() -> Vec<String> {
    let mut cards = Vec::with_capacity(54);
    for suit in SUITS {
        cards.extend(suit_run(suit));
    }
    cards.push(SMALL_JOKER.to_string());
    cards.push(BIG_JOKER.to_string());
    cards
}

/// Two decks interleaved per suit: each suit's rank run appears twice in a row,
/// followed by both small jokers and then both big jokers
pub fn double_deck() -> Vec<String> {
    let mut cards = Vec::with_capacity(108);
    for suit in SUITS {
        for _ in 0..2 {
            cards.extend(suit_run(suit));
        }
    }
    cards.extend([SMALL_JOKER, SMALL_JOKER, BIG_JOKER, BIG_JOKER].map(String::from));
    cards
}

/// The pristine decks a default group can be restored to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultDeck {
    /// 54 cards
    Standard,
    /// 108 cards
    Double,
}

impl DefaultDeck {
    pub const ALL: [DefaultDeck; 2] = [DefaultDeck::Standard, DefaultDeck::Double];

    /// Group name used when seeding the store
    pub fn group_name(self) -> &'static str {
        match self {
            DefaultDeck::Standard => "Standard deck",
            DefaultDeck::Double => "Double deck",
        }
    }

    /// Build a fresh copy of this deck
    pub fn cards(self) -> Vec<String> {
        match self {
            DefaultDeck::Standard => standard_deck(),
            DefaultDeck::Double => double_deck(),
        }
    }
}

/// Display colour of a card label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardColor {
    Red,
    Black,
}

impl CardColor {
    /// Hearts, diamonds and the big joker are red; everything else is black
    pub fn of(label: &str) -> Self {
        if label == BIG_JOKER || label.ends_with('♥') || label.ends_with('♦') {
            CardColor::Red
        } else {
            CardColor::Black
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_deck_shape() {
        let deck = standard_deck();
        assert_eq!(deck.len(), 54);
        assert_eq!(deck[0], "K♦");
        assert_eq!(deck[12], "A♦");
        assert_eq!(deck[13], "K♣");
        assert_eq!(deck[51], "A♠");
        assert_eq!(&deck[52..], &["小王", "大王"]);
    }

    #[test]
    fn test_double_deck_shape() {
        let deck = double_deck();
        assert_eq!(deck.len(), 108);

        // Each suit's run is duplicated back to back
        for (s, suit) in SUITS.iter().enumerate() {
            let base = s * 26;
            for (r, rank) in RANKS.iter().enumerate() {
                let label = format!("{rank}{suit}");
                assert_eq!(deck[base + r], label);
                assert_eq!(deck[base + 13 + r], label);
            }
        }

        assert_eq!(&deck[104..], &["小王", "小王", "大王", "大王"]);
    }

    #[test]
    fn test_default_deck_copies_are_independent() {
        let mut a = DefaultDeck::Standard.cards();
        a.clear();
        assert_eq!(DefaultDeck::Standard.cards().len(), 54);
        assert_eq!(DefaultDeck::Double.cards().len(), 108);
    }

    #[test]
    fn test_card_color() {
        assert_eq!(CardColor::of("A♥"), CardColor::Red);
        assert_eq!(CardColor::of("10♦"), CardColor::Red);
        assert_eq!(CardColor::of("K♠"), CardColor::Black);
        assert_eq!(CardColor::of("2♣"), CardColor::Black);
        assert_eq!(CardColor::of(BIG_JOKER), CardColor::Red);
        assert_eq!(CardColor::of(SMALL_JOKER), CardColor::Black);
        assert_eq!(CardColor::of("custom"), CardColor::Black);
    }
}
