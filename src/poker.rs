//! Poker hand ranking.
//!
//! Cards are written as rank then suit: `"10♥"`, `"A♠"`, `"Q♣"`.

use std::str::FromStr;

use thiserror::Error;

/// Hand categories, weakest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PokerRank {
    HighCard,
    OnePair,
    TwoPairs,
    ThreeOfKind,
    Straight,
    Flush,
    FullHouse,
    FourOfKind,
    StraightFlush,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Hearts,
    Spades,
    Diamonds,
    Clubs,
}

impl Suit {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '♥' => Some(Suit::Hearts),
            '♠' => Some(Suit::Spades),
            '♦' => Some(Suit::Diamonds),
            '♣' => Some(Suit::Clubs),
            _ => None,
        }
    }
}

/// A single card. `rank` runs from 1 (ace) to 13 (king).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: u8,
    pub suit: Suit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CardError {
    #[error("a hand has 5 cards, got {0}")]
    HandSize(usize),

    #[error("invalid card rank in {0:?}")]
    Rank(String),

    #[error("invalid card suit in {0:?}")]
    Suit(String),
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let suit = chars
            .next_back()
            .and_then(Suit::from_char)
            .ok_or_else(|| CardError::Suit(s.to_string()))?;
        let rank = match chars.as_str() {
            "A" => 1,
            "2" => 2,
            "3" => 3,
            "4" => 4,
            "5" => 5,
            "6" => 6,
            "7" => 7,
            "8" => 8,
            "9" => 9,
            "10" => 10,
            "J" => 11,
            "Q" => 12,
            "K" => 13,
            _ => return Err(CardError::Rank(s.to_string())),
        };
        Ok(Card { rank, suit })
    }
}

/// Rank a five-card hand. Aces count high or low in straights.
pub fn poker_hand_rank<S: AsRef<str>>(hand: &[S]) -> Result<PokerRank, CardError> {
    if hand.len() != 5 {
        return Err(CardError::HandSize(hand.len()));
    }
    let cards = hand
        .iter()
        .map(|c| c.as_ref().parse::<Card>())
        .collect::<Result<Vec<_>, _>>()?;
    Ok(classify(&cards))
}

fn classify(cards: &[Card]) -> PokerRank {
    // counts[0] is the ace, counts[13] repeats it for ace-high straights
    let mut counts = [0u8; 14];
    for card in cards {
        counts[card.rank as usize - 1] += 1;
    }
    counts[13] = counts[0];

    let flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let straight = counts.windows(5).any(|w| w.iter().all(|&n| n == 1));
    let groups = |size: u8| counts[..13].iter().filter(|&&n| n == size).count();

    if straight && flush {
        PokerRank::StraightFlush
    } else if groups(4) == 1 {
        PokerRank::FourOfKind
    } else if groups(3) == 1 && groups(2) == 1 {
        PokerRank::FullHouse
    } else if flush {
        PokerRank::Flush
    } else if straight {
        PokerRank::Straight
    } else if groups(3) == 1 {
        PokerRank::ThreeOfKind
    } else if groups(2) == 2 {
        PokerRank::TwoPairs
    } else if groups(2) == 1 {
        PokerRank::OnePair
    } else {
        PokerRank::HighCard
    }
}
