use crate::core::{Card, Suit, Value};

/// Rough description of how the community cards interact.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoardTexture {
    /// Fewer than three community cards.
    Preflop,
    /// Unpaired, no three of a suit and no connected ranks.
    Dry,
    /// Three or more of a suit, or ranks close enough to make straights.
    Wet,
    /// Neither wet nor dry.
    Coordinated,
}

/// Which draws the board leaves open.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DrawPotential {
    pub flush_draw: bool,
    pub straight_draw: bool,
    pub pair_draw: bool,
}

/// Counts needed by both the texture and the draws.
struct BoardShape {
    max_suit: usize,
    connected: bool,
    paired: bool,
}

impl BoardShape {
    fn new(board: &[Card]) -> Self {
        let max_suit = Suit::suits()
            .iter()
            .map(|s| board.iter().filter(|c| c.suit == *s).count())
            .max()
            .unwrap_or(0);

        let mut values: Vec<Value> = board.iter().map(|c| c.value).collect();
        values.sort_unstable();

        // Neighbouring ranks within two of each other, a pair included.
        let connected = values
            .windows(2)
            .any(|w| w[1].rank_number() - w[0].rank_number() <= 2);

        let before = values.len();
        values.dedup();
        let paired = values.len() != before;

        Self {
            max_suit,
            connected,
            paired,
        }
    }
}

impl BoardTexture {
    /// ```
    /// use poker_equity::core::Hand;
    /// use poker_equity::holdem::BoardTexture;
    ///
    /// let board = Hand::new_from_str("Kc7d2s").unwrap();
    /// assert_eq!(BoardTexture::Dry, BoardTexture::from_board(&board[..]));
    /// ```
    pub fn from_board(board: &[Card]) -> Self {
        if board.len() < 3 {
            return BoardTexture::Preflop;
        }
        let shape = BoardShape::new(board);
        if shape.max_suit >= 3 || shape.connected {
            BoardTexture::Wet
        } else if !shape.paired {
            BoardTexture::Dry
        } else {
            BoardTexture::Coordinated
        }
    }
}

impl DrawPotential {
    pub fn from_board(board: &[Card]) -> Self {
        if board.len() < 3 {
            return Self {
                flush_draw: false,
                straight_draw: false,
                pair_draw: true,
            };
        }
        let shape = BoardShape::new(board);
        Self {
            flush_draw: shape.max_suit >= 3,
            straight_draw: shape.connected,
            pair_draw: board.len() < 5 || !shape.paired,
        }
    }
}
