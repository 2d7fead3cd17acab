//! Round result types.

use crate::hand::Hand;

/// How a round ended, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player went over 21. Takes precedence over a dealer bust.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust,
    /// Player has the higher score.
    PlayerWins,
    /// Dealer has the higher score.
    DealerWins,
    /// Scores are equal.
    Draw,
}

impl Outcome {
    /// Resolves a round from the final scores.
    #[must_use]
    pub const fn resolve(player_score: u8, dealer_score: u8) -> Self {
        if player_score > 21 {
            Self::PlayerBust
        } else if dealer_score > 21 {
            Self::DealerBust
        } else if player_score > dealer_score {
            Self::PlayerWins
        } else if dealer_score > player_score {
            Self::DealerWins
        } else {
            Self::Draw
        }
    }

    /// Returns whether the player won the round.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::DealerBust | Self::PlayerWins)
    }

    /// Returns whether the player lost the round.
    #[must_use]
    pub const fn is_loss(self) -> bool {
        matches!(self, Self::PlayerBust | Self::DealerWins)
    }

    /// Message shown to the player.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::PlayerBust => "You busted! You lose",
            Self::DealerBust => "Dealer busted! You win",
            Self::PlayerWins => "You win",
            Self::DealerWins => "You lose",
            Self::Draw => "Draw!",
        }
    }
}

/// Final hands, scores and outcome of a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// The player's final hand.
    pub player: Hand,
    /// The dealer's final hand.
    pub dealer: Hand,
    /// The player's final score.
    pub player_score: u8,
    /// The dealer's final score.
    pub dealer_score: u8,
    /// The outcome of the round.
    pub outcome: Outcome,
}
