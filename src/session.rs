//! Console game loop.
//!
//! A [`Session`] plays a fixed number of rounds against the dealer, reading
//! one token per prompt from any [`BufRead`] and writing the table to any
//! [`Write`]. The binary wires it to stdin and stdout; tests feed it scripted
//! input.

use std::io::{BufRead, Write};

use colored::Colorize;
use rand::Rng;
use tracing::{info, warn};

use crate::error::{ActionError, DealError, SessionError};
use crate::game::{GameState, Phase};
use crate::hand::BLACKJACK;
use crate::options::GameOptions;
use crate::result::{Outcome, RoundResult};

/// A move typed by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Hit,
    Stand,
}

impl Command {
    fn parse(token: &str) -> Option<Self> {
        match token {
            "h" => Some(Self::Hit),
            "s" => Some(Self::Stand),
            _ => None,
        }
    }
}

/// Tally of round outcomes over a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Rounds won by the player.
    pub wins: usize,
    /// Rounds lost by the player.
    pub losses: usize,
    /// Rounds ending in a draw.
    pub draws: usize,
}

impl SessionSummary {
    /// Counts one round outcome.
    pub const fn record(&mut self, outcome: Outcome) {
        if outcome.is_win() {
            self.wins += 1;
        } else if outcome.is_loss() {
            self.losses += 1;
        } else {
            self.draws += 1;
        }
    }

    /// Total rounds recorded.
    #[must_use]
    pub const fn rounds(&self) -> usize {
        self.wins + self.losses + self.draws
    }
}

/// A console blackjack session.
pub struct Session<I, O, R> {
    input: I,
    output: O,
    rng: R,
    options: GameOptions,
    state: GameState,
}

impl<I: BufRead, O: Write, R: Rng> Session<I, O, R> {
    /// Creates a session that has not shuffled yet.
    pub const fn new(input: I, output: O, rng: R, options: GameOptions) -> Self {
        Self::with_state(input, output, rng, options, GameState::new())
    }

    /// Creates a session that continues from an existing game state.
    ///
    /// [`Session::run`] always shuffles first; use [`Session::play_round`]
    /// to play from the given deck.
    pub const fn with_state(
        input: I,
        output: O,
        rng: R,
        options: GameOptions,
        state: GameState,
    ) -> Self {
        Self {
            input,
            output,
            rng,
            options,
            state,
        }
    }

    /// Returns the current game state.
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Consumes the session, returning its output sink.
    pub fn into_output(self) -> O {
        self.output
    }

    /// Shuffles a fresh deck and plays every round.
    ///
    /// # Errors
    ///
    /// Returns an error if input ends early, the console fails, or a
    /// transition fails even after a reshuffle.
    pub fn run(&mut self) -> Result<SessionSummary, SessionError> {
        self.reshuffle();

        let mut summary = SessionSummary::default();
        for round in 1..=self.options.rounds {
            info!(round, remaining = self.state.cards_remaining(), "starting round");
            let result = self.play_round()?;
            summary.record(result.outcome);
        }

        writeln!(
            self.output,
            "Session over: {} won, {} lost, {} drawn",
            summary.wins, summary.losses, summary.draws
        )?;
        Ok(summary)
    }

    /// Plays one round from the deal to the final hands.
    ///
    /// # Errors
    ///
    /// See [`Session::run`].
    pub fn play_round(&mut self) -> Result<RoundResult, SessionError> {
        self.state = self.deal()?;

        while self.state.phase() == Phase::PlayerTurn {
            self.print_table()?;
            let token = self.read_token()?;
            match Command::parse(&token) {
                Some(Command::Hit) => self.state = self.hit()?,
                Some(Command::Stand) => self.state = self.state.stand()?,
                None => {
                    let message = format!("\"{token}\" is not a valid option. Try again.");
                    writeln!(self.output, "{}\n", message.bright_yellow())?;
                }
            }
        }

        self.state = self.dealer_play()?;

        let (state, result) = self.state.end_game();
        self.state = state;
        self.print_result(&result)?;
        Ok(result)
    }

    fn reshuffle(&mut self) {
        self.state = self.state.shuffle(self.options.decks, &mut self.rng);
    }

    fn deal(&mut self) -> Result<GameState, SessionError> {
        match self.state.deal() {
            Err(DealError::NotEnoughCards) => {
                warn!(
                    remaining = self.state.cards_remaining(),
                    "deck exhausted before the deal, reshuffling"
                );
                self.reshuffle();
                Ok(self.state.deal()?)
            }
            dealt => Ok(dealt?),
        }
    }

    fn hit(&mut self) -> Result<GameState, SessionError> {
        match self.state.hit() {
            Err(ActionError::NoCards) => {
                warn!("deck exhausted mid-round, reshuffling");
                self.reshuffle();
                Ok(self.state.hit()?)
            }
            hit => Ok(hit?),
        }
    }

    fn dealer_play(&mut self) -> Result<GameState, SessionError> {
        match self.state.dealer_play(&self.options) {
            Err(ActionError::NoCards) => {
                warn!("deck exhausted during the dealer's turn, reshuffling");
                self.reshuffle();
                Ok(self.state.dealer_play(&self.options)?)
            }
            played => Ok(played?),
        }
    }

    /// Reads the first whitespace-delimited token of the next non-blank line.
    fn read_token(&mut self) -> Result<String, SessionError> {
        loop {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(SessionError::InputClosed);
            }
            if let Some(token) = line.split_whitespace().next() {
                return Ok(token.to_owned());
            }
        }
    }

    fn print_table(&mut self) -> Result<(), SessionError> {
        let score = self.state.player().score();
        let line = format!("Your current score is: {score}");
        if score > BLACKJACK {
            writeln!(self.output, "{}", line.red())?;
        } else {
            writeln!(self.output, "{}", line.green())?;
        }
        writeln!(self.output, "Player: {}", self.state.player())?;
        writeln!(self.output, "Dealer: {}", self.state.dealer().dealer_view())?;
        writeln!(self.output, "What will you do? (h)it, (s)tand")?;
        Ok(())
    }

    fn print_result(&mut self, result: &RoundResult) -> Result<(), SessionError> {
        writeln!(self.output, "==FINAL HANDS==")?;
        writeln!(
            self.output,
            "Player: {}\nScore: {}",
            result.player, result.player_score
        )?;
        writeln!(
            self.output,
            "Dealer: {}\nScore: {}",
            result.dealer, result.dealer_score
        )?;

        let message = result.outcome.message();
        let message = match result.outcome {
            outcome if outcome.is_win() => message.green(),
            outcome if outcome.is_loss() => message.red(),
            _ => message.bright_yellow(),
        };
        writeln!(self.output, "{message}\n")?;
        Ok(())
    }
}
