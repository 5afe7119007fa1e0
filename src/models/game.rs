use crate::error::{ConfigError, GameError};
use crate::models::buttons::{ButtonContext, ButtonEntity, ButtonKind, buttons_for};
use crate::models::settings::Difficulty;

/// Number of pegs on the board.
pub const PEG_COUNT: usize = 3;

/// Index of the peg every game starts on.
pub const START_PEG: usize = 0;

/// A disc, identified by its rank. Rank 1 is the smallest disc.
pub type Disc = usize;

/// The three pegs. Each peg is a stack read bottom-to-top; the last element is the top disc.
pub type PegSet = [Vec<Disc>; PEG_COUNT];

/// Message shown over the board until the next click.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Notification {
    IllegalMove,
    Victory,
}

/// What a call to [`GameModel::move_disc`] did to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// A disc was transferred and the puzzle is not yet solved.
    Moved,
    /// A disc was transferred and the puzzle is now solved.
    Solved,
    /// Source and destination were the same peg; nothing happened.
    Unchanged,
}

/// What a call to [`GameModel::select_peg`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    Selected(usize),
    Deselected,
    /// A move was attempted from the previously selected peg.
    Attempted(Result<MoveOutcome, GameError>),
    /// Clicked an empty peg with nothing selected.
    Ignored,
}

/// Puzzle state for one Towers of Hanoi game.
///
/// The board only changes through [`move_disc`](Self::move_disc) (and the reset
/// operations), so every reachable state keeps each peg strictly decreasing from
/// bottom to top and holds every disc `1..=N` exactly once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameModel {
    pegs: PegSet,
    disc_count: usize,
    selected: Option<usize>,
    notification: Option<Notification>,
    highlighted: Option<ButtonKind>,
    moves: u32,
}

impl GameModel {
    /// Start a new game with the given difficulty.
    pub fn new(difficulty: Difficulty) -> Self {
        let disc_count = difficulty.discs();
        Self {
            pegs: Self::starting_pegs(disc_count),
            disc_count,
            selected: None,
            notification: None,
            highlighted: None,
            moves: 0,
        }
    }

    /// Start a new game with an explicit disc count, rejecting counts outside 3..=5.
    pub fn with_discs(disc_count: usize) -> Result<Self, ConfigError> {
        let mut game = Self::new(Difficulty::default());
        game.reset(disc_count)?;
        Ok(game)
    }

    fn starting_pegs(disc_count: usize) -> PegSet {
        [(1..=disc_count).rev().collect(), Vec::new(), Vec::new()]
    }

    fn check_peg(index: usize) -> Result<(), GameError> {
        if index < PEG_COUNT {
            Ok(())
        } else {
            Err(GameError::PegOutOfRange(index))
        }
    }

    /// Reinitialize the board for `disc_count` discs, all on the start peg.
    ///
    /// Counts outside 3..=5 are rejected and leave the game untouched.
    pub fn reset(&mut self, disc_count: usize) -> Result<(), ConfigError> {
        let valid = u8::try_from(disc_count)
            .ok()
            .and_then(|count| Difficulty::new(count).ok())
            .is_some();
        if !valid {
            return Err(ConfigError::DiscCount(disc_count));
        }

        self.pegs = Self::starting_pegs(disc_count);
        self.disc_count = disc_count;
        self.selected = None;
        self.notification = None;
        self.moves = 0;

        tracing::debug!("Board reset with {} discs", disc_count);
        Ok(())
    }

    /// Reset the board with the current disc count.
    pub fn restart(&mut self) {
        self.pegs = Self::starting_pegs(self.disc_count);
        self.selected = None;
        self.notification = None;
        self.moves = 0;
    }

    /// Handle a click on a peg.
    ///
    /// The first click on a non-empty peg selects it. A second click on a
    /// different peg attempts a move and clears the selection whatever the result;
    /// a second click on the same peg just deselects.
    pub fn select_peg(&mut self, index: usize) -> Result<SelectOutcome, GameError> {
        Self::check_peg(index)?;

        match self.selected {
            None if self.pegs[index].is_empty() => Ok(SelectOutcome::Ignored),
            None => {
                self.selected = Some(index);
                Ok(SelectOutcome::Selected(index))
            }
            Some(from) if from == index => {
                self.selected = None;
                Ok(SelectOutcome::Deselected)
            }
            Some(from) => {
                let result = self.move_disc(from, index);
                self.selected = None;
                Ok(SelectOutcome::Attempted(result))
            }
        }
    }

    /// Whether moving the top disc of `from` onto `to` obeys the stacking rule.
    pub fn is_move_legal(&self, from: usize, to: usize) -> bool {
        if from >= PEG_COUNT || to >= PEG_COUNT {
            return false;
        }
        match (self.pegs[from].last(), self.pegs[to].last()) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(moving), Some(target)) => moving < target,
        }
    }

    /// Move the top disc of `from` onto `to`.
    ///
    /// An illegal move sets the IllegalMove notification and leaves the pegs
    /// untouched. A legal move clears the selection and sets Victory when it
    /// solves the puzzle.
    pub fn move_disc(&mut self, from: usize, to: usize) -> Result<MoveOutcome, GameError> {
        Self::check_peg(from)?;
        Self::check_peg(to)?;

        if from == to {
            return Ok(MoveOutcome::Unchanged);
        }

        if !self.is_move_legal(from, to) {
            self.notification = Some(Notification::IllegalMove);
            return Err(GameError::IllegalMove { from, to });
        }

        if let Some(disc) = self.pegs[from].pop() {
            self.pegs[to].push(disc);
        }
        self.selected = None;
        self.moves += 1;

        if self.is_solved() {
            self.notification = Some(Notification::Victory);
            tracing::info!("Puzzle solved in {} moves", self.moves);
            Ok(MoveOutcome::Solved)
        } else {
            self.notification = None;
            Ok(MoveOutcome::Moved)
        }
    }

    /// All discs sit on a single peg other than the start peg.
    pub fn is_solved(&self) -> bool {
        self.pegs
            .iter()
            .enumerate()
            .any(|(index, peg)| index != START_PEG && peg.len() == self.disc_count)
    }

    /// Dismiss an illegal-move notification. Victory stays until the game is left.
    pub fn acknowledge_notification(&mut self) {
        if self.notification == Some(Notification::IllegalMove) {
            self.notification = None;
        }
    }

    pub fn pegs(&self) -> &PegSet {
        &self.pegs
    }

    pub fn disc_count(&self) -> usize {
        self.disc_count
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn notification(&self) -> Option<Notification> {
        self.notification
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Fewest moves that solve this puzzle: 2^N - 1.
    pub fn minimum_moves(&self) -> u32 {
        (1u32 << self.disc_count) - 1
    }

    pub fn active_buttons(&self) -> &'static [ButtonEntity] {
        buttons_for(ButtonContext::Game)
    }

    pub fn highlighted(&self) -> Option<ButtonKind> {
        self.highlighted
    }

    pub fn set_highlighted(&mut self, highlighted: Option<ButtonKind>) {
        self.highlighted = highlighted;
    }
}
