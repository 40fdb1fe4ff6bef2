//! Isolation board implementation.

use im::Vector;
use thiserror::Error;

use crate::core::{GameRng, Move, MoveList, PlayerId, PlayerMap};
use crate::rules::GameState;

/// Knight jumps, in the order moves are enumerated.
const KNIGHT_JUMPS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Errors from checked board operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board dimensions {width}x{height} are invalid")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("square {0} is off the board")]
    OutOfBounds(Move),

    #[error("square {0} is already blocked")]
    Blocked(Move),

    #[error("{mv} is not a legal move for {player}")]
    IllegalMove { player: PlayerId, mv: Move },
}

/// Isolation board.
///
/// Squares become blocked once a player has stood on them. Cells are held
/// in an `im::Vector` so that `forecast` clones in O(1) and only copies the
/// chunk it touches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IsolationBoard {
    width: u32,
    height: u32,
    /// Row-major, `true` once visited or pre-blocked.
    blocked: Vector<bool>,
    locations: PlayerMap<Option<Move>>,
    active: PlayerId,
    move_count: u32,
}

impl IsolationBoard {
    /// Empty board of the given size, first player to move.
    pub fn new(width: u32, height: u32) -> Result<Self, BoardError> {
        if width == 0 || height == 0 || width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(BoardError::InvalidDimensions { width, height });
        }

        Ok(Self {
            width,
            height,
            blocked: std::iter::repeat(false)
                .take(width as usize * height as usize)
                .collect(),
            locations: PlayerMap::default(),
            active: PlayerId::FIRST,
            move_count: 0,
        })
    }

    /// Number of moves played so far.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Check if `square` lies on the board.
    #[must_use]
    pub fn in_bounds(&self, square: Move) -> bool {
        square.row >= 0
            && square.col >= 0
            && (square.row as u32) < self.height
            && (square.col as u32) < self.width
    }

    /// Check if `square` is on the board and not blocked.
    #[must_use]
    pub fn is_blank(&self, square: Move) -> bool {
        self.in_bounds(square) && !self.blocked[self.cell(square)]
    }

    /// All blank squares in row-major order.
    pub fn blank_squares(&self) -> impl Iterator<Item = Move> + '_ {
        let width = self.width as i32;
        self.blocked
            .iter()
            .enumerate()
            .filter(|(_, &blocked)| !blocked)
            .map(move |(i, _)| Move::new(i as i32 / width, i as i32 % width))
    }

    /// Play `mv` for the active player, checking legality.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), BoardError> {
        if !self.in_bounds(mv) {
            return Err(BoardError::OutOfBounds(mv));
        }
        if !self.legal_moves().contains(&mv) {
            return Err(BoardError::IllegalMove {
                player: self.active,
                mv,
            });
        }
        self.play(mv);
        Ok(())
    }

    /// Play up to `plies` random legal moves.
    ///
    /// Stops early when the player to act is immobilized. Returns the number
    /// of moves played.
    pub fn play_random(&mut self, plies: usize, rng: &mut GameRng) -> usize {
        for played in 0..plies {
            let moves = self.legal_moves();
            match rng.choose(&moves) {
                Some(&mv) => self.play(mv),
                None => return played,
            }
        }
        plies
    }

    /// Move the active player without legality checks.
    fn play(&mut self, mv: Move) {
        debug_assert!(self.is_blank(mv), "play on non-blank square {mv}");
        let cell = self.cell(mv);
        self.blocked.set(cell, true);
        self.locations[self.active] = Some(mv);
        self.active = self.active.other();
        self.move_count += 1;
    }

    fn cell(&self, square: Move) -> usize {
        square.row as usize * self.width as usize + square.col as usize
    }
}

impl GameState for IsolationBoard {
    fn active_player(&self) -> PlayerId {
        self.active
    }

    fn legal_moves_for(&self, player: PlayerId) -> MoveList {
        match self.locations[player] {
            // Opening placement: anywhere blank.
            None => self.blank_squares().collect(),
            Some(from) => KNIGHT_JUMPS
                .iter()
                .map(|&(dr, dc)| from.offset(dr, dc))
                .filter(|&to| self.is_blank(to))
                .collect(),
        }
    }

    fn forecast(&self, mv: Move) -> Self {
        let mut next = self.clone();
        next.play(mv);
        next
    }

    fn player_location(&self, player: PlayerId) -> Option<Move> {
        self.locations[player]
    }

    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl std::fmt::Display for IsolationBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.height as i32 {
            for col in 0..self.width as i32 {
                let square = Move::new(row, col);
                let symbol = if self.locations[PlayerId::FIRST] == Some(square) {
                    '1'
                } else if self.locations[PlayerId::SECOND] == Some(square) {
                    '2'
                } else if self.blocked[self.cell(square)] {
                    '-'
                } else {
                    '.'
                };
                write!(f, " {}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Builder for setting up arbitrary positions.
///
/// ```
/// use isolation_search::core::{Move, PlayerId};
/// use isolation_search::games::isolation::IsolationBoardBuilder;
/// use isolation_search::rules::GameState;
///
/// let board = IsolationBoardBuilder::new()
///     .size(5, 5)
///     .place(PlayerId::FIRST, Move::new(0, 0))
///     .place(PlayerId::SECOND, Move::new(4, 4))
///     .build()
///     .unwrap();
///
/// assert_eq!(board.legal_moves().len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct IsolationBoardBuilder {
    width: u32,
    height: u32,
    placements: Vec<(PlayerId, Move)>,
    blocked: Vec<Move>,
}

impl Default for IsolationBoardBuilder {
    fn default() -> Self {
        Self {
            width: 7,
            height: 7,
            placements: Vec::new(),
            blocked: Vec::new(),
        }
    }
}

impl IsolationBoardBuilder {
    /// Start from an empty 7x7 board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Board width and height in squares.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Put `player` on `square`; the square becomes blocked.
    pub fn place(mut self, player: PlayerId, square: Move) -> Self {
        self.placements.push((player, square));
        self
    }

    /// Block `square` as if it had been visited.
    pub fn block(mut self, square: Move) -> Self {
        self.blocked.push(square);
        self
    }

    /// Build the board.
    pub fn build(self) -> Result<IsolationBoard, BoardError> {
        let mut board = IsolationBoard::new(self.width, self.height)?;

        for square in self.blocked {
            board.block(square)?;
        }

        for (player, square) in self.placements {
            board.block(square)?;
            board.locations[player] = Some(square);
            board.move_count += 1;
        }

        Ok(board)
    }
}

impl IsolationBoard {
    fn block(&mut self, square: Move) -> Result<(), BoardError> {
        if !self.in_bounds(square) {
            return Err(BoardError::OutOfBounds(square));
        }
        if !self.is_blank(square) {
            return Err(BoardError::Blocked(square));
        }
        let cell = self.cell(square);
        self.blocked.set(cell, true);
        Ok(())
    }
}
