use std::fmt;

use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: i8 = 8;

/// Pieces each side starts with.
pub const PIECES_PER_SIDE: usize = 12;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Red,
    Black,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::Red, Player::Black];

    pub fn other(self) -> Player {
        match self {
            Player::Red => Player::Black,
            Player::Black => Player::Red,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Player::Red => 0,
            Player::Black => 1,
        }
    }

    /// Row delta of a forward step. Black starts on rows 0..3 and moves
    /// down the board, Red starts on rows 5..8 and moves up.
    pub fn forward(self) -> i8 {
        match self {
            Player::Red => -1,
            Player::Black => 1,
        }
    }

    /// The far row on which a Normal piece is crowned.
    pub fn promotion_row(self) -> i8 {
        match self {
            Player::Red => 0,
            Player::Black => BOARD_SIZE - 1,
        }
    }

    /// The row this side's back rank sits on.
    pub fn home_row(self) -> i8 {
        self.other().promotion_row()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Red => write!(f, "red"),
            Player::Black => write!(f, "black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Rank {
    Normal,
    King,
    SuperKing,
}

impl Rank {
    /// Kings and super kings move and capture in all four diagonal directions.
    pub fn is_crowned(self) -> bool {
        !matches!(self, Rank::Normal)
    }
}

/// A square on the 8x8 board. Row 0 is Black's home row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    /// # Panics
    /// Panics if the coordinates are off the board. Use [`Position::try_new`]
    /// for untrusted input.
    pub fn new(row: i8, col: i8) -> Self {
        Self::try_new(row, col)
            .unwrap_or_else(|| panic!("position ({row}, {col}) is off the board"))
    }

    pub fn try_new(row: i8, col: i8) -> Option<Self> {
        if (0..BOARD_SIZE).contains(&row) && (0..BOARD_SIZE).contains(&col) {
            Some(Self { row, col })
        } else {
            None
        }
    }

    pub fn is_on_board(self) -> bool {
        (0..BOARD_SIZE).contains(&self.row) && (0..BOARD_SIZE).contains(&self.col)
    }

    /// Only the dark squares, where `row + col` is odd, are ever occupied.
    pub fn is_playable(self) -> bool {
        self.is_on_board() && (self.row + self.col) % 2 == 1
    }

    pub fn offset(self, dr: i8, dc: i8) -> Option<Position> {
        Self::try_new(self.row + dr, self.col + dc)
    }

    /// Index into a 64-entry row-major array.
    pub fn idx(self) -> usize {
        (self.row as usize) * (BOARD_SIZE as usize) + self.col as usize
    }

    /// Number of diagonal steps to `other`, or `None` if the two squares
    /// do not share a diagonal.
    pub fn diagonal_distance(self, other: Position) -> Option<i8> {
        let dr = (other.row - self.row).abs();
        let dc = (other.col - self.col).abs();
        (dr == dc && dr > 0).then_some(dr)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PieceId(pub u8);

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Piece {
    pub id: PieceId,
    pub owner: Player,
    pub rank: Rank,
    pub position: Position,
    /// Set while this piece is in the middle of a capture chain and still
    /// has a capture available; the side to move has not changed.
    #[serde(default)]
    pub must_continue_capture: bool,
}

/// One complete turn: a single diagonal step, or a whole capture chain.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Move {
    pub from: Position,
    pub to: Position,
    /// Every landing square of a capture chain in order, ending with `to`.
    /// `None` for a non-capturing step.
    pub capture_chain: Option<Vec<Position>>,
}

impl Move {
    pub fn step(from: Position, to: Position) -> Self {
        Self {
            from,
            to,
            capture_chain: None,
        }
    }

    /// # Panics
    /// Panics if `landings` is empty.
    pub fn chain(from: Position, landings: Vec<Position>) -> Self {
        let to = *landings.last().expect("a capture chain has at least one landing");
        Self {
            from,
            to,
            capture_chain: Some(landings),
        }
    }

    pub fn is_capture(&self) -> bool {
        self.capture_chain.is_some()
    }

    /// Number of pieces this turn removes.
    pub fn captures(&self) -> usize {
        self.capture_chain.as_ref().map_or(0, Vec::len)
    }

    /// The `(from, to)` pairs this turn is made of, in play order.
    pub fn steps(&self) -> Vec<(Position, Position)> {
        match &self.capture_chain {
            None => vec![(self.from, self.to)],
            Some(landings) => {
                let mut out = Vec::with_capacity(landings.len());
                let mut from = self.from;
                for &to in landings {
                    out.push((from, to));
                    from = to;
                }
                out
            }
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.from)?;
        match &self.capture_chain {
            None => write!(f, "-{}", self.to),
            Some(landings) => {
                for sq in landings {
                    write!(f, "x{sq}")?;
                }
                Ok(())
            }
        }
    }
}

/// The four diagonal directions as (row, col) deltas.
pub const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
