use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::BoardError;
use crate::types::*;

/// Piece placement. Pieces are keyed by id and indexed by square, so a
/// square can never hold two pieces and lookups by position are O(1).
///
/// Only the rule engine mutates a board after construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Piece>", into = "Vec<Piece>")]
pub struct Board {
    pieces: BTreeMap<PieceId, Piece>,
    squares: [Option<PieceId>; 64],
}

impl Board {
    pub fn empty() -> Self {
        Board {
            pieces: BTreeMap::new(),
            squares: [None; 64],
        }
    }

    /// Standard layout: Black on the first three rows, Red on the last three,
    /// twelve men each on the dark squares.
    pub fn initial() -> Self {
        let mut b = Board::empty();
        for (player, rows) in [(Player::Black, 0..3), (Player::Red, 5..8)] {
            for row in rows {
                for col in 0..BOARD_SIZE {
                    let pos = Position::new(row, col);
                    if pos.is_playable() {
                        b.insert_unchecked(player, Rank::Normal, pos);
                    }
                }
            }
        }
        b
    }

    /// Builds a board from explicit pieces, checking every placement invariant.
    pub fn from_pieces<I>(pieces: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = Piece>,
    {
        let mut b = Board::empty();
        for pc in pieces {
            b.check_placement(pc.owner, pc.position)?;
            if b.pieces.contains_key(&pc.id) {
                return Err(BoardError::DuplicateId(pc.id));
            }
            b.squares[pc.position.idx()] = Some(pc.id);
            b.pieces.insert(pc.id, pc);
        }
        Ok(b)
    }

    /// Adds a piece with a fresh id.
    pub fn place(&mut self, owner: Player, rank: Rank, pos: Position) -> Result<PieceId, BoardError> {
        self.check_placement(owner, pos)?;
        Ok(self.insert_unchecked(owner, rank, pos))
    }

    /// Parses an 8x8 text diagram, row 0 first. Cells: `.` empty,
    /// `r`/`R`/`X` red man/king/super king, `b`/`B`/`Y` black
    /// man/king/super king. Whitespace inside a line is ignored.
    ///
    /// Used by tests and tools to set up positions.
    ///
    /// # Panics
    /// Panics on a malformed diagram.
    pub fn from_diagram(diagram: &str) -> Self {
        let rows: Vec<&str> = diagram
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        assert!(rows.len() == 8, "Invalid diagram: expected 8 rows, got {}", rows.len());

        let mut b = Board::empty();
        for (row, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            assert!(cells.len() == 8, "Invalid diagram row {row}: {line:?}");
            for (col, ch) in cells.into_iter().enumerate() {
                let (owner, rank) = match ch {
                    '.' => continue,
                    'r' => (Player::Red, Rank::Normal),
                    'R' => (Player::Red, Rank::King),
                    'X' => (Player::Red, Rank::SuperKing),
                    'b' => (Player::Black, Rank::Normal),
                    'B' => (Player::Black, Rank::King),
                    'Y' => (Player::Black, Rank::SuperKing),
                    _ => panic!("Invalid piece char in diagram: {ch}"),
                };
                let pos = Position::new(row as i8, col as i8);
                if let Err(e) = b.place(owner, rank, pos) {
                    panic!("Invalid diagram: {e}");
                }
            }
        }
        b
    }

    pub fn piece_at(&self, pos: Position) -> Option<&Piece> {
        if !pos.is_on_board() {
            return None;
        }
        self.squares[pos.idx()].and_then(|id| self.pieces.get(&id))
    }

    pub fn is_vacant(&self, pos: Position) -> bool {
        self.squares[pos.idx()].is_none()
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(&id)
    }

    /// All pieces in id order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.values()
    }

    pub fn pieces_of(&self, player: Player) -> impl Iterator<Item = &Piece> {
        self.pieces.values().filter(move |p| p.owner == player)
    }

    pub fn count(&self, player: Player) -> usize {
        self.pieces_of(player).count()
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// The piece of `player` that is partway through a capture chain, if any.
    pub fn continuing_piece(&self, player: Player) -> Option<&Piece> {
        self.pieces_of(player).find(|p| p.must_continue_capture)
    }

    pub(crate) fn piece_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.pieces.get_mut(&id)
    }

    pub(crate) fn relocate(&mut self, id: PieceId, to: Position) {
        if let Some(pc) = self.pieces.get_mut(&id) {
            self.squares[pc.position.idx()] = None;
            self.squares[to.idx()] = Some(id);
            pc.position = to;
        }
    }

    pub(crate) fn remove(&mut self, id: PieceId) -> Option<Piece> {
        let pc = self.pieces.remove(&id)?;
        self.squares[pc.position.idx()] = None;
        Some(pc)
    }

    fn check_placement(&self, owner: Player, pos: Position) -> Result<(), BoardError> {
        if !pos.is_playable() {
            return Err(BoardError::UnplayableSquare(pos));
        }
        if !self.is_vacant(pos) {
            return Err(BoardError::Occupied(pos));
        }
        if self.count(owner) >= PIECES_PER_SIDE {
            return Err(BoardError::TooManyPieces(owner));
        }
        Ok(())
    }

    /// Lowest id not on the board. A board holds at most 24 pieces, so one
    /// of the first 25 ids is always free.
    fn free_id(&self) -> PieceId {
        (0..=(2 * PIECES_PER_SIDE) as u8)
            .map(PieceId)
            .find(|id| !self.pieces.contains_key(id))
            .unwrap_or(PieceId(u8::MAX))
    }

    fn insert_unchecked(&mut self, owner: Player, rank: Rank, pos: Position) -> PieceId {
        let id = self.free_id();
        self.squares[pos.idx()] = Some(id);
        self.pieces.insert(
            id,
            Piece {
                id,
                owner,
                rank,
                position: pos,
                must_continue_capture: false,
            },
        );
        id
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::initial()
    }
}

impl TryFrom<Vec<Piece>> for Board {
    type Error = BoardError;

    fn try_from(pieces: Vec<Piece>) -> Result<Self, Self::Error> {
        Board::from_pieces(pieces)
    }
}

impl From<Board> for Vec<Piece> {
    fn from(board: Board) -> Self {
        board.pieces.into_values().collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let ch = match self.piece_at(Position::new(row, col)) {
                    None => '.',
                    Some(pc) => match (pc.owner, pc.rank) {
                        (Player::Red, Rank::Normal) => 'r',
                        (Player::Red, Rank::King) => 'R',
                        (Player::Red, Rank::SuperKing) => 'X',
                        (Player::Black, Rank::Normal) => 'b',
                        (Player::Black, Rank::King) => 'B',
                        (Player::Black, Rank::SuperKing) => 'Y',
                    },
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
