//! Board state: the 8x8 grid plus castling and en passant bookkeeping.
//!
//! Row 0 is black's back rank, row 7 is white's; columns run left to right
//! from white's perspective. `Board` is pure data with accessors; all move
//! semantics live in [`crate::rules`].

use std::fmt;

use serde::ser::SerializeSeq;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{Error, Result};

/// The two sides in a chess game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Index for array lookups: White=0, Black=1.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row holding this side's pieces at the start of the game.
    pub const fn back_rank(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Row holding this side's pawns at the start of the game.
    pub const fn pawn_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row delta for a forward pawn step.
    pub const fn pawn_direction(self) -> i32 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row on which this side's pawns promote.
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The six piece kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

/// An immutable piece value. Pieces are replaced, never mutated in place.
///
/// Serializes as `{"kind": "pawn", "player": "white"}`, the cell format of
/// the wire protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    #[serde(rename = "player")]
    pub color: Color,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }
}

/// A board coordinate. Construction enforces both components in `0..8`, so
/// a `Square` can always index the grid safely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Checked constructor for untrusted wire coordinates.
    pub fn try_new(row: i64, col: i64) -> Result<Self> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Ok(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(Error::OutOfBounds { row, col })
        }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The two castling wings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    /// Index for array lookups: Kingside=0, Queenside=1.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Home column of the rook on this wing.
    pub const fn rook_col(self) -> u8 {
        match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 0,
        }
    }
}

/// Home column of the king.
pub(crate) const KING_COL: u8 = 4;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// A complete board: 64 optional pieces plus the auxiliary state needed for
/// castling and en passant.
///
/// `Clone` produces a fully independent copy, which is how hypothetical
/// moves are simulated without touching the authoritative board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub(crate) fields: [[Option<Piece>; 8]; 8],
    /// Indexed by [`Color::index`]. Monotonic for the life of a game.
    pub(crate) king_moved: [bool; 2],
    /// Indexed by [`Color::index`] then [`CastleSide::index`]. Monotonic.
    pub(crate) rook_moved: [[bool; 2]; 2],
    /// Square skipped by the last double pawn push, capturable for exactly
    /// one subsequent move.
    pub(crate) en_passant_target: Option<Square>,
}

impl Board {
    /// Standard starting placement: pawns on rows 1 and 6, back ranks
    /// rook-knight-bishop-queen-king-bishop-knight-rook.
    pub fn new() -> Self {
        let mut fields: [[Option<Piece>; 8]; 8] = Default::default();
        for col in 0..8 {
            fields[0][col] = Some(Piece::new(BACK_RANK[col], Color::Black));
            fields[1][col] = Some(Piece::new(PieceKind::Pawn, Color::Black));
            fields[6][col] = Some(Piece::new(PieceKind::Pawn, Color::White));
            fields[7][col] = Some(Piece::new(BACK_RANK[col], Color::White));
        }
        Self {
            fields,
            king_moved: [false; 2],
            rook_moved: [[false; 2]; 2],
            en_passant_target: None,
        }
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.fields[square.row() as usize][square.col() as usize]
    }

    pub(crate) fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.fields[square.row() as usize][square.col() as usize] = piece;
    }

    pub fn king_moved(&self, color: Color) -> bool {
        self.king_moved[color.index()]
    }

    pub fn rook_moved(&self, color: Color, side: CastleSide) -> bool {
        self.rook_moved[color.index()][side.index()]
    }

    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Read-only projection of the grid, row-major. UI mirrors render from
    /// this; legality always goes through the engine.
    pub fn grid(&self) -> &[[Option<Piece>; 8]; 8] {
        &self.fields
    }

    pub fn piece_count(&self) -> u32 {
        self.fields
            .iter()
            .flatten()
            .filter(|cell| cell.is_some())
            .count() as u32
    }

    /// All squares in row-major order.
    pub fn squares() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square { row, col }))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializes only the 8x8 grid, row-major, each cell `null` or
/// `{kind, player}`. The castling/en-passant bookkeeping is engine-internal
/// and never crosses the wire.
impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut rows = serializer.serialize_seq(Some(8))?;
        for row in &self.fields {
            rows.serialize_element(row)?;
        }
        rows.end()
    }
}
